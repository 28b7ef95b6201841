use indexmap::IndexMap;

use super::*;
use crate::ast::Value;

fn token_text(tok: Option<&Token>) -> String {
    tok.map_or_else(|| "end of input".to_string(), |t| format!("'{}'", t))
}

/// One `identifier = value` statement, used both at top level and inside
/// blocks. The binding is returned rather than inserted so each caller can
/// target its own mapping.
pub(super) fn parse_assignment(parser: &mut Parser) -> Result<(String, Value), BrikError> {
    let key = match parser.bump() {
        Some(Token::Ident(k)) => k,
        other => {
            return Err(BrikError::syntax(format!(
                "Expected identifier, found {}",
                token_text(other.as_ref())
            )));
        }
    };

    match parser.bump() {
        Some(Token::Equals) => {}
        other => {
            return Err(BrikError::syntax_with_hint(
                format!("Expected '=', found {}", token_text(other.as_ref())),
                format!("Every entry is written as `{} = <value>`", key),
            ));
        }
    }

    let val = parse_value(parser)?;
    Ok((key, val))
}

pub(super) fn parse_value(parser: &mut Parser) -> Result<Value, BrikError> {
    match parser.peek() {
        Some(Token::Str(_)) => parse_string_value(parser),
        Some(Token::Int(_)) | Some(Token::Float(_)) => parse_number_value(parser),
        Some(Token::LBrace) => parse_block(parser),
        Some(Token::LBracket) => parse_list(parser),
        other => Err(BrikError::syntax(format!(
            "Expected a value, found {}",
            token_text(other)
        ))),
    }
}

fn parse_string_value(parser: &mut Parser) -> Result<Value, BrikError> {
    if let Some(Token::Str(s)) = parser.bump() {
        Ok(Value::Str(s))
    } else {
        unreachable!()
    }
}

fn parse_number_value(parser: &mut Parser) -> Result<Value, BrikError> {
    match parser.bump() {
        Some(Token::Int(n)) => Ok(Value::Int(n)),
        Some(Token::Float(n)) => Ok(Value::Float(n)),
        _ => unreachable!(),
    }
}

/// `{ ident = value ... }` into a fresh insertion-ordered mapping. Commas
/// between pairs are optional separators.
///
/// A missing closing brace at end of input ends the block.
fn parse_block(parser: &mut Parser) -> Result<Value, BrikError> {
    parser.bump(); // consume {
    let mut entries = IndexMap::new();

    while !matches!(parser.peek(), None | Some(Token::RBrace)) {
        if matches!(parser.peek(), Some(Token::Comma)) {
            parser.bump();
            continue;
        }
        let (key, val) = parse_assignment(parser)?;
        entries.insert(key, val);
    }

    parser.bump(); // consume }, if present
    Ok(Value::Block(entries))
}

/// `[ element, ... ]` where an identifier element is replaced by a copy of
/// its current top-level binding. Commas separate; trailing or doubled
/// commas are tolerated. A missing closing bracket at end of input ends
/// the list.
fn parse_list(parser: &mut Parser) -> Result<Value, BrikError> {
    parser.bump(); // consume [
    let mut items = Vec::new();

    loop {
        match parser.peek() {
            None | Some(Token::RBracket) => break,
            Some(Token::Ident(name)) => {
                let name = name.clone();
                parser.bump();
                let val = parser.lookup(&name).cloned().ok_or_else(|| {
                    BrikError::UndefinedName {
                        name: name.clone(),
                        hint: Some("Identifiers must be defined before they are referenced".into()),
                    }
                })?;
                items.push(val);
            }
            _ => items.push(parse_value(parser)?),
        }

        while matches!(parser.peek(), Some(Token::Comma)) {
            parser.bump();
        }
    }

    parser.bump(); // consume ], if present
    Ok(Value::List(items))
}
