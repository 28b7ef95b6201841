use crate::BrikError;
use crate::ast::SymbolTable;
use crate::lexer::Token;

mod value;

/// Recursive-descent parser over a token sequence.
///
/// Holds a forward-only cursor and the symbol table being built. Each parse
/// run starts from an empty table; a failed parse yields no table at all.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    symbols: SymbolTable,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            symbols: SymbolTable::new(),
        }
    }

    /// Consume every top-level `identifier = value` statement and return the
    /// resolved symbol table.
    pub fn parse(mut self) -> Result<SymbolTable, BrikError> {
        while self.peek().is_some() {
            let (key, val) = value::parse_assignment(&mut self)?;
            self.symbols.insert(key, val);
        }
        Ok(self.symbols)
    }

    pub(crate) fn bump(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<&crate::ast::Value> {
        self.symbols.get(name)
    }
}

#[cfg(test)]
mod tests;
