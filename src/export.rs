use std::fs;

use crate::BrikError;
use crate::ast::{SymbolTable, Value};
use crate::lexer::Tokenizer;
use crate::parser::Parser;

/// Render a resolved symbol table as pretty-printed JSON.
///
/// Key order follows insertion order, both at the top level and inside
/// blocks. List identifier references were already resolved at parse time,
/// so they serialize as the literals they copied.
///
/// # Examples
/// ```
/// use brik_cfg::{export, parse};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let symbols = parse("width = 10")?;
/// let json = export::symbols_to_json(&symbols)?;
/// assert!(json.contains("\"width\": 10"));
/// # Ok(())
/// # }
/// ```
pub fn symbols_to_json(symbols: &SymbolTable) -> Result<String, BrikError> {
    serde_json::to_string_pretty(symbols).map_err(|e| BrikError::TypeError {
        message: format!("Failed to serialize symbol table: {}", e),
        hint: None,
    })
}

/// Read, parse, and export a .brik file to JSON in one call.
///
/// # Errors
/// Returns `FileError` if the file cannot be read, or the parse error if the
/// document is invalid.
pub fn export_brik_file(path: &str) -> Result<String, BrikError> {
    let input = fs::read_to_string(path).map_err(|e| BrikError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.to_string(),
        hint: Some("Check that the file exists and is readable".into()),
    })?;

    let tokens = Tokenizer::new(&input).tokenize();
    let symbols = Parser::new(tokens).parse()?;
    symbols_to_json(&symbols)
}

/// Render a symbol table back to brik source text, one top-level
/// `identifier = value` statement per line.
pub fn symbols_to_brik(symbols: &SymbolTable) -> String {
    let mut out = String::new();
    for (key, value) in symbols {
        out.push_str(key);
        out.push_str(" = ");
        write_value(&mut out, value);
        out.push('\n');
    }
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Float(n) => {
            // Always keep a decimal point so the literal re-lexes as a float.
            if n.fract() == 0.0 {
                out.push_str(&format!("{:.1}", n));
            } else {
                out.push_str(&n.to_string());
            }
        }
        Value::Str(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Value::Block(entries) => {
            out.push_str("{ ");
            for (i, (key, val)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(" = ");
                write_value(out, val);
            }
            out.push_str(" }");
        }
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
    }
}
