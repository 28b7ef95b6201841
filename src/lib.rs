pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;

pub use ast::{SymbolTable, Value};
pub use config::BrikConfig;
pub use error::BrikError;

/// Tokenize and parse a .brik document in one call.
///
/// # Examples
/// ```
/// use brik_cfg::{Value, parse};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let symbols = parse("lives = 3")?;
/// assert_eq!(symbols["lives"], Value::Int(3));
/// # Ok(())
/// # }
/// ```
pub fn parse(source: &str) -> Result<SymbolTable, BrikError> {
    let tokens = lexer::Tokenizer::new(source).tokenize();
    parser::Parser::new(tokens).parse()
}
