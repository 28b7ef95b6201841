use std::fs;
use std::path::{Path, PathBuf};

use crate::BrikError;
use crate::ast::SymbolTable;
use crate::lexer::Tokenizer;
use crate::parser::Parser;

mod access;
mod conversion;

/// Typed access to a parsed .brik document.
///
/// Wraps the resolved symbol table and offers dot-path lookups with
/// conversion into plain Rust types.
#[derive(Debug)]
pub struct BrikConfig {
    symbols: SymbolTable,
}

impl BrikConfig {
    /// Load a .brik config file.
    ///
    /// A missing or unreadable file yields `FileError` without the parser
    /// ever running.
    ///
    /// # Example
    /// ```ignore
    /// let config = BrikConfig::from_file("tetris.brik")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BrikError> {
        let resolved = expand_path(path.as_ref());

        let content = fs::read_to_string(&resolved).map_err(|e| BrikError::FileError {
            message: format!("Failed to read file: {}", e),
            path: resolved.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
        })?;

        Self::from_str(&content)
    }

    /// Parse a .brik document already held in memory.
    pub fn from_str(source: &str) -> Result<Self, BrikError> {
        let tokens = Tokenizer::new(source).tokenize();
        let symbols = Parser::new(tokens).parse()?;
        Ok(BrikConfig { symbols })
    }

    /// Borrow the resolved symbol table.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}

/// Expand a leading `~/` to the user's home directory.
fn expand_path(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
