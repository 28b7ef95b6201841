use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // --- literals ---
    Ident(String),
    Str(String),
    Int(i64),
    Float(f64),

    // --- structure ---
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Equals,
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(name) => write!(f, "{}", name),
            Token::Str(s) => write!(f, "{}", s),
            Token::Int(n) => write!(f, "{}", n),
            Token::Float(n) => write!(f, "{}", n),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Equals => write!(f, "="),
            Token::Comma => write!(f, ","),
        }
    }
}

// Alternation order is the match priority: string, number, operator, identifier.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""([^"]*)"|(\d+(?:\.\d+)?)|([{}\[\]=,])|([A-Za-z_@][A-Za-z0-9_]*)"#)
        .expect("token pattern is valid")
});

/// Splits brik source text into a flat token sequence.
///
/// Scanning is line-oriented and lenient: blank lines and `#` comment lines
/// contribute nothing, and characters matching no token pattern are dropped
/// without error. Tokenization itself never fails.
pub struct Tokenizer<'a> {
    source: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Tokenizer { source }
    }

    pub fn tokenize(&self) -> Vec<Token> {
        let mut tokens = Vec::new();

        for line in self.source.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            for caps in TOKEN_RE.captures_iter(line) {
                if let Some(s) = caps.get(1) {
                    tokens.push(Token::Str(s.as_str().to_string()));
                } else if let Some(n) = caps.get(2) {
                    tokens.push(number_token(n.as_str()));
                } else if let Some(op) = caps.get(3) {
                    tokens.push(operator_token(op.as_str()));
                } else if let Some(name) = caps.get(4) {
                    tokens.push(Token::Ident(name.as_str().to_string()));
                }
            }
        }

        tokens
    }
}

fn number_token(text: &str) -> Token {
    if !text.contains('.') {
        if let Ok(n) = text.parse::<i64>() {
            return Token::Int(n);
        }
        // Digit runs that overflow i64 degrade to a float.
    }
    Token::Float(text.parse().unwrap_or_default())
}

fn operator_token(text: &str) -> Token {
    match text {
        "{" => Token::LBrace,
        "}" => Token::RBrace,
        "[" => Token::LBracket,
        "]" => Token::RBracket,
        "=" => Token::Equals,
        "," => Token::Comma,
        other => unreachable!("operator pattern matched '{}'", other),
    }
}
