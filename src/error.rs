use std::fmt;

/// The main error type for brik parsing and configuration access.
#[derive(Debug, Clone, PartialEq)]
pub enum BrikError {
    /// Structural grammar violation. The message cites the offending token
    /// text (or "end of input" when the token stream ran out mid-statement).
    SyntaxError {
        message: String,
        hint: Option<String>,
    },
    /// A list element referenced an identifier with no binding in the
    /// symbol table at the point of reference.
    UndefinedName {
        name: String,
        hint: Option<String>,
    },
    /// A config value could not be converted to the requested Rust type.
    TypeError {
        message: String,
        hint: Option<String>,
    },
    /// A dot-path lookup found no entry.
    KeyNotFound {
        path: String,
    },
    /// The source document could not be read.
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
    },
}

impl BrikError {
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        BrikError::SyntaxError { message: message.into(), hint: None }
    }

    pub(crate) fn syntax_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        BrikError::SyntaxError { message: message.into(), hint: Some(hint.into()) }
    }
}

impl fmt::Display for BrikError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrikError::SyntaxError { message, hint } =>
                write!(f, "[BRIK] Syntax Error: {}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
                ),
            BrikError::UndefinedName { name, hint } =>
                write!(f, "[BRIK] Undefined Name '{}'{}",
                    name,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
                ),
            BrikError::TypeError { message, hint } =>
                write!(f, "[BRIK] Type Error: {}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
                ),
            BrikError::KeyNotFound { path } =>
                write!(f, "[BRIK] Key '{}' not found", path),
            BrikError::FileError { message, path, hint } =>
                write!(f, "[BRIK] File Error '{}': {}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
                ),
        }
    }
}

impl std::error::Error for BrikError {}
