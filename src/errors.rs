//! Error types for signature parsing.
//!
//! Every failure the parser can report is a [`ParseError`] variant carrying
//! the substring that could not be interpreted. Each variant maps to a stable
//! [`ErrorCode`] so callers (and the JSON output) can match on failures
//! without string comparison.
//!
//! # Error Codes
//!
//! - E010: no opening parenthesis
//! - E011: more than one opening parenthesis
//! - E012: closing parenthesis anywhere but the end
//! - E013: prefix does not have two or three tokens
//! - E014: empty token in the prefix
//! - E015: argument fragment is not a `type name` pair
//! - E016: a hand-built record whose text form does not parse back to it

use serde::Serialize;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// No `(` in the signature
    pub const MISSING_OPEN_PAREN: ErrorCode = ErrorCode("E010");
    /// A second `(` in the signature
    pub const UNEXPECTED_OPEN_PAREN: ErrorCode = ErrorCode("E011");
    /// A `)` that does not terminate the argument list
    pub const UNEXPECTED_CLOSE_PAREN: ErrorCode = ErrorCode("E012");
    /// Prefix token count outside {2, 3}
    pub const PREFIX_TOKEN_COUNT: ErrorCode = ErrorCode("E013");
    /// Empty modifier, return type or method name
    pub const EMPTY_TOKEN: ErrorCode = ErrorCode("E014");
    /// Argument fragment without exactly one separating space
    pub const MALFORMED_ARGUMENT: ErrorCode = ErrorCode("E015");
    /// Record that does not survive rendering and re-parsing
    pub const NOT_REPARSEABLE: ErrorCode = ErrorCode("E016");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reasons a signature string cannot be turned into a
/// [`MethodSignature`](crate::core::MethodSignature).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing '(' in signature '{signature}'")]
    MissingOpenParen { signature: String },

    #[error("unexpected '(' in argument list '{arguments}'")]
    UnexpectedOpenParen { arguments: String },

    #[error("unexpected ')' in argument list '{arguments}'")]
    UnexpectedCloseParen { arguments: String },

    #[error("expected 2 or 3 space-separated tokens before '(', found {count} in '{prefix}'")]
    PrefixTokenCount { prefix: String, count: usize },

    #[error("empty {position} in '{prefix}'")]
    EmptyToken {
        prefix: String,
        position: TokenPosition,
    },

    #[error("argument '{fragment}' is not a 'type name' pair")]
    MalformedArgument { fragment: String },

    #[error("signature renders as '{rendered}', which parses to a different record")]
    NotReparseable { rendered: String },
}

/// Which prefix slot turned out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPosition {
    AccessModifier,
    ReturnType,
    MethodName,
}

impl std::fmt::Display for TokenPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TokenPosition::AccessModifier => "access modifier",
            TokenPosition::ReturnType => "return type",
            TokenPosition::MethodName => "method name",
        };
        f.write_str(label)
    }
}

impl ParseError {
    /// Error code for this failure.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::MissingOpenParen { .. } => ErrorCode::MISSING_OPEN_PAREN,
            ParseError::UnexpectedOpenParen { .. } => ErrorCode::UNEXPECTED_OPEN_PAREN,
            ParseError::UnexpectedCloseParen { .. } => ErrorCode::UNEXPECTED_CLOSE_PAREN,
            ParseError::PrefixTokenCount { .. } => ErrorCode::PREFIX_TOKEN_COUNT,
            ParseError::EmptyToken { .. } => ErrorCode::EMPTY_TOKEN,
            ParseError::MalformedArgument { .. } => ErrorCode::MALFORMED_ARGUMENT,
            ParseError::NotReparseable { .. } => ErrorCode::NOT_REPARSEABLE,
        }
    }

    /// The substring of the input the parser rejected.
    #[must_use]
    pub fn offending(&self) -> &str {
        match self {
            ParseError::MissingOpenParen { signature } => signature,
            ParseError::UnexpectedOpenParen { arguments }
            | ParseError::UnexpectedCloseParen { arguments } => arguments,
            ParseError::PrefixTokenCount { prefix, .. } | ParseError::EmptyToken { prefix, .. } => {
                prefix
            }
            ParseError::MalformedArgument { fragment } => fragment,
            ParseError::NotReparseable { rendered } => rendered,
        }
    }
}
