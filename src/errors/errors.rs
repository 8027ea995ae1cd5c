use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A structural failure: the stage that raised it produced no usable output.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::TrailingTokens { .. } => "TrailingTokens",
            ErrorImpl::Interchange { .. } => "Interchange",
            ErrorImpl::SourceTooLarge { .. } => "SourceTooLarge",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "Input ended while expecting {}",
                expected
            )),
            ErrorImpl::TrailingTokens { token } => ErrorTip::Suggestion(format!(
                "`{}` does not start a statement, everything from here on was left unparsed",
                token
            )),
            ErrorImpl::Interchange { message } => {
                ErrorTip::Suggestion(format!("Invalid syntax tree document: {}", message))
            }
            ErrorImpl::SourceTooLarge { length } => ErrorTip::Suggestion(format!(
                "Source is {} bytes, offsets are limited to {} bytes",
                length,
                u32::MAX
            )),
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnrecognisedToken { .. })
    }

    pub fn is_syntax(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnexpectedToken { .. }
                | ErrorImpl::UnexpectedTokenDetailed { .. }
                | ErrorImpl::UnexpectedEndOfInput { .. }
                | ErrorImpl::TrailingTokens { .. }
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("unparsed input starting at {token:?}")]
    TrailingTokens { token: String },
    #[error("syntax tree interchange failed: {message}")]
    Interchange { message: String },
    #[error("source of {length} bytes is too large to address")]
    SourceTooLarge { length: usize },
}

/// Advisory findings of the semantic pass. Never stop the analysis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticWarning {
    #[error("identifier {name:?} is not declared (used in scope {scope:?})")]
    Undeclared { name: String, scope: String },
    #[error("duplicate declaration of {name:?} in scope {scope:?}")]
    DuplicateDeclaration { name: String, scope: String },
}

/// Advisory findings of TAC generation. The offending node contributes no
/// instructions and generation carries on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoweringWarning {
    #[error("unsupported node kind {kind}{}", .value.as_ref().map(|v| format!(" ({v})")).unwrap_or_default())]
    UnsupportedNode { kind: String, value: Option<String> },
    #[error("malformed {kind} node: {reason}")]
    MalformedNode { kind: String, reason: String },
}
