use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    start: Position,
    end: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, start: Position, end: Option<Position>) -> Self {
        Error {
            internal_error: error_impl,
            start,
            end,
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.start
    }

    pub fn get_end_position(&self) -> Option<&Position> {
        self.end.as_ref()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacterError",
            ErrorImpl::IllegalFloatingPoint => "IllegalFloatingPointError",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_details(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::Suggestion(String::from(
                "only digits, `.`, spaces, tabs and `+ - * / ( )` are allowed",
            )),
            ErrorImpl::IllegalFloatingPoint => ErrorTip::None,
            ErrorImpl::NumberParseError { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
        }
    }

    pub fn as_string(&self) -> String {
        format!(
            "{}: {}\nFile {}, line {}",
            self.get_error_name(),
            self.get_details(),
            self.start.filename,
            self.start.line + 1
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
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
    #[error("'{character}'")]
    IllegalCharacter { character: char },
    #[error("Two floating points in a same float")]
    IllegalFloatingPoint,
    #[error("cannot represent {literal:?}")]
    NumberParseError { literal: String },
}
