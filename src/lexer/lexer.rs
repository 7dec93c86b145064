use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{
    Token, TokenKind, TokenValue, DECIMAL_POINT, DIGITS, SINGLE_CHAR_LOOKUP, WHITESPACE,
};

#[derive(Debug, Clone)]
pub struct Lexer {
    filename: Rc<String>,
    text: Rc<[char]>,
    pos: Position,
    current_char: Option<char>,
}

impl Lexer {
    pub fn new(filename: &str, text: &str) -> Lexer {
        let filename = Rc::new(String::from(filename));
        let text: Rc<[char]> = Rc::from(text.chars().collect::<Vec<char>>());

        trace!(target: "upita::lexer", chars = text.len(), "Creating new Lexer");

        let mut lexer = Lexer {
            pos: Position::start(Rc::clone(&filename), Rc::clone(&text)),
            filename,
            text,
            current_char: None,
        };
        lexer.advance();
        lexer
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    pub fn current_char(&self) -> Option<char> {
        self.current_char
    }

    pub fn advance(&mut self) {
        self.pos.advance(self.current_char);
        self.current_char = usize::try_from(self.pos.index)
            .ok()
            .and_then(|index| self.text.get(index).copied());
    }

    /// Drains the whole input. Returns every token followed by `EOF`, or the
    /// first error met; tokens produced before an error are discarded.
    pub fn make_tokens(&mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = vec![];

        while let Some(current) = self.current_char {
            if WHITESPACE.contains(&current) {
                self.advance();
            } else if DIGITS.contains(current) {
                let token = self.make_number()?;
                trace!(target: "upita::lexer", %token, "Produced token");
                tokens.push(token);
            } else if let Some(kind) = SINGLE_CHAR_LOOKUP.get(&current) {
                let token = MK_TOKEN!(*kind);
                trace!(target: "upita::lexer", %token, "Produced token");
                tokens.push(token);
                self.advance();
            } else {
                let start = self.pos.copy();
                self.advance();
                let error = Error::new(
                    ErrorImpl::IllegalCharacter { character: current },
                    start,
                    Some(self.pos.copy()),
                );
                debug!(target: "upita::lexer", error = %error.as_string(), "Illegal character");
                return Err(error);
            }
        }

        tokens.push(MK_TOKEN!(TokenKind::EOF));
        debug!(target: "upita::lexer", count = tokens.len(), "Finished tokenizing");
        Ok(tokens)
    }

    /// Scans an INT or FLOAT literal starting at the current digit.
    pub fn make_number(&mut self) -> Result<Token, Error> {
        let start = self.pos.copy();
        let mut literal = String::new();
        let mut dot_count = 0;

        while let Some(current) = self.current_char {
            if current == DECIMAL_POINT {
                if dot_count >= 1 {
                    let mut end = self.pos.copy();
                    end.advance(Some(current));
                    let error = Error::new(ErrorImpl::IllegalFloatingPoint, start, Some(end));
                    debug!(target: "upita::lexer", error = %error.as_string(), "Malformed float");
                    return Err(error);
                }
                dot_count += 1;
            } else if !DIGITS.contains(current) {
                break;
            }

            literal.push(current);
            self.advance();
        }

        let number_error = || {
            Error::new(
                ErrorImpl::NumberParseError {
                    literal: literal.clone(),
                },
                start.copy(),
                Some(self.pos.copy()),
            )
        };

        if dot_count == 0 {
            let value = literal.parse::<i64>().map_err(|_| number_error())?;
            Ok(MK_TOKEN!(TokenKind::Int, TokenValue::Int(value)))
        } else {
            let value = literal.parse::<f64>().map_err(|_| number_error())?;
            if !value.is_finite() {
                return Err(number_error());
            }
            Ok(MK_TOKEN!(TokenKind::Float, TokenValue::Float(value)))
        }
    }
}

/// Tokenizes `text` read from `filename`.
pub fn tokenize(text: &str, filename: Option<&str>) -> Result<Vec<Token>, Error> {
    let filename = filename.unwrap_or("<stdin>");
    debug!(target: "upita::lexer", filename, length = text.len(), "Running lexer");
    let mut lexer = Lexer::new(filename, text);
    lexer.make_tokens()
}
