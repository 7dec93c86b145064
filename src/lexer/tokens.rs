use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref SINGLE_CHAR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Mul);
        map.insert('/', TokenKind::Div);
        map.insert('(', TokenKind::LParen);
        map.insert(')', TokenKind::RParen);
        map
    };
}

pub const DIGITS: &str = "0123456789";
pub const WHITESPACE: [char; 2] = [' ', '\t'];
pub const DECIMAL_POINT: char = '.';

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Int,
    Float,

    Plus,
    Minus,
    Mul,
    Div,

    LParen,
    RParen,

    EOF,
}

impl TokenKind {
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::EOF => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Literal value of an INT or FLOAT token.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TokenValue {
    Int(i64),
    Float(f64),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Int(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{:?}", value),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}:{}", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Renders a token list the way the shell prints it: `[INT:2, PLUS, INT:3, EOF]`.
pub fn format_tokens(tokens: &[Token]) -> String {
    let items = tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<String>>();

    format!("[{}]", items.join(", "))
}
