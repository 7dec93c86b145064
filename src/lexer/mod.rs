//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts arithmetic source
//! text into a flat stream of tokens. It handles:
//!
//! - Integer and decimal literals
//! - The operators `+ - * /` and parentheses
//! - Skipping spaces and tabs
//! - Position tracking for error reporting

pub mod lexer;
pub mod tokens;
