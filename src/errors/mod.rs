//! Error types and error handling for the lexer.
//!
//! This module defines the diagnostics a scan can fail with. It includes:
//!
//! - Error structures anchored on source positions
//! - Specific error variants for illegal characters and malformed numbers
//! - Error formatting and display functionality

pub mod errors;
