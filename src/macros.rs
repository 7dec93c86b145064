//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance, with or without a literal value

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The literal value carried by INT and FLOAT tokens (optional)
///
/// # Example
///
/// ```ignore
/// let plus = MK_TOKEN!(TokenKind::Plus);
/// let number = MK_TOKEN!(TokenKind::Int, TokenValue::Int(42));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: None,
        }
    };
    ($kind:expr, $value:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: Some($value),
        }
    };
}
