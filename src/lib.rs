#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};
use crate::lexer::{lexer::tokenize, tokens::Token};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

/// Cursor over the source text, used to anchor diagnostics.
///
/// `index` is `-1` before the first advance, a valid offset while scanning and
/// the text length once the input is exhausted. `line` and `column` are
/// zero-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub index: isize,
    pub column: usize,
    pub line: usize,
    pub filename: Rc<String>,
    pub full_text: Rc<[char]>,
}

impl Position {
    pub fn new(
        index: isize,
        column: usize,
        line: usize,
        filename: Rc<String>,
        full_text: Rc<[char]>,
    ) -> Self {
        Position {
            index,
            column,
            line,
            filename,
            full_text,
        }
    }

    /// The position just before the first character of `full_text`.
    pub fn start(filename: Rc<String>, full_text: Rc<[char]>) -> Self {
        Position::new(-1, 0, 0, filename, full_text)
    }

    /// Moves one character forward. `current_char` is the character being
    /// left behind; `None` only happens on the priming advance.
    pub fn advance(&mut self, current_char: Option<char>) {
        self.index += 1;

        match current_char {
            Some('\n') => {
                self.line += 1;
                self.column = 0;
            }
            Some(_) => self.column += 1,
            None => {}
        }
    }

    pub fn copy(&self) -> Position {
        self.clone()
    }

    /// Character under the cursor, `None` before the start or past the end.
    pub fn current(&self) -> Option<char> {
        usize::try_from(self.index)
            .ok()
            .and_then(|index| self.full_text.get(index).copied())
    }

    /// The full source line containing this position, without its newline.
    pub fn line_text(&self) -> String {
        let cursor = self.index.clamp(0, self.full_text.len() as isize) as usize;

        let start = self.full_text[..cursor]
            .iter()
            .rposition(|c| *c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let end = self.full_text[cursor..]
            .iter()
            .position(|c| *c == '\n')
            .map(|i| cursor + i)
            .unwrap_or(self.full_text.len());

        self.full_text[start..end].iter().collect()
    }
}

/// Tokenizes `text`, using `filename` only for diagnostics.
pub fn run(filename: &str, text: &str) -> Result<Vec<Token>, Error> {
    tokenize(text, Some(filename))
}

pub fn display_error(error: &Error) -> String {
    /*
        Error: IllegalCharacterError ('&')
        -> <stdin>
          |
        1 | 5&3
          | -^
    */

    let position = error.get_position();
    let line_string = (position.line + 1).to_string();
    let padding = line_string.len() + 2;
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!(
            "Error: {}: {}\n",
            error.get_error_name(),
            error.get_details()
        ));
    } else {
        output.push_str(&format!(
            "Error: {}: {} ({})\n",
            error.get_error_name(),
            error.get_details(),
            error.get_tip()
        ));
    }
    output.push_str(&format!("-> {}\n", position.filename));
    output.push_str(&format!("{:>padding$}\n", "|"));

    // Tabs count as one column, so print them as one space.
    let line_text = position.line_text().replace('\t', " ");
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = position.column.saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| lexer::tokens::WHITESPACE.contains(c))
        .count();

    (string.chars().skip(start).collect(), start)
}
