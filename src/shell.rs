//! Interactive shell: reads a line, tokenizes it, prints the tokens or the error.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use upita::{
    config::{ShellConfig, STDIN_FILENAME},
    display_error,
    lexer::tokens::format_tokens,
    run,
};

pub struct Shell {
    editor: DefaultEditor,
    prompt: String,
}

impl Shell {
    pub fn new(config: &ShellConfig) -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            prompt: config.prompt.clone(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.editor.readline(&self.prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    let _ = self.editor.add_history_entry(line.as_str());
                    report(STDIN_FILENAME, &line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    debug!(target: "upita::cli", "End of input, leaving shell");
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }
}

/// Tokenizes `text` and prints the outcome. Returns `false` on a lexer error.
pub fn report(filename: &str, text: &str) -> bool {
    match run(filename, text) {
        Ok(tokens) => {
            println!("{}", format_tokens(&tokens));
            true
        }
        Err(error) => {
            eprintln!("{}", display_error(&error));
            false
        }
    }
}
