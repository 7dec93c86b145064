//! Shell configuration.
//!
//! Resolved options for the `upita` binary: where the text comes from and how
//! loud the logging is.

use std::path::PathBuf;

use tracing::Level;

pub const DEFAULT_PROMPT: &str = "upita > ";
pub const STDIN_FILENAME: &str = "<stdin>";
pub const EVAL_FILENAME: &str = "<eval>";

/// Where the shell reads its text from.
#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Interactive,
    Eval(String),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub mode: InputMode,
    pub prompt: String,
    pub log_level: Level,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            mode: InputMode::Interactive,
            prompt: String::from(DEFAULT_PROMPT),
            log_level: Level::WARN,
        }
    }
}

impl ShellConfig {
    /// `-e` wins over a file argument; neither means interactive.
    pub fn from_args(file: Option<PathBuf>, eval: Option<String>, verbose: u8) -> Self {
        let mode = match (eval, file) {
            (Some(code), _) => InputMode::Eval(code),
            (None, Some(path)) => InputMode::File(path),
            (None, None) => InputMode::Interactive,
        };

        Self {
            mode,
            log_level: level_for_verbosity(verbose),
            ..Self::default()
        }
    }

    /// Default `EnvFilter` directive, used when `RUST_LOG` is unset.
    pub fn filter_directive(&self) -> String {
        format!("upita={}", self.log_level.to_string().to_lowercase())
    }
}

pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
