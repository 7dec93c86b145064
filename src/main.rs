//! Command-line shell for the upita lexer.

mod shell;

use std::{fs::read_to_string, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use upita::config::{InputMode, ShellConfig, EVAL_FILENAME};

#[derive(Parser)]
#[command(name = "upita")]
#[command(version, about = "Tokenizer for arithmetic expressions", long_about = None)]
struct Cli {
    /// Source file to tokenize
    file: Option<PathBuf>,

    /// Tokenize the given text instead of a file
    #[arg(short, long, value_name = "CODE")]
    eval: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = ShellConfig::from_args(cli.file, cli.eval, cli.verbose);

    init_logging(&config);

    match execute(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(target: "upita::cli", "{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &ShellConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns whether the text tokenized cleanly.
fn execute(config: &ShellConfig) -> Result<bool> {
    match &config.mode {
        InputMode::Interactive => {
            shell::Shell::new(config)?.run()?;
            Ok(true)
        }
        InputMode::Eval(code) => Ok(shell::report(EVAL_FILENAME, code)),
        InputMode::File(path) => {
            let text = read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            info!(target: "upita::cli", file = %path.display(), "Tokenizing file");
            // A trailing newline is the file's, not the expression's.
            Ok(shell::report(&filename, text.trim_end_matches(['\n', '\r'])))
        }
    }
}
