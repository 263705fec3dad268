//! monkey-repl - an interactive read-eval-print loop for the Monkey language.
//!
//! Reads lines from standard input, lexes and parses each one, and prints
//! either the canonical `render()` of the resulting program or an indented
//! list of parse errors. Evaluation beyond that is out of this crate's scope
//! (`monkey-eval` covers only integer-literal expression statements).

mod config;
mod error;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser as ClapParser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use monkey_lex::Lexer;
use monkey_syntax::Parser;

use config::Config;
use error::Result;

const PROMPT: &str = ">> ";
const ERROR_BANNER: &str = "Woops! We ran into some monkey business here!";

/// Monkey - an interactive REPL for the Monkey language.
#[derive(ClapParser, Debug)]
#[command(name = "monkey-repl")]
#[command(author = "Monkey Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive REPL for the Monkey language", long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging.
    #[arg(short, long, env = "MONKEY_VERBOSE")]
    verbose: bool,

    /// Disable ANSI color in the error banner.
    #[arg(long, env = "MONKEY_NO_COLOR")]
    no_color: bool,

    /// Path to a configuration file.
    #[arg(short, long, env = "MONKEY_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a file that persists REPL input lines across sessions.
    #[arg(long, env = "MONKEY_HISTORY")]
    history: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if cli.no_color {
        config.no_color = true;
    }
    if cli.history.is_some() {
        config.history_file = cli.history.clone();
    }

    init_logging(cli.verbose)?;

    run_repl(io::stdin().lock(), io::stdout(), &config)?;
    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false).with_thread_names(false);

    // `try_init` so running the REPL's own tests (which may construct this
    // more than once in-process) doesn't panic on a second subscriber.
    let _ = tracing_subscriber::registry().with(filter).with(subscriber).try_init();

    Ok(())
}

fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Drives the `>> ` read-lex-parse-render loop until EOF on `input`.
fn run_repl<R: BufRead, W: Write>(mut input: R, mut output: W, config: &Config) -> Result<()> {
    let mut history = open_history(config)?;

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        let bytes_read = input.read_line(&mut line)?;
        if bytes_read == 0 {
            break;
        }

        if let Some(file) = history.as_mut() {
            writeln!(file, "{}", line.trim_end())?;
            file.flush()?;
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();
        let errors = parser.errors();

        tracing::debug!(error_count = errors.len(), "parsed one REPL line");

        if !errors.is_empty() {
            print_errors(&mut output, errors, config.no_color)?;
        } else {
            writeln!(output, "{}", program.render())?;
        }
    }

    Ok(())
}

fn open_history(config: &Config) -> Result<Option<std::fs::File>> {
    match &config.history_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| error::ReplError::History(format!("{}: {}", path.display(), e)))?;
            Ok(Some(file))
        },
        None => Ok(None),
    }
}

fn print_errors<W: Write>(output: &mut W, errors: &[String], no_color: bool) -> Result<()> {
    if no_color {
        writeln!(output, "{}", ERROR_BANNER)?;
    } else {
        writeln!(output, "\x1b[31m{}\x1b[0m", ERROR_BANNER)?;
    }
    for err in errors {
        writeln!(output, "\t{}", err)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> String {
        let mut out = Vec::new();
        run_repl(source.as_bytes(), &mut out, &Config::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_successfully_parsed_line() {
        let out = run("let x = 5;\n");
        assert_eq!(out, format!("{PROMPT}let x = 5;\n{PROMPT}"));
    }

    #[test]
    fn prints_banner_and_indented_errors_for_bad_input() {
        let out = run("let x 5;\n");
        assert!(out.contains(ERROR_BANNER));
        assert!(out.contains("\texpected next token to be =, got INT"));
    }

    #[test]
    fn history_file_records_each_line() {
        let dir = tempfile::TempDir::new().unwrap();
        let history_path = dir.path().join("history");
        let config = Config { no_color: true, history_file: Some(history_path.clone()) };

        let mut out = Vec::new();
        run_repl("5 + 5;\nlet y = 1;\n".as_bytes(), &mut out, &config).unwrap();

        let recorded = std::fs::read_to_string(&history_path).unwrap();
        assert_eq!(recorded, "5 + 5;\nlet y = 1;\n");
    }

    #[test]
    fn cli_parses_verbose_and_no_color_flags() {
        let cli = Cli::parse_from(["monkey-repl", "--verbose", "--no-color"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn cli_parses_history_path() {
        let cli = Cli::parse_from(["monkey-repl", "--history", "/tmp/monkey_history"]);
        assert_eq!(cli.history, Some(PathBuf::from("/tmp/monkey_history")));
    }
}
