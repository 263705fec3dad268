//! Error handling for the `monkey-repl` binary.
//!
//! The lexer/parser core never returns `Result` - its failures are data,
//! collected in `Parser::errors()` (see `monkey-syntax`). This binary does
//! have operations that can genuinely fail (reading the optional config
//! file, opening the optional history file), and those use this
//! `thiserror`-derived enum plus `anyhow::Result` at the `main()` boundary.

use thiserror::Error;

/// Errors from the REPL binary's own I/O and configuration handling.
#[derive(Error, Debug)]
pub enum ReplError {
    /// The configuration file at the given path does not exist.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// The configuration file could not be parsed as TOML.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),

    /// The history file could not be opened or written.
    #[error("failed to access history file: {0}")]
    History(String),

    /// An underlying I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`ReplError`].
pub type Result<T> = std::result::Result<T, ReplError>;
