use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::core::InjectionKind;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid analysis input in '{file}'")]
#[diagnostic(
    code(cycle_breaker::input_parse_error),
    help("The input must be a JSON object with `components` and `edges` arrays")
)]
pub struct InputParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("invalid JSON here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

/// Malformed graph input, reported before any analysis runs
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Duplicate edge {from} -> {to} ({injection_kind})")]
    #[diagnostic(
        code(cycle_breaker::duplicate_edge),
        help("Each (from, to, injection kind) triple may appear only once")
    )]
    DuplicateEdge {
        from: String,
        to: String,
        injection_kind: InjectionKind,
    },

    #[error("Edge {from} -> {to} references unknown component '{missing}'")]
    #[diagnostic(
        code(cycle_breaker::dangling_reference),
        help("Every edge endpoint must be listed in `components`")
    )]
    DanglingReference {
        from: String,
        to: String,
        missing: String,
    },

    #[error("Duplicate component '{id}'")]
    #[diagnostic(
        code(cycle_breaker::duplicate_component),
        help("Component ids must be unique")
    )]
    DuplicateComponent { id: String },
}

#[derive(Error, Debug, Diagnostic)]
pub enum CycleBreakerError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(cycle_breaker::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    InputParseError(Box<InputParseError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(cycle_breaker::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(cycle_breaker::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(cycle_breaker::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(cycle_breaker::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
