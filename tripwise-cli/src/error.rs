//! Error types emitted by the Tripwise CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use tripwise_core::{CatalogueError, TripRequestValidationError};

/// Errors emitted by the Tripwise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The same-day travel threshold is negative or not a number.
    #[error("same-day travel hours must be a non-negative number, got {value}")]
    InvalidTravelThreshold { value: f64 },
    /// An input file could not be opened.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An input file did not contain the expected JSON.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The destination catalogue could not be built.
    #[error("destination catalogue at {path:?} is invalid: {source}")]
    InvalidCatalogue {
        path: Utf8PathBuf,
        #[source]
        source: CatalogueError,
    },
    /// The trip request failed validation.
    #[error("trip request in {path:?} failed validation: {source}")]
    InvalidTripRequest {
        path: Utf8PathBuf,
        #[source]
        source: TripRequestValidationError,
    },
    /// Serialising the plan failed.
    #[error("failed to serialise trip plan: {0}")]
    SerialisePlan(#[source] serde_json::Error),
    /// Writing the plan failed.
    #[error("failed to write trip plan: {0}")]
    WritePlan(#[source] std::io::Error),
}
