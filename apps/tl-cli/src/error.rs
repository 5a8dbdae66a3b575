//! Error type for the command line front end.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to load design {path}: {source}")]
    Load {
        path: PathBuf,
        source: tl_project::ProjectError,
    },

    #[error("{0}")]
    Project(#[from] tl_project::ProjectError),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
