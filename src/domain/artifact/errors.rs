//! Artifact Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArtifactError {
    #[error("Invalid file name: {0}")]
    PathTraversal(String),
}
