//! Sequencer error types
//!
//! `InvalidDirectory` and `DestinationUnavailable` end the run before any
//! copy happens. `NoAudioFiles` is informational. Copy failures never abort
//! a transfer, they are collected in the report as [`CopyFailed`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequencerError {
    #[error("not an existing directory: {path}")]
    InvalidDirectory { path: PathBuf },

    #[error("failed to list files in {path}")]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No MP3 files found in this directory.")]
    NoAudioFiles { directory: PathBuf },

    #[error("failed to create destination directory {path}")]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SequencerError {
    pub fn invalid_directory(path: impl Into<PathBuf>) -> Self {
        SequencerError::InvalidDirectory { path: path.into() }
    }

    pub fn listing(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SequencerError::Listing {
            path: path.into(),
            source,
        }
    }

    /// Whether the run should end quietly instead of being reported as a failure
    pub fn is_informational(&self) -> bool {
        matches!(self, SequencerError::NoAudioFiles { .. })
    }
}

/// A single file that could not be copied
#[derive(Error, Debug)]
#[error("failed to copy '{file_name}'")]
pub struct CopyFailed {
    pub file_name: String,
    #[source]
    pub source: std::io::Error,
}

pub type Result<T> = std::result::Result<T, SequencerError>;
