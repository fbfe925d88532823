use crate::error::CopyFailed;
use std::fmt;
use std::path::{Path, PathBuf};

/// A regular file found in a source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    path: PathBuf,
    name: String,
}

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without any directory components
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Only the exact lowercase `.mp3` extension counts. `.MP3` files are
    /// skipped, matching how the collections these tools handle are named.
    pub fn is_mp3(&self) -> bool {
        self.path.extension().and_then(|e| e.to_str()) == Some("mp3")
    }
}

/// Value a file is ordered by.
///
/// Variant order is the cross-kind order: every `TrackNumber` sorts before
/// every `Title`, and every `Title` before every `FileName`. Within a variant
/// numbers compare numerically and strings by their natural `str` order.
/// Do not reorder the variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    TrackNumber(u32),
    Title(String),
    FileName(String),
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::TrackNumber(n) => write!(f, "track {}", n),
            SortKey::Title(title) => write!(f, "title '{}'", title),
            SortKey::FileName(name) => write!(f, "file name '{}'", name),
        }
    }
}

/// Outcome of copying a sorted set of files
#[derive(Debug)]
pub struct TransferReport {
    pub destination: PathBuf,
    /// Names of copied files, in copy order
    pub copied: Vec<String>,
    pub failed: Vec<CopyFailed>,
}

impl TransferReport {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            copied: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Everything a full sequencing run produced
#[derive(Debug)]
pub struct SequenceOutcome {
    /// Audio files in enumeration order
    pub before: Vec<FileHandle>,
    /// Audio files in copy order
    pub after: Vec<FileHandle>,
    pub report: TransferReport,
}
