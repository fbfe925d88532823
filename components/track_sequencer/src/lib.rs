//! Orders a directory of MP3 files by their intended track sequence and
//! copies them into a new directory named after the source.
//!
//! Ordering uses a three-tier fallback per file: the track number tag, then
//! the title tag, then the file name. See [`SortKey`] for how tiers compare.
//!
//! # Examples
//!
//! ```no_run
//! use track_sequencer::Sequencer;
//!
//! let outcome = Sequencer::standard().run("/music/incoming/Album", "/music/library")?;
//! for file in &outcome.after {
//!     println!("{}", file.name());
//! }
//! # Ok::<(), track_sequencer::SequencerError>(())
//! ```

mod collaborators;
mod error;
mod types;

use std::fs;
use std::path::Path;

pub use collaborators::{
    DirectoryLister, FileCopier, FsDirectoryLister, LoftyTagReader, MetadataPreservingCopier,
    TagReader,
};
pub use error::{CopyFailed, Result, SequencerError};
pub use types::{FileHandle, SequenceOutcome, SortKey, TransferReport};

/// Keep only `.mp3` files, in their original order
pub fn filter_audio_files(
    directory: &Path,
    files: impl IntoIterator<Item = FileHandle>,
) -> Result<Vec<FileHandle>> {
    let audio: Vec<_> = files.into_iter().filter(FileHandle::is_mp3).collect();

    if audio.is_empty() {
        return Err(SequencerError::NoAudioFiles {
            directory: directory.to_path_buf(),
        });
    }

    Ok(audio)
}

/// Name the copied directory gets, resolved so `.` or `album/` still name the album
pub fn source_directory_name(source: &Path) -> Result<String> {
    source
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .ok_or_else(|| SequencerError::invalid_directory(source))
}

pub struct Sequencer<R = LoftyTagReader, L = FsDirectoryLister, C = MetadataPreservingCopier> {
    tags: R,
    lister: L,
    copier: C,
}

impl Sequencer {
    /// Tags via lofty, files straight from the filesystem
    pub fn standard() -> Self {
        Self::new(LoftyTagReader, FsDirectoryLister, MetadataPreservingCopier)
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::standard()
    }
}

impl<R, L, C> Sequencer<R, L, C>
where
    R: TagReader,
    L: DirectoryLister,
    C: FileCopier,
{
    pub fn new(tags: R, lister: L, copier: C) -> Self {
        Self {
            tags,
            lister,
            copier,
        }
    }

    pub fn list_candidate_files(&self, directory: &Path) -> Result<Vec<FileHandle>> {
        if !directory.is_dir() {
            return Err(SequencerError::invalid_directory(directory));
        }
        self.lister.list_files(directory)
    }

    /// Track number first, then title, then file name
    pub fn derive_sort_key(&self, file: &FileHandle) -> SortKey {
        let Some(tags) = self.tags.read_tags(file.path()) else {
            tracing::debug!("No tags for '{}', ordering by file name", file.name());
            return SortKey::FileName(file.name().to_string());
        };

        if let Some(track_number) = tags.track_number.filter(|n| *n > 0) {
            return SortKey::TrackNumber(track_number);
        }

        match tags.title {
            Some(title) if !title.is_empty() => SortKey::Title(title),
            _ => SortKey::FileName(file.name().to_string()),
        }
    }

    /// Stable sort, files with equal keys keep their input order
    pub fn sort_files(&self, files: Vec<FileHandle>) -> Vec<FileHandle> {
        let mut keyed: Vec<_> = files
            .into_iter()
            .map(|file| (self.derive_sort_key(&file), file))
            .collect();

        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

        for (key, file) in &keyed {
            tracing::debug!("'{}' ordered by {}", file.name(), key);
        }

        keyed.into_iter().map(|(_, file)| file).collect()
    }

    /// Copy `sorted_files` into `destination_root/source_directory_name`.
    ///
    /// The destination may already exist, so an interrupted transfer can be
    /// run again. A failed copy is recorded and the remaining files are still
    /// copied.
    pub fn transfer(
        &self,
        sorted_files: &[FileHandle],
        destination_root: &Path,
        source_directory_name: &str,
    ) -> Result<TransferReport> {
        let destination = destination_root.join(source_directory_name);

        if !destination.is_dir() {
            tracing::info!("Creating directory at '{}'", destination.display());
            fs::create_dir_all(&destination).map_err(|source| {
                SequencerError::DestinationUnavailable {
                    path: destination.clone(),
                    source,
                }
            })?;
        }

        let mut report = TransferReport::new(&destination);

        for file in sorted_files {
            tracing::debug!("Copying file '{}'", file.name());
            let target = destination.join(file.name());

            match self.copier.copy(file.path(), &target) {
                Ok(()) => report.copied.push(file.name().to_string()),
                Err(source) => {
                    tracing::warn!("Failed to copy '{}': {}", file.name(), source);
                    report.failed.push(CopyFailed {
                        file_name: file.name().to_string(),
                        source,
                    });
                }
            }
        }

        Ok(report)
    }

    /// List, filter, sort and transfer in one go
    pub fn run(
        &self,
        source: impl AsRef<Path>,
        target_root: impl AsRef<Path>,
    ) -> Result<SequenceOutcome> {
        let source = source.as_ref();
        let target_root = target_root.as_ref();

        if !target_root.is_dir() {
            return Err(SequencerError::invalid_directory(target_root));
        }

        let files = self.list_candidate_files(source)?;
        let before = filter_audio_files(source, files)?;
        let after = self.sort_files(before.clone());

        let source_name = source_directory_name(source)?;
        let report = self.transfer(&after, target_root, &source_name)?;

        Ok(SequenceOutcome {
            before,
            after,
            report,
        })
    }
}
