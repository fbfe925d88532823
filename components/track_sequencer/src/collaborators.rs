//! Seams to the filesystem and the tag library.
//!
//! The sequencer only talks to these traits, so tests can swap any of them.

use crate::error::{Result, SequencerError};
use crate::types::FileHandle;
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::Path;
use track_tags::TrackTag;

pub trait TagReader {
    /// `None` when the file has no readable tag container. Must not fail.
    fn read_tags(&self, path: &Path) -> Option<TrackTag>;
}

pub trait DirectoryLister {
    /// Regular files directly inside `dir`, in enumeration order
    fn list_files(&self, dir: &Path) -> Result<Vec<FileHandle>>;
}

pub trait FileCopier {
    /// Copy `src` to `dst`, overwriting `dst`, keeping timestamps and
    /// permission bits where the platform allows
    fn copy(&self, src: &Path, dst: &Path) -> io::Result<()>;
}

/// Reads ID3 tags through lofty
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read_tags(&self, path: &Path) -> Option<TrackTag> {
        track_tags::read_tags(path)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list_files(&self, dir: &Path) -> Result<Vec<FileHandle>> {
        if !dir.is_dir() {
            return Err(SequencerError::invalid_directory(dir));
        }

        let entries = fs::read_dir(dir).map_err(|e| SequencerError::listing(dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SequencerError::listing(dir, e))?;
            let path = entry.path();
            // Follows symlinks, a link to a regular file counts as a file
            if path.is_file() {
                files.push(FileHandle::new(path));
            }
        }

        Ok(files)
    }
}

/// Byte copy followed by restoring access and modification times
#[derive(Debug, Default, Clone, Copy)]
pub struct MetadataPreservingCopier;

impl FileCopier for MetadataPreservingCopier {
    fn copy(&self, src: &Path, dst: &Path) -> io::Result<()> {
        // A read-only copy from an earlier run cannot be opened for writing
        if let Ok(existing) = fs::symlink_metadata(dst) {
            if existing.is_file() && existing.permissions().readonly() {
                fs::remove_file(dst)?;
            }
        }

        // fs::copy already carries the permission bits over
        fs::copy(src, dst)?;

        let metadata = fs::metadata(src)?;
        let mut times = FileTimes::new().set_modified(metadata.modified()?);
        if let Ok(accessed) = metadata.accessed() {
            times = times.set_accessed(accessed);
        }

        // Unix only needs ownership to set times, so a read-only copy still works
        let dst_file = if cfg!(windows) {
            File::options().write(true).open(dst)?
        } else {
            File::open(dst)?
        };
        dst_file.set_times(times)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    #[test]
    fn lists_only_regular_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.mp3"), b"a").unwrap();
        fs::write(dir.path().join("notes.txt"), b"n").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.mp3"), b"d").unwrap();

        let mut names: Vec<_> = FsDirectoryLister
            .list_files(dir.path())
            .unwrap()
            .iter()
            .map(|f| f.name().to_string())
            .collect();
        names.sort();

        assert_eq!(names, ["a.mp3", "notes.txt"]);
    }

    #[test]
    fn listing_a_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let result = FsDirectoryLister.list_files(&missing);
        assert_matches!(result, Err(SequencerError::InvalidDirectory { path }) if path == missing);
    }

    #[test]
    fn listing_a_file_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.mp3");
        fs::write(&file, b"a").unwrap();

        assert_matches!(
            FsDirectoryLister.list_files(&file),
            Err(SequencerError::InvalidDirectory { .. })
        );
    }

    #[test]
    fn copy_keeps_contents_and_modification_time() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src.mp3");
        let dst = dir.path().join("dst.mp3");
        fs::write(&src, b"payload").unwrap();

        let past = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
        File::options()
            .write(true)
            .open(&src)
            .unwrap()
            .set_modified(past)
            .unwrap();

        MetadataPreservingCopier.copy(&src, &dst).unwrap();

        assert_eq!(fs::read(&dst).unwrap(), b"payload");
        assert_eq!(fs::metadata(&dst).unwrap().modified().unwrap(), past);
    }

    fn make_readonly(path: &Path) {
        let mut permissions = fs::metadata(path).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(path, permissions).unwrap();
    }

    #[test]
    fn copy_replaces_read_only_destination() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src.mp3");
        let dst = dir.path().join("dst.mp3");
        fs::write(&src, b"fresh").unwrap();
        fs::write(&dst, b"stale").unwrap();
        make_readonly(&src);
        make_readonly(&dst);

        MetadataPreservingCopier.copy(&src, &dst).unwrap();

        assert_eq!(fs::read(&dst).unwrap(), b"fresh");
        assert!(fs::metadata(&dst).unwrap().permissions().readonly());
    }

    #[test]
    fn copy_overwrites_existing_destination() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src.mp3");
        let dst = dir.path().join("dst.mp3");
        fs::write(&src, b"new").unwrap();
        fs::write(&dst, b"old contents").unwrap();

        MetadataPreservingCopier.copy(&src, &dst).unwrap();

        assert_eq!(fs::read(&dst).unwrap(), b"new");
    }
}
