//! Reading and writing of the handful of ID3 fields the batch tools care about.
//!
//! Reading is deliberately forgiving: a file without a parsable tag container
//! is not an error, it simply has no tags. Writing is strict and reports
//! every failure.

use lofty::config::WriteOptions;
use lofty::error::LoftyError;
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::Tag;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read tags from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: LoftyError,
    },

    #[error("failed to save tags to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: LoftyError,
    },
}

/// Tags of a single audio file. Every field is optional, partially tagged
/// files are common.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTag {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<u32>,
    /// Always positive when present
    pub track_number: Option<u32>,
}

impl TrackTag {
    /// True when not a single field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.year.is_none()
            && self.track_number.is_none()
    }

    /// Field labels paired with their display values, in a fixed order
    pub fn fields(&self) -> [(&'static str, Option<String>); 5] {
        [
            ("Title", self.title.clone()),
            ("Artist", self.artist.clone()),
            ("Album", self.album.clone()),
            ("Year", self.year.map(|y| y.to_string())),
            ("Track Number", self.track_number.map(|n| n.to_string())),
        ]
    }
}

/// Whitespace-only values count as absent, anything else is kept as written
fn non_empty(value: Option<std::borrow::Cow<'_, str>>) -> Option<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.into_owned())
}

fn from_tag(tag: &Tag) -> TrackTag {
    TrackTag {
        title: non_empty(tag.title()),
        artist: non_empty(tag.artist()),
        album: non_empty(tag.album()),
        year: tag.year(),
        // A zero track number is what some taggers write for "unknown"
        track_number: tag.track().filter(|n| *n > 0),
    }
}

/// Read the tags of an audio file.
///
/// Returns `None` when the file cannot be parsed or carries no tag at all.
/// Never fails: callers fall back to other information instead.
pub fn read_tags(path: impl AsRef<Path>) -> Option<TrackTag> {
    let path = path.as_ref();

    let tagged_file = match Probe::open(path).and_then(|probe| probe.read()) {
        Ok(tagged_file) => tagged_file,
        Err(e) => {
            tracing::debug!("No readable tags in {}: {}", path.display(), e);
            return None;
        }
    };

    // Try to get the primary tag, fall back to first available tag
    let tag = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.first_tag())?;

    Some(from_tag(tag))
}

/// Write every present field of `tags` onto the file's primary tag, creating
/// the tag when the file has none. Absent fields are left untouched.
pub fn write_tags(path: impl AsRef<Path>, tags: &TrackTag) -> Result<(), TagError> {
    let path = path.as_ref();

    let mut tagged_file = Probe::open(path)
        .and_then(|probe| probe.read())
        .map_err(|source| TagError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    if tagged_file.primary_tag().is_none() {
        let tag_type = tagged_file.primary_tag_type();
        tagged_file.insert_tag(Tag::new(tag_type));
    }

    if let Some(tag) = tagged_file.primary_tag_mut() {
        if let Some(title) = &tags.title {
            tag.set_title(title.clone());
        }
        if let Some(artist) = &tags.artist {
            tag.set_artist(artist.clone());
        }
        if let Some(album) = &tags.album {
            tag.set_album(album.clone());
        }
        if let Some(year) = tags.year {
            tag.set_year(year);
        }
        if let Some(track_number) = tags.track_number {
            tag.set_track(track_number);
        }
    }

    tagged_file
        .save_to_path(path, WriteOptions::default())
        .map_err(|source| TagError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Saved tags to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[rstest]
    #[case::garbage("noise.mp3", b"definitely not an mpeg stream".as_slice())]
    #[case::empty("empty.mp3", b"".as_slice())]
    #[case::unknown_extension("notes.txt", b"some text".as_slice())]
    fn unreadable_files_have_no_tags(#[case] name: &str, #[case] contents: &[u8]) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();

        assert_eq!(read_tags(&path), None);
    }

    #[test]
    fn missing_file_has_no_tags() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_tags(dir.path().join("gone.mp3")), None);
    }

    #[test]
    fn writing_to_unreadable_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("noise.mp3");
        fs::write(&path, b"not audio").unwrap();

        let result = write_tags(&path, &TrackTag::default());
        assert_matches!(result, Err(TagError::Read { path: p, .. }) if p == path);
    }

    #[test]
    fn empty_tag_reports_empty() {
        assert!(TrackTag::default().is_empty());

        let tag = TrackTag {
            year: Some(1999),
            ..Default::default()
        };
        assert!(!tag.is_empty());
    }

    #[test]
    fn fields_are_labelled_in_order() {
        let tag = TrackTag {
            title: Some("Intro".to_string()),
            track_number: Some(1),
            ..Default::default()
        };

        let labels: Vec<_> = tag.fields().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, ["Title", "Artist", "Album", "Year", "Track Number"]);
        assert_eq!(tag.fields()[0].1.as_deref(), Some("Intro"));
        assert_eq!(tag.fields()[1].1, None);
        assert_eq!(tag.fields()[4].1.as_deref(), Some("1"));
    }

    #[test]
    fn tag_conversion_drops_blank_values_and_zero_track() {
        let mut tag = Tag::new(lofty::tag::TagType::Id3v2);
        tag.set_title("  ".to_string());
        tag.set_artist("Artist".to_string());
        tag.set_track(0);

        let converted = from_tag(&tag);
        assert_eq!(converted.title, None);
        assert_eq!(converted.artist.as_deref(), Some("Artist"));
        assert_eq!(converted.track_number, None);
    }

    #[test]
    fn tag_conversion_keeps_surrounding_whitespace() {
        let mut tag = Tag::new(lofty::tag::TagType::Id3v2);
        tag.set_title(" Intro".to_string());

        assert_eq!(from_tag(&tag).title.as_deref(), Some(" Intro"));
    }

    #[test]
    fn written_tags_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("song.mp3");
        fixtures::write_silent_mp3(&path);

        assert_eq!(read_tags(&path), None);

        let tags = TrackTag {
            title: Some("Song".to_string()),
            artist: Some("A".to_string()),
            album: Some("B".to_string()),
            year: Some(2001),
            track_number: Some(3),
        };
        write_tags(&path, &tags).unwrap();

        assert_eq!(read_tags(&path), Some(tags));
    }

    #[test]
    fn writing_keeps_fields_not_given() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("song.mp3");
        fixtures::write_silent_mp3(&path);

        write_tags(
            &path,
            &TrackTag {
                title: Some("Song".to_string()),
                track_number: Some(1),
                ..Default::default()
            },
        )
        .unwrap();
        write_tags(
            &path,
            &TrackTag {
                artist: Some("Band".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let read = read_tags(&path).unwrap();
        assert_eq!(read.title.as_deref(), Some("Song"));
        assert_eq!(read.artist.as_deref(), Some("Band"));
        assert_eq!(read.track_number, Some(1));
    }

    #[test]
    fn tag_conversion_keeps_all_fields() {
        let mut tag = Tag::new(lofty::tag::TagType::Id3v2);
        tag.set_title("Song".to_string());
        tag.set_album("Record".to_string());
        tag.set_year(2004);
        tag.set_track(7);

        let converted = from_tag(&tag);
        assert_eq!(
            converted,
            TrackTag {
                title: Some("Song".to_string()),
                artist: None,
                album: Some("Record".to_string()),
                year: Some(2004),
                track_number: Some(7),
            }
        );
    }
}
