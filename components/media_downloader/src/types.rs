// components/media_downloader/src/types.rs
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use track_tags::TagError;
use url::Url;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Required dependency not found: {0}")]
    DependencyNotFound(&'static str),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Album year must be between 1000 and 9999, got {0}")]
    InvalidYear(u32),

    #[error("Could not extract info: {0}")]
    ExtractionFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Not a playlist: {0}")]
    NotAPlaylist(String),

    #[error("Directory already exists: {0}")]
    DirectoryExists(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Tag error: {0}")]
    TagError(#[from] TagError),
}

/// What an album download needs to know up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumInfo {
    pub artist: String,
    pub album: String,
    pub year: u32,
    pub url: Url,
    /// Track titles in playlist order, filled in from the playlist
    pub tracks: Vec<String>,
}

impl AlbumInfo {
    pub const MIN_YEAR: u32 = 1000;
    pub const MAX_YEAR: u32 = 9999;

    pub fn new(
        artist: impl Into<String>,
        album: impl Into<String>,
        year: u32,
        url: &str,
    ) -> Result<Self, DownloadError> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(DownloadError::InvalidYear(year));
        }

        let url = Url::parse(url).map_err(|e| DownloadError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            artist: artist.into(),
            album: album.into(),
            year,
            url,
            tracks: Vec::new(),
        })
    }

    /// Folder name of the form `Artist - Album (Year)`
    pub fn dir_name(&self) -> String {
        sanitize_filename::sanitize(format!(
            "{} - {} ({})",
            self.artist, self.album, self.year
        ))
    }
}

/// One video of a playlist, as listed by a flat extraction
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaylistEntry {
    pub id: Option<String>,
    pub title: Option<String>,
    pub uploader: Option<String>,
    pub url: Option<String>,
}

impl PlaylistEntry {
    pub const UNKNOWN: &'static str = "Unknown";

    pub fn title_or_unknown(&self) -> &str {
        self.title.as_deref().unwrap_or(Self::UNKNOWN)
    }

    pub fn channel_or_unknown(&self) -> &str {
        self.uploader.as_deref().unwrap_or(Self::UNKNOWN)
    }

    /// Watch page of the entry, built from its id when there is one
    pub fn watch_url(&self) -> Option<String> {
        self.id
            .as_ref()
            .map(|id| format!("https://www.youtube.com/watch?v={}", id))
            .or_else(|| self.url.clone())
    }
}

/// Result of a flat extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaInfo {
    Playlist(Vec<PlaylistEntry>),
    Single(PlaylistEntry),
}

impl MediaInfo {
    /// Titles in order, a single video yields one title
    pub fn titles(&self) -> Vec<String> {
        match self {
            MediaInfo::Playlist(entries) => entries
                .iter()
                .map(|e| e.title_or_unknown().to_string())
                .collect(),
            MediaInfo::Single(entry) => vec![entry.title_or_unknown().to_string()],
        }
    }
}

/// What happened while tagging a downloaded album
#[derive(Debug, Default)]
pub struct AlbumReport {
    pub directory: PathBuf,
    pub tagged: Vec<String>,
    /// Tracks whose `{title}.mp3` file was not found after the download
    pub missing: Vec<String>,
    pub failed: Vec<(String, TagError)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    #[test]
    fn album_dir_name_includes_year() {
        let info = AlbumInfo::new("Artist", "Album", 1999, "https://example.com/list").unwrap();
        assert_eq!(info.dir_name(), "Artist - Album (1999)");
    }

    #[test]
    fn album_dir_name_has_no_path_separators() {
        let info = AlbumInfo::new("AC/DC", "Back in Black", 1980, "https://example.com").unwrap();
        assert!(!info.dir_name().contains('/'));
    }

    #[rstest]
    #[case(999)]
    #[case(10000)]
    #[case(0)]
    fn year_out_of_range_is_rejected(#[case] year: u32) {
        let result = AlbumInfo::new("A", "B", year, "https://example.com");
        assert_matches!(result, Err(DownloadError::InvalidYear(y)) if y == year);
    }

    #[test]
    fn invalid_url_is_rejected() {
        let result = AlbumInfo::new("A", "B", 2000, "not a url");
        assert_matches!(result, Err(DownloadError::InvalidUrl(_)));
    }

    #[test]
    fn entry_defaults_to_unknown() {
        let entry = PlaylistEntry {
            id: Some("abc123".to_string()),
            title: None,
            uploader: None,
            url: None,
        };

        assert_eq!(entry.title_or_unknown(), "Unknown");
        assert_eq!(entry.channel_or_unknown(), "Unknown");
        assert_eq!(
            entry.watch_url().as_deref(),
            Some("https://www.youtube.com/watch?v=abc123")
        );
    }

    #[test]
    fn single_video_has_one_title() {
        let info = MediaInfo::Single(PlaylistEntry {
            id: None,
            title: Some("Live Set".to_string()),
            uploader: None,
            url: None,
        });
        assert_eq!(info.titles(), ["Live Set"]);
    }
}
