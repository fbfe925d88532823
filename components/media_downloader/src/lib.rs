// components/media_downloader/src/lib.rs
mod listing;
mod types;
mod ytdlp;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use track_tags::TrackTag;
use url::Url;

pub use listing::{format_info_file, format_track_listing, numbered_line, INFO_FILE_NAME};
pub use types::{AlbumInfo, AlbumReport, DownloadError, MediaInfo, PlaylistEntry};
pub use ytdlp::{Downloader, YtDlp};

pub struct MediaDownloader {
    work_dir: PathBuf,
    downloader: Arc<dyn Downloader + Send + Sync>,
}

fn parse_url(url: &str) -> Result<Url, DownloadError> {
    Url::parse(url).map_err(|e| DownloadError::InvalidUrl(e.to_string()))
}

impl MediaDownloader {
    /// Create a MediaDownloader backed by yt-dlp that works inside `work_dir`
    pub async fn new(work_dir: impl AsRef<Path>) -> Result<Self, DownloadError> {
        Self::new_with_downloader(work_dir, Arc::new(YtDlp)).await
    }

    /// Create a MediaDownloader with a specific downloader implementation
    pub async fn new_with_downloader(
        work_dir: impl AsRef<Path>,
        downloader: Arc<dyn Downloader + Send + Sync>,
    ) -> Result<Self, DownloadError> {
        downloader.check_available().await?;

        Ok(Self {
            work_dir: work_dir.as_ref().to_owned(),
            downloader,
        })
    }

    /// List what is behind a URL without downloading anything
    pub async fn fetch_info(&self, url: &str) -> Result<MediaInfo, DownloadError> {
        self.downloader.fetch_info(&parse_url(url)?).await
    }

    /// Create the album folder, describe it in `info.txt`, download every
    /// track as MP3 and tag the files that turned up.
    ///
    /// `info.tracks` must already hold the playlist titles; track numbers
    /// follow their order.
    pub async fn download_album(&self, info: &AlbumInfo) -> Result<AlbumReport, DownloadError> {
        let folder = self.work_dir.join(info.dir_name());

        if folder.exists() {
            return Err(DownloadError::DirectoryExists(folder));
        }
        tokio::fs::create_dir(&folder).await?;

        listing::write_info_file(info, &folder)?;

        self.downloader.download_audio(&info.url, &folder).await?;

        Ok(tag_album(info, &folder))
    }

    /// Title of the video behind `url`, looked up without downloading
    pub async fn fetch_video_title(&self, url: &str) -> Result<String, DownloadError> {
        Ok(match self.fetch_info(url).await? {
            MediaInfo::Single(entry) => entry.title_or_unknown().to_string(),
            MediaInfo::Playlist(_) => PlaylistEntry::UNKNOWN.to_string(),
        })
    }

    /// Download a single video as MP4 into the working directory
    pub async fn download_video(&self, url: &str) -> Result<(), DownloadError> {
        let url = parse_url(url)?;
        self.downloader.download_video(&url, &self.work_dir).await
    }

    /// Write the entries of a playlist to a CSV file, returning how many were written
    pub async fn export_playlist_csv(
        &self,
        url: &str,
        output: impl AsRef<Path>,
    ) -> Result<usize, DownloadError> {
        let entries = match self.fetch_info(url).await? {
            MediaInfo::Playlist(entries) => entries,
            MediaInfo::Single(_) => return Err(DownloadError::NotAPlaylist(url.to_string())),
        };

        let output = self.work_dir.join(output);
        let file = std::fs::File::create(&output)?;
        let written = listing::write_playlist_csv(file, &entries)?;

        tracing::info!("Wrote {} entries to {}", written, output.display());
        Ok(written)
    }
}

/// Tag `{folder}/{title}.mp3` for every track, numbering from 1.
/// Missing files and tag failures are recorded and skipped.
fn tag_album(info: &AlbumInfo, folder: &Path) -> AlbumReport {
    let mut report = AlbumReport {
        directory: folder.to_path_buf(),
        ..Default::default()
    };

    for (index, title) in info.tracks.iter().enumerate() {
        let path = folder.join(format!("{}.mp3", title));

        if !path.exists() {
            tracing::warn!("Track {} does not exist!", title);
            report.missing.push(title.clone());
            continue;
        }

        let tags = TrackTag {
            title: Some(title.clone()),
            artist: Some(info.artist.clone()),
            album: Some(info.album.clone()),
            year: Some(info.year),
            track_number: Some(index as u32 + 1),
        };

        match track_tags::write_tags(&path, &tags) {
            Ok(()) => report.tagged.push(title.clone()),
            Err(e) => {
                tracing::warn!("Failed to tag {}: {}", path.display(), e);
                report.failed.push((title.clone(), e));
            }
        }
    }

    report
}
