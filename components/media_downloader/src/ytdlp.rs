// components/media_downloader/src/ytdlp.rs
use crate::types::{DownloadError, MediaInfo, PlaylistEntry};
use async_trait::async_trait;
use serde::Deserialize;
use std::ffi::OsString;
use std::path::Path;
use tokio::process::Command;
use url::Url;

const YT_DLP: &str = "yt-dlp";

#[async_trait]
pub trait Downloader {
    /// Check if the downloader is available and has all required dependencies
    async fn check_available(&self) -> Result<(), DownloadError>;

    /// List a URL's playlist entries, or the single video behind it, without downloading
    async fn fetch_info(&self, url: &Url) -> Result<MediaInfo, DownloadError>;

    /// Download the audio of every video behind `url` as MP3 into `folder`
    async fn download_audio(&self, url: &Url, folder: &Path) -> Result<(), DownloadError>;

    /// Download a single video as MP4 into `dir`
    async fn download_video(&self, url: &Url, dir: &Path) -> Result<(), DownloadError>;
}

pub struct YtDlp;

#[async_trait]
impl Downloader for YtDlp {
    async fn check_available(&self) -> Result<(), DownloadError> {
        which::which(YT_DLP)
            .map(|_| ())
            .map_err(|_| DownloadError::DependencyNotFound(YT_DLP))
    }

    async fn fetch_info(&self, url: &Url) -> Result<MediaInfo, DownloadError> {
        tracing::debug!("Extracting info for {}", url);

        let output = Command::new(YT_DLP)
            .args(info_args(url))
            .output()
            .await?;

        if !output.status.success() {
            return Err(DownloadError::ExtractionFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        parse_info(&output.stdout)
    }

    async fn download_audio(&self, url: &Url, folder: &Path) -> Result<(), DownloadError> {
        tracing::info!("Downloading audio from {} into {}", url, folder.display());
        run(audio_args(url, folder)).await
    }

    async fn download_video(&self, url: &Url, dir: &Path) -> Result<(), DownloadError> {
        tracing::info!("Downloading video from {} into {}", url, dir.display());
        run(video_args(url, dir)).await
    }
}

async fn run(args: Vec<OsString>) -> Result<(), DownloadError> {
    let status = Command::new(YT_DLP).args(args).status().await?;

    if !status.success() {
        return Err(DownloadError::DownloadFailed(format!(
            "{} exited with status: {}",
            YT_DLP, status
        )));
    }

    Ok(())
}

fn info_args(url: &Url) -> Vec<OsString> {
    vec![
        "--flat-playlist".into(),
        "--dump-single-json".into(),
        "--no-warnings".into(),
        url.as_str().into(),
    ]
}

/// Best audio, converted to 192 kbps MP3 and named after the video title
fn audio_args(url: &Url, folder: &Path) -> Vec<OsString> {
    let mut template = folder.as_os_str().to_owned();
    template.push("/%(title)s.%(ext)s");

    vec![
        "--format".into(),
        "bestaudio/best".into(),
        "--extract-audio".into(),
        "--audio-format".into(),
        "mp3".into(),
        "--audio-quality".into(),
        "192K".into(),
        "--yes-playlist".into(),
        "--output".into(),
        template,
        url.as_str().into(),
    ]
}

/// At most 480p, merged with the best audio into an MP4
fn video_args(url: &Url, dir: &Path) -> Vec<OsString> {
    let mut template = dir.as_os_str().to_owned();
    template.push("/%(title)s.%(ext)s");

    vec![
        "--format".into(),
        "bestvideo[height<=480]+bestaudio/best[height<=480]".into(),
        "--merge-output-format".into(),
        "mp4".into(),
        "--no-playlist".into(),
        "--output".into(),
        template,
        url.as_str().into(),
    ]
}

#[derive(Debug, Deserialize)]
struct YtDlpInfo {
    id: Option<String>,
    title: Option<String>,
    uploader: Option<String>,
    webpage_url: Option<String>,
    /// Only present for playlists; unavailable videos show up as null
    entries: Option<Vec<Option<PlaylistEntry>>>,
}

fn parse_info(json: &[u8]) -> Result<MediaInfo, DownloadError> {
    let info: YtDlpInfo = serde_json::from_slice(json)
        .map_err(|e| DownloadError::ExtractionFailed(e.to_string()))?;

    Ok(match info.entries {
        Some(entries) => MediaInfo::Playlist(entries.into_iter().flatten().collect()),
        None => MediaInfo::Single(PlaylistEntry {
            id: info.id,
            title: info.title,
            uploader: info.uploader,
            url: info.webpage_url,
        }),
    })
}
