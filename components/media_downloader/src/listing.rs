// components/media_downloader/src/listing.rs
use crate::types::{AlbumInfo, DownloadError, PlaylistEntry};
use std::io::Write;
use std::path::Path;

pub const INFO_FILE_NAME: &str = "info.txt";

/// `01   Title` style line, index starting at 1
pub fn numbered_line(index: usize, title: &str) -> String {
    format!("{:<5}{}", format!("{:02}", index + 1), title)
}

fn numbered_lines(titles: &[String]) -> String {
    titles
        .iter()
        .enumerate()
        .map(|(index, title)| numbered_line(index, title) + "\n")
        .collect()
}

/// Track list as printed to the terminal
pub fn format_track_listing(heading: &str, titles: &[String]) -> String {
    format!("{:-^40}\n{}", heading, numbered_lines(titles))
}

/// Contents of the album's `info.txt`: folder name, source URL, track list
pub fn format_info_file(info: &AlbumInfo) -> String {
    format!(
        "{}\n\n{}\n\n{:-^20}\n{}",
        info.dir_name(),
        info.url,
        "Tracks",
        numbered_lines(&info.tracks)
    )
}

pub fn write_info_file(info: &AlbumInfo, folder: &Path) -> Result<(), DownloadError> {
    let path = folder.join(INFO_FILE_NAME);
    std::fs::write(&path, format_info_file(info))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Write `Title,Channel,URL` rows, returning the number of entries written
pub fn write_playlist_csv<W: Write>(
    writer: W,
    entries: &[PlaylistEntry],
) -> Result<usize, DownloadError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Title", "Channel", "URL"])?;

    for entry in entries {
        let url = entry.watch_url();
        csv.write_record([
            entry.title_or_unknown(),
            entry.channel_or_unknown(),
            url.as_deref().unwrap_or(PlaylistEntry::UNKNOWN),
        ])?;
    }

    csv.flush()?;
    Ok(entries.len())
}
