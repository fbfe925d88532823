// bases/download_cli/src/output.rs
use media_downloader::{format_track_listing, AlbumReport, MediaInfo};
use std::path::Path;

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_banner(&self) {
        println!("{:-^80}", "YouTube Music Downloader");
    }

    pub fn print_media_info(&self, info: &MediaInfo) {
        let heading = match info {
            MediaInfo::Playlist(_) => "Playlist Tracks",
            MediaInfo::Single(_) => "Single Track",
        };
        print!("{}", format_track_listing(heading, &info.titles()));
    }

    pub fn print_album_complete(&self, report: &AlbumReport) {
        println!(
            "Tagged {} track(s) in {}",
            report.tagged.len(),
            report.directory.display()
        );

        for title in &report.missing {
            println!("Track {} does not exist!", title);
        }
        for (title, error) in &report.failed {
            println!("Could not tag {}: {}", title, error);
        }
    }

    pub fn print_video_title(&self, title: &str) {
        println!("Title of the video: {}", title);
    }

    pub fn print_csv_complete(&self, rows: usize, output: &Path) {
        println!("Playlist data saved to '{}'.", output.display());
        if self.verbose {
            println!("{} entries written", rows);
        }
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {}", error);

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {}", cause);
            });
        }
    }
}
