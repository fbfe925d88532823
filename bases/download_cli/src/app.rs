// bases/download_cli/src/app.rs
use crate::args::{Args, Command};
use crate::output::OutputHandler;
use crate::prompt;
use color_eyre::Result;
use media_downloader::{AlbumInfo, MediaDownloader};

pub struct App {
    args: Args,
    output: OutputHandler,
}

impl App {
    pub fn new(args: Args) -> Self {
        let output = OutputHandler::new(args.verbose);
        Self { args, output }
    }

    pub async fn run(&self) -> Result<()> {
        let downloader = MediaDownloader::new(&self.args.work_dir).await?;

        match &self.args.command {
            Command::Album {
                artist,
                album,
                year,
                url,
            } => {
                self.output.print_banner();

                let artist = prompt::text(artist.clone(), "Enter artist name")?;
                let album = prompt::text(album.clone(), "Enter album name")?;
                let year = prompt::year(*year)?;
                let url = prompt::url(url.clone(), "Enter YouTube URL")?;

                let mut info = AlbumInfo::new(artist, album, year, &url)?;
                tracing::debug!("Album folder will be '{}'", info.dir_name());

                let media = downloader.fetch_info(&url).await?;
                self.output.print_media_info(&media);
                info.tracks = media.titles();

                let report = downloader.download_album(&info).await?;
                self.output.print_album_complete(&report);
            }

            Command::Video { url } => {
                let url = prompt::url(url.clone(), "Enter video url")?;

                let title = downloader.fetch_video_title(&url).await?;
                self.output.print_video_title(&title);

                downloader.download_video(&url).await?;
            }

            Command::PlaylistCsv { url, output } => {
                let url = prompt::url(url.clone(), "Enter YouTube playlist URL")?;
                let output = prompt::csv_output(output.clone())?;

                let rows = downloader.export_playlist_csv(&url, &output).await?;
                self.output
                    .print_csv_complete(rows, &self.args.work_dir.join(&output));
            }
        }

        Ok(())
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}
