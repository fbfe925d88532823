// bases/download_cli/src/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Download albums, videos and playlist listings through yt-dlp
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to work in
    #[arg(short = 'C', long, default_value = ".")]
    pub work_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download a playlist as a tagged MP3 album. Missing values are prompted for.
    Album {
        #[arg(long)]
        artist: Option<String>,

        #[arg(long)]
        album: Option<String>,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1000..=9999))]
        year: Option<u32>,

        /// Playlist URL
        url: Option<String>,
    },

    /// Download a single video as MP4, at most 480p
    Video { url: Option<String> },

    /// Export a playlist's titles, channels and URLs to CSV
    PlaylistCsv {
        url: Option<String>,

        /// Output CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn album_arguments_parse() {
        let args = Args::try_parse_from([
            "media-dl",
            "album",
            "--artist",
            "Band",
            "--album",
            "Record",
            "--year",
            "2001",
            "https://www.youtube.com/playlist?list=PL1",
        ])
        .unwrap();

        match args.command {
            Command::Album {
                artist,
                album,
                year,
                url,
            } => {
                assert_eq!(artist.as_deref(), Some("Band"));
                assert_eq!(album.as_deref(), Some("Record"));
                assert_eq!(year, Some(2001));
                assert!(url.is_some());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[rstest]
    #[case("999")]
    #[case("10000")]
    #[case("nineteen")]
    fn album_year_must_be_four_digits(#[case] year: &str) {
        let result = Args::try_parse_from(["media-dl", "album", "--year", year]);
        assert!(result.is_err());
    }

    #[test]
    fn values_may_be_left_for_prompting() {
        let args = Args::try_parse_from(["media-dl", "playlist-csv"]).unwrap();
        assert!(matches!(
            args.command,
            Command::PlaylistCsv {
                url: None,
                output: None
            }
        ));
        assert_eq!(args.work_dir, PathBuf::from("."));
    }
}
