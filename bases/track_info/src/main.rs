use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use track_tags::{read_tags, TrackTag};

/// Print the tags of an MP3 file
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// MP3 file to inspect. Prompted for when omitted.
    path: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "track_info=info,track_tags=info".into()),
        )
        .init();

    let args = Args::parse();

    let path = match args.path {
        Some(path) => path,
        None => {
            let input: String = dialoguer::Input::new()
                .with_prompt("Enter MP3 file path")
                .interact_text()?;
            PathBuf::from(input.trim())
        }
    };

    print!("{}", render(read_tags(&path).as_ref()));
    Ok(())
}

fn render(tags: Option<&TrackTag>) -> String {
    let Some(tags) = tags.filter(|t| !t.is_empty()) else {
        return "No Track Info\n".to_string();
    };

    let mut out = format!("{:-^40}\n", "Track Info");
    for (label, value) in tags.fields() {
        out.push_str(&format!(
            "{:<20}{}\n",
            label,
            value.as_deref().unwrap_or("Unknown")
        ));
    }
    out
}
