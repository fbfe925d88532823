// bases/transfer_cli/src/config.rs
use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use std::path::{Path, PathBuf};

/// Copy an album's MP3 files into another directory, in track order
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Album directory to copy. Prompted for when omitted.
    pub source: Option<PathBuf>,

    /// Directory the album directory is copied into. Prompted for when omitted.
    pub target: Option<PathBuf>,

    /// Show the sort key of every file and full error chains
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated run configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub source: PathBuf,
    pub target: PathBuf,
    pub verbose: bool,
}

impl Config {
    /// Resolve both directories, asking `prompt` for any that were not given.
    ///
    /// Directories passed as arguments must exist; prompted ones are asked
    /// for again until they do.
    pub fn from_args(
        args: CliArgs,
        mut prompt: impl FnMut(&str) -> Result<PathBuf>,
    ) -> Result<Self> {
        let source = match args.source {
            Some(path) => existing_dir(path)?,
            None => prompt("Enter album directory path")?,
        };

        let target = match args.target {
            Some(path) => existing_dir(path)?,
            None => prompt(
                "Enter target directory. This is where the album directory will be copied",
            )?,
        };

        Ok(Self {
            source,
            target,
            verbose: args.verbose,
        })
    }
}

fn existing_dir(path: PathBuf) -> Result<PathBuf> {
    if path.is_dir() {
        Ok(path)
    } else {
        Err(eyre!("Invalid directory: {}", path.display()))
    }
}

/// Keep asking until an existing directory is entered
pub fn prompt_directory(prompt: &str) -> Result<PathBuf> {
    loop {
        let input: String = dialoguer::Input::new()
            .with_prompt(prompt)
            .interact_text()?;

        let path = Path::new(input.trim());
        if path.is_dir() {
            return Ok(path.to_path_buf());
        }

        println!("Invalid directory. Please enter a valid directory path.");
    }
}
