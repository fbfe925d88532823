// bases/download_cli/src/prompt.rs
use color_eyre::Result;
use dialoguer::Input;
use media_downloader::AlbumInfo;
use url::Url;

/// Use the given value or ask for one
pub fn text(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

pub fn year(value: Option<u32>) -> Result<u32> {
    match value {
        Some(year) => Ok(year),
        None => Ok(Input::<u32>::new()
            .with_prompt("Enter album year")
            .validate_with(|year: &u32| {
                if (AlbumInfo::MIN_YEAR..=AlbumInfo::MAX_YEAR).contains(year) {
                    Ok(())
                } else {
                    Err("Year must be between 1000 and 9999")
                }
            })
            .interact_text()?),
    }
}

pub fn url(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(url) => Ok(url),
        None => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| {
                Url::parse(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?),
    }
}

pub fn csv_output(value: Option<std::path::PathBuf>) -> Result<std::path::PathBuf> {
    match value {
        Some(path) => Ok(path),
        None => {
            let name: String = Input::new()
                .with_prompt("Enter output CSV filename")
                .default("playlist_info.csv".to_string())
                .interact_text()?;
            Ok(name.into())
        }
    }
}
