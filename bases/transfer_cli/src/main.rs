// bases/transfer_cli/src/main.rs
mod config;
mod output;

use clap::Parser;
use color_eyre::Result;
use config::{CliArgs, Config};
use output::OutputHandler;
use track_sequencer::Sequencer;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();

    let default_filter = if args.verbose {
        "transfer_cli=debug,track_sequencer=debug"
    } else {
        "transfer_cli=info,track_sequencer=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let output = OutputHandler::new(args.verbose);
    let config = Config::from_args(args, config::prompt_directory)?;

    output.print_directories(&config.source, &config.target);

    match Sequencer::standard().run(&config.source, &config.target) {
        Ok(outcome) => {
            output.print_listing("Before", &outcome.before);
            output.print_listing("After", &outcome.after);
            output.print_report(&outcome.report);

            tracing::debug!("Transfer into {} finished", outcome.report.destination.display());
            if !outcome.report.is_success() {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(error) if error.is_informational() => {
            output.print_notice(&error.to_string());
            Ok(())
        }
        Err(error) => {
            output.print_error(&color_eyre::Report::new(error));
            std::process::exit(1);
        }
    }
}
