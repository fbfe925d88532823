// bases/transfer_cli/src/output.rs
use std::path::Path;
use track_sequencer::{FileHandle, TransferReport};

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_directories(&self, source: &Path, target: &Path) {
        println!("\tSource directory: {}", source.display());
        println!("\tTarget directory: {}", target.display());
    }

    pub fn print_listing(&self, heading: &str, files: &[FileHandle]) {
        println!("{}:", heading);
        for file in files {
            println!("\t{}", file.name());
        }
    }

    pub fn print_report(&self, report: &TransferReport) {
        println!(
            "Copied {} file(s) to '{}'",
            report.copied.len(),
            report.destination.display()
        );

        if report.failed.is_empty() {
            return;
        }

        println!("Failed to copy {} file(s):", report.failed.len());
        for failure in &report.failed {
            println!("\t{}: {}", failure.file_name, failure.source);
        }
    }

    pub fn print_notice(&self, message: &str) {
        println!("{}", message);
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
