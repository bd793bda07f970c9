use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::fs;
use std::io::Write;
use tracing::info;

use doctagger::cli::{self, OutputFormat};
use doctagger::logging::{self, Verbosity};
use doctagger::output::{OutputFormatter, NO_FILES_MESSAGE};
use doctagger::scanner::{ScanEvent, Scanner};
use doctagger::Organizer;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let config = args.scan_config().context("Invalid configuration")?;

    if let Some(mode) = args.organize {
        let report = Organizer::new(&args.path, config.skip_paths())
            .organize(mode)
            .with_context(|| format!("Failed to organize {}", args.path.display()))?;

        let output = OutputFormatter::format_organize(&report, mode, args.format)?;
        write_report(&output, &args)?;
        return Ok(());
    }

    let scanner = Scanner::new(&config);

    // Text reports on stdout are streamed line by line as files are tagged.
    if args.format == OutputFormat::Text && args.output_file.is_none() {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let mut write_error = None;
        let eligible = scanner
            .scan_with(&args.path, |event| {
                if let ScanEvent::Categorized(record) = event {
                    if let Err(e) = writeln!(out, "{}", OutputFormatter::line(record)) {
                        write_error.get_or_insert(e);
                    }
                }
            })
            .with_context(|| format!("Failed to scan {}", args.path.display()))?;
        if let Some(e) = write_error {
            return Err(e).context("Failed to write report");
        }
        if eligible == 0 {
            writeln!(out, "{NO_FILES_MESSAGE}")?;
        }
        info!(files = eligible, "scan complete");
        return Ok(());
    }

    let report = scanner
        .scan(&args.path)
        .with_context(|| format!("Failed to scan {}", args.path.display()))?;
    let output = OutputFormatter::format(&report, args.format)?;

    write_report(&output, &args)?;
    info!(files = report.eligible_count(), "scan complete");

    Ok(())
}

/// Writes to `-O` when given, stdout otherwise.
fn write_report(output: &str, args: &cli::Args) -> Result<()> {
    if let Some(output_file) = &args.output_file {
        fs::write(output_file, output)
            .with_context(|| format!("Failed to write {}", output_file.display()))?;
        info!(path = %output_file.display(), "report written");
    } else {
        print!("{output}");
        if args.format == OutputFormat::Json {
            println!();
        }
    }
    Ok(())
}
