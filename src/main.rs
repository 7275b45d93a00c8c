use anyhow::{bail, Result};
use clap::Parser;
use hotkey_migrate::{convert_directory_with, ConvertOptions, FailurePolicy, ParseMode};
use log::{info, LevelFilter};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "hotkey-migrate",
    version,
    about = "Convert legacy *.hotkey.user files to shortcuts json"
)]
struct Cli {
    /// Directory containing current.<Category>.{func,butt}.hotkey.user files
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Where to write user.shortcuts.*.json (defaults to DIR)
    #[arg(long, short)]
    output_dir: Option<PathBuf>,

    /// Reject malformed lines and unterminated blocks instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Stop at the first file that fails to convert
    #[arg(long)]
    fail_fast: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print conversion results and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::Off
    } else {
        match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Drop a leading `./` so default runs print bare file names
fn display_path(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let mut options = ConvertOptions::new(&cli.dir)
        .mode(if cli.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        })
        .failure_policy(if cli.fail_fast {
            FailurePolicy::Abort
        } else {
            FailurePolicy::Continue
        });
    if let Some(dir) = &cli.output_dir {
        options = options.output_dir(dir);
    }

    let report = convert_directory_with(&options, |conversion| {
        println!(
            "Converted {} blocks to JSON and saved to {}",
            conversion.records,
            display_path(&conversion.output).display()
        );
    })?;

    if report.conversions.is_empty() && report.failures.is_empty() {
        info!("No hotkey files found in {}", cli.dir.display());
    }

    if !report.is_success() {
        for failure in &report.failures {
            eprintln!("✗ {}: {:#}", failure.input.display(), failure.error);
        }
        bail!(
            "{} of {} hotkey files failed to convert",
            report.failures.len(),
            report.failures.len() + report.conversions.len()
        );
    }

    Ok(())
}
