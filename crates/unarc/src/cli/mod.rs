use std::io;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use unarc_archive::{ArchiveRequest, ErrorKind, Extractor};

pub mod config;
pub mod output;

use config::{Config, Overrides};

#[derive(Debug, Parser)]
#[command(name = "unarc")]
#[command(about = "Extract ZIP, RAR and 7z archives (including .cbr and .cb7)")]
#[command(version)]
pub struct Args {
    /// Archive to extract
    pub archive: PathBuf,

    /// Existing directory to extract into [default: the archive's directory]
    pub output_dir: Option<PathBuf>,

    /// Path to the unrar executable
    #[arg(long, value_name = "PATH")]
    pub unrar: Option<PathBuf>,

    /// Print a JSON report instead of one path per line
    #[arg(long)]
    pub json: bool,

    /// Configuration file [default: ~/.config/unarc/config.toml]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            unrar: self.unrar.clone(),
        }
    }
}

pub fn run(args: Args) -> anyhow::Result<()> {
    if let Some(file) = &args.config {
        if !file.is_file() {
            bail!(figment::Error::from(format!(
                "configuration file not found: {}",
                file.display()
            )));
        }
    }
    let config = Config::load(args.config.as_deref(), &args.overrides())?;
    init_tracing(&config, args.verbose)?;
    debug!(?config, "loaded configuration");

    let extractor = Extractor::new(&config.unrar)?;
    let mut request = ArchiveRequest::new(&args.archive);
    if let Some(dir) = &args.output_dir {
        request = request.destination(dir);
    }
    let report = extractor
        .extract_report(&request)
        .with_context(|| format!("extracting {}", args.archive.display()))?;

    let mut stdout = io::stdout().lock();
    if args.json {
        output::write_json(&mut stdout, &report)?;
    } else {
        output::write_lines(&mut stdout, &report)?;
    }
    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` or the configured level.
fn init_tracing(config: &Config, verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{level}'"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

pub fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<unarc_archive::Error>() {
        return match err.kind() {
            ErrorKind::Io => 1,
            ErrorKind::InvalidInput => 2,
            ErrorKind::UnsupportedFormat => 3,
            ErrorKind::Format => 4,
            ErrorKind::ToolExecution => 5,
            ErrorKind::Configuration => 6,
        };
    }
    if err.downcast_ref::<figment::Error>().is_some() {
        return 6;
    }
    1
}
