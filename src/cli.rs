use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::{parse_date, ScanConfig};
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OrganizeMode {
    /// One subfolder per file extension
    Extension,
    /// lessThan50<Unit> / moreThan100<Unit> size classes
    Size,
    /// Days since last access: under 10, under 20, or more
    Accessed,
}

#[derive(Parser, Debug)]
#[command(name = "doctagger")]
#[command(about = "Document categorizer - tag PDF, DOCX and text files and organize folders", long_about = None)]
pub struct Args {
    /// Folder to scan or organize
    #[arg(long, value_name = "DIR")]
    pub path: PathBuf,

    /// Start of the date window (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// End of the date window (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Comma-separated important keywords
    #[arg(long, value_name = "KEYWORDS")]
    pub important: Option<String>,

    /// Junk keyword list, one keyword per line. Can be specified multiple times.
    #[arg(long, value_name = "FILE")]
    pub junk_file: Vec<PathBuf>,

    /// Configuration file (JSON or YAML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reorganize the folder instead of scanning it
    #[arg(long, value_name = "MODE")]
    pub organize: Option<OrganizeMode>,

    /// Paths left in place by --organize. Can be specified multiple times.
    #[arg(long, value_name = "PATH")]
    pub skip: Vec<PathBuf>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_folder(&self.path)?;
        if let Some(ref from) = self.from {
            parse_date("from", from)?;
        }
        if let Some(ref to) = self.to {
            parse_date("to", to)?;
        }
        if let Some(ref config_path) = self.config {
            if !config_path.exists() {
                anyhow::bail!("Config file does not exist: {}", config_path.display());
            }
        }
        for junk_file in &self.junk_file {
            if !junk_file.exists() {
                anyhow::bail!("Junk keyword file does not exist: {}", junk_file.display());
            }
        }
        Ok(())
    }

    /// Layers the config file and then the command-line flags over the
    /// built-in defaults.
    pub fn scan_config(&self) -> Result<ScanConfig, ConfigError> {
        let mut builder = ScanConfig::builder();

        if let Some(ref config_path) = self.config {
            builder = builder.load_file(config_path)?;
        }
        if let Some(ref important) = self.important {
            builder = builder.important_keywords_csv(important);
        }
        for junk_file in &self.junk_file {
            builder = builder.load_junk_file(junk_file)?;
        }
        if let Some(ref from) = self.from {
            builder = builder.from_date_str(from)?;
        }
        if let Some(ref to) = self.to {
            builder = builder.to_date_str(to)?;
        }
        for skip in &self.skip {
            builder = builder.skip_path(skip);
        }
        if let Ok(exe) = std::env::current_exe() {
            builder = builder.skip_path(exe);
        }

        Ok(builder.build())
    }
}

pub fn validate_folder(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Folder does not exist: {}", path.display());
    }
    if !path.is_dir() {
        anyhow::bail!("Path is not a folder: {}", path.display());
    }
    std::fs::read_dir(path)
        .with_context(|| format!("Cannot read folder: {}", path.display()))?;
    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl OrganizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrganizeMode::Extension => "extension",
            OrganizeMode::Size => "size",
            OrganizeMode::Accessed => "accessed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OrganizeMode::Extension => "Files organized by extension.",
            OrganizeMode::Size => "Files organized by size.",
            OrganizeMode::Accessed => "Files organized by date accessed.",
        }
    }
}
