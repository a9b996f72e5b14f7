//! CLI argument parsing and subcommand dispatch.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use docsum_summarize::{LengthTier, Summarizer};

use crate::pipeline::{self, Upload};

/// Extractive summaries and key points for PDFs, images, and text files.
#[derive(Parser, Debug)]
#[command(name = "docsum", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server (default when no command is given).
    Serve {
        /// Bind address, overrides HOST.
        #[arg(long)]
        host: Option<String>,
        /// Port, overrides PORT.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Summarize a local file and print the JSON response.
    Summarize {
        /// Path to a PDF, image, text, or markdown file.
        path: PathBuf,
        /// Summary length: short, medium, or long. Defaults to DEFAULT_LENGTH.
        #[arg(long, short)]
        length: Option<String>,
    },
}

/// Extract and summarize `path`, returning pretty-printed JSON.
pub fn summarize_file(
    config: &docsum_core::Config,
    path: &std::path::Path,
    length: Option<&str>,
) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed")
        .to_string();
    let length = LengthTier::parse(length.unwrap_or(&config.summarize.default_length));
    info!("Summarizing {} ({} bytes, length={})", path.display(), bytes.len(), length);

    let upload = Upload {
        filename,
        bytes,
        length,
    };
    let response = pipeline::summarize_upload(config, &Summarizer::default(), &upload)?;
    Ok(serde_json::to_string_pretty(&response)?)
}
