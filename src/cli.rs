use anyhow::Context;
use base64::Engine;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::domain::{RequestPayload, ResponseField, SubmitError};

/// BFHL Console - browser front-end and command line client for the BFHL service
#[derive(Parser, Debug, Clone)]
#[command(name = "bfhl-console", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "BFHL_CONFIG", default_value = "bfhl.toml", global = true)]
    pub config: PathBuf,

    /// Console server host address
    #[arg(long, env = "BFHL_HOST", global = true)]
    pub host: Option<String>,

    /// Console server port
    #[arg(long, env = "BFHL_PORT", global = true)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Serve the web UI (default)
    Serve,

    /// Check whether the BFHL service is up
    Status,

    /// Submit a JSON payload to the BFHL service
    Submit {
        /// JSON input, e.g. '{"data":["A","1","B","2"]}'
        input: String,

        /// Response field to show; repeat to select several, in order
        #[arg(short, long = "field")]
        fields: Vec<ResponseField>,

        /// File whose contents are sent base64-encoded as `file_b64`
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

/// Build the payload for `submit`.
///
/// The input is validated first, so a malformed payload is reported as such
/// even when the attached file cannot be read. The outer error is an I/O
/// failure on `file`.
pub async fn load_payload(
    input: &str,
    file: Option<&Path>,
) -> anyhow::Result<Result<RequestPayload, SubmitError>> {
    let payload = match RequestPayload::parse(input) {
        Ok(payload) => payload,
        Err(err) => return Ok(Err(err)),
    };

    let Some(path) = file else {
        return Ok(Ok(payload));
    };

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Attaching file as file_b64");
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(Ok(payload.with_file_b64(encoded)))
}
