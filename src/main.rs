//! Gateway Response CLI
//!
//! Renders a body through the response capture and prints the structured
//! gateway record, or turns a record back into the raw body bytes.
//!
//! ```text
//! gateway-response render --file logo.png -H 'Cache-Control: max-age=60'
//! gateway-response decode record.json > logo.png
//! ```

use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

use axum::http::{HeaderName, HeaderValue};
use clap::{Parser, Subcommand};
use tokio::io::AsyncReadExt;

use gateway_response::config::{load_config, AdapterConfig, FallbackConfig};
use gateway_response::observability::init_logging;
use gateway_response::{finalize_or_fallback, ProxyResponse, ResponseCapture, ResponseSink};

#[derive(Parser)]
#[command(name = "gateway-response")]
#[command(about = "Render handler output as a gateway response record", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture a body and print the gateway record as JSON
    Render {
        /// Body source; stdin when omitted.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Explicit status code.
        #[arg(short, long)]
        status: Option<u16>,

        /// Response header as 'Name: value'; repeatable.
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,

        /// Pretty-print the record.
        #[arg(long)]
        pretty: bool,
    },
    /// Read a gateway record and write its original body bytes to stdout
    Decode {
        /// Record source; stdin when omitted.
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AdapterConfig::default(),
    };
    init_logging(&config.observability)?;

    match cli.command {
        Commands::Render {
            file,
            status,
            headers,
            pretty,
        } => {
            let body = read_input(file.as_deref()).await?;
            let response = render(&body, status, &headers, &config.fallback)?;
            let json = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                response.to_json()?
            };
            println!("{}", json);
        }
        Commands::Decode { file } => {
            let input = read_input(file.as_deref()).await?;
            let body = decode(&input)?;

            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&body)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Run `body` through a fresh capture the way a handler would.
fn render(
    body: &[u8],
    status: Option<u16>,
    headers: &[String],
    fallback: &FallbackConfig,
) -> Result<ProxyResponse, Box<dyn Error>> {
    let mut capture = ResponseCapture::new();
    for header in headers {
        let (name, value) = parse_header(header)?;
        capture.headers_mut().append(name, value);
    }
    if let Some(status) = status {
        capture.write_status(status);
    }
    // An explicit status with no body is a complete response on its own.
    if !body.is_empty() || status.is_none() {
        capture.write_all(body)?;
    }

    Ok(finalize_or_fallback(capture, fallback))
}

/// Original body bytes of a JSON gateway record.
fn decode(input: &[u8]) -> Result<Vec<u8>, Box<dyn Error>> {
    let response: ProxyResponse = serde_json::from_slice(input)?;
    Ok(response.decoded_body()?)
}

async fn read_input(path: Option<&Path>) -> Result<Vec<u8>, std::io::Error> {
    match path {
        Some(path) => tokio::fs::read(path).await,
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin().read_to_end(&mut buf).await?;
            Ok(buf)
        }
    }
}

fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue), Box<dyn Error>> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("header '{}' is not in 'Name: value' form", raw))?;
    let name = HeaderName::from_bytes(name.trim().as_bytes())?;
    let value = HeaderValue::from_str(value.trim())?;
    Ok((name, value))
}
