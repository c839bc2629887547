//! `sha1sum`: print the SHA-1 digest of a message given on the command line

use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;
use sha1sum::{compute_digest, Error, Sha1Digest};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Print the SHA-1 digest of MESSAGE as 40 lowercase hex digits.
#[derive(Parser, Debug)]
#[command(name = "sha1sum", version, about)]
struct Cli {
    /// Message text to hash; the empty message when omitted
    #[arg(value_parser = clap::value_parser!(OsString))]
    message: Option<OsString>,
}

/// Encode the positional argument as UTF-8 bytes
fn message_bytes(message: Option<OsString>) -> sha1sum::Result<Vec<u8>> {
    match message {
        None => Ok(Vec::new()),
        Some(raw) => raw
            .into_string()
            .map(String::into_bytes)
            .map_err(|raw| Error::encoding("command-line message", format!("{:?}", raw))),
    }
}

fn run(cli: Cli) -> Result<Sha1Digest> {
    let message = message_bytes(cli.message)?;
    debug!(message_len = message.len(), "hashing command-line message");
    Ok(compute_digest(&message)?)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let digest = run(Cli::parse())?;
    println!("{}", digest);
    Ok(())
}
