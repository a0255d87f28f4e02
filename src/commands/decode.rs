//! Decode command - recover a message hidden in an image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use alphahide::{decode_with_config, ImageSource};

use super::{CodecArgs, CommandExecutor};

/// Extract a text message from an image's alpha channel.
///
/// The codec options must match the ones used for encoding. A mismatch
/// produces garbage text rather than an error.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Image holding the message (path, file:// URL or data: URL)
    #[arg(short, long)]
    pub image: String,

    /// Write the message to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        let config = self.codec.resolve()?;

        let message = decode_with_config(ImageSource::from(self.image.as_str()), &config)
            .context("Failed to decode message")?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &message)
                    .with_context(|| format!("Failed to write output: {}", path.display()))?;
                eprintln!("Decoded {} characters to {}", message.chars().count(), path.display());
            }
            None => println!("{}", message),
        }
        Ok(())
    }
}
