//! Encode command - hide a message in the alpha channel of an image.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::info;

use alphahide::{encode_with_config, ImageSource};

use super::{CodecArgs, CommandExecutor};

/// Hide a text message in an image's alpha channel.
///
/// The carrier can be a file path, a `file://` URL or a `data:` URL.
/// The result is always written as PNG.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Carrier image (path, file:// URL or data: URL)
    #[arg(short, long)]
    pub image: String,

    /// Text message to hide (mutually exclusive with --file)
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the message from a UTF-8 text file (mutually exclusive with --message)
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, required_unless_present = "data_url")]
    pub output: Option<PathBuf>,

    /// Print the result as a data: URL instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub data_url: bool,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let message = self.read_message()?;
        let config = self.codec.resolve()?;

        let rendered = encode_with_config(&message, ImageSource::from(self.image.as_str()), &config)
            .context("Failed to encode message")?;

        info!(
            width = rendered.width(),
            height = rendered.height(),
            bytes = rendered.as_bytes().len(),
            "encoded"
        );

        if self.data_url {
            println!("{}", rendered.to_data_url());
            return Ok(());
        }

        if let Some(output) = &self.output {
            rendered
                .save(output)
                .with_context(|| format!("Failed to write image: {}", output.display()))?;
            eprintln!(
                "Hidden {} characters in {}",
                message.chars().count(),
                output.display()
            );
        }
        Ok(())
    }
}

impl EncodeCommand {
    fn read_message(&self) -> Result<String> {
        match (&self.message, &self.file) {
            (Some(message), None) => Ok(message.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read message file: {}", path.display())),
            _ => bail!("Provide either --message or --file"),
        }
    }
}
