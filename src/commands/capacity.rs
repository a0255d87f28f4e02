//! Capacity command - how much text an image can hold.

use anyhow::{Context, Result};
use clap::Args;

use alphahide::{capacity, share_modulus, ImageLoader, ImageSource, PngImageIo};

use super::{CodecArgs, CommandExecutor};

/// Show how many code units an image can hide.
#[derive(Args, Debug)]
pub struct CapacityCommand {
    /// Image to inspect (path, file:// URL or data: URL)
    #[arg(short, long)]
    pub image: String,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl CommandExecutor for CapacityCommand {
    fn execute(&self) -> Result<()> {
        let config = self.codec.resolve()?;

        let buffer = PngImageIo::new()
            .load(&ImageSource::from(self.image.as_str()))
            .context("Failed to load image")?;

        let units = capacity(buffer.width(), buffer.height(), config.t, config.code_unit_size);
        let prime = share_modulus(config.t);

        println!("Image:        {}x{}", buffer.width(), buffer.height());
        println!(
            "Config:       t={} threshold={} code_unit_size={}",
            config.t, config.threshold, config.code_unit_size
        );
        println!("Modulus:      {} (share bytes {}-254)", prime, 256 - prime);
        println!("Capacity:     {} code units", units);
        println!("Max message:  {} code units", units.saturating_sub(1));
        Ok(())
    }
}
