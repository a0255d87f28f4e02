//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod capacity;
mod decode;
mod encode;

pub use capacity::CapacityCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use alphahide::StegoConfig;

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Codec options shared by every command.
///
/// Values are resolved in order: defaults, then `--config`, then flags.
#[derive(Args, Debug, Clone)]
pub struct CodecArgs {
    /// TOML file with `t`, `threshold` and `code_unit_size`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bits per symbol (1-7)
    #[arg(short, long)]
    pub t: Option<u8>,

    /// Symbols per share block (decode supports only 1)
    #[arg(long)]
    pub threshold: Option<usize>,

    /// Bits per message code unit (8 = UTF-8 bytes, 16 = UTF-16)
    #[arg(long)]
    pub code_unit_size: Option<u32>,
}

impl CodecArgs {
    /// Builds the effective configuration.
    pub fn resolve(&self) -> Result<StegoConfig> {
        let mut config = match &self.config {
            Some(path) => StegoConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => StegoConfig::default(),
        };

        if let Some(t) = self.t {
            config = config.with_t(t);
        }
        if let Some(threshold) = self.threshold {
            config = config.with_threshold(threshold);
        }
        if let Some(code_unit_size) = self.code_unit_size {
            config = config.with_code_unit_size(code_unit_size);
        }

        config.validate().context("Invalid codec configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args() -> CodecArgs {
        CodecArgs {
            config: None,
            t: None,
            threshold: None,
            code_unit_size: None,
        }
    }

    #[test]
    fn test_resolve_defaults() {
        assert_eq!(args().resolve().unwrap(), StegoConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("codec.toml");
        std::fs::write(&path, "t = 5\ncode_unit_size = 8\n").unwrap();

        let mut codec = args();
        codec.config = Some(path);
        codec.t = Some(2);

        let config = codec.resolve().unwrap();
        assert_eq!(config.t, 2);
        assert_eq!(config.code_unit_size, 8);
        assert_eq!(config.threshold, 1);
    }

    #[test]
    fn test_resolve_rejects_invalid() {
        let mut codec = args();
        codec.t = Some(9);
        assert!(codec.resolve().is_err());
    }
}
