use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;
use twobit_codec::{CachePolicy, CodecConfig};

use crate::defaults;

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => defaults::LOG_LEVEL,
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read the codec configuration file, if any, then apply the `--cache` override.
pub fn load_config(path: Option<&Path>, cache: Option<CachePolicy>) -> Result<CodecConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str::<CodecConfig>(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        }
        None => CodecConfig::default(),
    };
    if let Some(cache) = cache {
        config.cache = cache;
    }
    Ok(config)
}
