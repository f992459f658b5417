//! Shared default values for the command-line front end.

/// Trailing bases excluded from comparisons unless `--end-clip` is given.
pub const END_CLIP: usize = 0;

/// Log level used when neither `-v` nor `RUST_LOG` is set.
pub const LOG_LEVEL: &str = "warn";
