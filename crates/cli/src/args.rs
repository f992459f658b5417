use clap::{Args, ValueEnum};
use twobit_codec::BigUint;

use crate::defaults;

/// Output rendering for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per command
    Json,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Encoded integer (decimal)
    #[arg(long)]
    pub value: BigUint,

    /// True sequence length in bases
    ///
    /// Required because trailing A bases are not stored in the integer.
    #[arg(short, long)]
    pub length: usize,
}

#[derive(Args, Debug)]
pub struct UnpackArgs {
    /// True sequence length in bases
    #[arg(short, long)]
    pub length: usize,

    /// Packed unit values, most significant first
    #[arg(required = true, num_args = 1..)]
    pub units: Vec<u64>,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First sequence
    pub first: String,

    /// Second sequence
    pub second: String,

    /// Trailing bases excluded from the comparison
    #[arg(long, default_value_t = defaults::END_CLIP)]
    pub end_clip: usize,

    /// Report whether the sequences are within this many mismatches
    /// instead of the mismatch count
    #[arg(long)]
    pub tolerance: Option<usize>,
}
