use anyhow::{Context, Result};
use twobit_codec::Codec;

use crate::args::{CompareArgs, OutputFormat};
use crate::printing::{print_mismatches, print_tolerance};

/// Compare two sequences over the length of the shorter one.
pub fn compare_sequences(codec: &Codec, args: &CompareArgs, format: OutputFormat) -> Result<()> {
    let first = codec
        .encode(&args.first)
        .context("Failed to encode first sequence")?;
    let second = codec
        .encode(&args.second)
        .context("Failed to encode second sequence")?;
    let shortest = first.len().min(second.len());
    let compared = shortest.saturating_sub(args.end_clip);

    match args.tolerance {
        Some(tolerance) => {
            let within = codec
                .within_mismatch_tolerance(&first, &second, shortest, tolerance, args.end_clip)?;
            print_tolerance(compared, tolerance, within, format)
        }
        None => {
            let mismatches = codec.count_mismatches(&first, &second, shortest, args.end_clip)?;
            print_mismatches(compared, mismatches, format)
        }
    }
}
