use anyhow::{Context, Result};
use twobit_codec::{Codec, EncodedSequence};

use crate::args::{DecodeArgs, OutputFormat};
use crate::printing::{print_encoded, print_sequence};

pub fn encode_sequence(codec: &Codec, sequence: &str, format: OutputFormat) -> Result<()> {
    let encoded = codec
        .encode(sequence)
        .context("Failed to encode sequence")?;
    print_encoded(&encoded, format)
}

pub fn decode_value(codec: &Codec, args: DecodeArgs, format: OutputFormat) -> Result<()> {
    let encoded = EncodedSequence::new(args.value, args.length)
        .context("Encoded value does not fit the given length")?;
    let sequence = codec.decode(&encoded)?;
    print_sequence(&sequence, format)
}
