//! 2-bit DNA sequence codec.
//!
//! Packs sequences over {A, C, G, T} into an unsigned integer (2 bits per
//! base, first base least significant), splits that integer into
//! byte-aligned 64/32/16/8-bit storage units, and compares encoded
//! sequences for mismatches without decoding them to text.

mod alphabet;
mod cache;
mod codec;
mod compare;
mod config;
mod encoded;
mod error;
mod plan;
mod strategies;
mod traits;
mod utils;

pub use alphabet::{Base, BITS_PER_BASE};
pub use cache::CacheStats;
pub use codec::Codec;
pub use config::{CachePolicy, CodecConfig};
pub use encoded::{EncodedSequence, PackedUnit, PackedValues, SequenceRef};
pub use error::CodecError as Error;
pub use error::CodecError;
pub use plan::{BitLength, LengthOrSequence, PackingPlan, UnitWidth};
pub use strategies::{Lru, Unbounded};
pub use traits::EvictionPolicy;

/// Re-exported so callers can build and inspect encoded values.
pub use num_bigint::BigUint;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_round_trip() {
        let codec = Codec::default();
        let seq = "ACGTACGTACGTACGTACGT";

        let encoded = codec.encode(seq).unwrap();
        assert_eq!(codec.decode(&encoded).unwrap(), seq);

        let packed = codec.pack(seq).unwrap();
        assert_eq!(codec.unpack(&packed, seq.len()).unwrap(), encoded);

        let other = codec.encode("ATGTTCCTACGTACGTACCT").unwrap();
        assert_eq!(codec.count_mismatches(&encoded, &other, 20, 0).unwrap(), 4);
        // the fourth mismatch sits in the last three bases
        assert!(!codec.within_mismatch_tolerance(&encoded, &other, 20, 3, 0).unwrap());
        assert!(codec.within_mismatch_tolerance(&encoded, &other, 20, 3, 3).unwrap());
    }
}
