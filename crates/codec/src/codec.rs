use std::borrow::Cow;
use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::Zero;
use parking_lot::Mutex;

use crate::cache::{CacheStats, PlanCache};
use crate::config::CodecConfig;
use crate::encoded::{EncodedSequence, PackedUnit, PackedValues, SequenceRef};
use crate::error::CodecError;
use crate::plan::{BitLength, LengthOrSequence, PackingPlan};
use crate::strategies::Unbounded;
use crate::traits::EvictionPolicy;

/// 2-bit DNA codec.
///
/// Every operation is a pure function of its inputs except for the packing
/// plan cache, which memoizes one plan per distinct sequence length. The
/// cache sits behind a mutex, so a single `Codec` can be shared between
/// threads.
///
/// ```rust
/// # use twobit_codec::Codec;
/// let codec = Codec::new();
/// let packed = codec.pack("ACGTACGTAC").unwrap();
/// assert_eq!(codec.decode((&packed, 10usize)).unwrap(), "ACGTACGTAC");
/// ```
#[derive(Debug)]
pub struct Codec {
    cache: Mutex<PlanCache>,
}

impl Codec {
    /// Codec with an unbounded plan cache.
    pub fn new() -> Self {
        Self::with_policy(Box::new(Unbounded))
    }

    /// Codec whose plan cache uses `policy` for eviction.
    pub fn with_policy(policy: Box<dyn EvictionPolicy>) -> Self {
        Self {
            cache: Mutex::new(PlanCache::new(policy)),
        }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self::with_policy(config.cache.build())
    }

    /// Sequence bits and padding bits for a length or a sequence.
    pub fn bit_length<'a>(
        &self,
        input: impl Into<LengthOrSequence<'a>>,
    ) -> Result<BitLength, CodecError> {
        Ok(self.plan_for(input.into().resolve())?.bit_length())
    }

    /// Packing plan for a length or a sequence, served from the cache.
    pub fn packing_plan<'a>(
        &self,
        input: impl Into<LengthOrSequence<'a>>,
    ) -> Result<Arc<PackingPlan>, CodecError> {
        self.plan_for(input.into().resolve())
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.lock().stats()
    }

    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    /// Encode a sequence of A, C, G, T (any case) into its 2-bit integer form.
    pub fn encode(&self, seq: &str) -> Result<EncodedSequence, CodecError> {
        EncodedSequence::encode(seq)
    }

    /// Decode an encoded sequence, or packed values with their length, to text.
    pub fn decode<'a>(&self, input: impl Into<SequenceRef<'a>>) -> Result<String, CodecError> {
        Ok(self.resolve(input.into())?.to_sequence())
    }

    /// Encode `seq`, pad it to a byte boundary and split it into plan units.
    pub fn pack(&self, seq: &str) -> Result<PackedValues, CodecError> {
        let encoded = self.encode(seq)?;
        let plan = self.plan_for(encoded.len())?;
        let padded: BigUint = encoded.value() << plan.bit_length().padding_bits;

        let units = plan
            .layout()
            .map(|(width, offset)| {
                let low = (&padded >> offset).iter_u64_digits().next().unwrap_or(0);
                PackedUnit::truncate(width, low)
            })
            .collect();
        Ok(PackedValues::new(units))
    }

    /// Reassemble packed values into the encoded sequence of length `len`.
    pub fn unpack(&self, values: &PackedValues, len: usize) -> Result<EncodedSequence, CodecError> {
        let plan = self.plan_for(len)?;
        if values.len() != plan.len() {
            return Err(CodecError::LengthMismatch {
                sequence_len: len,
                expected: plan.len(),
                found: values.len(),
            });
        }

        let mut padded = BigUint::zero();
        for (index, (unit, (width, offset))) in values.iter().zip(plan.layout()).enumerate() {
            if unit.width() != width {
                return Err(CodecError::UnitWidthMismatch {
                    index,
                    expected: width.bits(),
                    found: unit.width().bits(),
                });
            }
            padded |= BigUint::from(unit.get()) << offset;
        }

        let value = padded >> plan.bit_length().padding_bits;
        Ok(EncodedSequence::from_parts(value, len))
    }

    pub(crate) fn plan_for(&self, len: usize) -> Result<Arc<PackingPlan>, CodecError> {
        self.cache.lock().get_or_compute(len)
    }

    /// Borrow encoded operands, unpack packed ones.
    pub(crate) fn resolve<'a>(
        &self,
        input: SequenceRef<'a>,
    ) -> Result<Cow<'a, EncodedSequence>, CodecError> {
        match input {
            SequenceRef::Encoded(encoded) => Ok(Cow::Borrowed(encoded)),
            SequenceRef::Packed(values, len) => self.unpack(values, len).map(Cow::Owned),
        }
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CachePolicy;
    use crate::plan::UnitWidth;
    use proptest::prelude::*;
    use rand::Rng;

    fn random_sequence(rng: &mut impl Rng, len: usize) -> String {
        (0..len).map(|_| ['A', 'C', 'G', 'T'][rng.gen_range(0..4)]).collect()
    }

    #[test]
    fn test_decode_228() {
        let codec = Codec::new();
        let encoded = EncodedSequence::new(BigUint::from(228u32), 4).unwrap();
        assert_eq!(codec.decode(&encoded).unwrap(), "ACGT");
    }

    #[test]
    fn test_pack_single_byte() {
        let codec = Codec::new();
        // ACGT fills one byte exactly, no padding
        let packed = codec.pack("ACGT").unwrap();
        assert_eq!(packed.as_slice(), &[PackedUnit::U8(228)]);
    }

    #[test]
    fn test_pack_shifts_in_padding() {
        let codec = Codec::new();
        // "T": 0b11, padded by 6 bits
        let packed = codec.pack("T").unwrap();
        assert_eq!(packed.as_slice(), &[PackedUnit::U8(0b1100_0000)]);
        assert_eq!(codec.unpack(&packed, 1).unwrap().value(), &BigUint::from(3u32));
    }

    #[test]
    fn test_pack_most_significant_unit_first() {
        let codec = Codec::new();
        // 5 bases -> 10 bits + 6 padding -> one u16
        let packed = codec.pack("AAAAT").unwrap();
        assert_eq!(packed.as_slice(), &[PackedUnit::U16(0b11 << 14)]);

        // 36 bases -> 72 bits -> u64 + u8; the last base lands in the u64
        let seq = format!("{}T", "A".repeat(35));
        let packed = codec.pack(&seq).unwrap();
        assert_eq!(packed.len(), 2);
        assert_eq!(packed.as_slice()[0], PackedUnit::U64(0b11 << 62));
        assert_eq!(packed.as_slice()[1], PackedUnit::U8(0));
    }

    #[test]
    fn test_pack_round_trip_random() {
        let codec = Codec::new();
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let len = rng.gen_range(1..600);
            let seq = random_sequence(&mut rng, len);
            let packed = codec.pack(&seq).expect("Packing failed");
            assert_eq!(codec.decode((&packed, len)).expect("Decoding failed"), seq);
            assert_eq!(codec.unpack(&packed, len).unwrap(), codec.encode(&seq).unwrap());
        }
    }

    #[test]
    fn test_pack_rejects_invalid_sequence() {
        let codec = Codec::new();
        let err = codec.pack("ACGU").unwrap_err();
        assert!(matches!(err, CodecError::InvalidSequence { character: 'U', position: 3 }));
    }

    #[test]
    fn test_unpack_length_mismatch() {
        let codec = Codec::new();
        let packed = codec.pack(&"ACGT".repeat(15)).unwrap();
        let err = codec.unpack(&packed, 20).unwrap_err();
        assert_eq!(
            err,
            CodecError::LengthMismatch {
                sequence_len: 20,
                expected: 2,
                found: 4
            }
        );
        assert!(codec.decode((&packed, 20usize)).is_err());
    }

    #[test]
    fn test_unpack_unit_width_mismatch() {
        let codec = Codec::new();
        let values = PackedValues::new(vec![PackedUnit::U8(0)]);
        let err = codec.unpack(&values, 8).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnitWidthMismatch {
                index: 0,
                expected: 16,
                found: 8
            }
        );
    }

    #[test]
    fn test_empty_sequence_packs_to_nothing() {
        let codec = Codec::new();
        let packed = codec.pack("").unwrap();
        assert!(packed.is_empty());
        assert_eq!(codec.decode((&packed, 0usize)).unwrap(), "");
    }

    #[test]
    fn test_plan_queries_share_cache() {
        let codec = Codec::new();
        let by_len = codec.packing_plan(240usize).unwrap();
        let seq = "ACGT".repeat(60);
        let by_seq = codec.packing_plan(seq.as_str()).unwrap();
        assert!(Arc::ptr_eq(&by_len, &by_seq));
        assert_eq!(by_len.units()[..7], [UnitWidth::U64; 7]);
        assert_eq!(codec.bit_length(240usize).unwrap().padding_bits, 0);

        let stats = codec.cache_stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 2);
    }

    #[test]
    fn test_oversized_length_is_an_error() {
        let codec = Codec::new();
        let len = usize::MAX / 2 + 1;
        let expected = CodecError::LengthTooLarge { len };

        assert_eq!(codec.packing_plan(len).unwrap_err(), expected);
        assert_eq!(codec.bit_length(len).unwrap_err(), expected);
        assert_eq!(codec.unpack(&PackedValues::new(Vec::new()), len).unwrap_err(), expected);
        assert_eq!(codec.decode((&PackedValues::new(Vec::new()), len)).unwrap_err(), expected);
        assert_eq!(codec.cache_stats().entries, 0);
    }

    #[test]
    fn test_from_config_uses_policy() {
        let codec = Codec::from_config(&CodecConfig::with_cache("lru:1".parse().unwrap()));
        codec.packing_plan(1usize).unwrap();
        codec.packing_plan(2usize).unwrap();
        let stats = codec.cache_stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.evictions, 1);

        codec.clear_cache();
        assert_eq!(codec.cache_stats().entries, 0);
        let default = CodecConfig::default();
        assert_eq!(default.cache, CachePolicy::Unbounded);
    }

    #[test]
    fn test_shared_across_threads() {
        let codec = Arc::new(Codec::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let codec = Arc::clone(&codec);
                std::thread::spawn(move || {
                    for len in 0..64 {
                        let seq = "ACGT".repeat(len + t);
                        let packed = codec.pack(&seq).unwrap();
                        assert_eq!(codec.decode((&packed, seq.len())).unwrap(), seq);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        // lengths are 4 * (0..67), each planned once
        assert_eq!(codec.cache_stats().entries, 67);
    }

    proptest! {
        #[test]
        fn prop_encode_decode_round_trip(seq in "[ACGT]{0,300}") {
            let codec = Codec::new();
            let encoded = codec.encode(&seq).unwrap();
            prop_assert_eq!(codec.decode(&encoded).unwrap(), seq);
        }

        #[test]
        fn prop_pack_unpack_round_trip(seq in "[ACGTacgt]{1,300}") {
            let codec = Codec::new();
            let packed = codec.pack(&seq).unwrap();
            let unpacked = codec.unpack(&packed, seq.len()).unwrap();
            prop_assert_eq!(&unpacked, &codec.encode(&seq).unwrap());
            prop_assert_eq!(codec.decode((&packed, seq.len())).unwrap(), seq.to_ascii_uppercase());
        }
    }
}
