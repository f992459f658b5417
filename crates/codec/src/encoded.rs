//! Encoded and packed sequence representations.

use std::str::FromStr;

use num_bigint::BigUint;
use serde::Serialize;

use crate::alphabet::{Base, BITS_PER_BASE};
use crate::error::CodecError;
use crate::plan::UnitWidth;
use crate::utils::{low_bits, BASES_PER_DIGIT};

/// A sequence encoded as an unsigned integer, 2 bits per base.
///
/// The first base occupies the least significant bits. Trailing `A` bases
/// (code 00) leave no trace in the integer, so the true length is stored
/// alongside it and every decoding step zero-extends to `2 * len` bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedSequence {
    value: BigUint,
    len: usize,
}

impl EncodedSequence {
    /// Wrap a raw encoded integer together with its sequence length.
    ///
    /// Returns `ValueOutOfRange` if `value` needs more than `2 * len` bits,
    /// and `LengthTooLarge` if `2 * len` itself overflows.
    pub fn new(value: BigUint, len: usize) -> Result<Self, CodecError> {
        let capacity = len
            .checked_mul(BITS_PER_BASE)
            .ok_or(CodecError::LengthTooLarge { len })?;
        if value.bits() > capacity as u64 {
            return Err(CodecError::ValueOutOfRange {
                bits: value.bits(),
                len,
                capacity,
            });
        }
        Ok(Self { value, len })
    }

    /// Caller guarantees `value` fits in `2 * len` bits.
    pub(crate) fn from_parts(value: BigUint, len: usize) -> Self {
        debug_assert!(value.bits() <= len.saturating_mul(BITS_PER_BASE) as u64);
        Self { value, len }
    }

    /// Encode a base sequence. Lowercase input is normalized.
    pub fn encode(seq: &str) -> Result<Self, CodecError> {
        let mut digits: Vec<u32> = Vec::with_capacity(seq.len().div_ceil(BASES_PER_DIGIT));
        let mut digit = 0u32;
        let mut len = 0;

        for (position, character) in seq.chars().enumerate() {
            let base = Base::from_char(character)
                .ok_or(CodecError::InvalidSequence { character, position })?;
            let slot = position % BASES_PER_DIGIT;
            digit |= u32::from(base.code()) << (slot * BITS_PER_BASE);
            if slot == BASES_PER_DIGIT - 1 {
                digits.push(digit);
                digit = 0;
            }
            len = position + 1;
        }
        if len % BASES_PER_DIGIT != 0 {
            digits.push(digit);
        }

        Ok(Self {
            value: BigUint::new(digits),
            len,
        })
    }

    /// The encoded integer.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn into_value(self) -> BigUint {
        self.value
    }

    /// Length in bases.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Base at `index`, or `None` past the end.
    pub fn base(&self, index: usize) -> Option<Base> {
        if index >= self.len {
            return None;
        }
        let digit = self
            .value
            .iter_u32_digits()
            .nth(index / BASES_PER_DIGIT)
            .unwrap_or(0);
        let shift = (index % BASES_PER_DIGIT) * BITS_PER_BASE;
        Some(Base::from_low_bits(u64::from(digit >> shift)))
    }

    /// Iterate over the bases in sequence order, restoring trailing `A`s.
    pub fn bases(&self) -> impl Iterator<Item = Base> + '_ {
        let digits = self.value.to_u32_digits();
        (0..self.len).map(move |index| {
            let digit = digits.get(index / BASES_PER_DIGIT).copied().unwrap_or(0);
            let shift = (index % BASES_PER_DIGIT) * BITS_PER_BASE;
            Base::from_low_bits(u64::from(digit >> shift))
        })
    }

    /// Decode back to uppercase text.
    pub fn to_sequence(&self) -> String {
        self.bases().map(Base::to_char).collect()
    }

    /// Encoded value of the first `bases` bases.
    pub(crate) fn prefix_value(&self, bases: usize) -> BigUint {
        low_bits(&self.value, bases * BITS_PER_BASE)
    }
}

impl FromStr for EncodedSequence {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::encode(s)
    }
}

/// One storage unit of a packed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PackedUnit {
    U64(u64),
    U32(u32),
    U16(u16),
    U8(u8),
}

impl PackedUnit {
    /// Build a unit of `width` from the low bits of `value`.
    pub fn truncate(width: UnitWidth, value: u64) -> Self {
        match width {
            UnitWidth::U64 => Self::U64(value),
            UnitWidth::U32 => Self::U32(value as u32),
            UnitWidth::U16 => Self::U16(value as u16),
            UnitWidth::U8 => Self::U8(value as u8),
        }
    }

    pub const fn width(self) -> UnitWidth {
        match self {
            Self::U64(_) => UnitWidth::U64,
            Self::U32(_) => UnitWidth::U32,
            Self::U16(_) => UnitWidth::U16,
            Self::U8(_) => UnitWidth::U8,
        }
    }

    /// The unit value widened to `u64`.
    pub const fn get(self) -> u64 {
        match self {
            Self::U64(v) => v,
            Self::U32(v) => v as u64,
            Self::U16(v) => v as u64,
            Self::U8(v) => v as u64,
        }
    }
}

/// Packed storage units, most significant first, in packing plan order.
///
/// The values alone do not identify the sequence length; keep it next to
/// them and never reorder the units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackedValues(Vec<PackedUnit>);

impl PackedValues {
    pub fn new(units: Vec<PackedUnit>) -> Self {
        Self(units)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[PackedUnit] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PackedUnit> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<PackedUnit> {
        self.0
    }
}

impl From<Vec<PackedUnit>> for PackedValues {
    fn from(units: Vec<PackedUnit>) -> Self {
        Self(units)
    }
}

impl<'a> IntoIterator for &'a PackedValues {
    type Item = &'a PackedUnit;
    type IntoIter = std::slice::Iter<'a, PackedUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A sequence operand: already encoded, or packed values with their length.
#[derive(Debug, Clone, Copy)]
pub enum SequenceRef<'a> {
    Encoded(&'a EncodedSequence),
    Packed(&'a PackedValues, usize),
}

impl<'a> From<&'a EncodedSequence> for SequenceRef<'a> {
    fn from(encoded: &'a EncodedSequence) -> Self {
        Self::Encoded(encoded)
    }
}

impl<'a> From<(&'a PackedValues, usize)> for SequenceRef<'a> {
    fn from((values, len): (&'a PackedValues, usize)) -> Self {
        Self::Packed(values, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_acgt_is_228() {
        let encoded = EncodedSequence::encode("ACGT").unwrap();
        assert_eq!(encoded.value(), &BigUint::from(228u32));
        assert_eq!(encoded.len(), 4);
    }

    #[test]
    fn test_first_base_is_least_significant() {
        let encoded = EncodedSequence::encode("TA").unwrap();
        assert_eq!(encoded.value(), &BigUint::from(0b11u32));
        let encoded = EncodedSequence::encode("AT").unwrap();
        assert_eq!(encoded.value(), &BigUint::from(0b1100u32));
    }

    #[test]
    fn test_trailing_a_restored_from_length() {
        let encoded = EncodedSequence::encode("GCAAAA").unwrap();
        assert_eq!(encoded.value(), &BigUint::from(0b01_10u32));
        assert_eq!(encoded.to_sequence(), "GCAAAA");
    }

    #[test]
    fn test_lowercase_is_normalized() {
        let encoded: EncodedSequence = "acgt".parse().unwrap();
        assert_eq!(encoded.to_sequence(), "ACGT");
    }

    #[test]
    fn test_invalid_base_reports_position() {
        let err = EncodedSequence::encode("ACGNT").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidSequence {
                character: 'N',
                position: 3
            }
        );
    }

    #[test]
    fn test_empty_sequence() {
        let encoded = EncodedSequence::encode("").unwrap();
        assert!(encoded.is_empty());
        assert_eq!(encoded.to_sequence(), "");
    }

    #[test]
    fn test_new_rejects_wide_values() {
        assert!(EncodedSequence::new(BigUint::from(228u32), 4).is_ok());
        let err = EncodedSequence::new(BigUint::from(256u32), 4).unwrap_err();
        assert!(matches!(err, CodecError::ValueOutOfRange { bits: 9, .. }));
    }

    #[test]
    fn test_new_rejects_oversized_length() {
        let len = usize::MAX / 2 + 1;
        let err = EncodedSequence::new(BigUint::from(0u32), len).unwrap_err();
        assert_eq!(err, CodecError::LengthTooLarge { len });
    }

    #[test]
    fn test_base_lookup_across_digits() {
        let seq = "ACGTACGTACGTACGTT";
        let encoded = EncodedSequence::encode(seq).unwrap();
        assert_eq!(encoded.base(16), Some(Base::T));
        assert_eq!(encoded.base(15), Some(Base::T));
        assert_eq!(encoded.base(1), Some(Base::C));
        assert_eq!(encoded.base(17), None);
    }

    #[test]
    fn test_prefix_value() {
        let encoded = EncodedSequence::encode("ACGT").unwrap();
        assert_eq!(encoded.prefix_value(2), BigUint::from(0b0100u32));
    }

    #[test]
    fn test_packed_unit_width_and_value() {
        let unit = PackedUnit::truncate(UnitWidth::U8, 0x1FF);
        assert_eq!(unit, PackedUnit::U8(0xFF));
        assert_eq!(unit.width(), UnitWidth::U8);
        assert_eq!(unit.get(), 0xFF);
    }
}
