//! Bit-length and packing-plan calculation.
//!
//! A packing plan splits the byte-aligned bit string of an encoded sequence
//! into fixed-width storage units, largest first.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::BITS_PER_BASE;
use crate::error::CodecError;

/// Width of one storage unit in a packing plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitWidth {
    U64,
    U32,
    U16,
    U8,
}

impl UnitWidth {
    /// Available widths, largest to smallest. Plans are built in this order.
    pub const ALL: [UnitWidth; 4] = [UnitWidth::U64, UnitWidth::U32, UnitWidth::U16, UnitWidth::U8];

    #[inline(always)]
    pub const fn bits(self) -> u32 {
        match self {
            Self::U64 => 64,
            Self::U32 => 32,
            Self::U16 => 16,
            Self::U8 => 8,
        }
    }

    /// Mask selecting the low `bits()` bits of a `u64`.
    #[inline(always)]
    pub const fn mask(self) -> u64 {
        match self {
            Self::U64 => u64::MAX,
            Self::U32 => u32::MAX as u64,
            Self::U16 => u16::MAX as u64,
            Self::U8 => u8::MAX as u64,
        }
    }
}

impl fmt::Display for UnitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u{}", self.bits())
    }
}

/// Sequence bits and the zero padding needed to reach a byte boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitLength {
    pub sequence_bits: usize,
    pub padding_bits: usize,
}

impl BitLength {
    /// Fails with `LengthTooLarge` when the padded bit count overflows `usize`.
    pub fn for_length(len: usize) -> Result<Self, CodecError> {
        let sequence_bits = len
            .checked_mul(BITS_PER_BASE)
            .ok_or(CodecError::LengthTooLarge { len })?;
        let padding_bits = (8 - sequence_bits % 8) % 8;
        sequence_bits
            .checked_add(padding_bits)
            .ok_or(CodecError::LengthTooLarge { len })?;
        Ok(Self {
            sequence_bits,
            padding_bits,
        })
    }

    #[inline]
    pub const fn total_bits(&self) -> usize {
        self.sequence_bits + self.padding_bits
    }
}

/// Either a sequence length or a sequence whose length should be measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthOrSequence<'a> {
    Length(usize),
    Sequence(&'a str),
}

impl LengthOrSequence<'_> {
    /// Length in bases. Sequences are measured in characters without validation.
    pub fn resolve(self) -> usize {
        match self {
            Self::Length(len) => len,
            Self::Sequence(seq) => seq.chars().count(),
        }
    }
}

impl From<usize> for LengthOrSequence<'_> {
    fn from(len: usize) -> Self {
        Self::Length(len)
    }
}

impl<'a> From<&'a str> for LengthOrSequence<'a> {
    fn from(seq: &'a str) -> Self {
        Self::Sequence(seq)
    }
}

impl<'a> From<&'a String> for LengthOrSequence<'a> {
    fn from(seq: &'a String) -> Self {
        Self::Sequence(seq.as_str())
    }
}

/// Ordered storage units holding a padded encoded sequence of a given length.
///
/// Units are listed most significant first; a value packed with this plan
/// places its top bits in `units()[0]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackingPlan {
    sequence_len: usize,
    bit_length: BitLength,
    units: Vec<UnitWidth>,
}

impl PackingPlan {
    /// Greedy decomposition: as many units of each width as fit, largest first.
    pub fn for_length(sequence_len: usize) -> Result<Self, CodecError> {
        let bit_length = BitLength::for_length(sequence_len)?;
        let mut remaining = bit_length.total_bits();
        let mut units = Vec::new();

        for width in UnitWidth::ALL {
            let bits = width.bits() as usize;
            let count = remaining / bits;
            units.extend(std::iter::repeat(width).take(count));
            remaining -= count * bits;
        }
        debug_assert_eq!(remaining, 0, "padded bit length must be byte aligned");

        Ok(Self {
            sequence_len,
            bit_length,
            units,
        })
    }

    pub fn sequence_len(&self) -> usize {
        self.sequence_len
    }

    pub fn bit_length(&self) -> BitLength {
        self.bit_length
    }

    pub fn units(&self) -> &[UnitWidth] {
        &self.units
    }

    /// Number of units in the plan.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn total_bits(&self) -> usize {
        self.bit_length.total_bits()
    }

    /// Iterate over `(width, offset)` pairs, where `offset` is the bit
    /// position of the unit's least significant bit in the padded value.
    pub fn layout(&self) -> impl Iterator<Item = (UnitWidth, usize)> + '_ {
        let mut remaining = self.total_bits();
        self.units.iter().map(move |&width| {
            remaining -= width.bits() as usize;
            (width, remaining)
        })
    }
}
