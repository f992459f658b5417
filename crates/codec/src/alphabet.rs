use core::fmt;

use serde::{Deserialize, Serialize};

/// Bits used to store one base.
pub const BITS_PER_BASE: usize = 2;

/// A DNA base restricted to the four-letter alphabet.
///
/// The discriminant is the 2-bit code stored in encoded sequences
/// (A=00, C=01, G=10, T=11). The mapping is stable and every bit-level
/// routine in the crate relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Base {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Base {
    /// All bases in code order.
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    /// Convert from a 2-bit code (0-3).
    #[inline(always)]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::A),
            1 => Some(Self::C),
            2 => Some(Self::G),
            3 => Some(Self::T),
            _ => None,
        }
    }

    /// Convert from the low two bits of `bits`, ignoring everything above.
    #[inline(always)]
    pub(crate) const fn from_low_bits(bits: u64) -> Self {
        match bits & 0b11 {
            0 => Self::A,
            1 => Self::C,
            2 => Self::G,
            _ => Self::T,
        }
    }

    /// The 2-bit code of this base.
    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Convert from an ASCII byte. Lowercase letters are normalized to
    /// their uppercase base; anything else returns `None`.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte.to_ascii_uppercase() {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert from a `char`, with the same normalization as [`Base::from_ascii`].
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii() {
            Self::from_ascii(c as u8)
        } else {
            None
        }
    }

    /// Uppercase ASCII byte for this base.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
