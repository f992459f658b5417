use num_bigint::BigUint;
use num_traits::One;

/// Bases held by one `u32` digit of an encoded value.
pub const BASES_PER_DIGIT: usize = 16;

/// Low bit of every 2-bit pair in a `u64`.
const PAIR_LOW_BITS: u64 = 0x5555_5555_5555_5555;

/// Keep the low `bits` bits of `value`.
pub fn low_bits(value: &BigUint, bits: usize) -> BigUint {
    if value.bits() <= bits as u64 {
        return value.clone();
    }
    let mask = (BigUint::one() << bits) - BigUint::one();
    value & &mask
}

/// Count 2-bit pairs with any bit set among the first `pairs` pairs of a
/// little-endian `u64` digit slice. Stops early once the count exceeds `limit`.
pub fn count_nonzero_pairs(digits: &[u64], pairs: usize, limit: Option<usize>) -> usize {
    let mut count = 0;
    let mut remaining = pairs;
    for &word in digits {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(32);
        let mut folded = (word | (word >> 1)) & PAIR_LOW_BITS;
        if take < 32 {
            folded &= (1u64 << (2 * take)) - 1;
        }
        count += folded.count_ones() as usize;
        if limit.is_some_and(|limit| count > limit) {
            break;
        }
        remaining -= take;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_bits_masks_high_end() {
        let value = BigUint::from(0b1110_0100u32);
        assert_eq!(low_bits(&value, 4), BigUint::from(0b0100u32));
        assert_eq!(low_bits(&value, 64), value);
        assert_eq!(low_bits(&value, 0), BigUint::from(0u32));
    }

    #[test]
    fn test_count_nonzero_pairs() {
        // pairs: 01, 00, 11, 10 (low to high)
        let digits = [0b10_11_00_01u64];
        assert_eq!(count_nonzero_pairs(&digits, 4, None), 3);
        assert_eq!(count_nonzero_pairs(&digits, 2, None), 1);
        assert_eq!(count_nonzero_pairs(&digits, 0, None), 0);
    }

    #[test]
    fn test_count_spans_words_and_stops_early() {
        let digits = [u64::MAX, u64::MAX];
        assert_eq!(count_nonzero_pairs(&digits, 64, None), 64);
        assert_eq!(count_nonzero_pairs(&digits, 40, None), 40);
        assert_eq!(count_nonzero_pairs(&digits, 64, Some(3)), 32);
    }
}
