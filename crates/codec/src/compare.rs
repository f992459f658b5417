//! Mismatch counting on encoded sequences.
//!
//! Two sequences are compared by XOR-ing their encoded integers: a pair of
//! zero bits marks a matching base, anything else a mismatch. Both operands
//! are first cut down to the comparison length so bases past the shorter
//! sequence never leak into the result.

use num_bigint::BigUint;
use num_traits::Zero;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::codec::Codec;
use crate::encoded::{EncodedSequence, SequenceRef};
use crate::error::CodecError;
use crate::utils::count_nonzero_pairs;

/// XOR of two operands over a validated window.
struct Variations {
    digits: Vec<u64>,
    window: usize,
}

impl Codec {
    /// Count mismatching bases among the first `shortest_len - end_clip` bases.
    ///
    /// `shortest_len` must not exceed either operand's length and `end_clip`
    /// must not exceed `shortest_len`; otherwise `InvalidRange` is returned.
    pub fn count_mismatches<'a, 'b>(
        &self,
        a: impl Into<SequenceRef<'a>>,
        b: impl Into<SequenceRef<'b>>,
        shortest_len: usize,
        end_clip: usize,
    ) -> Result<usize, CodecError> {
        Ok(match self.variations(a.into(), b.into(), shortest_len, end_clip)? {
            Some(v) => count_nonzero_pairs(&v.digits, v.window, None),
            None => 0,
        })
    }

    /// Whether the operands differ at no more than `tolerance` bases in the
    /// window. Stops scanning as soon as the tolerance is exceeded.
    pub fn within_mismatch_tolerance<'a, 'b>(
        &self,
        a: impl Into<SequenceRef<'a>>,
        b: impl Into<SequenceRef<'b>>,
        shortest_len: usize,
        tolerance: usize,
        end_clip: usize,
    ) -> Result<bool, CodecError> {
        Ok(match self.variations(a.into(), b.into(), shortest_len, end_clip)? {
            Some(v) => count_nonzero_pairs(&v.digits, v.window, Some(tolerance)) <= tolerance,
            None => true,
        })
    }

    /// Indices of `candidates` within `tolerance` mismatches of `query`.
    ///
    /// Each candidate is compared over the length of the shorter of the two
    /// sequences. Candidates are checked in parallel; the returned indices
    /// are in ascending order.
    pub fn filter_within_tolerance(
        &self,
        query: &EncodedSequence,
        candidates: &[EncodedSequence],
        tolerance: usize,
        end_clip: usize,
    ) -> Result<Vec<usize>, CodecError> {
        let verdicts: Vec<bool> = candidates
            .par_iter()
            .map(|candidate| {
                let shortest = query.len().min(candidate.len());
                self.within_mismatch_tolerance(query, candidate, shortest, tolerance, end_clip)
            })
            .collect::<Result<_, _>>()?;

        let hits: Vec<usize> = verdicts
            .iter()
            .enumerate()
            .filter_map(|(index, &keep)| keep.then_some(index))
            .collect();
        debug!(
            candidates = candidates.len(),
            hits = hits.len(),
            tolerance,
            "filtered candidates by mismatch tolerance"
        );
        Ok(hits)
    }

    /// Validate the window and XOR both operands over it. `None` when they
    /// are identical within `shortest_len`.
    fn variations(
        &self,
        a: SequenceRef<'_>,
        b: SequenceRef<'_>,
        shortest_len: usize,
        end_clip: usize,
    ) -> Result<Option<Variations>, CodecError> {
        let a = self.resolve(a)?;
        let b = self.resolve(b)?;

        if end_clip > shortest_len {
            return Err(CodecError::InvalidRange(format!(
                "end clip {end_clip} exceeds comparison length {shortest_len}"
            )));
        }
        if shortest_len > a.len() || shortest_len > b.len() {
            return Err(CodecError::InvalidRange(format!(
                "comparison length {shortest_len} exceeds operand lengths {} and {}",
                a.len(),
                b.len()
            )));
        }

        let xor: BigUint = a.prefix_value(shortest_len) ^ b.prefix_value(shortest_len);
        if xor.is_zero() {
            trace!(shortest_len, "operands identical over comparison length");
            return Ok(None);
        }
        Ok(Some(Variations {
            digits: xor.to_u64_digits(),
            window: shortest_len - end_clip,
        }))
    }
}
