use thiserror::Error;

/// Error type for codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Invalid base '{character}' at position {position}: only A, C, G and T are allowed")]
    InvalidSequence { character: char, position: usize },
    #[error("Length mismatch: plan for {sequence_len} bases has {expected} units, got {found}")]
    LengthMismatch {
        sequence_len: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unit width mismatch at index {index}: plan expects {expected} bits, got {found}")]
    UnitWidthMismatch {
        index: usize,
        expected: u32,
        found: u32,
    },
    #[error("Invalid comparison range: {0}")]
    InvalidRange(String),
    #[error("Encoded value is {bits} bits wide but {len} bases only hold {capacity}")]
    ValueOutOfRange { bits: u64, len: usize, capacity: usize },
    #[error("Sequence length {len} is too large: its bit length overflows usize")]
    LengthTooLarge { len: usize },
}
