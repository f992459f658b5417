use crate::traits::EvictionPolicy;

/// Policy: keep every plan for the lifetime of the codec.
///
/// The number of distinct sequence lengths seen in practice is small, so
/// this is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl EvictionPolicy for Unbounded {
    fn record_hit(&mut self, _len: usize) {}

    fn record_insert(&mut self, _len: usize) -> Option<usize> {
        None
    }

    fn clear(&mut self) {}
}
