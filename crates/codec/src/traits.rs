use core::fmt;

/// Eviction contract for the packing plan cache.
///
/// The cache reports every hit and insertion keyed by sequence length. A
/// policy decides which length, if any, should be dropped after an insert.
/// Implementations must be `Send` so a `Codec` can be shared across threads.
pub trait EvictionPolicy: Send + fmt::Debug {
    /// A cached plan for `len` was served.
    fn record_hit(&mut self, len: usize);

    /// A plan for `len` was inserted. Returns the length to evict.
    fn record_insert(&mut self, len: usize) -> Option<usize>;

    /// Forget every tracked length.
    fn clear(&mut self);
}
