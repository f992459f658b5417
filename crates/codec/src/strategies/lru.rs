use std::fmt;
use std::num::NonZeroUsize;

use ::lru::LruCache;

use crate::traits::EvictionPolicy;

/// Policy: hold at most `capacity` plans, evicting the least recently used.
pub struct Lru {
    recency: LruCache<usize, ()>,
}

impl Lru {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            recency: LruCache::new(capacity),
        }
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.recency.cap()
    }
}

impl fmt::Debug for Lru {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lru")
            .field("capacity", &self.recency.cap())
            .field("tracked", &self.recency.len())
            .finish()
    }
}

impl EvictionPolicy for Lru {
    fn record_hit(&mut self, len: usize) {
        self.recency.promote(&len);
    }

    fn record_insert(&mut self, len: usize) -> Option<usize> {
        // `push` also hands back the old entry when `len` was already tracked
        self.recency
            .push(len, ())
            .map(|(victim, ())| victim)
            .filter(|&victim| victim != len)
    }

    fn clear(&mut self) {
        self.recency.clear();
    }
}
