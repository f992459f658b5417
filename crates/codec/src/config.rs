//! Codec configuration.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::strategies::{Lru, Unbounded};
use crate::traits::EvictionPolicy;

/// Eviction policies for the packing plan cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CachePolicy {
    /// Keep every plan (default).
    #[default]
    Unbounded,
    /// Keep at most `capacity` plans, least recently used evicted first.
    Lru { capacity: NonZeroUsize },
}

impl CachePolicy {
    /// Build the policy object installed in a codec's cache.
    pub fn build(&self) -> Box<dyn EvictionPolicy> {
        match self {
            CachePolicy::Unbounded => Box::new(Unbounded),
            CachePolicy::Lru { capacity } => Box::new(Lru::new(*capacity)),
        }
    }
}

impl std::fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unbounded"),
            Self::Lru { capacity } => write!(f, "lru:{capacity}"),
        }
    }
}

impl std::str::FromStr for CachePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            None if s == "unbounded" => Ok(Self::Unbounded),
            Some(("lru", capacity)) => capacity
                .parse::<NonZeroUsize>()
                .map(|capacity| Self::Lru { capacity })
                .map_err(|e| format!("Invalid LRU capacity '{capacity}': {e}")),
            _ => Err(format!(
                "Unknown cache policy: {s}. Available: unbounded, lru:<capacity>"
            )),
        }
    }
}

/// Settings for a [`Codec`](crate::Codec) instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Eviction policy for the packing plan cache
    #[serde(default)]
    pub cache: CachePolicy,
}

impl CodecConfig {
    pub fn with_cache(cache: CachePolicy) -> Self {
        Self { cache }
    }
}
