use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::CodecError;
use crate::plan::PackingPlan;
use crate::traits::EvictionPolicy;

/// Counters describing plan cache activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// Plans currently held
    pub entries: usize,
}

/// Memoized packing plans keyed by sequence length.
#[derive(Debug)]
pub(crate) struct PlanCache {
    plans: HashMap<usize, Arc<PackingPlan>>,
    policy: Box<dyn EvictionPolicy>,
    stats: CacheStats,
}

impl PlanCache {
    pub(crate) fn new(policy: Box<dyn EvictionPolicy>) -> Self {
        Self {
            plans: HashMap::new(),
            policy,
            stats: CacheStats::default(),
        }
    }

    pub(crate) fn get_or_compute(&mut self, len: usize) -> Result<Arc<PackingPlan>, CodecError> {
        if let Some(plan) = self.plans.get(&len) {
            self.stats.hits += 1;
            self.policy.record_hit(len);
            return Ok(Arc::clone(plan));
        }

        let plan = Arc::new(PackingPlan::for_length(len)?);
        self.stats.misses += 1;
        debug!(len, units = plan.len(), "computed packing plan");
        self.plans.insert(len, Arc::clone(&plan));

        if let Some(victim) = self.policy.record_insert(len) {
            if self.plans.remove(&victim).is_some() {
                self.stats.evictions += 1;
                trace!(len = victim, "evicted packing plan");
            }
        }
        Ok(plan)
    }

    pub(crate) fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.plans.len(),
            ..self.stats
        }
    }

    pub(crate) fn clear(&mut self) {
        self.plans.clear();
        self.policy.clear();
    }
}
