use std::sync::Arc;
use crate::core::scoring::calculate_compatibility_score;
use crate::models::{CompatibilityScore, Profile, ScoringWeights};
use crate::services::{CacheStats, PairKey, ScoreCache};

/// Pairwise compatibility scorer backed by a shared score cache
///
/// The cache is injected rather than global, so every engine sharing one
/// `Arc<ScoreCache>` also shares its in-flight computations. Keys carry the
/// engine's weights, so engines with different weights sharing a cache keep
/// separate entries.
pub struct CompatibilityEngine {
    weights: ScoringWeights,
    cache: Arc<ScoreCache>,
}

impl CompatibilityEngine {
    pub fn new(weights: ScoringWeights, cache: Arc<ScoreCache>) -> Self {
        Self { weights, cache }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), Arc::new(ScoreCache::new()))
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score two profiles, consulting the cache first
    ///
    /// The cache key is the unordered id pair plus the weights, so `(a, b)`
    /// and `(b, a)` resolve to the same entry. Never fails: missing fields
    /// score neutrally.
    pub async fn calculate_compatibility(&self, a: &Profile, b: &Profile) -> Arc<CompatibilityScore> {
        let key = PairKey::new(&a.id, &b.id).weighted(&self.weights);
        let weights = self.weights;

        self.cache
            .get_or_compute(key, async move {
                let score = calculate_compatibility_score(a, b, &weights);
                tracing::debug!(
                    "Scored {} <-> {}: overall={} breakdown={:?}",
                    a.id,
                    b.id,
                    score.overall,
                    score.breakdown
                );
                score
            })
            .await
    }

    /// Drop all memoized scores
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
