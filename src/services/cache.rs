use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use crate::models::{CompatibilityScore, ScoringWeights};

/// Unordered pair of profile ids, tagged with the weights that scored it
///
/// The ids are stored sorted, so `PairKey::new(a, b) == PairKey::new(b, a)`.
/// Engines with different weights can share one cache without reading each
/// other's scores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    low: String,
    high: String,
    weights: [u64; 4],
}

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self {
            low: low.to_string(),
            high: high.to_string(),
            weights: [0; 4],
        }
    }

    /// Tag the key with the scoring weights (compared bit for bit)
    pub fn weighted(mut self, weights: &ScoringWeights) -> Self {
        self.weights = [
            weights.professional.to_bits(),
            weights.interests.to_bits(),
            weights.intent.to_bits(),
            weights.contextual.to_bits(),
        ];
        self
    }

    pub fn ids(&self) -> (&str, &str) {
        (&self.low, &self.high)
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pair:{}:{}", self.low, self.high)
    }
}

/// Memoized pairwise compatibility scores
///
/// Backed by a moka future cache. `get_with` keeps one in-flight
/// initializer per key, so concurrent misses on the same pair wait for a
/// single computation while other pairs proceed independently. Entries
/// never expire; only `clear` removes them.
pub struct ScoreCache {
    entries: moka::future::Cache<PairKey, Arc<CompatibilityScore>>,
    hits: AtomicU64,
    misses: AtomicU64,
    computations: Arc<AtomicU64>,
}

impl ScoreCache {
    /// Create an unbounded cache with no expiry
    pub fn new() -> Self {
        Self {
            entries: moka::future::Cache::builder().build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            computations: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Look up a cached score without computing
    pub async fn get(&self, key: &PairKey) -> Option<Arc<CompatibilityScore>> {
        self.entries.get(key).await
    }

    /// Return the cached score for `key`, running `init` on a miss
    ///
    /// Concurrent callers missing on the same key await the same `init`.
    pub async fn get_or_compute<F>(&self, key: PairKey, init: F) -> Arc<CompatibilityScore>
    where
        F: Future<Output = CompatibilityScore>,
    {
        if let Some(score) = self.entries.get(&key).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("Score cache hit: {}", key);
            return score;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::trace!("Score cache miss: {}", key);

        let computations = Arc::clone(&self.computations);
        self.entries
            .get_with(key, async move {
                computations.fetch_add(1, Ordering::Relaxed);
                Arc::new(init.await)
            })
            .await
    }

    /// Drop every cached score
    ///
    /// Computations already in flight still deliver their result to waiters.
    pub fn clear(&self) {
        self.entries.invalidate_all();
        tracing::debug!("Score cache cleared");
    }

    /// Number of cached pairs (approximate until pending tasks run)
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.entry_count(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            computations: self.computations.load(Ordering::Relaxed),
        }
    }
}

impl Default for ScoreCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    pub hits: u64,
    pub misses: u64,
    pub computations: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoreBreakdown;
    use std::time::Duration;

    fn score(overall: u8) -> CompatibilityScore {
        CompatibilityScore {
            overall,
            breakdown: ScoreBreakdown::default(),
            reasoning: vec![],
        }
    }

    #[test]
    fn test_pair_key_is_unordered() {
        assert_eq!(PairKey::new("a", "b"), PairKey::new("b", "a"));
        assert_eq!(PairKey::new("b", "a").ids(), ("a", "b"));
        assert_eq!(PairKey::new("x", "y").to_string(), "pair:x:y");
    }

    #[tokio::test]
    async fn test_get_or_compute_memoizes() {
        let cache = ScoreCache::new();

        let first = cache.get_or_compute(PairKey::new("a", "b"), async { score(42) }).await;
        let second = cache.get_or_compute(PairKey::new("b", "a"), async { score(7) }).await;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.overall, 42);

        let stats = cache.stats();
        assert_eq!(stats.computations, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_concurrent_misses_compute_once() {
        let cache = Arc::new(ScoreCache::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let cache = Arc::clone(&cache);
                tokio::spawn(async move {
                    cache
                        .get_or_compute(PairKey::new("a", "b"), async {
                            tokio::time::sleep(Duration::from_millis(20)).await;
                            score(55)
                        })
                        .await
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().overall, 55);
        }

        assert_eq!(cache.stats().computations, 1);
    }

    #[tokio::test]
    async fn test_clear_forces_recompute() {
        let cache = ScoreCache::new();
        let key = PairKey::new("a", "b");

        cache.get_or_compute(key.clone(), async { score(10) }).await;
        cache.clear();
        assert!(cache.get(&key).await.is_none());

        let recomputed = cache.get_or_compute(key, async { score(20) }).await;
        assert_eq!(recomputed.overall, 20);
        assert_eq!(cache.stats().computations, 2);
    }

    #[tokio::test]
    async fn test_entries_are_never_evicted() {
        let cache = ScoreCache::new();

        for i in 0..2_000 {
            cache
                .get_or_compute(PairKey::new("subject", &format!("c{}", i)), async { score(1) })
                .await;
        }

        for i in 0..2_000 {
            assert!(cache.get(&PairKey::new("subject", &format!("c{}", i))).await.is_some());
        }
        assert_eq!(cache.stats().computations, 2_000);
    }

    #[test]
    fn test_pair_key_separates_weights() {
        let default = PairKey::new("a", "b").weighted(&ScoringWeights::default());
        let intent_heavy = PairKey::new("b", "a").weighted(&ScoringWeights {
            intent: 0.5,
            ..ScoringWeights::default()
        });

        assert_ne!(default, intent_heavy);
        assert_eq!(default, PairKey::new("b", "a").weighted(&ScoringWeights::default()));
    }
}
