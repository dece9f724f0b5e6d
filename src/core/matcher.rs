use std::sync::Arc;
use crate::core::engine::CompatibilityEngine;
use crate::models::{Match, MatchOptions, Profile};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<Match>,
    /// Candidates scored, i.e. the pool minus the subject
    pub total_candidates: usize,
}

/// Ranks a candidate pool against a subject profile
///
/// # Pipeline Stages
/// 1. Drop the subject itself (by id)
/// 2. Score each remaining candidate through the engine (cache-checked)
/// 3. Stable sort by overall score, descending
/// 4. Truncate to the requested limit
///
/// Concurrent calls for different subjects only share the engine's cache.
#[derive(Clone)]
pub struct MatchFinder {
    engine: Arc<CompatibilityEngine>,
}

impl MatchFinder {
    pub fn new(engine: Arc<CompatibilityEngine>) -> Self {
        Self { engine }
    }

    pub fn with_default_engine() -> Self {
        Self::new(Arc::new(CompatibilityEngine::with_default_weights()))
    }

    pub fn engine(&self) -> &Arc<CompatibilityEngine> {
        &self.engine
    }

    /// Find the best matches for `subject` within `pool`
    ///
    /// # Arguments
    /// * `subject` - Profile to match for
    /// * `pool` - Candidate profiles; the subject may appear and is skipped
    /// * `options` - Result limit; zero or negative returns nothing
    ///
    /// # Returns
    /// MatchResult with matches ordered by descending overall score. Equal
    /// scores keep their pool order.
    pub async fn find_matches(
        &self,
        subject: &Profile,
        pool: &[Profile],
        options: &MatchOptions,
    ) -> MatchResult {
        let candidates: Vec<&Profile> = pool
            .iter()
            .filter(|candidate| candidate.id != subject.id)
            .collect();
        let total_candidates = candidates.len();

        if options.limit <= 0 || candidates.is_empty() {
            return MatchResult {
                matches: Vec::new(),
                total_candidates,
            };
        }

        let mut matches = Vec::with_capacity(total_candidates);
        for candidate in candidates {
            let score = self.engine.calculate_compatibility(subject, candidate).await;
            matches.push(Match {
                candidate_profile: candidate.clone(),
                score,
            });
        }

        // Vec::sort_by is stable, ties keep pool order
        matches.sort_by(|a, b| b.score.overall.cmp(&a.score.overall));

        let limit = usize::try_from(options.limit).unwrap_or(usize::MAX);
        matches.truncate(limit);

        tracing::debug!(
            "Ranked {} candidates for {}, returning {}",
            total_candidates,
            subject.id,
            matches.len()
        );

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for MatchFinder {
    fn default() -> Self {
        Self::with_default_engine()
    }
}
