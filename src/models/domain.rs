use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use validator::Validate;

/// Event attendee profile
///
/// Every field except `id` defaults to empty, so scoring never has to ask
/// whether a field is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub industry: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: BTreeSet<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goals: BTreeSet<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub planned_sessions: BTreeSet<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_event: String,
}

/// Deserialize an explicit `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Profile {
    /// Bare profile with only an id set
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn has_goal(&self, goal: &str) -> bool {
        self.goals.contains(goal)
    }
}

/// Per-dimension sub-scores, each in 0..=100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub professional: u8,
    pub interests: u8,
    pub intent: u8,
    pub contextual: u8,
}

/// Result of comparing two profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub overall: u8,
    pub breakdown: ScoreBreakdown,
    #[serde(default)]
    pub reasoning: Vec<String>,
}

/// A candidate paired with its score relative to the subject
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub candidate_profile: Profile,
    pub score: Arc<CompatibilityScore>,
}

/// Which rule produced a conversation starter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarterKind {
    SharedInterest,
    SharedIndustry,
    Recruiting,
    General,
}

/// Suggested opening line with a short explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationStarter {
    pub text: String,
    pub reasoning: String,
    pub kind: StarterKind,
}

/// Options for a single match search
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Maximum number of matches; zero or negative yields no matches
    #[serde(default = "default_match_limit")]
    pub limit: i64,
}

impl MatchOptions {
    pub fn with_limit(limit: i64) -> Self {
        Self { limit }
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            limit: default_match_limit(),
        }
    }
}

pub(crate) fn default_match_limit() -> i64 {
    20
}

/// Scoring weights for the four sub-scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub professional: f64,
    pub interests: f64,
    pub intent: f64,
    pub contextual: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            professional: 0.35,
            interests: 0.25,
            intent: 0.25,
            contextual: 0.15,
        }
    }
}
