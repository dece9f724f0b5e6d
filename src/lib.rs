//! Event Match - compatibility scoring and matching for event attendees
//!
//! This library scores pairwise compatibility between attendee profiles,
//! ranks candidate matches for a subject, and suggests opening messages.
//! Pairwise scores are memoized in a shared cache that computes each pair
//! at most once, even under concurrent requests.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{CompatibilityEngine, ConversationStarterGenerator, MatchFinder, MatchResult};
pub use models::{Profile, CompatibilityScore, ScoreBreakdown, Match, MatchOptions, ConversationStarter, ScoringWeights};
pub use services::{ScoreCache, CacheStats};
