// Core algorithm exports
pub mod engine;
pub mod matcher;
pub mod rules;
pub mod scoring;
pub mod starters;

pub use engine::CompatibilityEngine;
pub use matcher::{MatchFinder, MatchResult};
pub use scoring::calculate_compatibility_score;
pub use starters::{ConversationStarterGenerator, STARTER_COUNT};
