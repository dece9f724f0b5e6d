// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, ScoreBreakdown, CompatibilityScore, Match, ConversationStarter, StarterKind, MatchOptions, ScoringWeights};
pub use requests::{CompatibilityRequest, FindMatchesRequest, StartersRequest};
pub use responses::{FindMatchesResponse, StartersResponse, HealthResponse, ErrorResponse, ClearCacheResponse};
