use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Profile;

/// Request to score a single pair of profiles
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityRequest {
    #[validate(nested)]
    pub profile_a: Profile,
    #[validate(nested)]
    pub profile_b: Profile,
}

/// Request to find matches for a subject within a candidate pool
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesRequest {
    #[validate(nested)]
    pub subject: Profile,
    #[serde(default)]
    #[validate(nested)]
    pub candidates: Vec<Profile>,
    /// Falls back to the configured default limit when absent
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Request for conversation starters between two profiles
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StartersRequest {
    #[validate(nested)]
    pub profile_a: Profile,
    #[validate(nested)]
    pub profile_b: Profile,
}
