use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{MatchCriteria, Profile};

/// Request to score a single candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(nested)]
    pub viewer: Profile,
    #[validate(nested)]
    pub candidate: Profile,
    #[validate(nested)]
    #[serde(default)]
    pub criteria: Option<MatchCriteria>,
}

/// Request to rank a candidate list for a viewer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(nested)]
    pub viewer: Profile,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<Profile>,
    #[validate(nested)]
    #[serde(default)]
    pub criteria: Option<MatchCriteria>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Request to filter a candidate list without scoring
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FilterRequest {
    #[serde(default)]
    pub candidates: Vec<Profile>,
    #[validate(nested)]
    #[serde(default)]
    pub criteria: Option<MatchCriteria>,
}
