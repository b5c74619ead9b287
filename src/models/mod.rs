// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Compatibility, GenderInterest, MatchCriteria, MatchScore, Profile, RecommendedProfile,
    ScoringParams, ScoringWeights, MAX_AGE_LIMIT, MAX_DISTANCE_LIMIT, MIN_AGE_LIMIT,
    MIN_DISTANCE_LIMIT,
};
pub use requests::{FilterRequest, RecommendRequest, ScoreRequest};
pub use responses::{ErrorResponse, FilterResponse, HealthResponse, RecommendResponse};
