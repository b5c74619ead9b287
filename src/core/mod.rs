// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use distance::{distance_score, extract_distance};
pub use filters::{filter_profiles, matches_criteria, shared_interests};
pub use matcher::{MatchEngine, MatchResult, DEFAULT_RECOMMENDATION_LIMIT};
pub use scoring::{calculate_match_score, compatibility_level};
