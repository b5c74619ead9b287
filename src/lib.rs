//! Match Engine - compatibility scoring and recommendation ranking
//!
//! This library scores candidate profiles against a viewer, ranks candidate
//! lists and applies criteria filters. Everything is computed from the
//! profiles passed in; nothing is stored between calls.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{MatchEngine, MatchResult, DEFAULT_RECOMMENDATION_LIMIT};
pub use crate::error::AppError;
pub use crate::models::{Compatibility, MatchCriteria, MatchScore, Profile, RecommendedProfile, ScoringParams, ScoringWeights};
