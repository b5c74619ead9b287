use crate::core::{distance::distance_score, filters::shared_interests};
use crate::models::{Compatibility, MatchCriteria, MatchScore, Profile, ScoringParams, ScoringWeights};

/// Calculate a compatibility score for a candidate as seen by the viewer
///
/// Scoring formula:
/// score = (
///     interest_score * 0.30 +      # Shared / viewer's interest count
///     age_score * 0.20 +           # 1 - diff/20, only inside the age range
///     distance_score * 0.25 +      # See `distance_score`
///     verified_bonus * 0.15 +      # isVerified = true
///     activity_bonus * 0.10        # isOnline = true
/// ) * 100
///
/// The total is not clamped. An age gap larger than the normaliser makes the
/// age term negative.
pub fn calculate_match_score(
    viewer: &Profile,
    candidate: &Profile,
    criteria: &MatchCriteria,
    weights: &ScoringWeights,
    params: &ScoringParams,
) -> MatchScore {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    // Interests
    let shared = shared_interests(&viewer.interests, &candidate.interests).len();
    let interest_score = shared as f64 / viewer.interests.len().max(1) as f64;
    score += interest_score * weights.interests * 100.0;

    if shared >= 3 {
        reasons.push(format!("{} shared interests", shared));
    }

    // Age
    let age_diff = viewer.age.abs_diff(candidate.age);
    if criteria.contains_age(candidate.age) {
        let age_score = 1.0 - age_diff as f64 / params.age_normalizer;
        score += age_score * weights.age * 100.0;
    }

    if age_diff <= 2 {
        reasons.push("Similar age".to_string());
    }

    // Distance
    let distance = distance_score(
        &viewer.location,
        &candidate.location,
        criteria.max_distance,
        params.distance_fallback,
    );
    score += distance * weights.distance * 100.0;

    if distance > 0.8 {
        reasons.push("Very close by".to_string());
    }

    // Bonuses
    if candidate.verified() {
        score += weights.verified * 100.0;
        reasons.push("Verified profile".to_string());
    }

    if candidate.online() {
        score += weights.activity * 100.0;
        reasons.push("Recently active".to_string());
    }

    if shared >= 5 {
        reasons.push("High interest compatibility".to_string());
    }

    if age_diff == 0 {
        reasons.push("Same age".to_string());
    }

    let rounded = round_half_up(score);

    MatchScore {
        user_id: candidate.id.clone(),
        score: rounded,
        reasons,
        compatibility: compatibility_level(rounded),
    }
}

/// Map a rounded score onto its tier
#[inline]
pub fn compatibility_level(score: i64) -> Compatibility {
    match score {
        s if s >= 85 => Compatibility::Excellent,
        s if s >= 70 => Compatibility::High,
        s if s >= 50 => Compatibility::Medium,
        _ => Compatibility::Low,
    }
}

/// Round to the nearest integer, halves toward positive infinity
#[inline]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
