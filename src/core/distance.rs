use regex::Regex;
use std::sync::LazyLock;

/// Matches phrases like "12 miles away" or "1 mile away"
///
/// Digits are ASCII only and the words fold case in ASCII only, so "ſ" or
/// Arabic-Indic digits never start a match.
static DISTANCE_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(?-u:miles?)\s*(?-u:away)").expect("distance pattern is valid")
});

/// Extract the distance embedded in a free-text location string
///
/// Returns `None` when the string carries no "<n> mile(s) away" phrase. Any
/// digit run counts, however large.
pub fn extract_distance(location: &str) -> Option<f64> {
    DISTANCE_PHRASE
        .captures(location)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Calculate distance score (0-1) between two location strings
///
/// # Arguments
/// * `viewer_location` - Viewer's location text
/// * `candidate_location` - Candidate's location text
/// * `max_distance` - Distance at which the score drops to zero
/// * `fallback` - Score used when either string carries no distance
#[inline]
pub fn distance_score(
    viewer_location: &str,
    candidate_location: &str,
    max_distance: f64,
    fallback: f64,
) -> f64 {
    if viewer_location == candidate_location {
        return 1.0;
    }

    match (extract_distance(viewer_location), extract_distance(candidate_location)) {
        (Some(ours), Some(theirs)) => {
            // Equal infinities would otherwise give NaN
            let gap = if ours == theirs { 0.0 } else { (ours - theirs).abs() };
            if max_distance <= 0.0 {
                // Degenerate radius: only an exact match counts as close
                return if gap == 0.0 { 1.0 } else { 0.0 };
            }
            (1.0 - gap / max_distance).max(0.0)
        }
        _ => fallback,
    }
}
