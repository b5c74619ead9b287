use crate::core::{filters::filter_profiles, scoring::calculate_match_score};
use crate::models::{MatchCriteria, MatchScore, Profile, RecommendedProfile, ScoringParams, ScoringWeights};

/// Number of recommendations returned when the caller does not ask for a limit
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;

/// Result of a ranking pass
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<RecommendedProfile>,
    /// Candidates scored, after removing the viewer
    pub total_candidates: usize,
}

/// Stateless scoring, ranking and filtering over caller-supplied profiles
///
/// Holds only the tunable constants, so a single value can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchEngine {
    weights: ScoringWeights,
    params: ScoringParams,
}

impl MatchEngine {
    pub fn new(weights: ScoringWeights, params: ScoringParams) -> Self {
        Self { weights, params }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            params: ScoringParams::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// Score one candidate against the viewer
    pub fn compute_match_score(
        &self,
        viewer: &Profile,
        candidate: &Profile,
        criteria: &MatchCriteria,
    ) -> MatchScore {
        calculate_match_score(viewer, candidate, criteria, &self.weights, &self.params)
    }

    /// Rank candidates for the viewer
    ///
    /// # Arguments
    /// * `viewer` - The profile doing the browsing; excluded from the output
    /// * `candidates` - Profiles to rank; left untouched
    /// * `criteria` - The viewer's match criteria
    /// * `limit` - Maximum number of entries returned
    ///
    /// # Returns
    /// MatchResult ordered by descending score; equal scores keep input order
    pub fn recommended_users(
        &self,
        viewer: &Profile,
        candidates: &[Profile],
        criteria: &MatchCriteria,
        limit: usize,
    ) -> MatchResult {
        let mut matches: Vec<RecommendedProfile> = candidates
            .iter()
            .filter(|candidate| candidate.id != viewer.id)
            .map(|candidate| RecommendedProfile {
                match_score: self.compute_match_score(viewer, candidate, criteria),
                profile: candidate.clone(),
            })
            .collect();

        let total_candidates = matches.len();

        // Vec::sort_by is stable
        matches.sort_by(|a, b| b.match_score.score.cmp(&a.match_score.score));
        matches.truncate(limit);

        tracing::debug!(
            viewer = %viewer.id,
            total_candidates,
            returned = matches.len(),
            "Ranked candidates"
        );

        MatchResult {
            matches,
            total_candidates,
        }
    }

    /// Apply the criteria as hard filters, without scoring
    pub fn filtered_users(&self, candidates: &[Profile], criteria: &MatchCriteria) -> Vec<Profile> {
        let filtered = filter_profiles(candidates, criteria);

        tracing::debug!(
            total_candidates = candidates.len(),
            kept = filtered.len(),
            "Filtered candidates"
        );

        filtered
    }

    pub fn default_criteria() -> MatchCriteria {
        MatchCriteria::default()
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_candidate(id: &str, age: u32, location: &str, is_verified: bool) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("User {}", id),
            age,
            photos: vec![],
            bio: String::new(),
            interests: vec!["Travel".to_string()],
            location: location.to_string(),
            gender: None,
            occupation: None,
            is_verified: Some(is_verified),
            is_online: Some(false),
        }
    }

    fn create_viewer() -> Profile {
        create_candidate("current_user", 25, "Brooklyn", false)
    }

    #[test]
    fn test_excludes_viewer() {
        let engine = MatchEngine::with_default_weights();
        let viewer = create_viewer();

        let candidates = vec![
            viewer.clone(),
            create_candidate("1", 25, "Brooklyn", true),
        ];

        let result = engine.recommended_users(&viewer, &candidates, &MatchCriteria::default(), 10);

        assert_eq!(result.total_candidates, 1);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].profile.id, "1");
    }

    #[test]
    fn test_matches_sorted_by_score() {
        let engine = MatchEngine::with_default_weights();
        let viewer = create_viewer();

        let candidates = vec![
            create_candidate("far", 25, "uptown", false),
            create_candidate("close", 25, "Brooklyn", true),
            create_candidate("old", 50, "Brooklyn", false),
        ];

        let result = engine.recommended_users(&viewer, &candidates, &MatchCriteria::default(), 10);

        let ids: Vec<&str> = result.matches.iter().map(|m| m.profile.id.as_str()).collect();
        assert_eq!(ids, vec!["close", "far", "old"]);
        for pair in result.matches.windows(2) {
            assert!(pair[0].match_score.score >= pair[1].match_score.score);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let engine = MatchEngine::with_default_weights();
        let viewer = create_viewer();

        let candidates: Vec<Profile> = ["c", "a", "b"]
            .iter()
            .map(|id| create_candidate(id, 25, "Brooklyn", true))
            .collect();

        let result = engine.recommended_users(&viewer, &candidates, &MatchCriteria::default(), 10);

        let ids: Vec<&str> = result.matches.iter().map(|m| m.profile.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_respects_limit() {
        let engine = MatchEngine::with_default_weights();
        let viewer = create_viewer();

        let candidates: Vec<Profile> = (0..20)
            .map(|i| create_candidate(&i.to_string(), 20 + i % 10, "Brooklyn", i % 2 == 0))
            .collect();

        let result = engine.recommended_users(&viewer, &candidates, &MatchCriteria::default(), 5);

        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_empty_candidates() {
        let engine = MatchEngine::default();
        let result = engine.recommended_users(&create_viewer(), &[], &MatchCriteria::default(), 10);

        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 0);
    }

    #[test]
    fn test_filtered_users() {
        let engine = MatchEngine::default();
        let candidates = vec![
            create_candidate("1", 25, "10 miles away", true),
            create_candidate("2", 25, "80 miles away", true),
            create_candidate("3", 60, "10 miles away", true),
        ];

        let filtered = engine.filtered_users(&candidates, &MatchEngine::default_criteria());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }
}
