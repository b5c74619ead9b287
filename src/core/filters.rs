use crate::core::distance::extract_distance;
use crate::models::{MatchCriteria, Profile};

/// Interests of `ours` that also appear in `theirs`, in `ours` order
#[inline]
pub fn shared_interests<'a>(ours: &'a [String], theirs: &[String]) -> Vec<&'a str> {
    ours.iter()
        .filter(|interest| theirs.contains(interest))
        .map(String::as_str)
        .collect()
}

/// Check if a profile passes the viewer's hard criteria
///
/// Age must be within the range; when the criteria name interests at least
/// one must be shared; a distance embedded in the location must not exceed
/// `max_distance`. Locations without a distance pass.
#[inline]
pub fn matches_criteria(profile: &Profile, criteria: &MatchCriteria) -> bool {
    if !criteria.contains_age(profile.age) {
        return false;
    }

    if !criteria.interests.is_empty()
        && !criteria
            .interests
            .iter()
            .any(|interest| profile.interests.contains(interest))
    {
        return false;
    }

    if let Some(distance) = extract_distance(&profile.location) {
        if distance > criteria.max_distance {
            return false;
        }
    }

    true
}

/// Order-preserving filter over a candidate list
pub fn filter_profiles(candidates: &[Profile], criteria: &MatchCriteria) -> Vec<Profile> {
    candidates
        .iter()
        .filter(|profile| matches_criteria(profile, criteria))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile(id: &str, age: u32, interests: &[&str], location: &str) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("User {}", id),
            age,
            photos: vec![],
            bio: String::new(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            location: location.to_string(),
            gender: None,
            occupation: None,
            is_verified: None,
            is_online: None,
        }
    }

    #[test]
    fn test_shared_interests() {
        let ours = vec!["Travel".to_string(), "Art".to_string(), "Yoga".to_string()];
        let theirs = vec!["Yoga".to_string(), "Travel".to_string()];

        assert_eq!(shared_interests(&ours, &theirs), vec!["Travel", "Yoga"]);
        assert!(shared_interests(&[], &theirs).is_empty());
    }

    #[test]
    fn test_age_bounds_inclusive() {
        let criteria = MatchCriteria::default();

        assert!(matches_criteria(&create_test_profile("1", 18, &[], ""), &criteria));
        assert!(matches_criteria(&create_test_profile("2", 35, &[], ""), &criteria));
        assert!(!matches_criteria(&create_test_profile("3", 17, &[], ""), &criteria));
        assert!(!matches_criteria(&create_test_profile("4", 36, &[], ""), &criteria));
    }

    #[test]
    fn test_interest_filter_any_match() {
        let mut criteria = MatchCriteria::default();
        criteria.interests = vec!["Hiking".to_string(), "Wine".to_string()];

        assert!(matches_criteria(&create_test_profile("1", 25, &["Wine"], ""), &criteria));
        assert!(!matches_criteria(&create_test_profile("2", 25, &["Art"], ""), &criteria));
        assert!(!matches_criteria(&create_test_profile("3", 25, &[], ""), &criteria));
    }

    #[test]
    fn test_empty_interest_criteria_is_noop() {
        let criteria = MatchCriteria::default();
        assert!(matches_criteria(&create_test_profile("1", 25, &[], ""), &criteria));
    }

    #[test]
    fn test_distance_filter() {
        let criteria = MatchCriteria::default();

        assert!(matches_criteria(&create_test_profile("1", 25, &[], "50 miles away"), &criteria));
        assert!(!matches_criteria(&create_test_profile("2", 25, &[], "51 miles away"), &criteria));
        assert!(matches_criteria(&create_test_profile("3", 25, &[], "Brooklyn, NY"), &criteria));
    }

    #[test]
    fn test_huge_distance_rejected() {
        let criteria = MatchCriteria::default();
        let profile = create_test_profile("1", 25, &[], "99999999999 miles away");

        assert!(!matches_criteria(&profile, &criteria));
    }

    #[test]
    fn test_filter_profiles_preserves_order() {
        let candidates = vec![
            create_test_profile("a", 30, &[], ""),
            create_test_profile("b", 50, &[], ""),
            create_test_profile("c", 20, &[], ""),
        ];

        let filtered = filter_profiles(&candidates, &MatchCriteria::default());
        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["a", "c"]);
    }
}
