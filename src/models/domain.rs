use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// Lowest age selectable in the match settings screen
pub const MIN_AGE_LIMIT: u32 = 18;
/// Highest age selectable in the match settings screen
pub const MAX_AGE_LIMIT: u32 = 65;
/// Distance slider bounds, in the same unit as location strings (miles)
pub const MIN_DISTANCE_LIMIT: f64 = 1.0;
pub const MAX_DISTANCE_LIMIT: f64 = 200.0;

/// A viewer or candidate profile as supplied by the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1))]
    pub id: String,
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Free text, may embed a distance phrase such as "12 miles away"
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub is_online: Option<bool>,
}

impl Profile {
    /// Helper to get is_verified as a bool, defaulting to false
    pub fn verified(&self) -> bool {
        self.is_verified.unwrap_or(false)
    }

    /// Helper to get is_online as a bool, defaulting to false
    pub fn online(&self) -> bool {
        self.is_online.unwrap_or(false)
    }
}

/// Who the viewer wants to see
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderInterest {
    Men,
    Women,
    #[default]
    Everyone,
}

impl GenderInterest {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenderInterest::Men => "men",
            GenderInterest::Women => "women",
            GenderInterest::Everyone => "everyone",
        }
    }
}

impl fmt::Display for GenderInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenderInterest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "men" => Ok(GenderInterest::Men),
            "women" => Ok(GenderInterest::Women),
            "everyone" => Ok(GenderInterest::Everyone),
            other => Err(format!(
                "unknown gender interest '{}', expected one of: men, women, everyone",
                other
            )),
        }
    }
}

/// Matching criteria edited by the viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_age_range"))]
pub struct MatchCriteria {
    /// Inclusive `[min, max]`
    pub age_range: (u32, u32),
    #[validate(range(min = 0.0))]
    pub max_distance: f64,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub interested_in: GenderInterest,
    /// Reserved, not used in scoring
    #[serde(default)]
    pub location: String,
}

fn validate_age_range(criteria: &MatchCriteria) -> Result<(), ValidationError> {
    if criteria.age_range.0 > criteria.age_range.1 {
        let mut err = ValidationError::new("age_range");
        err.message = Some("ageRange minimum must not exceed maximum".into());
        return Err(err);
    }
    Ok(())
}

impl Default for MatchCriteria {
    fn default() -> Self {
        Self {
            age_range: (18, 35),
            max_distance: 50.0,
            interests: Vec::new(),
            gender: String::new(),
            interested_in: GenderInterest::Everyone,
            location: String::new(),
        }
    }
}

impl MatchCriteria {
    #[inline]
    pub fn min_age(&self) -> u32 {
        self.age_range.0
    }

    #[inline]
    pub fn max_age(&self) -> u32 {
        self.age_range.1
    }

    #[inline]
    pub fn contains_age(&self, age: u32) -> bool {
        age >= self.min_age() && age <= self.max_age()
    }

    /// Set the lower age bound, dragging the upper bound along if it would cross
    pub fn set_min_age(&mut self, age: u32) {
        let age = age.clamp(MIN_AGE_LIMIT, MAX_AGE_LIMIT);
        self.age_range.0 = age;
        if age > self.age_range.1 {
            self.age_range.1 = age;
        }
    }

    /// Set the upper age bound, dragging the lower bound along if it would cross
    pub fn set_max_age(&mut self, age: u32) {
        let age = age.clamp(MIN_AGE_LIMIT, MAX_AGE_LIMIT);
        self.age_range.1 = age;
        if age < self.age_range.0 {
            self.age_range.0 = age;
        }
    }

    pub fn set_max_distance(&mut self, distance: f64) {
        self.max_distance = distance.clamp(MIN_DISTANCE_LIMIT, MAX_DISTANCE_LIMIT);
    }

    /// Add the tag if absent, remove it otherwise
    pub fn toggle_interest(&mut self, interest: &str) {
        if let Some(pos) = self.interests.iter().position(|i| i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest.to_string());
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Qualitative compatibility tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    Low,
    Medium,
    High,
    Excellent,
}

/// Compatibility assessment of one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub score: i64,
    pub reasons: Vec<String>,
    pub compatibility: Compatibility,
}

/// Candidate annotated with its computed score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedProfile {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(rename = "matchScore")]
    pub match_score: MatchScore,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub interests: f64,
    pub age: f64,
    pub distance: f64,
    pub verified: f64,
    pub activity: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.interests + self.age + self.distance + self.verified + self.activity
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interests: 0.30,
            age: 0.20,
            distance: 0.25,
            verified: 0.15,
            activity: 0.10,
        }
    }
}

/// Normalisation constants used by the sub-scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringParams {
    /// Age difference (years) at which the age sub-score reaches zero
    pub age_normalizer: f64,
    /// Distance sub-score when either location has no parseable distance
    pub distance_fallback: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            age_normalizer: 20.0,
            distance_fallback: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria() {
        let criteria = MatchCriteria::default();
        assert_eq!(criteria.age_range, (18, 35));
        assert_eq!(criteria.max_distance, 50.0);
        assert!(criteria.interests.is_empty());
        assert!(criteria.gender.is_empty());
        assert_eq!(criteria.interested_in, GenderInterest::Everyone);
        assert!(criteria.location.is_empty());
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((ScoringWeights::default().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_age_setters_keep_range_ordered() {
        let mut criteria = MatchCriteria::default();

        criteria.set_min_age(40);
        assert_eq!(criteria.age_range, (40, 40));

        criteria.set_max_age(30);
        assert_eq!(criteria.age_range, (30, 30));

        criteria.set_max_age(50);
        assert_eq!(criteria.age_range, (30, 50));

        criteria.set_min_age(10);
        criteria.set_max_age(90);
        assert_eq!(criteria.age_range, (MIN_AGE_LIMIT, MAX_AGE_LIMIT));
    }

    #[test]
    fn test_max_distance_clamped_to_slider() {
        let mut criteria = MatchCriteria::default();

        criteria.set_max_distance(0.0);
        assert_eq!(criteria.max_distance, MIN_DISTANCE_LIMIT);

        criteria.set_max_distance(500.0);
        assert_eq!(criteria.max_distance, MAX_DISTANCE_LIMIT);

        criteria.set_max_distance(75.0);
        assert_eq!(criteria.max_distance, 75.0);
    }

    #[test]
    fn test_toggle_interest() {
        let mut criteria = MatchCriteria::default();
        criteria.toggle_interest("Hiking");
        criteria.toggle_interest("Art");
        assert_eq!(criteria.interests, vec!["Hiking", "Art"]);

        criteria.toggle_interest("Hiking");
        assert_eq!(criteria.interests, vec!["Art"]);

        criteria.reset();
        assert_eq!(criteria, MatchCriteria::default());
    }

    #[test]
    fn test_criteria_validation() {
        let mut criteria = MatchCriteria::default();
        assert!(criteria.validate().is_ok());

        criteria.age_range = (40, 20);
        assert!(criteria.validate().is_err());

        criteria.age_range = (20, 40);
        criteria.max_distance = -1.0;
        assert!(criteria.validate().is_err());
    }

    #[test]
    fn test_criteria_wire_format() {
        let json = r#"{"ageRange":[20,30],"maxDistance":25,"interests":["Art"],"interestedIn":"women"}"#;
        let criteria: MatchCriteria = serde_json::from_str(json).unwrap();

        assert_eq!(criteria.age_range, (20, 30));
        assert_eq!(criteria.max_distance, 25.0);
        assert_eq!(criteria.interested_in, GenderInterest::Women);
        assert!(criteria.location.is_empty());
    }

    #[test]
    fn test_gender_interest_parse() {
        assert_eq!("Men".parse::<GenderInterest>(), Ok(GenderInterest::Men));
        assert_eq!(GenderInterest::Women.to_string(), "women");
        assert!("robots".parse::<GenderInterest>().is_err());
    }

    #[test]
    fn test_profile_optional_flags_default_false() {
        let json = r#"{"id":"u1","name":"Sam","age":29}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();

        assert!(!profile.verified());
        assert!(!profile.online());
        assert!(profile.interests.is_empty());
    }
}
