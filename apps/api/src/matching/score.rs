#![allow(dead_code)]

//! Aggregation and tier classification for a single (profile, job) pair.
//!
//! The weighted sum is normalized by the weights that actually contributed,
//! so a posting missing most optional fields is scored purely on whatever is
//! comparable rather than penalized for sparse data entry.

use serde::Serialize;

use crate::matching::factors::{
    score_education, score_experience, score_interests, score_location, score_skills,
    MatchWeights,
};
use crate::models::job::JobPosting;
use crate::models::profile::UserProfile;

/// Per-factor sub-scores. 0.0 means the factor was not evaluated (missing
/// data on either side), which is distinct from contributing a zero to the
/// weighted sum — unevaluated factors carry no weight at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub interests: f64,
    pub education: f64,
    pub location: f64,
}

/// Discrete compatibility tier shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchLevel {
    Low,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl MatchLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => MatchLevel::Excellent,
            65..=79 => MatchLevel::Good,
            50..=64 => MatchLevel::Fair,
            35..=49 => MatchLevel::Poor,
            _ => MatchLevel::Low,
        }
    }
}

/// Apply/skip guidance. Uses its own thresholds (≥70, ≥50), deliberately
/// decoupled from the `MatchLevel` ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
    #[serde(rename = "Consider Applying")]
    ConsiderApplying,
    #[serde(rename = "May Not Be Ideal")]
    MayNotBeIdeal,
}

impl Recommendation {
    pub fn from_score(score: u32) -> Self {
        match score {
            70.. => Recommendation::HighlyRecommended,
            50..=69 => Recommendation::ConsiderApplying,
            _ => Recommendation::MayNotBeIdeal,
        }
    }
}

/// Full match result for one (profile, job) pair. Computed on demand, never
/// stored — a read-time projection over the two inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Rounded 0–100 compatibility score.
    pub score: u32,
    pub breakdown: MatchBreakdown,
    pub match_level: MatchLevel,
    pub recommendation: Recommendation,
}

/// Scores a single job posting against a profile with the default weights.
pub fn calculate_match_score(profile: &UserProfile, job: &JobPosting) -> MatchResult {
    score_with_weights(profile, job, &MatchWeights::default())
}

/// Scores a single job posting against a profile. Infallible: always returns
/// a well-formed result; with no comparable factors the score is 0.
pub fn score_with_weights(
    profile: &UserProfile,
    job: &JobPosting,
    weights: &MatchWeights,
) -> MatchResult {
    let mut breakdown = MatchBreakdown::default();
    let mut weighted_score = 0.0;
    let mut total_weight = 0.0;

    if let Some(sub) = score_skills(profile, job) {
        breakdown.skills = sub;
        weighted_score += sub * weights.skills;
        total_weight += weights.skills;
    }
    if let Some(sub) = score_experience(profile, job) {
        breakdown.experience = sub;
        weighted_score += sub * weights.experience;
        total_weight += weights.experience;
    }
    if let Some(sub) = score_interests(profile, job) {
        breakdown.interests = sub;
        weighted_score += sub * weights.interests;
        total_weight += weights.interests;
    }
    if let Some(sub) = score_education(profile, job) {
        breakdown.education = sub;
        weighted_score += sub * weights.education;
        total_weight += weights.education;
    }
    if let Some(sub) = score_location(profile, job) {
        breakdown.location = sub;
        weighted_score += sub * weights.location;
        total_weight += weights.location;
    }

    let score = if total_weight > 0.0 {
        (weighted_score / total_weight).round() as u32
    } else {
        0
    };

    MatchResult {
        score,
        breakdown,
        match_level: MatchLevel::from_score(score),
        recommendation: Recommendation::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::levels::{EducationLevel, ExperienceLevel};

    fn reference_profile() -> UserProfile {
        UserProfile {
            skills: Some(vec!["React".to_string(), "Node.js".to_string()]),
            experience_level: Some(ExperienceLevel::Intermediate),
            location: Some("Remote".to_string()),
            ..Default::default()
        }
    }

    fn reference_job() -> JobPosting {
        JobPosting {
            required_skills: Some(vec!["react".to_string(), "python".to_string()]),
            experience_level: Some(ExperienceLevel::Beginner),
            location: Some("Boston".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_reference_scenario_scores_71() {
        // skills 50 (1 of 2), experience 100, location 100, interests and
        // education absent: round((50*0.4 + 100*0.25 + 100*0.05) / 0.7) = 71.
        let result = calculate_match_score(&reference_profile(), &reference_job());
        assert_eq!(result.score, 71);
        assert_eq!(result.breakdown.skills, 50.0);
        assert_eq!(result.breakdown.experience, 100.0);
        assert_eq!(result.breakdown.location, 100.0);
        assert_eq!(result.breakdown.interests, 0.0);
        assert_eq!(result.breakdown.education, 0.0);
        assert_eq!(result.match_level, MatchLevel::Good);
        assert_eq!(result.recommendation, Recommendation::HighlyRecommended);
    }

    #[test]
    fn test_no_comparable_factors_scores_zero() {
        let result = calculate_match_score(&UserProfile::default(), &JobPosting::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.breakdown, MatchBreakdown::default());
        assert_eq!(result.match_level, MatchLevel::Low);
        assert_eq!(result.recommendation, Recommendation::MayNotBeIdeal);
    }

    #[test]
    fn test_single_factor_is_not_penalized_by_missing_data() {
        // Only experience is comparable; the seeker qualifies, so the missing
        // factors must not drag the normalized score below 100.
        let profile = UserProfile {
            experience_level: Some(ExperienceLevel::Advanced),
            ..Default::default()
        };
        let job = JobPosting {
            experience_level: Some(ExperienceLevel::Intermediate),
            ..Default::default()
        };
        let result = calculate_match_score(&profile, &job);
        assert_eq!(result.score, 100);
        assert_eq!(result.match_level, MatchLevel::Excellent);
    }

    #[test]
    fn test_full_match_scores_100() {
        let profile = UserProfile {
            skills: Some(vec!["rust".to_string()]),
            experience_level: Some(ExperienceLevel::Expert),
            interests: Some(vec!["systems".to_string()]),
            education: Some(EducationLevel::Phd),
            location: Some("Remote".to_string()),
        };
        let job = JobPosting {
            required_skills: Some(vec!["rust".to_string()]),
            experience_level: Some(ExperienceLevel::Beginner),
            interests: Some(vec!["systems".to_string()]),
            education_required: Some(EducationLevel::HighSchool),
            location: Some("Anywhere".to_string()),
            ..Default::default()
        };
        let result = calculate_match_score(&profile, &job);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_score_is_bounded() {
        let result = calculate_match_score(&reference_profile(), &reference_job());
        assert!(result.score <= 100);
    }

    #[test]
    fn test_idempotent() {
        let profile = reference_profile();
        let job = reference_job();
        let first = calculate_match_score(&profile, &job);
        let second = calculate_match_score(&profile, &job);
        assert_eq!(first, second);
    }

    #[test]
    fn test_match_level_ladder() {
        assert_eq!(MatchLevel::from_score(100), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(80), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(79), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(65), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(64), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_score(50), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_score(49), MatchLevel::Poor);
        assert_eq!(MatchLevel::from_score(35), MatchLevel::Poor);
        assert_eq!(MatchLevel::from_score(34), MatchLevel::Low);
        assert_eq!(MatchLevel::from_score(0), MatchLevel::Low);
    }

    #[test]
    fn test_recommendation_ladder_is_independent() {
        assert_eq!(
            Recommendation::from_score(70),
            Recommendation::HighlyRecommended
        );
        assert_eq!(
            Recommendation::from_score(69),
            Recommendation::ConsiderApplying
        );
        assert_eq!(
            Recommendation::from_score(50),
            Recommendation::ConsiderApplying
        );
        assert_eq!(
            Recommendation::from_score(49),
            Recommendation::MayNotBeIdeal
        );
        // 65–69 is MatchLevel::Good but not Highly Recommended — the two
        // ladders must not be derived from one another.
        assert_eq!(MatchLevel::from_score(67), MatchLevel::Good);
        assert_eq!(
            Recommendation::from_score(67),
            Recommendation::ConsiderApplying
        );
    }

    #[test]
    fn test_result_serializes_wire_shape() {
        let result = calculate_match_score(&reference_profile(), &reference_job());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["score"], 71);
        assert_eq!(json["matchLevel"], "Good");
        assert_eq!(json["recommendation"], "Highly Recommended");
        assert_eq!(json["breakdown"]["skills"], 50.0);
    }
}
