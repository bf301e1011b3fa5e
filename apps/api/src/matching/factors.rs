//! Factor scorers — the five independent dimensions of a match score.
//!
//! Each scorer returns `Option<f64>`: `Some(sub_score)` in 0–100 when the
//! factor is evaluable, `None` when either side is missing the data. A `None`
//! contributes nothing to the weighted total, so sparse profiles and postings
//! are scored only on what is comparable.

use serde::{Deserialize, Serialize};

use crate::models::job::JobPosting;
use crate::models::profile::UserProfile;

/// Relative factor weights. Sum to 1.0 by construction; the aggregator
/// re-normalizes by the weights actually contributed, so partial data keeps
/// the 0–100 range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub interests: f64,
    pub education: f64,
    pub location: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            experience: 0.25,
            interests: 0.20,
            education: 0.10,
            location: 0.05,
        }
    }
}

/// Sub-score when a job declares an empty interests list: neutral, neither
/// rewarding nor punishing an unspecified field.
const NEUTRAL_INTERESTS_SCORE: f64 = 50.0;

/// Sub-score for a plain location mismatch. Location is a soft signal in this
/// domain, so a mismatch never zeroes the factor.
const LOCATION_MISMATCH_SCORE: f64 = 50.0;

/// Experience penalty per missing tier.
const EXPERIENCE_TIER_PENALTY: f64 = 25.0;

/// Education penalty per missing tier (steeper than experience).
const EDUCATION_TIER_PENALTY: f64 = 30.0;

/// Bidirectional partial match: either string contains the other. Permissive
/// on purpose, to tolerate phrasing differences like "React" vs "React.js".
/// Inputs must already be lowercased.
fn fuzzy_contains(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Fraction of `targets` matched by at least one entry of `candidates`,
/// scaled to 0–100. Both sides compared lowercase via `fuzzy_contains`.
fn overlap_score(targets: &[String], candidates: &[String]) -> f64 {
    let candidates_lower: Vec<String> = candidates.iter().map(|s| s.to_lowercase()).collect();
    let matched = targets
        .iter()
        .filter(|t| {
            let t = t.to_lowercase();
            candidates_lower.iter().any(|c| fuzzy_contains(c, &t))
        })
        .count();
    (matched as f64 / targets.len() as f64) * 100.0
}

/// Skills: fraction of required skills the seeker covers.
/// An empty required-skills list makes the factor non-evaluable (there is
/// nothing to match against, and the ratio would divide by zero).
pub fn score_skills(profile: &UserProfile, job: &JobPosting) -> Option<f64> {
    let user_skills = profile.skills.as_ref()?;
    let required = job.required_skills.as_ref()?;
    if required.is_empty() {
        return None;
    }
    Some(overlap_score(required, user_skills))
}

/// Experience: 100 when the seeker meets or exceeds the required tier,
/// otherwise a linear penalty per missing tier, floored at 0.
pub fn score_experience(profile: &UserProfile, job: &JobPosting) -> Option<f64> {
    let user = profile.experience_level?;
    let required = job.experience_level?;
    if user >= required {
        return Some(100.0);
    }
    let shortfall = required as i32 - user as i32;
    Some((100.0 - EXPERIENCE_TIER_PENALTY * shortfall as f64).max(0.0))
}

/// Interests: evaluated whenever both sides declare the field, even empty.
/// A job with zero interests scores the neutral 50.
pub fn score_interests(profile: &UserProfile, job: &JobPosting) -> Option<f64> {
    let user_interests = profile.interests.as_ref()?;
    let job_interests = job.interests.as_ref()?;
    if job_interests.is_empty() {
        return Some(NEUTRAL_INTERESTS_SCORE);
    }
    Some(overlap_score(job_interests, user_interests))
}

/// Education: same shape as experience with a steeper per-tier penalty.
pub fn score_education(profile: &UserProfile, job: &JobPosting) -> Option<f64> {
    let user = profile.education?;
    let required = job.education_required?;
    if user >= required {
        return Some(100.0);
    }
    let shortfall = required as i32 - user as i32;
    Some((100.0 - EDUCATION_TIER_PENALTY * shortfall as f64).max(0.0))
}

/// Location: exact match (case-insensitive) or a "remote" wildcard on either
/// side scores 100; anything else scores the soft 50. Empty strings make the
/// factor non-evaluable.
pub fn score_location(profile: &UserProfile, job: &JobPosting) -> Option<f64> {
    let user = profile.location.as_deref()?;
    let job_loc = job.location.as_deref()?;
    if user.trim().is_empty() || job_loc.trim().is_empty() {
        return None;
    }
    let user = user.to_lowercase();
    let job_loc = job_loc.to_lowercase();
    if user == job_loc || user.contains("remote") || job_loc.contains("remote") {
        Some(100.0)
    } else {
        Some(LOCATION_MISMATCH_SCORE)
    }
}
