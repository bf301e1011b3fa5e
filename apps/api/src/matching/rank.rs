#![allow(dead_code)]

//! Batch ranking — scores a list of postings against one profile and sorts
//! descending. The sort is stable, so equal scores keep their original
//! relative order.

use serde::Serialize;

use crate::matching::factors::MatchWeights;
use crate::matching::score::{score_with_weights, MatchResult};
use crate::models::job::JobPosting;
use crate::models::profile::UserProfile;

/// A job posting with its match result attached. Serializes as the original
/// job object plus a `matchScore` field.
#[derive(Debug, Clone, Serialize)]
pub struct RankedJob {
    #[serde(flatten)]
    pub job: JobPosting,
    #[serde(rename = "matchScore")]
    pub match_score: MatchResult,
}

/// Ranks postings against a profile with the default weights.
pub fn rank_jobs(profile: &UserProfile, jobs: &[JobPosting]) -> Vec<RankedJob> {
    rank_with_weights(profile, jobs, &MatchWeights::default())
}

/// Ranks postings against a profile. Input is untouched; each posting is
/// cloned and returned with its `MatchResult`, sorted by descending score.
pub fn rank_with_weights(
    profile: &UserProfile,
    jobs: &[JobPosting],
    weights: &MatchWeights,
) -> Vec<RankedJob> {
    let mut ranked: Vec<RankedJob> = jobs
        .iter()
        .map(|job| RankedJob {
            match_score: score_with_weights(profile, job, weights),
            job: job.clone(),
        })
        .collect();
    // sort_by is stable: ties keep the backend's original ordering.
    ranked.sort_by(|a, b| b.match_score.score.cmp(&a.match_score.score));
    ranked
}
