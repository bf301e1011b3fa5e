//! Axum route handlers for the Match API.
//!
//! Thin shims: deserialize, call the pure scoring core, serialize. No
//! storage, no auth — profiles and postings arrive in the request body from
//! the jobs backend and session store, which stay external.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::rank::{rank_with_weights, RankedJob};
use crate::matching::score::{score_with_weights, MatchResult};
use crate::models::job::JobPosting;
use crate::models::profile::UserProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub profile: UserProfile,
    pub job: JobPosting,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub match_score: MatchResult,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub profile: UserProfile,
    pub jobs: Vec<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub jobs: Vec<RankedJob>,
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Scores one posting against one profile. Always succeeds for well-formed
/// bodies: missing fields drop factors from the score rather than erroring.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let match_score = score_with_weights(&request.profile, &request.job, &state.weights);

    Ok(Json(MatchResponse { match_score }))
}

/// POST /api/v1/match/rank
///
/// Scores a list of postings against a profile and returns them sorted by
/// descending score, each with its `matchScore` attached.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let jobs = rank_with_weights(&request.profile, &request.jobs, &state.weights);
    let count = jobs.len();

    tracing::debug!("Ranked {count} postings");

    Ok(Json(RankResponse { jobs, count }))
}
