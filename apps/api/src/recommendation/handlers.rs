//! Axum route handlers for the Recommendation API.

use std::time::Instant;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::recommendation::engine::recommend;
use crate::recommendation::presenter::{present, ApiJob};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    /// External identity-provider uid of the seeker. The dashboard sends `userId`.
    #[serde(default, alias = "userId")]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub jobs: Vec<ApiJob>,
}

impl RecommendationResponse {
    fn empty() -> Self {
        Self { jobs: Vec::new() }
    }
}

/// GET /api/v1/jobs/recommendations?user_id=<uid> (or `userId=<uid>`)
///
/// Ranks every active listing against the seeker's profile and returns the top matches.
/// Synthetic demo users and users without a finished profile get an empty list.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationQuery>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let uid = params.user_id.trim();
    if uid.is_empty() {
        return Err(AppError::Validation("user_id is required".to_string()));
    }

    if uid.starts_with(&state.config.synthetic_user_prefix) {
        info!("Synthetic user {uid}; returning empty recommendations");
        return Ok(Json(RecommendationResponse::empty()));
    }

    let user_id = state
        .profiles
        .resolve_user_id(uid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {uid} not found")))?;

    let Some(seeker) = state.profiles.fetch_seeker_profile(user_id).await? else {
        warn!("Seeker profile not found for user {user_id} (uid {uid})");
        return Ok(Json(RecommendationResponse::empty()));
    };

    let listings = state.listings.fetch_active_listings().await?;

    let started = Instant::now();
    let ranked = recommend(&seeker, &listings, &state.config.scoring);
    let jobs: Vec<ApiJob> = ranked.iter().map(present).collect();

    info!(
        user_id,
        candidates = listings.len(),
        returned = jobs.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "Recommendations computed"
    );

    Ok(Json(RecommendationResponse { jobs }))
}
