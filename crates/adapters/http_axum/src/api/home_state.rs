//! Handlers for reading and replacing the full home state.

use axum::Json;
use axum::extract::State;

use smartstay_app::ports::{HomeStateRepository, NewsletterRepository};
use smartstay_domain::home::HomeState;

use crate::api::StateEnvelope;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// `GET /api/home-state`
pub async fn get<HR, NR>(
    State(state): State<AppState<HR, NR>>,
) -> Result<Json<HomeState>, ApiError>
where
    HR: HomeStateRepository + Send + Sync + 'static,
    NR: NewsletterRepository + Send + Sync + 'static,
{
    let home = state.home_service.state().await?;
    Ok(Json(home))
}

/// `PUT /api/home-state`
///
/// Replaces the state wholesale with a client-uploaded snapshot, after
/// validating stored-format invariants.
pub async fn put<HR, NR>(
    State(state): State<AppState<HR, NR>>,
    ApiJson(uploaded): ApiJson<HomeState>,
) -> Result<Json<StateEnvelope>, ApiError>
where
    HR: HomeStateRepository + Send + Sync + 'static,
    NR: NewsletterRepository + Send + Sync + 'static,
{
    let saved = state.home_service.save_state(uploaded).await?;
    Ok(StateEnvelope::updated(saved))
}
