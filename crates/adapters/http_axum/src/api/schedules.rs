//! Handlers for schedule bookkeeping.
//!
//! Schedules are inert data: created, listed as part of the home state, and
//! deleted, but never executed.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use smartstay_app::ports::{HomeStateRepository, NewsletterRepository};
use smartstay_domain::schedule::ScheduleRepeat;

use crate::api::StateEnvelope;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Request body for creating a schedule.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub device_path: String,
    pub time: String,
    pub repeat: ScheduleRepeat,
}

/// `POST /api/schedules` → 201
pub async fn create<HR, NR>(
    State(state): State<AppState<HR, NR>>,
    ApiJson(req): ApiJson<CreateScheduleRequest>,
) -> Result<(StatusCode, Json<StateEnvelope>), ApiError>
where
    HR: HomeStateRepository + Send + Sync + 'static,
    NR: NewsletterRepository + Send + Sync + 'static,
{
    let updated = state
        .home_service
        .add_schedule(&req.device_path, &req.time, req.repeat)
        .await?;
    Ok((StatusCode::CREATED, StateEnvelope::updated(updated)))
}

/// `DELETE /api/schedules/{id}`
///
/// Unknown ids are silent no-ops.
pub async fn remove<HR, NR>(
    State(state): State<AppState<HR, NR>>,
    Path(id): Path<String>,
) -> Result<Json<StateEnvelope>, ApiError>
where
    HR: HomeStateRepository + Send + Sync + 'static,
    NR: NewsletterRepository + Send + Sync + 'static,
{
    let updated = state.home_service.remove_schedule(&id).await?;
    Ok(StateEnvelope::updated(updated))
}
