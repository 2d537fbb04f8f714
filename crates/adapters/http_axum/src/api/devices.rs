//! Handlers for device-level operations.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use smartstay_app::ports::{HomeStateRepository, NewsletterRepository};

use crate::api::StateEnvelope;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Request body for setting a thermostat target.
#[derive(Deserialize)]
pub struct TemperatureRequest {
    pub temp: f64,
}

/// `POST /api/devices/{room}/{device}/toggle`
///
/// Unknown targets and thermostats are silent no-ops.
pub async fn toggle<HR, NR>(
    State(state): State<AppState<HR, NR>>,
    Path((room, device)): Path<(String, String)>,
) -> Result<Json<StateEnvelope>, ApiError>
where
    HR: HomeStateRepository + Send + Sync + 'static,
    NR: NewsletterRepository + Send + Sync + 'static,
{
    let updated = state.home_service.toggle_device(&room, &device).await?;
    Ok(StateEnvelope::updated(updated))
}

/// `POST /api/devices/{room}/{device}/temperature`
pub async fn set_temperature<HR, NR>(
    State(state): State<AppState<HR, NR>>,
    Path((room, device)): Path<(String, String)>,
    ApiJson(body): ApiJson<TemperatureRequest>,
) -> Result<Json<StateEnvelope>, ApiError>
where
    HR: HomeStateRepository + Send + Sync + 'static,
    NR: NewsletterRepository + Send + Sync + 'static,
{
    let updated = state
        .home_service
        .set_thermostat(&room, &device, body.temp)
        .await?;
    Ok(StateEnvelope::updated(updated))
}

/// `POST /api/devices/all-off`
pub async fn all_off<HR, NR>(
    State(state): State<AppState<HR, NR>>,
) -> Result<Json<StateEnvelope>, ApiError>
where
    HR: HomeStateRepository + Send + Sync + 'static,
    NR: NewsletterRepository + Send + Sync + 'static,
{
    let updated = state.home_service.turn_all_off().await?;
    Ok(StateEnvelope::updated(updated))
}
