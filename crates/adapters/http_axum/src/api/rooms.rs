//! Handler for room selection.

use axum::Json;
use axum::extract::{Path, State};

use smartstay_app::ports::{HomeStateRepository, NewsletterRepository};

use crate::api::StateEnvelope;
use crate::error::ApiError;
use crate::state::AppState;

/// `PUT /api/rooms/{room}/select`
///
/// Unknown rooms are silent no-ops.
pub async fn select<HR, NR>(
    State(state): State<AppState<HR, NR>>,
    Path(room): Path<String>,
) -> Result<Json<StateEnvelope>, ApiError>
where
    HR: HomeStateRepository + Send + Sync + 'static,
    NR: NewsletterRepository + Send + Sync + 'static,
{
    let updated = state.home_service.set_active_room(&room).await?;
    Ok(StateEnvelope::updated(updated))
}
