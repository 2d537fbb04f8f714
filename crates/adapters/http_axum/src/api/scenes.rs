//! Handlers for scene preview and application.
//!
//! Both endpoints derive their actions from the same domain function, so the
//! preview a client confirms is exactly what apply will do.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use smartstay_app::ports::{HomeStateRepository, NewsletterRepository};
use smartstay_domain::scene::{SceneAction, SceneKind};

use crate::api::StateEnvelope;
use crate::error::ApiError;
use crate::state::AppState;

/// Response body for the preview endpoint.
#[derive(Serialize)]
pub struct ScenePreview {
    pub scene: SceneKind,
    pub actions: Vec<SceneAction>,
    /// Number of devices the scene would change; what the confirmation
    /// dialog displays.
    pub affected: usize,
}

/// `GET /api/scenes/{scene}/preview`
pub async fn preview<HR, NR>(
    State(state): State<AppState<HR, NR>>,
    Path(scene): Path<String>,
) -> Result<Json<ScenePreview>, ApiError>
where
    HR: HomeStateRepository + Send + Sync + 'static,
    NR: NewsletterRepository + Send + Sync + 'static,
{
    let scene: SceneKind = scene.parse()?;
    let actions = state.home_service.preview_scene(scene).await?;
    Ok(Json(ScenePreview {
        scene,
        affected: actions.len(),
        actions,
    }))
}

/// `POST /api/scenes/{scene}/apply`
pub async fn apply<HR, NR>(
    State(state): State<AppState<HR, NR>>,
    Path(scene): Path<String>,
) -> Result<Json<StateEnvelope>, ApiError>
where
    HR: HomeStateRepository + Send + Sync + 'static,
    NR: NewsletterRepository + Send + Sync + 'static,
{
    let scene: SceneKind = scene.parse()?;
    let updated = state.home_service.apply_scene(scene).await?;
    Ok(StateEnvelope::updated(updated))
}
