//! Handlers for newsletter subscriptions.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use smartstay_app::ports::{HomeStateRepository, NewsletterRepository};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Request body for subscribing.
#[derive(Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Response body for a successful subscription.
#[derive(Serialize)]
pub struct SubscribeResponse {
    pub success: bool,
}

/// Response body listing subscriptions.
#[derive(Serialize)]
pub struct SubscriptionsResponse {
    pub count: usize,
    pub subscriptions: Vec<String>,
}

/// `POST /api/newsletter`
pub async fn subscribe<HR, NR>(
    State(state): State<AppState<HR, NR>>,
    ApiJson(req): ApiJson<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>, ApiError>
where
    HR: HomeStateRepository + Send + Sync + 'static,
    NR: NewsletterRepository + Send + Sync + 'static,
{
    state.newsletter_service.subscribe(&req.email).await?;
    Ok(Json(SubscribeResponse { success: true }))
}

/// `GET /api/newsletter`
pub async fn list<HR, NR>(
    State(state): State<AppState<HR, NR>>,
) -> Result<Json<SubscriptionsResponse>, ApiError>
where
    HR: HomeStateRepository + Send + Sync + 'static,
    NR: NewsletterRepository + Send + Sync + 'static,
{
    let subscriptions = state.newsletter_service.subscriptions().await?;
    Ok(Json(SubscriptionsResponse {
        count: subscriptions.len(),
        subscriptions,
    }))
}
