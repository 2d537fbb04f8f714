//! JSON REST API handler modules.

pub mod devices;
pub mod home_state;
pub mod newsletter;
pub mod rooms;
pub mod schedules;
pub mod scenes;

use axum::Json;
use axum::Router;
use axum::routing::{delete, get, post, put};
use serde::Serialize;

use smartstay_app::ports::{HomeStateRepository, NewsletterRepository};
use smartstay_domain::home::HomeState;

use crate::state::AppState;

/// Envelope every mutation endpoint answers with: `{success, state}`.
#[derive(Serialize)]
pub struct StateEnvelope {
    pub success: bool,
    pub state: HomeState,
}

impl StateEnvelope {
    fn updated(state: HomeState) -> Json<Self> {
        Json(Self {
            success: true,
            state,
        })
    }
}

/// Build the `/api` sub-router.
pub fn routes<HR, NR>() -> Router<AppState<HR, NR>>
where
    HR: HomeStateRepository + Send + Sync + 'static,
    NR: NewsletterRepository + Send + Sync + 'static,
{
    Router::new()
        // Home state
        .route(
            "/home-state",
            get(home_state::get::<HR, NR>).put(home_state::put::<HR, NR>),
        )
        // Scenes
        .route("/scenes/{scene}/preview", get(scenes::preview::<HR, NR>))
        .route("/scenes/{scene}/apply", post(scenes::apply::<HR, NR>))
        // Devices
        .route("/devices/all-off", post(devices::all_off::<HR, NR>))
        .route(
            "/devices/{room}/{device}/toggle",
            post(devices::toggle::<HR, NR>),
        )
        .route(
            "/devices/{room}/{device}/temperature",
            post(devices::set_temperature::<HR, NR>),
        )
        // Schedules
        .route("/schedules", post(schedules::create::<HR, NR>))
        .route("/schedules/{id}", delete(schedules::remove::<HR, NR>))
        // Rooms
        .route("/rooms/{room}/select", put(rooms::select::<HR, NR>))
        // Newsletter
        .route(
            "/newsletter",
            get(newsletter::list::<HR, NR>).post(newsletter::subscribe::<HR, NR>),
        )
}
