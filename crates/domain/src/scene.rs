//! Scene — a named bundle of device-state changes applied atomically.
//!
//! [`actions_for`] is the single source of truth for what a scene does. The
//! store uses it to apply scenes and the HTTP layer uses it to preview the
//! affected-device count, so the two can never drift apart.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::device::DeviceKind;
use crate::error::ValidationError;
use crate::home::HomeState;

/// The built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    Home,
    Away,
    Night,
    Custom,
}

impl std::fmt::Display for SceneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => f.write_str("home"),
            Self::Away => f.write_str("away"),
            Self::Night => f.write_str("night"),
            Self::Custom => f.write_str("custom"),
        }
    }
}

impl FromStr for SceneKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "away" => Ok(Self::Away),
            "night" => Ok(Self::Night),
            "custom" => Ok(Self::Custom),
            other => Err(ValidationError::UnknownScene(other.to_string())),
        }
    }
}

/// One device change a scene wants to make. `on` and `temp` mirror the
/// optional fields on [`Device`](crate::device::Device).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneAction {
    pub room: String,
    pub device: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,
}

impl SceneAction {
    fn switch(room: &str, device: &str, on: bool) -> Self {
        Self {
            room: room.to_string(),
            device: device.to_string(),
            on: Some(on),
            temp: None,
        }
    }

    fn temperature(room: &str, device: &str, temp: f64) -> Self {
        Self {
            room: room.to_string(),
            device: device.to_string(),
            on: None,
            temp: Some(temp),
        }
    }
}

/// Derive the list of device actions a scene performs against the current
/// state. Actions targeting devices that no longer exist are harmless; the
/// store skips them when applying.
#[must_use]
pub fn actions_for(scene: SceneKind, state: &HomeState) -> Vec<SceneAction> {
    match scene {
        SceneKind::Home => vec![
            SceneAction::switch("Living Room", "Ceiling Light", true),
            SceneAction::temperature("Living Room", "Thermostat", 21.0),
        ],
        SceneKind::Away => {
            let mut actions = switch_off_actions(state, DeviceKind::is_switchable);
            actions.push(SceneAction::temperature("Living Room", "Thermostat", 18.0));
            actions
        }
        SceneKind::Night => {
            let mut actions = switch_off_actions(state, |kind| kind == DeviceKind::Light);
            actions.push(SceneAction::switch("Bedroom", "Bedside Lamp", true));
            actions
        }
        // Custom records the scene name and changes nothing.
        SceneKind::Custom => Vec::new(),
    }
}

fn switch_off_actions(state: &HomeState, wanted: impl Fn(DeviceKind) -> bool) -> Vec<SceneAction> {
    state
        .rooms
        .iter()
        .flat_map(|(room, contents)| {
            contents
                .devices
                .iter()
                .filter(|(_, device)| wanted(device.kind))
                .map(|(name, _)| SceneAction::switch(room, name, false))
        })
        .collect()
}
