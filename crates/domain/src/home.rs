//! `HomeState` — the aggregate the whole system revolves around.
//!
//! One instance exists per process, created from the hard-coded default
//! layout at startup, mutated by every API call, and lost on restart. All
//! mutations are silent no-ops when they reference an unknown room, device,
//! or schedule id: the state is returned unchanged instead of failing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::device::{Device, TEMP_MAX, TEMP_MIN};
use crate::error::ValidationError;
use crate::scene::{SceneKind, actions_for};
use crate::schedule::Schedule;

/// A named room holding devices by name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Room {
    pub devices: BTreeMap<String, Device>,
}

/// The whole home: rooms, selection, last applied scene, stored schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeState {
    pub rooms: BTreeMap<String, Room>,
    /// Should name a key of `rooms`; violations are tolerated, not rejected.
    pub active_room: String,
    pub active_scene: SceneKind,
    pub schedules: Vec<Schedule>,
}

impl HomeState {
    /// The hard-coded layout every process starts from.
    #[must_use]
    pub fn default_layout() -> Self {
        let mut rooms = BTreeMap::new();
        rooms.insert(
            "Living Room".to_string(),
            Room {
                devices: BTreeMap::from([
                    ("Ceiling Light".to_string(), Device::light(false)),
                    ("Thermostat".to_string(), Device::thermostat(21.0)),
                    ("Coffee Maker".to_string(), Device::appliance(false)),
                ]),
            },
        );
        rooms.insert(
            "Kitchen".to_string(),
            Room {
                devices: BTreeMap::from([
                    ("Kitchen Light".to_string(), Device::light(false)),
                    ("Toaster".to_string(), Device::appliance(false)),
                ]),
            },
        );
        rooms.insert(
            "Bedroom".to_string(),
            Room {
                devices: BTreeMap::from([
                    ("Bedside Lamp".to_string(), Device::light(false)),
                    ("Fan".to_string(), Device::appliance(false)),
                ]),
            },
        );

        Self {
            rooms,
            active_room: "Living Room".to_string(),
            active_scene: SceneKind::Home,
            schedules: Vec::new(),
        }
    }

    /// Look up a device by room and device name.
    #[must_use]
    pub fn device(&self, room: &str, device: &str) -> Option<&Device> {
        self.rooms.get(room)?.devices.get(device)
    }

    fn device_mut(&mut self, room: &str, device: &str) -> Option<&mut Device> {
        self.rooms.get_mut(room)?.devices.get_mut(device)
    }

    /// Flip a light or appliance. Unknown targets and thermostats no-op.
    pub fn toggle_device(&mut self, room: &str, device: &str) {
        if let Some(device) = self.device_mut(room, device) {
            device.toggle();
        }
    }

    /// Set a thermostat target, clamped to the supported range. Unknown
    /// targets and non-thermostats no-op.
    pub fn set_thermostat(&mut self, room: &str, device: &str, temp: f64) {
        if let Some(device) = self.device_mut(room, device) {
            device.set_temp(temp);
        }
    }

    /// Switch off every light and appliance across all rooms.
    pub fn turn_all_off(&mut self) {
        for room in self.rooms.values_mut() {
            for device in room.devices.values_mut() {
                device.set_on(false);
            }
        }
    }

    /// Select a room. No-op when the room does not exist.
    pub fn set_active_room(&mut self, room: &str) {
        if self.rooms.contains_key(room) {
            self.active_room = room.to_string();
        }
    }

    /// Apply a scene: derive its actions, apply those whose target still
    /// exists, and record the scene name.
    pub fn apply_scene(&mut self, scene: SceneKind) {
        for action in actions_for(scene, self) {
            if let Some(device) = self.device_mut(&action.room, &action.device) {
                if let Some(on) = action.on {
                    device.set_on(on);
                }
                if let Some(temp) = action.temp {
                    device.set_temp(temp);
                }
            }
        }
        self.active_scene = scene;
    }

    /// Append a schedule.
    pub fn add_schedule(&mut self, schedule: Schedule) {
        self.schedules.push(schedule);
    }

    /// Remove a schedule by its id. Unknown or malformed ids no-op.
    pub fn remove_schedule(&mut self, id: &str) {
        self.schedules.retain(|s| s.id.to_string() != id);
    }

    /// Check stored-format invariants for a full-state upload: temperature
    /// bounds wherever a `temp` is present, and schedule time formats.
    /// `active_room` is deliberately best-effort and never rejected.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for room in self.rooms.values() {
            for device in room.devices.values() {
                if let Some(temp) = device.temp
                    && !(TEMP_MIN..=TEMP_MAX).contains(&temp)
                {
                    return Err(ValidationError::TemperatureOutOfRange(temp));
                }
            }
        }
        for schedule in &self.schedules {
            schedule.validate()?;
        }
        Ok(())
    }
}
