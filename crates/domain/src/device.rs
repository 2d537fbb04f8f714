//! Device — a single controllable unit inside a room.
//!
//! A device is one of three kinds: lights and appliances carry an on/off
//! state, thermostats carry a target temperature. The fields are optional in
//! the wire format, so a device only serializes the state that is meaningful
//! for its kind.

use serde::{Deserialize, Serialize};

/// Lowest thermostat temperature the model accepts.
pub const TEMP_MIN: f64 = 16.0;
/// Highest thermostat temperature the model accepts.
pub const TEMP_MAX: f64 = 30.0;

/// Discrete kind of a [`Device`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Light,
    Thermostat,
    Appliance,
}

impl DeviceKind {
    /// Whether the kind carries an on/off state (anything but a thermostat).
    #[must_use]
    pub fn is_switchable(self) -> bool {
        !matches!(self, Self::Thermostat)
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Thermostat => f.write_str("thermostat"),
            Self::Appliance => f.write_str("appliance"),
        }
    }
}

/// A single device. `on` is meaningful only for lights and appliances,
/// `temp` only for thermostats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,
}

impl Device {
    /// A light, initially off unless stated otherwise.
    #[must_use]
    pub fn light(on: bool) -> Self {
        Self {
            kind: DeviceKind::Light,
            on: Some(on),
            temp: None,
        }
    }

    /// A thermostat at the given target temperature, clamped to the
    /// supported range.
    #[must_use]
    pub fn thermostat(temp: f64) -> Self {
        Self {
            kind: DeviceKind::Thermostat,
            on: None,
            temp: Some(temp.clamp(TEMP_MIN, TEMP_MAX)),
        }
    }

    /// An appliance, initially off unless stated otherwise.
    #[must_use]
    pub fn appliance(on: bool) -> Self {
        Self {
            kind: DeviceKind::Appliance,
            on: Some(on),
            temp: None,
        }
    }

    /// Flip the on/off state. No-op for thermostats.
    pub fn toggle(&mut self) {
        if self.kind.is_switchable() {
            self.on = Some(!self.on.unwrap_or(false));
        }
    }

    /// Force the on/off state. No-op for thermostats.
    pub fn set_on(&mut self, on: bool) {
        if self.kind.is_switchable() {
            self.on = Some(on);
        }
    }

    /// Set the target temperature, clamped to [`TEMP_MIN`]..=[`TEMP_MAX`].
    /// No-op for anything but a thermostat.
    pub fn set_temp(&mut self, temp: f64) {
        if self.kind == DeviceKind::Thermostat {
            self.temp = Some(temp.clamp(TEMP_MIN, TEMP_MAX));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_lights_and_appliances_switchable() {
        assert!(DeviceKind::Light.is_switchable());
        assert!(DeviceKind::Appliance.is_switchable());
        assert!(!DeviceKind::Thermostat.is_switchable());
    }

    #[test]
    fn should_toggle_light_back_to_original_state() {
        let mut light = Device::light(false);
        light.toggle();
        assert_eq!(light.on, Some(true));
        light.toggle();
        assert_eq!(light.on, Some(false));
    }

    #[test]
    fn should_not_toggle_thermostat() {
        let mut thermostat = Device::thermostat(21.0);
        thermostat.toggle();
        assert_eq!(thermostat.on, None);
    }

    #[test]
    fn should_clamp_temperature_to_supported_range() {
        let mut thermostat = Device::thermostat(21.0);
        thermostat.set_temp(99.0);
        assert_eq!(thermostat.temp, Some(TEMP_MAX));
        thermostat.set_temp(-5.0);
        assert_eq!(thermostat.temp, Some(TEMP_MIN));
        thermostat.set_temp(22.5);
        assert_eq!(thermostat.temp, Some(22.5));
    }

    #[test]
    fn should_not_set_temperature_on_light() {
        let mut light = Device::light(true);
        light.set_temp(20.0);
        assert_eq!(light.temp, None);
    }

    #[test]
    fn should_serialize_kind_under_type_key_without_empty_fields() {
        let json = serde_json::to_value(Device::light(false)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "light", "on": false}));

        let json = serde_json::to_value(Device::thermostat(21.0)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "thermostat", "temp": 21.0}));
    }

    #[test]
    fn should_deserialize_device_from_wire_format() {
        let device: Device = serde_json::from_str(r#"{"type":"appliance","on":true}"#).unwrap();
        assert_eq!(device.kind, DeviceKind::Appliance);
        assert_eq!(device.on, Some(true));
    }
}
