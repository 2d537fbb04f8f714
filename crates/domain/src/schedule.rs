//! Schedule — stored intent to change a device at a given time.
//!
//! Schedules are pure data at rest: the system records them and hands them
//! back, but no scheduler or executor exists. The target device is addressed
//! by a composite `room||device` path.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::ScheduleId;

/// Separator between the room and device segments of a device path.
pub const DEVICE_PATH_SEPARATOR: &str = "||";

/// How often a schedule is meant to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleRepeat {
    Daily,
    Weekdays,
    Once,
}

/// A stored (time, repeat) intent for a device. Never evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: ScheduleId,
    pub device_path: String,
    pub time: String,
    pub repeat: ScheduleRepeat,
}

impl Schedule {
    /// Create a schedule with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTime`] when `time` is not `HH:MM`.
    pub fn new(
        device_path: impl Into<String>,
        time: impl Into<String>,
        repeat: ScheduleRepeat,
    ) -> Result<Self, ValidationError> {
        let time = time.into();
        validate_time(&time)?;
        Ok(Self {
            id: ScheduleId::new(),
            device_path: device_path.into(),
            time,
            repeat,
        })
    }

    /// Split the `room||device` path into its segments, if well-formed.
    #[must_use]
    pub fn target(&self) -> Option<(&str, &str)> {
        self.device_path.split_once(DEVICE_PATH_SEPARATOR)
    }

    /// Check stored-format invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTime`] when `time` is not `HH:MM`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_time(&self.time)
    }
}

/// Check that a schedule time matches the documented `HH:MM` format.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTime`] when the string does not parse.
pub fn validate_time(time: &str) -> Result<(), ValidationError> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidTime(time.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_schedule_with_fresh_id() {
        let a = Schedule::new("Bedroom||Fan", "07:30", ScheduleRepeat::Daily).unwrap();
        let b = Schedule::new("Bedroom||Fan", "07:30", ScheduleRepeat::Daily).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn should_reject_time_without_colon() {
        let result = Schedule::new("Bedroom||Fan", "0730", ScheduleRepeat::Once);
        assert!(matches!(result, Err(ValidationError::InvalidTime(_))));
    }

    #[test]
    fn should_reject_out_of_range_time() {
        assert!(validate_time("25:00").is_err());
        assert!(validate_time("12:61").is_err());
    }

    #[test]
    fn should_accept_midnight_and_end_of_day() {
        assert!(validate_time("00:00").is_ok());
        assert!(validate_time("23:59").is_ok());
    }

    #[test]
    fn should_split_device_path_into_room_and_device() {
        let schedule = Schedule::new("Living Room||Ceiling Light", "19:00", ScheduleRepeat::Weekdays)
            .unwrap();
        assert_eq!(schedule.target(), Some(("Living Room", "Ceiling Light")));
    }

    #[test]
    fn should_return_none_for_malformed_device_path() {
        let schedule = Schedule::new("no-separator", "19:00", ScheduleRepeat::Once).unwrap();
        assert_eq!(schedule.target(), None);
    }

    #[test]
    fn should_serialize_with_camel_case_keys() {
        let schedule = Schedule::new("Kitchen||Toaster", "08:00", ScheduleRepeat::Daily).unwrap();
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["devicePath"], "Kitchen||Toaster");
        assert_eq!(json["repeat"], "daily");
    }
}
