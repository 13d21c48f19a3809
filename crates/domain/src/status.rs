//! Device status — the value the dashboard polls for.

use serde::{Deserialize, Serialize};

use crate::mode::RoomMode;
use crate::sensor::SensorField;

/// Current status of the room, as reported on the wire.
///
/// Serializes to exactly the five fields the dashboard consumes, in the
/// camelCase names it expects. There is one instance per process, owned by
/// the status store for the lifetime of the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatus {
    /// Operating mode.
    pub room_mode: RoomMode,
    /// Whether the presence sensor currently reports occupancy.
    pub person_inside: bool,
    /// Whether light monitoring is enabled. Flipped by the toggle
    /// operation only.
    pub monitor_light: bool,
    /// Whether the security collaborator reports an intrusion.
    pub intrusion_alert: bool,
    /// Whether the access-control collaborator reports unauthorized access.
    pub unauth_access: bool,
}

impl DeviceStatus {
    /// Flip the light-monitoring flag and return the new value.
    pub fn toggle_monitor_light(&mut self) -> bool {
        self.monitor_light = !self.monitor_light;
        self.monitor_light
    }

    /// Write a sensor reading into the matching field.
    pub fn apply_sensor(&mut self, field: SensorField, value: bool) {
        match field {
            SensorField::PersonInside => self.person_inside = value,
            SensorField::IntrusionAlert => self.intrusion_alert = value,
            SensorField::UnauthAccess => self.unauth_access = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_auto_mode_with_all_flags_clear() {
        let status = DeviceStatus::default();
        assert_eq!(status.room_mode, RoomMode::Auto);
        assert!(!status.person_inside);
        assert!(!status.monitor_light);
        assert!(!status.intrusion_alert);
        assert!(!status.unauth_access);
    }

    #[test]
    fn should_serialize_exactly_the_five_wire_fields() {
        let json = serde_json::to_value(DeviceStatus::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        assert!(obj.contains_key("roomMode"));
        assert!(obj.contains_key("personInside"));
        assert!(obj.contains_key("monitorLight"));
        assert!(obj.contains_key("intrusionAlert"));
        assert!(obj.contains_key("unauthAccess"));
    }

    #[test]
    fn should_serialize_mode_as_lowercase_string() {
        let json = serde_json::to_value(DeviceStatus::default()).unwrap();
        assert_eq!(json["roomMode"], "auto");
    }

    #[test]
    fn should_return_new_value_from_toggle() {
        let mut status = DeviceStatus::default();
        assert!(status.toggle_monitor_light());
        assert!(status.monitor_light);
    }

    #[test]
    fn should_return_to_initial_value_after_two_toggles() {
        let mut status = DeviceStatus::default();
        assert!(status.toggle_monitor_light());
        assert!(!status.toggle_monitor_light());
        assert_eq!(status, DeviceStatus::default());
    }

    #[test]
    fn should_leave_other_fields_untouched_when_toggling() {
        let mut status = DeviceStatus {
            room_mode: RoomMode::Manual,
            person_inside: true,
            ..DeviceStatus::default()
        };
        status.toggle_monitor_light();
        assert_eq!(status.room_mode, RoomMode::Manual);
        assert!(status.person_inside);
        assert!(!status.intrusion_alert);
        assert!(!status.unauth_access);
    }

    #[test]
    fn should_write_the_matching_field_for_each_sensor() {
        let mut status = DeviceStatus::default();

        status.apply_sensor(SensorField::PersonInside, true);
        assert!(status.person_inside);

        status.apply_sensor(SensorField::IntrusionAlert, true);
        assert!(status.intrusion_alert);

        status.apply_sensor(SensorField::UnauthAccess, true);
        assert!(status.unauth_access);

        status.apply_sensor(SensorField::PersonInside, false);
        assert!(!status.person_inside);
        assert!(status.intrusion_alert);
    }

    #[test]
    fn should_never_touch_monitor_light_from_a_sensor_write() {
        let mut status = DeviceStatus::default();
        status.apply_sensor(SensorField::PersonInside, true);
        status.apply_sensor(SensorField::IntrusionAlert, true);
        status.apply_sensor(SensorField::UnauthAccess, true);
        assert!(!status.monitor_light);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let status = DeviceStatus {
            room_mode: RoomMode::Manual,
            person_inside: true,
            monitor_light: true,
            intrusion_alert: false,
            unauth_access: true,
        };
        let json = serde_json::to_string(&status).unwrap();
        let parsed: DeviceStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, status);
    }
}
