//! # smartroom-adapter-virtual
//!
//! Virtual sensor collaborators that stand in for the device's physical
//! presence, security, access-control, and mode-selection wiring.
//!
//! The feed replays a fixed script of readings on a timer so the dashboard
//! shows changing data without hardware attached. Nothing is detected or
//! computed — the values are canned.
//!
//! ## Dependency rule
//! Depends on `smartroom-app` (the [`SensorSink`] port) and
//! `smartroom-domain` only. This crate never touches the HTTP layer.

use std::sync::Arc;
use std::time::Duration;

use smartroom_app::ports::SensorSink;
use smartroom_domain::mode::RoomMode;
use smartroom_domain::sensor::SensorField;

/// One scripted step of the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Write a boolean sensor reading.
    Sensor(SensorField, bool),
    /// Switch the operating mode.
    Mode(RoomMode),
}

/// A person walks in and takes over the room, a short intrusion alarm
/// fires and clears, an unauthorized-access flag blips, then the room
/// returns to automatic and empties. Wraps around forever.
const SCRIPT: &[Step] = &[
    Step::Sensor(SensorField::PersonInside, true),
    Step::Mode(RoomMode::Manual),
    Step::Sensor(SensorField::IntrusionAlert, true),
    Step::Sensor(SensorField::IntrusionAlert, false),
    Step::Sensor(SensorField::UnauthAccess, true),
    Step::Sensor(SensorField::UnauthAccess, false),
    Step::Mode(RoomMode::Auto),
    Step::Sensor(SensorField::PersonInside, false),
];

/// Scripted sensor feed driving a [`SensorSink`].
pub struct VirtualSensors<S> {
    sink: Arc<S>,
    period: Duration,
}

impl<S: SensorSink> VirtualSensors<S> {
    /// Create a feed that applies one scripted step per `period`.
    pub fn new(sink: Arc<S>, period: Duration) -> Self {
        Self { sink, period }
    }

    /// Apply the step at `index`, wrapping around the script.
    fn apply(&self, index: usize) {
        match SCRIPT[index % SCRIPT.len()] {
            Step::Sensor(field, value) => {
                tracing::debug!(%field, value, "virtual sensor reading");
                self.sink.set_sensor(field, value);
            }
            Step::Mode(mode) => {
                tracing::debug!(%mode, "virtual mode change");
                self.sink.set_room_mode(mode);
            }
        }
    }

    /// Run the feed until the task is dropped, applying one step per tick.
    pub async fn run(self) {
        let mut interval = tokio::time::interval(self.period);
        let mut index = 0usize;
        loop {
            interval.tick().await;
            self.apply(index);
            index = index.wrapping_add(1);
        }
    }
}
