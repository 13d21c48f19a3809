//! Sensor fields — the status fields external collaborators may write.

/// A boolean status field owned by an external sensor collaborator.
///
/// The light-monitoring flag is deliberately absent: it belongs to the
/// control path (toggle), never to a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorField {
    /// Occupancy, from the presence sensor.
    PersonInside,
    /// Intrusion alarm, from the security collaborator.
    IntrusionAlert,
    /// Unauthorized access, from the access-control collaborator.
    UnauthAccess,
}

impl std::fmt::Display for SensorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PersonInside => f.write_str("person_inside"),
            Self::IntrusionAlert => f.write_str("intrusion_alert"),
            Self::UnauthAccess => f.write_str("unauth_access"),
        }
    }
}
