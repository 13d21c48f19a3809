//! Room mode — the device's operating mode.

use serde::{Deserialize, Serialize};

/// Operating mode of the room.
///
/// The mode is reported to clients as-is; selecting it is the job of an
/// external mode collaborator, not of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomMode {
    /// The room manages itself.
    #[default]
    Auto,
    /// A person has taken over control.
    Manual,
}

impl std::fmt::Display for RoomMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Manual => f.write_str("manual"),
        }
    }
}
