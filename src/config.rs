//! Board configuration.

use crate::board::services::DEFAULT_STORAGE_KEY;
use crate::drag::{DEFAULT_ACTIVATION_DISTANCE, DEFAULT_OVERLAY_OPACITY_PERCENT};
use serde::{Deserialize, Deserializer};

/// Settings for opening a board.
///
/// Deserializes from partial documents; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Storage key holding the task array.
    pub storage_key: String,
    /// Pixels a pointer must travel before a press becomes a drag.
    pub activation_distance: u32,
    /// Opacity of the drag overlay in percent, at most 100.
    #[serde(deserialize_with = "clamped_percent")]
    pub overlay_opacity_percent: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
            overlay_opacity_percent: DEFAULT_OVERLAY_OPACITY_PERCENT,
        }
    }
}

impl BoardConfig {
    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the drag activation distance.
    #[must_use]
    pub const fn with_activation_distance(mut self, distance: u32) -> Self {
        self.activation_distance = distance;
        self
    }

    /// Sets the overlay opacity, clamped to 100.
    #[must_use]
    pub const fn with_overlay_opacity_percent(mut self, percent: u8) -> Self {
        self.overlay_opacity_percent = clamp_percent(percent);
        self
    }
}

const fn clamp_percent(percent: u8) -> u8 {
    if percent > 100 { 100 } else { percent }
}

fn clamped_percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(clamp_percent(u8::deserialize(deserializer)?))
}
