// Placement module
// Horizontal geometry produced by the layout engine for one event

use serde::{Deserialize, Serialize};

/// How the layout engine arrived at a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementRole {
    /// Shares its time with nothing else
    Solo,
    /// Member of a side-by-side overlap group
    Grouped,
    /// Long event drawn as a background block behind the events it encloses
    Container,
    /// Event nested inside a container's inset track
    Contained,
}

/// Where an event is drawn within its day track.
///
/// Percentages are relative to the track width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub column: usize,
    pub total_columns: usize,
    pub width_pct: f32,
    pub left_pct: f32,
    pub z_index: i32,
    pub opacity: f32,
    pub role: PlacementRole,
}

impl Placement {
    /// Right edge of the box as a track percentage
    pub fn right_pct(&self) -> f32 {
        self.left_pct + self.width_pct
    }

    /// Convert to pixel offsets for a track of the given width
    pub fn to_pixels(&self, track_width: f32) -> (f32, f32) {
        (
            track_width * self.left_pct / 100.0,
            track_width * self.width_pct / 100.0,
        )
    }
}
