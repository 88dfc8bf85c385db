//! Pointer position to clock time conversion.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::settings::GridSettings;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Measurements of the rendered time track, supplied by the host.
///
/// All values are in the same pixel space as the pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    /// Top edge of the scroll container holding the track
    pub top_y: f32,
    /// How far the track is scrolled down
    pub scroll_offset: f32,
    /// Height of one hour row
    pub cell_height_px: f32,
    /// Header drawn above hour 0 inside the scroll container
    pub header_offset_px: f32,
}

impl TrackGeometry {
    /// Track geometry using the configured row and header sizes
    pub fn from_grid(grid: &GridSettings, top_y: f32, scroll_offset: f32) -> Self {
        Self {
            top_y,
            scroll_offset,
            cell_height_px: grid.cell_height_px,
            header_offset_px: grid.header_offset_px,
        }
    }
}

/// A snapped wall-clock time on the target day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SnappedTime {
    pub hour: u32,
    pub minute: u32,
}

impl SnappedTime {
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn minutes_since_midnight(self) -> u32 {
        self.hour * 60 + self.minute
    }
}

/// Convert a vertical pointer position into a snapped clock time.
///
/// The minute within the hour is rounded to the nearest multiple of
/// `snap_minutes`; rounding up to 60 rolls over into the next hour. The result
/// is clamped to `[00:00, 24:00 - snap_minutes]`. Returns `None` for a
/// degenerate track or a non-finite pointer.
pub fn snap_pointer(pointer_y: f32, track: &TrackGeometry, snap_minutes: u32) -> Option<SnappedTime> {
    if snap_minutes == 0
        || !pointer_y.is_finite()
        || !track.cell_height_px.is_finite()
        || track.cell_height_px <= 0.0
    {
        return None;
    }

    let relative_y = f64::from(pointer_y) - f64::from(track.top_y) + f64::from(track.scroll_offset)
        - f64::from(track.header_offset_px);
    if !relative_y.is_finite() {
        return None;
    }

    let total_minutes = relative_y / f64::from(track.cell_height_px) * 60.0;
    let hour = (total_minutes / 60.0).floor() as i64;
    let snap = f64::from(snap_minutes);
    let minute = ((total_minutes.rem_euclid(60.0) / snap).round() * snap) as i64;

    let last_slot = MINUTES_PER_DAY - i64::from(snap_minutes);
    let snapped = (hour.saturating_mul(60).saturating_add(minute)).clamp(0, last_slot);

    Some(SnappedTime {
        hour: (snapped / 60) as u32,
        minute: (snapped % 60) as u32,
    })
}
