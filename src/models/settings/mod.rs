// Settings module
// Tunable layout heuristics and time-grid parameters

use serde::{Deserialize, Serialize};

/// Top-level settings file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub layout: LayoutSettings,
    pub grid: GridSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        self.layout.validate()?;
        self.grid.validate()
    }
}

/// Presentation heuristics used by the layout engine.
///
/// None of these are invariants; they only control how stacked events look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Opacity of solo events and of column 0 in a group
    pub base_opacity: f32,
    /// Opacity added per column in an overlap group
    pub opacity_step: f32,
    /// Upper bound for group opacity; kept below 1.0
    pub max_opacity: f32,
    pub container_opacity: f32,
    /// Share of the track an overlap group may use, leaving a gutter
    pub group_width_pct: f32,
    pub container_width_pct: f32,
    /// Left offset of a container's inset track
    pub inset_left_pct: f32,
    /// Scale applied to placements inside a container
    pub inset_scale: f32,
    pub container_z_index: i32,
    pub contained_z_index: i32,
    pub general_z_index: i32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            base_opacity: 0.65,
            opacity_step: 0.25,
            max_opacity: 0.95,
            container_opacity: 0.65,
            group_width_pct: 95.0,
            container_width_pct: 100.0,
            inset_left_pct: 4.0,
            inset_scale: 0.92,
            container_z_index: 5,
            contained_z_index: 10,
            general_z_index: 20,
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("base_opacity", self.base_opacity),
            ("max_opacity", self.max_opacity),
            ("container_opacity", self.container_opacity),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(format!("{} must be in [0, 1), got {}", name, value));
            }
        }

        if self.opacity_step < 0.0 {
            return Err("opacity_step must not be negative".to_string());
        }

        if !(0.0..=100.0).contains(&self.group_width_pct) || self.group_width_pct == 0.0 {
            return Err("group_width_pct must be in (0, 100]".to_string());
        }

        if !(0.0..=100.0).contains(&self.container_width_pct) || self.container_width_pct == 0.0 {
            return Err("container_width_pct must be in (0, 100]".to_string());
        }

        if !(self.inset_scale.is_finite() && self.inset_scale > 0.0)
            || !(self.inset_left_pct.is_finite() && self.inset_left_pct >= 0.0)
        {
            return Err("inset must have a positive scale and non-negative offset".to_string());
        }

        if self.inset_left_pct + 100.0 * self.inset_scale > 100.0 {
            return Err("inset track must fit inside the container".to_string());
        }

        Ok(())
    }

    /// Opacity of a group member in the given column
    pub fn column_opacity(&self, column: usize) -> f32 {
        (self.base_opacity + column as f32 * self.opacity_step).min(self.max_opacity)
    }
}

/// Geometry of the time grid the pointer moves over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Drag targets are rounded to multiples of this many minutes
    pub snap_minutes: u32,
    /// Height of the sticky day header above hour 0
    pub header_offset_px: f32,
    /// Height of one hour row
    pub cell_height_px: f32,
    /// 0 = Sunday, 1 = Monday, ...
    pub first_day_of_week: u8,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            snap_minutes: 15,
            header_offset_px: 40.0,
            cell_height_px: 60.0,
            first_day_of_week: 0,
        }
    }
}

impl GridSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.snap_minutes == 0 || 60 % self.snap_minutes != 0 {
            return Err(format!(
                "snap_minutes must divide an hour evenly, got {}",
                self.snap_minutes
            ));
        }

        if !(self.cell_height_px.is_finite() && self.cell_height_px > 0.0) {
            return Err("cell_height_px must be positive".to_string());
        }

        if self.first_day_of_week > 6 {
            return Err("first_day_of_week must be between 0 (Sunday) and 6".to_string());
        }

        Ok(())
    }
}
