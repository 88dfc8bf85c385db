// UI models module
// Calendar view kinds understood by the engines

use serde::{Deserialize, Serialize};

/// Which grid the host is drawing.
///
/// Day and Week have a vertical time track; Month only has day cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Day,
    #[default]
    Week,
    Month,
}

impl ViewKind {
    /// True when the view has a time track that pointer positions map onto
    pub fn has_time_track(&self) -> bool {
        matches!(self, ViewKind::Day | ViewKind::Week)
    }
}
