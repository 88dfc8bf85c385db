//! General pass: single-hop overlap grouping.
//!
//! An event that overlaps nothing gets the whole track. Otherwise the first
//! ungrouped event (in chronological order) opens a group together with every
//! ungrouped event that overlaps it directly, and members are placed left to
//! right in that order. Overlap chains are not followed transitively, which
//! keeps column order stable at the cost of sometimes using more columns than
//! an optimal interval colouring would.

use crate::models::event::{Event, EventId};
use crate::models::placement::{Placement, PlacementRole};
use crate::models::settings::LayoutSettings;

use super::chronological;

pub(super) fn pack(events: &[&Event], settings: &LayoutSettings) -> Vec<(EventId, Placement)> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| chronological(a, b));

    let mut in_conflict = vec![false; sorted.len()];
    for i in 0..sorted.len() {
        for j in (i + 1)..sorted.len() {
            if sorted[i].overlaps(sorted[j]) {
                in_conflict[i] = true;
                in_conflict[j] = true;
            }
        }
    }

    let mut grouped = vec![false; sorted.len()];
    let mut placements = Vec::with_capacity(sorted.len());

    for i in 0..sorted.len() {
        if grouped[i] {
            continue;
        }

        if !in_conflict[i] {
            grouped[i] = true;
            placements.push((sorted[i].id, solo(settings)));
            continue;
        }

        let mut group = vec![i];
        for j in 0..sorted.len() {
            if j != i && !grouped[j] && sorted[i].overlaps(sorted[j]) {
                group.push(j);
            }
        }
        group.sort_unstable();

        for &member in &group {
            grouped[member] = true;
        }

        let width = settings.group_width_pct / group.len() as f32;
        for (column, &member) in group.iter().enumerate() {
            placements.push((
                sorted[member].id,
                Placement {
                    column,
                    total_columns: group.len(),
                    width_pct: width,
                    left_pct: column as f32 * width,
                    z_index: settings.general_z_index + column as i32,
                    opacity: settings.column_opacity(column),
                    role: PlacementRole::Grouped,
                },
            ));
        }
    }

    placements
}

fn solo(settings: &LayoutSettings) -> Placement {
    Placement {
        column: 0,
        total_columns: 1,
        width_pct: 100.0,
        left_pct: 0.0,
        z_index: settings.general_z_index,
        opacity: settings.base_opacity,
        role: PlacementRole::Solo,
    }
}
