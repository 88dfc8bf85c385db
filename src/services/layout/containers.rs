//! Container pass: long events that fully enclose others.
//!
//! The enclosing event is drawn across the track as a faded background block
//! and the enclosed events are packed into an inset track on top of it. Only
//! one level is modelled: everything inside a container, including events
//! that enclose each other, is packed together in that container's track.

use crate::models::event::Event;
use crate::models::placement::{Placement, PlacementRole};
use crate::models::settings::LayoutSettings;

use super::{columns, longest_first, PlacementMap};

/// Place containers and their children into `placements`.
///
/// `events` arrive sorted chronologically; the events left for the general
/// pass come back in that same chronological order.
pub(super) fn place_containers<'a>(
    events: &[&'a Event],
    settings: &LayoutSettings,
    placements: &mut PlacementMap,
) -> Vec<&'a Event> {
    let mut by_length = events.to_vec();
    by_length.sort_by(|a, b| longest_first(a, b));

    let mut processed = vec![false; by_length.len()];

    for i in 0..by_length.len() {
        if processed[i] {
            continue;
        }

        let container = by_length[i];
        let children: Vec<usize> = (0..by_length.len())
            .filter(|&j| j != i && !processed[j] && by_length[j].is_within(container))
            .collect();

        if children.is_empty() {
            continue;
        }

        log::debug!(
            "Event {} contains {} event(s); nesting them",
            container.id,
            children.len()
        );

        processed[i] = true;
        placements.insert(
            container.id,
            Placement {
                column: 0,
                total_columns: 1,
                width_pct: settings.container_width_pct,
                left_pct: 0.0,
                z_index: settings.container_z_index,
                opacity: settings.container_opacity,
                role: PlacementRole::Container,
            },
        );

        let nested: Vec<&Event> = children.iter().map(|&j| by_length[j]).collect();
        for (id, packed) in columns::pack(&nested, settings) {
            placements.insert(id, inset(packed, settings));
        }
        for j in children {
            processed[j] = true;
        }
    }

    events
        .iter()
        .copied()
        .filter(|event| !placements.contains_key(&event.id))
        .collect()
}

/// Map a placement computed for a full track into a container's inset track
fn inset(packed: Placement, settings: &LayoutSettings) -> Placement {
    Placement {
        width_pct: packed.width_pct * settings.inset_scale,
        left_pct: settings.inset_left_pct + packed.left_pct * settings.inset_scale,
        z_index: settings.contained_z_index + packed.column as i32,
        role: PlacementRole::Contained,
        ..packed
    }
}
