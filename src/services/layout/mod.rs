//! Event layout engine.
//!
//! Assigns every event in one day track a horizontal slot so overlapping events
//! sit side by side and short events wrapped by a long block are drawn nested
//! inside it. Two passes run in order:
//!
//! 1. the container pass (`containers`), longest events first, which pulls out
//!    every event that fully encloses at least one other and nests the enclosed
//!    events in an inset track;
//! 2. the general pass (`columns`), which packs whatever is left into
//!    single-hop overlap groups.
//!
//! The result is independent of input order: events are always visited in a
//! fixed order derived from their times and ids.

mod columns;
mod containers;

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use crate::models::event::{Event, EventId};
use crate::models::placement::Placement;
use crate::models::settings::LayoutSettings;

pub type PlacementMap = BTreeMap<EventId, Placement>;

#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    settings: LayoutSettings,
}

impl LayoutEngine {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Lay out the events of one day track.
    ///
    /// Never fails: events with `end < start` are logged and left out, and
    /// duplicate ids keep only their first occurrence in chronological order.
    pub fn layout(&self, events: &[Event]) -> PlacementMap {
        let events = layout_candidates(events);
        let mut placements = PlacementMap::new();

        let remaining = containers::place_containers(&events, &self.settings, &mut placements);
        placements.extend(columns::pack(&remaining, &self.settings));

        log::debug!(
            "Laid out {} events ({} nested under containers)",
            placements.len(),
            events.len() - remaining.len()
        );
        placements
    }

    /// Single-hop column packing without the container split
    pub fn pack_columns(&self, events: &[Event]) -> PlacementMap {
        let events = layout_candidates(events);
        columns::pack(&events, &self.settings).into_iter().collect()
    }
}

/// Start ascending, longer first on equal starts, id as the final tie-break
pub(crate) fn chronological(a: &Event, b: &Event) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| b.duration().cmp(&a.duration()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Longest first, earlier start on equal durations, id as the final tie-break
pub(crate) fn longest_first(a: &Event, b: &Event) -> Ordering {
    b.duration()
        .cmp(&a.duration())
        .then_with(|| a.start.cmp(&b.start))
        .then_with(|| a.id.cmp(&b.id))
}

/// Valid, id-unique events in chronological order
fn layout_candidates(events: &[Event]) -> Vec<&Event> {
    let mut valid: Vec<&Event> = events
        .iter()
        .filter(|event| {
            if event.has_valid_interval() {
                true
            } else {
                log::warn!(
                    "Skipping event {} in layout: end {} is before start {}",
                    event.id,
                    event.end,
                    event.start
                );
                false
            }
        })
        .collect();
    valid.sort_by(|a, b| chronological(a, b));

    let mut seen = HashSet::new();
    valid.retain(|event| {
        let first = seen.insert(event.id);
        if !first {
            log::warn!("Skipping duplicate event id {} in layout", event.id);
        }
        first
    });
    valid
}
