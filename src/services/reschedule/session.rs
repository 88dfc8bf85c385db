use chrono::{DateTime, Duration, Local, NaiveDate};

use crate::models::event::{Event, EventId};

use super::snap::TrackGeometry;

/// Where the pointer currently is during a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropTarget {
    pub date: NaiveDate,
    /// Day column under the pointer, used to highlight the drop column
    pub column: Option<usize>,
    pub pointer_y: Option<f32>,
    /// `None` when the pointer is not over a time track (month cells, all-day row)
    pub track: Option<TrackGeometry>,
}

impl DropTarget {
    /// Target without a time track: only the day can change
    pub fn day(date: NaiveDate, column: Option<usize>) -> Self {
        Self {
            date,
            column,
            pointer_y: None,
            track: None,
        }
    }

    pub fn timed(date: NaiveDate, column: Option<usize>, pointer_y: f32, track: TrackGeometry) -> Self {
        Self {
            date,
            column,
            pointer_y: Some(pointer_y),
            track: Some(track),
        }
    }
}

/// State of one pointer-drag gesture.
///
/// Owned by the caller. Dropping it is the cancel path; the engine keeps
/// nothing else alive.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub event: Event,
    pub original_start: DateTime<Local>,
    pub original_end: DateTime<Local>,
    /// Absolute duration every preview and commit keeps
    pub duration: Duration,
    /// Distance from the event's top edge to the pointer at drag start
    pub pointer_offset: f32,
    pub pointer_y: Option<f32>,
    pub hovered_date: Option<NaiveDate>,
    pub hovered_column: Option<usize>,
    pub preview: Option<(DateTime<Local>, DateTime<Local>)>,
}

impl DragSession {
    pub(super) fn from_event(event: &Event, pointer_offset: f32) -> Self {
        Self {
            event: event.clone(),
            original_start: event.start,
            original_end: event.end,
            duration: event.drag_duration(),
            pointer_offset,
            pointer_y: None,
            hovered_date: Some(event.start.date_naive()),
            hovered_column: None,
            preview: None,
        }
    }

    pub fn event_id(&self) -> EventId {
        self.event.id
    }

    pub fn is_all_day(&self) -> bool {
        self.event.all_day
    }

    /// Start of the current preview, if the pointer has moved over a target
    pub fn hovered_start(&self) -> Option<DateTime<Local>> {
        self.preview.map(|(start, _)| start)
    }

    /// Where the top edge of the dragged box should be drawn for a pointer position
    pub fn ghost_top(&self, pointer_y: f32) -> f32 {
        pointer_y - self.pointer_offset
    }

    pub(super) fn record_hover(&mut self, target: &DropTarget, preview: &Event) {
        self.hovered_date = Some(target.date);
        self.hovered_column = target.column;
        self.pointer_y = target.pointer_y;
        self.preview = Some((preview.start, preview.end));
    }
}
