//! Drag-to-reschedule controller.
//!
//! Turns pointer positions over a day/week/month grid into new event times.
//! Every operation is a pure function of its arguments plus the caller-owned
//! [`DragSession`]; the controller itself only carries the view kind and grid
//! settings.
//!
//! Timed events dropped over a time track move to the snapped time on the
//! target day. All-day events, and drops where no time can be resolved, keep
//! their time of day and only change date. Durations are measured between
//! instants, so a move across a DST change keeps the real elapsed duration.

mod error;
mod session;
mod snap;

pub use error::RescheduleError;
pub use session::{DragSession, DropTarget};
pub use snap::{snap_pointer, SnappedTime, TrackGeometry};

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::models::event::{Event, EventId, MAX_FIXED_DURATION_MINUTES};
use crate::models::settings::GridSettings;
use crate::models::ui::ViewKind;
use crate::utils::date::{datetime_in, local_datetime};

/// The update a host applies optimistically and then persists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitIntent {
    pub event_id: EventId,
    pub new_start: DateTime<Local>,
    pub new_end: DateTime<Local>,
}

#[derive(Debug, Clone, Default)]
pub struct RescheduleController {
    view: ViewKind,
    grid: GridSettings,
}

impl RescheduleController {
    pub fn new(view: ViewKind, grid: GridSettings) -> Self {
        Self { view, grid }
    }

    pub fn view(&self) -> ViewKind {
        self.view
    }

    pub fn grid(&self) -> &GridSettings {
        &self.grid
    }

    /// Track geometry for this grid at the given container position
    pub fn track_at(&self, top_y: f32, scroll_offset: f32) -> TrackGeometry {
        TrackGeometry::from_grid(&self.grid, top_y, scroll_offset)
    }

    /// Capture an event and its duration at the start of a drag
    pub fn begin_drag(&self, event: &Event, pointer_offset: f32) -> Result<DragSession, RescheduleError> {
        if !event.has_valid_interval() {
            return Err(RescheduleError::InvalidInterval {
                id: event.id,
                start: event.start,
                end: event.end,
            });
        }

        if !event.has_valid_fixed_duration() {
            return Err(RescheduleError::InvalidDuration {
                id: event.id,
                minutes: event.duration_minutes.unwrap_or_default(),
            });
        }

        if event.start.checked_add_signed(event.drag_duration()).is_none() {
            return Err(RescheduleError::InvalidInterval {
                id: event.id,
                start: event.start,
                end: event.end,
            });
        }

        log::debug!("Begin drag of event {} in {:?} view", event.id, self.view);
        Ok(DragSession::from_event(event, pointer_offset))
    }

    /// Snapped clock time under the pointer, or `None` without a time track
    pub fn compute_snapped_time(&self, pointer_y: f32, track: Option<&TrackGeometry>) -> Option<SnappedTime> {
        if !self.view.has_time_track() {
            return None;
        }
        snap_pointer(pointer_y, track?, self.grid.snap_minutes)
    }

    /// Synthetic event showing where the drop would land. Never persisted.
    pub fn preview_drop(
        &self,
        session: &DragSession,
        target_date: NaiveDate,
        pointer_y: Option<f32>,
        track: Option<&TrackGeometry>,
    ) -> Event {
        let (start, end) = self.target_interval(session, target_date, pointer_y, track);
        session.event.with_interval(start, end)
    }

    /// Preview for a pointer move, recording the hover state in the session
    pub fn drag_over(&self, session: &mut DragSession, target: &DropTarget) -> Event {
        let preview = self.preview_drop(session, target.date, target.pointer_y, target.track.as_ref());
        session.record_hover(target, &preview);
        preview
    }

    /// Final interval for a drop
    pub fn commit_drop(
        &self,
        session: &DragSession,
        target_date: NaiveDate,
        pointer_y: Option<f32>,
        track: Option<&TrackGeometry>,
    ) -> CommitIntent {
        let (new_start, new_end) = self.target_interval(session, target_date, pointer_y, track);
        log::info!(
            "Reschedule event {}: {} -> {}",
            session.event_id(),
            session.original_start,
            new_start
        );
        CommitIntent {
            event_id: session.event_id(),
            new_start,
            new_end,
        }
    }

    fn target_interval(
        &self,
        session: &DragSession,
        target_date: NaiveDate,
        pointer_y: Option<f32>,
        track: Option<&TrackGeometry>,
    ) -> (DateTime<Local>, DateTime<Local>) {
        let snapped = if session.is_all_day() {
            None
        } else {
            pointer_y.and_then(|y| self.compute_snapped_time(y, track))
        };

        if let Some(time) = snapped {
            return shift_interval(&Local, target_date, time.to_naive_time(), session.duration);
        }

        if session.is_all_day() {
            // Keep the span in whole days so it still covers full days after the move
            let start = local_datetime(target_date, session.original_start.time());
            let day_span = session.original_end.date_naive() - session.original_start.date_naive();
            let end_date = target_date.checked_add_signed(day_span).unwrap_or(target_date);
            let end = local_datetime(end_date, session.original_end.time()).max(start);
            return (start, end);
        }

        shift_interval(&Local, target_date, session.original_start.time(), session.duration)
    }
}

/// Interval starting at `time` on `date` in `tz` and lasting `duration` of real time.
///
/// The end never precedes the start: a negative duration counts as zero and one
/// that overflows the calendar is capped at the fixed-duration maximum.
fn shift_interval<Tz: TimeZone>(
    tz: &Tz,
    date: NaiveDate,
    time: NaiveTime,
    duration: Duration,
) -> (DateTime<Tz>, DateTime<Tz>) {
    let start = datetime_in(tz, date, time);
    let duration = duration.max(Duration::zero());
    let end = start.clone().checked_add_signed(duration).unwrap_or_else(|| {
        log::warn!("Duration {} overflows from {}; capping it", duration, start.naive_local());
        Duration::try_minutes(MAX_FIXED_DURATION_MINUTES)
            .and_then(|cap| start.clone().checked_add_signed(cap))
            .unwrap_or_else(|| start.clone())
    });
    (start, end)
}
