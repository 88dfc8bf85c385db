//! Day-track geometry helpers.
//!
//! Pure functions that decide which events a day column shows, where a timed
//! event's box sits vertically, and which date a grid column stands for.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::event::Event;
use crate::models::ui::ViewKind;
use crate::utils::date::{end_of_day, resolve_local, start_of_day};
use crate::utils::interval::overlaps;

/// Vertical extent of an event box inside a day track, in pixels from hour 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventBlock {
    pub top_px: f32,
    pub height_px: f32,
}

/// Portion of `event` that falls on `date`, as local wall-clock times.
///
/// Multi-day events are clipped to the day. A zero-length event belongs to the
/// day its instant falls on.
pub fn day_segment(event: &Event, date: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
    if !event.has_valid_interval() {
        return None;
    }

    let start = event.start.naive_local();
    let end = event.end.naive_local();
    let day_start = start_of_day(date);
    let day_end = end_of_day(date);

    if start == end {
        return (start >= day_start && start < day_end).then_some((start, end));
    }

    if !overlaps(start, end, day_start, day_end) {
        return None;
    }

    Some((start.max(day_start), end.min(day_end)))
}

/// All-day flag, or a same-day span written as 00:00 to 23:59
pub fn is_all_day_span(event: &Event) -> bool {
    if event.all_day {
        return true;
    }

    let start = event.start.naive_local();
    let end = event.end.naive_local();
    start.date() == end.date()
        && (start.hour(), start.minute()) == (0, 0)
        && (end.hour(), end.minute()) == (23, 59)
}

/// Timed events visible on `date`, clipped to that day.
///
/// This is the input the layout engine expects for one day column. All-day
/// spans are left out; they belong in the all-day row.
pub fn events_for_date(events: &[Event], date: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|event| !is_all_day_span(event))
        .filter_map(|event| {
            let (start, end) = day_segment(event, date)?;
            Some(event.with_interval(resolve_local(start), resolve_local(end)))
        })
        .collect()
}

/// All-day spans touching `date`
pub fn all_day_events_for_date(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| is_all_day_span(event) && day_segment(event, date).is_some())
        .collect()
}

/// Vertical box of a timed event on `date` for a track with the given row height
pub fn event_block(event: &Event, date: NaiveDate, cell_height_px: f32) -> Option<EventBlock> {
    let (start, end) = day_segment(event, date)?;
    let offset_minutes = (start - start_of_day(date)).num_seconds() as f32 / 60.0;
    let length_minutes = (end - start).num_seconds() as f32 / 60.0;

    Some(EventBlock {
        top_px: offset_minutes / 60.0 * cell_height_px,
        height_px: length_minutes / 60.0 * cell_height_px,
    })
}

/// Calculate the start of the week containing the given date.
///
/// `first_day_of_week`: 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// Dates drawn by a view, in column order.
///
/// Month grids cover six full weeks starting on the week of the 1st.
pub fn view_dates(view: ViewKind, anchor: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    let (first, count) = match view {
        ViewKind::Day => (anchor, 1),
        ViewKind::Week => (week_start(anchor, first_day_of_week), 7),
        ViewKind::Month => {
            let first_of_month = anchor.with_day(1).unwrap_or(anchor);
            (week_start(first_of_month, first_day_of_week), 42)
        }
    };

    (0..count).map(|offset| first + Duration::days(offset)).collect()
}

/// Date shown by a drop column, if the column exists
pub fn column_date(dates: &[NaiveDate], column: usize) -> Option<NaiveDate> {
    dates.get(column).copied()
}
