// Event module
// Read-only calendar event record consumed by the layout and reschedule engines

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

/// Identity of an event as issued by the host's event store
pub type EventId = i64;

/// Longest fixed duration an event may carry: one leap year
pub const MAX_FIXED_DURATION_MINUTES: i64 = 366 * 24 * 60;

/// Calendar event as supplied by the host view
///
/// The interval is half-open: `[start, end)`. Touching endpoints never overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(default)]
    pub title: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    #[serde(default)]
    pub all_day: bool,
    /// Fixed duration used by drag previews when start/end give no usable span
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Event {
    /// Create a new timed event
    ///
    /// # Examples
    /// ```
    /// use calendar_grid::models::event::Event;
    /// use chrono::{Duration, Local};
    ///
    /// let start = Local::now();
    /// let event = Event::new(1, "Team Meeting", start, start + Duration::hours(1)).unwrap();
    /// assert_eq!(event.duration(), Duration::hours(1));
    /// ```
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, String> {
        let event = Self {
            id,
            title: title.into(),
            start,
            end,
            all_day: false,
            duration_minutes: None,
            color: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event interval and color
    pub fn validate(&self) -> Result<(), String> {
        if self.end < self.start {
            return Err("Event end time must not be before start time".to_string());
        }

        if !self.has_valid_fixed_duration() {
            return Err(format!(
                "Fixed duration must be between 0 and {} minutes",
                MAX_FIXED_DURATION_MINUTES
            ));
        }

        if let Some(ref color) = self.color {
            if !color.starts_with('#') || (color.len() != 7 && color.len() != 4) {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
        }

        Ok(())
    }

    /// True when `end >= start`
    pub fn has_valid_interval(&self) -> bool {
        self.end >= self.start
    }

    /// True when `duration_minutes` is absent or within `0..=MAX_FIXED_DURATION_MINUTES`
    pub fn has_valid_fixed_duration(&self) -> bool {
        self.duration_minutes
            .map_or(true, |minutes| (0..=MAX_FIXED_DURATION_MINUTES).contains(&minutes))
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Duration a drag must preserve.
    ///
    /// Falls back to `duration_minutes` when the interval is empty. A fallback
    /// that is not positive or out of range is ignored.
    pub fn drag_duration(&self) -> Duration {
        let span = self.duration();
        if span > Duration::zero() {
            return span;
        }
        self.duration_minutes
            .filter(|minutes| (1..=MAX_FIXED_DURATION_MINUTES).contains(minutes))
            .and_then(Duration::try_minutes)
            .unwrap_or(span)
    }

    /// Half-open interval intersection
    pub fn overlaps(&self, other: &Event) -> bool {
        crate::utils::interval::overlaps(self.start, self.end, other.start, other.end)
    }

    /// True when this event's interval lies within `container`'s interval
    pub fn is_within(&self, container: &Event) -> bool {
        crate::utils::interval::contains(container.start, container.end, self.start, self.end)
    }

    /// Copy of this event moved to a new interval
    pub fn with_interval(&self, start: DateTime<Local>, end: DateTime<Local>) -> Event {
        Event {
            start,
            end,
            ..self.clone()
        }
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<EventId>,
    title: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    all_day: bool,
    duration_minutes: Option<i64>,
    color: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: EventId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Fixed duration fallback for drag previews
    pub fn duration_minutes(mut self, minutes: i64) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = Event {
            id,
            title: self.title.unwrap_or_default(),
            start,
            end,
            all_day: self.all_day,
            duration_minutes: self.duration_minutes,
            color: self.color,
        };

        event.validate()?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        let naive = NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap();
        Local.from_local_datetime(&naive).single().unwrap()
    }

    #[test]
    fn test_new_event_success() {
        let event = Event::new(7, "Meeting", at(9, 0), at(10, 0)).unwrap();
        assert_eq!(event.id, 7);
        assert_eq!(event.title, "Meeting");
        assert!(!event.all_day);
        assert_eq!(event.duration(), Duration::hours(1));
    }

    #[test]
    fn test_new_event_reversed_interval() {
        let result = Event::new(1, "Meeting", at(10, 0), at(9, 0));
        assert_eq!(
            result.unwrap_err(),
            "Event end time must not be before start time"
        );
    }

    #[test]
    fn test_zero_length_event_is_valid() {
        let event = Event::new(1, "Reminder", at(9, 0), at(9, 0)).unwrap();
        assert!(event.has_valid_interval());
        assert_eq!(event.duration(), Duration::zero());
    }

    #[test]
    fn test_builder_missing_id() {
        let result = Event::builder().start(at(9, 0)).end(at(10, 0)).build();
        assert_eq!(result.unwrap_err(), "Event id is required");
    }

    #[test]
    fn test_builder_invalid_color() {
        let result = Event::builder()
            .id(1)
            .start(at(9, 0))
            .end(at(10, 0))
            .color("red")
            .build();
        assert!(result.unwrap_err().contains("hex format"));
    }

    #[test]
    fn test_drag_duration_uses_fixed_fallback_for_empty_span() {
        let event = Event::builder()
            .id(1)
            .start(at(9, 0))
            .end(at(9, 0))
            .duration_minutes(45)
            .build()
            .unwrap();
        assert_eq!(event.drag_duration(), Duration::minutes(45));
    }

    #[test]
    fn test_drag_duration_ignores_negative_fallback() {
        let mut event = Event::new(1, "Reminder", at(9, 0), at(9, 0)).unwrap();
        event.duration_minutes = Some(-30);
        assert_eq!(event.drag_duration(), Duration::zero());
    }

    #[test]
    fn test_drag_duration_ignores_huge_fallback() {
        let json = r#"{"id": 1, "start": "2025-06-10T09:00:00+00:00", "end": "2025-06-10T09:00:00+00:00", "duration_minutes": 9223372036854775807}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.drag_duration(), Duration::zero());
    }

    #[test]
    fn test_validate_rejects_out_of_range_fixed_duration() {
        let mut event = Event::new(1, "Reminder", at(9, 0), at(9, 0)).unwrap();
        for minutes in [-30, MAX_FIXED_DURATION_MINUTES + 1, i64::MAX] {
            event.duration_minutes = Some(minutes);
            assert!(!event.has_valid_fixed_duration());
            assert!(event.validate().unwrap_err().contains("Fixed duration"));
        }

        event.duration_minutes = Some(0);
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_drag_duration_prefers_real_span() {
        let event = Event::builder()
            .id(1)
            .start(at(9, 0))
            .end(at(10, 30))
            .duration_minutes(45)
            .build()
            .unwrap();
        assert_eq!(event.drag_duration(), Duration::minutes(90));
    }

    #[test]
    fn test_touching_events_do_not_overlap() {
        let a = Event::new(1, "A", at(9, 0), at(10, 0)).unwrap();
        let b = Event::new(2, "B", at(10, 0), at(11, 0)).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_is_within() {
        let outer = Event::new(1, "Block", at(9, 0), at(12, 0)).unwrap();
        let inner = Event::new(2, "Call", at(10, 0), at(10, 30)).unwrap();
        assert!(inner.is_within(&outer));
        assert!(!outer.is_within(&inner));
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{"id": 3, "start": "2025-06-10T09:00:00+00:00", "end": "2025-06-10T10:00:00+00:00"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 3);
        assert!(!event.all_day);
        assert_eq!(event.duration(), Duration::hours(1));
        assert!(event.title.is_empty());
    }
}
