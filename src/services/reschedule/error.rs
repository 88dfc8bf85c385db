use chrono::{DateTime, Local};
use thiserror::Error;

use crate::models::event::EventId;

/// Errors raised while starting or applying a reschedule
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RescheduleError {
    /// The event's end lies before its start, so there is no duration to keep
    #[error("event {id} ends at {end} before it starts at {start}")]
    InvalidInterval {
        id: EventId,
        start: DateTime<Local>,
        end: DateTime<Local>,
    },

    /// The fixed-duration fallback is negative or too large to add to a date
    #[error("event {id} has an unusable fixed duration of {minutes} minutes")]
    InvalidDuration { id: EventId, minutes: i64 },

    /// A commit intent names an event the host list does not contain
    #[error("event {0} is not in the event list")]
    UnknownEvent(EventId),
}
