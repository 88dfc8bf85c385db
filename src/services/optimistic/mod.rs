// Optimistic event store
//
// Host-side list of events that applies a drop immediately and puts the
// pre-drag list back when the external update fails.

use anyhow::Result;
use chrono::{DateTime, Local};

use crate::models::event::{Event, EventId};
use crate::services::reschedule::{CommitIntent, RescheduleError};

/// Seam to the external event-persistence API
#[cfg_attr(test, mockall::automock)]
pub trait EventPersistence {
    /// Store new times for an event
    fn update_times(&self, event_id: EventId, start: DateTime<Local>, end: DateTime<Local>) -> Result<()>;
}

/// Snapshot taken before an optimistic update, used to undo it
#[derive(Debug, Clone)]
pub struct PendingUpdate {
    pub intent: CommitIntent,
    previous: Vec<Event>,
}

#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, event_id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == event_id)
    }

    /// Apply an intent to the list right away.
    ///
    /// Returns `None` and leaves the list alone when the event is unknown.
    pub fn apply(&mut self, intent: &CommitIntent) -> Option<PendingUpdate> {
        let index = self.events.iter().position(|event| event.id == intent.event_id)?;
        let previous = self.events.clone();

        let event = &mut self.events[index];
        event.start = intent.new_start;
        event.end = intent.new_end;

        Some(PendingUpdate {
            intent: intent.clone(),
            previous,
        })
    }

    /// Restore the list exactly as it was before `pending` was applied
    pub fn rollback(&mut self, pending: PendingUpdate) {
        log::warn!(
            "Rolling back optimistic update of event {}",
            pending.intent.event_id
        );
        self.events = pending.previous;
    }

    /// Apply optimistically, persist, and roll back if persisting fails.
    ///
    /// There is no retry; the persistence error is returned to the caller.
    pub fn commit_with<P: EventPersistence + ?Sized>(
        &mut self,
        intent: &CommitIntent,
        persistence: &P,
    ) -> Result<()> {
        let pending = self
            .apply(intent)
            .ok_or(RescheduleError::UnknownEvent(intent.event_id))?;

        match persistence.update_times(intent.event_id, intent.new_start, intent.new_end) {
            Ok(()) => {
                log::debug!("Persisted new times for event {}", intent.event_id);
                Ok(())
            }
            Err(err) => {
                self.rollback(pending);
                Err(err.context(format!("failed to persist event {}", intent.event_id)))
            }
        }
    }
}
