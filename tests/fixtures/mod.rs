// Test fixtures - reusable test data
// Provides consistent events and grid geometry across integration tests

#![allow(dead_code)]

use calendar_grid::models::event::Event;
use calendar_grid::utils::date::local_datetime;
use chrono::{DateTime, Local, NaiveDate, NaiveTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Tuesday, June 10, 2025
    pub fn workday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    /// Friday, June 13, 2025
    pub fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 13).unwrap()
    }

    /// `hour:minute` on the sample workday
    pub fn at(hour: u32, minute: u32) -> DateTime<Local> {
        on(workday(), hour, minute)
    }

    pub fn on(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Local> {
        local_datetime(date, NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn timed(id: i64, start: (u32, u32), end: (u32, u32)) -> Event {
        Event::new(
            id,
            format!("Event {}", id),
            dates::at(start.0, start.1),
            dates::at(end.0, end.1),
        )
        .unwrap()
    }

    /// A focus block from 09:00 to 12:00 wrapping a short call
    pub fn focus_block_with_call() -> Vec<Event> {
        vec![timed(1, (9, 0), (12, 0)), timed(2, (10, 0), (10, 30))]
    }

    /// Three meetings stacked around 10:00
    pub fn crowded_morning() -> Vec<Event> {
        vec![
            timed(10, (9, 0), (10, 0)),
            timed(11, (9, 30), (10, 30)),
            timed(12, (9, 45), (10, 15)),
        ]
    }

    pub fn all_day(id: i64) -> Event {
        Event::builder()
            .id(id)
            .title("Holiday")
            .start(dates::at(0, 0))
            .end(dates::on(dates::workday().succ_opt().unwrap(), 0, 0))
            .all_day(true)
            .build()
            .unwrap()
    }
}
