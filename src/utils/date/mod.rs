// Date utility functions
// Wall-clock <-> instant conversion, DST aware

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Resolve a wall-clock time in `tz`.
///
/// Ambiguous times (DST fall-back) take the earlier instant. Times that fall in a
/// DST gap move forward to the first wall-clock time that exists.
pub fn resolve_in<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    let mut candidate = naive;
    // Gaps are at most a couple of hours in practice
    for _ in 0..16 {
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(dt) => return dt,
            LocalResult::Ambiguous(earliest, _) => return earliest,
            LocalResult::None => candidate += Duration::minutes(15),
        }
    }
    log::warn!("No local time found near {}; interpreting as UTC", naive);
    tz.from_utc_datetime(&naive)
}

/// [`resolve_in`] for the system timezone
pub fn resolve_local(naive: NaiveDateTime) -> DateTime<Local> {
    resolve_in(&Local, naive)
}

/// `date` at `time` in `tz`
pub fn datetime_in<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: NaiveTime) -> DateTime<Tz> {
    resolve_in(tz, date.and_time(time))
}

/// `date` at `time` in the local timezone
pub fn local_datetime(date: NaiveDate, time: NaiveTime) -> DateTime<Local> {
    datetime_in(&Local, date, time)
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Exclusive end of the day, i.e. the next midnight
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Offset, Timelike};
    use chrono_tz::America::New_York;

    fn naive(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn local_datetime_keeps_wall_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        let dt = local_datetime(date, time);
        assert_eq!(dt.date_naive(), date);
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn day_bounds_are_half_open() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(start_of_day(date).date(), date);
        assert_eq!(end_of_day(date).date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(end_of_day(date) - start_of_day(date), Duration::days(1));
    }

    #[test]
    fn spring_forward_gap_moves_to_first_valid_time() {
        // 02:00-03:00 does not exist in New York on 2025-03-09
        let dt = resolve_in(&New_York, naive(3, 9, 2, 30));
        assert_eq!(dt.naive_local(), naive(3, 9, 3, 0));
        assert_eq!(dt.offset().fix(), FixedOffset::west_opt(4 * 3600).unwrap());
    }

    #[test]
    fn fall_back_overlap_takes_earlier_instant() {
        // 01:30 happens twice in New York on 2025-11-02
        let dt = resolve_in(&New_York, naive(11, 2, 1, 30));
        assert_eq!(dt.naive_local(), naive(11, 2, 1, 30));
        assert_eq!(dt.offset().fix(), FixedOffset::west_opt(4 * 3600).unwrap());
        assert_eq!(dt.naive_utc(), naive(11, 2, 5, 30));
    }

    #[test]
    fn unambiguous_time_resolves_directly() {
        let dt = datetime_in(
            &New_York,
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
        );
        assert_eq!(dt.naive_local(), naive(6, 10, 9, 15));
        assert_eq!(dt.naive_utc(), naive(6, 10, 13, 15));
    }
}
