//! Calendar classification of due dates for display.
//!
//! Comparison is by calendar date in the time zone of `now`; the time of day
//! is ignored.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DueDateStatus {
    Overdue,
    Today,
    Upcoming,
    #[serde(rename = "none")]
    NoDate,
}

fn local_date<Tz: TimeZone>(instant: &DateTime<Utc>, now: &DateTime<Tz>) -> NaiveDate {
    instant.with_timezone(&now.timezone()).date_naive()
}

pub fn due_date_status<Tz: TimeZone>(
    due_date: Option<&DateTime<Utc>>,
    now: &DateTime<Tz>,
) -> DueDateStatus {
    let Some(due) = due_date else {
        return DueDateStatus::NoDate;
    };
    let today = now.date_naive();
    let due_day = local_date(due, now);
    if due_day < today {
        DueDateStatus::Overdue
    } else if due_day == today {
        DueDateStatus::Today
    } else {
        DueDateStatus::Upcoming
    }
}

/// Due from today through the sixth day after it.
pub fn is_due_this_week<Tz: TimeZone>(due_date: Option<&DateTime<Utc>>, now: &DateTime<Tz>) -> bool {
    due_date.is_some_and(|due| {
        let today = now.date_naive();
        let due_day = local_date(due, now);
        due_day >= today && due_day <= today + Duration::days(6)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_absent_due_date() {
        assert_eq!(due_date_status(None, &noon()), DueDateStatus::NoDate);
        assert!(!is_due_this_week(None, &noon()));
    }

    #[test]
    fn test_same_day_is_today_regardless_of_time() {
        let early = Utc.with_ymd_and_hms(2024, 4, 10, 0, 5, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 4, 10, 23, 55, 0).unwrap();
        assert_eq!(due_date_status(Some(&early), &noon()), DueDateStatus::Today);
        assert_eq!(due_date_status(Some(&late), &noon()), DueDateStatus::Today);
    }

    #[test]
    fn test_past_and_future_days() {
        let yesterday = noon() - Duration::days(1);
        let tomorrow = noon() + Duration::days(1);
        assert_eq!(due_date_status(Some(&yesterday), &noon()), DueDateStatus::Overdue);
        assert_eq!(due_date_status(Some(&tomorrow), &noon()), DueDateStatus::Upcoming);
    }

    #[test]
    fn test_uses_time_zone_of_now() {
        // 23:30 UTC on the 9th is already the 10th at UTC+2.
        let due = Utc.with_ymd_and_hms(2024, 4, 9, 23, 30, 0).unwrap();
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let now_plus_two = noon().with_timezone(&offset);

        assert_eq!(due_date_status(Some(&due), &noon()), DueDateStatus::Overdue);
        assert_eq!(due_date_status(Some(&due), &now_plus_two), DueDateStatus::Today);
    }

    #[test]
    fn test_due_this_week_window() {
        let in_six_days = noon() + Duration::days(6);
        let in_seven_days = noon() + Duration::days(7);
        let yesterday = noon() - Duration::days(1);

        assert!(is_due_this_week(Some(&noon()), &noon()));
        assert!(is_due_this_week(Some(&in_six_days), &noon()));
        assert!(!is_due_this_week(Some(&in_seven_days), &noon()));
        assert!(!is_due_this_week(Some(&yesterday), &noon()));
    }
}
