//! Time-bucket classification and relative-time formatting.
//!
//! Pure duration arithmetic on millisecond integers: an hour is exactly
//! 3,600,000 ms and a day exactly 86,400,000 ms. No rounding, no calendar
//! or leap-second awareness.

pub const HOUR_MS: i64 = 60 * 60 * 1000;
pub const DAY_MS: i64 = 24 * HOUR_MS;
pub const WEEK_MS: i64 = 7 * DAY_MS;

/// Where a due date lands relative to "now". Horizons are checked in
/// ascending order, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueBucket {
    /// Past due. Listed in the `overdue` sequence.
    Overdue,
    /// Due within one hour. Listed in the `dueUrgent` sequence.
    DueUrgent,
    /// Due within 24 hours. Listed in the `dueSoon` sequence.
    DueSoon,
    /// Due within 7 days. Counted in the weekly summary only, deliberately
    /// not a fourth listed sequence.
    DueThisWeek,
    /// Beyond 7 days. Counts toward total pending only.
    Later,
}

/// Classify a resolved due date against `now`, both epoch milliseconds.
pub fn classify_due_date(due_ms: i64, now_ms: i64) -> DueBucket {
    let diff = due_ms - now_ms;
    if diff < 0 {
        DueBucket::Overdue
    } else if diff <= HOUR_MS {
        DueBucket::DueUrgent
    } else if diff <= DAY_MS {
        DueBucket::DueSoon
    } else if diff <= WEEK_MS {
        DueBucket::DueThisWeek
    } else {
        DueBucket::Later
    }
}

/// Human-readable time remaining, e.g. "in 3 days", "2 hours overdue",
/// "less than 1 hour".
pub fn format_time_to_go(due_ms: i64, now_ms: i64) -> String {
    let diff = due_ms - now_ms;

    if diff < 0 {
        let hours = (-diff) / HOUR_MS;
        let days = hours / 24;
        if days > 0 {
            return format!("{} days overdue", days);
        }
        if hours > 0 {
            return format!("{} hours overdue", hours);
        }
        return "overdue".to_string();
    }

    let hours = diff / HOUR_MS;
    let days = hours / 24;
    if days > 0 {
        return format!("in {} days", days);
    }
    if hours > 0 {
        return format!("in {} hours", hours);
    }
    "less than 1 hour".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn classifies_in_ascending_horizon_order() {
        assert_eq!(classify_due_date(NOW - 1, NOW), DueBucket::Overdue);
        assert_eq!(classify_due_date(NOW, NOW), DueBucket::DueUrgent);
        assert_eq!(classify_due_date(NOW + HOUR_MS, NOW), DueBucket::DueUrgent);
        assert_eq!(classify_due_date(NOW + HOUR_MS + 1, NOW), DueBucket::DueSoon);
        assert_eq!(classify_due_date(NOW + DAY_MS, NOW), DueBucket::DueSoon);
        assert_eq!(classify_due_date(NOW + DAY_MS + 1, NOW), DueBucket::DueThisWeek);
        assert_eq!(classify_due_date(NOW + WEEK_MS, NOW), DueBucket::DueThisWeek);
        assert_eq!(classify_due_date(NOW + WEEK_MS + 1, NOW), DueBucket::Later);
    }

    #[test]
    fn formats_overdue_magnitudes() {
        assert_eq!(format_time_to_go(NOW - 3 * DAY_MS, NOW), "3 days overdue");
        assert_eq!(format_time_to_go(NOW - 5 * HOUR_MS, NOW), "5 hours overdue");
        assert_eq!(format_time_to_go(NOW - 30 * 60 * 1000, NOW), "overdue");
        assert_eq!(format_time_to_go(NOW - 1, NOW), "overdue");
    }

    #[test]
    fn formats_forward_magnitudes() {
        assert_eq!(format_time_to_go(NOW + 3 * DAY_MS, NOW), "in 3 days");
        assert_eq!(format_time_to_go(NOW + 5 * HOUR_MS, NOW), "in 5 hours");
        assert_eq!(format_time_to_go(NOW + 30 * 60 * 1000, NOW), "less than 1 hour");
    }

    #[test]
    fn counts_use_integer_division() {
        // 47h59m is still "1 day", 25h is "1 day", 1h59m is "1 hour".
        assert_eq!(format_time_to_go(NOW + 2 * DAY_MS - 1, NOW), "in 1 days");
        assert_eq!(format_time_to_go(NOW + 25 * HOUR_MS, NOW), "in 1 days");
        assert_eq!(format_time_to_go(NOW + 2 * HOUR_MS - 1, NOW), "in 1 hours");
    }
}
