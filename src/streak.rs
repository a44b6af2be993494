use chrono::{Duration, Local, NaiveDate};
use std::collections::HashSet;

/// Current streak for a habit given its set of completed days.
///
/// Days are local calendar days, not UTC days: the boundary a user
/// perceives is their own midnight, so callers feed
/// `Local::now().date_naive()` rather than letting a library default pick
/// the UTC day.
pub fn current_streak_today(completed: &HashSet<NaiveDate>) -> u32 {
    current_streak(completed, Local::now().date_naive())
}

/// Count consecutive completed days ending at `today` or `today - 1`.
///
/// Today not being marked yet does not break the run; two unmarked days
/// do. The scan never skips a gap.
pub fn current_streak(completed: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let yesterday = today - Duration::days(1);
    let mut cursor = if completed.contains(&today) {
        today
    } else if completed.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut count = 0;
    while completed.contains(&cursor) {
        count += 1;
        cursor = cursor - Duration::days(1);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn set(dates: &[NaiveDate]) -> HashSet<NaiveDate> {
        dates.iter().copied().collect()
    }

    #[test]
    fn empty_set_has_no_streak() {
        let today = date(2024, 1, 6);
        assert_eq!(current_streak(&HashSet::new(), today), 0);
    }

    #[test]
    fn counts_run_ending_today() {
        let today = date(2024, 3, 10);
        let days = set(&[date(2024, 3, 8), date(2024, 3, 9), date(2024, 3, 10)]);
        assert_eq!(current_streak(&days, today), 3);
    }

    #[test]
    fn today_unmarked_still_counts_through_yesterday() {
        let today = date(2024, 1, 6);
        let days = set(&[
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 1, 3),
            date(2024, 1, 4),
            date(2024, 1, 5),
        ]);
        assert_eq!(current_streak(&days, today), 5);
    }

    #[test]
    fn two_unmarked_days_reset_regardless_of_history() {
        let days = set(&[
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 1, 3),
            date(2024, 1, 4),
            date(2024, 1, 5),
        ]);
        assert_eq!(current_streak(&days, date(2024, 1, 7)), 0);
    }

    #[test]
    fn gap_stops_the_scan() {
        let today = date(2024, 5, 20);
        // 17th missing: only 18..=20 count, 15th/16th are stranded.
        let days = set(&[
            date(2024, 5, 15),
            date(2024, 5, 16),
            date(2024, 5, 18),
            date(2024, 5, 19),
            date(2024, 5, 20),
        ]);
        assert_eq!(current_streak(&days, today), 3);
    }

    #[test]
    fn single_day_today_is_a_streak_of_one() {
        let today = date(2024, 2, 29);
        assert_eq!(current_streak(&set(&[today]), today), 1);
    }

    #[test]
    fn crosses_month_boundaries() {
        let today = date(2024, 3, 2);
        let days = set(&[
            date(2024, 2, 28),
            date(2024, 2, 29),
            date(2024, 3, 1),
            date(2024, 3, 2),
        ]);
        assert_eq!(current_streak(&days, today), 4);
    }
}
