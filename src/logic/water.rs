//! Water intake logic
//!
//! Date keys and totals for the water log. Entries are matched to a day by
//! plain string equality on the date key, so the key format must stay stable.

use chrono::NaiveDateTime;

use crate::model::water::WaterEntry;

/// Date key for a moment, e.g. `10/19/2026`
pub fn date_key(now: NaiveDateTime) -> String {
    now.format("%-m/%-d/%Y").to_string()
}

/// Clock label for a moment, e.g. `9:05:07 AM`
pub fn time_label(now: NaiveDateTime) -> String {
    now.format("%-I:%M:%S %p").to_string()
}

/// Entries logged on `date`, in insertion order
pub fn entries_for<'a>(entries: &'a [WaterEntry], date: &str) -> Vec<&'a WaterEntry> {
    entries.iter().filter(|entry| entry.date == date).collect()
}

/// Sum of amounts logged on `date`
pub fn total_for(entries: &[WaterEntry], date: &str) -> u32 {
    entries
        .iter()
        .filter(|entry| entry.date == date)
        .map(|entry| entry.amount)
        .sum()
}

/// Progress towards the daily goal, clamped to `0.0..=1.0`
pub fn goal_ratio(total: u32, goal: u32) -> f64 {
    super::goals::goal_progress(total as f64, goal as f64, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn entry(date: &str, amount: u32) -> WaterEntry {
        WaterEntry {
            date: date.to_string(),
            time: "8:00:00 AM".to_string(),
            amount,
        }
    }

    #[test]
    fn test_date_key_has_no_padding() {
        assert_eq!(date_key(at(2026, 3, 7, 9, 5, 7)), "3/7/2026");
        assert_eq!(date_key(at(2026, 10, 19, 23, 0, 0)), "10/19/2026");
    }

    #[test]
    fn test_time_label_is_twelve_hour() {
        assert_eq!(time_label(at(2026, 3, 7, 9, 5, 7)), "9:05:07 AM");
        assert_eq!(time_label(at(2026, 3, 7, 0, 30, 0)), "12:30:00 AM");
        assert_eq!(time_label(at(2026, 3, 7, 15, 45, 59)), "3:45:59 PM");
    }

    #[test]
    fn test_total_only_counts_matching_date() {
        let entries = vec![
            entry("10/18/2026", 1),
            entry("10/19/2026", 1),
            entry("10/19/2026", 2),
        ];
        assert_eq!(total_for(&entries, "10/19/2026"), 3);
        assert_eq!(total_for(&entries, "10/18/2026"), 1);
        assert_eq!(total_for(&entries, "10/20/2026"), 0);
        assert_eq!(entries_for(&entries, "10/19/2026").len(), 2);
    }

    #[test]
    fn test_goal_ratio() {
        assert_eq!(goal_ratio(4, 8), 0.5);
        assert_eq!(goal_ratio(12, 8), 1.0);
        assert_eq!(goal_ratio(3, 0), 0.0);
    }
}
