use crate::models::{StreakState, WeekDay, WeekStrip};
use crate::streak::date_key;
use chrono::{Datelike, Duration, NaiveDate};

const DAY_LABELS: [&str; 7] = ["M", "T", "W", "Th", "F", "S", "Su"];

/// Check-in marks for the Monday-start week containing `today`.
pub fn build_week(state: &StreakState, today: NaiveDate) -> WeekStrip {
    let start = week_start(today);
    let days = DAY_LABELS
        .into_iter()
        .enumerate()
        .map(|(offset, label)| {
            let date = start + Duration::days(offset as i64);
            WeekDay {
                label,
                date: date_key(date),
                checked: state.checkin_dates.contains(&date),
                is_today: date == today,
            }
        })
        .collect();

    WeekStrip {
        week: week_label(start),
        start_date: date_key(start),
        days,
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_starts_on_monday() {
        let sunday = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();
        let week = build_week(&StreakState::default(), sunday);

        assert_eq!(week.start_date, "2025-12-29");
        assert_eq!(week.week, "2026-W01");
        assert_eq!(week.days.len(), 7);
        assert!(week.days[6].is_today);
        assert_eq!(week.days[6].label, "Su");
        assert!(week.days.iter().all(|day| !day.checked));
    }

    #[test]
    fn only_dates_inside_the_week_are_checked() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        let mut state = StreakState::default();
        for date in ["2026-01-04", "2026-01-05", "2026-01-07", "2026-01-12"] {
            state.checkin_dates.insert(date.parse().unwrap());
        }

        let week = build_week(&state, today);
        let checked: Vec<_> = week
            .days
            .iter()
            .filter(|day| day.checked)
            .map(|day| day.date.as_str())
            .collect();
        assert_eq!(checked, vec!["2026-01-05", "2026-01-07"]);
    }
}
