use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use crate::streak::parse_date;

/// Persisted streak record.
///
/// Field names are camelCase on the wire and every field is optional when
/// reading, so partial records merge over the default. Counters that are not
/// non-negative integers read as zero, and date values that do not parse as
/// `YYYY-MM-DD` are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StreakState {
    #[serde(deserialize_with = "lenient_count")]
    pub current_streak: u32,
    #[serde(deserialize_with = "lenient_count")]
    pub longest_streak: u32,
    #[serde(deserialize_with = "lenient_count")]
    pub total_checkins: u32,
    #[serde(deserialize_with = "lenient_date")]
    pub last_checkin_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_dates")]
    pub checkin_dates: BTreeSet<NaiveDate>,
}

/// Result of a check-in attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub state: StreakState,
    pub already_checked_in: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct DaysBetweenQuery {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DaysBetweenResponse {
    pub from: String,
    pub to: String,
    pub days: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekDay {
    pub label: &'static str,
    pub date: String,
    pub checked: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekStrip {
    pub week: String,
    pub start_date: String,
    pub days: Vec<WeekDay>,
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let count = raw
        .as_ref()
        .and_then(Value::as_u64)
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or_default();
    Ok(count)
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_str).and_then(parse_date))
}

fn lenient_dates<'de, D>(deserializer: D) -> Result<BTreeSet<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let dates = raw
        .as_ref()
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(parse_date)
                .collect()
        })
        .unwrap_or_default();
    Ok(dates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_record_merges_over_default() {
        let state: StreakState = serde_json::from_str(r#"{"currentStreak":3}"#).unwrap();
        assert_eq!(state.current_streak, 3);
        assert_eq!(state.longest_streak, 0);
        assert_eq!(state.last_checkin_date, None);
        assert!(state.checkin_dates.is_empty());
    }

    #[test]
    fn mistyped_counters_read_as_zero_without_losing_the_record() {
        let state: StreakState = serde_json::from_str(
            r#"{"currentStreak":null,"longestStreak":10,"totalCheckins":-3,"lastCheckinDate":"2026-10-16","checkinDates":["2026-10-16"]}"#,
        )
        .unwrap();
        assert_eq!(state.current_streak, 0);
        assert_eq!(state.longest_streak, 10);
        assert_eq!(state.total_checkins, 0);
        assert_eq!(state.last_checkin_date, NaiveDate::from_ymd_opt(2026, 10, 16));
        assert_eq!(state.checkin_dates.len(), 1);

        let fractional: StreakState =
            serde_json::from_str(r#"{"longestStreak":"7","totalCheckins":10.0}"#).unwrap();
        assert_eq!(fractional.longest_streak, 0);
        assert_eq!(fractional.total_checkins, 0);
    }

    #[test]
    fn malformed_dates_are_dropped() {
        let state: StreakState = serde_json::from_str(
            r#"{"lastCheckinDate":"yesterday","checkinDates":["2026-01-02","nope",7,"2026-01-02"]}"#,
        )
        .unwrap();
        assert_eq!(state.last_checkin_date, None);
        assert_eq!(state.checkin_dates.len(), 1);
    }

    #[test]
    fn serializes_camel_case_with_plain_dates() {
        let mut state = StreakState::default();
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        state.last_checkin_date = Some(date);
        state.checkin_dates.insert(date);

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["lastCheckinDate"], "2026-10-17");
        assert_eq!(value["checkinDates"][0], "2026-10-17");
        assert_eq!(value["totalCheckins"], 0);
        assert!(serde_json::to_value(StreakState::default()).unwrap()["lastCheckinDate"].is_null());
    }
}
