use crate::errors::{LoadError, StoreError};
use crate::models::{CheckIn, StreakState, WeekStrip};
use crate::storage::{KeyValueStore, STORAGE_KEY};
use crate::week::build_week;
use chrono::{Duration, Local, NaiveDate};
use tracing::{debug, error, info, warn};

/// Source of the current local calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        today()
    }
}

/// Clock pinned to a date, advanced by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn advance(&mut self, days: i64) {
        self.0 += Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_string() -> String {
    date_key(today())
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Whole calendar days from `a` to `b`; positive when `b` is later.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

pub fn days_between_str(a: &str, b: &str) -> Option<i64> {
    Some(days_between(parse_date(a)?, parse_date(b)?))
}

/// Zeroes the current streak when the last check-in is more than a day old.
pub fn decay(mut state: StreakState, today: NaiveDate) -> StreakState {
    match state.last_checkin_date {
        None => state.current_streak = 0,
        Some(last) => {
            let gap = days_between(last, today);
            if gap > 1 {
                if state.current_streak > 0 {
                    debug!("streak of {} broken after {gap} days", state.current_streak);
                }
                state.current_streak = 0;
            }
        }
    }
    state.longest_streak = state.longest_streak.max(state.current_streak);
    state
}

/// Applies a check-in for `today` to `state`.
pub fn check_in_at(state: StreakState, today: NaiveDate) -> CheckIn {
    let mut state = decay(state, today);

    if state.last_checkin_date == Some(today) {
        return CheckIn {
            state,
            already_checked_in: true,
        };
    }

    state.current_streak = state.current_streak.saturating_add(1);
    if state.checkin_dates.insert(today) {
        state.total_checkins = state.total_checkins.saturating_add(1);
    }
    state.last_checkin_date = Some(today);
    state.longest_streak = state.longest_streak.max(state.current_streak);

    CheckIn {
        state,
        already_checked_in: false,
    }
}

/// Streak model bound to a storage backend and a clock.
#[derive(Debug, Clone)]
pub struct StreakCounter<S, C = LocalClock> {
    store: S,
    clock: C,
}

impl<S: KeyValueStore> StreakCounter<S, LocalClock> {
    pub fn with_local_clock(store: S) -> Self {
        Self::new(store, LocalClock)
    }
}

impl<S: KeyValueStore, C: Clock> StreakCounter<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Reads the stored record; a missing key yields the default state.
    pub fn load(&self) -> Result<StreakState, LoadError> {
        match self.store.get(STORAGE_KEY)? {
            Some(raw) if !raw.is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(StreakState::default()),
        }
    }

    pub fn save(&mut self, state: &StreakState) -> Result<(), StoreError> {
        let payload = serde_json::to_string(state).map_err(StoreError::Encode)?;
        self.store.set(STORAGE_KEY, payload)
    }

    fn load_or_default(&self) -> StreakState {
        self.load().unwrap_or_else(|err| {
            warn!("falling back to empty streak state: {err}");
            StreakState::default()
        })
    }

    /// Current state with decay applied. Storage is not written.
    pub fn get_state(&self) -> StreakState {
        decay(self.load_or_default(), self.today())
    }

    pub fn check_in(&mut self) -> CheckIn {
        let today = self.today();
        let outcome = check_in_at(self.load_or_default(), today);
        if outcome.already_checked_in {
            return outcome;
        }

        if let Err(err) = self.save(&outcome.state) {
            error!("failed to persist check-in for {today}: {err}");
        }
        info!(
            current = outcome.state.current_streak,
            longest = outcome.state.longest_streak,
            total = outcome.state.total_checkins,
            "checked in for {today}"
        );
        outcome
    }

    pub fn reset(&mut self) -> StreakState {
        if let Err(err) = self.store.remove(STORAGE_KEY) {
            error!("failed to clear streak state: {err}");
        }
        info!("streak state reset");
        StreakState::default()
    }

    pub fn week(&self) -> WeekStrip {
        build_week(&self.get_state(), self.today())
    }
}
