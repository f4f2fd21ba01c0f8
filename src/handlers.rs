use crate::errors::AppError;
use crate::models::{
    CheckIn, DaysBetweenQuery, DaysBetweenResponse, StreakState, TodayResponse, WeekStrip,
};
use crate::state::{AppState, FileCounter};
use crate::streak::{date_key, days_between_str};
use crate::ui::{render_index, render_reset};
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Json,
};
use std::sync::Arc;

/// Runs `op` against the counter on the blocking pool.
async fn with_counter<T, F>(state: &AppState, op: F) -> Result<T, AppError>
where
    F: FnOnce(&mut FileCounter) -> T + Send + 'static,
    T: Send + 'static,
{
    let counter = Arc::clone(&state.counter);
    tokio::task::spawn_blocking(move || op(&mut counter.blocking_lock()))
        .await
        .map_err(AppError::internal)
}

/// Visiting the page counts as the day's check-in.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = with_counter(&state, |counter| {
        let outcome = counter.check_in();
        render_index(&outcome, &counter.week())
    })
    .await?;
    Ok(Html(page))
}

pub async fn get_state(State(state): State<AppState>) -> Result<Json<StreakState>, AppError> {
    let snapshot = with_counter(&state, |counter| counter.get_state()).await?;
    Ok(Json(snapshot))
}

pub async fn check_in(State(state): State<AppState>) -> Result<Json<CheckIn>, AppError> {
    let outcome = with_counter(&state, |counter| counter.check_in()).await?;
    Ok(Json(outcome))
}

pub async fn check_in_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    with_counter(&state, |counter| counter.check_in()).await?;
    Ok(Redirect::to("/"))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<StreakState>, AppError> {
    let cleared = with_counter(&state, |counter| counter.reset()).await?;
    Ok(Json(cleared))
}

/// Renders the cleared page directly; redirecting to `/` would check in again.
pub async fn reset_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = with_counter(&state, |counter| {
        let cleared = counter.reset();
        render_reset(&cleared, &counter.week())
    })
    .await?;
    Ok(Html(page))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let date = with_counter(&state, |counter| date_key(counter.today())).await?;
    Ok(Json(TodayResponse { date }))
}

pub async fn get_week(State(state): State<AppState>) -> Result<Json<WeekStrip>, AppError> {
    let week = with_counter(&state, |counter| counter.week()).await?;
    Ok(Json(week))
}

pub async fn days_between(
    Query(query): Query<DaysBetweenQuery>,
) -> Result<Json<DaysBetweenResponse>, AppError> {
    let days = days_between_str(&query.from, &query.to)
        .ok_or_else(|| AppError::bad_request("dates must be formatted as YYYY-MM-DD"))?;

    Ok(Json(DaysBetweenResponse {
        from: query.from,
        to: query.to,
        days,
    }))
}
