use crate::models::{CheckIn, StreakState, WeekStrip};
use chrono::NaiveDate;

pub fn render_index(outcome: &CheckIn, week: &WeekStrip) -> String {
    render_page(
        &outcome.state,
        &visit_message(outcome),
        !outcome.already_checked_in,
        outcome.already_checked_in,
        week,
    )
}

/// Page shown straight after a reset; today's check-in is left to the button.
pub fn render_reset(state: &StreakState, week: &WeekStrip) -> String {
    render_page(state, RESET_MESSAGE, false, false, week)
}

const RESET_MESSAGE: &str = "Streak cleared. Check in to start a new one!";

fn render_page(
    state: &StreakState,
    message: &str,
    animate: bool,
    checked_in: bool,
    week: &WeekStrip,
) -> String {
    let pop = if animate { " pop" } else { "" };
    let disabled = if checked_in { " disabled" } else { "" };

    INDEX_HTML
        .replace("{{MESSAGE}}", message)
        .replace("{{CURRENT}}", &state.current_streak.to_string())
        .replace("{{LONGEST}}", &state.longest_streak.to_string())
        .replace("{{TOTAL}}", &state.total_checkins.to_string())
        .replace("{{LAST}}", &format_date(state.last_checkin_date))
        .replace("{{WEEK}}", &render_week(week))
        .replace("{{POP}}", pop)
        .replace("{{DISABLED}}", disabled)
}

pub fn visit_message(outcome: &CheckIn) -> String {
    let streak = outcome.state.current_streak;
    if outcome.already_checked_in {
        format!("🔥 {streak}-day streak - visit already counted for today!")
    } else if streak > 1 {
        format!("🔥 {streak}-day streak! Keep coming back!")
    } else {
        "✅ Visit recorded! Start your streak by coming back tomorrow!".to_string()
    }
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => "Never".to_string(),
    }
}

fn render_week(week: &WeekStrip) -> String {
    week.days
        .iter()
        .map(|day| {
            let mut class = String::from("week-day");
            if day.checked {
                class.push_str(" checked");
            }
            if day.is_today {
                class.push_str(" today");
            }
            let mark = if day.checked { "🔥" } else { "●" };
            format!(
                r#"<li class="{class}" data-day="{label}" title="{date}"><span class="day-label">{label}</span><span class="day-mark">{mark}</span></li>"#,
                label = day.label,
                date = day.date,
            )
        })
        .collect()
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Streak</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg), #ffe9d4);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Georgia", serif;
      margin: 0;
    }

    #visit-msg {
      margin: 0;
      color: #5f5c57;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 16px;
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .pop {
      animation: pop 450ms ease;
    }

    @keyframes pop {
      0% { transform: scale(1); }
      50% { transform: scale(1.25); color: var(--accent); }
      100% { transform: scale(1); }
    }

    .week {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 8px;
    }

    .week-day {
      display: grid;
      place-items: center;
      gap: 4px;
      padding: 10px 0;
      border-radius: 12px;
      background: white;
      color: #8b857d;
    }

    .week-day.checked {
      color: var(--accent);
    }

    .week-day.today {
      outline: 2px solid var(--accent-2);
    }

    .actions {
      display: flex;
      gap: 12px;
    }

    button {
      border: none;
      border-radius: 12px;
      padding: 12px 18px;
      font-size: 1rem;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button:disabled {
      background: #c9c2b8;
      cursor: default;
    }

    .btn-reset {
      background: var(--accent-2);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Streak</h1>
      <p id="visit-msg">{{MESSAGE}}</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Current streak</span>
        <span id="current-streak" class="value{{POP}}">{{CURRENT}}</span>
      </div>
      <div class="stat">
        <span class="label">Longest streak</span>
        <span id="longest-streak" class="value{{POP}}">{{LONGEST}}</span>
      </div>
      <div class="stat">
        <span class="label">Total check-ins</span>
        <span id="total-checkins" class="value{{POP}}">{{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Last check-in</span>
        <span id="last-checkin-date" class="value">{{LAST}}</span>
      </div>
    </section>

    <ul class="week">{{WEEK}}</ul>

    <section class="actions">
      <form method="post" action="/checkin">
        <button id="checkin-btn" type="submit"{{DISABLED}}>Check in</button>
      </form>
      <form method="post" action="/reset">
        <button class="btn-reset" id="reset-btn" type="submit">Reset</button>
      </form>
    </section>
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::week::build_week;

    fn outcome(current_streak: u32, already_checked_in: bool) -> CheckIn {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let mut state = StreakState {
            current_streak,
            longest_streak: current_streak,
            total_checkins: current_streak,
            last_checkin_date: Some(today),
            ..StreakState::default()
        };
        state.checkin_dates.insert(today);
        CheckIn {
            state,
            already_checked_in,
        }
    }

    #[test]
    fn visit_message_variants() {
        assert_eq!(
            visit_message(&outcome(1, false)),
            "✅ Visit recorded! Start your streak by coming back tomorrow!"
        );
        assert_eq!(
            visit_message(&outcome(3, false)),
            "🔥 3-day streak! Keep coming back!"
        );
        assert_eq!(
            visit_message(&outcome(3, true)),
            "🔥 3-day streak - visit already counted for today!"
        );
    }

    #[test]
    fn format_date_is_human_readable() {
        assert_eq!(format_date(None), "Never");
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2026, 3, 5)),
            "March 5, 2026"
        );
    }

    #[test]
    fn render_disables_button_once_checked_in() {
        let checked = outcome(2, true);
        let week = build_week(&checked.state, NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());

        let html = render_index(&checked, &week);
        assert!(html.contains(r#"type="submit" disabled>Check in"#));
        assert!(!html.contains("{{"));
        assert!(html.contains("October 17, 2026"));
        assert!(html.contains(r#"class="week-day checked today" data-day="S""#));

        let fresh = render_index(&outcome(1, false), &week);
        assert!(fresh.contains(r#"type="submit">Check in"#));
        assert!(fresh.contains(r#"class="value pop""#));
    }

    #[test]
    fn reset_page_offers_the_check_in_button() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let state = StreakState::default();
        let html = render_reset(&state, &build_week(&state, today));

        assert!(html.contains(RESET_MESSAGE));
        assert!(html.contains(r#"type="submit">Check in"#));
        assert!(html.contains(r#"id="last-checkin-date" class="value">Never"#));
        assert!(!html.contains(r#"class="value pop""#));
        assert!(!html.contains("{{"));
    }
}
