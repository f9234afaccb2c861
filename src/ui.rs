use crate::models::{CalendarCell, Goal, Habit, HealthMetric};
use crate::seed;
use crate::tracker::Snapshot;
use std::fmt::Write;

pub fn render_index(snapshot: &Snapshot) -> String {
    INDEX_HTML
        .replace("{{RATE}}", &snapshot.completion_rate().to_string())
        .replace("{{HEALTH_ROWS}}", &render_health(&seed::HEALTH_METRICS))
        .replace("{{HABIT_ROWS}}", &render_habits(snapshot.habits.habits()))
        .replace("{{CALENDAR_CELLS}}", &render_calendar(&seed::calendar(&snapshot.days)))
        .replace("{{GOAL_ROWS}}", &render_goals(&seed::GOALS))
}

fn render_health(metrics: &[HealthMetric]) -> String {
    let mut out = String::new();
    for metric in metrics {
        let _ = write!(
            out,
            r#"
        <div class="progress-row">
          <div class="progress-header">
            <span class="progress-title">{}</span>
            <span class="progress-meta">{}</span>
          </div>
          <div class="progress-track"><div class="progress-fill" style="width: {:.0}%"></div></div>
        </div>"#,
            escape_html(metric.title),
            escape_html(metric.target),
            metric.progress * 100.0,
        );
    }
    out
}

fn render_habits(habits: &[Habit]) -> String {
    let mut out = String::new();
    for habit in habits {
        let _ = write!(
            out,
            r#"
        <form method="post" action="/habits/{}/toggle">
          <button class="habit-row{}" type="submit" data-habit="{}">
            <span>
              <span class="habit-title">{}</span>
              <span class="habit-meta">{}</span>
            </span>
            <span class="habit-status">{}</span>
          </button>
        </form>"#,
            encode_path_segment(&habit.id),
            if habit.completed { " done" } else { "" },
            escape_html(&habit.id),
            escape_html(&habit.title),
            escape_html(&habit.schedule),
            if habit.completed { "✓" } else { "○" },
        );
    }
    out
}

fn render_calendar(cells: &[CalendarCell]) -> String {
    let mut out = String::new();
    for cell in cells {
        let _ = write!(
            out,
            r#"
          <form method="post" action="/days/{day}/toggle">
            <button class="calendar-cell{active}" type="submit" data-day="{day}">
              <span class="calendar-day">{day}</span>
              <span class="calendar-emoji">{marker}</span>
            </button>
          </form>"#,
            day = cell.day,
            active = if cell.productive { " active" } else { "" },
            marker = cell.marker,
        );
    }
    out
}

fn render_goals(goals: &[Goal]) -> String {
    let mut out = String::new();
    for goal in goals {
        let _ = write!(
            out,
            r#"
        <div class="goal-row">
          <div>
            <span class="goal-title">{}</span>
            <span class="goal-meta">{}</span>
          </div>
          <span class="goal-status">{}%</span>
        </div>"#,
            escape_html(goal.title),
            escape_html(goal.meta),
            goal.percent,
        );
    }
    out
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn encode_path_segment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(byte as char);
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Compass</title>
  <style>
    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: #ffffff;
      color: #111111;
      font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
    }

    main {
      max-width: 480px;
      margin: 0 auto;
      padding: 20px 20px 40px;
    }

    h1 {
      font-size: 28px;
      font-weight: 700;
      margin: 0 0 6px;
    }

    h2 {
      font-size: 18px;
      font-weight: 600;
      margin: 0;
    }

    form {
      margin: 0;
    }

    button {
      font: inherit;
      color: inherit;
      cursor: pointer;
    }

    button:active {
      opacity: 0.7;
    }

    .subheader {
      font-size: 14px;
      color: #555555;
      margin: 0 0 20px;
    }

    .card {
      background: #f8f8f8;
      border-radius: 16px;
      padding: 16px;
      margin-bottom: 18px;
      border: 1px solid #e6e6e6;
    }

    .card-header-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .section-sub {
      font-size: 12px;
      color: #666666;
      margin: 4px 0 12px;
    }

    .badge {
      background: #111111;
      color: #ffffff;
      padding: 4px 10px;
      border-radius: 12px;
      font-size: 12px;
      font-weight: 600;
    }

    .progress-row {
      margin-bottom: 12px;
    }

    .progress-header {
      display: flex;
      justify-content: space-between;
      margin-bottom: 6px;
    }

    .progress-title {
      font-size: 14px;
      color: #222222;
      font-weight: 500;
    }

    .progress-meta {
      font-size: 12px;
      color: #777777;
    }

    .progress-track {
      height: 8px;
      border-radius: 8px;
      background: #e0e0e0;
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      background: #111111;
      border-radius: 8px;
    }

    .habit-row {
      width: 100%;
      display: flex;
      align-items: center;
      justify-content: space-between;
      text-align: left;
      padding: 12px;
      border-radius: 12px;
      border: 1px solid #e1e1e1;
      margin-bottom: 10px;
      background: #ffffff;
    }

    .habit-row.done {
      background: #f0f0f0;
      border-color: #cfcfcf;
    }

    .habit-title {
      display: block;
      font-size: 15px;
      font-weight: 600;
    }

    .habit-meta {
      display: block;
      font-size: 12px;
      color: #666666;
      margin-top: 2px;
    }

    .habit-status {
      font-size: 18px;
      font-weight: 600;
    }

    .calendar-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 8px;
    }

    .calendar-cell {
      width: 100%;
      aspect-ratio: 1;
      border-radius: 12px;
      background: #ffffff;
      border: 1px solid #e1e1e1;
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      padding: 0;
    }

    .calendar-cell.active {
      background: #111111;
      border-color: #111111;
      color: #ffffff;
    }

    .calendar-day {
      font-size: 12px;
      font-weight: 600;
    }

    .calendar-emoji {
      font-size: 12px;
      margin-top: 2px;
      min-height: 1em;
    }

    .calendar-hint {
      font-size: 12px;
      color: #777777;
      margin: 10px 0 0;
    }

    .goal-row {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 10px 0;
      border-bottom: 1px solid #e2e2e2;
    }

    .goal-title {
      display: block;
      font-size: 15px;
      font-weight: 600;
    }

    .goal-meta {
      display: block;
      font-size: 12px;
      color: #666666;
      margin-top: 2px;
    }

    .goal-status {
      font-size: 14px;
      font-weight: 600;
    }

    footer {
      padding: 16px;
      border-radius: 14px;
      background: #111111;
      color: #ffffff;
      font-size: 14px;
      font-weight: 500;
      text-align: center;
      margin-top: 8px;
    }
  </style>
</head>
<body>
  <main>
    <h1>Habit Compass</h1>
    <p class="subheader">A personal accomplishment and encouragement space built around who you are becoming.</p>

    <section class="card">
      <h2>Health Connect Snapshot</h2>
      <p class="section-sub">Synced from Health Connect · Daily, Monthly, Yearly</p>{{HEALTH_ROWS}}
    </section>

    <section class="card">
      <div class="card-header-row">
        <h2>Daily Focus</h2>
        <span class="badge" id="completion-rate">{{RATE}}% done</span>
      </div>
      <p class="section-sub">Schedule reminders for habits and tap to mark progress.</p>{{HABIT_ROWS}}
    </section>

    <section class="card">
      <h2>Calendar Progress</h2>
      <p class="section-sub">Track streaks daily, monthly, and yearly at a glance.</p>
      <div class="calendar-grid">{{CALENDAR_CELLS}}
      </div>
      <p class="calendar-hint">Tap a day to mark it as a super productive moment.</p>
    </section>

    <section class="card">
      <h2>Goals &amp; Milestones</h2>
      <p class="section-sub">Celebrate certifications, course completions, and key life wins.</p>{{GOAL_ROWS}}
    </section>

    <footer>You are building a life aligned with your values. Keep showing up.</footer>
  </main>
</body>
</html>
"#;
