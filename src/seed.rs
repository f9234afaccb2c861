use crate::models::{CalendarCell, Goal, Habit, HealthMetric};
use crate::tracker::ProductiveDays;

pub const CALENDAR_LENGTH: i64 = 30;

const DAILY_HABITS: [(&str, &str, &str); 4] = [
    ("reading", "Read a book", "Daily · 20 min"),
    ("course", "Course lesson", "Mon, Wed, Fri"),
    ("cert", "Certification prep", "Weekend focus"),
    ("hydrate", "Hydration", "Daily · 2L water"),
];

const PRODUCTIVE_DAYS: [i64; 4] = [4, 12, 18, 24];

pub const HEALTH_METRICS: [HealthMetric; 5] = [
    HealthMetric { id: "steps", title: "Daily Steps", target: "10k steps", progress: 0.72 },
    HealthMetric { id: "workouts", title: "Workouts", target: "5 / week", progress: 0.6 },
    HealthMetric { id: "exercise", title: "Exercises", target: "3 / day", progress: 0.8 },
    HealthMetric { id: "diet", title: "Diet Check-in", target: "Healthy meals", progress: 0.55 },
    HealthMetric { id: "rest", title: "Rest Days", target: "2 / week", progress: 0.4 },
];

pub const GOALS: [Goal; 2] = [
    Goal { title: "Mobile Dev Certification", meta: "ETA · 6 weeks", percent: 65 },
    Goal { title: "Read 12 Books", meta: "Yearly · 7 completed", percent: 58 },
];

/// Seed habits in display order; even positions start completed.
pub fn daily_habits() -> Vec<Habit> {
    DAILY_HABITS
        .iter()
        .enumerate()
        .map(|(index, (id, title, schedule))| Habit {
            id: (*id).to_string(),
            title: (*title).to_string(),
            schedule: (*schedule).to_string(),
            completed: index % 2 == 0,
        })
        .collect()
}

pub fn productive_days() -> ProductiveDays {
    ProductiveDays::new(PRODUCTIVE_DAYS)
}

/// Decorative marker shown on a calendar day that is not marked productive.
pub fn mood_marker(day: i64) -> &'static str {
    let index = day - 1;
    if index % 9 == 0 {
        "🔥"
    } else if index % 7 == 0 {
        "✨"
    } else {
        ""
    }
}

pub fn calendar(days: &ProductiveDays) -> Vec<CalendarCell> {
    (1..=CALENDAR_LENGTH)
        .map(|day| {
            let productive = days.contains(day);
            CalendarCell {
                day,
                marker: if productive { "🔥" } else { mood_marker(day) },
                productive,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_habits_alternate_completion() {
        let habits = daily_habits();
        let flags: Vec<bool> = habits.iter().map(|habit| habit.completed).collect();
        assert_eq!(flags, vec![true, false, true, false]);
        assert_eq!(habits[3].id, "hydrate");
    }

    #[test]
    fn calendar_uses_mood_unless_productive() {
        let cells = calendar(&productive_days());
        assert_eq!(cells.len(), 30);
        assert_eq!(cells[0].marker, "🔥");
        assert_eq!(cells[7].marker, "✨");
        assert_eq!(cells[1].marker, "");

        let day_four = &cells[3];
        assert!(day_four.productive);
        assert_eq!(day_four.marker, "🔥");
    }

    #[test]
    fn mood_prefers_fire_over_sparkle() {
        // index 63 is a multiple of both 9 and 7
        assert_eq!(mood_marker(64), "🔥");
        assert_eq!(mood_marker(15), "✨");
        assert_eq!(mood_marker(10), "🔥");
    }
}
