//! Habit and productive-day state.
//!
//! Both collections are immutable snapshots behind an `Arc`. A toggle builds
//! a new snapshot and swaps it in, so anyone still holding the previous one
//! keeps seeing the values it had when it was taken.

use crate::models::Habit;
use crate::seed;
use crate::stats::completion_rate;
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitStore {
    habits: Arc<[Habit]>,
}

impl HabitStore {
    pub fn new(habits: Vec<Habit>) -> Self {
        Self {
            habits: habits.into(),
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    /// Returns a store with the completion flag of `id` negated.
    ///
    /// Unknown ids leave the store as it is.
    pub fn toggled(&self, id: &str) -> Self {
        match self.position(id) {
            Some(index) => self.flipped_at(index),
            None => self.clone(),
        }
    }

    pub fn completion_rate(&self) -> u8 {
        completion_rate(&self.habits)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.habits.iter().position(|habit| habit.id == id)
    }

    fn flipped_at(&self, index: usize) -> Self {
        let habits = self
            .habits
            .iter()
            .enumerate()
            .map(|(position, habit)| {
                if position == index {
                    Habit {
                        completed: !habit.completed,
                        ..habit.clone()
                    }
                } else {
                    habit.clone()
                }
            })
            .collect();
        Self { habits }
    }
}

/// Calendar days marked as super productive. Any integer is a valid key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductiveDays {
    days: Arc<BTreeSet<i64>>,
}

impl ProductiveDays {
    pub fn new(days: impl IntoIterator<Item = i64>) -> Self {
        Self {
            days: Arc::new(days.into_iter().collect()),
        }
    }

    pub fn contains(&self, day: i64) -> bool {
        self.days.contains(&day)
    }

    pub fn toggled(&self, day: i64) -> Self {
        let mut days = BTreeSet::clone(&self.days);
        if !days.remove(&day) {
            days.insert(day);
        }
        Self {
            days: Arc::new(days),
        }
    }

    /// Members in ascending order.
    pub fn to_vec(&self) -> Vec<i64> {
        self.days.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Read-only view of the tracker at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub habits: HabitStore,
    pub days: ProductiveDays,
}

impl Snapshot {
    pub fn completion_rate(&self) -> u8 {
        self.habits.completion_rate()
    }
}

/// The single authoritative holder of habit and day state.
#[derive(Debug, Clone)]
pub struct Tracker {
    habits: HabitStore,
    days: ProductiveDays,
}

impl Tracker {
    pub fn new(habits: HabitStore, days: ProductiveDays) -> Self {
        Self { habits, days }
    }

    pub fn seeded() -> Self {
        Self::new(HabitStore::new(seed::daily_habits()), seed::productive_days())
    }

    /// Flips one habit and returns its new flag, or `None` if `id` is unknown.
    pub fn toggle_habit(&mut self, id: &str) -> Option<bool> {
        let index = self.habits.position(id)?;
        self.habits = self.habits.flipped_at(index);
        Some(self.habits.habits[index].completed)
    }

    /// Flips membership of `day` and returns whether it is now productive.
    pub fn toggle_day(&mut self, day: i64) -> bool {
        self.days = self.days.toggled(day);
        self.days.contains(day)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            habits: self.habits.clone(),
            days: self.days.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &HabitStore) -> Vec<String> {
        store.habits().iter().map(|habit| habit.id.clone()).collect()
    }

    #[test]
    fn toggling_habit_twice_restores_store() {
        let original = HabitStore::new(seed::daily_habits());
        for habit in original.habits() {
            let once = original.toggled(&habit.id);
            assert_eq!(
                once.get(&habit.id).map(|h| h.completed),
                Some(!habit.completed)
            );
            assert_eq!(once.toggled(&habit.id), original);
        }
    }

    #[test]
    fn toggling_habit_leaves_others_untouched() {
        let original = HabitStore::new(seed::daily_habits());
        let toggled = original.toggled("course");
        for (before, after) in original.habits().iter().zip(toggled.habits()) {
            if before.id == "course" {
                assert_eq!(before.title, after.title);
                assert_eq!(before.schedule, after.schedule);
                assert_ne!(before.completed, after.completed);
            } else {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn unknown_habit_is_ignored() {
        let original = HabitStore::new(seed::daily_habits());
        assert_eq!(original.toggled("does-not-exist"), original);

        let mut tracker = Tracker::seeded();
        let before = tracker.snapshot();
        assert_eq!(tracker.toggle_habit("does-not-exist"), None);
        assert_eq!(tracker.snapshot(), before);
    }

    #[test]
    fn toggles_never_reorder_habits() {
        let mut tracker = Tracker::seeded();
        let order = ids(&tracker.snapshot().habits);
        for id in ["cert", "reading", "hydrate", "cert", "missing", "course", "reading"] {
            tracker.toggle_habit(id);
            assert_eq!(ids(&tracker.snapshot().habits), order);
        }
    }

    #[test]
    fn toggling_day_twice_restores_membership() {
        let original = seed::productive_days();
        for day in [-3, 0, 1, 4, 12, 29, 30, 31, 1_000] {
            let once = original.toggled(day);
            assert_ne!(once.contains(day), original.contains(day));
            assert_eq!(once.len().abs_diff(original.len()), 1);
            assert_eq!(once.toggled(day), original);
        }
    }

    #[test]
    fn seed_scenario() {
        let mut tracker = Tracker::seeded();
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.completion_rate(), 50);
        assert_eq!(snapshot.days.to_vec(), vec![4, 12, 18, 24]);

        assert!(!tracker.toggle_day(4));
        assert_eq!(tracker.snapshot().days.to_vec(), vec![12, 18, 24]);

        assert!(tracker.toggle_day(4));
        assert_eq!(tracker.snapshot().days.to_vec(), vec![4, 12, 18, 24]);
    }

    #[test]
    fn clearing_every_seeded_day_empties_the_set() {
        let mut tracker = Tracker::seeded();
        for day in [4, 12, 18, 24] {
            assert!(!tracker.toggle_day(day));
        }
        assert!(tracker.snapshot().days.is_empty());

        assert!(tracker.toggle_day(30));
        assert!(!tracker.snapshot().days.is_empty());
    }

    #[test]
    fn toggle_habit_reports_new_flag_and_rate() {
        let mut tracker = Tracker::seeded();
        assert_eq!(tracker.toggle_habit("course"), Some(true));
        assert_eq!(tracker.snapshot().completion_rate(), 75);
        assert_eq!(tracker.toggle_habit("reading"), Some(false));
        assert_eq!(tracker.snapshot().completion_rate(), 50);
    }

    #[test]
    fn old_snapshot_is_not_affected_by_toggles() {
        let mut tracker = Tracker::seeded();
        let before = tracker.snapshot();

        tracker.toggle_habit("reading");
        tracker.toggle_day(7);

        assert_eq!(before.habits.get("reading").map(|h| h.completed), Some(true));
        assert!(!before.days.contains(7));
        assert_eq!(before.completion_rate(), 50);
        assert_ne!(tracker.snapshot(), before);
    }
}
