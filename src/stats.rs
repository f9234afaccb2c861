use crate::models::Habit;

/// Percentage of completed habits, rounded half up.
///
/// An empty list has nothing to complete and reports 0.
pub fn completion_rate(habits: &[Habit]) -> u8 {
    let total = habits.len();
    if total == 0 {
        return 0;
    }

    let done = habits.iter().filter(|habit| habit.completed).count();
    // integer form of floor(100 * done / total + 0.5)
    ((done * 200 + total) / (total * 2)) as u8
}
