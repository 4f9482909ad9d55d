//! Consecutive-day logging streak.
//!
//! The tracker is derived state over the entry stream: it holds nothing
//! but the last known logging day and the two counters, and advances once
//! per entry-create event (never on edit or delete).
//!
//! Transitions are keyed off wall-clock "today" at save time, not the
//! entry's own timestamp, so backdated entries cannot retroactively
//! corrupt the streak.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The user's logging streak.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserStreak {
    /// Consecutive calendar days with at least one entry, ending today or
    /// yesterday.
    pub current_streak: u32,
    /// Best streak ever reached.
    pub longest_streak: u32,
    /// The last day an entry was logged, if any.
    pub last_entry_date: Option<NaiveDate>,
}

impl UserStreak {
    /// Korean encouragement line for the streak card.
    pub fn encouragement(&self) -> &'static str {
        match self.current_streak {
            0 => "새로운 시작이에요!",
            1..=2 => "좋은 시작이에요!",
            3..=6 => "멋진 습관이 되고 있어요!",
            7..=13 => "정말 훌륭해요!",
            14..=29 => "놀라운 꾸준함이에요!",
            _ => "감정 마스터가 되셨네요!",
        }
    }

    /// Gradient class for the flame badge, warming up with the streak.
    pub fn flame_gradient(&self) -> &'static str {
        match self.current_streak {
            0 => "from-gray-400 to-gray-500",
            1..=2 => "from-green-400 to-green-500",
            3..=6 => "from-blue-400 to-blue-500",
            7..=13 => "from-purple-400 to-purple-500",
            14..=29 => "from-pink-400 to-pink-500",
            _ => "from-yellow-400 to-orange-500",
        }
    }
}

/// State machine over [`UserStreak`].
#[derive(Debug, Default)]
pub struct StreakTracker {
    streak: UserStreak,
}

impl StreakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the streak for an entry saved on `today`.
    ///
    /// Logging several times on the same day is a true no-op; the streak
    /// never inflates. A gap of two or more days (or a clock that jumped
    /// backwards) resets the current run; the longest streak is preserved.
    pub fn on_entry_created(&mut self, today: NaiveDate) -> &UserStreak {
        let streak = &mut self.streak;
        match streak.last_entry_date {
            None => {
                streak.current_streak = 1;
                streak.longest_streak = streak.longest_streak.max(1);
                streak.last_entry_date = Some(today);
            }
            Some(last) if last == today => {}
            Some(last) if last.succ_opt() == Some(today) => {
                streak.current_streak += 1;
                streak.longest_streak = streak.longest_streak.max(streak.current_streak);
                streak.last_entry_date = Some(today);
            }
            Some(_) => {
                streak.current_streak = 1;
                streak.last_entry_date = Some(today);
            }
        }
        &self.streak
    }

    pub fn streak(&self) -> &UserStreak {
        &self.streak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, n).unwrap()
    }

    #[test]
    fn consecutive_days_accumulate() {
        let mut tracker = StreakTracker::new();
        for n in 1..=5 {
            tracker.on_entry_created(day(n));
        }
        assert_eq!(tracker.streak().current_streak, 5);
        assert_eq!(tracker.streak().longest_streak, 5);
        assert_eq!(tracker.streak().last_entry_date, Some(day(5)));
    }

    #[test]
    fn same_day_logging_is_a_no_op() {
        let mut tracker = StreakTracker::new();
        tracker.on_entry_created(day(1));
        tracker.on_entry_created(day(1));
        tracker.on_entry_created(day(1));
        assert_eq!(tracker.streak().current_streak, 1);
        assert_eq!(tracker.streak().longest_streak, 1);
    }

    #[test]
    fn a_gap_resets_but_keeps_the_record() {
        let mut tracker = StreakTracker::new();
        tracker.on_entry_created(day(1));
        tracker.on_entry_created(day(2));
        tracker.on_entry_created(day(3));

        // Two-day gap.
        tracker.on_entry_created(day(5));
        assert_eq!(tracker.streak().current_streak, 1);
        assert_eq!(tracker.streak().longest_streak, 3);

        tracker.on_entry_created(day(6));
        assert_eq!(tracker.streak().current_streak, 2);
        assert_eq!(tracker.streak().longest_streak, 3);
    }

    #[test]
    fn an_earlier_day_also_resets() {
        let mut tracker = StreakTracker::new();
        tracker.on_entry_created(day(10));
        tracker.on_entry_created(day(11));

        // Clock moved backwards relative to the last logged day.
        tracker.on_entry_created(day(8));
        assert_eq!(tracker.streak().current_streak, 1);
        assert_eq!(tracker.streak().longest_streak, 2);
        assert_eq!(tracker.streak().last_entry_date, Some(day(8)));
    }

    #[test]
    fn encouragement_tiers() {
        let mut streak = UserStreak::default();
        assert_eq!(streak.encouragement(), "새로운 시작이에요!");
        streak.current_streak = 1;
        assert_eq!(streak.encouragement(), "좋은 시작이에요!");
        streak.current_streak = 30;
        assert_eq!(streak.encouragement(), "감정 마스터가 되셨네요!");
        assert_eq!(streak.flame_gradient(), "from-yellow-400 to-orange-500");
    }
}
