//! Streak calculation for daily habits
//!
//! This module is the pure logic core of the tracker: it mutates a single
//! habit's completion-date set and keeps the cached streak counter in step.
//! No I/O happens here; "today" and "yesterday" are always supplied by the
//! caller so the calculations stay deterministic and testable.
//!
//! The streak counter is maintained through two mechanisms that agree
//! wherever they overlap:
//! - a cheap additive update when today is marked done (continue or start a
//!   streak), and
//! - a full recomputation from the date set when today's completion is
//!   revoked, since the remaining dates alone must determine the streak.
//!
//! A third rule, the daily rollover, decays streaks for habits that were not
//! completed yesterday. It runs at most once per calendar day, gated by the
//! store's last-check marker.

use chrono::{Duration, NaiveDate};

use crate::domain::Habit;

/// Toggle today's completion for a habit and update its streak
///
/// If today is already marked, the mark is removed and the streak is
/// recomputed from the remaining dates (undo). Otherwise today is added and
/// the streak either continues from yesterday or starts over at 1. Exactly
/// one entry, today's, is added or removed; no other date is touched.
pub fn toggle_completion(habit: &mut Habit, today: NaiveDate, yesterday: NaiveDate) {
    if habit.completed_dates.remove(&today) {
        // Undo: the streak must reflect only the remaining dates, not
        // merely decrement.
        habit.current_streak = recalculate(habit, today);
    } else {
        habit.completed_dates.insert(today);

        if habit.completed_dates.contains(&yesterday) {
            habit.current_streak += 1;
        } else {
            habit.current_streak = 1;
        }
    }
}

/// Recompute a habit's streak from scratch
///
/// Walks backward through the completed dates, excluding today itself
/// (recomputation only happens when today's completion is being revoked).
/// Starting from an anchor of today, each candidate date extends the streak
/// only if it is exactly one calendar day before the anchor; the first gap
/// stops the walk. Only the trailing run counts - older runs beyond a gap
/// contribute nothing.
pub fn recalculate(habit: &Habit, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut anchor = today;

    for &date in habit.completed_dates.iter().rev() {
        if date == today {
            continue;
        }

        if date == anchor - Duration::days(1) {
            streak += 1;
            anchor = date;
        } else {
            break;
        }
    }

    streak
}

/// Apply the once-daily rollover decay to a habit
///
/// A streak is alive only if yesterday was completed: if it wasn't and the
/// habit still carries a positive streak, the streak resets to zero going
/// into the new day. This is independent of `recalculate` and does not wait
/// for a toggle to notice the gap.
pub fn daily_rollover(habit: &mut Habit, yesterday: NaiveDate) {
    if !habit.completed_dates.contains(&yesterday) && habit.current_streak > 0 {
        habit.current_streak = 0;
    }
}
