//! Core types used throughout the domain layer
//!
//! This module defines the HabitId wrapper and the Stats record that
//! summarizes the whole collection for display.

use serde::{Deserialize, Serialize};

/// Unique identifier for a habit
///
/// This is a wrapper around an integer to provide type safety - you can't
/// accidentally pass a raw count where a habit ID is expected. Ids are
/// assigned at creation from the creation timestamp in milliseconds and are
/// monotonically increasing. On the wire this serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HabitId(pub i64);

impl HabitId {
    /// Get the raw integer value of this id
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derived summary statistics for the whole habit collection
///
/// These are recomputed on demand from the current collection state and are
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// How many habits have been marked done today
    pub completed_today: usize,
    /// Total number of habits in the collection
    pub total_habits: usize,
    /// The longest current streak across all habits (0 when empty)
    pub max_streak: u32,
}
