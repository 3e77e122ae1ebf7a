//! Habit entity and related functionality
//!
//! This module defines the core Habit struct that represents something the
//! user wants to do every day, together with its completion history and the
//! cached streak value.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::HabitId;

/// A habit the user wants to complete every day
///
/// This is the core entity in the system. Each habit carries its full
/// completion history as a set of calendar dates plus a cached streak
/// counter maintained by the streak engine.
///
/// The struct is the wire format: the collection is persisted as a JSON
/// array of these records with camelCase field names, where each completed
/// date appears as a `"YYYY-MM-DD"` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier, assigned at creation and never changed
    pub id: HabitId,
    /// Display name (e.g., "Morning Run"), trimmed at creation
    pub name: String,
    /// Every calendar day this habit was marked done, in the host's local
    /// timezone. The set type guarantees no duplicate dates.
    pub completed_dates: BTreeSet<NaiveDate>,
    /// Cached count of consecutive completed days ending at the most recent
    /// completion on or before today. Maintained by the streak engine; must
    /// never drift from what the engine would compute from
    /// `completed_dates`.
    pub current_streak: u32,
}

impl Habit {
    /// Create a new habit with an empty history
    ///
    /// The name is expected to be already trimmed and non-empty; that
    /// validation lives in the store, which silently rejects blank names.
    pub fn new(id: HabitId, name: String) -> Self {
        Self {
            id,
            name,
            completed_dates: BTreeSet::new(),
            current_streak: 0,
        }
    }

    /// Check whether this habit was marked done on the given date
    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }
}
