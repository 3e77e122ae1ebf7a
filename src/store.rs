//! HabitStore: owns the habit collection and its persistence round-trip
//!
//! The store is the single reader and writer of the persisted document. It
//! loads the collection once at construction, applies mutations in place,
//! and writes the whole collection back after every mutating operation.
//! Operations that change nothing (unknown id, blank name, a same-day
//! rollover check) skip the write entirely.
//!
//! Failure handling is deliberately soft: a missing or malformed persisted
//! payload initializes an empty collection and is never surfaced to the
//! caller. Only real storage-layer I/O errors propagate.

use chrono::{Duration, NaiveDate, Utc};

use crate::domain::{streak, Habit, HabitId, Stats};
use crate::storage::{KeyValueStore, StorageError};

/// Key under which the serialized habit collection is persisted
const HABITS_KEY: &str = "daily-habits";

/// Key under which the last rollover-check date is persisted
const LAST_CHECK_KEY: &str = "last-check-date";

/// The habit collection and its persistence boundary
///
/// Single-threaded and synchronous: callers invoke operations one at a time,
/// each runs to completion, and every mutation is persisted before control
/// returns. "Today" and "yesterday" are injected as host-local calendar
/// dates; the store never reads the wall clock for calendar logic.
pub struct HabitStore<S: KeyValueStore> {
    storage: S,
    habits: Vec<Habit>,
}

impl<S: KeyValueStore> HabitStore<S> {
    /// Open a habit store, loading any persisted collection
    ///
    /// A missing key or a payload that fails to parse is treated as a first
    /// run: the store starts with an empty collection. No caller is designed
    /// to handle a load failure, so none is raised.
    pub fn open(storage: S) -> Result<Self, StorageError> {
        let habits = match storage.get(HABITS_KEY)? {
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(habits) => habits,
                Err(e) => {
                    tracing::warn!("Discarding malformed habit payload: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        tracing::info!("Habit store opened with {} habit(s)", habits.len());

        Ok(Self { storage, habits })
    }

    /// Serialize the collection and write it back to storage
    fn save(&mut self) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&self.habits)?;
        self.storage.set(HABITS_KEY, &payload)
    }

    /// Run the once-daily rollover pass if the calendar day has changed
    ///
    /// Reads the persisted last-check marker; when it differs from `today`
    /// (or is absent), every habit whose streak is still positive but which
    /// was not completed yesterday has its streak reset, the marker is
    /// updated, and the collection is persisted. Calling this again on the
    /// same day is a no-op.
    pub fn check_new_day(&mut self, today: NaiveDate) -> Result<(), StorageError> {
        let today_str = today.to_string();
        if self.storage.get(LAST_CHECK_KEY)?.as_deref() == Some(today_str.as_str()) {
            return Ok(());
        }

        let yesterday = today - Duration::days(1);
        for habit in &mut self.habits {
            streak::daily_rollover(habit, yesterday);
        }

        tracing::debug!("Rollover check ran for {}", today_str);

        self.storage.set(LAST_CHECK_KEY, &today_str)?;
        self.save()
    }

    /// Add a habit with the given name
    ///
    /// The name is trimmed; an empty or whitespace-only name is silently
    /// rejected and `Ok(None)` is returned. Otherwise the new habit's id is
    /// returned after the collection has been persisted.
    pub fn add_habit(&mut self, name: &str) -> Result<Option<HabitId>, StorageError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let id = self.next_id();
        self.habits.push(Habit::new(id, name.to_string()));
        self.save()?;

        tracing::debug!("Added habit: {} ({})", name, id);
        Ok(Some(id))
    }

    /// Toggle today's completion for the habit with the given id
    ///
    /// An unknown id is silently a no-op. Otherwise the streak engine
    /// applies the toggle and the collection is persisted.
    pub fn toggle_habit(
        &mut self,
        id: HabitId,
        today: NaiveDate,
        yesterday: NaiveDate,
    ) -> Result<(), StorageError> {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            return Ok(());
        };

        streak::toggle_completion(habit, today, yesterday);
        tracing::debug!(
            "Toggled habit {} for {}, streak now {}",
            id,
            today,
            habit.current_streak
        );

        self.save()
    }

    /// Delete the habit with the given id
    ///
    /// Idempotent: an absent id is a no-op and storage is not rewritten.
    pub fn delete_habit(&mut self, id: HabitId) -> Result<(), StorageError> {
        let Some(index) = self.habits.iter().position(|h| h.id == id) else {
            return Ok(());
        };

        let removed = self.habits.remove(index);
        tracing::debug!("Deleted habit: {} ({})", removed.name, id);

        self.save()
    }

    /// Derive summary statistics for the collection
    pub fn stats(&self, today: NaiveDate) -> Stats {
        Stats {
            completed_today: self.habits.iter().filter(|h| h.completed_on(today)).count(),
            total_habits: self.habits.len(),
            max_streak: self
                .habits
                .iter()
                .map(|h| h.current_streak)
                .max()
                .unwrap_or(0),
        }
    }

    /// The habits in insertion order (display order)
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Get a reference to the storage backend (useful for testing)
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Next unique habit id
    ///
    /// Creation timestamp in milliseconds, bumped past the largest existing
    /// id so rapid consecutive adds stay unique and monotonic.
    fn next_id(&self) -> HabitId {
        let max_existing = self.habits.iter().map(|h| h.id.0).max().unwrap_or(0);
        HabitId(Utc::now().timestamp_millis().max(max_existing + 1))
    }
}
