//! Public library interface for the daily-habits tracker core
//!
//! This crate implements the logic behind a minimal habit tracker: a
//! [`HabitStore`] owning a collection of named habits, and a streak engine
//! ([`domain::streak`]) governing how marking a day complete, undoing that
//! mark, and the once-daily rollover mutate each habit's consecutive-day
//! streak.
//!
//! Rendering, event wiring, and everything else user-facing is an external
//! presentation layer: it constructs a store over a [`storage::KeyValueStore`]
//! backend, calls `check_new_day` at startup, and re-reads `habits()` and
//! `stats()` after each mutating call. Calendar dates are always injected by
//! the caller ([`domain::dates`] has helpers for resolving the host-local
//! day), which keeps every streak rule testable with fixed dates.

pub mod domain;
pub mod storage;
mod store;

// Re-export the main public types
pub use domain::{Habit, HabitId, Stats};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore, StorageError};
pub use store::HabitStore;
