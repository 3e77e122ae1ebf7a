//! Domain module containing core business logic and data types
//!
//! This module defines the Habit entity, its identifier and stats types, and
//! the streak engine that governs how completion toggles and the daily
//! rollover mutate a habit's streak counter.

pub mod dates;
pub mod habit;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use types::*;
