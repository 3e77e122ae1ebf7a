//! Basic unit tests to verify core functionality through the public API

use chrono::NaiveDate;
use daily_habits::*;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_store_creation() {
    let store = HabitStore::open(MemoryStore::new());
    assert!(store.is_ok());
}

#[test]
fn test_sqlite_store_creation() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let storage = SqliteStore::new(dir.path().join("habits.db"));
    assert!(storage.is_ok());
}

#[test]
fn test_add_and_list_habits() {
    let mut store = HabitStore::open(MemoryStore::new()).unwrap();

    let id = store.add_habit("Morning Run").unwrap().expect("habit added");
    assert_eq!(store.habits().len(), 1);
    assert_eq!(store.habits()[0].id, id);
    assert_eq!(store.habits()[0].name, "Morning Run");
}

#[test]
fn test_streak_engine_through_public_api() {
    let today = date("2024-01-15");
    let yesterday = date("2024-01-14");
    let mut store = HabitStore::open(MemoryStore::new()).unwrap();
    let id = store.add_habit("Read").unwrap().unwrap();

    store.toggle_habit(id, today, yesterday).unwrap();
    assert_eq!(store.habits()[0].current_streak, 1);

    store.toggle_habit(id, today, yesterday).unwrap();
    assert_eq!(store.habits()[0].current_streak, 0);
    assert!(!store.habits()[0].completed_on(today));
}

#[test]
fn test_stats_shape() {
    let today = date("2024-01-15");
    let store = HabitStore::open(MemoryStore::new()).unwrap();

    let stats = store.stats(today);
    assert_eq!(stats.total_habits, 0);
    assert_eq!(stats.completed_today, 0);
    assert_eq!(stats.max_streak, 0);
}

#[test]
fn test_local_date_helpers() {
    let today = domain::dates::today();
    let yesterday = domain::dates::yesterday_of(today);
    assert_eq!((today - yesterday).num_days(), 1);
}
