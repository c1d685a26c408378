
use dayboard::cache::Cache;
use dayboard::store::TaskStore;
use dayboard::traits::TaskStorage;
use dayboard::TaskColor;
use dayboard::TaskKey;

use scenarii::{day, legacy_task, today};

/// Saving a task sequence and reloading it yields an equal sequence (ids, fields and order)
#[test]
fn persistence_round_trip() {
    let path = std::env::temp_dir().join("dayboard-round-trip-test.json");
    let _ = std::fs::remove_file(&path);

    let mut store = TaskStore::load(Cache::new(&path));
    store.add_task("alpha", today(), 30, TaskColor::Blue);
    store.add_task("beta", day(2024, 3, 16), 60, TaskColor::Yellow);
    store.add_task("gamma", today(), 5, TaskColor::Neutral);
    let key = store.tasks()[1].key_at(1);
    store.toggle_task(&key);

    let reloaded = TaskStore::load(Cache::new(&path));
    assert_eq!(store.tasks(), reloaded.tasks());

    let _ = std::fs::remove_file(&path);
}

/// A corrupted storage file means "no saved tasks", and is overwritten by the next save
#[test]
fn corrupted_storage_recovers_to_empty() {
    let path = std::env::temp_dir().join("dayboard-corrupted-storage-test.json");
    std::fs::write(&path, b"definitely not json").unwrap();

    let mut store = TaskStore::load(Cache::new(&path));
    assert_eq!(store.tasks().len(), 0);

    store.add_task("fresh start", today(), 30, TaskColor::Green);

    let reloaded = TaskStore::load(Cache::new(&path));
    assert_eq!(reloaded.tasks().len(), 1);
    assert_eq!(reloaded.tasks()[0].text(), "fresh start");

    let _ = std::fs::remove_file(&path);
}

/// After any sequence of adds, all task ids are pairwise distinct
#[test]
fn ids_are_unique() {
    let mut planner = scenarii::empty_planner();
    let mut ids = Vec::new();
    for n in 0u32..50 {
        let text = format!("task {}", n);
        ids.push(planner.add_task(&text, today(), n + 1, TaskColor::Blue).unwrap());
    }

    for (i, id) in ids.iter().enumerate() {
        for other in &ids[i + 1..] {
            assert_ne!(id, other);
        }
    }
}

/// Toggling a task twice returns it to its original state, all other fields untouched
#[test]
fn toggle_pair_is_idempotent() {
    let mut planner = scenarii::busy_planner();
    let before = planner.store().tasks().to_vec();
    let key = before[2].key_at(2);

    assert!(planner.toggle_task(&key));
    assert!(planner.store().tasks()[2].completed());
    assert!(planner.toggle_task(&key));

    assert_eq!(planner.store().tasks(), &before[..]);
}

/// Toggling or deleting an unknown id is a silent no-op
#[test]
fn lookup_miss_is_a_no_op() {
    let mut planner = scenarii::busy_planner();
    let before = planner.store().tasks().to_vec();

    let bogus = TaskKey::Id(dayboard::TaskId::from("no-such-task".to_string()));
    assert!(planner.toggle_task(&bogus) == false);
    assert!(planner.delete_task(&bogus) == false);
    assert_eq!(planner.store().tasks(), &before[..]);
}

/// clear_completed removes exactly the completed tasks, keeping the rest in order
#[test]
fn clear_completed_keeps_incomplete_tasks() {
    let mut planner = scenarii::busy_planner();
    let keys: Vec<TaskKey> = planner.store().tasks().iter()
        .enumerate()
        .map(|(position, task)| task.key_at(position))
        .collect();
    planner.toggle_task(&keys[0]);
    planner.toggle_task(&keys[2]);

    let expected_survivors: Vec<_> = planner.store().tasks().iter()
        .filter(|task| task.completed() == false)
        .cloned()
        .collect();

    assert_eq!(planner.clear_completed(), 2);

    assert_eq!(planner.store().tasks(), &expected_survivors[..]);
    assert!(planner.store().tasks().iter().all(|task| task.completed() == false));
}

/// remaining_count counts exactly the incomplete tasks
#[test]
fn remaining_count_matches() {
    let mut planner = scenarii::empty_planner();
    planner.add_task("A", today(), 10, TaskColor::Blue);
    let b = planner.add_task("B", today(), 10, TaskColor::Blue).unwrap();
    planner.add_task("C", today(), 10, TaskColor::Blue);

    planner.toggle_task(&TaskKey::Id(b));
    assert_eq!(planner.remaining_count(), 2);

    planner.clear_completed();
    assert_eq!(planner.remaining_count(), 2);
}

/// Invalid input creates nothing and leaves the store unchanged
#[test]
fn invalid_add_is_rejected() {
    let mut planner = scenarii::busy_planner();
    let before = planner.store().tasks().to_vec();

    assert!(planner.add_task("", today(), 30, TaskColor::Blue).is_none());
    assert!(planner.add_task("  \t ", today(), 30, TaskColor::Blue).is_none());
    assert!(planner.add_task("no time at all", today(), 0, TaskColor::Blue).is_none());

    assert_eq!(planner.store().tasks(), &before[..]);
}

/// Records persisted before ids existed can still be toggled and deleted by position
#[test]
fn legacy_records_are_addressable_by_position() {
    let saved = vec![
        legacy_task("pre-id record", today()),
        legacy_task("another old one", day(2024, 3, 16)),
    ];
    let mut planner = scenarii::planner_over(saved);

    assert!(planner.toggle_task(&TaskKey::Index(1)));
    assert!(planner.store().tasks()[1].completed());
    assert!(planner.store().tasks()[0].completed() == false);

    assert!(planner.delete_task(&TaskKey::Index(0)));
    assert_eq!(planner.store().tasks().len(), 1);
    assert_eq!(planner.store().tasks()[0].text(), "another old one");

    // a positional key never matches a task that has an id
    planner.add_task("modern task", today(), 30, TaskColor::Blue);
    assert!(planner.toggle_task(&TaskKey::Index(1)) == false);
}

/// A failing save does not poison the in-memory store
#[test]
fn unwritable_storage_keeps_memory_state() {
    struct BrokenStorage;
    impl TaskStorage for BrokenStorage {
        fn load(&self) -> Result<Vec<dayboard::Task>, Box<dyn std::error::Error>> {
            Ok(Vec::new())
        }
        fn save(&mut self, _tasks: &[dayboard::Task]) -> Result<(), Box<dyn std::error::Error>> {
            Err("disk full".into())
        }
    }

    let mut store = TaskStore::load(BrokenStorage);
    assert!(store.add_task("still works", today(), 30, TaskColor::Blue).is_some());
    assert_eq!(store.tasks().len(), 1);
}
