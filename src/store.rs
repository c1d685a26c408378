//! The task store: the in-memory task sequence and its mutation operations

use chrono::NaiveDate;

use crate::color::TaskColor;
use crate::task::{Task, TaskId, TaskKey};
use crate::traits::TaskStorage;

/// The single source of truth for tasks.
///
/// The store owns an ordered task sequence (insertion order is the canonical list order) and a
/// storage backend. Every mutating operation writes the whole sequence back to storage before it
/// returns; storage is never read again until the next [`TaskStore::load`].
///
/// All operations are synchronous and run to completion: this crate assumes a single-threaded,
/// event-driven caller.
#[derive(Debug)]
pub struct TaskStore<S: TaskStorage> {
    tasks: Vec<Task>,
    storage: S,
}

impl<S: TaskStorage> TaskStore<S> {
    /// Initialize a store from whatever the storage backend holds.
    ///
    /// A failing load (e.g. corrupted content) is not fatal: the store starts empty and the bad
    /// content will be overwritten on the next save.
    pub fn load(storage: S) -> Self {
        let tasks = match storage.load() {
            Ok(tasks) => tasks,
            Err(err) => {
                log::warn!("Unable to load saved tasks: {}. Starting with an empty list", err);
                Vec::new()
            },
        };
        Self { tasks, storage }
    }

    /// Validate and append a new task.
    ///
    /// Returns the id of the created task, or `None` when the input is invalid (blank text or a
    /// zero duration), in which case the store is left unchanged.
    pub fn add_task(&mut self, text: &str, date: NaiveDate, duration: u32, color: TaskColor) -> Option<TaskId> {
        let task = match Task::new(text, date, duration, color) {
            Some(task) => task,
            None => {
                log::debug!("Rejecting invalid task input (text: {:?}, duration: {})", text, duration);
                return None;
            },
        };
        let id = task.id().cloned(/* freshly created tasks always have an id */);
        self.tasks.push(task);
        self.persist();
        id
    }

    /// Flip the completion flag of the designated task.
    /// Returns whether a task matched; a lookup miss is a no-op, not an error.
    pub fn toggle_task(&mut self, key: &TaskKey) -> bool {
        match self.position_of(key) {
            None => false,
            Some(position) => {
                self.tasks[position].toggle_completed();
                self.persist();
                true
            },
        }
    }

    /// Remove the designated task.
    /// Returns whether a task matched; a lookup miss is a no-op, not an error.
    pub fn delete_task(&mut self, key: &TaskKey) -> bool {
        match self.position_of(key) {
            None => false,
            Some(position) => {
                self.tasks.remove(position);
                self.persist();
                true
            },
        }
    }

    /// Remove every completed task, preserving the relative order of the rest.
    /// Returns how many tasks were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.completed() == false);
        self.persist();
        before - self.tasks.len()
    }

    /// Count of tasks not completed yet
    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed() == false).count()
    }

    /// The whole task sequence, in canonical (insertion) order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The tasks scheduled on a given day, in store order
    pub fn tasks_on(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.date() == date).collect()
    }

    /// Locate a task by key. Legacy records without an id match positional keys (see [`TaskKey`])
    fn position_of(&self, key: &TaskKey) -> Option<usize> {
        self.tasks.iter()
            .enumerate()
            .find(|(position, task)| task.matches(key, *position))
            .map(|(position, _)| position)
    }

    /// Mirror the current sequence to storage.
    /// A failing save is logged and otherwise ignored, so the in-memory state stays usable.
    fn persist(&mut self) {
        if let Err(err) = self.storage.save(&self.tasks) {
            log::warn!("Unable to save tasks: {}", err);
        }
    }
}
