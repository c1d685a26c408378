//! The task list view model

use chrono::NaiveDate;
use csscolorparser::Color;

use crate::task::{Task, TaskKey};

/// The currently visible subset of the store, ready to render.
///
/// Like the calendar grid, this is rebuilt from scratch on every render call; no incremental
/// diffing, which is fine for a local UI holding at most a few hundred tasks.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskListView {
    /// The day the list is filtered to, if any
    pub filter: Option<NaiveDate>,
    /// Visible entries, in store order
    pub entries: Vec<TaskEntry>,
    /// Count of incomplete tasks in the whole store (not only the visible subset)
    pub remaining: usize,
}

/// One row of the task list
#[derive(Clone, Debug, PartialEq)]
pub struct TaskEntry {
    /// What to pass back to toggle or delete this task
    pub key: TaskKey,
    pub text: String,
    pub completed: bool,
    /// Short month + day label (e.g. "Mar 15")
    pub date_label: String,
    pub duration_minutes: u32,
    /// The left-accent color matching the task's color tag
    pub accent: Color,
}

/// Build the list view model from the store sequence.
///
/// With a filter, only tasks scheduled exactly on that day are shown; without one, the whole
/// sequence is. Order is always store order.
pub fn task_list(tasks: &[Task], filter: Option<NaiveDate>) -> TaskListView {
    let entries = tasks.iter()
        .enumerate()
        .filter(|(_, task)| match filter {
            Some(day) => task.date() == day,
            None => true,
        })
        .map(|(position, task)| TaskEntry {
            key: task.key_at(position),
            text: task.text().to_string(),
            completed: task.completed(),
            date_label: task.date().format("%b %-d").to_string(),
            duration_minutes: task.duration(),
            accent: task.color().indicator(),
        })
        .collect();

    TaskListView {
        filter,
        entries,
        remaining: tasks.iter().filter(|task| task.completed() == false).count(),
    }
}
