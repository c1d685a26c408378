//! The planner session: one store, one calendar cursor, one day filter

use chrono::{Local, NaiveDate};

use crate::calendar::{MonthCursor, MonthGrid};
use crate::color::TaskColor;
use crate::store::TaskStore;
use crate::task::{TaskId, TaskKey};
use crate::traits::TaskStorage;
use crate::view::{self, TaskListView};

/// A planning session, instantiated once per application run.
///
/// This binds the [`TaskStore`], the displayed-month cursor and the selected day filter together,
/// and exposes exactly the commands a UI surface wires its widgets to: add / toggle / delete /
/// clear-completed on the task side, previous / next month and day selection on the calendar
/// side. Each command leaves both view models ([`Planner::task_list`] and [`Planner::month_grid`])
/// consistent with the store; callers re-render both after any command.
pub struct Planner<S: TaskStorage> {
    store: TaskStore<S>,
    cursor: MonthCursor,
    selected_day: Option<NaiveDate>,
    today: NaiveDate,
}

impl<S: TaskStorage> Planner<S> {
    /// Start a session: load saved tasks and point the calendar at the real current month
    pub fn new(storage: S) -> Self {
        Self::starting_on(storage, Local::now().date_naive())
    }

    /// Same as [`Planner::new`], with an explicit "today".
    /// This is what tests use to stay independent of the wall clock.
    pub fn starting_on(storage: S, today: NaiveDate) -> Self {
        Self {
            store: TaskStore::load(storage),
            cursor: MonthCursor::at(today),
            selected_day: None,
            today,
        }
    }

    /// Direct read access to the underlying store
    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    //
    // Task commands
    //

    /// See [`TaskStore::add_task`]
    pub fn add_task(&mut self, text: &str, date: NaiveDate, duration: u32, color: TaskColor) -> Option<TaskId> {
        self.store.add_task(text, date, duration, color)
    }

    /// See [`TaskStore::toggle_task`]
    pub fn toggle_task(&mut self, key: &TaskKey) -> bool {
        self.store.toggle_task(key)
    }

    /// See [`TaskStore::delete_task`]
    pub fn delete_task(&mut self, key: &TaskKey) -> bool {
        self.store.delete_task(key)
    }

    /// See [`TaskStore::clear_completed`]
    pub fn clear_completed(&mut self) -> usize {
        self.store.clear_completed()
    }

    //
    // Calendar commands
    //

    /// Display the previous month. Unbounded; the day filter is kept as-is.
    pub fn prev_month(&mut self) {
        self.cursor.prev_month();
    }

    /// Display the next month. Unbounded; the day filter is kept as-is.
    pub fn next_month(&mut self) {
        self.cursor.next_month();
    }

    /// Select a day: it becomes the sole selected calendar cell, and the task list is filtered
    /// to that day until the selection changes or is cleared.
    pub fn select_day(&mut self, date: NaiveDate) {
        self.selected_day = Some(date);
    }

    /// Drop the day selection: the task list shows the whole store again
    pub fn clear_selection(&mut self) {
        self.selected_day = None;
    }

    //
    // Read-only outputs
    //

    /// The task list view model, honoring the current day filter
    pub fn task_list(&self) -> TaskListView {
        view::task_list(self.store.tasks(), self.selected_day)
    }

    /// The calendar view model for the displayed month
    pub fn month_grid(&self) -> MonthGrid {
        self.cursor.grid(self.today, self.selected_day, self.store.tasks())
    }

    /// The displayed month, as a label (e.g. "March 2024")
    pub fn month_label(&self) -> String {
        self.cursor.label()
    }

    /// Live counter of incomplete tasks
    pub fn remaining_count(&self) -> usize {
        self.store.remaining_count()
    }

    /// The currently selected day, if any
    pub fn selected_day(&self) -> Option<NaiveDate> {
        self.selected_day
    }
}
