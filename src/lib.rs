//! This crate provides a small, fully local task planner.
//!
//! Tasks are dated, timed and color-tagged. They live in a [`TaskStore`], which is the single
//! source of truth and mirrors itself to a key-value storage backend (see the [`cache`] module)
//! after every mutation.
//!
//! Two view models can be derived from the store at any time:
//! * a task list (optionally filtered to a single day), built by the [`view`] module,
//! * a month calendar grid with per-day color indicators, built by the [`calendar`] module.
//!
//! A [`Planner`] ties a store, a calendar cursor and the current day filter together, and exposes
//! the commands a UI would wire its widgets to. \
//! There is no server and no async machinery: every operation is a synchronous transformation of
//! an in-memory sequence, persisted before it returns.

pub mod traits;

pub mod calendar;
pub use calendar::MonthCursor;
pub use calendar::MonthGrid;
mod task;
pub use task::Task;
pub use task::TaskId;
pub use task::TaskKey;
mod color;
pub use color::TaskColor;
pub mod store;
pub use store::TaskStore;
pub mod planner;
pub use planner::Planner;
pub mod view;

pub mod cache;

pub mod config;
pub mod utils;
