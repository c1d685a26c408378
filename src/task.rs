//! To-do tasks and the keys used to look them up

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

use crate::color::TaskColor;

/// An opaque, unique task identifier, assigned at creation time.
///
/// Stable for the task's lifetime; this is the sole lookup key for toggling and deleting
/// (see [`TaskKey`] for the legacy exception).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a fresh random TaskId
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TaskId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// The key a caller uses to designate one task in the store.
///
/// Every task created by this crate has an id. Data persisted by older versions may lack one;
/// such tasks remain addressable by their position in the store, so that legacy records are not
/// orphaned. A positional key never matches a task that does have an id.
#[derive(Clone, Debug, PartialEq)]
pub enum TaskKey {
    Id(TaskId),
    /// Position in the store sequence, only valid for records without an id
    Index(usize),
}

/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// `None` only for records persisted before ids existed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<TaskId>,

    /// The user-entered label, trimmed, never empty
    text: String,

    completed: bool,

    /// The calendar day this task is scheduled on (no time component)
    date: NaiveDate,

    /// Planned duration, in minutes, always >= 1
    duration: u32,

    #[serde(default)]
    color: TaskColor,
}

impl Task {
    /// Create a brand new task with a fresh unique id.
    ///
    /// Returns `None` when the input is invalid: blank text (after trimming) or a zero duration.
    /// An invalid task is never constructed.
    pub fn new(text: &str, date: NaiveDate, duration: u32, color: TaskColor) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() || duration == 0 {
            return None;
        }
        Some(Self {
            id: Some(TaskId::random()),
            text: text.to_string(),
            completed: false,
            date,
            duration,
            color,
        })
    }

    pub fn id(&self) -> Option<&TaskId> { self.id.as_ref()  }
    pub fn text(&self) -> &str          { &self.text        }
    pub fn completed(&self) -> bool     { self.completed    }
    pub fn date(&self) -> NaiveDate     { self.date         }
    pub fn duration(&self) -> u32       { self.duration     }
    pub fn color(&self) -> TaskColor    { self.color        }

    /// The key this task is addressable by, given its current position in the store
    pub fn key_at(&self, position: usize) -> TaskKey {
        match &self.id {
            Some(id) => TaskKey::Id(id.clone()),
            None => TaskKey::Index(position),
        }
    }

    /// Whether `key` designates this task, sitting at `position` in the store
    pub(crate) fn matches(&self, key: &TaskKey, position: usize) -> bool {
        match key {
            TaskKey::Id(id) => self.id.as_ref() == Some(id),
            TaskKey::Index(index) => self.id.is_none() && *index == position,
        }
    }

    pub(crate) fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn creation_trims_and_validates() {
        let task = Task::new("  buy milk  ", some_day(), 30, TaskColor::Blue).unwrap();
        assert_eq!(task.text(), "buy milk");
        assert_eq!(task.completed(), false);
        assert!(task.id().is_some());

        assert!(Task::new("   ", some_day(), 30, TaskColor::Blue).is_none());
        assert!(Task::new("read", some_day(), 0, TaskColor::Blue).is_none());
    }

    #[test]
    fn legacy_record_deserializes_without_id() {
        let json = r#"{"text": "water plants", "completed": false, "date": "2024-03-15", "duration": 10}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id(), None);
        assert_eq!(task.color(), TaskColor::Neutral);
        assert_eq!(task.key_at(4), TaskKey::Index(4));

        // and a positional key only matches at the right position
        assert!(task.matches(&TaskKey::Index(4), 4));
        assert!(task.matches(&TaskKey::Index(4), 3) == false);
    }
}
