use std::error::Error;

use crate::Task;

/// The persistence contract the task store relies on.
///
/// Any key-value-ish backend satisfies it (a file, browser local storage behind FFI, an embedded
/// DB...). The store never interprets a failure: a failing `load` means "start with an empty
/// list", and a failing `save` is logged and ignored so the in-memory state stays usable.
pub trait TaskStorage {
    /// Returns the previously saved task sequence, in saved order.
    /// A missing backing entry is not an error: it yields an empty sequence.
    fn load(&self) -> Result<Vec<Task>, Box<dyn Error>>;

    /// Overwrites the backing entry with the given task sequence
    fn save(&mut self, tasks: &[Task]) -> Result<(), Box<dyn Error>>;
}
