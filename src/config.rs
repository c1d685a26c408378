//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The application name, used to build the default storage path (`~/.config/<APP_NAME>/tasks.json`).
/// Feel free to override it when initing this library.
pub static APP_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("dayboard".to_string())));

/// The file name tasks are saved under in the app folder
pub static STORAGE_FILE_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("tasks.json".to_string())));
