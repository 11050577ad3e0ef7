//! Converter warnings with colored terminal output.
//!
//! Each unique message is printed once per process (or until
//! [`clear_warnings`] is called), so a document that trips the same
//! condition a thousand times produces a single line.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Messages already printed, keyed by `[component] message`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock leaves the set intact.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Record a warning and print it unless the same message was already seen.
///
/// # Example
/// ```ignore
/// warn_once("Renderer", "could not compile whitespace pattern");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let first_time = warned().get_or_insert_with(HashSet::new).insert(key);

    if first_time {
        let line = format!("[scrawl {component}] ⚠ {message}");
        eprintln!("{}", line.yellow());
    }
}

/// Forget every recorded warning (call between unrelated documents).
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}

/// Whether a warning with this component and message has been recorded.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&format!("[{component}] {message}")))
}
