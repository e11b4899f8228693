//! Injected stand-in for the browser history API.
//!
//! The controller never touches ambient global state; it reads and writes the
//! current fragment through this trait. [`MemoryHistory`] backs tests and
//! headless embedding.

use std::sync::Mutex;

use crate::fragment::HOME_FRAGMENT;

pub trait History: Send + Sync {
    /// The fragment of the currently visible screen.
    fn current_fragment(&self) -> String;

    /// Make `fragment` the current one, pushing an entry onto the stack.
    fn navigate(&self, fragment: &str);
}

/// In-memory fragment stack with browser-like back navigation.
pub struct MemoryHistory {
    entries: Mutex<Vec<String>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(vec![HOME_FRAGMENT.to_string()]),
        }
    }

    /// Pop back to the previous fragment. The root entry is never popped.
    pub fn back(&self) -> String {
        let mut entries = self.entries.lock().unwrap();
        if entries.len() > 1 {
            entries.pop();
        }
        entries.last().cloned().unwrap_or_else(|| HOME_FRAGMENT.to_string())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MemoryHistory {
    fn current_fragment(&self) -> String {
        self.entries
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_else(|| HOME_FRAGMENT.to_string())
    }

    fn navigate(&self, fragment: &str) {
        let mut entries = self.entries.lock().unwrap();
        // Navigating to the fragment already shown is a no-op, like a hash
        // change to the identical hash
        if entries.last().map(String::as_str) != Some(fragment) {
            entries.push(fragment.to_string());
        }
    }
}
