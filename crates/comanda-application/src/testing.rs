//! In-process collaborator doubles.
//!
//! Used by the crate's own tests and by headless hosts: a navigator holding
//! the fragment in memory and a surface that records what was mounted.

use crate::view::{Navigator, Surface};
use std::sync::Mutex;

/// A [`Navigator`] over an in-memory fragment.
///
/// Setting the fragment only records it; the host decides when to relay the
/// fragment-change signal back into the router, which is what a test wants
/// to observe anyway.
pub struct MemoryNavigator {
    fragment: Mutex<String>,
}

impl MemoryNavigator {
    pub fn new(fragment: &str) -> Self {
        Self {
            fragment: Mutex::new(fragment.to_string()),
        }
    }

    /// Convenience accessor for assertions.
    pub fn fragment_value(&self) -> String {
        self.fragment()
    }
}

impl Navigator for MemoryNavigator {
    fn fragment(&self) -> String {
        self.fragment.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set_fragment(&self, fragment: &str) {
        *self.fragment.lock().unwrap_or_else(|e| e.into_inner()) = fragment.to_string();
    }
}

/// A [`Surface`] recording every mount and notice.
#[derive(Default)]
pub struct RecordingSurface {
    mounts: Mutex<Vec<String>>,
    notices: Mutex<Vec<String>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently mounted markup, if any.
    pub fn last_mount(&self) -> Option<String> {
        self.mounts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    /// How many times content was mounted.
    pub fn mount_count(&self) -> usize {
        self.mounts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Every notice shown so far.
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Surface for RecordingSurface {
    fn mount(&self, markup: &str) {
        self.mounts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(markup.to_string());
    }

    fn notify(&self, message: &str) {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}
