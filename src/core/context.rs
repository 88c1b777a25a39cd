//! Shared context passed to modules

use std::fmt;

use crate::store::{KeyValueStore, MemoryStore};

/// Shared context available to all modules
pub struct Context {
    /// Session store used as the hand-off channel between views
    pub store: Box<dyn KeyValueStore>,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").finish_non_exhaustive()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }
}

impl Context {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}
