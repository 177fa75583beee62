//! In-memory capability implementations.
//!
//! Clones share their backing state, so the front end can hand one clone to
//! a terminal session and keep another to observe what the session did.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_types::error::{FolioError, Result};

use crate::services::{Navigator, SessionStore};

/// Session storage living for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that is never available (private browsing, disabled storage).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(FolioError::Storage("session storage unavailable".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(FolioError::Storage("session storage unavailable".into()))
    }
}

/// Navigator that records every requested path in order.
///
/// The desktop front end drains it once per frame to decide which view to
/// show next.
#[derive(Debug, Clone, Default)]
pub struct RouteLog {
    routes: Rc<RefCell<Vec<String>>>,
}

impl RouteLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the paths recorded since the last drain.
    pub fn drain(&self) -> Vec<String> {
        self.routes.borrow_mut().drain(..).collect()
    }
}

impl Navigator for RouteLog {
    fn navigate(&mut self, path: &str) -> Result<()> {
        log::debug!("navigate -> {path}");
        self.routes.borrow_mut().push(path.to_string());
        Ok(())
    }
}
