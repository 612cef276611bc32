//! In-memory storage layer for employee records.
//!
//! Models and repositories mirror a database-backed layout, but rows live in
//! a process-local [`MemStore`] shared across request tasks. Nothing
//! survives a restart; that is the point of this service.

pub mod models;
pub mod repositories;

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::models::employee::Employee;

/// Shared handle to the in-memory store, cloned into application state.
pub type Store = Arc<MemStore>;

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A writer panicked while holding the table lock.
    #[error("employee table lock poisoned")]
    Poisoned,
}

/// The in-memory employee table, keyed by employee id.
///
/// `BTreeMap` keeps rows in ascending id order so paginated listings are
/// stable across calls. Every repository operation takes the lock exactly
/// once, which makes each call atomic with respect to the others.
#[derive(Debug, Default)]
pub struct MemStore {
    pub(crate) employees: RwLock<BTreeMap<String, Employee>>,
}

/// Create an empty store handle.
pub fn new_store() -> Store {
    Arc::new(MemStore::default())
}
