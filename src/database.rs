//! In-memory store for user and task records.
//! Collections assign their own ids and live for the lifetime of the
//! running service; nothing is persisted across restarts.

use std::{
    collections::HashMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::validation::FieldText;

/// A stored user record.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// A stored task record. Tasks are exposed read-only for now: there are
/// no validation rules for a task write path yet.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Task {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub duration: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl FieldText for User {
    fn field_text(&self, field: &str) -> Option<&str> {
        match field {
            "firstName" => Some(&self.first_name),
            "lastName" => Some(&self.last_name),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            _ => None,
        }
    }
}

impl FieldText for Task {
    fn field_text(&self, field: &str) -> Option<&str> {
        match field {
            "title" => Some(&self.title),
            "description" => Some(&self.description),
            "status" => Some(&self.status),
            _ => None,
        }
    }
}

/// Records keyed by id, plus the auto-incrementing id counter.
/// Ids start at 1, grow strictly, and are never handed out twice.
#[derive(Debug)]
pub struct Collection<T> {
    next_id: u64,
    records: HashMap<u64, T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: HashMap::new(),
        }
    }
}

impl<T> Collection<T> {
    /// Assigns the next id, stores the record built from it, and returns
    /// a reference to the stored record.
    pub fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.records.entry(id).or_insert_with(|| build(id))
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.records.get(&id)
    }

    /// View of the stored records, for scans and listings.
    pub fn records(&self) -> &HashMap<u64, T> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Process-wide store, owned by the running service instance and shared
/// with the handlers through the router state.
#[derive(Default)]
pub struct Store {
    users: RwLock<Collection<User>>,
    tasks: RwLock<Collection<Task>>,
}

impl Store {
    pub fn users(&self) -> Result<RwLockReadGuard<'_, Collection<User>>> {
        self.users.read().or(Err(anyhow!("User store poisoned")))
    }

    pub fn users_mut(&self) -> Result<RwLockWriteGuard<'_, Collection<User>>> {
        self.users.write().or(Err(anyhow!("User store poisoned")))
    }

    pub fn tasks(&self) -> Result<RwLockReadGuard<'_, Collection<Task>>> {
        self.tasks.read().or(Err(anyhow!("Task store poisoned")))
    }

    pub fn tasks_mut(&self) -> Result<RwLockWriteGuard<'_, Collection<Task>>> {
        self.tasks.write().or(Err(anyhow!("Task store poisoned")))
    }
}
