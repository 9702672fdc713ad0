//! In-memory store for users and tasks.
//!
//! Owns all mutable state: the user map, the per-owner task sequences, and
//! the two auto-incrementing id counters. Ids start at 1, are strictly
//! increasing and never reused, even after deletes. The store itself never
//! errors; lookups that miss return `None`/`false` and the handlers decide
//! what that means over HTTP.

use crate::routes::tasks::model::Task;
use crate::routes::users::User;
use chrono::Utc;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct Store {
    users: BTreeMap<u64, User>,
    // Per-owner task sequences, insertion order. A missing key means the
    // owner has never had a task created, which is not the same thing as an
    // empty sequence.
    tasks: BTreeMap<u64, Vec<Task>>,
    next_user_id: u64,
    next_task_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            tasks: BTreeMap::new(),
            next_user_id: 1,
            next_task_id: 1,
        }
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a user, or returns `None` when the username is already taken.
    /// The existing user record is left untouched on conflict.
    pub fn create_user(&mut self, username: String, password: String) -> Option<User> {
        if self.users.values().any(|u| u.username == username) {
            return None;
        }

        let now = Utc::now();
        let user = User {
            id: self.next_user_id,
            username,
            password,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(user.id, user.clone());
        self.next_user_id += 1;

        Some(user)
    }

    pub fn user_exists(&self, user_id: u64) -> bool {
        self.users.contains_key(&user_id)
    }

    pub fn find_user_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|u| u.username == username)
    }

    /// Creates a task for an owner the caller has already checked exists.
    /// Task ids come from a store-wide counter, so they are unique across all
    /// owners' sequences.
    pub fn create_task(&mut self, owner_id: u64, title: String, description: String) -> Task {
        let now = Utc::now();
        let task = Task {
            id: self.next_task_id,
            user_id: owner_id,
            title,
            description,
            is_completed: false,
            created_at: now,
            updated_at: now,
        };
        self.tasks.entry(owner_id).or_default().push(task.clone());
        self.next_task_id += 1;

        task
    }

    /// Returns the owner's task sequence in insertion order, or `None` when
    /// no sequence has ever been created for that owner.
    pub fn tasks_for_user(&self, user_id: u64) -> Option<&Vec<Task>> {
        self.tasks.get(&user_id)
    }

    pub fn all_tasks(&self) -> &BTreeMap<u64, Vec<Task>> {
        &self.tasks
    }

    pub fn all_users(&self) -> &BTreeMap<u64, User> {
        &self.users
    }

    /// Linear scan over every owner's sequence; first match wins.
    pub fn find_task(&self, task_id: u64) -> Option<(u64, &Task)> {
        self.tasks
            .iter()
            .flat_map(|(owner, seq)| seq.iter().map(move |t| (*owner, t)))
            .find(|(_, t)| t.id == task_id)
    }

    /// Applies the provided fields to the task with this id and refreshes
    /// `updated_at`. Returns the updated task, or `None` when no task
    /// anywhere in the store has that id.
    pub fn update_task(
        &mut self,
        task_id: u64,
        title: Option<String>,
        description: Option<String>,
    ) -> Option<Task> {
        let task = self
            .tasks
            .values_mut()
            .flat_map(|seq| seq.iter_mut())
            .find(|t| t.id == task_id)?;

        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = description {
            task.description = description;
        }
        task.updated_at = Utc::now();

        Some(task.clone())
    }

    /// Removes the task with this id from the named owner's sequence only.
    /// Returns whether anything was actually removed.
    pub fn delete_task(&mut self, owner_id: u64, task_id: u64) -> bool {
        let Some(seq) = self.tasks.get_mut(&owner_id) else {
            return false;
        };
        let before = seq.len();
        seq.retain(|t| t.id != task_id);
        seq.len() != before
    }
}
