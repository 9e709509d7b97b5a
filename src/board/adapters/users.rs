//! In-memory user directory.

use crate::board::ports::UserDirectory;
use crate::task::domain::UserId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Thread-safe username table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    usernames: Arc<RwLock<HashMap<UserId, String>>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or renames a user.
    pub fn insert(&self, user_id: UserId, username: impl Into<String>) {
        self.usernames
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user_id, username.into());
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn username(&self, user_id: UserId) -> Option<String> {
        self.usernames
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&user_id)
            .cloned()
    }
}
