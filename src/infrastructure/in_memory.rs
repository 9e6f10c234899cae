use crate::domain::email::Email;
use crate::domain::ports::UserRepository;
use crate::domain::user::User;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for users, keyed by email.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what a consumer saved.
#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Email, User>>>,
}

impl InMemoryUserRepository {
    /// Creates a new, empty in-memory user repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> Result<()> {
        let mut users = self.users.write().await;
        users.insert(user.email.clone(), user);
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn all(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.email.as_str().cmp(b.email.as_str()));
        Ok(all)
    }
}
