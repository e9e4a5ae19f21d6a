use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::user::{Email, Role};

/// User data for persistence
///
/// Simple struct for user CRUD operations. `email` and `username` are each
/// unique across the store; the backing database enforces this atomically.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: Email,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

/// Repository trait for the User aggregate
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user, returning the stored record
    async fn create(&self, user: User) -> Result<User, String>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, String>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, String>;

    /// Return every stored user
    async fn find_all(&self) -> Result<Vec<User>, String>;
}
