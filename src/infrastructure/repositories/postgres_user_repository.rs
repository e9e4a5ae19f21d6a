use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::{User, UserRepository};
use crate::domain::user::{Email, Role};

/// PostgreSQL implementation of UserRepository
///
/// Expects a `users` table with unique constraints on `email` and `username`;
/// those constraints are the only arbiter between racing registrations.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape, mapped into the domain type through the value objects
#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    username: String,
    password_hash: String,
    role: String,
}

impl TryFrom<UserRow> for User {
    type Error = String;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email =
            Email::new(&row.email).map_err(|e| format!("Invalid email from database: {}", e))?;
        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| format!("Invalid role from database: {}", e))?;

        Ok(User {
            id: row.id,
            name: row.name,
            email,
            username: row.username,
            password_hash: row.password_hash,
            role,
        })
    }
}

const SELECT_USER: &str =
    "SELECT id, name, email, username, password_hash, role FROM users";

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, String> {
        sqlx::query(
            "INSERT INTO users (id, name, email, username, password_hash, role) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to create user: {}", e))?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, String> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{} WHERE email = $1", SELECT_USER))
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| format!("Failed to find user by email: {}", e))?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, String> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{} WHERE username = $1", SELECT_USER))
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| format!("Failed to find user by username: {}", e))?;

        row.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>, String> {
        let rows = sqlx::query_as::<_, UserRow>(&format!("{} ORDER BY username", SELECT_USER))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| format!("Failed to list users: {}", e))?;

        rows.into_iter().map(User::try_from).collect()
    }
}
