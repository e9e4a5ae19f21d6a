use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::password::hash_password;
use crate::domain::repositories::User;
use crate::domain::user::{Email, Role};

/// Request body for user registration
///
/// Absent fields deserialize as empty strings so the presence check (and its
/// 404) is owned by the handler rather than the deserializer.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

/// Query parameters for user registration
#[derive(Debug, Deserialize)]
pub struct RegisterQuery {
    #[serde(default)]
    pub secretpass: String,
}

/// User record as returned on the wire
///
/// `password` carries the stored bcrypt hash verbatim; no redaction is
/// performed.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.to_string(),
            username: user.username.clone(),
            password: user.password_hash.clone(),
            role: user.role,
        }
    }
}

/// Register a new user
///
/// POST /api/users?secretpass=<registration secret>
pub async fn create_user(
    State(state): State<AppState>,
    Query(query): Query<RegisterQuery>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    if req.email.is_empty()
        || req.password.is_empty()
        || req.username.is_empty()
        || req.name.is_empty()
        || req.role.is_empty()
    {
        return Err(ApiError::not_found("Please provide required information"));
    }

    let role: Role = req
        .role
        .parse()
        .map_err(|e: String| ApiError::forbidden(e))?;

    if query.secretpass != state.config.registration_secret {
        return Err(ApiError::forbidden("No Secret Key Found"));
    }

    let email = Email::new(&req.email).map_err(|e| ApiError::not_found(e))?;

    // Two independent lookups; either match blocks creation. A race between
    // concurrent registrations is settled by the store's unique constraints.
    let email_taken = state
        .users
        .find_by_email(&email)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    let username_taken = state
        .users
        .find_by_username(&req.username)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    if email_taken.is_some() || username_taken.is_some() {
        return Err(ApiError::not_found("User already exists"));
    }

    let password_hash = hash_password(&req.password)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to hash password: {}", e)))?;

    let user = User {
        id: Uuid::new_v4(),
        name: req.name,
        email,
        username: req.username,
        password_hash,
        role,
    };

    let created = state
        .users
        .create(user)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create user: {}", e)))?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&created))))
}

/// List all users
///
/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state
        .users
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    let responses = users.iter().map(UserResponse::from).collect();

    Ok(Json(responses))
}
