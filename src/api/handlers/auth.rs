use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::handlers::users::UserResponse;
use crate::api::state::AppState;
use crate::auth::jwt::{create_token, TOKEN_VALIDITY_DAYS};
use crate::auth::password::verify_password;
use crate::domain::user::Email;

/// Name of the cookie carrying the session token
const TOKEN_COOKIE_NAME: &str = "token";

/// Request body for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default, rename = "usernameOrEmail")]
    pub username_or_email: String,
    #[serde(default)]
    pub password: String,
}

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: UserResponse,
}

/// Response from logout
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// Login with username or email
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    if req.username_or_email.is_empty() || req.password.is_empty() {
        return Err(ApiError::not_found("Please enter valid information"));
    }

    // Identifiers containing '@' are looked up as emails, everything else as
    // usernames. A malformed email identifier gets the same generic error as
    // a miss so account existence never leaks.
    let user = if req.username_or_email.contains('@') {
        match Email::new(&req.username_or_email) {
            Ok(email) => state.users.find_by_email(&email).await,
            Err(_) => Ok(None),
        }
    } else {
        state.users.find_by_username(&req.username_or_email).await
    }
    .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
    .ok_or_else(|| ApiError::not_found("Invalid User or Password"))?;

    let valid = verify_password(&req.password, &user.password_hash).map_err(|e| {
        ApiError::internal_server_error(format!("Password verification failed: {}", e))
    })?;

    if !valid {
        return Err(ApiError::not_found("Invalid User or Password"));
    }

    let token = create_token(user.id, &state.config.jwt_secret)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create token: {}", e)))?;

    let jar = jar.add(session_cookie(&token));

    Ok((
        jar,
        Json(LoginResponse {
            success: true,
            token,
            user: UserResponse::from(&user),
        }),
    ))
}

/// Logout
///
/// POST /api/auth/logout
///
/// Stateless on the server side; instructs the client to drop the session
/// cookie and always succeeds.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<LogoutResponse>) {
    let jar = jar.add(clear_session_cookie());

    (
        jar,
        Json(LogoutResponse {
            success: true,
            message: "Logout Success".to_string(),
        }),
    )
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE_NAME, token.to_string()))
        .path("/")
        .max_age(time::Duration::days(TOKEN_VALIDITY_DAYS))
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Expires the session cookie immediately
fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE_NAME, ""))
        .path("/")
        .max_age(time::Duration::seconds(0))
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
