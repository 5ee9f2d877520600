use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RegisterRequest},
        password::{hash_password, verify_password},
    },
    error::ApiError,
    state::AppState,
    users::store::StoreError,
};

const MIN_PASSWORD_LEN: usize = 6;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let (Some(username), Some(email), Some(password)) = (
        present(&payload.username),
        present(&payload.email),
        present(&payload.password),
    ) else {
        warn!("registration missing fields");
        return Err(ApiError::Validation(
            "Username, email, and password are required",
        ));
    };

    // Length is counted in characters, not bytes.
    if password.chars().count() < MIN_PASSWORD_LEN {
        warn!("registration password too short");
        return Err(ApiError::Validation(
            "Password must be at least 6 characters",
        ));
    }

    if state
        .store
        .find_by_username(username)
        .await
        .map_err(|e| ApiError::storage("Database error", e))?
        .is_some()
    {
        warn!(username, "username already taken");
        return Err(ApiError::Conflict("Username already exists"));
    }

    if state
        .store
        .find_by_email(email)
        .await
        .map_err(|e| ApiError::storage("Database error", e))?
        .is_some()
    {
        warn!(email, "email already taken");
        return Err(ApiError::Conflict("Email already exists"));
    }

    let hash =
        hash_password(password).map_err(|e| ApiError::internal("Failed to create user", e))?;

    // The pre-checks above race with concurrent registrations; the table's
    // UNIQUE constraints are the authoritative backstop.
    let user = match state.store.insert(username, email, &hash).await {
        Ok(user) => user,
        Err(StoreError::ConstraintViolation) => {
            warn!(username, "registration lost uniqueness race");
            return Err(ApiError::Conflict("User already exists"));
        }
        Err(e) => return Err(ApiError::storage("Failed to create user", e)),
    };

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created successfully",
            user: PublicUser::from(user),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (Some(username), Some(password)) =
        (present(&payload.username), present(&payload.password))
    else {
        warn!("login missing fields");
        return Err(ApiError::Validation("Username and password are required"));
    };

    // Unknown username and wrong password share one rejection below, so the
    // response never tells an attacker which usernames exist.
    let Some(user) = state
        .store
        .find_by_username(username)
        .await
        .map_err(|e| ApiError::storage("Database error", e))?
    else {
        warn!(username, "login unknown username");
        return Err(ApiError::InvalidCredentials);
    };

    let valid = verify_password(password, &user.password_hash)
        .map_err(|e| ApiError::internal("Internal server error", e))?;

    if !valid {
        warn!(username, user_id = user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(Json(AuthResponse {
        message: "Login successful",
        user: PublicUser::from(user),
    }))
}

/// Treat an absent field and an empty string the same way, like a falsy
/// check on the request body would.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
