//! Admin login.
//!
//! Exchanges the single admin password for a signed session token. The
//! password is checked against the Argon2id hash in the server config.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use techvolt_core::error::CoreError;
use techvolt_core::roles::ROLE_ADMIN;
use techvolt_core::types::Timestamp;
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// Token subject for the admin principal.
const ADMIN_SUBJECT: &str = "admin";

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: Timestamp,
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let password_valid = verify_password(&input.password, &state.config.admin_password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::warn!("Admin login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let issued = generate_access_token(ADMIN_SUBJECT, ROLE_ADMIN, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(token_id = %issued.jti, expires_at = %issued.expires_at, "Admin logged in");

    Ok(Json(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at,
    }))
}
