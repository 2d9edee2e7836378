use axum::{extract::State, Json};

use service::account::domain::{Account, LoginInput, RegisterInput};

use super::AppState;
use crate::errors::ApiError;

/// POST /register — 200 with the created account, 400 on rejection.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<Account>, ApiError> {
    let account = state.accounts.register(input).await?;
    Ok(Json(account))
}

/// POST /login — 200 with the matching account, 401 on credential mismatch.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<Account>, ApiError> {
    let account = state.accounts.login(input).await?;
    Ok(Json(account))
}
