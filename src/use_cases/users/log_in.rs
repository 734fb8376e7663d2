use chrono::{DateTime, Duration, FixedOffset, Utc};
use db_adapters::{
    session_adapter::{CreateSessionParams, SessionAdapter, SessionMutation},
    user_adapter::{UserAdapter, UserQuery},
};
use uuid::Uuid;

use crate::{
    auth::password,
    error_500,
    users::types::{LoginRequest, LoginResponse},
    UseCaseError,
};

pub async fn log_in<'a>(
    params: LoginRequest,
    session_ttl_minutes: Option<i64>,
    user_adapter: UserAdapter<'a>,
    session_adapter: SessionAdapter<'a>,
) -> Result<LoginResponse, UseCaseError> {
    let user = user_adapter
        .get_by_username(params.username.clone())
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "User not found! Please check and try again.".to_string(),
        ))?;

    if password::verify_password(&user.password, params.password.as_bytes()).is_err() {
        return Err(UseCaseError::Unauthorized);
    }

    let expires_at: Option<DateTime<FixedOffset>> =
        session_ttl_minutes.map(|minutes| (Utc::now() + Duration::minutes(minutes)).into());
    let session = session_adapter
        .create(CreateSessionParams {
            user_id: user.id,
            token: Uuid::new_v4().to_string(),
            expires_at,
        })
        .await
        .map_err(error_500)?;

    tracing::event!(target: "backend", tracing::Level::INFO, "User logged in successfully.");
    Ok(LoginResponse {
        token: session.token,
    })
}
