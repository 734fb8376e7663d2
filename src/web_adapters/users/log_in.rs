use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::{session_adapter::SessionAdapter, user_adapter::UserAdapter};
use sea_orm::DbConn;
use use_cases::{
    users::{log_in::log_in, types::LoginRequest},
    UseCaseError,
};

use crate::utils::{response_404, response_422, response_500, ErrorResponse};

#[tracing::instrument(name = "Logging a user in", skip(db, req, settings), fields(username = %req.username))]
#[post("/login")]
pub async fn log_in_endpoint(
    db: Data<DbConn>,
    req: Json<LoginRequest>,
    settings: Data<Settings>,
) -> HttpResponse {
    let params = req.into_inner().normalized();
    if let Err(errors) = params.validate() {
        return response_422(errors);
    }

    match log_in(
        params,
        settings.session.ttl_minutes,
        UserAdapter::init(&db),
        SessionAdapter::init(&db),
    )
    .await
    {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => match &e {
            UseCaseError::Unauthorized => HttpResponse::Unauthorized().json(ErrorResponse {
                error: "Username and password combination is incorrect! Please, check and try again."
                    .to_string(),
            }),
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
