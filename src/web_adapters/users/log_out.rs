use actix_web::{
    post,
    web::{Data, ReqData},
    HttpResponse,
};
use db_adapters::session_adapter::SessionAdapter;
use entities::session as session_entity;
use sea_orm::DbConn;
use use_cases::users::log_out::log_out;

use crate::utils::{response_401, response_500};

#[tracing::instrument(name = "Logging a user out", skip(db, session))]
#[post("/logout")]
pub async fn log_out_endpoint(
    db: Data<DbConn>,
    session: Option<ReqData<session_entity::Model>>,
) -> HttpResponse {
    match session {
        Some(session) => match log_out(session.into_inner(), SessionAdapter::init(&db)).await {
            Ok(_) => HttpResponse::Ok().json("You have successfully logged out."),
            Err(e) => response_500(e),
        },
        None => response_401(),
    }
}
