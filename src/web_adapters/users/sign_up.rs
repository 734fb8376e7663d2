use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use sea_orm::DbConn;
use use_cases::{
    users::{sign_up::sign_up, types::SignUpRequest},
    UseCaseError,
};

use crate::utils::{response_409, response_422, response_500};

#[tracing::instrument(name = "Signing a user up", skip(db, req), fields(username = %req.username))]
#[post("/signup")]
pub async fn sign_up_endpoint(db: Data<DbConn>, req: Json<SignUpRequest>) -> HttpResponse {
    let params = req.into_inner().normalized();
    if let Err(errors) = params.validate() {
        return response_422(errors);
    }

    match sign_up(params, UserAdapter::init(&db)).await {
        Ok(_) => HttpResponse::Created().json("Your account has been created successfully."),
        Err(e) => match &e {
            UseCaseError::Conflict(message) => response_409(message),
            _ => response_500(e),
        },
    }
}
