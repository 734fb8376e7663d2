use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    users::{change_password::change_password, types::PasswordChangeRequest},
    UseCaseError,
};

use crate::utils::{response_401, response_403, response_422, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    user_id: uuid::Uuid,
}

#[tracing::instrument(name = "Changing a user's password", skip(db, user, req, path_param))]
#[put("/{user_id}/password")]
pub async fn change_password_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<PasswordChangeRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let params = req.into_inner().normalized();
            if let Err(errors) = params.validate() {
                return response_422(errors);
            }

            match change_password(
                user.into_inner(),
                path_param.user_id,
                params,
                UserAdapter::init(&db),
            )
            .await
            {
                Ok(_) => HttpResponse::Ok().json("Your password has been changed successfully."),
                Err(e) => match &e {
                    UseCaseError::Forbidden(message) => response_403(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(),
    }
}
