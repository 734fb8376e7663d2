use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::{admin_adapter::AdminAdapter, meme_adapter::MemeAdapter};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{memes::delete::delete_meme, UseCaseError};

use crate::utils::{response_401, response_403, response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    meme_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a meme", skip(db, user, path_param))]
#[delete("/{meme_id}")]
pub async fn delete_meme_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            match delete_meme(
                user.into_inner(),
                path_param.meme_id,
                MemeAdapter::init(&db),
                AdminAdapter::init(&db),
            )
            .await
            {
                Ok(_) => HttpResponse::NoContent().finish(),
                Err(e) => match &e {
                    UseCaseError::Forbidden(message) => response_403(message),
                    UseCaseError::NotFound(message) => response_404(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(),
    }
}
