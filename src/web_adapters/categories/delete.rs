use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::{
    admin_adapter::AdminAdapter, category_adapter::CategoryAdapter, meme_adapter::MemeAdapter,
};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{categories::delete::delete_category, UseCaseError};

use crate::utils::{response_401, response_403, response_404, response_409, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    category_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a category", skip(db, user, path_param))]
#[delete("/{category_id}")]
pub async fn delete_category_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            match delete_category(
                user.into_inner(),
                path_param.category_id,
                CategoryAdapter::init(&db),
                MemeAdapter::init(&db),
                AdminAdapter::init(&db),
            )
            .await
            {
                Ok(_) => HttpResponse::NoContent().finish(),
                Err(e) => match &e {
                    UseCaseError::Forbidden(message) => response_403(message),
                    UseCaseError::NotFound(message) => response_404(message),
                    UseCaseError::Conflict(message) => response_409(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(),
    }
}
