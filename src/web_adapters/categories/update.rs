use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::{admin_adapter::AdminAdapter, category_adapter::CategoryAdapter};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    categories::{types::CategoryRequest, update::update_category},
    UseCaseError,
};

use crate::utils::{
    response_401, response_403, response_404, response_409, response_422, response_500,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    category_id: uuid::Uuid,
}

#[tracing::instrument(name = "Updating a category", skip(db, user, path_param))]
#[put("/{category_id}")]
pub async fn update_category_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<CategoryRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let params = req.into_inner().normalized();
            if let Err(errors) = params.validate() {
                return response_422(errors);
            }

            match update_category(
                user.into_inner(),
                path_param.category_id,
                params,
                CategoryAdapter::init(&db),
                AdminAdapter::init(&db),
            )
            .await
            {
                Ok(res) => HttpResponse::Ok().json(res),
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
