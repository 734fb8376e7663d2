use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use db_adapters::{admin_adapter::AdminAdapter, category_adapter::CategoryAdapter};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    categories::{create::create_category, types::CategoryRequest},
    UseCaseError,
};

use crate::utils::{response_401, response_403, response_409, response_422, response_500};

#[tracing::instrument(name = "Creating a category", skip(db, user))]
#[post("")]
pub async fn create_category_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<CategoryRequest>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let params = req.into_inner().normalized();
            if let Err(errors) = params.validate() {
                return response_422(errors);
            }

            match create_category(
                user.into_inner(),
                params,
                CategoryAdapter::init(&db),
                AdminAdapter::init(&db),
            )
            .await
            {
                Ok(res) => HttpResponse::Created().json(res),
                Err(e) => match &e {
                    UseCaseError::Forbidden(message) => response_403(message),
                    UseCaseError::Conflict(message) => response_409(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(),
    }
}
