use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use db_adapters::{category_adapter::CategoryAdapter, meme_adapter::MemeAdapter};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    memes::{create::create_meme, types::MemeCreateRequest},
    UseCaseError,
};

use crate::utils::{response_401, response_404, response_409, response_422, response_500};

#[tracing::instrument(name = "Creating a meme", skip(db, user))]
#[post("")]
pub async fn create_meme_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<MemeCreateRequest>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let params = req.into_inner().normalized();
            if let Err(errors) = params.validate() {
                return response_422(errors);
            }

            match create_meme(
                user.into_inner(),
                params,
                MemeAdapter::init(&db),
                CategoryAdapter::init(&db),
            )
            .await
            {
                Ok(res) => HttpResponse::Created().json(res),
                Err(e) => match &e {
                    UseCaseError::NotFound(message) => response_404(message),
                    UseCaseError::Conflict(message) => response_409(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(),
    }
}
