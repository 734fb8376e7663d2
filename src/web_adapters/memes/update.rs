use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::{
    admin_adapter::AdminAdapter, category_adapter::CategoryAdapter, meme_adapter::MemeAdapter,
};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    memes::{types::MemeUpdateRequest, update::update_meme},
    UseCaseError,
};

use crate::utils::{response_401, response_403, response_404, response_422, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    meme_id: uuid::Uuid,
}

#[tracing::instrument(name = "Updating a meme", skip(db, user, path_param))]
#[put("/{meme_id}")]
pub async fn update_meme_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<MemeUpdateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let params = req.into_inner().normalized();
            if let Err(errors) = params.validate() {
                return response_422(errors);
            }

            match update_meme(
                user.into_inner(),
                path_param.meme_id,
                params,
                MemeAdapter::init(&db),
                CategoryAdapter::init(&db),
                AdminAdapter::init(&db),
            )
            .await
            {
                Ok(res) => HttpResponse::Ok().json(res),
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
