use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::{meme_adapter::MemeAdapter, user_adapter::UserAdapter};
use sea_orm::DbConn;
use use_cases::{users::list_memes::list_user_memes, UseCaseError};

use crate::utils::{response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    username: String,
}

#[tracing::instrument(name = "Listing a user's memes", skip(db, path_param))]
#[get("/{username}/memes")]
pub async fn list_user_memes_endpoint(
    db: Data<DbConn>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match list_user_memes(
        path_param.username.clone(),
        UserAdapter::init(&db),
        MemeAdapter::init(&db),
    )
    .await
    {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => match &e {
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
