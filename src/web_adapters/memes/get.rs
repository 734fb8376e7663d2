use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::meme_adapter::MemeAdapter;
use sea_orm::DbConn;
use use_cases::{memes::get::get_meme, UseCaseError};

use crate::utils::{response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    meme_id: uuid::Uuid,
}

#[tracing::instrument(name = "Fetching a meme", skip(db, path_param))]
#[get("/{meme_id}")]
pub async fn get_meme_endpoint(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match get_meme(path_param.meme_id, MemeAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => match &e {
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
