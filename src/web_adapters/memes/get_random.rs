use actix_web::{get, web::Data, HttpResponse};
use db_adapters::meme_adapter::MemeAdapter;
use sea_orm::DbConn;
use use_cases::{memes::get_random::get_random_meme, UseCaseError};

use crate::utils::{response_404, response_500};

#[tracing::instrument(name = "Fetching a random meme", skip(db))]
#[get("/random")]
pub async fn get_random_meme_endpoint(db: Data<DbConn>) -> HttpResponse {
    match get_random_meme(MemeAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => match &e {
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
