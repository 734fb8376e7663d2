use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use db_adapters::{
    category_adapter::CategoryAdapter, meme_adapter::MemeAdapter, user_adapter::UserAdapter,
};
use sea_orm::DbConn;
use use_cases::{
    memes::{list::list_memes, types::MemeListQuery},
    UseCaseError,
};

use crate::utils::{response_404, response_500};

#[tracing::instrument(name = "Listing memes", skip(db))]
#[get("")]
pub async fn list_memes_endpoint(db: Data<DbConn>, query: Query<MemeListQuery>) -> HttpResponse {
    match list_memes(
        query.into_inner(),
        MemeAdapter::init(&db),
        UserAdapter::init(&db),
        CategoryAdapter::init(&db),
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
