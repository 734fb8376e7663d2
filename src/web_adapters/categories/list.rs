use actix_web::{get, web::Data, HttpResponse};
use db_adapters::category_adapter::CategoryAdapter;
use sea_orm::DbConn;
use use_cases::categories::list::list_categories;

use crate::utils::response_500;

#[tracing::instrument(name = "Listing categories", skip(db))]
#[get("")]
pub async fn list_categories_endpoint(db: Data<DbConn>) -> HttpResponse {
    match list_categories(CategoryAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => response_500(e),
    }
}
