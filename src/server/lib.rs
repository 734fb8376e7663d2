use actix_web::{web::scope, Scope};
use web_adapters::{auth_routes, category_routes, meme_routes};

pub fn get_routes() -> Scope {
    scope("/api")
        .service(health_check)
        .configure(auth_routes)
        .configure(meme_routes)
        .configure(category_routes)
}

#[actix_web::get("/health-check")]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json("Genememetor is up and running!")
}
