use actix_web::web::{scope, ServiceConfig};

mod create;
mod delete;
mod list;
mod update;

pub fn category_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/categories")
            .service(list::list_categories_endpoint)
            .service(create::create_category_endpoint)
            .service(update::update_category_endpoint)
            .service(delete::delete_category_endpoint),
    );
}
