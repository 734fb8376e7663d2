use actix_web::web::{scope, ServiceConfig};

mod create;
mod delete;
mod get;
mod get_random;
mod list;
mod update;
mod vote;

pub fn meme_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/memes")
            .service(list::list_memes_endpoint)
            .service(get_random::get_random_meme_endpoint)
            .service(create::create_meme_endpoint)
            .service(vote::cast_vote_endpoint)
            .service(get::get_meme_endpoint)
            .service(update::update_meme_endpoint)
            .service(delete::delete_meme_endpoint),
    );
}
