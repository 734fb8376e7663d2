use actix_web::web::{scope, ServiceConfig};

mod change_password;
mod get_user;
mod list_memes;
mod log_in;
mod log_out;
mod sign_up;

pub fn auth_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/users")
            .service(sign_up::sign_up_endpoint)
            .service(log_in::log_in_endpoint)
            .service(log_out::log_out_endpoint)
            .service(get_user::get_user)
            .service(change_password::change_password_endpoint)
            .service(list_memes::list_user_memes_endpoint),
    );
}
