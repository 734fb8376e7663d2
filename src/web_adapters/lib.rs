mod categories;
mod memes;
mod middlewares;
mod users;
mod utils;

pub use categories::category_routes;
pub use memes::meme_routes;
pub use users::auth_routes;

pub use middlewares::auth as auth_middleware;
