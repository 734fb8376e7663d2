use std::fmt::Debug;

pub mod auth;
pub mod authorization;
pub mod categories;
pub mod memes;
pub mod users;
pub mod validation;
pub mod votes;

#[derive(Debug)]
pub enum UseCaseError {
    Unauthorized,                // 401
    Forbidden(String),           // 403
    NotFound(String),            // 404
    Conflict(String),            // 409
    InternalServerError(String), // 500
}

pub(crate) fn error_500(e: impl Debug) -> UseCaseError {
    UseCaseError::InternalServerError(format!("{:?}", e))
}
