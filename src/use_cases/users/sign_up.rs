use db_adapters::user_adapter::{CreateUserParams, UserAdapter, UserMutation, UserQuery};
use sea_orm::SqlErr;

use crate::{auth::password, error_500, users::types::SignUpRequest, UseCaseError};

pub async fn sign_up<'a>(
    params: SignUpRequest,
    user_adapter: UserAdapter<'a>,
) -> Result<(), UseCaseError> {
    if let Some(existing) = user_adapter
        .clone()
        .get_by_username_or_email(params.username.clone(), params.email.clone())
        .await
        .map_err(error_500)?
    {
        let mut taken = vec![];
        if existing.email == params.email {
            taken.push("e-mail");
        }
        if existing.username == params.username {
            taken.push("username");
        }
        return Err(UseCaseError::Conflict(format!(
            "Data already in use. Please, choose a different {} or log in.",
            taken.join(" and ")
        )));
    }

    let hashed_password = password::hash(params.password.as_bytes()).await;
    match user_adapter
        .create(CreateUserParams {
            username: params.username,
            email: params.email,
            password: hashed_password,
        })
        .await
    {
        Ok(_) => Ok(()),
        // The lookup above races with concurrent signups; the unique
        // constraints are the backstop.
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(UseCaseError::Conflict(
                "Data already in use. Please, choose a different username or e-mail or log in."
                    .to_string(),
            )),
            _ => Err(error_500(e)),
        },
    }
}
