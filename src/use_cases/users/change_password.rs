use db_adapters::user_adapter::{UserAdapter, UserMutation};
use entities::user;
use uuid::Uuid;

use crate::{auth::password, error_500, users::types::PasswordChangeRequest, UseCaseError};

pub async fn change_password<'a>(
    user: user::Model,
    path_user_id: Uuid,
    params: PasswordChangeRequest,
    user_adapter: UserAdapter<'a>,
) -> Result<(), UseCaseError> {
    if user.id != path_user_id {
        return Err(UseCaseError::Forbidden(
            "You may only change your own password.".to_string(),
        ));
    }

    if password::verify_password(&user.password, params.old_password.as_bytes()).is_err() {
        return Err(UseCaseError::Forbidden(
            "Current password is incorrect! Please, check and try again.".to_string(),
        ));
    }

    let hashed_password = password::hash(params.new_password.as_bytes()).await;
    user_adapter
        .update_password(user, hashed_password)
        .await
        .map_err(error_500)?;
    Ok(())
}
