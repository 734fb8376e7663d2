use db_adapters::{
    meme_adapter::{MemeAdapter, MemeFilter, MemeQuery},
    user_adapter::{UserAdapter, UserQuery},
};

use crate::{error_500, memes::types::MemeVisible, UseCaseError};

pub async fn list_user_memes<'a>(
    username: String,
    user_adapter: UserAdapter<'a>,
    meme_adapter: MemeAdapter<'a>,
) -> Result<Vec<MemeVisible>, UseCaseError> {
    let user = user_adapter
        .get_by_username(username)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound("User not found!".to_string()))?;

    let memes = meme_adapter
        .filter_eq_creator(user.id)
        .list()
        .await
        .map_err(error_500)?;
    Ok(memes.into_iter().map(MemeVisible::from).collect())
}
