use db_adapters::{
    category_adapter::{CategoryAdapter, CategoryQuery},
    meme_adapter::{MemeAdapter, MemeFilter, MemeQuery},
    user_adapter::{UserAdapter, UserQuery},
};

use crate::{
    error_500,
    memes::types::{MemeListQuery, MemeVisible},
    UseCaseError,
};

pub async fn list_memes<'a>(
    query: MemeListQuery,
    mut meme_adapter: MemeAdapter<'a>,
    user_adapter: UserAdapter<'a>,
    category_adapter: CategoryAdapter<'a>,
) -> Result<Vec<MemeVisible>, UseCaseError> {
    if let Some(username) = query.username {
        let user = user_adapter
            .get_by_username(username)
            .await
            .map_err(error_500)?
            .ok_or(UseCaseError::NotFound("User not found!".to_string()))?;
        meme_adapter = meme_adapter.filter_eq_creator(user.id);
    }

    if let Some(name) = query.category {
        let category = category_adapter
            .get_by_name(name.clone())
            .await
            .map_err(error_500)?
            .ok_or(UseCaseError::NotFound(format!(
                "Category {} does not exist.",
                name
            )))?;
        meme_adapter = meme_adapter.filter_eq_category(category.id);
    }

    let memes = meme_adapter.list().await.map_err(error_500)?;
    Ok(memes.into_iter().map(MemeVisible::from).collect())
}
