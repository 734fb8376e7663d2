use db_adapters::{
    admin_adapter::AdminAdapter,
    category_adapter::{CategoryAdapter, CategoryQuery},
    meme_adapter::{MemeAdapter, MemeMutation, MemeQuery, UpdateMemeParams},
};
use entities::user as user_entity;
use uuid::Uuid;

use crate::{
    authorization::is_owner_or_admin,
    error_500,
    memes::types::{MemeUpdateRequest, MemeVisible},
    UseCaseError,
};

pub async fn update_meme<'a>(
    user: user_entity::Model,
    meme_id: Uuid,
    params: MemeUpdateRequest,
    meme_adapter: MemeAdapter<'a>,
    category_adapter: CategoryAdapter<'a>,
    admin_adapter: AdminAdapter<'a>,
) -> Result<MemeVisible, UseCaseError> {
    let meme = meme_adapter
        .clone()
        .get_by_id(meme_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Meme with this id was not found.".to_string(),
        ))?;

    if !is_owner_or_admin(&meme, &user, admin_adapter)
        .await
        .map_err(error_500)?
    {
        return Err(UseCaseError::Forbidden(
            "Only the meme's creator or an admin may edit it.".to_string(),
        ));
    }

    let category_id = match params.category {
        Some(name) => Some(
            category_adapter
                .get_by_name(name.clone())
                .await
                .map_err(error_500)?
                .ok_or(UseCaseError::NotFound(format!(
                    "Category {} does not exist.",
                    name
                )))?
                .id,
        ),
        None => None,
    };

    let meme = meme_adapter
        .partial_update(
            meme,
            UpdateMemeParams {
                description: params.description,
                category_id,
            },
        )
        .await
        .map_err(error_500)?;
    Ok(MemeVisible::from(meme))
}
