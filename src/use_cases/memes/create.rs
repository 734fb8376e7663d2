use db_adapters::{
    category_adapter::{CategoryAdapter, CategoryQuery},
    meme_adapter::{CreateMemeParams, MemeAdapter, MemeMutation, MemeQuery},
};
use entities::user as user_entity;
use sea_orm::SqlErr;

use crate::{
    error_500,
    memes::types::{MemeCreateRequest, MemeVisible},
    UseCaseError,
};

pub async fn create_meme<'a>(
    user: user_entity::Model,
    params: MemeCreateRequest,
    meme_adapter: MemeAdapter<'a>,
    category_adapter: CategoryAdapter<'a>,
) -> Result<MemeVisible, UseCaseError> {
    if let Some(existing) = meme_adapter
        .clone()
        .get_by_image_url(params.image_url.clone())
        .await
        .map_err(error_500)?
    {
        return Err(UseCaseError::Conflict(format!(
            "This meme has already been added. Please, access it using its id: {}",
            existing.id
        )));
    }

    let category = category_adapter
        .get_by_name(params.category.clone())
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(format!(
            "Category {} does not exist.",
            params.category
        )))?;

    match meme_adapter
        .create(CreateMemeParams {
            description: params.description,
            image_url: params.image_url,
            category_id: category.id,
            creator_id: user.id,
        })
        .await
    {
        Ok(meme) => Ok(MemeVisible::from(meme)),
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(UseCaseError::Conflict(
                "This meme has already been added.".to_string(),
            )),
            _ => Err(error_500(e)),
        },
    }
}
