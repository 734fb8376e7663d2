use db_adapters::{
    admin_adapter::AdminAdapter,
    category_adapter::{CategoryAdapter, CategoryMutation, CategoryQuery},
    meme_adapter::{MemeAdapter, MemeFilter, MemeQuery},
};
use entities::user as user_entity;
use uuid::Uuid;

use crate::{authorization::is_admin, error_500, UseCaseError};

pub async fn delete_category<'a>(
    user: user_entity::Model,
    category_id: Uuid,
    category_adapter: CategoryAdapter<'a>,
    meme_adapter: MemeAdapter<'a>,
    admin_adapter: AdminAdapter<'a>,
) -> Result<(), UseCaseError> {
    if !is_admin(&user, admin_adapter).await.map_err(error_500)? {
        return Err(UseCaseError::Forbidden(
            "You don't have the necessary access level to delete categories! Please, check your credentials and try again."
                .to_string(),
        ));
    }

    let category = category_adapter
        .clone()
        .get_by_id(category_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Category with this id was not found.".to_string(),
        ))?;

    let memes_in_category = meme_adapter
        .filter_eq_category(category.id)
        .count()
        .await
        .map_err(error_500)?;
    if memes_in_category > 0 {
        return Err(UseCaseError::Conflict(
            "This category still has memes attached to it and cannot be deleted.".to_string(),
        ));
    }

    category_adapter.delete(category).await.map_err(error_500)
}
