use db_adapters::{
    admin_adapter::AdminAdapter,
    category_adapter::{CategoryAdapter, CategoryMutation, CategoryQuery},
};
use entities::user as user_entity;
use uuid::Uuid;

use crate::{
    authorization::is_admin,
    categories::types::{CategoryRequest, CategoryVisible},
    error_500, UseCaseError,
};

pub async fn update_category<'a>(
    user: user_entity::Model,
    category_id: Uuid,
    params: CategoryRequest,
    category_adapter: CategoryAdapter<'a>,
    admin_adapter: AdminAdapter<'a>,
) -> Result<CategoryVisible, UseCaseError> {
    if !is_admin(&user, admin_adapter).await.map_err(error_500)? {
        return Err(UseCaseError::Forbidden(
            "You don't have the necessary access level to edit categories! Please, check your credentials and try again."
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

    if let Some(existing) = category_adapter
        .clone()
        .get_by_name(params.name.clone())
        .await
        .map_err(error_500)?
    {
        if existing.id != category.id {
            return Err(UseCaseError::Conflict(
                "This category already exists! Choose a new name and try again or take a look at the existing category."
                    .to_string(),
            ));
        }
    }

    let category = category_adapter
        .update_name(category, params.name)
        .await
        .map_err(error_500)?;
    Ok(CategoryVisible::from(category))
}
