use db_adapters::{
    admin_adapter::AdminAdapter,
    category_adapter::{CategoryAdapter, CategoryMutation, CategoryQuery},
};
use entities::user as user_entity;
use sea_orm::SqlErr;

use crate::{
    authorization::is_admin,
    categories::types::{CategoryRequest, CategoryVisible},
    error_500, UseCaseError,
};

pub async fn create_category<'a>(
    user: user_entity::Model,
    params: CategoryRequest,
    category_adapter: CategoryAdapter<'a>,
    admin_adapter: AdminAdapter<'a>,
) -> Result<CategoryVisible, UseCaseError> {
    if !is_admin(&user, admin_adapter).await.map_err(error_500)? {
        return Err(UseCaseError::Forbidden(
            "You don't have the necessary access level to create new categories! Please, check your credentials and try again."
                .to_string(),
        ));
    }

    if category_adapter
        .clone()
        .get_by_name(params.name.clone())
        .await
        .map_err(error_500)?
        .is_some()
    {
        return Err(UseCaseError::Conflict(
            "This category already exists! Choose a new name and try again or take a look at the existing category."
                .to_string(),
        ));
    }

    match category_adapter.create(params.name).await {
        Ok(category) => Ok(CategoryVisible::from(category)),
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(UseCaseError::Conflict(
                "This category already exists! Choose a new name and try again or take a look at the existing category."
                    .to_string(),
            )),
            _ => Err(error_500(e)),
        },
    }
}
