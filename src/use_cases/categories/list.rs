use db_adapters::category_adapter::{CategoryAdapter, CategoryQuery};

use crate::{categories::types::CategoryVisible, error_500, UseCaseError};

pub async fn list_categories<'a>(
    category_adapter: CategoryAdapter<'a>,
) -> Result<Vec<CategoryVisible>, UseCaseError> {
    let categories = category_adapter.list_all().await.map_err(error_500)?;
    Ok(categories.into_iter().map(CategoryVisible::from).collect())
}
