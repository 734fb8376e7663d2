use sea_orm_migration::prelude::*;
use uuid::Uuid;

use crate::m20240901_000004_create_categories_table::Category;

// Initial categories. Admin rows are managed out-of-band, so none are
// seeded here.
const CATEGORY_NAMES: [&str; 3] = ["Science", "Humor", "Animals"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in CATEGORY_NAMES {
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(Category::Table)
                        .columns([Category::Id, Category::Name])
                        .values_panic([Uuid::new_v4().into(), name.into()])
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Category::Table)
                    .cond_where(
                        Expr::col(Category::Name).is_in(CATEGORY_NAMES.map(|n| n.to_string())),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
