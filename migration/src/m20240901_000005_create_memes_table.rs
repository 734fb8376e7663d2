use sea_orm_migration::{
    prelude::*,
    schema::{string, string_uniq, timestamp_with_time_zone, uuid},
};

use crate::{
    m20240901_000001_create_users_table::User,
    m20240901_000004_create_categories_table::Category,
};

const CREATOR_INDEX_NAME: &str = "memes_creator_id_index";
const CATEGORY_INDEX_NAME: &str = "memes_category_id_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Meme::Table)
                    .if_not_exists()
                    .col(uuid(Meme::Id).primary_key())
                    .col(string(Meme::Description))
                    .col(string_uniq(Meme::ImageUrl))
                    .col(uuid(Meme::CategoryId))
                    .col(uuid(Meme::CreatorId))
                    .col(
                        timestamp_with_time_zone(Meme::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Meme::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-memes-category_id")
                            .from(Meme::Table, Meme::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-memes-creator_id")
                            .from(Meme::Table, Meme::CreatorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(CREATOR_INDEX_NAME)
                    .table(Meme::Table)
                    .col(Meme::CreatorId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(CATEGORY_INDEX_NAME)
                    .table(Meme::Table)
                    .col(Meme::CategoryId)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(CATEGORY_INDEX_NAME).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name(CREATOR_INDEX_NAME).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Meme::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Meme {
    #[sea_orm(iden = "memes")]
    Table,
    Id,
    Description,
    ImageUrl,
    CategoryId,
    CreatorId,
    CreatedAt,
    UpdatedAt,
}
