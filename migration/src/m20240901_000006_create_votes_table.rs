use sea_orm_migration::{
    prelude::*,
    schema::{string, timestamp_with_time_zone, uuid},
};

use crate::{
    m20240901_000001_create_users_table::User, m20240901_000005_create_memes_table::Meme,
};

const MEME_INDEX_NAME: &str = "votes_meme_id_index";

// Repeat votes by the same voter are allowed, so no unique index on
// (meme_id, voter_id).
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vote::Table)
                    .if_not_exists()
                    .col(uuid(Vote::Id).primary_key())
                    .col(uuid(Vote::MemeId))
                    .col(uuid(Vote::VoterId))
                    .col(string(Vote::VoteType))
                    .col(
                        timestamp_with_time_zone(Vote::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-votes-meme_id")
                            .from(Vote::Table, Vote::MemeId)
                            .to(Meme::Table, Meme::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-votes-voter_id")
                            .from(Vote::Table, Vote::VoterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(MEME_INDEX_NAME)
                    .table(Vote::Table)
                    .col(Vote::MemeId)
                    .col(Vote::VoteType)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(MEME_INDEX_NAME).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vote::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vote {
    #[sea_orm(iden = "votes")]
    Table,
    Id,
    MemeId,
    VoterId,
    VoteType,
    CreatedAt,
}
