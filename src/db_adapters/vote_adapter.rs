use std::future::Future;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    Select, Set,
};
use uuid::Uuid;

use entities::{
    sea_orm_active_enums::VoteTypeEnum,
    vote::{ActiveModel, Column, Entity, Model},
};

#[derive(Clone)]
pub struct VoteAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> VoteAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait VoteQuery {
    fn count_down_votes(self, meme_id: Uuid) -> impl Future<Output = Result<u64, DbErr>>;
}

impl VoteQuery for VoteAdapter<'_> {
    async fn count_down_votes(self, meme_id: Uuid) -> Result<u64, DbErr> {
        self.query
            .filter(Column::MemeId.eq(meme_id))
            .filter(Column::VoteType.eq(VoteTypeEnum::Down))
            .count(self.db)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct CreateVoteParams {
    pub meme_id: Uuid,
    pub voter_id: Uuid,
    pub vote_type: VoteTypeEnum,
}

pub trait VoteMutation {
    fn create(self, params: CreateVoteParams) -> impl Future<Output = Result<Model, DbErr>>;
}

impl VoteMutation for VoteAdapter<'_> {
    async fn create(self, params: CreateVoteParams) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            meme_id: Set(params.meme_id),
            voter_id: Set(params.voter_id),
            vote_type: Set(params.vote_type),
            created_at: Set(Utc::now().into()),
        }
        .insert(self.db)
        .await
    }
}
