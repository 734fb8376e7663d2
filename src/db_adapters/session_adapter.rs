use std::future::Future;

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, ModelTrait, QueryFilter, Select,
    Set,
};
use uuid::Uuid;

use entities::session::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct SessionAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> SessionAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait SessionQuery {
    fn get_by_token(self, token: String) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl SessionQuery for SessionAdapter<'_> {
    async fn get_by_token(self, token: String) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::Token.eq(token))
            .one(self.db)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct CreateSessionParams {
    pub user_id: Uuid,
    pub token: String,
    pub expires_at: Option<DateTime<FixedOffset>>,
}

pub trait SessionMutation {
    fn create(self, params: CreateSessionParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, session: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl SessionMutation for SessionAdapter<'_> {
    async fn create(self, params: CreateSessionParams) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(params.user_id),
            token: Set(params.token),
            created_at: Set(Utc::now().into()),
            expires_at: Set(params.expires_at),
        }
        .insert(self.db)
        .await
    }

    async fn delete(self, session: Model) -> Result<(), DbErr> {
        session.delete(self.db).await.map(|_| ())
    }
}
