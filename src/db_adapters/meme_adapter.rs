use std::future::Future;

use chrono::Utc;
use sea_orm::{
    sea_query::{Func, SimpleExpr},
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, ModelTrait,
    Order, PaginatorTrait, QueryFilter, QueryOrder, Select, Set, TransactionError,
    TransactionTrait,
};
use uuid::Uuid;

use entities::{
    meme::{ActiveModel, Column, Entity, Model},
    vote,
};

#[derive(Clone)]
pub struct MemeAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> MemeAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait MemeFilter {
    fn filter_eq_creator(self, creator_id: Uuid) -> Self;
    fn filter_eq_category(self, category_id: Uuid) -> Self;
}

impl MemeFilter for MemeAdapter<'_> {
    fn filter_eq_creator(mut self, creator_id: Uuid) -> Self {
        self.query = self.query.filter(Column::CreatorId.eq(creator_id));
        self
    }

    fn filter_eq_category(mut self, category_id: Uuid) -> Self {
        self.query = self.query.filter(Column::CategoryId.eq(category_id));
        self
    }
}

pub trait MemeQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_image_url(
        self,
        image_url: String,
    ) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_random(self) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn list(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn count(self) -> impl Future<Output = Result<u64, DbErr>>;
}

impl MemeQuery for MemeAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_by_image_url(self, image_url: String) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::ImageUrl.eq(image_url))
            .one(self.db)
            .await
    }

    async fn get_random(self) -> Result<Option<Model>, DbErr> {
        self.query
            .order_by(SimpleExpr::FunctionCall(Func::random()), Order::Asc)
            .one(self.db)
            .await
    }

    async fn list(self) -> Result<Vec<Model>, DbErr> {
        self.query
            .order_by_desc(Column::CreatedAt)
            .all(self.db)
            .await
    }

    async fn count(self) -> Result<u64, DbErr> {
        self.query.count(self.db).await
    }
}

#[derive(Debug, Clone)]
pub struct CreateMemeParams {
    pub description: String,
    pub image_url: String,
    pub category_id: Uuid,
    pub creator_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct UpdateMemeParams {
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
}

pub trait MemeMutation {
    fn create(self, params: CreateMemeParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn partial_update(
        self,
        meme: Model,
        params: UpdateMemeParams,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    /// Removes the meme together with its vote history in one transaction.
    fn delete_with_votes(self, meme: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl MemeMutation for MemeAdapter<'_> {
    async fn create(self, params: CreateMemeParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            description: Set(params.description),
            image_url: Set(params.image_url),
            category_id: Set(params.category_id),
            creator_id: Set(params.creator_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn partial_update(self, meme: Model, params: UpdateMemeParams) -> Result<Model, DbErr> {
        let mut meme = meme.into_active_model();
        if let Some(description) = params.description {
            meme.description = Set(description);
        }
        if let Some(category_id) = params.category_id {
            meme.category_id = Set(category_id);
        }
        meme.updated_at = Set(Utc::now().into());
        meme.update(self.db).await
    }

    async fn delete_with_votes(self, meme: Model) -> Result<(), DbErr> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    vote::Entity::delete_many()
                        .filter(vote::Column::MemeId.eq(meme.id))
                        .exec(txn)
                        .await?;
                    meme.delete(txn).await?;
                    Ok(())
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(e) => e,
                TransactionError::Transaction(e) => e,
            })
    }
}
