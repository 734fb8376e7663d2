use std::future::Future;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::category::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct CategoryAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> CategoryAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait CategoryQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_name(self, name: String) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn list_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
}

impl CategoryQuery for CategoryAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_by_name(self, name: String) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Name.eq(name)).one(self.db).await
    }

    async fn list_all(self) -> Result<Vec<Model>, DbErr> {
        self.query
            .order_by_asc(Column::Name)
            .all(self.db)
            .await
    }
}

pub trait CategoryMutation {
    fn create(self, name: String) -> impl Future<Output = Result<Model, DbErr>>;
    fn update_name(
        self,
        category: Model,
        name: String,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, category: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl CategoryMutation for CategoryAdapter<'_> {
    async fn create(self, name: String) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(name),
            created_at: Set(Utc::now().into()),
        }
        .insert(self.db)
        .await
    }

    async fn update_name(self, category: Model, name: String) -> Result<Model, DbErr> {
        let mut category = category.into_active_model();
        category.name = Set(name);
        category.update(self.db).await
    }

    async fn delete(self, category: Model) -> Result<(), DbErr> {
        category.delete(self.db).await.map(|_| ())
    }
}
