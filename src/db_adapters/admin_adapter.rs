use std::future::Future;

use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, Select};
use uuid::Uuid;

use entities::admin::{Column, Entity, Model};

#[derive(Clone)]
pub struct AdminAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> AdminAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait AdminQuery {
    fn get_by_user_id(self, user_id: Uuid)
        -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl AdminQuery for AdminAdapter<'_> {
    async fn get_by_user_id(self, user_id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }
}
