use chrono::Utc;
use entities::category;
use sea_orm::Set;

pub fn category() -> category::ActiveModel {
    category::ActiveModel {
        id: Set(uuid::Uuid::now_v7()),
        name: Set(format!("category_{}", uuid::Uuid::now_v7().simple())),
        created_at: Set(Utc::now().into()),
    }
}

pub trait CategoryFactory {
    fn name(self, name: &str) -> category::ActiveModel;
}

impl CategoryFactory for category::ActiveModel {
    fn name(mut self, name: &str) -> category::ActiveModel {
        self.name = Set(name.to_string());
        self
    }
}
