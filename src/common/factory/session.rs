use chrono::{DateTime, FixedOffset, Utc};
use entities::session;
use sea_orm::Set;
use uuid::Uuid;

pub fn session(user_id: Uuid) -> session::ActiveModel {
    session::ActiveModel {
        id: Set(Uuid::now_v7()),
        user_id: Set(user_id),
        token: Set(Uuid::new_v4().to_string()),
        created_at: Set(Utc::now().into()),
        expires_at: Set(None),
    }
}

pub trait SessionFactory {
    fn token(self, token: &str) -> session::ActiveModel;
    fn expires_at(self, expires_at: Option<DateTime<FixedOffset>>) -> session::ActiveModel;
}

impl SessionFactory for session::ActiveModel {
    fn token(mut self, token: &str) -> session::ActiveModel {
        self.token = Set(token.to_string());
        self
    }

    fn expires_at(mut self, expires_at: Option<DateTime<FixedOffset>>) -> session::ActiveModel {
        self.expires_at = Set(expires_at);
        self
    }
}
