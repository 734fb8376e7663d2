use chrono::Utc;
use entities::user;
use sea_orm::Set;

pub fn user() -> user::ActiveModel {
    let now = Utc::now();
    // The username must stay within the application's 3..=20 length rule;
    // take a slice of the uuid's random tail to keep it short yet unique.
    let suffix = uuid::Uuid::now_v7().simple().to_string();
    user::ActiveModel {
        id: Set(uuid::Uuid::now_v7()),
        username: Set(format!("user_{}", &suffix[suffix.len() - 15..])),
        email: Set(format!("{}@test.com", uuid::Uuid::now_v7())),
        password: Set("password".to_string()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait UserFactory {
    fn username(self, username: &str) -> user::ActiveModel;
    fn email(self, email: &str) -> user::ActiveModel;
    fn password(self, hashed_password: &str) -> user::ActiveModel;
}

impl UserFactory for user::ActiveModel {
    fn username(mut self, username: &str) -> user::ActiveModel {
        self.username = Set(username.to_string());
        self
    }

    fn email(mut self, email: &str) -> user::ActiveModel {
        self.email = Set(email.to_string());
        self
    }

    fn password(mut self, hashed_password: &str) -> user::ActiveModel {
        self.password = Set(hashed_password.to_string());
        self
    }
}
