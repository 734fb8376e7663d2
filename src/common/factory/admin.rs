use entities::admin;
use sea_orm::Set;
use uuid::Uuid;

pub fn admin(user_id: Uuid) -> admin::ActiveModel {
    admin::ActiveModel {
        user_id: Set(user_id),
    }
}
