use db_adapters::admin_adapter::{AdminAdapter, AdminQuery};
use entities::{meme, user};
use sea_orm::DbErr;

pub async fn is_admin<'a>(user: &user::Model, admin_adapter: AdminAdapter<'a>) -> Result<bool, DbErr> {
    Ok(admin_adapter.get_by_user_id(user.id).await?.is_some())
}

pub async fn is_owner_or_admin<'a>(
    meme: &meme::Model,
    user: &user::Model,
    admin_adapter: AdminAdapter<'a>,
) -> Result<bool, DbErr> {
    if meme.creator_id == user.id {
        return Ok(true);
    }
    is_admin(user, admin_adapter).await
}
