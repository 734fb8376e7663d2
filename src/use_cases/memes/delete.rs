use db_adapters::{
    admin_adapter::AdminAdapter,
    meme_adapter::{MemeAdapter, MemeMutation, MemeQuery},
};
use entities::user as user_entity;
use uuid::Uuid;

use crate::{authorization::is_owner_or_admin, error_500, UseCaseError};

pub async fn delete_meme<'a>(
    user: user_entity::Model,
    meme_id: Uuid,
    meme_adapter: MemeAdapter<'a>,
    admin_adapter: AdminAdapter<'a>,
) -> Result<(), UseCaseError> {
    let meme = meme_adapter
        .clone()
        .get_by_id(meme_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Meme with this id was not found.".to_string(),
        ))?;

    if !is_owner_or_admin(&meme, &user, admin_adapter)
        .await
        .map_err(error_500)?
    {
        return Err(UseCaseError::Forbidden(
            "Only the meme's creator or an admin may delete it.".to_string(),
        ));
    }

    meme_adapter.delete_with_votes(meme).await.map_err(error_500)
}
