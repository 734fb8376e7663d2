use db_adapters::meme_adapter::{MemeAdapter, MemeQuery};
use uuid::Uuid;

use crate::{error_500, memes::types::MemeVisible, UseCaseError};

pub async fn get_meme<'a>(
    meme_id: Uuid,
    meme_adapter: MemeAdapter<'a>,
) -> Result<MemeVisible, UseCaseError> {
    let meme = meme_adapter
        .get_by_id(meme_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Meme with this id was not found.".to_string(),
        ))?;
    Ok(MemeVisible::from(meme))
}
