use db_adapters::meme_adapter::{MemeAdapter, MemeQuery};

use crate::{error_500, memes::types::MemeVisible, UseCaseError};

pub async fn get_random_meme<'a>(
    meme_adapter: MemeAdapter<'a>,
) -> Result<MemeVisible, UseCaseError> {
    let meme = meme_adapter
        .get_random()
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "No memes have been added yet.".to_string(),
        ))?;
    Ok(MemeVisible::from(meme))
}
