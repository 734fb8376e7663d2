use db_adapters::{
    meme_adapter::{MemeAdapter, MemeMutation, MemeQuery},
    vote_adapter::{CreateVoteParams, VoteAdapter, VoteMutation, VoteQuery},
};
use entities::{sea_orm_active_enums::VoteTypeEnum, user as user_entity};
use uuid::Uuid;

use crate::{
    error_500,
    votes::types::{VoteCastRequest, VoteOutcome},
    UseCaseError,
};

/// Appends the vote, then removes the meme once its down-vote count
/// reaches the threshold. Repeat votes by the same voter are allowed.
pub async fn cast_vote<'a>(
    user: user_entity::Model,
    meme_id: Uuid,
    params: VoteCastRequest,
    down_vote_threshold: u64,
    meme_adapter: MemeAdapter<'a>,
    vote_adapter: VoteAdapter<'a>,
) -> Result<VoteOutcome, UseCaseError> {
    let meme = meme_adapter
        .clone()
        .get_by_id(meme_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Meme with this id was not found.".to_string(),
        ))?;

    vote_adapter
        .clone()
        .create(CreateVoteParams {
            meme_id: meme.id,
            voter_id: user.id,
            vote_type: params.vote_type.clone(),
        })
        .await
        .map_err(error_500)?;

    if params.vote_type == VoteTypeEnum::Down {
        let down_votes = vote_adapter
            .count_down_votes(meme.id)
            .await
            .map_err(error_500)?;
        if down_votes >= down_vote_threshold {
            meme_adapter
                .delete_with_votes(meme)
                .await
                .map_err(error_500)?;
            tracing::event!(target: "backend", tracing::Level::INFO, %meme_id, "Meme removed after crossing the down-vote threshold.");
            return Ok(VoteOutcome {
                meme_deleted: true,
                message:
                    "Your vote has been registered. The meme crossed the down-vote threshold and has been removed."
                        .to_string(),
            });
        }
    }

    Ok(VoteOutcome {
        meme_deleted: false,
        message: "Your vote has been registered.".to_string(),
    })
}
