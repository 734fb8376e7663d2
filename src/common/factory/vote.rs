use chrono::Utc;
use entities::{sea_orm_active_enums::VoteTypeEnum, vote};
use sea_orm::Set;
use uuid::Uuid;

pub fn vote(meme_id: Uuid, voter_id: Uuid) -> vote::ActiveModel {
    vote::ActiveModel {
        id: Set(Uuid::now_v7()),
        meme_id: Set(meme_id),
        voter_id: Set(voter_id),
        vote_type: Set(VoteTypeEnum::Up),
        created_at: Set(Utc::now().into()),
    }
}

pub trait VoteFactory {
    fn vote_type(self, vote_type: VoteTypeEnum) -> vote::ActiveModel;
}

impl VoteFactory for vote::ActiveModel {
    fn vote_type(mut self, vote_type: VoteTypeEnum) -> vote::ActiveModel {
        self.vote_type = Set(vote_type);
        self
    }
}
