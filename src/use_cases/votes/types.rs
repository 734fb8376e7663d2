use entities::sea_orm_active_enums::VoteTypeEnum;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Serialize)]
pub struct VoteCastRequest {
    pub vote_type: VoteTypeEnum,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct VoteOutcome {
    pub meme_deleted: bool,
    pub message: String,
}
