use actix_web::{
    post,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::{meme_adapter::MemeAdapter, vote_adapter::VoteAdapter};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    votes::{cast::cast_vote, types::VoteCastRequest},
    UseCaseError,
};

use crate::utils::{response_401, response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    meme_id: uuid::Uuid,
}

#[tracing::instrument(name = "Casting a vote", skip(db, user, settings, path_param))]
#[post("/{meme_id}/votes")]
pub async fn cast_vote_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<VoteCastRequest>,
    path_param: Path<PathParam>,
    settings: Data<Settings>,
) -> HttpResponse {
    match user {
        Some(user) => {
            match cast_vote(
                user.into_inner(),
                path_param.meme_id,
                req.into_inner(),
                settings.vote.down_vote_threshold,
                MemeAdapter::init(&db),
                VoteAdapter::init(&db),
            )
            .await
            {
                Ok(res) => HttpResponse::Created().json(res),
                Err(e) => match &e {
                    UseCaseError::NotFound(message) => response_404(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(),
    }
}
