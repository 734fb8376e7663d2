use db_adapters::session_adapter::{SessionAdapter, SessionMutation};
use entities::session;

use crate::{error_500, UseCaseError};

pub async fn log_out<'a>(
    session: session::Model,
    session_adapter: SessionAdapter<'a>,
) -> Result<(), UseCaseError> {
    session_adapter.delete(session).await.map_err(error_500)
}
