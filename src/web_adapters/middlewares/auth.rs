use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web::Data,
    Error, HttpMessage,
};
use chrono::Utc;
use futures::future::LocalBoxFuture;
use sea_orm::{DbConn, DbErr};

use db_adapters::{
    session_adapter::{SessionAdapter, SessionQuery},
    user_adapter::{UserAdapter, UserQuery},
};
use entities::{session, user};

/// Resolves `Authorization: Bearer <token>` against the session store and
/// attaches the session and its user to the request. Handlers decide what
/// an absent user means; a missing or malformed header is treated exactly
/// like an unknown token.
pub struct AuthenticateUser;

impl<S: 'static, B> Transform<S, ServiceRequest> for AuthenticateUser
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateUserMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateUserMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticateUserMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateUserMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        Box::pin(async move {
            if let Some(token) = bearer_token(&req) {
                if let Some(db) = req.app_data::<Data<DbConn>>() {
                    match resolve_session(db.get_ref(), token).await {
                        Ok(Some((session, user))) => {
                            req.extensions_mut().insert(user);
                            req.extensions_mut().insert(session);
                        }
                        Ok(None) => (),
                        Err(e) => {
                            tracing::event!(target: "backend", tracing::Level::ERROR, "Error resolving session in the middleware: {:?}", e);
                        }
                    }
                }
            }

            let res = svc.call(req).await?;

            Ok(res)
        })
    }
}

fn bearer_token(req: &ServiceRequest) -> Option<String> {
    let header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    header.strip_prefix("Bearer ").map(|token| token.to_string())
}

async fn resolve_session(
    db: &DbConn,
    token: String,
) -> Result<Option<(session::Model, user::Model)>, DbErr> {
    let session = match SessionAdapter::init(db).get_by_token(token).await? {
        Some(session) => session,
        None => return Ok(None),
    };
    if let Some(expires_at) = session.expires_at {
        if expires_at.with_timezone(&Utc) < Utc::now() {
            return Ok(None);
        }
    }
    let user = UserAdapter::init(db).get_by_id(session.user_id).await?;
    Ok(user.map(|user| (session, user)))
}
