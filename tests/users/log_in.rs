use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use use_cases::users::types::{LoginRequest, LoginResponse};

use crate::utils::{init_app, Connections};
use common::factory::{self, *};
use entities::session;

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let password = "password";
    let hashed_password = "$argon2id$v=19$m=19456,t=2,p=1$r07vWFCaKrbNPrSgUrG/+Q$/2lBaeRWeox6ROMu6qAwOYmttdGXA3o4Uw2YHC/fvfY";
    let user = factory::user()
        .password(hashed_password)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(LoginRequest {
            username: user.username.to_string(),
            password: password.to_string(),
        })
        .to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: LoginResponse = test::read_body_json(res).await;
    assert!(!res.token.is_empty());

    let session_in_db = session::Entity::find()
        .filter(session::Column::Token.eq(res.token.clone()))
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(session_in_db.user_id, user.id);

    Ok(())
}

#[actix_web::test]
async fn each_login_issues_a_new_session() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let password = "password";
    let hashed_password = "$argon2id$v=19$m=19456,t=2,p=1$r07vWFCaKrbNPrSgUrG/+Q$/2lBaeRWeox6ROMu6qAwOYmttdGXA3o4Uw2YHC/fvfY";
    let user = factory::user()
        .password(hashed_password)
        .insert(&db)
        .await?;

    let mut tokens = vec![];
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(LoginRequest {
                username: user.username.to_string(),
                password: password.to_string(),
            })
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);
        let res: LoginResponse = test::read_body_json(res).await;
        tokens.push(res.token);
    }
    assert_ne!(tokens[0], tokens[1]);

    let session_count = session::Entity::find().all(&db).await?.len();
    assert_eq!(session_count, 2);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_username() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(LoginRequest {
            username: "nosuchuser".to_string(),
            password: "password123".to_string(),
        })
        .to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_on_incorrect_password() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let incorrect_password = "passworda";
    let hashed_password = "$argon2id$v=19$m=19456,t=2,p=1$r07vWFCaKrbNPrSgUrG/+Q$/2lBaeRWeox6ROMu6qAwOYmttdGXA3o4Uw2YHC/fvfY";
    let user = factory::user()
        .password(hashed_password)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(LoginRequest {
            username: user.username.to_string(),
            password: incorrect_password.to_string(),
        })
        .to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
