use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::memes::types::MemeVisible;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let category = factory::category().insert(&db).await?;
    let meme = factory::meme(user.id, category.id).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/memes/{}", meme.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: MemeVisible = test::read_body_json(res).await;
    assert_eq!(res, MemeVisible::from(meme));

    Ok(())
}

#[actix_web::test]
async fn not_found_on_missing_meme() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/memes/{}", uuid::Uuid::now_v7()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn random_returns_a_meme() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let category = factory::category().insert(&db).await?;
    let meme = factory::meme(user.id, category.id).insert(&db).await?;

    let req = test::TestRequest::get().uri("/api/memes/random").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: MemeVisible = test::read_body_json(res).await;
    assert_eq!(res.id, meme.id);

    Ok(())
}

#[actix_web::test]
async fn random_is_not_found_without_memes() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get().uri("/api/memes/random").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
