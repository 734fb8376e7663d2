use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::memes::types::MemeVisible;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let other_user = factory::user().insert(&db).await?;
    let category = factory::category().insert(&db).await?;
    let meme_0 = factory::meme(user.id, category.id).insert(&db).await?;
    let meme_1 = factory::meme(user.id, category.id).insert(&db).await?;
    let _other_meme = factory::meme(other_user.id, category.id).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}/memes", user.username))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: Vec<MemeVisible> = test::read_body_json(res).await;
    assert_eq!(res.len(), 2);
    let ids = res.iter().map(|meme| meme.id).collect::<Vec<_>>();
    assert!(ids.contains(&meme_0.id));
    assert!(ids.contains(&meme_1.id));

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_username() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/users/nosuchuser/memes")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
