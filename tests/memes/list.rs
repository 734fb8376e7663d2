use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::memes::types::MemeVisible;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn lists_all_memes() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let category = factory::category().insert(&db).await?;
    let meme_0 = factory::meme(user.id, category.id).insert(&db).await?;
    let meme_1 = factory::meme(user.id, category.id).insert(&db).await?;

    let req = test::TestRequest::get().uri("/api/memes").to_request();
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
async fn filters_by_username_and_category() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let other_user = factory::user().insert(&db).await?;
    let category = factory::category().insert(&db).await?;
    let other_category = factory::category().insert(&db).await?;
    let matching_meme = factory::meme(user.id, category.id).insert(&db).await?;
    let _wrong_category = factory::meme(user.id, other_category.id).insert(&db).await?;
    let _wrong_creator = factory::meme(other_user.id, category.id).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/memes?username={}&category={}",
            user.username, category.name
        ))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: Vec<MemeVisible> = test::read_body_json(res).await;
    assert_eq!(res.len(), 1);
    assert_eq!(res[0].id, matching_meme.id);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_username_filter() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/memes?username=nosuchuser")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_category_filter() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/memes?category=no-such-category")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
