use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};

use crate::utils::{init_app, Connections};
use common::factory::{self, *};
use entities::{prelude::Meme, vote};

#[actix_web::test]
async fn owner_can_delete() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let session = factory::session(user.id).insert(&db).await?;
    let category = factory::category().insert(&db).await?;
    let meme = factory::meme(user.id, category.id).insert(&db).await?;
    factory::vote(meme.id, user.id).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/memes/{}", meme.id))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NO_CONTENT);

    assert!(Meme::find_by_id(meme.id).one(&db).await?.is_none());
    let votes_left = vote::Entity::find()
        .filter(vote::Column::MemeId.eq(meme.id))
        .all(&db)
        .await?;
    assert!(votes_left.is_empty());

    Ok(())
}

#[actix_web::test]
async fn admin_can_delete_anothers_meme() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let creator = factory::user().insert(&db).await?;
    let admin_user = factory::user().insert(&db).await?;
    factory::admin(admin_user.id).insert(&db).await?;
    let session = factory::session(admin_user.id).insert(&db).await?;
    let category = factory::category().insert(&db).await?;
    let meme = factory::meme(creator.id, category.id).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/memes/{}", meme.id))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NO_CONTENT);

    assert!(Meme::find_by_id(meme.id).one(&db).await?.is_none());

    Ok(())
}

#[actix_web::test]
async fn forbidden_for_non_owner_non_admin() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let creator = factory::user().insert(&db).await?;
    let other_user = factory::user().insert(&db).await?;
    let session = factory::session(other_user.id).insert(&db).await?;
    let category = factory::category().insert(&db).await?;
    let meme = factory::meme(creator.id, category.id).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/memes/{}", meme.id))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

    assert!(Meme::find_by_id(meme.id).one(&db).await?.is_some());

    Ok(())
}

#[actix_web::test]
async fn not_found_on_missing_meme() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let session = factory::session(user.id).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/memes/{}", uuid::Uuid::now_v7()))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let category = factory::category().insert(&db).await?;
    let meme = factory::meme(user.id, category.id).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/memes/{}", meme.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
