use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use crate::utils::{init_app, Connections};
use common::factory::{self, *};
use entities::category;

#[actix_web::test]
async fn admin_can_delete() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin_user = factory::user().insert(&db).await?;
    factory::admin(admin_user.id).insert(&db).await?;
    let session = factory::session(admin_user.id).insert(&db).await?;
    let existing_category = factory::category().insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/categories/{}", existing_category.id))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NO_CONTENT);

    assert!(category::Entity::find_by_id(existing_category.id)
        .one(&db)
        .await?
        .is_none());

    Ok(())
}

#[actix_web::test]
async fn conflict_while_memes_reference_the_category() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin_user = factory::user().insert(&db).await?;
    factory::admin(admin_user.id).insert(&db).await?;
    let session = factory::session(admin_user.id).insert(&db).await?;
    let existing_category = factory::category().insert(&db).await?;
    factory::meme(admin_user.id, existing_category.id)
        .insert(&db)
        .await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/categories/{}", existing_category.id))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CONFLICT);

    assert!(category::Entity::find_by_id(existing_category.id)
        .one(&db)
        .await?
        .is_some());

    Ok(())
}

#[actix_web::test]
async fn forbidden_for_non_admin() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let session = factory::session(user.id).insert(&db).await?;
    let existing_category = factory::category().insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/categories/{}", existing_category.id))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_missing_category() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin_user = factory::user().insert(&db).await?;
    factory::admin(admin_user.id).insert(&db).await?;
    let session = factory::session(admin_user.id).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/categories/{}", uuid::Uuid::now_v7()))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
