use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use use_cases::memes::types::{MemeUpdateRequest, MemeVisible};

use crate::utils::{init_app, Connections};
use common::factory::{self, *};
use entities::meme;

#[actix_web::test]
async fn owner_can_edit() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let session = factory::session(user.id).insert(&db).await?;
    let category = factory::category().insert(&db).await?;
    let meme = factory::meme(user.id, category.id).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/memes/{}", meme.id))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .set_json(MemeUpdateRequest {
            description: Some("A better description.".to_string()),
            category: None,
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: MemeVisible = test::read_body_json(res).await;
    assert_eq!(res.description, "A better description.");

    let meme_in_db = meme::Entity::find_by_id(meme.id).one(&db).await?.unwrap();
    assert_eq!(meme_in_db.description, "A better description.");
    assert_eq!(meme_in_db.category_id, category.id);

    Ok(())
}

#[actix_web::test]
async fn admin_can_edit_anothers_meme() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let creator = factory::user().insert(&db).await?;
    let admin_user = factory::user().insert(&db).await?;
    factory::admin(admin_user.id).insert(&db).await?;
    let session = factory::session(admin_user.id).insert(&db).await?;
    let category = factory::category().insert(&db).await?;
    let other_category = factory::category().insert(&db).await?;
    let meme = factory::meme(creator.id, category.id).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/memes/{}", meme.id))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .set_json(MemeUpdateRequest {
            description: None,
            category: Some(other_category.name.clone()),
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let meme_in_db = meme::Entity::find_by_id(meme.id).one(&db).await?.unwrap();
    assert_eq!(meme_in_db.category_id, other_category.id);
    assert_eq!(meme_in_db.creator_id, creator.id);

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

    let req = test::TestRequest::put()
        .uri(&format!("/api/memes/{}", meme.id))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .set_json(MemeUpdateRequest {
            description: Some("A hostile takeover.".to_string()),
            category: None,
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

    let meme_in_db = meme::Entity::find_by_id(meme.id).one(&db).await?.unwrap();
    assert_eq!(meme_in_db.description, meme.description);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_missing_meme() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let session = factory::session(user.id).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/memes/{}", uuid::Uuid::now_v7()))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .set_json(MemeUpdateRequest {
            description: Some("A better description.".to_string()),
            category: None,
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_category() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let session = factory::session(user.id).insert(&db).await?;
    let category = factory::category().insert(&db).await?;
    let meme = factory::meme(user.id, category.id).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/memes/{}", meme.id))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .set_json(MemeUpdateRequest {
            description: None,
            category: Some("no-such-category".to_string()),
        })
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

    let req = test::TestRequest::put()
        .uri(&format!("/api/memes/{}", meme.id))
        .set_json(MemeUpdateRequest {
            description: Some("A better description.".to_string()),
            category: None,
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
