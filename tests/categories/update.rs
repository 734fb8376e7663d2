use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use use_cases::categories::types::{CategoryRequest, CategoryVisible};

use crate::utils::{init_app, Connections};
use common::factory::{self, *};
use entities::category;

#[actix_web::test]
async fn admin_can_rename() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin_user = factory::user().insert(&db).await?;
    factory::admin(admin_user.id).insert(&db).await?;
    let session = factory::session(admin_user.id).insert(&db).await?;
    let existing_category = factory::category().insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/categories/{}", existing_category.id))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .set_json(CategoryRequest {
            name: "Wholesome".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: CategoryVisible = test::read_body_json(res).await;
    assert_eq!(res.name, "Wholesome");

    let category_in_db = category::Entity::find_by_id(existing_category.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(category_in_db.name, "Wholesome");

    Ok(())
}

#[actix_web::test]
async fn forbidden_for_non_admin() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let session = factory::session(user.id).insert(&db).await?;
    let existing_category = factory::category().insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/categories/{}", existing_category.id))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .set_json(CategoryRequest {
            name: "Wholesome".to_string(),
        })
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

    let req = test::TestRequest::put()
        .uri(&format!("/api/categories/{}", uuid::Uuid::now_v7()))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .set_json(CategoryRequest {
            name: "Wholesome".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn conflict_on_duplicate_name() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin_user = factory::user().insert(&db).await?;
    factory::admin(admin_user.id).insert(&db).await?;
    let session = factory::session(admin_user.id).insert(&db).await?;
    let category_to_rename = factory::category().insert(&db).await?;
    let other_category = factory::category().insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/categories/{}", category_to_rename.id))
        .insert_header(("Authorization", format!("Bearer {}", session.token)))
        .set_json(CategoryRequest {
            name: other_category.name.clone(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CONFLICT);

    Ok(())
}
