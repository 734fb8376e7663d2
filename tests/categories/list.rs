use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::categories::types::CategoryVisible;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn lists_categories_without_authentication() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let category = factory::category().insert(&db).await?;

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: Vec<CategoryVisible> = test::read_body_json(res).await;
    let names = res.iter().map(|c| c.name.clone()).collect::<Vec<_>>();
    assert!(names.contains(&category.name));
    // Seeded by the migrations.
    assert!(names.contains(&"Science".to_string()));

    Ok(())
}
