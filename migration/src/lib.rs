pub use sea_orm_migration::prelude::*;

mod m20240901_000001_create_users_table;
mod m20240901_000002_create_sessions_table;
mod m20240901_000003_create_admins_table;
mod m20240901_000004_create_categories_table;
mod m20240901_000005_create_memes_table;
mod m20240901_000006_create_votes_table;
mod m_seed_categories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_create_users_table::Migration),
            Box::new(m20240901_000002_create_sessions_table::Migration),
            Box::new(m20240901_000003_create_admins_table::Migration),
            Box::new(m20240901_000004_create_categories_table::Migration),
            Box::new(m20240901_000005_create_memes_table::Migration),
            Box::new(m20240901_000006_create_votes_table::Migration),
            Box::new(m_seed_categories::Migration),
        ]
    }
}
