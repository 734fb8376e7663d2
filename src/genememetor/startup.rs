use actix_web::{dev::Server, middleware::Compress, web::Data, App, HttpServer};
use common::settings::types::Settings;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use server::get_routes;
use web_adapters::auth_middleware::AuthenticateUser;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let db = get_database_connection(&settings).await;
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations.");
        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = std::net::TcpListener::bind(&address)?;
        let port = listener.local_addr().unwrap().port();
        let server = run(listener, db, settings).await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub async fn get_database_connection(settings: &Settings) -> DatabaseConnection {
    Database::connect(&settings.database.url)
        .await
        .expect("Failed to open DB connection.")
}

async fn run(
    listener: std::net::TcpListener,
    db: DatabaseConnection,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(AuthenticateUser)
            .service(get_routes())
            .app_data(Data::new(db.clone()))
            .app_data(Data::new(settings.clone()))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
