use std::env;

use crate::settings::types::{
    ApplicationSettings, DatabaseSettings, Environment, SessionSettings, Settings, VoteSettings,
};

pub mod types;

pub fn get_settings(env_file_name: &str) -> Result<Settings, String> {
    dotenvy::from_filename(env_file_name)
        .map_err(|e| format!("Failed to fetch env file: {}", e.to_string()))?;

    match Environment::try_from(env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".into()))
    {
        Ok(env) => match env {
            Environment::Testing => get_testing_settings(),
            Environment::Development => get_development_settings(),
            Environment::Production => get_production_settings(),
        },
        Err(e) => return Err(format!("Failed to parse APP_ENVIRONMENT: {}", e)),
    }
}

pub fn get_test_settings() -> Settings {
    dotenvy::from_filename(".env.testing").ok();
    get_testing_settings().expect("Error on getting settings.")
}

fn get_testing_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_optional_env(Settings {
        application: ApplicationSettings {
            protocol: "http".to_string(),
            host: "127.0.0.1".to_string(),
            ..b.application
        },
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
        },
        debug: true,
        ..b
    })
}

fn get_development_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            protocol: "http".to_string(),
            host: "127.0.0.1".to_string(),
            ..b.application
        },
        debug: true,
        ..b
    })
}

fn get_production_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            protocol: "https".to_string(),
            host: "0.0.0.0".to_string(),
            ..b.application
        },
        debug: false,
        ..b
    })
}

fn merge_env(s: Settings) -> Result<Settings, String> {
    merge_optional_env(Settings {
        database: DatabaseSettings {
            url: get_env_var("DATABASE_URL")?,
        },
        ..s
    })
}

fn merge_optional_env(s: Settings) -> Result<Settings, String> {
    Ok(Settings {
        application: ApplicationSettings {
            port: match env::var("APP_PORT") {
                Ok(port) => port.parse::<u16>().map_err(|e| e.to_string())?,
                Err(_) => s.application.port,
            },
            ..s.application
        },
        database: DatabaseSettings {
            url: env::var("DATABASE_URL").unwrap_or(s.database.url),
        },
        debug: match env::var("APP_DEBUG") {
            Ok(debug) => &debug == "true",
            Err(_) => s.debug,
        },
        session: SessionSettings {
            ttl_minutes: match env::var("SESSION_TTL_MINUTES") {
                Ok(minutes) => Some(minutes.parse::<i64>().map_err(|e| e.to_string())?),
                Err(_) => s.session.ttl_minutes,
            },
        },
        vote: VoteSettings {
            down_vote_threshold: match env::var("DOWN_VOTE_THRESHOLD") {
                Ok(threshold) => threshold.parse::<u64>().map_err(|e| e.to_string())?,
                Err(_) => s.vote.down_vote_threshold,
            },
        },
        ..s
    })
}

fn get_env_var(key: &str) -> Result<String, String> {
    env::var(key).map_err(|e| e.to_string())
}
