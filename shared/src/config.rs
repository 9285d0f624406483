use anyhow::{Context, Result};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST").context("DATABASE_HOST is not set")?,
            port: std::env::var("DATABASE_PORT")
                .context("DATABASE_PORT is not set")?
                .parse::<u16>()
                .context("DATABASE_PORT must be a port number")?,
            username: std::env::var("DATABASE_USERNAME").context("DATABASE_USERNAME is not set")?,
            password: std::env::var("DATABASE_PASSWORD").context("DATABASE_PASSWORD is not set")?,
            database: std::env::var("DATABASE_NAME").context("DATABASE_NAME is not set")?,
        };
        let auth = AuthConfig {
            jwt_secret: std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?,
        };
        let server = ServerConfig {
            port: match std::env::var("PORT") {
                Ok(port) => port.parse::<u16>().context("PORT must be a port number")?,
                Err(_) => 8080,
            },
        };
        Ok(Self {
            database,
            auth,
            server,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

pub struct ServerConfig {
    pub port: u16,
}
