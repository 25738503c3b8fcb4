use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub server: ServerConfig,
    pub surrealdb: SurrealDbConfig,
    pub encrypter: EncrypterConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SurrealDbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub namespace: String,
    pub database: String,
    pub migration: bool,
}

/// Argon2 cost parameters. `memory_cost` is expressed in KiB.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct EncrypterConfig {
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Default for EncrypterConfig {
    fn default() -> Self {
        EncrypterConfig {
            memory_cost: argon2::Params::DEFAULT_M_COST,
            time_cost: argon2::Params::DEFAULT_T_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(AppConfig {
                service: ServiceConfig {
                    name: "signup-actix".to_string(),
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                },
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 8080,
                },
                surrealdb: SurrealDbConfig {
                    host: "localhost".to_string(),
                    port: 8000,
                    username: "root".to_string(),
                    password: "root".to_string(),
                    namespace: "signup".to_string(),
                    database: "signup".to_string(),
                    migration: true,
                },
                encrypter: EncrypterConfig::default(),
            }))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/default.toml",
                r#"
                [server]
                port = 9090

                [encrypter]
                time_cost = 3
                "#,
            )?;
            jail.set_env("APP_SERVER__HOST", "0.0.0.0");
            jail.set_env("APP_ENCRYPTER__PARALLELISM", "2");

            let config = AppConfig::load()?;

            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.server.port, 9090);
            assert_eq!(
                config.encrypter,
                EncrypterConfig {
                    memory_cost: argon2::Params::DEFAULT_M_COST,
                    time_cost: 3,
                    parallelism: 2,
                }
            );
            assert_eq!(config.service.name, "signup-actix");

            Ok(())
        });
    }
}
