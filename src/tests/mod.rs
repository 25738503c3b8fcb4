
pub mod utils;

use ::surrealdb::{Surreal, engine::remote::ws::Client};

use std::sync::Arc;

use serde::Deserialize;
use surrealdb_migrations::MigrationRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::{
    surrealdb::{SURREALDB_PORT, SurrealDb},
    testcontainers::runners::AsyncRunner,
};

use crate::config::EncrypterConfig;
use crate::services::encrypter::Argon2Encrypter;
use crate::{MIGRATIONS_DIR, infrastructure::databases::surrealdb};
use crate::{config::AppConfig, container::Container};

use rstest::*;

struct Database {
    pub connection: Surreal<Client>,
    pub container: ContainerAsync<SurrealDb>,
}

pub struct TestContext {
    pub db: Database,
    pub container: Arc<Container>,
}

#[fixture]
async fn context() -> TestContext {
    let db_container = SurrealDb::default()
        .with_tag("latest")
        .start()
        .await
        .unwrap();

    let mut config = AppConfig::load().unwrap();

    config.surrealdb.host = "localhost".to_string();
    config.surrealdb.port = db_container
        .get_host_port_ipv4(SURREALDB_PORT)
        .await
        .unwrap();

    let db_connection = surrealdb::connect(&config.surrealdb).await.unwrap();

    let _ = MigrationRunner::new(&db_connection)
        .load_files(&MIGRATIONS_DIR)
        .up()
        .await;

    let encrypter = Argon2Encrypter::new(&EncrypterConfig {
        memory_cost: 8,
        time_cost: 1,
        parallelism: 1,
    })
    .unwrap();

    let db = Database {
        connection: db_connection.clone(),
        container: db_container,
    };

    let container = Arc::new(Container::new(db_connection, encrypter));

    TestContext { db, container }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    code: u16,
    message: String,
}
