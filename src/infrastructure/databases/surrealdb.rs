use crate::config::SurrealDbConfig;

use surrealdb::{
    Error, Surreal,
    engine::remote::ws::{Client, Ws},
    opt::auth::Root,
};

pub async fn connect(db_config: &SurrealDbConfig) -> Result<Surreal<Client>, Error> {
    let address = format!("{}:{}", db_config.host, db_config.port);

    let db = Surreal::new::<Ws>(address.as_str()).await?;

    db.signin(Root {
        username: db_config.username.as_str(),
        password: db_config.password.as_str(),
    })
    .await?;

    db.use_ns(db_config.namespace.as_str())
        .use_db(db_config.database.as_str())
        .await?;

    tracing::info!(
        address = %address,
        namespace = %db_config.namespace,
        database = %db_config.database,
        "connected to surrealdb"
    );

    Ok(db)
}
