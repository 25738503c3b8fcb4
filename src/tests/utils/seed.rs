use ::surrealdb::{Surreal, engine::remote::ws::Client};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StoredAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub async fn stored_accounts(conn: &Surreal<Client>) -> Vec<StoredAccount> {
    conn.query("SELECT name, email, password FROM account")
        .await
        .unwrap()
        .take(0)
        .unwrap()
}
