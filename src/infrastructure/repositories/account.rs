use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::account::{Account, CreateAccount};
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountCreate};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const ACCOUNT: &str = "account";

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn add(&self, account: CreateAccount) -> RepositoryResult<Account> {
        let account: Option<SurrealAccount> = self
            .db
            .create(ACCOUNT)
            .content(SurrealAccountCreate::from(account))
            .await?;

        account
            .map(Into::into)
            .ok_or(RepositoryError::NotCreated(ACCOUNT))
    }
}

#[cfg(test)]
pub mod mock {
    use tokio::sync::Mutex;

    use super::*;

    /// In-memory store assigning sequential ids.
    #[derive(Default)]
    pub struct AccountRepositoryImpl {
        pub accounts: Mutex<Vec<Account>>,
    }

    #[async_trait]
    impl AccountRepository for AccountRepositoryImpl {
        async fn add(&self, account: CreateAccount) -> RepositoryResult<Account> {
            let mut accounts = self.accounts.lock().await;

            let acc = Account {
                id: (accounts.len() + 1).to_string(),
                name: account.name,
                email: account.email,
                password: account.password,
            };

            accounts.push(acc.clone());

            Ok(acc)
        }
    }

    pub struct FailingAccountRepository;

    #[async_trait]
    impl AccountRepository for FailingAccountRepository {
        async fn add(&self, _account: CreateAccount) -> RepositoryResult<Account> {
            Err(RepositoryError::NotCreated(ACCOUNT))
        }
    }
}
