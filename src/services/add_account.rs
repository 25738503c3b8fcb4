use std::sync::Arc;

use crate::domain::{
    error::AppResult,
    models::account::{Account, CreateAccount, NewAccount},
    repositories::account::AccountRepository,
    services::{add_account::AddAccount, encrypter::Encrypter},
};

use async_trait::async_trait;

pub struct DbAddAccount {
    encrypter: Arc<dyn Encrypter>,
    repository: Arc<dyn AccountRepository>,
}

impl DbAddAccount {
    pub fn new(encrypter: Arc<dyn Encrypter>, repository: Arc<dyn AccountRepository>) -> Self {
        Self {
            encrypter,
            repository,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    #[tracing::instrument(name = "add_account", skip_all, fields(email = %account.email))]
    async fn add(&self, account: NewAccount) -> AppResult<Account> {
        let password = self.encrypter.encrypt(&account.password).await?;

        let account = CreateAccount {
            name: account.name,
            email: account.email,
            password,
        };

        Ok(self.repository.add(account).await?)
    }
}
