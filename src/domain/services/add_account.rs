use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, NewAccount};

#[async_trait]
pub trait AddAccount: 'static + Sync + Send {
    async fn add(&self, account: NewAccount) -> AppResult<Account>;
}
