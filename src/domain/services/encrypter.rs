use async_trait::async_trait;

use crate::domain::error::AppResult;

#[async_trait]
pub trait Encrypter: 'static + Sync + Send {
    async fn encrypt(&self, plaintext: &str) -> AppResult<String>;
}
