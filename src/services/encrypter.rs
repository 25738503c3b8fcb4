use actix_web::web;
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;

use crate::config::EncrypterConfig;
use crate::domain::{error::AppResult, services::encrypter::Encrypter};

/// Salted Argon2id hasher producing PHC strings.
#[derive(Clone)]
pub struct Argon2Encrypter {
    argon2: Argon2<'static>,
}

impl Argon2Encrypter {
    pub fn new(config: &EncrypterConfig) -> Result<Self, argon2::Error> {
        let params = Params::new(
            config.memory_cost,
            config.time_cost,
            config.parallelism,
            None,
        )?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

#[async_trait]
impl Encrypter for Argon2Encrypter {
    async fn encrypt(&self, plaintext: &str) -> AppResult<String> {
        let argon2 = self.argon2.clone();
        let plaintext = plaintext.to_owned();

        let hash = web::block(move || {
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(plaintext.as_bytes(), &salt)
                .map(|hash| hash.to_string())
        })
        .await??;

        Ok(hash)
    }
}
