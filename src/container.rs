use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::api::controllers::signup::SignUpController;

use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::add_account::AddAccount;
use crate::domain::services::email_validator::EmailValidator;
use crate::domain::services::encrypter::Encrypter;

use crate::services::add_account::DbAddAccount;
use crate::services::email_validator::EmailValidatorAdapter;
use crate::services::encrypter::Argon2Encrypter;

use crate::infrastructure::repositories::account::AccountRepositoryImpl;

pub struct Container {
    pub signup_controller: Arc<SignUpController>,
}

impl Container {
    pub fn new(conn: Surreal<Client>, encrypter: Argon2Encrypter) -> Self {
        let db = Arc::new(conn);

        Container {
            signup_controller: signup_controller(db, encrypter),
        }
    }
}

fn signup_controller(db: Arc<Surreal<Client>>, encrypter: Argon2Encrypter) -> Arc<SignUpController> {
    let email_validator: Arc<dyn EmailValidator> = Arc::new(EmailValidatorAdapter);

    Arc::new(SignUpController::new(
        email_validator,
        add_account(db, encrypter),
    ))
}

fn add_account(db: Arc<Surreal<Client>>, encrypter: Argon2Encrypter) -> Arc<dyn AddAccount> {
    let encrypter: Arc<dyn Encrypter> = Arc::new(encrypter);

    let account_repository: Arc<dyn AccountRepository> = Arc::new(AccountRepositoryImpl::new(db));

    Arc::new(DbAddAccount::new(encrypter, account_repository))
}
