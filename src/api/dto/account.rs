use crate::domain::models::account::Account;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored account as returned to the caller; `password` is the hash.
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    #[schema(examples("6kd1m2zq0c4r8x1yv3hb"))]
    id: String,
    #[schema(examples("your_name"))]
    name: String,
    #[schema(examples("your@email.com"))]
    email: String,
    #[schema(examples("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"))]
    password: String,
}

/// Sign-up payload. Every field is optional on the wire so that presence is
/// checked by the controller rather than by deserialization.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpDTO {
    #[schema(examples("your_name"))]
    pub name: Option<String>,

    #[schema(examples("your@email.com"))]
    pub email: Option<String>,

    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password: Option<String>,

    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password_confirmation: Option<String>,
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
            password: val.password,
        }
    }
}
