/// A stored account. `id` is assigned by the persistence layer and
/// `password` holds the hash, never the submitted plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Account data handed to the add-account use case. `password` is plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Account data handed to the repository. `password` is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}
