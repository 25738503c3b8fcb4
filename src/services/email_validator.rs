use validator::ValidateEmail;

use crate::domain::{error::AppResult, services::email_validator::EmailValidator};

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok(email.validate_email())
    }
}
