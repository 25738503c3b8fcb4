use std::sync::Arc;

use crate::api::dto::account::{AccountDTO, SignUpDTO};
use crate::api::error::ApiResult;
use crate::api::middlewares::json::Json;
use crate::domain::error::{AppError, AppResult};
use crate::domain::models::account::NewAccount;
use crate::domain::services::{add_account::AddAccount, email_validator::EmailValidator};

use actix_web::{HttpResponse, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(signup);
}

pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    /// Checks run in order and stop at the first failure. Collaborator
    /// failures are reported as a bare internal error.
    pub async fn handle(&self, request: SignUpDTO) -> ApiResult {
        let name = required("name", request.name)?;
        let email = required("email", request.email)?;
        let password = required("password", request.password)?;
        let password_confirmation =
            required("passwordConfirmation", request.password_confirmation)?;

        if !self.email_validator.is_valid(&email).map_err(server_error)? {
            return Err(AppError::InvalidParam("email"));
        }

        if password != password_confirmation {
            return Err(AppError::PasswordMismatch());
        }

        let account = self
            .add_account
            .add(NewAccount {
                name,
                email,
                password,
            })
            .await
            .map_err(server_error)?;

        Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
    }
}

/// Absent, `null` and empty values all count as missing.
fn required(field: &str, value: Option<String>) -> AppResult<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::MissingParam(field)),
    }
}

fn server_error(error: AppError) -> AppError {
    let trace = error.trace.clone().unwrap_or_else(|| error.to_string());

    AppError::InternalError().trace(&trace)
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = SignUpDTO,
    tag = "Account",
)]
#[post("/signup")]
pub async fn signup(
    payload: Json<SignUpDTO>,
    controller: State<Arc<SignUpController>>,
) -> ApiResult {
    controller.handle(payload.into_inner()).await
}
