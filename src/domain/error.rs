use actix_web::{
    HttpResponse, ResponseError,
    error::BlockingError,
    http::{StatusCode, header::ContentType},
    web::Json,
};

use actix_web::error::JsonPayloadError;

use serde::Serialize;
use utoipa::ToSchema;

use argon2::password_hash::errors::Error as PasswordHashError;

use crate::domain::repositories::repository::RepositoryError;

pub type AppResult<T> = core::result::Result<T, AppError>;

macro_rules! static_error {
    ($name:ident, $status:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name(message: impl ToString) -> AppError {
            AppError {
                message: message.to_string(),
                code: $status.as_u16(),
                trace: None,
            }
        }
    };

    ($name:ident, $status:expr, $default:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name() -> AppError {
            AppError {
                message: $default.to_string(),
                code: $status.as_u16(),
                trace: None,
            }
        }
    };
}

#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct AppError {
    pub message: String,
    pub code: u16,
    #[serde(skip)]
    pub trace: Option<String>,
}

#[rustfmt::skip]
pub mod message {
    pub static INTERNAL_ERROR: &str = "The server encountered an unexpected condition that prevented it from fulfilling the request";
    pub static PASSWORD_MISMATCH: &str = "Password and password confirmation don't match";
}

#[rustfmt::skip]
impl AppError {
    // 1. Errors with Custom Message
    static_error!(BadRequest, StatusCode::BAD_REQUEST);

    // 2. Errors with Default Message
    static_error!(InternalError, StatusCode::INTERNAL_SERVER_ERROR, message::INTERNAL_ERROR);
    static_error!(PasswordMismatch, StatusCode::BAD_REQUEST, message::PASSWORD_MISMATCH);

    #[allow(non_snake_case)]
    pub fn MissingParam(param: &str) -> AppError {
        AppError::BadRequest(format!("Missing param: {param}"))
    }

    #[allow(non_snake_case)]
    pub fn InvalidParam(param: &str) -> AppError {
        AppError::BadRequest(format!("Invalid param: {param}"))
    }

    pub fn trace(self, message: &str) -> AppError {
        AppError {
            code: self.code,
            message: self.message,
            trace: Some(message.to_owned()),
        }
    }

    pub fn example_500() -> AppError {
        AppError::InternalError()
    }

    pub fn example_400() -> AppError {
        AppError::MissingParam("passwordConfirmation")
    }
}

impl std::error::Error for AppError {}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {}: {}", self.code, self.message)
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        if let Some(trace) = &self.trace {
            tracing::error!(code = self.code, trace = %trace, "request failed");
        }

        HttpResponse::build(self.status_code())
            .content_type(ContentType::json())
            .json(Json(self))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<RepositoryError> for AppError {
    fn from(error: RepositoryError) -> Self {
        AppError::InternalError().trace(&error.to_string())
    }
}

impl From<PasswordHashError> for AppError {
    fn from(error: PasswordHashError) -> Self {
        AppError::InternalError().trace(&error.to_string())
    }
}

impl From<BlockingError> for AppError {
    fn from(error: BlockingError) -> Self {
        AppError::InternalError().trace(&error.to_string())
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> Self {
        AppError::BadRequest(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{Value, json};

    #[test]
    fn test_param_errors_are_bad_requests() {
        assert_eq!(
            AppError::MissingParam("name"),
            AppError {
                message: "Missing param: name".to_string(),
                code: 400,
                trace: None,
            }
        );
        assert_eq!(AppError::InvalidParam("email").message, "Invalid param: email");
        assert_eq!(AppError::PasswordMismatch().code, 400);
    }

    #[test]
    fn test_repository_error_becomes_internal_error() {
        let error: AppError = RepositoryError::NotCreated("account").into();

        assert_eq!(error.code, 500);
        assert_eq!(error.message, message::INTERNAL_ERROR);
        assert_eq!(
            error.trace.as_deref(),
            Some("no record returned when creating in `account`")
        );
    }

    #[actix_web::test]
    async fn test_trace_is_not_serialized() {
        let error = AppError::InternalError().trace("connection refused");

        let res = error.error_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(res.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            body,
            json!({ "message": message::INTERNAL_ERROR, "code": 500 })
        );
    }
}
