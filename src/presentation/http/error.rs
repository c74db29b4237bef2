use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// One entry in the `errors` list of a 400/404 body. `field` is a path into
/// the offending payload, so clients key off `field[0]`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub field: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub messages: Vec<String>,
}

impl FieldError {
    pub fn new(location: &'static str, field: &str, message: impl Into<String>) -> Self {
        Self {
            field: vec![field.to_string()],
            location: Some(location.to_string()),
            messages: vec![message.into()],
        }
    }

    fn bare(message: impl Into<String>) -> Self {
        Self {
            field: Vec::new(),
            location: None,
            messages: vec![message.into()],
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: u16,
    #[serde(rename = "statusText", skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    errors: Vec<FieldError>,
    message: Option<String>,
}

impl HttpError {
    /// 400 with a structured per-field error list.
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            errors,
            message: None,
        }
    }

    /// 400 carrying a single message without field coordinates.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            errors: vec![FieldError::bare(message)],
            message: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            errors: vec![FieldError::bare("The resource requested does not exist")],
            message: None,
        }
    }

    pub fn invalid_uri() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            errors: vec![FieldError::bare("The URI requested is invalid")],
            message: None,
        }
    }

    /// 500 with a deliberately generic body; the cause only goes to the log.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            errors: Vec::new(),
            message: Some("Internal Server Error".to_string()),
        }
    }

    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::bad_request(msg),
            ApplicationError::NotFound(_) => Self::not_found(),
            ApplicationError::Domain(domain_err) => match domain_err {
                DomainError::Validation(msg) => Self::bad_request(msg),
                DomainError::NotFound(_) => Self::not_found(),
                DomainError::Conflict(_) | DomainError::Persistence(_) => {
                    tracing::error!(error = %domain_err, "persistence failure");
                    Self::internal()
                }
            },
            ApplicationError::Conflict(_) | ApplicationError::Infrastructure(_) => {
                tracing::error!(error = %err, "internal failure");
                Self::internal()
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status_text = if self.message.is_none() {
            Some(
                self.status
                    .canonical_reason()
                    .unwrap_or("error")
                    .to_string(),
            )
        } else {
            None
        };
        let payload = ErrorResponse {
            status: self.status.as_u16(),
            status_text,
            errors: self.errors,
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
