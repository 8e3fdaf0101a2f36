//! src/error.rs

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::ValidationError;

pub type IntakeResult<T> = Result<T, Error>;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// Why a contact form was turned down
#[derive(thiserror::Error, Debug)]
pub enum ContactFormError {
    #[error(transparent)]
    InvalidFields(#[from] ValidationError),
    #[error(transparent)]
    MalformedPayload(#[from] JsonPayloadError),
}

/// Why a newsletter signup was turned down
#[derive(thiserror::Error, Debug)]
pub enum SubscriptionError {
    #[error(transparent)]
    InvalidEmail(#[from] ValidationError),
    #[error(transparent)]
    MalformedPayload(#[from] JsonPayloadError),
    #[error("Email already subscribed")]
    AlreadySubscribed,
}

#[derive(thiserror::Error)]
pub enum Error {
    #[error("Invalid form data")]
    ContactFormError(#[from] ContactFormError),
    #[error("Invalid email or already subscribed")]
    SubscriptionError(#[from] SubscriptionError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// JSON body of every rejected request
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Error {
    /// Details are only shared for rejections the client can fix.
    fn details(&self) -> Option<String> {
        match self {
            Error::ContactFormError(e) => Some(e.to_string()),
            Error::SubscriptionError(e) => Some(e.to_string()),
            Error::UnexpectedError(_) => None,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::ContactFormError(_) | Error::SubscriptionError(_) => StatusCode::BAD_REQUEST,
            Error::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            Error::UnexpectedError(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error,
            details: self.details(),
        })
    }
}
