use ag_core::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    /// A generation is already in flight.
    Busy,
    Core(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Core(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Busy => StatusCode::CONFLICT,
            ApiError::Core(err) => match err {
                Error::InvalidRequest(_) | Error::Serialization(_) => StatusCode::BAD_REQUEST,
                Error::MissingCredential => StatusCode::SERVICE_UNAVAILABLE,
                Error::QuotaExhausted(_) => StatusCode::TOO_MANY_REQUESTS,
                Error::InvalidCredential(_) | Error::EmptyResponse | Error::Transport(_) | Error::Http(_) => {
                    StatusCode::BAD_GATEWAY
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::Busy => "An article is already being generated. Please wait for it to finish.".to_string(),
            ApiError::Core(err) => err.user_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
