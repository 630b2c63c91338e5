use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use super::dto::Message;

/// Error returned from HTTP handlers.
#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Message>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(Message::new(message)),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("Invalid Intent: {0}")]
    InvalidIntent(String),
    #[error("Ticker request failed: {0}")]
    UpstreamFetchFailure(#[from] reqwest::Error),
    #[error("Malformed quote data: {0}")]
    MalformedQuoteData(String),
}

impl From<SkillError> for Error {
    fn from(error: SkillError) -> Self {
        let code = match error {
            SkillError::InvalidIntent(_) => StatusCode::BAD_REQUEST,
            SkillError::UpstreamFetchFailure(_) | SkillError::MalformedQuoteData(_) => {
                StatusCode::BAD_GATEWAY
            }
        };
        Self::new(code, &error.to_string())
    }
}
