use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the fetch-cache-aggregate engine.
///
/// Upstream variants carry the resource name and the query that failed so a
/// log line is enough to replay the request.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request for {resource} ({params}) failed: {source}")]
    Upstream {
        resource: &'static str,
        params: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request for {resource} ({params}) returned HTTP {status}")]
    Status {
        resource: &'static str,
        params: String,
        status: u16,
    },

    #[error("could not decode {resource} ({params}): {source}")]
    Decode {
        resource: &'static str,
        params: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no {what} for {scope}")]
    MissingData { what: &'static str, scope: String },

    #[error("no race sessions for year {0}")]
    NoRaceSessions(i32),

    #[error("cached value under {key} has an unexpected shape: {source}")]
    Cache {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn missing(what: &'static str, scope: impl Into<String>) -> Self {
        Self::MissingData {
            what,
            scope: scope.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingData { .. } | Error::NoRaceSessions(_) => StatusCode::NOT_FOUND,
            Error::Upstream { .. } | Error::Status { .. } | Error::Decode { .. } => {
                StatusCode::BAD_GATEWAY
            }
            Error::Cache { .. } | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub body: Json<Value>,
}

impl ApiError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(json!({"error": message})),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self::new(error.status_code(), &error.to_string())
    }
}
