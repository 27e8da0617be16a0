//! Response payloads and JSON encoding.
//!
//! # Responsibilities
//! - Define the canned stub payloads
//! - Encode payloads as compact UTF-8 JSON
//! - Set `Content-Type` and an exact `Content-Length`
//!
//! # Design Decisions
//! - Bodies are fully buffered; `Content-Length` is always the encoded length
//! - Key order is fixed by field order: `status`, then `service` or `message`

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Content type sent with every JSON body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "kenetg-backend";

/// JSON body of a stub response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayloadBody {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// A canned response: HTTP status plus JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubPayload {
    status_code: StatusCode,
    body: PayloadBody,
}

impl StubPayload {
    pub fn health() -> Self {
        Self {
            status_code: StatusCode::OK,
            body: PayloadBody {
                status: "ok",
                service: Some(SERVICE_NAME),
                message: None,
            },
        }
    }

    pub fn ok_message(message: &'static str) -> Self {
        Self {
            status_code: StatusCode::OK,
            body: PayloadBody {
                status: "ok",
                service: None,
                message: Some(message),
            },
        }
    }

    pub fn error(status_code: StatusCode, message: &'static str) -> Self {
        Self {
            status_code,
            body: PayloadBody {
                status: "error",
                service: None,
                message: Some(message),
            },
        }
    }

    pub fn not_found() -> Self {
        Self::error(StatusCode::NOT_FOUND, "not found")
    }

    pub fn unsupported_method() -> Self {
        Self::error(StatusCode::NOT_IMPLEMENTED, "unsupported method")
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn body(&self) -> &PayloadBody {
        &self.body
    }
}

impl IntoResponse for StubPayload {
    fn into_response(self) -> Response {
        JsonResponse::new(self.status_code, self.body).into_response()
    }
}

/// Any serializable value sent as a JSON response with explicit length.
#[derive(Debug, Clone)]
pub struct JsonResponse<T> {
    status_code: StatusCode,
    value: T,
}

impl<T: Serialize> JsonResponse<T> {
    pub fn new(status_code: StatusCode, value: T) -> Self {
        Self { status_code, value }
    }
}

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        let bytes = match serde_json::to_vec(&self.value) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode JSON response");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        let length = HeaderValue::from(bytes.len());
        let mut response = Response::new(Body::from(bytes));
        *response.status_mut() = self.status_code;
        let headers = response.headers_mut();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(header::CONTENT_LENGTH, length);
        response
    }
}
