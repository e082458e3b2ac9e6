use crate::error::ServiceError;
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

/// `Json` body whose rejections render as `{"detail": ...}` with 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ServiceError))]
pub struct Payload<T>(pub T);

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::InvalidRequest(rejection.body_text())
    }
}
