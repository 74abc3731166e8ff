//! Booking body extraction.
//!
//! The booking endpoint accepts the same fields either as JSON or as an
//! `application/x-www-form-urlencoded` form. Any body that does not decode into
//! [`BookingRequest`] is answered with a 400 in the usual `{ "error": ... }`
//! shape instead of axum's plain-text rejection.

use axum::{
    Form, Json, async_trait,
    extract::{FromRequest, Request},
    http::header,
};
use slotbook_core::{errors::InputError, models::appointment::BookingRequest};

use crate::middleware::error_handling::AppError;

#[derive(Debug)]
pub struct BookingBody(pub BookingRequest);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| {
            content_type.starts_with("application/x-www-form-urlencoded")
        })
}

fn malformed(rejection: impl std::fmt::Display) -> AppError {
    tracing::debug!("Undecodable booking body: {}", rejection);
    InputError::MalformedBody.into()
}

#[async_trait]
impl<S> FromRequest<S> for BookingBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request = if is_form(&req) {
            let Form(request) = Form::<BookingRequest>::from_request(req, state)
                .await
                .map_err(malformed)?;
            request
        } else {
            let Json(request) = Json::<BookingRequest>::from_request(req, state)
                .await
                .map_err(malformed)?;
            request
        };

        Ok(BookingBody(request))
    }
}
