use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::error::ErrorResponse;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid vote number: {0}. Please choose a number between 1 and 5.")]
    InvalidOption(i32),
    #[error("You already voted. Please wait {0} hour(s) before voting again.")]
    CooldownActive(i64),
    #[error("Store failure: {0}")]
    Store(String),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Store(e.to_string())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let (status, message) = match &self {
            ApiError::InvalidOption(_) => (Status::BadRequest, self.to_string()),
            ApiError::CooldownActive(_) => (Status::TooManyRequests, self.to_string()),
            ApiError::Store(detail) => {
                // Operator visibility only; the caller gets a generic body.
                error!("Store failure: {}", detail);
                (Status::InternalServerError, "An internal server error occurred.".to_string())
            }
        };

        rocket::Response::build_from(Json(ErrorResponse { error: message }).respond_to(req)?)
            .status(status)
            .ok()
    }
}
