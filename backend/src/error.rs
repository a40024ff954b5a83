use rocket::http::Status;
use rocket::response::Responder;
use shared::PollError;
use thiserror::Error;
use tracing::error;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    NotFound(#[from] PollError),
    #[error("Internal error: {0}")]
    Internal(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Poll(e) => ApiError::NotFound(e),
            e => ApiError::Internal(e),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        let body = match self {
            ApiError::NotFound(e) => e.to_string(),
            ApiError::Internal(e) => {
                error!("{} {} failed: {}", req.method(), req.uri(), e);
                "Internal error".to_string()
            }
        };

        rocket::Response::build_from(body.respond_to(req)?)
            .status(status)
            .ok()
    }
}
