use super::json_error_response;
use anyhow::anyhow;
use homesit_core::usecases::Error as ParameterError;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::BadRequest)
            }
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Parameter(err) => {
                let status = match &err {
                    ParameterError::Unauthorized => Status::Unauthorized,
                    ParameterError::Forbidden => Status::Forbidden,
                    ParameterError::ProfileDoesNotExist => Status::NotFound,
                    ParameterError::RateLimited => Status::TooManyRequests,
                    ParameterError::GeoCoding(_) | ParameterError::Directory(_) => {
                        error!("Error: {err}");
                        Status::InternalServerError
                    }
                    _ => Status::BadRequest,
                };
                json_error_response(req, &err, status)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
        }
    }
}
