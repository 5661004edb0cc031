use super::json_error_response;
use anyhow::anyhow;
use courtside_application::error::{AppError, BError};
pub use courtside_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
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
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn bad_request(message: &str) -> Self {
        Self::OtherWithStatus(anyhow!("{message}"), Status::BadRequest)
    }
}

fn parameter_status(err: &ParameterError) -> Status {
    use ParameterError as E;
    match err {
        E::Credentials | E::Unauthorized => Status::Unauthorized,
        E::Forbidden | E::Banned | E::EmailNotConfirmed => Status::Forbidden,
        E::UserDoesNotExist => Status::NotFound,
        E::SlotConflict | E::ReviewExists | E::UserExists => Status::Conflict,
        E::Repo(err) => repo_status(err),
        _ => Status::BadRequest,
    }
}

fn repo_status(err: &RepoError) -> Status {
    match err {
        RepoError::NotFound => Status::NotFound,
        RepoError::AlreadyExists => Status::Conflict,
        _ => Status::InternalServerError,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> response::Result<'o> {
        let status = match &self {
            Error::App(AppError::Business(BError::Usecase(err))) => parameter_status(err),
            Error::App(AppError::Business(BError::Repo(err))) => repo_status(err),
            Error::OtherWithStatus(_, status) => *status,
            _ => Status::InternalServerError,
        };
        if status == Status::InternalServerError {
            error!("Error: {self}");
            return json_error_response(req, &"Internal server error", status);
        }
        json_error_response(req, &self, status)
    }
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

impl From<time::error::Parse> for Error {
    fn from(_: time::error::Parse) -> Self {
        Self::bad_request("Invalid date (expected YYYY-MM-DD)")
    }
}
