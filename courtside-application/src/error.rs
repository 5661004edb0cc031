use courtside_core::{repositories::Error as RepoError, usecases::Error as UsecaseError};
use std::io;
use thiserror::Error;

pub use courtside_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<UsecaseError> for AppError {
    fn from(err: UsecaseError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Usecase(UsecaseError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<UsecaseError> for BError {
    fn from(err: UsecaseError) -> Self {
        // Unwrap repository errors that have been passed
        // through a use case or transaction
        match err {
            UsecaseError::Repo(err) => Self::Repo(err),
            err => Self::Usecase(err),
        }
    }
}
