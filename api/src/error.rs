//! Server-side error type for the api crate's internal helpers.
//!
//! Server functions surface everything as `ServerFnError` strings at the boundary;
//! this type exists so the storage internals can use `?` across validation and io
//! failures before that mapping happens.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Only image files are allowed (jpg, png, gif, webp, svg)")]
    InvalidImageType,

    #[error("File size must be less than 5MB")]
    ImageTooLarge,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
