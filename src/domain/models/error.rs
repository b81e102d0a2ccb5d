use thiserror::Error;

/// Rejections raised before any request leaves the session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no ingredients")]
    NoIngredients,
    #[error("a recipe request is already in flight")]
    RequestInFlight,
    #[error("no recipe request is in flight")]
    NoRequestInFlight,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("inference endpoint returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("inference endpoint is unreachable: {0}")]
    Transport(String),
    #[error("inference endpoint returned malformed JSON: {0}")]
    Decode(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecipeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Network(#[from] NetworkError),
}
