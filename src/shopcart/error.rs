use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    /// The cart was reached outside of an active [`crate::session::CartSession`].
    #[error("Cart accessed outside of an active cart session")]
    NotInitialized,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CartError>;
