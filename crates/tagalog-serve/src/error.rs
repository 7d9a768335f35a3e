use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, ServeError>;
