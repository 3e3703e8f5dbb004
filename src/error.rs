pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },
}

impl Error {
    /// Map a read failure on `path` to `NotFound` when the file is missing,
    /// keeping every other I/O failure as-is.
    pub(crate) fn from_read(
        err: std::io::Error,
        kind: &'static str,
        path: &std::path::Path,
    ) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound {
                kind,
                name: path.display().to_string(),
            }
        } else {
            Error::Io(err)
        }
    }
}
