use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Failed to read roster {path}: {source}")]
    RosterRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid roster {path}: {source}")]
    RosterParse {
        path: String,
        source: serde_json::Error,
    },
}
