use thiserror::Error;

/// Errors that abort a data load.
///
/// Row-level problems never surface here; they are coerced or counted in the
/// [`LoadReport`](crate::LoadReport).
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error opening or reading the source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV that the reader could not recover from.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column the loader cannot do without is absent from the header.
    #[error("missing required column '{column}' (mapped from '{field}')")]
    MissingColumn { field: &'static str, column: String },

    /// The blocking load task panicked or was cancelled.
    #[error("load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
