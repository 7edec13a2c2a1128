use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Browser is unavailable: {0}")]
    Unavailable(String),

    #[error("Browser session failed: {0}")]
    Session(String),

    #[error("Navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    #[error("Page load timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("Failed to capture page source: {0}")]
    Source(String),
}

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Could not start the browser for this batch")]
    BrowserUnavailable(#[source] FetchError),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode export row: {0}")]
    Csv(#[from] csv::Error),
}
