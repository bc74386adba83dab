use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] roistat_core::Error),

    #[error("{0}")]
    Io(#[from] roistat_io::IoError),

    #[error("invalid {what}: {message}")]
    Argument { what: &'static str, message: String },

    #[error("image has no pixels to select")]
    EmptyImage,

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
