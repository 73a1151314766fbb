use super::messages::Message;
use std::path::PathBuf;
use thiserror::Error;

/// Failure converting a single file.
///
/// The converters themselves never fail; every variant here comes from the
/// file handling around them.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{msg}: {source}", msg = Message::FileReadFailed(.path.display().to_string()))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{msg}: {source}", msg = Message::FileWriteFailed(.path.display().to_string()))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", Message::OutputExists(.path.display().to_string()))]
    OutputExists { path: PathBuf },

    #[error("{}", Message::SameInputAndOutput(.path.display().to_string()))]
    UnsupportedInput { path: PathBuf },

    #[error("{}", Message::ConversionTaskFailed(.0.clone()))]
    Task(String),
}
