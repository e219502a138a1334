//! CloudWatch Logs error types

use thiserror::Error;

/// CloudWatch Logs errors
#[derive(Error, Debug)]
pub enum CloudWatchError {
    #[error("failed to list log streams for {group}: {message}")]
    DescribeStreams { group: String, message: String },

    #[error("failed to fetch log events from {group}/{stream}: {message}")]
    GetEvents {
        group: String,
        stream: String,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CloudWatchError>;
