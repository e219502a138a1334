//! CloudWatch Logs tailing for lamtail
//!
//! Implements the refresh loop: every two seconds, re-resolve the most
//! recently active log stream of the function's log group, fetch its newest
//! events, sort them by timestamp and redraw the terminal.
//!
//! # Example
//!
//! ```ignore
//! use lamtail_cloudwatch::{CloudWatchLogs, Screen, Tailer};
//!
//! let source = CloudWatchLogs::new(Some("eu-west-1".to_string())).await;
//! Tailer::new(source, Screen, "my-handler").run().await?;
//! ```

pub mod client;
pub mod error;
pub mod tail;

pub use client::{CloudWatchLogs, LogEntry, LogSource};
pub use error::{CloudWatchError, Result};
pub use tail::{FETCH_LIMIT, REFRESH_INTERVAL, Render, Screen, Tailer, format_entries, log_group_for};
