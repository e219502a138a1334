//! CloudWatch Logs client wrapper
//!
//! Narrow read-only view of the CloudWatch Logs API: the single most
//! recently active stream of a log group, and the newest events of that
//! stream. Kept behind a trait so the tail loop can be driven by a fake in
//! tests.

use crate::error::{CloudWatchError, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_cloudwatchlogs::types::OrderBy;

/// One log line fetched from CloudWatch Logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Event time in epoch milliseconds.
    pub timestamp: i64,

    pub message: String,
}

/// Read-only view of the logging provider used by the tail loop.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Name of the most recently active stream in `group`, if any.
    ///
    /// A group with no streams is the normal state for a function that has
    /// never been invoked, not an error.
    async fn latest_stream(&self, group: &str) -> Result<Option<String>>;

    /// The newest events of `stream`, at most `limit`, in no particular
    /// order.
    async fn latest_events(
        &self,
        group: &str,
        stream: &str,
        limit: i32,
    ) -> Result<Vec<LogEntry>>;
}

/// CloudWatch Logs backed implementation of [`LogSource`].
pub struct CloudWatchLogs {
    client: aws_sdk_cloudwatchlogs::Client,
}

impl CloudWatchLogs {
    /// Build a client, overriding the environment's default region when one
    /// is given.
    pub async fn new(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let config = loader.load().await;

        Self {
            client: aws_sdk_cloudwatchlogs::Client::new(&config),
        }
    }
}

#[async_trait]
impl LogSource for CloudWatchLogs {
    async fn latest_stream(&self, group: &str) -> Result<Option<String>> {
        let response = self
            .client
            .describe_log_streams()
            .log_group_name(group)
            .order_by(OrderBy::LastEventTime)
            .descending(true)
            .limit(1)
            .send()
            .await
            .map_err(|e| CloudWatchError::DescribeStreams {
                group: group.to_string(),
                message: e.to_string(),
            })?;

        Ok(response
            .log_streams
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|stream| stream.log_stream_name))
    }

    async fn latest_events(
        &self,
        group: &str,
        stream: &str,
        limit: i32,
    ) -> Result<Vec<LogEntry>> {
        // start_from_head(false) anchors the fetch at the newest events
        let response = self
            .client
            .get_log_events()
            .log_group_name(group)
            .log_stream_name(stream)
            .start_from_head(false)
            .limit(limit)
            .send()
            .await
            .map_err(|e| CloudWatchError::GetEvents {
                group: group.to_string(),
                stream: stream.to_string(),
                message: e.to_string(),
            })?;

        let entries = response
            .events
            .unwrap_or_default()
            .into_iter()
            .map(|event| LogEntry {
                timestamp: event.timestamp.unwrap_or(0),
                message: event.message.unwrap_or_default(),
            })
            .collect();

        Ok(entries)
    }
}
