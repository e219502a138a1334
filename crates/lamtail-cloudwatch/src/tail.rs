//! The refresh loop
//!
//! Every cycle re-resolves the most recently active stream, fetches the
//! newest events, sorts them by timestamp and redraws the whole screen.
//! Nothing carries over between cycles except the target identity, so a
//! burst of more than [`FETCH_LIMIT`] events within one interval pushes the
//! older ones out of view. That window loss is a known limitation of the
//! full-replace design.

use crate::client::{LogEntry, LogSource};
use crate::error::{CloudWatchError, Result};
use chrono::{Local, TimeZone};
use std::io::Write;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Time between refresh cycles.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(2000);

/// Maximum number of events fetched per cycle, tail-anchored.
pub const FETCH_LIMIT: i32 = 100;

/// The log group Lambda writes a function's logs to.
pub fn log_group_for(function_name: &str) -> String {
    format!("/aws/lambda/{function_name}")
}

/// Format ordered entries for display.
///
/// Each entry becomes `[localized-timestamp] message`. Messages keep their
/// own trailing newlines; nothing is inserted between entries.
pub fn format_entries(entries: &[LogEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("[{}] {}", format_timestamp(entry.timestamp), entry.message))
        .collect()
}

fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => millis.to_string(),
    }
}

/// Where formatted log output goes.
pub trait Render: Send {
    /// Replace everything previously rendered with `output`.
    fn replace(&mut self, output: &str) -> std::io::Result<()>;
}

/// Renders to the terminal, clearing the whole screen before each draw.
pub struct Screen;

impl Render for Screen {
    fn replace(&mut self, output: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout();
        crossterm::execute!(
            stdout,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
            crossterm::cursor::MoveTo(0, 0),
        )?;
        write!(stdout, "{output}")?;
        stdout.flush()
    }
}

/// Tails one function's log group forever.
pub struct Tailer<S, R> {
    source: S,
    render: R,
    group: String,
    interval: Duration,
    limit: i32,
}

impl<S: LogSource, R: Render> Tailer<S, R> {
    pub fn new(source: S, render: R, function_name: &str) -> Self {
        Self {
            source,
            render,
            group: log_group_for(function_name),
            interval: REFRESH_INTERVAL,
            limit: FETCH_LIMIT,
        }
    }

    /// Override the poll interval. Tests only; the tool itself always
    /// refreshes at [`REFRESH_INTERVAL`].
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Fetch, order and render one cycle's worth of events.
    ///
    /// A group with no streams yet renders as empty output.
    pub async fn cycle(&mut self) -> Result<()> {
        let mut entries = match self.source.latest_stream(&self.group).await? {
            Some(stream) => {
                self.source
                    .latest_events(&self.group, &stream, self.limit)
                    .await?
            }
            None => Vec::new(),
        };

        // CloudWatch does not guarantee return order
        entries.sort_by_key(|entry| entry.timestamp);

        self.render.replace(&format_entries(&entries))?;
        Ok(())
    }

    /// Run cycles forever, 2 seconds apart.
    ///
    /// A provider failure is logged and the next cycle is attempted after
    /// the usual interval; a render failure (stdout gone) aborts. There is
    /// no other way out of the loop.
    pub async fn run(mut self) -> Result<()> {
        loop {
            if let Err(e) = self.cycle().await {
                match e {
                    CloudWatchError::Io(e) => return Err(CloudWatchError::Io(e)),
                    provider => warn!(error = %provider, "refresh cycle failed"),
                }
            }
            sleep(self.interval).await;
        }
    }
}
