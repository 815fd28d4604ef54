#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

use crate::net::api::PollError;
use crate::net::types::LogEntry;

/// State for the log feed panel.
///
/// `entries` is the latest server snapshot in the order it was received;
/// `error` doubles as the connection-health indicator. `loading` is only
/// true before the first poll resolves, so the empty state can tell "no
/// data yet" from "empty snapshot".
#[derive(Clone, Debug)]
pub struct LogsState {
    pub entries: Vec<LogEntry>,
    pub error: Option<String>,
    pub loading: bool,
    pub filter: LevelFilter,
}

impl Default for LogsState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            error: None,
            loading: true,
            filter: LevelFilter::All,
        }
    }
}

impl LogsState {
    /// Replace the snapshot wholesale and mark the connection healthy.
    pub fn apply_snapshot(&mut self, entries: Vec<LogEntry>) {
        self.entries = entries;
        self.error = None;
        self.loading = false;
    }

    /// Record a failed poll. The previous snapshot stays on screen.
    pub fn apply_poll_error(&mut self, err: &PollError) {
        self.error = Some(err.to_string());
        self.loading = false;
    }

    /// Entries admitted by the active filter, in snapshot order.
    pub fn visible(&self) -> Vec<LogEntry> {
        self.entries
            .iter()
            .filter(|e| self.filter.admits(e))
            .cloned()
            .collect()
    }
}

/// Severity filter for the log table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LevelFilter {
    #[default]
    All,
    Info,
    Warn,
    Error,
}

impl LevelFilter {
    /// Selector order as rendered in the filter bar.
    pub const OPTIONS: [Self; 4] = [Self::All, Self::Info, Self::Warn, Self::Error];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Whether an entry passes this filter. The comparison against `level`
    /// is exact-case; badge styling elsewhere is case-folded.
    pub fn admits(self, entry: &LogEntry) -> bool {
        match self {
            Self::All => true,
            _ => entry.level == self.label(),
        }
    }
}

/// Visual treatment for a level badge. Matching is case-insensitive and
/// unknown levels fall back to the neutral treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warn,
    Info,
    Other,
}

impl Severity {
    pub fn classify(level: &str) -> Self {
        match level.to_ascii_uppercase().as_str() {
            "ERROR" => Self::Error,
            "WARN" => Self::Warn,
            "INFO" => Self::Info,
            _ => Self::Other,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Error => "log-feed__badge log-feed__badge--error",
            Self::Warn => "log-feed__badge log-feed__badge--warn",
            Self::Info => "log-feed__badge log-feed__badge--info",
            Self::Other => "log-feed__badge",
        }
    }
}
