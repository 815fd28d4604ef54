#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A single server-side log record.
///
/// Read-only to the client; the whole list is replaced on every successful
/// poll, so there is no merging or deduplication across snapshots.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LogEntry {
    /// Stable row key, unique within a snapshot.
    pub id: i64,
    /// Instant encoding; parsed only for display formatting.
    pub timestamp: String,
    /// Free-text severity label. ERROR/WARN/INFO get distinct styling.
    pub level: String,
    pub service: String,
    pub message: String,
    /// Opaque to the client. Carried for forward compatibility, never
    /// rendered.
    #[serde(default)]
    pub metadata_json: Option<String>,
}
