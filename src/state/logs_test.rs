use super::*;

fn entry(id: i64, level: &str) -> LogEntry {
    LogEntry {
        id,
        timestamp: "2026-08-05T12:00:00Z".to_owned(),
        level: level.to_owned(),
        service: "api-gateway".to_owned(),
        message: format!("event {id}"),
        metadata_json: None,
    }
}

fn snapshot() -> Vec<LogEntry> {
    vec![
        entry(1, "INFO"),
        entry(2, "ERROR"),
        entry(3, "warn"),
        entry(4, "WARN"),
        entry(5, "TRACE"),
    ]
}

// =============================================================
// Defaults and snapshot replacement
// =============================================================

#[test]
fn logs_state_defaults() {
    let s = LogsState::default();
    assert!(s.entries.is_empty());
    assert!(s.error.is_none());
    assert!(s.loading);
    assert_eq!(s.filter, LevelFilter::All);
}

#[test]
fn apply_snapshot_replaces_wholesale_and_clears_error() {
    let mut s = LogsState::default();
    s.apply_snapshot(vec![entry(10, "INFO"), entry(11, "WARN")]);
    s.error = Some("Server returned 500".to_owned());

    s.apply_snapshot(vec![entry(99, "ERROR")]);

    assert_eq!(s.entries.len(), 1);
    assert_eq!(s.entries[0].id, 99);
    assert!(s.error.is_none());
    assert!(!s.loading);
}

#[test]
fn apply_snapshot_is_idempotent_for_equal_snapshots() {
    let mut s = LogsState::default();
    s.apply_snapshot(snapshot());
    let before = s.entries.clone();

    s.apply_snapshot(snapshot());

    assert_eq!(s.entries, before);
    assert_eq!(s.visible(), before);
}

// =============================================================
// Poll failures
// =============================================================

#[test]
fn status_error_keeps_rows_and_reports_the_code() {
    let mut s = LogsState::default();
    s.apply_snapshot(snapshot());

    s.apply_poll_error(&PollError::Status(500));

    assert_eq!(s.entries.len(), 5);
    let msg = s.error.expect("error message");
    assert!(msg.contains("500"));
    assert_eq!(msg, "Server returned 500");
}

#[test]
fn transport_error_keeps_rows() {
    let mut s = LogsState::default();
    s.apply_snapshot(snapshot());

    s.apply_poll_error(&PollError::Transport);

    assert_eq!(s.entries.len(), 5);
    assert_eq!(s.error.as_deref(), Some("Failed to connect to backend"));
}

#[test]
fn successful_poll_clears_a_prior_error() {
    let mut s = LogsState::default();
    s.apply_poll_error(&PollError::Transport);

    s.apply_snapshot(snapshot());

    assert!(s.error.is_none());
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_all_is_identity_in_order() {
    let mut s = LogsState::default();
    s.apply_snapshot(snapshot());

    assert_eq!(s.visible(), s.entries);
}

#[test]
fn filter_selects_the_exact_case_subsequence() {
    let mut s = LogsState::default();
    s.apply_snapshot(snapshot());
    s.filter = LevelFilter::Warn;

    let visible = s.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 4);
}

#[test]
fn filter_excludes_case_variants_that_still_style() {
    // "warn" fails the exact-case filter comparison but still maps onto the
    // WARN badge.
    let mut s = LogsState::default();
    s.apply_snapshot(snapshot());
    s.filter = LevelFilter::Warn;

    assert!(s.visible().iter().all(|e| e.level == "WARN"));
    assert_eq!(Severity::classify("warn"), Severity::Warn);
}

#[test]
fn filter_preserves_snapshot_order() {
    let mut s = LogsState::default();
    s.apply_snapshot(vec![
        entry(3, "INFO"),
        entry(1, "INFO"),
        entry(2, "ERROR"),
        entry(7, "INFO"),
    ]);
    s.filter = LevelFilter::Info;

    let ids: Vec<i64> = s.visible().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 1, 7]);
}

#[test]
fn filter_labels_cover_the_selector() {
    let labels: Vec<&str> = LevelFilter::OPTIONS.iter().map(|f| f.label()).collect();
    assert_eq!(labels, vec!["ALL", "INFO", "WARN", "ERROR"]);
}

// =============================================================
// Severity styling
// =============================================================

#[test]
fn severity_classification_is_case_insensitive() {
    assert_eq!(Severity::classify("ERROR"), Severity::Error);
    assert_eq!(Severity::classify("error"), Severity::Error);
    assert_eq!(Severity::classify("Warn"), Severity::Warn);
    assert_eq!(Severity::classify("info"), Severity::Info);
}

#[test]
fn unknown_levels_fall_back_to_neutral() {
    assert_eq!(Severity::classify("TRACE"), Severity::Other);
    assert_eq!(Severity::classify(""), Severity::Other);
    assert_eq!(Severity::Other.badge_class(), "log-feed__badge");
}
