//! JSON output for captures.
//!
//! Serializes a capture to JSON for scripting and piping.

use serde::Serialize;

use crate::scan::EntryRecord;
use crate::snapshot::Capture;

#[derive(Serialize)]
struct CaptureView<'a> {
    captured_at: &'a str,
    timestamp: i64,
    entry_count: usize,
    skipped: usize,
    unavailable: bool,
    duration_ms: u128,
    peak_memory_bytes: Option<usize>,
    entries: &'a [EntryRecord],
}

pub fn render(capture: &Capture) -> String {
    let view = CaptureView {
        captured_at: capture.snapshot.captured_label(),
        timestamp: capture.snapshot.captured_at(),
        entry_count: capture.snapshot.len(),
        skipped: capture.skipped,
        unavailable: capture.unavailable,
        duration_ms: capture.duration_ms,
        peak_memory_bytes: capture.peak_memory_bytes,
        entries: capture.snapshot.entries(),
    };

    serde_json::to_string_pretty(&view).unwrap_or_else(|_| String::from("{}"))
}
