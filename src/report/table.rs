//! Text rendering for snapshots and histories.
//!
//! Formats output for the terminal:
//! - History listing: one `<index>. <capture label>` line per snapshot
//! - Entry listing: one name per line
//! - Entry detail: name, creation timestamp, identifier

use crate::history::History;
use crate::scan::EntryRecord;
use crate::snapshot::Snapshot;

pub fn render_history(history: &History) -> String {
    let mut output = String::new();
    for (index, snapshot) in history.list() {
        output.push_str(&format!("{index}. {}\n", snapshot.captured_label()));
    }
    output
}

pub fn render_entries(snapshot: &Snapshot) -> String {
    if snapshot.is_empty() {
        return String::from("no entries captured.\n");
    }

    let mut output = String::new();
    for entry in snapshot.entries() {
        output.push_str(&entry.name);
        output.push('\n');
    }
    output
}

pub fn render_entry_detail(entry: &EntryRecord) -> String {
    format!(
        "Name: {}\nCreation timestamp: {}\nIdentifier: {}\n",
        entry.name,
        format_timestamp(entry.created_at),
        entry.id
    )
}

/// Renders unix seconds as local time, or "unknown" for values outside
/// chrono's representable range.
pub fn format_timestamp(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| String::from("unknown"))
}
