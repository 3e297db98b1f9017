use crate::domain::models::ExportReport;
use serde::Serialize;
use std::path::PathBuf;

/// One line of the append-only audit trail. The tool's only mutating
/// operation is the curriculum export, so the event records what landed
/// where rather than a free-form payload.
#[derive(Serialize)]
struct ExportEvent<'a> {
    ts: u64,
    action: &'static str,
    out_dir: &'a str,
    files: &'a [String],
}

/// Best-effort: audit failures never fail the command itself.
pub fn record_export(report: &ExportReport) {
    let path = match audit_path() {
        Some(p) => p,
        None => return,
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = ExportEvent {
        ts: unix_now(),
        action: "export",
        out_dir: &report.out_dir,
        files: &report.written,
    };
    let line = match serde_json::to_string(&event) {
        Ok(l) => format!("{}\n", l),
        Err(_) => return,
    };
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

fn audit_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/rollcall/audit.jsonl"))
}

fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
