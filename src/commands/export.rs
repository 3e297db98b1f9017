use crate::services::auditlog::record_export;
use crate::services::export::export_curriculum;
use crate::services::output::{export_text, print_one};
use std::path::Path;

pub fn handle_export(json: bool, out: &str) -> anyhow::Result<()> {
    let report = export_curriculum(Path::new(out))?;
    record_export(&report);
    print_one(json, report, export_text)
}
