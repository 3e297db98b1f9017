use crate::domain::models::{Record, Status, Summary, VerificationResult};
use serde_json::Value;

/// Order-preserving map from records to verification results. Pure and
/// total: every input yields exactly one result, anomalies become status
/// values rather than errors.
pub fn verify(records: &[Record]) -> Vec<VerificationResult> {
    records.iter().map(verify_one).collect()
}

fn verify_one(record: &Record) -> VerificationResult {
    let observed_count = match &record.document {
        Some(Value::Array(items)) => Some(items.len()),
        // Absent, null, or not a sequence: nothing to count.
        _ => None,
    };
    let delta = observed_count.map(|o| record.declared_count - o as i64);
    let status = match delta {
        None => Status::Unverifiable,
        Some(0) => Status::Consistent,
        Some(_) => Status::Inconsistent,
    };
    VerificationResult {
        record_id: record.id.clone(),
        owner_id: record.owner_id.clone(),
        observed_count,
        declared_count: record.declared_count,
        delta,
        status,
    }
}

pub fn summarize(results: &[VerificationResult]) -> Summary {
    let mut summary = Summary {
        consistent: 0,
        inconsistent: 0,
        unverifiable: 0,
        inconsistent_record_ids: Vec::new(),
    };
    for r in results {
        match r.status {
            Status::Consistent => summary.consistent += 1,
            Status::Inconsistent => {
                summary.inconsistent += 1;
                summary.inconsistent_record_ids.push(r.record_id.clone());
            }
            Status::Unverifiable => summary.unverifiable += 1,
        }
    }
    summary
}
