use crate::domain::models::{
    CollectionCount, ExportReport, JsonOut, PeekReport, Summary, VerificationResult,
};
use serde::Serialize;

/// Placeholder for counts/deltas that do not exist (unverifiable records).
const MISSING_CELL: &str = "n/a";

fn envelope<T: Serialize>(data: T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOut { ok: true, data })?)
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", envelope(data)?);
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    text: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", envelope(data)?);
    } else {
        println!("{}", text(&data));
    }
    Ok(())
}

fn opt_cell<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING_CELL.to_string())
}

pub fn verification_row(r: &VerificationResult) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        r.record_id,
        r.status,
        r.declared_count,
        opt_cell(r.observed_count),
        opt_cell(r.delta)
    )
}

pub fn summary_text(s: &Summary) -> String {
    format!(
        "consistent: {}\ninconsistent: {}\nunverifiable: {}\ninconsistent ids: {}",
        s.consistent,
        s.inconsistent,
        s.unverifiable,
        s.inconsistent_record_ids.join(", ")
    )
}

pub fn count_row(c: &CollectionCount) -> String {
    format!("{}\t{}", c.collection, c.rows)
}

pub fn peek_row(p: &PeekReport) -> String {
    format!("{}\t{} rows\t[{}]", p.collection, p.rows, p.fields.join(", "))
}

pub fn export_text(r: &ExportReport) -> String {
    format!("wrote {} files to {}", r.written.len(), r.out_dir)
}

#[cfg(test)]
mod tests {
    use super::{summary_text, verification_row};
    use crate::domain::models::{Status, Summary, VerificationResult};

    #[test]
    fn verification_row_renders_counts_and_delta() {
        let row = verification_row(&VerificationResult {
            record_id: "ca-7".into(),
            owner_id: Some("s-2".into()),
            observed_count: Some(1),
            declared_count: 4,
            delta: Some(3),
            status: Status::Inconsistent,
        });
        assert_eq!(row, "ca-7\tinconsistent\t4\t1\t3");
    }

    #[test]
    fn unverifiable_row_uses_placeholder_cells() {
        let row = verification_row(&VerificationResult {
            record_id: "ca-8".into(),
            owner_id: None,
            observed_count: None,
            declared_count: 2,
            delta: None,
            status: Status::Unverifiable,
        });
        assert_eq!(row, "ca-8\tunverifiable\t2\tn/a\tn/a");
    }

    #[test]
    fn summary_text_lists_inconsistent_ids() {
        let text = summary_text(&Summary {
            consistent: 2,
            inconsistent: 1,
            unverifiable: 0,
            inconsistent_record_ids: vec!["ca-2".into()],
        });
        assert!(text.contains("inconsistent: 1"));
        assert!(text.contains("inconsistent ids: ca-2"));
    }
}
