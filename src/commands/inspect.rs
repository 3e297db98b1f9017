use crate::cli::FieldArgs;
use crate::domain::models::{CollectionCount, PeekReport, Status, VerificationResult};
use crate::services::output::{
    count_row, peek_row, print_one, print_out, summary_text, verification_row,
};
use crate::services::store::{decode_records, field_names, FieldMap, Filter, JsonStore};
use crate::services::verifier::{summarize, verify};

fn field_map(fields: &FieldArgs) -> FieldMap {
    FieldMap {
        id: fields.id_field.clone(),
        owner: fields.owner_field.clone(),
        document: fields.document_field.clone(),
        count: fields.count_field.clone(),
    }
}

fn owner_filter(fields: &FieldArgs, owner: Option<&str>, owner_match: Option<&str>) -> Filter {
    match (owner, owner_match) {
        (Some(value), _) => Filter::Eq {
            field: fields.owner_field.clone(),
            value: value.to_string(),
        },
        (None, Some(pattern)) => Filter::Match {
            field: fields.owner_field.clone(),
            pattern: pattern.to_string(),
        },
        (None, None) => Filter::All,
    }
}

fn run_verify(
    store: &JsonStore,
    collection: &str,
    fields: &FieldArgs,
    owner: Option<&str>,
    owner_match: Option<&str>,
) -> anyhow::Result<Vec<VerificationResult>> {
    let rows = store.query(collection, &owner_filter(fields, owner, owner_match))?;
    let records = decode_records(&rows, &field_map(fields));
    Ok(verify(&records))
}

pub fn handle_verify(
    json: bool,
    store: &JsonStore,
    collection: &str,
    fields: &FieldArgs,
    owner: Option<&str>,
    owner_match: Option<&str>,
    only_inconsistent: bool,
) -> anyhow::Result<()> {
    let mut results = run_verify(store, collection, fields, owner, owner_match)?;
    // Presentation-level filter only; the verifier itself never drops rows.
    if only_inconsistent {
        results.retain(|r| r.status == Status::Inconsistent);
    }
    print_out(json, &results, verification_row)
}

pub fn handle_summary(
    json: bool,
    store: &JsonStore,
    collection: &str,
    fields: &FieldArgs,
    owner: Option<&str>,
    owner_match: Option<&str>,
) -> anyhow::Result<()> {
    let results = run_verify(store, collection, fields, owner, owner_match)?;
    let summary = summarize(&results);
    print_one(json, summary, summary_text)
}

pub fn handle_counts(json: bool, store: &JsonStore) -> anyhow::Result<()> {
    let mut counts = Vec::new();
    for collection in store.collections()? {
        let rows = store.count(&collection, &Filter::All)?;
        counts.push(CollectionCount { collection, rows });
    }
    print_out(json, &counts, count_row)
}

pub fn handle_peek(json: bool, store: &JsonStore, collection: &str) -> anyhow::Result<()> {
    let rows = store.query(collection, &Filter::All)?;
    let fields = rows.first().map(field_names).unwrap_or_default();
    let report = PeekReport {
        collection: collection.to_string(),
        rows: rows.len(),
        fields,
    };
    print_one(json, report, peek_row)
}
