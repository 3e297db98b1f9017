use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One entity fetched from the data store, reduced to the fields the
/// consistency check cares about. Decoded at the store boundary; the
/// verifier never touches raw JSON objects.
#[derive(Debug, Clone)]
pub struct Record {
    pub id: String,
    /// Parent entity id (e.g. a student). Grouping/reporting only.
    pub owner_id: Option<String>,
    /// Raw document-valued field, kept opaque. `None` when absent.
    pub document: Option<Value>,
    /// Denormalized counter asserted to equal the document's item count.
    pub declared_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Consistent,
    Inconsistent,
    Unverifiable,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Consistent => write!(f, "consistent"),
            Status::Inconsistent => write!(f, "inconsistent"),
            Status::Unverifiable => write!(f, "unverifiable"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub record_id: String,
    pub owner_id: Option<String>,
    /// `None` when the document field was absent or not a sequence.
    pub observed_count: Option<usize>,
    pub declared_count: i64,
    /// declared - observed. `None` iff the record is unverifiable.
    pub delta: Option<i64>,
    pub status: Status,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Summary {
    pub consistent: usize,
    pub inconsistent: usize,
    pub unverifiable: usize,
    pub inconsistent_record_ids: Vec<String>,
}

#[derive(Serialize)]
pub struct CollectionCount {
    pub collection: String,
    pub rows: usize,
}

#[derive(Serialize)]
pub struct PeekReport {
    pub collection: String,
    pub rows: usize,
    pub fields: Vec<String>,
}

#[derive(Serialize)]
pub struct ExportReport {
    pub out_dir: String,
    pub written: Vec<String>,
}
