use crate::domain::models::Record;
use serde_json::Value;
use std::path::PathBuf;

/// Local JSON-directory data store. Each collection `c` is the file
/// `<root>/c.json` holding a JSON array of objects.
pub struct JsonStore {
    root: PathBuf,
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("collection not found: {0}")]
    CollectionNotFound(String),
    #[error("collection is not a JSON array: {0}")]
    NotAnArray(String),
}

#[derive(Debug, Clone)]
pub enum Filter {
    All,
    Eq { field: String, value: String },
    Match { field: String, pattern: String },
}

impl Filter {
    fn accepts(&self, row: &Value) -> bool {
        match self {
            Filter::All => true,
            Filter::Eq { field, value } => {
                scalar_string(row.get(field.as_str())).as_deref() == Some(value)
            }
            Filter::Match { field, pattern } => scalar_string(row.get(field.as_str()))
                .map(|s| s.to_ascii_lowercase().contains(&pattern.to_ascii_lowercase()))
                .unwrap_or(false),
        }
    }
}

/// Field names to project out of a raw collection row.
#[derive(Debug, Clone)]
pub struct FieldMap {
    pub id: String,
    pub owner: String,
    pub document: String,
    pub count: String,
}

impl JsonStore {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{}.json", collection))
    }

    fn load(&self, collection: &str) -> anyhow::Result<Vec<Value>> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Err(StoreError::CollectionNotFound(collection.to_string()).into());
        }
        let raw = std::fs::read_to_string(path)?;
        match serde_json::from_str::<Value>(&raw)? {
            Value::Array(rows) => Ok(rows),
            _ => Err(StoreError::NotAnArray(collection.to_string()).into()),
        }
    }

    pub fn query(&self, collection: &str, filter: &Filter) -> anyhow::Result<Vec<Value>> {
        let rows = self.load(collection)?;
        Ok(rows.into_iter().filter(|r| filter.accepts(r)).collect())
    }

    pub fn count(&self, collection: &str, filter: &Filter) -> anyhow::Result<usize> {
        Ok(self.query(collection, filter)?.len())
    }

    pub fn collections(&self) -> anyhow::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Project raw rows into the records the verifier consumes. Missing ids
/// render as "unknown"; a missing or non-integer counter decodes as 0.
pub fn decode_records(rows: &[Value], map: &FieldMap) -> Vec<Record> {
    rows.iter()
        .map(|row| Record {
            id: scalar_string(row.get(map.id.as_str()))
                .unwrap_or_else(|| "unknown".to_string()),
            owner_id: scalar_string(row.get(map.owner.as_str())),
            document: row.get(map.document.as_str()).cloned(),
            declared_count: row
                .get(map.count.as_str())
                .and_then(Value::as_i64)
                .unwrap_or(0),
        })
        .collect()
}

fn scalar_string(v: Option<&Value>) -> Option<String> {
    match v {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

pub fn field_names(row: &Value) -> Vec<String> {
    let mut fields: Vec<String> = match row {
        Value::Object(map) => map.keys().cloned().collect(),
        _ => Vec::new(),
    };
    fields.sort();
    fields
}
