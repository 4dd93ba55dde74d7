//! JSON import/export.
//!
//! Two surfaces: a full database export (one top-level array per entity
//! store plus an `exportDate` stamp) and the per-feature CCTV checklist
//! export. Import is best-effort `bulk_put` per present key, with no
//! schema validation — a record that deserializes is a record that
//! imports. The only hard failure is a document that does not parse.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MnrdeskError, Result};
use crate::store::{checklists, ChecklistFilter, ObjectStore, StoreName};
use crate::types::{DailyChecklist, Nvr};

/// Serialize the whole database. Every store appears, empty or not, so a
/// consumer can rely on the keys.
pub fn export_all(store: &ObjectStore) -> Result<String> {
    let mut doc = Map::new();
    doc.insert(
        "exportDate".to_string(),
        Value::String(Utc::now().to_rfc3339()),
    );
    for name in StoreName::ALL {
        doc.insert(
            name.as_str().to_string(),
            Value::Array(store.get_all_raw(name)),
        );
    }
    Ok(serde_json::to_string_pretty(&Value::Object(doc))?)
}

/// Import a full export document. Returns per-store written counts;
/// stores absent from the document are untouched. Unknown keys are
/// ignored.
pub fn import_all(store: &mut ObjectStore, json: &str) -> Result<HashMap<StoreName, usize>> {
    let doc: Value = serde_json::from_str(json)?;
    let Value::Object(map) = doc else {
        return Err(MnrdeskError::Other(
            "import document is not a JSON object".to_string(),
        ));
    };

    let mut counts = HashMap::new();
    for (key, value) in map {
        let Some(name) = StoreName::parse(&key) else {
            continue;
        };
        let Value::Array(records) = value else {
            log::warn!("import: {name} is not an array, skipping");
            continue;
        };
        let written = store.bulk_put_raw(name, records);
        log::info!("import: {name} <- {written} records");
        counts.insert(name, written);
    }
    Ok(counts)
}

/// Reference to the recorder a checklist export was filtered on.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NvrRef {
    pub id: u64,
    pub nvr_number: String,
    pub name: String,
}

impl From<&Nvr> for NvrRef {
    fn from(nvr: &Nvr) -> Self {
        Self {
            id: nvr.id,
            nvr_number: nvr.nvr_number.clone(),
            name: nvr.name.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// The per-feature CCTV checklist export document.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistExport {
    pub timestamp: DateTime<Utc>,
    pub nvr: Option<NvrRef>,
    pub checklists_count: usize,
    pub date_range_filter: DateRangeFilter,
    pub checklists: Vec<DailyChecklist>,
}

/// Export the checklists a filter matches, with the filter echoed into
/// the document.
pub fn export_checklists(store: &ObjectStore, filter: &ChecklistFilter) -> Result<ChecklistExport> {
    let matched = checklists::filtered(store, filter)?;
    let nvr = match filter.nvr_id {
        Some(id) => store.get::<Nvr>(id)?.as_ref().map(NvrRef::from),
        None => None,
    };
    Ok(ChecklistExport {
        timestamp: Utc::now(),
        nvr,
        checklists_count: matched.len(),
        date_range_filter: DateRangeFilter {
            from: filter.from,
            to: filter.to,
        },
        checklists: matched,
    })
}

/// Import a checklist export document. Returns how many checklists were
/// written (upserts by id, so re-importing the same file is idempotent
/// in record count).
pub fn import_checklists(store: &mut ObjectStore, json: &str) -> Result<usize> {
    let doc: ChecklistExport = serde_json::from_str(json)?;
    let mut records = doc.checklists;
    store.bulk_put(&mut records)?;
    Ok(records.len())
}
