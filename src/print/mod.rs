//! Print composition: selection of checklists plus the HTML renderer.

mod composer;

use std::collections::HashMap;

use crate::error::{MnrdeskError, Result};
use crate::grid::GridLayout;
use crate::settings::PrintHeader;
use crate::store::{checklists, ChecklistFilter, ObjectStore, StoreName};
use crate::types::{DailyChecklist, Nvr};

pub use composer::{compose, ROWS_PER_PAGE};

/// Which checklists a print run covers. All three modes feed the same
/// render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintSelection {
    /// One checklist by id.
    Single { checklist_id: u64 },
    /// Every checklist matching an NVR/date filter.
    Filtered(ChecklistFilter),
    /// The most recent checklist of every NVR.
    LatestPerNvr,
}

/// Resolve a selection against the store and compose the document.
pub fn print_document(
    store: &ObjectStore,
    selection: PrintSelection,
    layout: &GridLayout,
    header: &PrintHeader,
) -> Result<String> {
    let checklists = resolve(store, selection)?;
    let labels = nvr_labels(store)?;
    Ok(compose(&checklists, &labels, layout, header))
}

fn resolve(store: &ObjectStore, selection: PrintSelection) -> Result<Vec<DailyChecklist>> {
    match selection {
        PrintSelection::Single { checklist_id } => {
            let checklist =
                store
                    .get::<DailyChecklist>(checklist_id)?
                    .ok_or(MnrdeskError::NotFound {
                        store: StoreName::CctvChecklists,
                        id: checklist_id,
                    })?;
            Ok(vec![checklist])
        }
        PrintSelection::Filtered(filter) => checklists::filtered(store, &filter),
        PrintSelection::LatestPerNvr => checklists::latest_per_nvr(store),
    }
}

/// Heading text per NVR id: "NVR-03 — Warehouse" style.
fn nvr_labels(store: &ObjectStore) -> Result<HashMap<u64, String>> {
    let mut labels = HashMap::new();
    for nvr in store.get_all::<Nvr>()? {
        let label = if nvr.name.is_empty() {
            nvr.nvr_number.clone()
        } else {
            format!("{} - {}", nvr.nvr_number, nvr.name)
        };
        labels.insert(nvr.id, label);
    }
    Ok(labels)
}
