//! Checklist lifecycle on top of the object store.
//!
//! Draft (seeded from an NVR template) → saved (duplicate-date scan) →
//! updated → deleted, individually or via the same filter the print and
//! export paths use.

use chrono::{NaiveDate, Utc};

use crate::error::{MnrdeskError, Result};
use crate::store::{ObjectStore, StoreName};
use crate::types::{DailyChecklist, Nvr};

/// Date/NVR filter shared by bulk deletion, filtered printing and
/// per-feature export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChecklistFilter {
    pub nvr_id: Option<u64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ChecklistFilter {
    pub fn matches(&self, checklist: &DailyChecklist) -> bool {
        if let Some(nvr_id) = self.nvr_id {
            if checklist.nvr_id != nvr_id {
                return false;
            }
        }
        if let Some(from) = self.from {
            if checklist.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if checklist.date > to {
                return false;
            }
        }
        true
    }
}

/// Build an unsaved draft from an NVR's camera template: statuses reset
/// to `Nil`, remarks cleared, fresh row ids, no merges.
pub fn new_from_nvr(store: &mut ObjectStore, nvr: &Nvr, date: NaiveDate) -> DailyChecklist {
    let mut cameras = nvr.cameras.clone();
    for camera in &mut cameras {
        camera.reset_readings();
        camera.id = store.allocate_id();
    }
    DailyChecklist {
        id: 0,
        nvr_id: nvr.id,
        date,
        cameras,
        checked_by: String::new(),
        verified_by: String::new(),
        approved_by: String::new(),
        merged_cells: Vec::new(),
        created_at: Utc::now(),
    }
}

/// Persist a draft. Rejects with `DuplicateEntry` — and performs no
/// write — when a checklist already exists for `(nvr_id, date)`.
pub fn save(store: &mut ObjectStore, checklist: &mut DailyChecklist) -> Result<()> {
    let existing = store.get_all::<DailyChecklist>()?;
    if existing
        .iter()
        .any(|c| c.nvr_id == checklist.nvr_id && c.date == checklist.date && c.id != checklist.id)
    {
        return Err(MnrdeskError::DuplicateEntry {
            nvr_id: checklist.nvr_id,
            date: checklist.date,
        });
    }
    store.add(checklist)
}

/// Re-persist an edited checklist. The id must already exist; the
/// duplicate scan still applies (the date may have been edited).
pub fn update(store: &mut ObjectStore, checklist: &DailyChecklist) -> Result<()> {
    if store.get::<DailyChecklist>(checklist.id)?.is_none() {
        return Err(MnrdeskError::NotFound {
            store: StoreName::CctvChecklists,
            id: checklist.id,
        });
    }
    let existing = store.get_all::<DailyChecklist>()?;
    if existing
        .iter()
        .any(|c| c.nvr_id == checklist.nvr_id && c.date == checklist.date && c.id != checklist.id)
    {
        return Err(MnrdeskError::DuplicateEntry {
            nvr_id: checklist.nvr_id,
            date: checklist.date,
        });
    }
    store.put(checklist)
}

/// Remove one checklist. True if it existed.
pub fn delete(store: &mut ObjectStore, id: u64) -> bool {
    store.delete(StoreName::CctvChecklists, id)
}

/// Remove every checklist the filter matches; returns how many went.
pub fn delete_filtered(store: &mut ObjectStore, filter: &ChecklistFilter) -> Result<usize> {
    let doomed: Vec<u64> = store
        .get_all::<DailyChecklist>()?
        .into_iter()
        .filter(|c| filter.matches(c))
        .map(|c| c.id)
        .collect();
    for id in &doomed {
        store.delete(StoreName::CctvChecklists, *id);
    }
    Ok(doomed.len())
}

/// Checklists the filter matches, date order then id order.
pub fn filtered(store: &ObjectStore, filter: &ChecklistFilter) -> Result<Vec<DailyChecklist>> {
    let mut out: Vec<DailyChecklist> = store
        .get_all::<DailyChecklist>()?
        .into_iter()
        .filter(|c| filter.matches(c))
        .collect();
    out.sort_by_key(|c| (c.date, c.id));
    Ok(out)
}

/// The most recent checklist of every NVR, ordered by NVR id.
pub fn latest_per_nvr(store: &ObjectStore) -> Result<Vec<DailyChecklist>> {
    let mut latest: std::collections::BTreeMap<u64, DailyChecklist> =
        std::collections::BTreeMap::new();
    for checklist in store.get_all::<DailyChecklist>()? {
        match latest.get(&checklist.nvr_id) {
            Some(current) if current.date >= checklist.date => {}
            _ => {
                latest.insert(checklist.nvr_id, checklist);
            }
        }
    }
    Ok(latest.into_values().collect())
}
