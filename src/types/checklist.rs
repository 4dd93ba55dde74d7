use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::grid::MergeRange;
use crate::store::{Entity, StoreName};

use super::CameraRow;

/// One dated inspection record: a status snapshot for every camera under
/// one NVR, plus the grid's merged remarks ranges and sign-off names.
///
/// At most one checklist may exist per `(nvr_id, date)` pair; the store
/// has no unique constraint, so the duplicate scan happens at save time
/// (see [`crate::store::checklists::save`]).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyChecklist {
    pub id: u64,
    pub nvr_id: u64,
    pub date: NaiveDate,
    pub cameras: Vec<CameraRow>,
    #[serde(default)]
    pub checked_by: String,
    #[serde(default)]
    pub verified_by: String,
    #[serde(default)]
    pub approved_by: String,
    #[serde(default)]
    pub merged_cells: Vec<MergeRange>,
    pub created_at: DateTime<Utc>,
}

impl Entity for DailyChecklist {
    const STORE: StoreName = StoreName::CctvChecklists;

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}
