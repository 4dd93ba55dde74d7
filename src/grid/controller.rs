//! Checklist grid controller.
//!
//! Drives per-cell edits with status auto-normalization and assembles
//! renderable rows, delegating skip/span decisions to the merge manager.

use serde::{Deserialize, Serialize};

use crate::error::{MnrdeskError, Result};
use crate::types::{CameraRow, CameraStatus, DailyChecklist};

use super::merge::{MergeColumn, MergeManager, MergeRange};

/// Editable cells of a camera row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraField {
    CameraId,
    LocationName,
    CameraPosition,
    CameraRecordings,
    ClearVision,
    Remarks,
}

/// What happens to the three status fields when a location name is
/// entered into a row.
///
/// `Overwrite` reproduces the historical behavior: every status is forced
/// to `OK`, including a `NOT OK` a technician just set. `PreserveNotOk`
/// promotes only `Nil`. The rule is explicit and injectable because the
/// overwrite looks like accidental data loss in the field, not policy.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    #[default]
    Overwrite,
    PreserveNotOk,
}

/// A camera row as the grid (or the print composer) should draw it:
/// skipped rows are already removed, origin rows carry their span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRow<'a> {
    /// Index into the checklist's camera array (authoritative order).
    pub index: usize,
    /// Rowspan for the remarks cell; 1 when unmerged.
    pub remarks_span: usize,
    pub camera: &'a CameraRow,
}

/// One open checklist under edit: the record plus its merge state.
#[derive(Debug, Clone)]
pub struct ChecklistGrid {
    checklist: DailyChecklist,
    merges: MergeManager,
    policy: StatusPolicy,
}

impl ChecklistGrid {
    /// Open a checklist for editing; its stored ranges seed the merge
    /// manager. Ranges that reach past the camera list are dropped.
    pub fn open(checklist: DailyChecklist) -> Self {
        let ranges = checklist
            .merged_cells
            .iter()
            .filter(|r| r.end_row < checklist.cameras.len())
            .cloned()
            .collect();
        Self {
            checklist,
            merges: MergeManager::from_ranges(ranges),
            policy: StatusPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: StatusPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn checklist(&self) -> &DailyChecklist {
        &self.checklist
    }

    pub fn merges(&self) -> &MergeManager {
        &self.merges
    }

    /// Close the grid, writing the merge ranges back into the checklist
    /// for persistence.
    pub fn into_checklist(mut self) -> DailyChecklist {
        self.checklist.merged_cells = self.merges.ranges().to_vec();
        self.checklist
    }

    /// Apply one cell edit.
    ///
    /// Entering a non-blank location normalizes the three status fields
    /// per the configured [`StatusPolicy`]; clearing it resets them to
    /// `Nil`. Status cells only accept the tri-state display strings.
    pub fn update_cell(&mut self, row_index: usize, field: CameraField, value: &str) -> Result<()> {
        let row = self
            .checklist
            .cameras
            .get_mut(row_index)
            .ok_or_else(|| MnrdeskError::Other(format!("camera row {row_index} out of range")))?;

        match field {
            CameraField::CameraId => row.camera_id = value.to_string(),
            CameraField::Remarks => row.remarks = value.to_string(),
            CameraField::LocationName => {
                row.location_name = value.to_string();
                if value.trim().is_empty() {
                    row.camera_position = CameraStatus::Nil;
                    row.camera_recordings = CameraStatus::Nil;
                    row.clear_vision = CameraStatus::Nil;
                } else {
                    let policy = self.policy;
                    for status in [
                        &mut row.camera_position,
                        &mut row.camera_recordings,
                        &mut row.clear_vision,
                    ] {
                        *status = match (policy, *status) {
                            (StatusPolicy::PreserveNotOk, CameraStatus::NotOk) => {
                                CameraStatus::NotOk
                            }
                            _ => CameraStatus::Ok,
                        };
                    }
                }
            }
            CameraField::CameraPosition => row.camera_position = parse_status(value)?,
            CameraField::CameraRecordings => row.camera_recordings = parse_status(value)?,
            CameraField::ClearVision => row.clear_vision = parse_status(value)?,
        }
        Ok(())
    }

    /// Rows to draw, in camera-array order. Rows inside a remarks merge
    /// (after its origin) are dropped; origins carry the span.
    pub fn build_render_rows(&self) -> Vec<RenderRow<'_>> {
        build_render_rows(&self.checklist.cameras, &self.merges)
    }

    // Merge-mode plumbing, delegating to the manager.

    pub fn toggle_merge_mode(&mut self) {
        let on = !self.merges.merge_mode();
        self.merges.set_merge_mode(on);
    }

    pub fn select_cell(&mut self, row: usize, column: MergeColumn) {
        if row >= self.checklist.cameras.len() {
            return;
        }
        self.merges.select_cell(row, column);
    }

    pub fn apply_merge(&mut self) -> Result<MergeRange> {
        Ok(self.merges.apply_merge()?)
    }

    pub fn unmerge(&mut self, start_row: usize, column: MergeColumn) -> bool {
        self.merges.unmerge(start_row, column)
    }

    pub fn unmerge_all(&mut self) {
        self.merges.unmerge_all();
    }
}

/// The skip/span pass behind [`ChecklistGrid::build_render_rows`]. The
/// print composer applies the same rule, restricted to a page window.
pub fn build_render_rows<'a>(cameras: &'a [CameraRow], merges: &MergeManager) -> Vec<RenderRow<'a>> {
    cameras
        .iter()
        .enumerate()
        .filter(|&(i, _)| !merges.is_row_skipped(i, MergeColumn::Remarks))
        .map(|(i, camera)| RenderRow {
            index: i,
            remarks_span: merges.row_span_for(i, MergeColumn::Remarks),
            camera,
        })
        .collect()
}

fn parse_status(value: &str) -> Result<CameraStatus> {
    CameraStatus::parse(value)
        .ok_or_else(|| MnrdeskError::InvalidField(format!("not a camera status: {value:?}")))
}
