//! Merged cell-ranges for the checklist grid.
//!
//! A merge range is a contiguous run of rows in one column rendered as a
//! single spanning cell, like a spreadsheet merged cell. The manager owns
//! the range set for the open checklist plus the transient selection made
//! while merge mode is active. Ranges persist only when the owning
//! checklist is saved.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Column a range can live in. The grid only merges remarks today; the
/// enum keeps the stored JSON self-describing.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MergeColumn {
    #[serde(rename = "remarks")]
    Remarks,
}

/// A user-defined row span in one column. Closed interval,
/// `start_row <= end_row`, indices into the camera-row sequence.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MergeRange {
    pub start_row: usize,
    pub end_row: usize,
    pub column: MergeColumn,
}

impl MergeRange {
    /// Closed-interval overlap test against another range in the same
    /// column.
    pub fn overlaps(&self, other: &MergeRange) -> bool {
        self.column == other.column
            && !(self.end_row < other.start_row || self.start_row > other.end_row)
    }

    /// Number of rows the origin cell spans.
    pub fn span(&self) -> usize {
        self.end_row.saturating_sub(self.start_row) + 1
    }

    /// Whether the closed interval is well-formed.
    pub fn is_valid(&self) -> bool {
        self.start_row <= self.end_row
    }
}

/// Drop malformed ranges. Stored checklists are imported without schema
/// validation, so an inverted interval can arrive here.
fn retain_valid(mut ranges: Vec<MergeRange>) -> Vec<MergeRange> {
    ranges.retain(|r| {
        if !r.is_valid() {
            log::warn!("dropping inverted merge range {r:?}");
        }
        r.is_valid()
    });
    ranges
}

/// Why a merge attempt was rejected. All variants are user-facing and
/// recoverable; the existing range set is never touched on rejection.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MergeError {
    #[error("select at least two cells to merge")]
    TooFewCells,
    #[error("cells must share a column")]
    MixedColumns,
    #[error("cells must be consecutive")]
    NonContiguous,
    #[error("overlaps existing merge")]
    Overlap,
}

/// Range set plus pending selection for one open checklist.
#[derive(Debug, Default, Clone)]
pub struct MergeManager {
    ranges: Vec<MergeRange>,
    /// Cells picked while merge mode is active. Ordered for deterministic
    /// validation.
    selection: BTreeSet<(usize, MergeColumn)>,
    merge_mode: bool,
}

impl MergeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the manager from a checklist's stored ranges, dropping
    /// malformed ones and any pending selection.
    pub fn from_ranges(ranges: Vec<MergeRange>) -> Self {
        Self {
            ranges: retain_valid(ranges),
            selection: BTreeSet::new(),
            merge_mode: false,
        }
    }

    /// Replace the range set wholesale (checklist reopened for editing).
    /// Malformed ranges are dropped.
    pub fn set_ranges(&mut self, ranges: Vec<MergeRange>) {
        self.ranges = retain_valid(ranges);
        self.selection.clear();
        self.merge_mode = false;
    }

    /// Current ranges, in insertion order.
    pub fn ranges(&self) -> &[MergeRange] {
        &self.ranges
    }

    pub fn merge_mode(&self) -> bool {
        self.merge_mode
    }

    /// Enter or leave merge mode. Leaving discards the pending selection.
    pub fn set_merge_mode(&mut self, on: bool) {
        self.merge_mode = on;
        if !on {
            self.selection.clear();
        }
    }

    /// Toggle `(row, column)` in the pending selection. Only meaningful
    /// while merge mode is active; no persisted effect.
    pub fn select_cell(&mut self, row: usize, column: MergeColumn) {
        if !self.merge_mode {
            return;
        }
        let key = (row, column);
        if !self.selection.remove(&key) {
            self.selection.insert(key);
        }
    }

    /// Whether `(row, column)` is currently in the pending selection.
    pub fn is_selected(&self, row: usize, column: MergeColumn) -> bool {
        self.selection.contains(&(row, column))
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Commit the pending selection as a new range.
    ///
    /// Validations, in order: at least two cells; one column; contiguous
    /// rows; no closed-interval overlap with an existing range in that
    /// column. On success the range is appended and merge mode ends; on
    /// rejection nothing changes (no partial merge is ever committed).
    pub fn apply_merge(&mut self) -> Result<MergeRange, MergeError> {
        if self.selection.len() < 2 {
            return Err(MergeError::TooFewCells);
        }

        let mut columns = self.selection.iter().map(|&(_, c)| c);
        // len >= 2 checked above
        let Some(column) = columns.next() else {
            return Err(MergeError::TooFewCells);
        };
        if columns.any(|c| c != column) {
            return Err(MergeError::MixedColumns);
        }

        // BTreeSet iteration is already row-sorted within one column.
        let rows: Vec<usize> = self.selection.iter().map(|&(r, _)| r).collect();
        for pair in rows.windows(2) {
            if let [a, b] = pair {
                if b - a != 1 {
                    return Err(MergeError::NonContiguous);
                }
            }
        }

        let (Some(&start_row), Some(&end_row)) = (rows.first(), rows.last()) else {
            return Err(MergeError::TooFewCells);
        };
        let range = MergeRange {
            start_row,
            end_row,
            column,
        };
        if self.ranges.iter().any(|r| r.overlaps(&range)) {
            return Err(MergeError::Overlap);
        }

        self.ranges.push(range);
        self.selection.clear();
        self.merge_mode = false;
        Ok(range)
    }

    /// Remove the single range whose origin row is `start_row`.
    /// Returns true if a range was removed.
    pub fn unmerge(&mut self, start_row: usize, column: MergeColumn) -> bool {
        let before = self.ranges.len();
        self.ranges
            .retain(|r| !(r.start_row == start_row && r.column == column));
        self.ranges.len() != before
    }

    /// Clear every range unconditionally.
    pub fn unmerge_all(&mut self) {
        self.ranges.clear();
    }

    /// True iff `row` sits inside a range strictly after its origin —
    /// the renderer suppresses these rows' cells.
    pub fn is_row_skipped(&self, row: usize, column: MergeColumn) -> bool {
        self.ranges
            .iter()
            .any(|r| r.column == column && row > r.start_row && row <= r.end_row)
    }

    /// Row span to render at `row`: the range length when `row` is an
    /// origin, otherwise 1.
    pub fn row_span_for(&self, row: usize, column: MergeColumn) -> usize {
        self.ranges
            .iter()
            .find(|r| r.column == column && r.start_row == row)
            .map_or(1, MergeRange::span)
    }
}
