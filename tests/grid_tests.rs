//! Cell editing and status auto-normalization in the checklist grid.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use mnrdesk::grid::{CameraField, ChecklistGrid, MergeColumn, StatusPolicy};
use mnrdesk::types::CameraStatus;
use test_case::test_case;

fn open_grid(camera_count: u32) -> ChecklistGrid {
    ChecklistGrid::open(common::checklist(1, common::date(2024, 6, 1), camera_count))
}

// ============================================================================
// STATUS NORMALIZATION
// ============================================================================

#[test]
fn entering_location_promotes_statuses_to_ok() {
    let mut grid = open_grid(3);
    grid.update_cell(0, CameraField::LocationName, "Gate-3").unwrap();

    let cam = &grid.checklist().cameras[0];
    assert_eq!(cam.location_name, "Gate-3");
    assert_eq!(cam.camera_position, CameraStatus::Ok);
    assert_eq!(cam.camera_recordings, CameraStatus::Ok);
    assert_eq!(cam.clear_vision, CameraStatus::Ok);
}

#[test]
fn clearing_location_resets_statuses_to_nil() {
    let mut grid = open_grid(3);
    grid.update_cell(0, CameraField::LocationName, "Gate-3").unwrap();
    grid.update_cell(0, CameraField::CameraPosition, "NOT OK").unwrap();
    grid.update_cell(0, CameraField::LocationName, "").unwrap();

    let cam = &grid.checklist().cameras[0];
    assert_eq!(cam.camera_position, CameraStatus::Nil);
    assert_eq!(cam.camera_recordings, CameraStatus::Nil);
    assert_eq!(cam.clear_vision, CameraStatus::Nil);
}

#[test]
fn set_then_clear_location_round_trips_to_nil() {
    // The empty branch is the idempotent one: non-empty -> empty always
    // lands every status back on Nil regardless of history.
    let mut grid = open_grid(1);
    for _ in 0..3 {
        grid.update_cell(0, CameraField::LocationName, "Dock").unwrap();
        grid.update_cell(0, CameraField::LocationName, "").unwrap();
    }
    let cam = &grid.checklist().cameras[0];
    assert_eq!(cam.camera_position, CameraStatus::Nil);
    assert_eq!(cam.camera_recordings, CameraStatus::Nil);
    assert_eq!(cam.clear_vision, CameraStatus::Nil);
}

#[test]
fn overwrite_policy_clobbers_not_ok() {
    // Field scenario: camera marked NOT OK, then its location text is
    // corrected. Default policy reproduces the historical overwrite.
    let mut grid = open_grid(1);
    grid.update_cell(0, CameraField::LocationName, "").unwrap();
    grid.update_cell(0, CameraField::CameraPosition, "NOT OK").unwrap();
    grid.update_cell(0, CameraField::LocationName, "Gate-3").unwrap();
    assert_eq!(grid.checklist().cameras[0].camera_position, CameraStatus::Ok);
}

#[test]
fn preserve_policy_keeps_not_ok_on_location_edit() {
    let mut grid = open_grid(1).with_policy(StatusPolicy::PreserveNotOk);
    grid.update_cell(0, CameraField::CameraPosition, "NOT OK").unwrap();
    grid.update_cell(0, CameraField::LocationName, "Gate-3").unwrap();

    let cam = &grid.checklist().cameras[0];
    assert_eq!(cam.camera_position, CameraStatus::NotOk);
    assert_eq!(cam.camera_recordings, CameraStatus::Ok);
    assert_eq!(cam.clear_vision, CameraStatus::Ok);
}

#[test]
fn whitespace_only_location_counts_as_blank() {
    let mut grid = open_grid(1);
    grid.update_cell(0, CameraField::LocationName, "Gate").unwrap();
    grid.update_cell(0, CameraField::LocationName, "   ").unwrap();
    assert_eq!(grid.checklist().cameras[0].camera_position, CameraStatus::Nil);
}

// ============================================================================
// VERBATIM FIELDS
// ============================================================================

#[test_case("OK", CameraStatus::Ok)]
#[test_case("NOT OK", CameraStatus::NotOk)]
#[test_case("Nil", CameraStatus::Nil)]
fn status_cells_accept_tri_state_strings(text: &str, expected: CameraStatus) {
    let mut grid = open_grid(1);
    grid.update_cell(0, CameraField::ClearVision, text).unwrap();
    assert_eq!(grid.checklist().cameras[0].clear_vision, expected);
}

#[test]
fn status_cells_reject_other_text() {
    let mut grid = open_grid(1);
    assert!(grid.update_cell(0, CameraField::ClearVision, "maybe").is_err());
    assert_eq!(grid.checklist().cameras[0].clear_vision, CameraStatus::Nil);
}

#[test]
fn remarks_and_camera_id_are_set_verbatim() {
    let mut grid = open_grid(1);
    grid.update_cell(0, CameraField::Remarks, "lens fogged").unwrap();
    grid.update_cell(0, CameraField::CameraId, "CAM-99").unwrap();
    let cam = &grid.checklist().cameras[0];
    assert_eq!(cam.remarks, "lens fogged");
    assert_eq!(cam.camera_id, "CAM-99");
}

#[test]
fn out_of_range_row_is_rejected() {
    let mut grid = open_grid(2);
    assert!(grid.update_cell(5, CameraField::Remarks, "x").is_err());
}

// ============================================================================
// RENDER ROWS
// ============================================================================

#[test]
fn render_rows_keep_array_order_and_drop_merged_tails() {
    let mut grid = open_grid(6);
    grid.toggle_merge_mode();
    grid.select_cell(2, MergeColumn::Remarks);
    grid.select_cell(3, MergeColumn::Remarks);
    grid.select_cell(4, MergeColumn::Remarks);
    grid.apply_merge().unwrap();

    let rows = grid.build_render_rows();
    let indices: Vec<usize> = rows.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 5]);

    let spans: Vec<usize> = rows.iter().map(|r| r.remarks_span).collect();
    assert_eq!(spans, vec![1, 1, 3, 1]);
}

#[test]
fn render_rows_without_merges_are_one_to_one() {
    let grid = open_grid(4);
    let rows = grid.build_render_rows();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.remarks_span == 1));
    assert_eq!(rows[2].camera.camera_id, "CAM-3");
}
