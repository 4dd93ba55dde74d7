//! Shared builders for the integration suites.
#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use mnrdesk::types::{CameraRow, DailyChecklist, Nvr};

/// A template camera row as it sits on an NVR.
pub fn template_camera(n: u32) -> CameraRow {
    CameraRow {
        id: 0,
        camera_id: format!("CAM-{n}"),
        location_name: format!("Location {n}"),
        remarks: String::new(),
        ..CameraRow::default()
    }
}

/// An NVR with `camera_count` template cameras.
pub fn nvr_with_cameras(id: u64, camera_count: u32) -> Nvr {
    Nvr {
        id,
        nvr_number: format!("NVR-{id:02}"),
        name: format!("Recorder {id}"),
        total_cameras: camera_count,
        cameras: (1..=camera_count).map(template_camera).collect(),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// A bare checklist with `camera_count` rows, not yet persisted.
pub fn checklist(nvr_id: u64, day: NaiveDate, camera_count: u32) -> DailyChecklist {
    DailyChecklist {
        id: 0,
        nvr_id,
        date: day,
        cameras: (1..=camera_count).map(template_camera).collect(),
        checked_by: String::new(),
        verified_by: String::new(),
        approved_by: String::new(),
        merged_cells: Vec::new(),
        created_at: Utc::now(),
    }
}
