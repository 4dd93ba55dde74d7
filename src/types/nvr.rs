use serde::{Deserialize, Serialize};

use crate::store::{Entity, StoreName};

use super::CameraRow;

/// Network Video Recorder: a logical grouping of camera positions.
///
/// The embedded camera list is configuration — the template that seeds
/// new daily checklists — not daily readings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Nvr {
    pub id: u64,
    #[serde(default)]
    pub nvr_number: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub total_cameras: u32,
    #[serde(default)]
    pub cameras: Vec<CameraRow>,
}

impl Nvr {
    /// Template cameras ordered for the camera *setup* table: numeric
    /// sort on the digits of `camera_id` (non-digits stripped). Rows with
    /// no digits sort last, keeping their relative order. Checklist row
    /// order is untouched by this — there, array order is authoritative.
    pub fn cameras_numeric_order(&self) -> Vec<&CameraRow> {
        let mut out: Vec<&CameraRow> = self.cameras.iter().collect();
        out.sort_by_key(|c| camera_sort_key(&c.camera_id));
        out
    }
}

/// Digits of a camera id as a number; `u64::MAX` when none, so digitless
/// ids sink to the end under a stable sort.
fn camera_sort_key(camera_id: &str) -> u64 {
    let digits: String = camera_id.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(u64::MAX)
}

impl Entity for Nvr {
    const STORE: StoreName = StoreName::Nvrs;

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use super::*;

    fn cam(camera_id: &str) -> CameraRow {
        CameraRow {
            camera_id: camera_id.to_string(),
            ..CameraRow::default()
        }
    }

    #[test]
    fn numeric_order_strips_non_digits() {
        let nvr = Nvr {
            cameras: vec![cam("CAM-10"), cam("CAM-2"), cam("CAM-1")],
            ..Nvr::default()
        };
        let ordered: Vec<&str> = nvr
            .cameras_numeric_order()
            .iter()
            .map(|c| c.camera_id.as_str())
            .collect();
        assert_eq!(ordered, vec!["CAM-1", "CAM-2", "CAM-10"]);
    }

    #[test]
    fn digitless_ids_sort_last_in_original_order() {
        let nvr = Nvr {
            cameras: vec![cam("spare"), cam("CAM-3"), cam("lobby")],
            ..Nvr::default()
        };
        let ordered: Vec<&str> = nvr
            .cameras_numeric_order()
            .iter()
            .map(|c| c.camera_id.as_str())
            .collect();
        assert_eq!(ordered, vec!["CAM-3", "spare", "lobby"]);
    }
}
