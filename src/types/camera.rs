use serde::{Deserialize, Serialize};

/// Tri-state camera reading used by all three status columns.
///
/// Serialized exactly as the historical strings `"OK"`, `"NOT OK"`,
/// `"Nil"` so stored checklists keep their JSON shape.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NOT OK")]
    NotOk,
    #[serde(rename = "Nil")]
    #[default]
    Nil,
}

impl CameraStatus {
    /// Parse the display string back into a status.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "OK" => Some(Self::Ok),
            "NOT OK" => Some(Self::NotOk),
            "Nil" => Some(Self::Nil),
            _ => None,
        }
    }

    /// Display string as it appears in the grid and on printouts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NotOk => "NOT OK",
            Self::Nil => "Nil",
        }
    }
}

/// One camera line in a checklist (or in an NVR's template).
///
/// Invariant (maintained by the grid controller): while `location_name`
/// is non-empty, none of the three status fields is `Nil`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CameraRow {
    pub id: u64,
    #[serde(default)]
    pub camera_id: String,
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub camera_position: CameraStatus,
    #[serde(default)]
    pub camera_recordings: CameraStatus,
    #[serde(default)]
    pub clear_vision: CameraStatus,
    #[serde(default)]
    pub remarks: String,
}

impl CameraRow {
    /// Reset to an untouched daily reading: statuses back to `Nil`,
    /// remarks cleared. Identity fields (`camera_id`, `location_name`)
    /// are kept — they come from the NVR template.
    pub fn reset_readings(&mut self) {
        self.camera_position = CameraStatus::Nil;
        self.camera_recordings = CameraStatus::Nil;
        self.clear_vision = CameraStatus::Nil;
        self.remarks.clear();
    }
}
