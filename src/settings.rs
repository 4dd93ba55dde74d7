//! Typed, versioned application settings.
//!
//! Replaces the historical ad-hoc string-keyed preference blobs
//! (`cctv_excel_settings`, `cctv_print_header`, `mnr_settings`) with one
//! struct behind a single load/save boundary. Components receive the
//! pieces they need by injection; nothing else in the crate reads
//! settings ad hoc.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::{GridLayout, StatusPolicy};

/// Current on-disk schema version. Older files deserialize via serde
/// defaults; files written by a NEWER build are rejected rather than
/// silently misread.
pub const SETTINGS_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("I/O error reading settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("settings version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Header block printed above every checklist table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrintHeader {
    pub company_name: String,
    pub report_title: String,
    pub company_font_size: u32,
    pub title_font_size: u32,
}

impl Default for PrintHeader {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            report_title: "CCTV Daily Checklist".to_string(),
            company_font_size: 18,
            title_font_size: 14,
        }
    }
}

/// Application-wide preferences.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppPrefs {
    pub theme: Theme,
    pub notifications_enabled: bool,
    /// Assets whose antivirus update is older than this many days are
    /// flagged on the dashboard.
    pub antivirus_warning_days: u32,
    /// How clearing a location affects recording/vision statuses. Absent
    /// in files written before the policy existed.
    #[serde(default)]
    pub status_policy: StatusPolicy,
}

impl Default for AppPrefs {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            notifications_enabled: true,
            antivirus_warning_days: 30,
            status_policy: StatusPolicy::default(),
        }
    }
}

/// The whole settings record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub grid: GridLayout,
    #[serde(default)]
    pub print_header: PrintHeader,
    #[serde(default)]
    pub app: AppPrefs,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            grid: GridLayout::default(),
            print_header: PrintHeader::default(),
            app: AppPrefs::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields defaults; column
    /// widths are clamped to the floor after deserialization.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no settings file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let mut settings: Settings = serde_json::from_str(&text)?;
        if settings.version > SETTINGS_VERSION {
            return Err(SettingsError::UnsupportedVersion {
                found: settings.version,
                supported: SETTINGS_VERSION,
            });
        }
        settings.grid.column_widths.clamp_to_floor();
        Ok(settings)
    }

    /// Write the whole record as pretty JSON. Written to a temp file
    /// first so a crash mid-write cannot leave a truncated file behind.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let text = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::grid::MIN_COLUMN_WIDTH;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn roundtrip_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::default();
        settings.print_header.company_name = "MNR Group".to_string();
        settings.app.theme = Theme::Dark;
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn newer_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::default();
        settings.version = SETTINGS_VERSION + 1;
        settings.save(&path).unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn save_replaces_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        Settings::default().save(&path).unwrap();
        assert!(path.exists());
        assert!(!dir.path().join("settings.json.tmp").exists());
    }

    #[test]
    fn status_policy_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::default();
        settings.app.status_policy = StatusPolicy::PreserveNotOk;
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.app.status_policy, StatusPolicy::PreserveNotOk);
    }

    #[test]
    fn status_policy_defaults_when_absent() {
        // A file written before the policy field existed.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let text = r#"{"version":1,"app":{"theme":"dark","notificationsEnabled":false,"antivirusWarningDays":14}}"#;
        std::fs::write(&path, text).unwrap();
        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.app.status_policy, StatusPolicy::Overwrite);
        assert_eq!(loaded.app.theme, Theme::Dark);
    }

    #[test]
    fn loaded_widths_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::default();
        settings.grid.column_widths.sl = 1; // below the floor, written raw
        let text = serde_json::to_string(&settings).unwrap();
        std::fs::write(&path, text).unwrap();
        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.grid.column_widths.sl, MIN_COLUMN_WIDTH);
    }
}
