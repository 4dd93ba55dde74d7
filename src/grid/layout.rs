//! Grid layout settings for the checklist view.
//!
//! Per-column pixel widths, font size, row height and word-wrap flag.
//! Persisted as part of [`crate::settings::Settings`], independently of
//! any one checklist — the layout applies to the grid view generally.

use serde::{Deserialize, Serialize};

/// Smallest width a column can be resized or deserialized to.
pub const MIN_COLUMN_WIDTH: u32 = 30;

/// Default grid font size in px.
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// Default grid row height in px.
pub const DEFAULT_ROW_HEIGHT: u32 = 28;

/// Pixel widths for the seven checklist columns.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnWidths {
    pub sl: u32,
    pub camera_id: u32,
    pub location_name: u32,
    pub camera_position: u32,
    pub camera_recordings: u32,
    pub clear_vision: u32,
    pub remarks: u32,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            sl: 40,
            camera_id: 90,
            location_name: 180,
            camera_position: 110,
            camera_recordings: 120,
            clear_vision: 100,
            remarks: 220,
        }
    }
}

impl ColumnWidths {
    /// Apply the width floor to every column. Run after deserialization
    /// and after every resize; out-of-range values are clamped, never
    /// rejected.
    pub fn clamp_to_floor(&mut self) {
        for w in [
            &mut self.sl,
            &mut self.camera_id,
            &mut self.location_name,
            &mut self.camera_position,
            &mut self.camera_recordings,
            &mut self.clear_vision,
            &mut self.remarks,
        ] {
            if *w < MIN_COLUMN_WIDTH {
                *w = MIN_COLUMN_WIDTH;
            }
        }
    }

    /// Widths in display order (SL first, remarks last).
    pub fn in_order(&self) -> [u32; 7] {
        [
            self.sl,
            self.camera_id,
            self.location_name,
            self.camera_position,
            self.camera_recordings,
            self.clear_vision,
            self.remarks,
        ]
    }

    /// Total table width in px.
    pub fn total(&self) -> u32 {
        self.in_order().iter().sum()
    }
}

/// The flat layout record for the grid view.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    pub font_size: u32,
    pub word_wrap: bool,
    pub row_height: u32,
    pub column_widths: ColumnWidths,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            word_wrap: true,
            row_height: DEFAULT_ROW_HEIGHT,
            column_widths: ColumnWidths::default(),
        }
    }
}

impl GridLayout {
    /// Resize one column, honoring the floor.
    pub fn set_width(&mut self, column: LayoutColumn, width: u32) {
        let slot = match column {
            LayoutColumn::Sl => &mut self.column_widths.sl,
            LayoutColumn::CameraId => &mut self.column_widths.camera_id,
            LayoutColumn::LocationName => &mut self.column_widths.location_name,
            LayoutColumn::CameraPosition => &mut self.column_widths.camera_position,
            LayoutColumn::CameraRecordings => &mut self.column_widths.camera_recordings,
            LayoutColumn::ClearVision => &mut self.column_widths.clear_vision,
            LayoutColumn::Remarks => &mut self.column_widths.remarks,
        };
        *slot = width.max(MIN_COLUMN_WIDTH);
    }
}

/// Resizable columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutColumn {
    Sl,
    CameraId,
    LocationName,
    CameraPosition,
    CameraRecordings,
    ClearVision,
    Remarks,
}
