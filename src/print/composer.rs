//! Static HTML generation for the print surface.
//!
//! One parameterized render pass serves all three print modes (single
//! checklist, filtered set, latest-per-NVR); the historical UI had three
//! copies of this table builder and they had already drifted apart.
//!
//! Every page shows exactly [`ROWS_PER_PAGE`] rows: short checklists are
//! padded with empty rows, long ones continue onto further 32-row pages
//! (nothing is truncated). A merge range crossing a page boundary is
//! split at the boundary. The caller hands the finished document to
//! whatever drives the printer; nothing reads back.

use std::collections::HashMap;

use crate::grid::{ColumnWidths, GridLayout};
use crate::settings::PrintHeader;
use crate::types::{CameraRow, DailyChecklist};

/// Fixed page height of the checklist table, in rows.
pub const ROWS_PER_PAGE: usize = 32;

/// Table column headings, in display order.
const HEADINGS: [&str; 7] = [
    "SL",
    "Camera ID",
    "Location Name",
    "Camera Position",
    "Camera Recordings",
    "Clear Vision",
    "Remarks",
];

/// Compose the full print document for a set of checklists.
///
/// `nvr_labels` maps `nvr_id` to the heading text ("NVR-03 — Warehouse");
/// unknown ids fall back to `NVR <id>`.
pub fn compose(
    checklists: &[DailyChecklist],
    nvr_labels: &HashMap<u64, String>,
    layout: &GridLayout,
    header: &PrintHeader,
) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>");
    push_escaped(&mut out, &header.report_title);
    out.push_str("</title>\n");
    write_style(&mut out, layout);
    out.push_str("</head>\n<body>\n");

    for checklist in checklists {
        let label = nvr_labels
            .get(&checklist.nvr_id)
            .cloned()
            .unwrap_or_else(|| format!("NVR {}", checklist.nvr_id));
        write_checklist_pages(&mut out, checklist, &label, layout, header);
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn write_style(out: &mut String, layout: &GridLayout) {
    let wrap = if layout.word_wrap { "normal" } else { "nowrap" };
    out.push_str("<style>\n");
    out.push_str("@page { size: A4; margin: 10mm; }\n");
    out.push_str("body { font-family: Arial, sans-serif; margin: 0; }\n");
    out.push_str(".page { page-break-after: always; }\n");
    out.push_str(".page:last-child { page-break-after: auto; }\n");
    out.push_str("table { border-collapse: collapse; table-layout: fixed; }\n");
    out.push_str(&format!(
        "th, td {{ border: 1px solid #000; padding: 2px 4px; overflow: hidden; \
         white-space: {wrap}; font-size: {}px; }}\n",
        layout.font_size
    ));
    out.push_str(&format!("tr {{ height: {}px; }}\n", layout.row_height));
    out.push_str("th { background: #f0f0f0; }\n");
    out.push_str(".header { text-align: center; margin-bottom: 8px; }\n");
    out.push_str(".meta { display: flex; justify-content: space-between; margin: 4px 0; }\n");
    out.push_str(".signatures { display: flex; justify-content: space-between; margin-top: 24px; }\n");
    out.push_str("</style>\n");
}

fn write_checklist_pages(
    out: &mut String,
    checklist: &DailyChecklist,
    nvr_label: &str,
    layout: &GridLayout,
    header: &PrintHeader,
) {
    let total = checklist.cameras.len();
    let page_count = total.div_ceil(ROWS_PER_PAGE).max(1);

    for page in 0..page_count {
        let start = page * ROWS_PER_PAGE;
        let end = (start + ROWS_PER_PAGE).min(total);

        out.push_str("<div class=\"page\">\n");
        out.push_str(&format!(
            "<div class=\"header\"><div style=\"font-size: {}px; font-weight: bold;\">",
            header.company_font_size
        ));
        push_escaped(out, &header.company_name);
        out.push_str(&format!(
            "</div><div style=\"font-size: {}px;\">",
            header.title_font_size
        ));
        push_escaped(out, &header.report_title);
        out.push_str("</div></div>\n");

        out.push_str("<div class=\"meta\"><span>");
        push_escaped(out, nvr_label);
        out.push_str("</span><span>Date: ");
        push_escaped(out, &checklist.date.to_string());
        out.push_str("</span></div>\n");

        write_table(out, checklist, layout, start, end);
        write_signatures(out, checklist);
        out.push_str("</div>\n");
    }
}

fn write_table(
    out: &mut String,
    checklist: &DailyChecklist,
    layout: &GridLayout,
    start: usize,
    end: usize,
) {
    let widths = layout.column_widths;
    out.push_str(&format!("<table style=\"width: {}px;\">\n", widths.total()));
    write_colgroup(out, &widths);

    out.push_str("<thead><tr>");
    for heading in HEADINGS {
        out.push_str("<th>");
        out.push_str(heading);
        out.push_str("</th>");
    }
    out.push_str("</tr></thead>\n<tbody>\n");

    for slot in 0..ROWS_PER_PAGE {
        let index = start + slot;
        match page_cell(checklist, index, start, end) {
            PageCell::Row { camera, remarks } => {
                write_camera_row(out, index, camera, remarks);
            }
            PageCell::Padding => {
                out.push_str("<tr>");
                for _ in HEADINGS {
                    out.push_str("<td>&nbsp;</td>");
                }
                out.push_str("</tr>\n");
            }
        }
    }

    out.push_str("</tbody>\n</table>\n");
}

enum PageCell<'a> {
    Row {
        camera: &'a CameraRow,
        /// Remarks rowspan, already clipped to the page window. `None`
        /// when the remarks cell is covered by a spanning cell above;
        /// the other six cells still render.
        remarks: Option<usize>,
    },
    /// Synthetic empty row past the end of the camera list.
    Padding,
}

/// Decide what to draw at `index`, with merge ranges clipped to the page
/// window `[start, end)`. A range whose origin lies before the window
/// restarts as a new origin at the window's first row.
fn page_cell(checklist: &DailyChecklist, index: usize, start: usize, end: usize) -> PageCell<'_> {
    let Some(camera) = checklist.cameras.get(index) else {
        return PageCell::Padding;
    };

    let containing = checklist
        .merged_cells
        .iter()
        .find(|r| r.start_row <= r.end_row && index >= r.start_row && index <= r.end_row);

    match containing {
        None => PageCell::Row {
            camera,
            remarks: Some(1),
        },
        Some(range) => {
            let clipped_start = range.start_row.max(start);
            if index == clipped_start {
                let clipped_end = range.end_row.min(end.saturating_sub(1));
                PageCell::Row {
                    camera,
                    remarks: Some(clipped_end - clipped_start + 1),
                }
            } else {
                PageCell::Row {
                    camera,
                    remarks: None,
                }
            }
        }
    }
}

fn write_colgroup(out: &mut String, widths: &ColumnWidths) {
    out.push_str("<colgroup>");
    for w in widths.in_order() {
        out.push_str(&format!("<col style=\"width: {w}px;\">"));
    }
    out.push_str("</colgroup>\n");
}

fn write_camera_row(out: &mut String, index: usize, camera: &CameraRow, remarks: Option<usize>) {
    out.push_str("<tr>");
    out.push_str(&format!("<td>{}</td>", index + 1));
    out.push_str("<td>");
    push_escaped(out, &camera.camera_id);
    out.push_str("</td><td>");
    push_escaped(out, &camera.location_name);
    out.push_str("</td>");
    for status in [
        camera.camera_position,
        camera.camera_recordings,
        camera.clear_vision,
    ] {
        out.push_str("<td>");
        out.push_str(status.as_str());
        out.push_str("</td>");
    }
    match remarks {
        Some(span) if span > 1 => {
            out.push_str(&format!("<td rowspan=\"{span}\">"));
            push_escaped(out, &camera.remarks);
            out.push_str("</td>");
        }
        Some(_) => {
            out.push_str("<td>");
            push_escaped(out, &camera.remarks);
            out.push_str("</td>");
        }
        // Remarks cell covered by a rowspan above; six cells only.
        None => {}
    }
    out.push_str("</tr>\n");
}

fn write_signatures(out: &mut String, checklist: &DailyChecklist) {
    out.push_str("<div class=\"signatures\">");
    for (label, name) in [
        ("Checked By", &checklist.checked_by),
        ("Verified By", &checklist.verified_by),
        ("Approved By", &checklist.approved_by),
    ] {
        out.push_str("<span>");
        out.push_str(label);
        out.push_str(": ");
        push_escaped(out, name);
        out.push_str("</span>");
    }
    out.push_str("</div>\n");
}

/// Append `text` with the HTML special characters escaped.
fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn escaping_covers_markup_characters() {
        let mut out = String::new();
        push_escaped(&mut out, "<Gate & \"Dock\">");
        assert_eq!(out, "&lt;Gate &amp; &quot;Dock&quot;&gt;");
    }
}
