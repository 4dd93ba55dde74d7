//! Data model for the dashboard: camera readings, daily checklists, NVRs
//! and the plain CRUD entities behind the remaining screens.

mod camera;
mod checklist;
pub mod entities;
mod nvr;

pub use camera::{CameraRow, CameraStatus};
pub use checklist::DailyChecklist;
pub use entities::*;
pub use nvr::Nvr;
