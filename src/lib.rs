//! mnrdesk - IT asset & facilities dashboard core
//!
//! The data and rendering layer behind a CCTV/asset dashboard:
//! - A JSON-backed entity store (departments, users, peripherals,
//!   IP phones, products, NVRs, daily checklists, ...)
//! - The CCTV daily-checklist grid: merged remarks ranges, resizable
//!   column layout, tri-state status normalization
//! - Print composition (static A4 HTML, fixed 32-row pages)
//! - Full-database and per-feature JSON import/export
//! - Typed, versioned settings behind one load/save boundary
//!
//! # Usage
//!
//! ```no_run
//! use mnrdesk::store::{checklists, ObjectStore};
//! use mnrdesk::types::Nvr;
//!
//! # fn main() -> mnrdesk::error::Result<()> {
//! let mut store = ObjectStore::open(std::path::Path::new("mnrdesk.json"))?;
//! let nvrs = store.get_all::<Nvr>()?;
//! if let Some(nvr) = nvrs.first() {
//!     let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//!     let mut draft = checklists::new_from_nvr(&mut store, nvr, date);
//!     checklists::save(&mut store, &mut draft)?;
//!     store.save()?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod grid;
pub mod print;
pub mod settings;
pub mod store;
pub mod types;

pub use error::{MnrdeskError, Result};

/// Get the library version
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
