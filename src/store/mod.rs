//! Persistence: the JSON-backed entity store and the checklist service
//! layered on top of its primitives.

pub mod checklists;
mod object_store;

pub use checklists::ChecklistFilter;
pub use object_store::{Entity, ObjectStore, StoreName};
