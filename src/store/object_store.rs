//! The entity object store.
//!
//! A thin document store over one JSON file: one top-level array per
//! entity store, records keyed by a numeric `id`. Loaded whole at open,
//! written whole on save (temp file + rename). Ids come from a monotonic
//! counter seeded above everything present at open time, so two records
//! created back-to-back can never collide.
//!
//! There is no cross-store transaction and no cross-process guard: a
//! second process writing the same file wins last, unguarded.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{MnrdeskError, Result};

/// The fifteen entity stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoreName {
    Users,
    Departments,
    Accessories,
    ItAssets,
    Units,
    Products,
    UserActivities,
    Schedules,
    Printers,
    IpPhones,
    WifiNetworks,
    IpAddresses,
    CctvCameras,
    Nvrs,
    CctvChecklists,
}

impl StoreName {
    /// Every store, in on-disk key order.
    pub const ALL: [StoreName; 15] = [
        StoreName::Users,
        StoreName::Departments,
        StoreName::Accessories,
        StoreName::ItAssets,
        StoreName::Units,
        StoreName::Products,
        StoreName::UserActivities,
        StoreName::Schedules,
        StoreName::Printers,
        StoreName::IpPhones,
        StoreName::WifiNetworks,
        StoreName::IpAddresses,
        StoreName::CctvCameras,
        StoreName::Nvrs,
        StoreName::CctvChecklists,
    ];

    /// The JSON key this store lives under on disk (and in exports).
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreName::Users => "users",
            StoreName::Departments => "departments",
            StoreName::Accessories => "accessories",
            StoreName::ItAssets => "it_assets",
            StoreName::Units => "units",
            StoreName::Products => "products",
            StoreName::UserActivities => "user_activities",
            StoreName::Schedules => "schedules",
            StoreName::Printers => "printers",
            StoreName::IpPhones => "ip_phones",
            StoreName::WifiNetworks => "wifi_networks",
            StoreName::IpAddresses => "ip_addresses",
            StoreName::CctvCameras => "cctv_cameras",
            StoreName::Nvrs => "nvrs",
            StoreName::CctvChecklists => "cctv_checklists",
        }
    }

    /// Reverse of [`StoreName::as_str`].
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == key)
    }
}

impl std::fmt::Display for StoreName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binds a record type to its store and exposes its id slot.
pub trait Entity: Serialize + DeserializeOwned {
    const STORE: StoreName;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

/// In-memory image of the database file.
pub struct ObjectStore {
    path: Option<PathBuf>,
    stores: HashMap<StoreName, BTreeMap<u64, Value>>,
    /// Unknown top-level keys from the on-disk document, preserved on
    /// save.
    extra: Map<String, Value>,
    next_id: u64,
}

impl ObjectStore {
    /// Ephemeral store for tests and dry runs; `save` is a no-op.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            stores: HashMap::new(),
            extra: Map::new(),
            next_id: 1,
        }
    }

    /// Open the database file at `path`. A missing file starts empty.
    pub fn open(path: &Path) -> Result<Self> {
        let mut store = Self::in_memory();
        store.path = Some(path.to_path_buf());

        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no database at {}, starting empty", path.display());
                return Ok(store);
            }
            Err(e) => return Err(e.into()),
        };

        let doc: Value = serde_json::from_str(&text)?;
        let Value::Object(map) = doc else {
            return Err(MnrdeskError::Other(format!(
                "{} is not a JSON object",
                path.display()
            )));
        };

        for (key, value) in map {
            match (StoreName::parse(&key), value) {
                (Some(name), Value::Array(records)) => {
                    let slot = store.stores.entry(name).or_default();
                    for record in records {
                        let Some(id) = record_id(&record) else {
                            log::warn!("{name}: dropping record without numeric id");
                            continue;
                        };
                        slot.insert(id, record);
                    }
                }
                (Some(name), other) => {
                    log::warn!("{name}: expected an array, found {other:?}; ignoring");
                }
                (None, value) => {
                    store.extra.insert(key, value);
                }
            }
        }

        store.next_id = store
            .stores
            .values()
            .flat_map(|s| s.keys().copied())
            .max()
            .map_or(1, |max| max + 1);
        Ok(store)
    }

    /// Write the database back to its file, whole, via temp + rename.
    /// No-op for in-memory stores.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut doc = Map::new();
        for name in StoreName::ALL {
            let records: Vec<Value> = self
                .stores
                .get(&name)
                .map(|s| s.values().cloned().collect())
                .unwrap_or_default();
            doc.insert(name.as_str().to_string(), Value::Array(records));
        }
        for (key, value) in &self.extra {
            doc.insert(key.clone(), value.clone());
        }

        let text = serde_json::to_string_pretty(&Value::Object(doc))?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, path)?;
        log::debug!("saved database to {}", path.display());
        Ok(())
    }

    /// Allocate the next record id. Monotonic for the lifetime of the
    /// open store.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // --- typed primitives -------------------------------------------------

    /// Every record in `T`'s store, in id order.
    pub fn get_all<T: Entity>(&self) -> Result<Vec<T>> {
        self.stores
            .get(&T::STORE)
            .into_iter()
            .flat_map(|s| s.values())
            .map(|v| serde_json::from_value(v.clone()).map_err(MnrdeskError::from))
            .collect()
    }

    /// One record by id, or `None`.
    pub fn get<T: Entity>(&self, id: u64) -> Result<Option<T>> {
        self.stores
            .get(&T::STORE)
            .and_then(|s| s.get(&id))
            .map(|v| serde_json::from_value(v.clone()).map_err(MnrdeskError::from))
            .transpose()
    }

    /// Insert a new record. An id of 0 means "assign one"; the assigned
    /// id is written back into the record.
    pub fn add<T: Entity>(&mut self, record: &mut T) -> Result<()> {
        if record.id() == 0 {
            let id = self.allocate_id();
            record.set_id(id);
        } else if record.id() >= self.next_id {
            self.next_id = record.id() + 1;
        }
        let value = serde_json::to_value(&*record)?;
        self.stores
            .entry(T::STORE)
            .or_default()
            .insert(record.id(), value);
        Ok(())
    }

    /// Upsert a record under its current id.
    pub fn put<T: Entity>(&mut self, record: &T) -> Result<()> {
        if record.id() >= self.next_id {
            self.next_id = record.id() + 1;
        }
        let value = serde_json::to_value(record)?;
        self.stores
            .entry(T::STORE)
            .or_default()
            .insert(record.id(), value);
        Ok(())
    }

    /// Upsert many records. Records with id 0 get fresh ids.
    pub fn bulk_put<T: Entity>(&mut self, records: &mut [T]) -> Result<()> {
        for record in records {
            if record.id() == 0 {
                let id = self.allocate_id();
                record.set_id(id);
            }
            self.put(record)?;
        }
        Ok(())
    }

    /// Remove one record. True if it existed.
    pub fn delete(&mut self, store: StoreName, id: u64) -> bool {
        self.stores
            .get_mut(&store)
            .and_then(|s| s.remove(&id))
            .is_some()
    }

    /// Drop every record in a store. True if any were present.
    pub fn clear(&mut self, store: StoreName) -> bool {
        match self.stores.get_mut(&store) {
            Some(s) if !s.is_empty() => {
                s.clear();
                true
            }
            _ => false,
        }
    }

    /// Record count for one store.
    pub fn len(&self, store: StoreName) -> usize {
        self.stores.get(&store).map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self, store: StoreName) -> bool {
        self.len(store) == 0
    }

    // --- raw primitives (import/export path) ------------------------------

    /// Every record in `store` as raw JSON, in id order.
    pub fn get_all_raw(&self, store: StoreName) -> Vec<Value> {
        self.stores
            .get(&store)
            .map(|s| s.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Best-effort upsert of raw records: anything without a numeric id
    /// gets one assigned. Returns the number written.
    pub fn bulk_put_raw(&mut self, store: StoreName, records: Vec<Value>) -> usize {
        let mut written = 0;
        for mut record in records {
            let id = match record_id(&record) {
                Some(id) => {
                    if id >= self.next_id {
                        self.next_id = id + 1;
                    }
                    id
                }
                None => {
                    let id = self.allocate_id();
                    if let Value::Object(map) = &mut record {
                        map.insert("id".to_string(), Value::from(id));
                    } else {
                        log::warn!("{store}: skipping non-object record on import");
                        continue;
                    }
                    id
                }
            };
            self.stores.entry(store).or_default().insert(id, record);
            written += 1;
        }
        written
    }
}

fn record_id(record: &Value) -> Option<u64> {
    record.get("id").and_then(Value::as_u64)
}
