//! Record types for the remaining dashboard stores.
//!
//! Plain CRUD entities — no behavior beyond the [`Entity`] binding that
//! routes each type to its store. String fields default so best-effort
//! import never fails on a missing key.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Entity, StoreName};

macro_rules! impl_entity {
    ($ty:ty, $store:expr) => {
        impl Entity for $ty {
            const STORE: StoreName = $store;

            fn id(&self) -> u64 {
                self.id
            }

            fn set_id(&mut self, id: u64) {
                self.id = id;
            }
        }
    };
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
}
impl_entity!(Department, StoreName::Departments);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department_id: Option<u64>,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}
impl_entity!(User, StoreName::Users);

/// Keyboard, mouse, headset — small peripherals issued to users.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Accessory {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub assigned_to: Option<u64>,
}
impl_entity!(Accessory, StoreName::Accessories);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItAsset {
    pub id: u64,
    #[serde(default)]
    pub asset_tag: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub assigned_to: Option<u64>,
    #[serde(default)]
    pub antivirus_updated_at: Option<NaiveDate>,
}
impl_entity!(ItAsset, StoreName::ItAssets);

/// Organizational unit (site/branch).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}
impl_entity!(Unit, StoreName::Units);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub unit_id: Option<u64>,
}
impl_entity!(Product, StoreName::Products);

/// Audit-trail line for user-facing actions.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserActivity {
    pub id: u64,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub occurred_at: Option<DateTime<Utc>>,
}
impl_entity!(UserActivity, StoreName::UserActivities);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}
impl_entity!(Schedule, StoreName::Schedules);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Printer {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub department_id: Option<u64>,
}
impl_entity!(Printer, StoreName::Printers);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IpPhone {
    pub id: u64,
    #[serde(default)]
    pub extension: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub assigned_to: Option<u64>,
}
impl_entity!(IpPhone, StoreName::IpPhones);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct WifiNetwork {
    pub id: u64,
    #[serde(default)]
    pub ssid: String,
    #[serde(default)]
    pub band: String,
    #[serde(default)]
    pub location: String,
}
impl_entity!(WifiNetwork, StoreName::WifiNetworks);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IpAddress {
    pub id: u64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub in_use: bool,
}
impl_entity!(IpAddress, StoreName::IpAddresses);

/// Camera inventory record (the device itself, distinct from the per-NVR
/// template rows and daily readings).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CctvCamera {
    pub id: u64,
    #[serde(default)]
    pub camera_id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub nvr_id: Option<u64>,
    #[serde(default)]
    pub location: String,
}
impl_entity!(CctvCamera, StoreName::CctvCameras);
