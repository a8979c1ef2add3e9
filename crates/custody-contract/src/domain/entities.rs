//! # Domain Entities
//!
//! The persisted data model: one JSON object per asset under its key in the
//! world state. Field names are stable across versions; every field added
//! after first release carries `#[serde(default)]` so old snapshots keep
//! decoding.
//!
//! ## Type Decisions
//!
//! - Sensor payloads stay `String`: readings arrive from heterogeneous field
//!   hardware (DHT11, DS18B20, pH probe, GPS, pressure) as preformatted
//!   text and are carried opaquely, never interpreted.
//! - Stage dates serialize as stringified epoch seconds so that every
//!   free-form field on a record is a string.

use serde::{Deserialize, Serialize};

use super::status::{StageOp, Status};

/// Unix timestamp in seconds since epoch.
pub type Timestamp = u64;

/// Document-type discriminator for commodity products.
pub const DOC_TYPE_PRODUCT: &str = "product";

/// Document-type discriminator for regulated batches.
pub const DOC_TYPE_BATCH: &str = "batch";

/// One sensor/location observation appended to an asset's record.
///
/// Owned exclusively by its parent record; never independently addressable.
/// Insertion order is transaction order. No plausibility or timestamp
/// monotonicity checks are performed on append.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryReading {
    /// Identifier of the sensor unit that produced the reading.
    #[serde(default)]
    pub sensor_id: String,
    /// Reading time as reported by the sensor. Carried opaquely.
    #[serde(default)]
    pub time: String,
    /// Product temperature (e.g. DS18B20 probe).
    #[serde(default)]
    pub temperature: String,
    /// Ambient room temperature (e.g. DHT11).
    #[serde(default)]
    pub room_temperature: String,
    /// Relative humidity (e.g. DHT11).
    #[serde(default)]
    pub humidity: String,
    /// Acidity / pH of the product.
    #[serde(default)]
    pub acidity: String,
    /// Net quantity from a pressure sensor.
    #[serde(default)]
    pub net_quantity: String,
    /// GPS longitude.
    #[serde(default)]
    pub longitude: String,
    /// GPS latitude.
    #[serde(default)]
    pub latitude: String,
}

/// A commodity product tracked through the staged custody lifecycle.
///
/// Created once at genesis with all optional fields blank and
/// `status == Status::Uninitialized` (wire form `""`), then mutated through
/// guarded stage transitions and any number of interleaved telemetry
/// appends. Never deleted by the contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Stable key into the world state. Assigned at creation, never changes.
    pub id: String,
    /// Record-kind discriminator (`"product"`).
    #[serde(default)]
    pub doc_type: String,
    /// Sensor unit installed at a critical point of the supply chain.
    #[serde(default)]
    pub sensor_id: String,
    /// Current custody stage. Single source of truth for which transitions
    /// are legal next.
    #[serde(default)]
    pub status: Status,
    /// Participant that performed the harvest/create stage.
    #[serde(default)]
    pub farmer_id: String,
    /// Epoch-seconds stamp of the harvest/create stage.
    #[serde(default)]
    pub farmer_process_date: String,
    /// Participant that performed the manufacture stage.
    #[serde(default)]
    pub manufacturer_id: String,
    /// Epoch-seconds stamp of the manufacture stage.
    #[serde(default)]
    pub manufacturer_process_date: String,
    /// Participant that performed the distribution stage.
    #[serde(default)]
    pub distributor_id: String,
    /// Epoch-seconds stamp of the distribution stage.
    #[serde(default)]
    pub distributor_process_date: String,
    /// Regulator that flagged the record, if any.
    #[serde(default)]
    pub regulator_id: String,
    /// Epoch-seconds stamp of the regulator action.
    #[serde(default)]
    pub regulator_process_date: String,
    /// Free-form owner field, carried opaquely.
    #[serde(default)]
    pub owner: String,
    /// Free-form description, carried opaquely.
    #[serde(default)]
    pub description: String,
    /// Free-form quantity, carried opaquely.
    #[serde(default)]
    pub quantity: String,
    /// Append-only sensor trail, insertion order = append order.
    #[serde(default)]
    pub telemetry: Vec<TelemetryReading>,
}

impl ProductRecord {
    /// Create the genesis version of a product record.
    ///
    /// All optional fields blank, status uninitialized, empty telemetry.
    pub fn genesis(id: impl Into<String>, sensor_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            doc_type: DOC_TYPE_PRODUCT.to_string(),
            sensor_id: sensor_id.into(),
            status: Status::Uninitialized,
            farmer_id: String::new(),
            farmer_process_date: String::new(),
            manufacturer_id: String::new(),
            manufacturer_process_date: String::new(),
            distributor_id: String::new(),
            distributor_process_date: String::new(),
            regulator_id: String::new(),
            regulator_process_date: String::new(),
            owner: String::new(),
            description: String::new(),
            quantity: String::new(),
            telemetry: Vec::new(),
        }
    }

    /// Apply a successful stage transition in place.
    ///
    /// Sets the operation's fixed target status and stamps the stage's
    /// participant id and processing date. Guards have already been checked
    /// by the caller; this only records the outcome.
    pub fn stamp_stage(&mut self, op: StageOp, participant: &str, at: Timestamp) {
        self.status = op.target();
        let stamp = at.to_string();
        match op {
            StageOp::CreateOrHarvest => {
                self.farmer_id = participant.to_string();
                self.farmer_process_date = stamp;
            }
            StageOp::ManufactureProcessing => {
                self.manufacturer_id = participant.to_string();
                self.manufacturer_process_date = stamp;
            }
            StageOp::DistributorProcessing => {
                self.distributor_id = participant.to_string();
                self.distributor_process_date = stamp;
            }
            StageOp::FlagError => {
                self.regulator_id = participant.to_string();
                self.regulator_process_date = stamp;
            }
        }
    }
}

/// A sealed regulated batch (e.g. a vaccine lot).
///
/// Same genesis/read/append shape as [`ProductRecord`] but no staged
/// custody machine: a flat creation operation plus unconditional telemetry
/// appends.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRecord {
    /// Stable key into the world state.
    pub id: String,
    /// Record-kind discriminator (`"batch"`).
    #[serde(default)]
    pub doc_type: String,
    /// Temperature sensor travelling with the batch.
    #[serde(default)]
    pub temp_sensor_id: String,
    /// Manufacturing date, epoch seconds.
    #[serde(default)]
    pub manufacturing_date: u64,
    /// Expiry date, epoch seconds.
    #[serde(default)]
    pub expiry_date: u64,
    /// Item count, carried opaquely.
    #[serde(default)]
    pub item_count: String,
    /// When the batch entered the ledger, epoch seconds.
    #[serde(default)]
    pub added_at: u64,
    /// Free-form owner field.
    #[serde(default)]
    pub owner: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Append-only sensor trail, insertion order = append order.
    #[serde(default)]
    pub telemetry: Vec<TelemetryReading>,
}
