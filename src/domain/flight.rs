use serde::{Deserialize, Serialize};

/// Month used as the representative/peak slice of the flight dataset.
pub const PEAK_MONTH: u32 = 7;

/// One historical flight leg from the BTS fuel dataset.
///
/// Read-only after load; all demand math accesses fields by name rather than
/// by column position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRecord {
    pub month: u32,
    /// BTS data-source code ("DU" = domestic).
    pub data_source: String,
    pub unique_carrier: String,
    #[serde(default)]
    pub unique_carrier_name: String,
    pub origin: String,
    pub dest: String,
    /// Fuel burn rate, lbs per flight hour.
    pub fuel_consumption_lbs: f64,
    /// Airborne time, minutes.
    pub air_time_min: f64,
}

impl FlightRecord {
    /// Fuel burned on this leg, lbs (air time converted to hours).
    pub fn fuel_burn_lbs(&self) -> f64 {
        self.fuel_consumption_lbs * self.air_time_min / 60.0
    }
}
