use serde::{Deserialize, Deserializer, Serialize};
use strum::EnumString;

use crate::config::ConversionFactors;

/// Fuel burned by a piece of ground support equipment.
///
/// Closed enumeration: anything outside the two convertible fuels collapses
/// into `Other`, which maps to no hydrogen contribution (the equipment is
/// still tracked in breakdowns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, strum::Display)]
#[strum(ascii_case_insensitive)]
pub enum FuelType {
    Diesel,
    Gasoline,
    Other,
}

impl FuelType {
    /// Fuel-volume-per-hydrogen-volume divisor, total over the enum.
    /// `None` means the fuel has no hydrogen equivalent.
    pub fn conversion_factor(&self, factors: &ConversionFactors) -> Option<f64> {
        match self {
            FuelType::Diesel => Some(factors.diesel_to_h2),
            FuelType::Gasoline => Some(factors.gasoline_to_h2),
            FuelType::Other => None,
        }
    }
}

impl<'de> Deserialize<'de> for FuelType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or(FuelType::Other))
    }
}

/// One equipment type from the ground fleet survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundEquipmentRecord {
    pub equipment_type: String,
    pub fuel_used: FuelType,
    /// Usable fuel consumption while operating, ft3/min.
    pub usable_fuel_consumption_ft3_min: f64,
    /// Minutes the unit runs servicing a departure.
    pub operating_time_departure_min: f64,
    /// Minutes the unit runs servicing an arrival.
    pub operating_time_arrival_min: f64,
    #[serde(default)]
    pub notes: String,
}

impl GroundEquipmentRecord {
    /// Fuel volume burned over one departure+arrival turn, ft3.
    pub fn fuel_volume_per_cycle_ft3(&self) -> f64 {
        self.usable_fuel_consumption_ft3_min
            * (self.operating_time_departure_min + self.operating_time_arrival_min)
    }
}
