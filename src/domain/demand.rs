use serde::Serialize;

use super::FuelType;

/// Result of a GSE demand calculation. Created fresh per call; never stored.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DemandResult {
    /// Daily hydrogen volume over the 31-day window, ft3/day.
    pub daily_volume_ft3: f64,
    /// Buffered hydrogen volume over the whole window, ft3.
    pub total_volume_ft3: f64,
    /// One entry per matched equipment record.
    pub breakdown: Vec<GseBreakdownEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GseBreakdownEntry {
    pub equipment_type: String,
    pub fuel_used: FuelType,
    pub operating_time_departure_min: f64,
    pub operating_time_arrival_min: f64,
    /// Hydrogen equivalent of one departure+arrival cycle, ft3.
    /// Zero for fuels with no hydrogen conversion.
    pub hydrogen_volume_ft3: f64,
}
