pub mod aircraft;
pub mod growth;
pub mod gse;

pub use aircraft::AircraftDemandCalculator;
pub use growth::GrowthProjector;
pub use gse::GseDemandCalculator;

/// Days of reserve supply held on top of the operating cycle.
pub const RESERVE_DAYS: f64 = 11.0;
/// Length of the operating cycle the demand figures average over.
pub const CYCLE_DAYS: f64 = 31.0;

/// A raw hydrogen volume with the reserve buffer applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferedDemand {
    /// Volume plus reserve over the full cycle, ft3.
    pub total_ft3: f64,
    /// Daily average over the cycle, ft3/day.
    pub daily_ft3: f64,
}

/// Applies the fixed 11-over-31-day reserve policy to a raw volume.
///
/// The buffer accrues at one day's share of the volume per reserve day, so
/// the closed form is `total = v * (1 + 11/31)`, `daily = total / 31`.
pub fn apply_reserve_buffer(volume_ft3: f64) -> BufferedDemand {
    let buffer_per_day = volume_ft3 / CYCLE_DAYS;
    let total_ft3 = volume_ft3 + buffer_per_day * RESERVE_DAYS;
    BufferedDemand {
        total_ft3,
        daily_ft3: total_ft3 / CYCLE_DAYS,
    }
}
