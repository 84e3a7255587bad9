use tracing::debug;

use super::{apply_reserve_buffer, GrowthProjector};
use crate::config::ConversionFactors;
use crate::error::CalcError;
use crate::repo::FlightStore;

/// Daily hydrogen volume needed to replace Jet A across the converted share
/// of the July domestic schedule.
pub struct AircraftDemandCalculator<'a> {
    pub flights: &'a FlightStore,
    pub projector: &'a GrowthProjector,
    pub factors: &'a ConversionFactors,
    /// Data-source code marking domestic legs.
    pub domestic_code: &'a str,
}

impl AircraftDemandCalculator<'_> {
    /// `fleet_fraction` is the share of flights converted to hydrogen, 0..=1
    /// (range-checked by the caller). An empty filtered record set yields a
    /// zero estimate, not an error.
    pub fn calculate(&self, fleet_fraction: f64, target_year: i32) -> Result<f64, CalcError> {
        let records = self.flights.peak_month_domestic(self.domestic_code);
        if records.is_empty() {
            debug!("no peak-month domestic flight records, demand is zero");
            return Ok(0.0);
        }

        let total_fuel_lbs: f64 = records.iter().map(|r| r.fuel_burn_lbs()).sum();
        let converted_fuel_lbs = fleet_fraction * total_fuel_lbs;

        let growth = self.projector.project(target_year)?;
        let projected_fuel_lbs = converted_fuel_lbs * (1.0 + growth);

        let h2_weight_lbs = projected_fuel_lbs / self.factors.jet_a_to_h2;
        let h2_volume_ft3 = h2_weight_lbs / self.factors.h2_density_lbs_ft3;

        let daily = apply_reserve_buffer(h2_volume_ft3).daily_ft3;
        debug!(
            records = records.len(),
            total_fuel_lbs, daily, "aircraft hydrogen demand computed"
        );
        Ok(daily)
    }
}
