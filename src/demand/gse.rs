use tracing::debug;

use super::{apply_reserve_buffer, GrowthProjector};
use crate::config::ConversionFactors;
use crate::domain::{DemandResult, GseBreakdownEntry};
use crate::error::CalcError;
use crate::repo::GseStore;

/// Hydrogen demand for the selected ground-support-equipment types, scaled
/// from one departure+arrival cycle up to the projected July schedule.
pub struct GseDemandCalculator<'a> {
    pub equipment: &'a GseStore,
    pub projector: &'a GrowthProjector,
    pub factors: &'a ConversionFactors,
}

impl GseDemandCalculator<'_> {
    /// Names not present in the dataset are silently excluded; an empty
    /// selection (or no matches at all) yields a zeroed result.
    pub fn calculate(
        &self,
        equipment_types: &[String],
        target_year: i32,
    ) -> Result<DemandResult, CalcError> {
        let matched = self.equipment.with_names(equipment_types);
        if matched.is_empty() {
            debug!("no matching equipment records, demand is zero");
            return Ok(DemandResult::default());
        }

        let mut hydrogen_per_cycle_ft3 = 0.0;
        let mut breakdown = Vec::with_capacity(matched.len());
        for rec in &matched {
            let fuel_volume = rec.fuel_volume_per_cycle_ft3();
            let hydrogen_volume = match rec.fuel_used.conversion_factor(self.factors) {
                Some(divisor) => fuel_volume / divisor,
                // Unknown fuels stay in the breakdown but add nothing.
                None => 0.0,
            };
            hydrogen_per_cycle_ft3 += hydrogen_volume;

            breakdown.push(GseBreakdownEntry {
                equipment_type: rec.equipment_type.clone(),
                fuel_used: rec.fuel_used,
                operating_time_departure_min: rec.operating_time_departure_min,
                operating_time_arrival_min: rec.operating_time_arrival_min,
                hydrogen_volume_ft3: hydrogen_volume,
            });
        }

        let growth = self.projector.project(target_year)?;
        let july_volume_ft3 = self.factors.july_operations * hydrogen_per_cycle_ft3 * (1.0 + growth);
        let buffered = apply_reserve_buffer(july_volume_ft3);

        debug!(
            matched = matched.len(),
            daily = buffered.daily_ft3,
            "GSE hydrogen demand computed"
        );
        Ok(DemandResult {
            daily_volume_ft3: buffered.daily_ft3,
            total_volume_ft3: buffered.total_ft3,
            breakdown,
        })
    }
}
