use serde::Serialize;

use crate::config::TankSpec;
use crate::error::CalcError;

/// US gallons to cubic feet.
pub const GALLONS_TO_FT3: f64 = 0.1337;

/// Tank count and footprint needed to hold a hydrogen volume.
///
/// `tank_count` is deliberately fractional - rounding is left to the caller
/// so chained cost calculations keep full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TankSizing {
    pub tank_count: f64,
    pub area_ft2: f64,
}

/// Cost estimate for a tank farm, from explicit geometry rather than the
/// fixed reference spec (real-world tanks vary).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub insulation_volume_ft3: f64,
    pub insulation_cost_usd: f64,
    pub footprint_ft2: f64,
    pub construction_cost_usd: f64,
    pub total_cost_usd: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct CostInputs {
    pub total_h2_volume_gal: f64,
    pub number_of_tanks: f64,
    pub tank_diameter_ft: f64,
    pub tank_length_ft: f64,
    pub cost_per_sqft_construction: f64,
    pub cost_per_cuft_insulation: f64,
}

/// Sizes tank farms against the configured reference tank.
#[derive(Debug, Clone)]
pub struct StorageSizer {
    spec: TankSpec,
}

impl StorageSizer {
    pub fn new(spec: TankSpec) -> Self {
        Self { spec }
    }

    /// Liquid volume one tank actually holds after ullage headspace and a
    /// day of boil-off.
    pub fn usable_capacity_ft3(&self) -> f64 {
        self.spec.water_capacity_ft3 * (1.0 - self.spec.ullage) * self.spec.evaporation_retention
    }

    pub fn size(&self, hydrogen_volume_ft3: f64) -> TankSizing {
        let tank_count = hydrogen_volume_ft3 / self.usable_capacity_ft3();
        TankSizing {
            tank_count,
            area_ft2: self.spec.width_ft * self.spec.length_ft * tank_count,
        }
    }
}

/// Cost of storing `total_h2_volume_gal` across `number_of_tanks` cylindrical
/// tanks. Insulation volume comes from the cylindrical-shell term
/// `pi * (d/2)^2 * (2*l/d - 1/3)` applied to the per-tank volume.
pub fn storage_cost(inputs: &CostInputs) -> Result<CostBreakdown, CalcError> {
    if inputs.number_of_tanks <= 0.0 {
        return Err(CalcError::NonPositiveTankCount);
    }
    if inputs.tank_diameter_ft <= 0.0 {
        return Err(CalcError::NonPositiveTankDiameter);
    }

    let total_volume_ft3 = inputs.total_h2_volume_gal * GALLONS_TO_FT3;
    let length_over_diameter = inputs.tank_length_ft / inputs.tank_diameter_ft;

    let insulation_volume_ft3 = std::f64::consts::PI
        * (inputs.tank_diameter_ft / 2.0).powi(2)
        * (2.0 * length_over_diameter - 1.0 / 3.0)
        * (total_volume_ft3 / inputs.number_of_tanks);
    let insulation_cost_usd = insulation_volume_ft3 * inputs.cost_per_cuft_insulation;

    let footprint_ft2 = inputs.tank_diameter_ft * inputs.tank_length_ft * inputs.number_of_tanks;
    let construction_cost_usd = footprint_ft2 * inputs.cost_per_sqft_construction;

    Ok(CostBreakdown {
        insulation_volume_ft3,
        insulation_cost_usd,
        footprint_ft2,
        construction_cost_usd,
        total_cost_usd: insulation_cost_usd + construction_cost_usd,
    })
}
