use std::sync::Arc;

use crate::config::ConversionFactors;
use crate::domain::{OperationsProjection, BASE_YEAR};
use crate::error::CalcError;

/// Turns a target year into a dimensionless growth fraction against the
/// 2023 baseline, scaled down to the carrier/market subset of operations.
///
/// Pure function of the reference table; shared by both demand calculators.
#[derive(Debug, Clone)]
pub struct GrowthProjector {
    projection: Arc<OperationsProjection>,
    carrier_flight_share: f64,
    carrier_domestic_share: f64,
}

impl GrowthProjector {
    pub fn new(projection: Arc<OperationsProjection>, factors: &ConversionFactors) -> Self {
        Self {
            projection,
            carrier_flight_share: factors.carrier_flight_share,
            carrier_domestic_share: factors.carrier_domestic_share,
        }
    }

    pub fn projection(&self) -> &OperationsProjection {
        &self.projection
    }

    /// `(ops[year] - ops[2023]) / ops[2023]`, scaled by the domestic and
    /// carrier shares. Fails when `target_year` is outside the horizon.
    pub fn project(&self, target_year: i32) -> Result<f64, CalcError> {
        let ops_base = self
            .projection
            .operations_for(BASE_YEAR)
            .ok_or(CalcError::YearNotProjected(BASE_YEAR))?;
        let ops_target = self
            .projection
            .operations_for(target_year)
            .ok_or(CalcError::YearNotProjected(target_year))?;

        let growth = (ops_target - ops_base) / ops_base;
        Ok(growth * self.carrier_domestic_share * self.carrier_flight_share)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn projector() -> GrowthProjector {
        GrowthProjector::new(
            Arc::new(OperationsProjection::default()),
            &ConversionFactors::default(),
        )
    }

    #[test]
    fn test_base_year_has_zero_growth() {
        assert_eq!(projector().project(2023).unwrap(), 0.0);
    }

    #[rstest]
    #[case(2030, 0.11990595695476387)]
    #[case(2035, 0.19055414602781484)]
    fn test_known_years_match_reference_table(#[case] year: i32, #[case] expected: f64) {
        let got = projector().project(year).unwrap();
        assert!((got - expected).abs() < 1e-12, "{year}: {got}");
    }

    #[rstest]
    #[case(2022)]
    #[case(2051)]
    #[case(1999)]
    fn test_year_outside_horizon_fails(#[case] year: i32) {
        assert_eq!(
            projector().project(year),
            Err(CalcError::YearNotProjected(year))
        );
    }

    proptest! {
        #[test]
        fn prop_growth_is_monotone_in_year(a in 2023i32..=2050, b in 2023i32..=2050) {
            let p = projector();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(p.project(lo).unwrap() <= p.project(hi).unwrap());
        }

        #[test]
        fn prop_growth_is_non_negative(year in 2023i32..=2050) {
            prop_assert!(projector().project(year).unwrap() >= 0.0);
        }
    }
}
