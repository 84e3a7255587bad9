use serde::Serialize;

use crate::config::FinanceConfig;

/// Inputs to the financial impact model. Range validation (fractions 0..=1,
/// non-negative rates, positive baseline utilization) happens at the API
/// boundary before these reach the estimator.
#[derive(Debug, Clone, Copy)]
pub struct ImpactInputs {
    /// Share of flights converted to hydrogen.
    pub fleet_fraction: f64,
    /// Total flights per year.
    pub total_flights: f64,
    /// Share of the carrier's domestic flights departing the home airport.
    pub atlanta_fraction: f64,
    /// Hydrogen demand, gallons.
    pub hydrogen_demand_gal: f64,
    /// Extra turnaround time per hydrogen flight, minutes.
    pub turnaround_minutes: f64,
    /// Tax credit, USD per gallon.
    pub tax_credit_per_gal: f64,
    /// Baseline Jet A fleet utilization, flight hours.
    pub baseline_utilization_hours: f64,
    /// Baseline annual revenue, USD.
    pub baseline_revenue_usd: f64,
}

/// Flat numeric record of the estimated impact. Revenue and tax figures are
/// in millions of USD, utilization in flight hours.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FinancialImpact {
    pub utilization_h2_hours: f64,
    pub baseline_revenue_musd: f64,
    pub new_h2_revenue_musd: f64,
    pub total_tax_credits_musd: f64,
    pub revenue_drop_musd: f64,
    pub percent_drop: f64,
    pub income_tax_musd: f64,
    pub income_tax_credits_musd: f64,
    pub tax_credits_compensation_musd: f64,
}

/// Utilization and revenue deltas from converting part of the fleet.
///
/// Deterministic, side-effect-free arithmetic; revenue scales linearly with
/// the utilization ratio (an approximation, not a causal model).
#[derive(Debug, Clone)]
pub struct FinancialImpactEstimator {
    income_tax_usd: f64,
}

impl FinancialImpactEstimator {
    pub fn new(cfg: &FinanceConfig) -> Self {
        Self {
            income_tax_usd: cfg.income_tax_usd,
        }
    }

    pub fn estimate(&self, inputs: &ImpactInputs) -> FinancialImpact {
        // Extra turnaround time directly erodes flight-hour utilization.
        let utilization_h2_hours = inputs.baseline_utilization_hours
            - inputs.fleet_fraction * inputs.total_flights * (inputs.turnaround_minutes / 60.0);

        let baseline_revenue_musd =
            inputs.fleet_fraction * inputs.atlanta_fraction * inputs.baseline_revenue_usd / 1.0e6;
        let new_h2_revenue_musd =
            baseline_revenue_musd * (utilization_h2_hours / inputs.baseline_utilization_hours);
        let revenue_drop_musd = baseline_revenue_musd - new_h2_revenue_musd;
        let percent_drop = if baseline_revenue_musd == 0.0 {
            0.0
        } else {
            100.0 * revenue_drop_musd / baseline_revenue_musd
        };

        let total_tax_credits_musd =
            inputs.hydrogen_demand_gal * inputs.tax_credit_per_gal / 1.0e6;
        let income_tax_musd = inputs.fleet_fraction * self.income_tax_usd / 1.0e6;
        let income_tax_credits_musd = income_tax_musd - total_tax_credits_musd;
        let tax_credits_compensation_musd = total_tax_credits_musd - revenue_drop_musd;

        FinancialImpact {
            utilization_h2_hours,
            baseline_revenue_musd,
            new_h2_revenue_musd,
            total_tax_credits_musd,
            revenue_drop_musd,
            percent_drop,
            income_tax_musd,
            income_tax_credits_musd,
            tax_credits_compensation_musd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> FinancialImpactEstimator {
        FinancialImpactEstimator::new(&FinanceConfig::default())
    }

    fn inputs() -> ImpactInputs {
        ImpactInputs {
            fleet_fraction: 0.5,
            total_flights: 200_000.0,
            atlanta_fraction: 0.4,
            hydrogen_demand_gal: 2_000_000.0,
            turnaround_minutes: 30.0,
            tax_credit_per_gal: 3.0,
            baseline_utilization_hours: 100_000.0,
            baseline_revenue_usd: 1.0e9,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let impact = estimator().estimate(&inputs());

        // 100_000 - 0.5 * 200_000 * 0.5 h = 50_000 h remaining.
        assert!((impact.utilization_h2_hours - 50_000.0).abs() < 1e-9);
        // 0.5 * 0.4 * 1e9 / 1e6 = 200 MUSD.
        assert!((impact.baseline_revenue_musd - 200.0).abs() < 1e-9);
        // Utilization halved, so revenue halves too.
        assert!((impact.new_h2_revenue_musd - 100.0).abs() < 1e-9);
        assert!((impact.revenue_drop_musd - 100.0).abs() < 1e-9);
        assert!((impact.percent_drop - 50.0).abs() < 1e-9);
        // 2e6 gal * 3 $/gal = 6 MUSD in credits.
        assert!((impact.total_tax_credits_musd - 6.0).abs() < 1e-9);
        // 0.5 * 1e8 / 1e6 = 50 MUSD income tax portion.
        assert!((impact.income_tax_musd - 50.0).abs() < 1e-9);
        assert!((impact.income_tax_credits_musd - 44.0).abs() < 1e-9);
        assert!((impact.tax_credits_compensation_musd - (-94.0)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_baseline_revenue_gives_zero_percent_drop() {
        let mut zero = inputs();
        zero.fleet_fraction = 0.0;
        let impact = estimator().estimate(&zero);
        assert_eq!(impact.baseline_revenue_musd, 0.0);
        assert_eq!(impact.revenue_drop_musd, 0.0);
        assert_eq!(impact.percent_drop, 0.0);
        assert!(impact.percent_drop.is_finite());
    }

    #[test]
    fn test_zero_turnaround_means_no_revenue_drop() {
        let mut free = inputs();
        free.turnaround_minutes = 0.0;
        let impact = estimator().estimate(&free);
        assert!((impact.utilization_h2_hours - free.baseline_utilization_hours).abs() < 1e-9);
        assert!(impact.revenue_drop_musd.abs() < 1e-9);
        assert!(impact.percent_drop.abs() < 1e-9);
    }
}
