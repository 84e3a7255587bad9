use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::demand::{AircraftDemandCalculator, GrowthProjector, GseDemandCalculator};
use crate::finance::FinancialImpactEstimator;
use crate::repo::Repositories;
use crate::storage::StorageSizer;

/// Shared, read-only application state. Reference tables and record sets are
/// loaded once here and never mutated, so handlers clone the `Arc`s freely.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub repos: Arc<Repositories>,
    pub projector: Arc<GrowthProjector>,
}

impl AppState {
    pub fn new(cfg: Config) -> Result<Self> {
        let repos = Repositories::load(&cfg.data)?;
        Ok(Self::with_repos(cfg, repos))
    }

    /// Builds state from pre-loaded record sets (tests, embedded use).
    pub fn with_repos(cfg: Config, repos: Repositories) -> Self {
        let projector = Arc::new(GrowthProjector::new(
            Arc::new(cfg.projection.clone()),
            &cfg.factors,
        ));
        Self {
            cfg,
            repos: Arc::new(repos),
            projector,
        }
    }

    pub fn aircraft_demand(&self) -> AircraftDemandCalculator<'_> {
        AircraftDemandCalculator {
            flights: &self.repos.flights,
            projector: &self.projector,
            factors: &self.cfg.factors,
            domestic_code: &self.cfg.data.domestic_source_code,
        }
    }

    pub fn gse_demand(&self) -> GseDemandCalculator<'_> {
        GseDemandCalculator {
            equipment: &self.repos.equipment,
            projector: &self.projector,
            factors: &self.cfg.factors,
        }
    }

    pub fn storage_sizer(&self) -> StorageSizer {
        StorageSizer::new(self.cfg.tanks.clone())
    }

    pub fn impact_estimator(&self) -> FinancialImpactEstimator {
        FinancialImpactEstimator::new(&self.cfg.finance)
    }
}
