use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    api::{error::ApiError, response::ApiResponse},
    domain::{DemandResult, ProjectionEntry},
    finance::{FinancialImpact, ImpactInputs},
    state::AppState,
    storage::{self, CostBreakdown, CostInputs, TankSizing},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/demand/aircraft", post(aircraft_demand))
        .route("/demand/gse", post(gse_demand))
        .route("/demand/total", post(total_demand))
        .route("/storage/size", post(storage_size))
        .route("/storage/cost", post(storage_cost))
        .route("/finance/impact", post(financial_impact))
        .route("/projection", get(get_projection))
        .route("/healthz", get(healthz))
        .with_state(state)
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Demand

#[derive(Debug, Deserialize, Validate)]
pub struct AircraftDemandRequest {
    /// Share of flights converted to hydrogen.
    #[validate(range(min = 0.0, max = 1.0))]
    pub fleet_fraction: f64,
    pub end_year: i32,
}

#[derive(Debug, Serialize)]
pub struct AircraftDemandResponse {
    pub daily_volume_ft3: f64,
}

pub async fn aircraft_demand(
    State(st): State<AppState>,
    Json(req): Json<AircraftDemandRequest>,
) -> Result<Json<ApiResponse<AircraftDemandResponse>>, ApiError> {
    req.validate()?;
    let daily_volume_ft3 = st.aircraft_demand().calculate(req.fleet_fraction, req.end_year)?;
    Ok(Json(ApiResponse::success(AircraftDemandResponse {
        daily_volume_ft3,
    })))
}

#[derive(Debug, Deserialize, Validate)]
pub struct GseDemandRequest {
    pub equipment: Vec<String>,
    pub end_year: i32,
}

pub async fn gse_demand(
    State(st): State<AppState>,
    Json(req): Json<GseDemandRequest>,
) -> Result<Json<ApiResponse<DemandResult>>, ApiError> {
    let result = st.gse_demand().calculate(&req.equipment, req.end_year)?;
    let count = result.breakdown.len();
    Ok(Json(ApiResponse::success(result).with_count(count)))
}

#[derive(Debug, Deserialize, Validate)]
pub struct TotalDemandRequest {
    #[validate(range(min = 0.0, max = 1.0))]
    pub fleet_fraction: f64,
    pub equipment: Vec<String>,
    pub end_year: i32,
}

#[derive(Debug, Serialize)]
pub struct TotalDemandResponse {
    pub aircraft_daily_ft3: f64,
    pub gse: DemandResult,
    /// Aircraft and GSE daily figures combined, ft3/day.
    pub total_daily_ft3: f64,
}

pub async fn total_demand(
    State(st): State<AppState>,
    Json(req): Json<TotalDemandRequest>,
) -> Result<Json<ApiResponse<TotalDemandResponse>>, ApiError> {
    req.validate()?;
    let aircraft_daily_ft3 = st.aircraft_demand().calculate(req.fleet_fraction, req.end_year)?;
    let gse = st.gse_demand().calculate(&req.equipment, req.end_year)?;
    let total_daily_ft3 = aircraft_daily_ft3 + gse.daily_volume_ft3;
    Ok(Json(ApiResponse::success(TotalDemandResponse {
        aircraft_daily_ft3,
        gse,
        total_daily_ft3,
    })))
}

// ---------------------------------------------------------------------------
// Storage

#[derive(Debug, Deserialize, Validate)]
pub struct StorageSizeRequest {
    #[validate(range(min = 0.0))]
    pub hydrogen_volume_ft3: f64,
}

pub async fn storage_size(
    State(st): State<AppState>,
    Json(req): Json<StorageSizeRequest>,
) -> Result<Json<ApiResponse<TankSizing>>, ApiError> {
    req.validate()?;
    let sizing = st.storage_sizer().size(req.hydrogen_volume_ft3);
    Ok(Json(ApiResponse::success(sizing)))
}

#[derive(Debug, Deserialize, Validate)]
pub struct StorageCostRequest {
    #[validate(range(min = 0.0))]
    pub total_h2_volume_gal: f64,
    #[validate(range(min = 1.0))]
    pub number_of_tanks: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub tank_diameter_ft: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub tank_length_ft: f64,
    #[validate(range(min = 0.0))]
    pub cost_per_sqft_construction: f64,
    #[validate(range(min = 0.0))]
    pub cost_per_cuft_insulation: f64,
}

pub async fn storage_cost(
    State(_st): State<AppState>,
    Json(req): Json<StorageCostRequest>,
) -> Result<Json<ApiResponse<CostBreakdown>>, ApiError> {
    req.validate()?;
    let breakdown = storage::storage_cost(&CostInputs {
        total_h2_volume_gal: req.total_h2_volume_gal,
        number_of_tanks: req.number_of_tanks,
        tank_diameter_ft: req.tank_diameter_ft,
        tank_length_ft: req.tank_length_ft,
        cost_per_sqft_construction: req.cost_per_sqft_construction,
        cost_per_cuft_insulation: req.cost_per_cuft_insulation,
    })?;
    Ok(Json(ApiResponse::success(breakdown)))
}

// ---------------------------------------------------------------------------
// Finance

#[derive(Debug, Deserialize, Validate)]
pub struct FinancialImpactRequest {
    #[validate(range(min = 0.0, max = 1.0))]
    pub fleet_fraction: f64,
    #[validate(range(min = 0.0))]
    pub total_flights: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub atlanta_fraction: f64,
    #[validate(range(min = 0.0))]
    pub hydrogen_demand_gal: f64,
    #[validate(range(min = 0.0))]
    pub turnaround_minutes: f64,
    #[validate(range(min = 0.0))]
    pub tax_credit_per_gal: f64,
    /// Defaults to the configured baseline when omitted.
    #[validate(range(exclusive_min = 0.0))]
    pub baseline_utilization_hours: Option<f64>,
    #[validate(range(min = 0.0))]
    pub baseline_revenue_usd: Option<f64>,
}

pub async fn financial_impact(
    State(st): State<AppState>,
    Json(req): Json<FinancialImpactRequest>,
) -> Result<Json<ApiResponse<FinancialImpact>>, ApiError> {
    req.validate()?;
    let impact = st.impact_estimator().estimate(&ImpactInputs {
        fleet_fraction: req.fleet_fraction,
        total_flights: req.total_flights,
        atlanta_fraction: req.atlanta_fraction,
        hydrogen_demand_gal: req.hydrogen_demand_gal,
        turnaround_minutes: req.turnaround_minutes,
        tax_credit_per_gal: req.tax_credit_per_gal,
        baseline_utilization_hours: req
            .baseline_utilization_hours
            .unwrap_or(st.cfg.finance.baseline_utilization_hours),
        baseline_revenue_usd: req
            .baseline_revenue_usd
            .unwrap_or(st.cfg.finance.total_revenue_usd),
    });
    Ok(Json(ApiResponse::success(impact)))
}

// ---------------------------------------------------------------------------
// Reference data

pub async fn get_projection(
    State(st): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ProjectionEntry>>>, ApiError> {
    let entries = st.projector.projection().entries().to_vec();
    let count = entries.len();
    Ok(Json(ApiResponse::success(entries).with_count(count)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_fraction_range_is_enforced() {
        let ok = AircraftDemandRequest { fleet_fraction: 0.5, end_year: 2030 };
        assert!(ok.validate().is_ok());

        let too_big = AircraftDemandRequest { fleet_fraction: 1.5, end_year: 2030 };
        assert!(too_big.validate().is_err());

        let negative = AircraftDemandRequest { fleet_fraction: -0.1, end_year: 2030 };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_storage_cost_request_rejects_degenerate_geometry() {
        let req = StorageCostRequest {
            total_h2_volume_gal: 1000.0,
            number_of_tanks: 0.0,
            tank_diameter_ft: 10.0,
            tank_length_ft: 50.0,
            cost_per_sqft_construction: 100.0,
            cost_per_cuft_insulation: 20.0,
        };
        assert!(req.validate().is_err());

        let flat = StorageCostRequest {
            number_of_tanks: 2.0,
            tank_diameter_ft: 0.0,
            ..req
        };
        assert!(flat.validate().is_err());
    }

    #[test]
    fn test_impact_request_optional_baselines() {
        let req = FinancialImpactRequest {
            fleet_fraction: 0.3,
            total_flights: 100_000.0,
            atlanta_fraction: 0.4,
            hydrogen_demand_gal: 1.0e6,
            turnaround_minutes: 20.0,
            tax_credit_per_gal: 3.0,
            baseline_utilization_hours: None,
            baseline_revenue_usd: None,
        };
        assert!(req.validate().is_ok());

        let zero_util = FinancialImpactRequest {
            baseline_utilization_hours: Some(0.0),
            ..req
        };
        assert!(zero_util.validate().is_err());
    }
}
