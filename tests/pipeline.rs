//! End-to-end pipeline tests: demand -> storage sizing -> cost -> finance,
//! over in-memory record sets.

use hydrogen_dashboard::config::Config;
use hydrogen_dashboard::domain::{FlightRecord, FuelType, GroundEquipmentRecord, PEAK_MONTH};
use hydrogen_dashboard::finance::ImpactInputs;
use hydrogen_dashboard::repo::{FlightStore, GseStore, Repositories};
use hydrogen_dashboard::state::AppState;
use hydrogen_dashboard::storage::{self, CostInputs, GALLONS_TO_FT3};

fn flight(fuel: f64, air_time: f64) -> FlightRecord {
    FlightRecord {
        month: PEAK_MONTH,
        data_source: "DU".into(),
        unique_carrier: "DL".into(),
        unique_carrier_name: "Delta Air Lines".into(),
        origin: "ATL".into(),
        dest: "MCO".into(),
        fuel_consumption_lbs: fuel,
        air_time_min: air_time,
    }
}

fn gse(name: &str, fuel: FuelType, rate: f64, dep: f64, arr: f64) -> GroundEquipmentRecord {
    GroundEquipmentRecord {
        equipment_type: name.into(),
        fuel_used: fuel,
        usable_fuel_consumption_ft3_min: rate,
        operating_time_departure_min: dep,
        operating_time_arrival_min: arr,
        notes: String::new(),
    }
}

fn state() -> AppState {
    let repos = Repositories {
        flights: FlightStore::from_records(vec![flight(5000.0, 20.0), flight(6000.0, 40.0)]),
        equipment: GseStore::from_records(vec![
            gse("Baggage Tractor", FuelType::Diesel, 0.9, 15.0, 10.0),
            gse("Catering Truck", FuelType::Gasoline, 1.1, 20.0, 15.0),
            gse("Water Truck", FuelType::Other, 0.0, 10.0, 10.0),
        ]),
    };
    AppState::with_repos(Config::default(), repos)
}

#[test]
fn demand_feeds_storage_sizing() {
    let st = state();

    let aircraft_daily = st.aircraft_demand().calculate(0.5, 2030).unwrap();
    assert!((aircraft_daily - 11.18004034796745).abs() < 1e-9);

    let gse_result = st
        .gse_demand()
        .calculate(
            &["Baggage Tractor".into(), "Catering Truck".into(), "Water Truck".into()],
            2030,
        )
        .unwrap();
    assert_eq!(gse_result.breakdown.len(), 3);
    assert!(gse_result.daily_volume_ft3 > 0.0);

    let combined_daily = aircraft_daily + gse_result.daily_volume_ft3;
    let sizing = st.storage_sizer().size(combined_daily);
    assert!(sizing.tank_count > 0.0);
    // One tank holds ~2270 ft3, so the reference scenario stays in the
    // low tens of tanks.
    assert!(sizing.tank_count < 50.0);
    assert!((sizing.area_ft2 / sizing.tank_count - 10.1667 * 56.5).abs() < 1e-9);
}

#[test]
fn sizing_feeds_cost_model() {
    let st = state();
    let gse_result = st
        .gse_demand()
        .calculate(&["Baggage Tractor".into()], 2035)
        .unwrap();

    let sizing = st.storage_sizer().size(gse_result.total_volume_ft3);
    let tanks = sizing.tank_count.ceil().max(1.0);

    let cost = storage::storage_cost(&CostInputs {
        total_h2_volume_gal: gse_result.total_volume_ft3 / GALLONS_TO_FT3,
        number_of_tanks: tanks,
        tank_diameter_ft: 10.1667,
        tank_length_ft: 56.5,
        cost_per_sqft_construction: 100.0,
        cost_per_cuft_insulation: 20.0,
    })
    .unwrap();

    assert!(cost.insulation_cost_usd > 0.0);
    assert!(cost.construction_cost_usd > 0.0);
    assert!(
        (cost.total_cost_usd - (cost.insulation_cost_usd + cost.construction_cost_usd)).abs()
            < 1e-6
    );
}

#[test]
fn demand_feeds_financial_impact() {
    let st = state();
    let daily_ft3 = st.aircraft_demand().calculate(0.4, 2040).unwrap();
    let demand_gal = daily_ft3 / GALLONS_TO_FT3;

    let impact = st.impact_estimator().estimate(&ImpactInputs {
        fleet_fraction: 0.4,
        total_flights: 150_000.0,
        atlanta_fraction: 0.45,
        hydrogen_demand_gal: demand_gal,
        turnaround_minutes: 25.0,
        tax_credit_per_gal: 3.0,
        baseline_utilization_hours: st.cfg.finance.baseline_utilization_hours,
        baseline_revenue_usd: st.cfg.finance.total_revenue_usd,
    });

    assert!(impact.utilization_h2_hours < st.cfg.finance.baseline_utilization_hours);
    assert!(impact.revenue_drop_musd > 0.0);
    assert!(impact.percent_drop > 0.0 && impact.percent_drop < 100.0);
    assert!(impact.total_tax_credits_musd >= 0.0);
}

#[test]
fn empty_datasets_produce_zeroes_not_errors() {
    let st = AppState::with_repos(Config::default(), Repositories::default());
    assert_eq!(st.aircraft_demand().calculate(0.8, 2045).unwrap(), 0.0);
    let gse = st.gse_demand().calculate(&["Anything".into()], 2045).unwrap();
    assert_eq!(gse.daily_volume_ft3, 0.0);
    assert!(gse.breakdown.is_empty());
}
