use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::OperationsProjection;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub factors: ConversionFactors,
    #[serde(default)]
    pub tanks: TankSpec,
    #[serde(default)]
    pub finance: FinanceConfig,
    #[serde(default)]
    pub projection: OperationsProjection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            enable_cors: true,
            request_timeout_secs: 10,
        }
    }
}

/// Where the tabular record sets are loaded from at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub aircraft_csv: PathBuf,
    pub gse_csv: PathBuf,
    /// BTS data-source code marking domestic legs.
    pub domestic_source_code: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            aircraft_csv: "data/aircraft_data.csv".into(),
            gse_csv: "data/gse_data.csv".into(),
            domestic_source_code: "DU".into(),
        }
    }
}

/// Fuel-to-hydrogen conversion constants and carrier/market shares.
///
/// Defaults are the study's reference values (DOE LH2 density, LHV ratios,
/// Delta's ATL share); every one of them can be overridden from the config
/// file or environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionFactors {
    /// Diesel volume per equivalent hydrogen volume.
    pub diesel_to_h2: f64,
    /// Gasoline volume per equivalent hydrogen volume.
    pub gasoline_to_h2: f64,
    /// Jet A mass per equivalent hydrogen mass (LHV ratio).
    pub jet_a_to_h2: f64,
    /// Liquid hydrogen density, lbs/ft3.
    pub h2_density_lbs_ft3: f64,
    /// Share of airport flights operated by the carrier of interest.
    pub carrier_flight_share: f64,
    /// Share of the carrier's flights that are domestic.
    pub carrier_domestic_share: f64,
    /// Total airport operations during the representative July.
    pub july_operations: f64,
}

impl Default for ConversionFactors {
    fn default() -> Self {
        Self {
            diesel_to_h2: 2.81,
            gasoline_to_h2: 2.76,
            jet_a_to_h2: 2.8,
            h2_density_lbs_ft3: 4.43,
            carrier_flight_share: 0.67,
            carrier_domestic_share: 0.89,
            july_operations: 33_440.0,
        }
    }
}

/// Geometry and loss fractions of the reference storage tank.
#[derive(Debug, Clone, Deserialize)]
pub struct TankSpec {
    pub width_ft: f64,
    pub length_ft: f64,
    /// Gross water capacity, ft3.
    pub water_capacity_ft3: f64,
    /// Fraction of volume held by hydrogen vapour headspace.
    pub ullage: f64,
    /// Fraction of liquid hydrogen retained per day (boil-off complement).
    pub evaporation_retention: f64,
}

impl Default for TankSpec {
    fn default() -> Self {
        Self {
            width_ft: 10.1667,
            length_ft: 56.5,
            // 18 014 gal converted to ft3
            water_capacity_ft3: 18_014.0 / 7.48052,
            ullage: 0.05,
            evaporation_retention: 0.9925,
        }
    }
}

/// Baseline financial figures for the impact model. Placeholder magnitudes
/// from the study; treated as configuration, not fixed logic.
#[derive(Debug, Clone, Deserialize)]
pub struct FinanceConfig {
    /// Annual Jet A fleet utilization, flight hours.
    pub baseline_utilization_hours: f64,
    /// Annual revenue attributable to the market of interest, USD.
    pub total_revenue_usd: f64,
    /// Annual income tax paid, USD.
    pub income_tax_usd: f64,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            baseline_utilization_hours: 100_000.0,
            total_revenue_usd: 1.0e9,
            income_tax_usd: 1.0e8,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("H2__").split("__"));
        Ok(figment.extract()?)
    }
}
