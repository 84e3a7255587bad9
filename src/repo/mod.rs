use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::DataConfig;
use crate::domain::{FlightRecord, GroundEquipmentRecord, PEAK_MONTH};

/// In-memory flight record set, loaded wholesale at startup and queried by
/// simple predicates. Read-only after load.
#[derive(Debug, Clone, Default)]
pub struct FlightStore {
    records: Vec<FlightRecord>,
}

impl FlightStore {
    pub fn from_records(records: Vec<FlightRecord>) -> Self {
        Self { records }
    }

    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("opening flight dataset {}", path.display()))?;
        let records = reader
            .deserialize()
            .collect::<Result<Vec<FlightRecord>, _>>()
            .with_context(|| format!("parsing flight dataset {}", path.display()))?;
        info!(count = records.len(), path = %path.display(), "loaded flight records");
        Ok(Self { records })
    }

    /// All legs flown in the representative peak month under the given
    /// domestic data-source code.
    pub fn peak_month_domestic(&self, domestic_code: &str) -> Vec<&FlightRecord> {
        self.records
            .iter()
            .filter(|r| r.month == PEAK_MONTH && r.data_source == domestic_code)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// In-memory ground-support-equipment record set.
#[derive(Debug, Clone, Default)]
pub struct GseStore {
    records: Vec<GroundEquipmentRecord>,
}

impl GseStore {
    pub fn from_records(records: Vec<GroundEquipmentRecord>) -> Self {
        Self { records }
    }

    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("opening GSE dataset {}", path.display()))?;
        let records = reader
            .deserialize()
            .collect::<Result<Vec<GroundEquipmentRecord>, _>>()
            .with_context(|| format!("parsing GSE dataset {}", path.display()))?;
        info!(count = records.len(), path = %path.display(), "loaded GSE records");
        Ok(Self { records })
    }

    /// Records whose equipment type is in `names`. Unknown names simply
    /// match nothing.
    pub fn with_names(&self, names: &[String]) -> Vec<&GroundEquipmentRecord> {
        let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
        self.records
            .iter()
            .filter(|r| wanted.contains(r.equipment_type.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The two tabular record sources, loaded once from the configured CSVs.
#[derive(Debug, Clone, Default)]
pub struct Repositories {
    pub flights: FlightStore,
    pub equipment: GseStore,
}

impl Repositories {
    pub fn load(cfg: &DataConfig) -> Result<Self> {
        Ok(Self {
            flights: FlightStore::from_csv_path(&cfg.aircraft_csv)?,
            equipment: GseStore::from_csv_path(&cfg.gse_csv)?,
        })
    }
}
