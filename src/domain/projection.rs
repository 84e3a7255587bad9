use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First year of the projection horizon; growth is always measured from here.
pub const BASE_YEAR: i32 = 2023;

/// FAA Terminal Area Forecast projected annual operations for the airport,
/// 2023 through 2050.
static TAF_PROJECTED_OPERATIONS: Lazy<Vec<ProjectionEntry>> = Lazy::new(|| {
    const OPS: [f64; 28] = [
        755_856.0, 784_123.0, 815_016.0, 834_644.0, 853_350.0, 872_286.0, 890_251.0,
        907_846.0, 925_298.0, 942_989.0, 960_976.0, 979_187.0, 997_398.0, 1_016_764.0,
        1_036_063.0, 1_055_234.0, 1_074_792.0, 1_094_786.0, 1_114_237.0, 1_134_615.0,
        1_155_514.0, 1_176_625.0, 1_197_973.0, 1_219_542.0, 1_241_334.0, 1_263_264.0,
        1_285_643.0, 1_308_659.0,
    ];
    OPS.iter()
        .enumerate()
        .map(|(i, &operations)| ProjectionEntry {
            year: BASE_YEAR + i as i32,
            operations,
        })
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionEntry {
    pub year: i32,
    pub operations: f64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("projection table must not be empty")]
    Empty,
    #[error("projection years must be strictly increasing (at year {0})")]
    UnorderedYears(i32),
    #[error("projected operations must be non-decreasing (at year {0})")]
    DecreasingOperations(i32),
}

/// Immutable year -> projected-operations reference table.
///
/// Built once at startup, either from the built-in TAF table or from a
/// config override; lookups are by year value, never by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ProjectionEntry>", into = "Vec<ProjectionEntry>")]
pub struct OperationsProjection {
    entries: Vec<ProjectionEntry>,
}

impl OperationsProjection {
    pub fn new(entries: Vec<ProjectionEntry>) -> Result<Self, ProjectionError> {
        if entries.is_empty() {
            return Err(ProjectionError::Empty);
        }
        for pair in entries.windows(2) {
            if pair[1].year <= pair[0].year {
                return Err(ProjectionError::UnorderedYears(pair[1].year));
            }
            if pair[1].operations < pair[0].operations {
                return Err(ProjectionError::DecreasingOperations(pair[1].year));
            }
        }
        Ok(Self { entries })
    }

    /// Projected operations for `year`, or `None` outside the horizon.
    pub fn operations_for(&self, year: i32) -> Option<f64> {
        self.entries
            .binary_search_by_key(&year, |e| e.year)
            .ok()
            .map(|i| self.entries[i].operations)
    }

    pub fn entries(&self) -> &[ProjectionEntry] {
        &self.entries
    }

    pub fn first_year(&self) -> i32 {
        self.entries[0].year
    }

    pub fn last_year(&self) -> i32 {
        self.entries[self.entries.len() - 1].year
    }
}

impl Default for OperationsProjection {
    fn default() -> Self {
        Self {
            entries: TAF_PROJECTED_OPERATIONS.clone(),
        }
    }
}

impl TryFrom<Vec<ProjectionEntry>> for OperationsProjection {
    type Error = ProjectionError;

    fn try_from(entries: Vec<ProjectionEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<OperationsProjection> for Vec<ProjectionEntry> {
    fn from(p: OperationsProjection) -> Self {
        p.entries
    }
}
