use thiserror::Error;

/// Failures the calculators themselves can produce.
///
/// Empty filtered record sets are deliberately *not* errors - the demand
/// calculators return zero-valued results for those, so this enum only covers
/// failed lookups and storage-math domain violations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("no projected operations for year {0}")]
    YearNotProjected(i32),

    #[error("tank count must be positive")]
    NonPositiveTankCount,

    #[error("tank diameter must be positive")]
    NonPositiveTankDiameter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CalcError::YearNotProjected(2055).to_string(),
            "no projected operations for year 2055"
        );
        assert_eq!(
            CalcError::NonPositiveTankCount.to_string(),
            "tank count must be positive"
        );
    }
}
