//! Dataset validation.
//!
//! Case datasets come from files maintained outside the application, so they are checked once at
//! load time. After that the matching engine can assume unique ids and sane outcome figures.

use crate::cases::HistoricalCase;
use crate::{NexusError, NexusResult};
use std::collections::HashSet;

/// Earliest and latest case years accepted.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

/// Validates a full case dataset.
///
/// # Errors
///
/// Returns `NexusError::DuplicateCaseId` when two cases share an id, or
/// `NexusError::InvalidCase` when a year or ROI figure is out of range.
pub fn validate_cases(cases: &[HistoricalCase]) -> NexusResult<()> {
    let mut seen = HashSet::with_capacity(cases.len());
    for case in cases {
        if !seen.insert(case.id.as_str()) {
            return Err(NexusError::DuplicateCaseId(case.id.to_string()));
        }
        validate_case(case)?;
    }
    Ok(())
}

fn validate_case(case: &HistoricalCase) -> NexusResult<()> {
    let invalid = |reason: String| NexusError::InvalidCase {
        id: case.id.to_string(),
        reason,
    };

    if !YEAR_RANGE.contains(&case.year) {
        return Err(invalid(format!(
            "year {} is outside {}..={}",
            case.year,
            YEAR_RANGE.start(),
            YEAR_RANGE.end()
        )));
    }

    if let Some(roi) = case.outcomes.roi_achieved {
        if !roi.is_finite() || roi <= 0.0 {
            return Err(invalid(format!("roiAchieved must be positive, got {roi}")));
        }
    }

    if case
        .success_factors
        .iter()
        .chain(case.risk_factors.iter())
        .any(|f| f.trim().is_empty())
    {
        return Err(invalid("factors cannot be blank".into()));
    }

    Ok(())
}
