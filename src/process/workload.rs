/*!
 * Workload Resolution
 * Turn operator input into a validated list of process specs
 */

use super::types::ProcessSpec;
use crate::core::errors::WorkloadError;
use crate::core::limits::{DEFAULT_WORKLOAD, MAX_PROCESSES};
use std::collections::HashSet;
use tracing::warn;

/// Menu selection offered to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Default,
    Custom,
}

impl MenuChoice {
    /// Parse a raw menu answer; anything but `1` or `2` falls back to defaults
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "1" => MenuChoice::Default,
            "2" => MenuChoice::Custom,
            other => {
                warn!(choice = other, "Invalid choice, using default processes");
                MenuChoice::Default
            }
        }
    }
}

/// The fixed five-process workload
pub fn default_workload() -> Vec<ProcessSpec> {
    DEFAULT_WORKLOAD.iter().copied().map(ProcessSpec::from).collect()
}

/// Whether a requested process count is accepted
#[inline]
pub fn count_in_range(count: i64) -> bool {
    usize::try_from(count).is_ok_and(|c| (1..=MAX_PROCESSES).contains(&c))
}

/// Resolve a requested count plus entries into the workload to run
///
/// A count outside `1..=MAX_PROCESSES` is recovered locally by substituting
/// the default workload; `entries` is ignored in that case.
pub fn resolve_workload(count: i64, entries: Vec<ProcessSpec>) -> Vec<ProcessSpec> {
    if count_in_range(count) {
        entries
    } else {
        warn!(count, "Invalid number of processes, using default workload");
        default_workload()
    }
}

/// Check that a workload can be simulated
pub fn validate_workload(specs: &[ProcessSpec], limit: usize) -> Result<(), WorkloadError> {
    if specs.is_empty() {
        return Err(WorkloadError::Empty);
    }
    if specs.len() > limit {
        return Err(WorkloadError::TooMany {
            count: specs.len(),
            limit,
        });
    }

    let mut seen = HashSet::with_capacity(specs.len());
    for spec in specs {
        if !seen.insert(spec.id) {
            return Err(WorkloadError::DuplicateId(spec.id));
        }
        if spec.total_time == 0 {
            return Err(WorkloadError::ZeroTime(spec.id));
        }
    }

    // The final clock value is the sum of all total times
    specs
        .iter()
        .try_fold(0u64, |sum, spec| sum.checked_add(spec.total_time))
        .ok_or(WorkloadError::TotalOverflow)?;

    Ok(())
}
