/*!
 * Simulation Configuration
 *
 * Runtime parameters for a simulation run
 */

use super::errors::ConfigError;
use super::limits::{DEFAULT_QUANTUM, DEFAULT_UNIT_DELAY, MAX_PROCESSES};
use super::types::TimeUnits;
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::time::Duration;

/// Environment variable overriding the quantum
pub const QUANTUM_ENV: &str = "MLFQ_QUANTUM";

/// Environment variable overriding the per-unit delay (microseconds)
pub const UNIT_DELAY_ENV: &str = "MLFQ_UNIT_DELAY_US";

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Maximum burst length, identical across levels
    pub quantum: TimeUnits,
    /// Wall-clock time slept per executed time unit
    pub unit_delay: Duration,
    /// Maximum workload size, also the capacity of each level queue
    pub max_processes: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            unit_delay: DEFAULT_UNIT_DELAY,
            max_processes: MAX_PROCESSES,
        }
    }
}

impl SimConfig {
    /// Configuration with no wall-clock delay (tests, benchmarks)
    pub const fn instant() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            unit_delay: Duration::ZERO,
            max_processes: MAX_PROCESSES,
        }
    }

    /// Load defaults, then apply `MLFQ_QUANTUM` and `MLFQ_UNIT_DELAY_US`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(quantum) = read_env_u64(QUANTUM_ENV)? {
            config.quantum = quantum;
        }
        if let Some(micros) = read_env_u64(UNIT_DELAY_ENV)? {
            config.unit_delay = Duration::from_micros(micros);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_quantum(mut self, quantum: TimeUnits) -> Self {
        self.quantum = quantum;
        self
    }

    pub fn with_unit_delay(mut self, unit_delay: Duration) -> Self {
        self.unit_delay = unit_delay;
        self
    }

    /// Lower the workload limit and queue capacity (never above `MAX_PROCESSES`)
    pub fn with_max_processes(mut self, max_processes: usize) -> Self {
        self.max_processes = max_processes;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quantum == 0 {
            return Err(ConfigError::ZeroQuantum);
        }
        if self.max_processes == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.max_processes > MAX_PROCESSES {
            return Err(ConfigError::CapacityTooLarge {
                requested: self.max_processes,
                limit: MAX_PROCESSES,
            });
        }
        Ok(())
    }

    /// Wall-clock duration modelling a burst of `slice` units
    #[inline]
    pub fn burst_duration(&self, slice: TimeUnits) -> Duration {
        let units = u32::try_from(slice).unwrap_or(u32::MAX);
        self.unit_delay.saturating_mul(units)
    }
}

fn read_env_u64(key: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}
