//! Simulation clock configuration.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{CoreError, CoreResult};

/// Fixed clock settings for one simulation run.
///
/// Timestep indices are 0-based; timestep `t` covers the wall-clock span
/// `[start + t * seconds_per_timestep, start + (t + 1) * seconds_per_timestep)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationParameters {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub seconds_per_timestep: u64,
}

impl SimulationParameters {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, seconds_per_timestep: u64) -> CoreResult<Self> {
        if seconds_per_timestep == 0 {
            return Err(CoreError::InvalidArg {
                what: "seconds_per_timestep must be positive",
            });
        }
        if end <= start {
            return Err(CoreError::InvalidArg {
                what: "simulation end must come after its start",
            });
        }
        Ok(Self {
            start,
            end,
            seconds_per_timestep,
        })
    }

    /// January 1st of `year`, midnight to midnight.
    pub fn one_day_only(year: i32, seconds_per_timestep: u64) -> CoreResult<Self> {
        let start = first_of_january(year)?;
        let end = start + chrono::Duration::days(1);
        Self::new(start, end, seconds_per_timestep)
    }

    /// The whole of `year`.
    pub fn full_year(year: i32, seconds_per_timestep: u64) -> CoreResult<Self> {
        let start = first_of_january(year)?;
        let end = first_of_january(year + 1)?;
        Self::new(start, end, seconds_per_timestep)
    }

    pub fn duration_seconds(&self) -> u64 {
        (self.end - self.start).num_seconds() as u64
    }

    /// Number of whole timesteps in the run; a trailing partial step is dropped.
    pub fn timestep_count(&self) -> usize {
        (self.duration_seconds() / self.seconds_per_timestep) as usize
    }
}

fn first_of_january(year: i32) -> CoreResult<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or(CoreError::InvalidArg {
            what: "year is outside the supported calendar range",
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_day_at_minute_steps_has_1440_timesteps() {
        let params = SimulationParameters::one_day_only(2021, 60).unwrap();
        assert_eq!(params.duration_seconds(), 86_400);
        assert_eq!(params.timestep_count(), 1440);
    }

    #[test]
    fn full_year_counts_leap_days() {
        let leap = SimulationParameters::full_year(2020, 3600).unwrap();
        assert_eq!(leap.timestep_count(), 366 * 24);
        let common = SimulationParameters::full_year(2021, 3600).unwrap();
        assert_eq!(common.timestep_count(), 365 * 24);
    }

    #[test]
    fn zero_step_width_is_rejected() {
        assert!(SimulationParameters::one_day_only(2021, 0).is_err());
    }

    #[test]
    fn reversed_range_is_rejected() {
        let start = first_of_january(2021).unwrap();
        let end = first_of_january(2020).unwrap();
        assert!(SimulationParameters::new(start, end, 60).is_err());
    }

    #[test]
    fn trailing_partial_step_is_dropped() {
        let start = first_of_january(2021).unwrap();
        let end = start + chrono::Duration::seconds(150);
        let params = SimulationParameters::new(start, end, 60).unwrap();
        assert_eq!(params.timestep_count(), 2);
    }
}
