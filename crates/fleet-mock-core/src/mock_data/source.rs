//! Clock and randomness used to simulate live telemetry
//!
//! Everything non-deterministic the provider does goes through
//! [`TelemetrySource`], so tests and reproducible demos can swap it out.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::sync::Mutex;

use crate::config::defaults::{DEFAULT_RPM_RANGE, DEFAULT_SPEED_RANGE};
use crate::error::{AppError, Result};

/// Source of the "live" parts of a telemetry frame
pub trait TelemetrySource: Send + Sync {
    /// Current time, stamped on each telemetry frame
    fn now(&self) -> DateTime<Utc>;

    /// Uniform integer in the half-open `range`
    ///
    /// Implementations return `range.start` for an empty range.
    fn sample(&self, range: Range<u32>) -> u32;
}

/// System clock and thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveSource;

impl TelemetrySource for LiveSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sample(&self, range: Range<u32>) -> u32 {
        if range.is_empty() {
            return range.start;
        }
        rand::thread_rng().gen_range(range)
    }
}

/// System clock with a seeded RNG, so repeated runs yield the same readings
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl TelemetrySource for SeededSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sample(&self, range: Range<u32>) -> u32 {
        if range.is_empty() {
            return range.start;
        }
        // A poisoned lock still holds a usable RNG
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(range)
    }
}

/// Bounds for the randomized telemetry fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryRanges {
    /// Vehicle speed in km/h
    pub speed: Range<u32>,
    /// Engine revolutions per minute
    pub rpm: Range<u32>,
}

impl TelemetryRanges {
    /// Build ranges, rejecting empty ones
    pub fn new(speed: Range<u32>, rpm: Range<u32>) -> Result<Self> {
        let ranges = Self { speed, rpm };
        ranges.validate()?;
        Ok(ranges)
    }

    pub fn validate(&self) -> Result<()> {
        if self.speed.is_empty() {
            return Err(AppError::ConfigError(format!(
                "speed range {}..{} is empty",
                self.speed.start, self.speed.end
            )));
        }
        if self.rpm.is_empty() {
            return Err(AppError::ConfigError(format!(
                "rpm range {}..{} is empty",
                self.rpm.start, self.rpm.end
            )));
        }
        Ok(())
    }
}

impl Default for TelemetryRanges {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED_RANGE,
            rpm: DEFAULT_RPM_RANGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_source_stays_in_range() {
        let source = LiveSource;
        for _ in 0..500 {
            let speed = source.sample(20..100);
            assert!((20..100).contains(&speed));
        }
    }

    #[test]
    fn test_empty_range_returns_start() {
        assert_eq!(LiveSource.sample(5..5), 5);
        assert_eq!(SeededSource::new(1).sample(9..3), 9);
    }

    #[test]
    fn test_seeded_sources_agree() {
        let a = SeededSource::new(42);
        let b = SeededSource::new(42);

        let first: Vec<u32> = (0..20).map(|_| a.sample(1500..3500)).collect();
        let second: Vec<u32> = (0..20).map(|_| b.sample(1500..3500)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_live_clock_moves_forward() {
        let first = LiveSource.now();
        let second = LiveSource.now();
        assert!(second >= first);
    }

    #[test]
    fn test_default_ranges() {
        let ranges = TelemetryRanges::default();
        assert_eq!(ranges.speed, 20..100);
        assert_eq!(ranges.rpm, 1500..3500);
        assert!(ranges.validate().is_ok());
    }

    #[test]
    fn test_empty_ranges_rejected() {
        assert!(matches!(
            TelemetryRanges::new(100..20, 1500..3500),
            Err(AppError::ConfigError(_))
        ));
        assert!(matches!(
            TelemetryRanges::new(20..100, 3500..3500),
            Err(AppError::ConfigError(_))
        ));
    }
}
