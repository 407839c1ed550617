use chrono::{DateTime, Utc};
use rand::Rng;

use crate::{core::sensors::Clock, domain::diagnostics::ThermalProbe};

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Thermal probe drawing a uniform reading in `[0, 100)`
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomThermalProbe;

impl ThermalProbe for RandomThermalProbe {
    fn read(&self) -> f64 {
        rand::rng().random::<f64>() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostics::calibrate;

    #[test]
    fn test_random_reading_in_range() {
        let probe = RandomThermalProbe;
        for _ in 0..1000 {
            let reading = probe.read();
            assert!((0.0..100.0).contains(&reading));
            assert!(calibrate(reading) > 0.0);
        }
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
