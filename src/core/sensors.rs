use chrono::{DateTime, Utc};

/// Wall clock used for log timestamps and the header clock
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock frozen at a unix timestamp, for tests and benches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    secs: i64,
}

impl FixedClock {
    pub const fn at(secs: i64) -> Self {
        Self { secs }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.secs, 0).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        // 2024-03-05T12:34:56Z
        let clock = FixedClock::at(1_709_642_096);
        assert_eq!(
            clock.now().format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-03-05 12:34:56"
        );
        assert_eq!(clock.now(), clock.now());
    }
}
