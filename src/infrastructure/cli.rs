use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 1.0,
        value_parser = parse_rate
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0,
        value_parser = parse_rate
    )]
    pub frame_rate: f64,
}

/// Parses a rate, rejecting `inf` and `NaN`
fn parse_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if rate.is_finite() {
        Ok(rate)
    } else {
        Err(format!("rate must be a finite number, got {s}"))
    }
}

impl Cli {
    /// Rates below this are raised to it so the terminal intervals stay finite
    pub const MIN_RATE: f64 = 0.1;
    /// Rates above this are lowered to it so the terminal intervals stay non-zero
    pub const MAX_RATE: f64 = 1000.0;

    pub fn tick_rate(&self) -> f64 {
        self.tick_rate.clamp(Self::MIN_RATE, Self::MAX_RATE)
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate.clamp(Self::MIN_RATE, Self::MAX_RATE)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::rstest;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["icbm3000"]).expect("parses");
        assert_eq!(cli.tick_rate(), 1.0);
        assert_eq!(cli.frame_rate(), 30.0);
    }

    #[test]
    fn test_rates() {
        let cli = Cli::try_parse_from(["icbm3000", "--tick-rate", "4", "-f", "60"])
            .expect("parses");
        assert_eq!(cli.tick_rate(), 4.0);
        assert_eq!(cli.frame_rate(), 60.0);
    }

    #[test]
    fn test_rates_are_clamped() {
        let cli = Cli::try_parse_from(["icbm3000", "--tick-rate", "0", "--frame-rate=-3"])
            .expect("parses");
        assert_eq!(cli.tick_rate(), Cli::MIN_RATE);
        assert_eq!(cli.frame_rate(), Cli::MIN_RATE);
    }

    #[test]
    fn test_huge_rates_are_clamped() {
        let cli = Cli::try_parse_from(["icbm3000", "--tick-rate", "1e300", "-f", "5000"])
            .expect("parses");
        assert_eq!(cli.tick_rate(), Cli::MAX_RATE);
        assert_eq!(cli.frame_rate(), Cli::MAX_RATE);
        assert!(!Duration::from_secs_f64(1.0 / cli.tick_rate()).is_zero());
    }

    #[rstest]
    #[case("--tick-rate=fast")]
    #[case("--tick-rate=inf")]
    #[case("--tick-rate=NaN")]
    #[case("--frame-rate=infinity")]
    #[case("--frame-rate=-inf")]
    fn test_rejects_unusable_rates(#[case] arg: &str) {
        assert!(Cli::try_parse_from(["icbm3000", arg]).is_err());
    }
}
