use crate::error::{MiningError, Result};

/// Minimum support, absolute or relative to the number of transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    Count(usize),
    Fraction(f64),
}

impl MinSupport {
    pub fn validate(&self) -> Result<()> {
        match *self {
            MinSupport::Count(0) => Err(MiningError::InvalidThreshold(0)),
            MinSupport::Count(_) => Ok(()),
            MinSupport::Fraction(f) if f.is_finite() && f > 0.0 && f <= 1.0 => Ok(()),
            MinSupport::Fraction(f) => Err(MiningError::InvalidSupportFraction(f)),
        }
    }

    /// Absolute count for a source of `num_transactions`; never below one.
    pub fn resolve(&self, num_transactions: usize) -> usize {
        match *self {
            MinSupport::Count(count) => count.max(1),
            MinSupport::Fraction(f) => (ceil_fraction(f, num_transactions) as usize).max(1),
        }
    }
}

/// `ceil(f * n)`, snapping products within float error of an integer onto it
/// so that `0.07 * 100` resolves to 7 rather than 8.
fn ceil_fraction(f: f64, n: usize) -> f64 {
    let exact = f * n as f64;
    let nearest = exact.round();
    if (exact - nearest).abs() <= FRACTION_TOLERANCE * nearest.max(1.0) {
        nearest
    } else {
        exact.ceil()
    }
}

const FRACTION_TOLERANCE: f64 = 1e-9;

impl From<usize> for MinSupport {
    fn from(count: usize) -> Self {
        MinSupport::Count(count)
    }
}

impl From<f64> for MinSupport {
    fn from(fraction: f64) -> Self {
        MinSupport::Fraction(fraction)
    }
}

#[derive(Debug, Clone)]
pub struct MiningConfig {
    pub min_support: MinSupport,
    /// Enumerate subsets directly when a tree degenerates to one path.
    pub single_path_shortcut: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: MinSupport::Fraction(0.01),
            single_path_shortcut: true,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: impl Into<MinSupport>) -> Self {
        Self {
            min_support: min_support.into(),
            ..Self::default()
        }
    }

    pub fn with_count(min_support: usize) -> Self {
        Self::new(MinSupport::Count(min_support))
    }

    pub fn with_fraction(min_support: f64) -> Self {
        Self::new(MinSupport::Fraction(min_support))
    }

    pub fn with_single_path_shortcut(mut self, enabled: bool) -> Self {
        self.single_path_shortcut = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.min_support.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_thresholds() {
        assert_eq!(
            MiningConfig::with_count(0).validate(),
            Err(MiningError::InvalidThreshold(0))
        );
        assert!(MiningConfig::with_count(1).validate().is_ok());
        assert!(MiningConfig::with_fraction(1.0).validate().is_ok());
        assert!(matches!(
            MiningConfig::with_fraction(0.0).validate(),
            Err(MiningError::InvalidSupportFraction(_))
        ));
        assert!(MiningConfig::with_fraction(1.5).validate().is_err());
        assert!(MiningConfig::with_fraction(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_resolve_fraction_rounds_up() {
        assert_eq!(MinSupport::Fraction(0.5).resolve(4), 2);
        assert_eq!(MinSupport::Fraction(0.3).resolve(4), 2);
        assert_eq!(MinSupport::Fraction(0.01).resolve(10), 1);
        assert_eq!(MinSupport::Fraction(0.5).resolve(0), 1);
        assert_eq!(MinSupport::Count(3).resolve(100), 3);
    }

    #[test]
    fn test_resolve_fraction_exact_boundary() {
        assert_eq!(MinSupport::Fraction(0.07).resolve(100), 7);
        assert_eq!(MinSupport::Fraction(0.28).resolve(25), 7);
        assert_eq!(MinSupport::Fraction(0.29).resolve(100), 29);
        assert_eq!(MinSupport::Fraction(0.57).resolve(100), 57);
        assert_eq!(MinSupport::Fraction(1.0).resolve(3), 3);
        assert_eq!(MinSupport::Fraction(0.071).resolve(100), 8);
    }

    #[test]
    fn test_resolve_fraction_never_exceeds_true_ceiling() {
        for n in 1..=100usize {
            for hundredths in 1..=100usize {
                let f = hundredths as f64 / 100.0;
                let expected = (hundredths * n).div_ceil(100);
                assert_eq!(MinSupport::Fraction(f).resolve(n), expected, "f={f} n={n}");
            }
        }
    }
}
