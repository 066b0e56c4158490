use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, KernelError, Result};

/// Default epsilon used by every tolerant comparison in the kernel.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Epsilon-based equality and ordering policy for `f64` values.
///
/// Strict comparisons are biased by the tolerance so that two values that
/// are equal within epsilon never satisfy `greater_than` or `less_than`
/// in either direction.
///
/// Non-finite inputs are not special-cased: any comparison involving
/// `NaN` returns `false`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ToleranceConfig", into = "ToleranceConfig")]
pub struct FloatComparator {
    tolerance: f64,
}

impl FloatComparator {
    /// Comparator with [`DEFAULT_TOLERANCE`].
    pub const DEFAULT: Self = Self {
        tolerance: DEFAULT_TOLERANCE,
    };

    /// Creates a comparator with the given epsilon.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTolerance`] if `tolerance` is negative,
    /// `NaN` or infinite.
    pub fn new(tolerance: f64) -> Result<Self> {
        validate(tolerance)?;
        Ok(Self { tolerance })
    }

    /// Returns the current epsilon.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Replaces the epsilon of this comparator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTolerance`] if `tolerance` is negative,
    /// `NaN` or infinite. The comparator is left unchanged in that case.
    pub fn set_tolerance(&mut self, tolerance: f64) -> Result<()> {
        validate(tolerance)?;
        debug!(from = self.tolerance, to = tolerance, "tolerance changed");
        self.tolerance = tolerance;
        Ok(())
    }

    /// `|x| <= epsilon`
    #[must_use]
    pub fn equals_zero(&self, x: f64) -> bool {
        x.abs() <= self.tolerance
    }

    /// `|x - y| <= epsilon`
    #[must_use]
    pub fn equals(&self, x: f64, y: f64) -> bool {
        (x - y).abs() <= self.tolerance
    }

    #[must_use]
    pub fn greater_than(&self, x: f64, y: f64) -> bool {
        x - y > self.tolerance
    }

    #[must_use]
    pub fn greater_than_or_equal(&self, x: f64, y: f64) -> bool {
        x - y >= -self.tolerance
    }

    #[must_use]
    pub fn less_than(&self, x: f64, y: f64) -> bool {
        x - y < -self.tolerance
    }

    #[must_use]
    pub fn less_than_or_equal(&self, x: f64, y: f64) -> bool {
        x - y <= self.tolerance
    }
}

impl Default for FloatComparator {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn validate(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(())
    } else {
        debug!(tolerance, "rejected tolerance");
        Err(ConfigError::InvalidTolerance(tolerance).into())
    }
}

/// Serializable tolerance settings.
///
/// ```json
/// { "tolerance": 1e-9 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceConfig {
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl ToleranceConfig {
    /// Parses settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the comparator described by these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTolerance`] if the tolerance is invalid.
    pub fn comparator(&self) -> Result<FloatComparator> {
        FloatComparator::new(self.tolerance)
    }
}

impl TryFrom<ToleranceConfig> for FloatComparator {
    type Error = KernelError;

    fn try_from(config: ToleranceConfig) -> Result<Self> {
        config.comparator()
    }
}

impl From<FloatComparator> for ToleranceConfig {
    fn from(cmp: FloatComparator) -> Self {
        Self {
            tolerance: cmp.tolerance,
        }
    }
}

/// `|x| <= DEFAULT_TOLERANCE`
#[must_use]
pub fn is_approximately_zero(x: f64) -> bool {
    FloatComparator::DEFAULT.equals_zero(x)
}

#[must_use]
pub fn are_approximately_equal(x: f64, y: f64) -> bool {
    FloatComparator::DEFAULT.equals(x, y)
}

#[must_use]
pub fn is_definitely_greater(x: f64, y: f64) -> bool {
    FloatComparator::DEFAULT.greater_than(x, y)
}

#[must_use]
pub fn is_definitely_less(x: f64, y: f64) -> bool {
    FloatComparator::DEFAULT.less_than(x, y)
}

#[must_use]
pub fn is_greater_or_approx_equal(x: f64, y: f64) -> bool {
    FloatComparator::DEFAULT.greater_than_or_equal(x, y)
}

#[must_use]
pub fn is_less_or_approx_equal(x: f64, y: f64) -> bool {
    FloatComparator::DEFAULT.less_than_or_equal(x, y)
}
