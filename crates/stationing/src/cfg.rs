//! Run configuration.
//!
//! Policy
//! - One `max_offset` applies uniformly to every point and alignment of a run.
//! - The default mirrors the field tool's "effectively unlimited" 99999 units.

use crate::error::{StationError, StationResult};

/// Default maximum perpendicular offset.
pub const DEFAULT_MAX_OFFSET: f64 = 99_999.0;

/// Station/offset run configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StationCfg {
    /// Points farther than this from every segment are reported out of range.
    pub max_offset: f64,
}

impl Default for StationCfg {
    fn default() -> Self {
        Self {
            max_offset: DEFAULT_MAX_OFFSET,
        }
    }
}

impl StationCfg {
    #[inline]
    pub fn with_max_offset(max_offset: f64) -> Self {
        Self { max_offset }
    }

    /// Reject negative or NaN cutoffs. `+inf` is accepted and disables the cutoff.
    pub fn validate(&self) -> StationResult<()> {
        if self.max_offset.is_nan() || self.max_offset < 0.0 {
            return Err(StationError::invalid_config(format!(
                "max_offset must be >= 0, got {}",
                self.max_offset
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = StationCfg::default();
        assert_eq!(cfg.max_offset, DEFAULT_MAX_OFFSET);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert!(StationCfg::with_max_offset(-0.5).validate().is_err());
        assert!(StationCfg::with_max_offset(f64::NAN).validate().is_err());
        assert!(StationCfg::with_max_offset(0.0).validate().is_ok());
        assert!(StationCfg::with_max_offset(f64::INFINITY).validate().is_ok());
    }
}
