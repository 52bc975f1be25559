//! Supporting public types used to configure the ring builder.

use crate::core::traits::Real;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Winding direction of the ring being built.
///
/// Split-off loops are only excised when they wind the same way as the ring.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum RingOrientation {
    /// Ring is directionally clockwise (outer rings of buffer output).
    #[default]
    Clockwise,
    /// Ring is directionally counter clockwise.
    CounterClockwise,
}

impl RingOrientation {
    /// Converts a counter clockwise positive area into an area that is positive for this
    /// orientation.
    #[inline]
    pub fn normalize_area<T>(self, ccw_area: T) -> T
    where
        T: Real,
    {
        match self {
            RingOrientation::Clockwise => -ccw_area,
            RingOrientation::CounterClockwise => ccw_area,
        }
    }
}

/// Struct to hold options parameters when building a ring.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingBuilderOptions<T>
where
    T: Real,
{
    /// Fuzzy comparison epsilon used when intersecting the pending edge with ring edges, points
    /// and parametric values within this distance are considered equal.
    pub pos_equal_eps: T,
    /// Winding of the ring, determines which split-off loops count as valid excisions.
    pub orientation: RingOrientation,
}

impl<T> RingBuilderOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::fuzzy_epsilon(),
            orientation: RingOrientation::default(),
        }
    }

    /// Checks the options are usable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use buffer_ring::ring::*;
    /// let mut options = RingBuilderOptions::<f64>::new();
    /// assert!(options.validate().is_ok());
    /// options.pos_equal_eps = -1.0;
    /// assert_eq!(options.validate(), Err(OptionsError::NonPositiveEpsilon(-1.0)));
    /// ```
    pub fn validate(&self) -> Result<(), OptionsError> {
        let eps = self.pos_equal_eps.to_f64().unwrap_or(f64::NAN);
        if !eps.is_finite() {
            return Err(OptionsError::NonFiniteEpsilon);
        }

        if eps <= 0.0 {
            return Err(OptionsError::NonPositiveEpsilon(eps));
        }

        Ok(())
    }
}

impl<T> Default for RingBuilderOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from validating [RingBuilderOptions].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OptionsError {
    #[error("position equal epsilon must be greater than zero, got {0}")]
    NonPositiveEpsilon(f64),

    #[error("position equal epsilon must be finite")]
    NonFiniteEpsilon,
}
