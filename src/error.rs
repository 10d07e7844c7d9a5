//! Error types for spring construction.

use core::fmt;

/// Errors reported by checked construction of spring constants.
///
/// The stepper itself never fails: inconsistent or non-finite inputs
/// propagate as NaN through ordinary float arithmetic. Validation exists
/// only at the construction boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum SpringError {
    /// Damping ratio must be non-negative and finite.
    InvalidDampingRatio,
    /// Natural frequency must be positive and finite.
    InvalidFrequency,
}

impl fmt::Display for SpringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpringError::InvalidDampingRatio => {
                write!(f, "damping ratio must be non-negative and finite")
            }
            SpringError::InvalidFrequency => {
                write!(f, "natural frequency must be positive and finite")
            }
        }
    }
}
