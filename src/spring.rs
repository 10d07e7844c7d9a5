//! Analytic spring stepping with closed-form solutions.
//!
//! The stepper evaluates the damped harmonic oscillator's solution directly
//! at the sampled instant, so a step over `dt` is exact regardless of frame
//! rate. It is stateless: position and velocity live with the caller and are
//! threaded from one call to the next.

use crate::error::SpringError;
use crate::float::Float;
use crate::lane::Lane;

/// Width of the band around damping ratio 1.0 treated as critically damped.
///
/// Nominally-critical springs can land slightly above 1.0 after float
/// round-off; classifying them as overdamped would divide by a near-zero
/// root separation in that branch. The band is absolute, roughly two orders
/// of magnitude above f32 round-off at 1.0, and narrow enough that a ratio
/// of 1.001 is still dispatched as overdamped.
pub const CRITICAL_DAMPING_TOLERANCE: f32 = 1e-5;

/// Damping regime of a spring, determined by its damping ratio.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Regime {
    /// Ratio < 1: oscillation under an exponential decay envelope.
    Underdamped,
    /// Ratio within [`CRITICAL_DAMPING_TOLERANCE`] of 1: fastest decay
    /// without oscillation.
    CriticallyDamped,
    /// Ratio > 1: sum of two decaying exponential modes.
    Overdamped,
}

impl Regime {
    /// Classify a damping ratio into exactly one regime.
    pub fn classify<F: Float>(damping_ratio: F) -> Regime {
        let one = F::one();
        if damping_ratio < one {
            Regime::Underdamped
        } else if damping_ratio.approx_eq(one, F::from_f32(CRITICAL_DAMPING_TOLERANCE)) {
            Regime::CriticallyDamped
        } else {
            Regime::Overdamped
        }
    }
}

/// Physical constants of a damped spring, precomputed by the caller.
///
/// The four fields must be mutually consistent:
/// `damped_frequency = angular_frequency * sqrt(1 - damping_ratio^2)` (only
/// meaningful below critical damping) and
/// `damping_coefficient = 2 * damping_ratio * angular_frequency`.
/// [`step`](SpringConstants::step) assumes consistency and never validates;
/// use the constructors to derive the dependent fields.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringConstants<F: Float> {
    /// Dimensionless damping ratio (0 = undamped, 1 = critical).
    pub damping_ratio: F,
    /// Natural angular frequency w0, in radians per second.
    pub angular_frequency: F,
    /// Damped angular frequency wD. Zero at or above critical damping.
    pub damped_frequency: F,
    /// Linear damping coefficient, `2 * damping_ratio * w0`.
    pub damping_coefficient: F,
}

impl<F: Float> SpringConstants<F> {
    /// Derive a consistent constant set from damping ratio and natural
    /// angular frequency (radians per second).
    pub fn new(damping_ratio: F, angular_frequency: F) -> Self {
        debug_assert!(
            damping_ratio >= F::zero(),
            "damping ratio must be non-negative"
        );
        debug_assert!(
            angular_frequency > F::zero(),
            "natural frequency must be positive"
        );
        let one = F::one();
        let discriminant = (one - damping_ratio * damping_ratio).max(F::zero());
        SpringConstants {
            damping_ratio,
            angular_frequency,
            damped_frequency: angular_frequency * discriminant.sqrt(),
            damping_coefficient: F::two() * damping_ratio * angular_frequency,
        }
    }

    /// Like [`new`](SpringConstants::new), taking the natural frequency in
    /// hertz.
    pub fn from_frequency_hz(damping_ratio: F, frequency_hz: F) -> Self {
        let two_pi = F::two() * F::pi();
        Self::new(damping_ratio, two_pi * frequency_hz)
    }

    /// Checked construction, rejecting parameters [`new`](SpringConstants::new)
    /// only guards with debug assertions.
    pub fn try_new(damping_ratio: F, angular_frequency: F) -> Result<Self, SpringError> {
        if !(damping_ratio >= F::zero() && damping_ratio.is_finite()) {
            return Err(SpringError::InvalidDampingRatio);
        }
        if !(angular_frequency > F::zero() && angular_frequency.is_finite()) {
            return Err(SpringError::InvalidFrequency);
        }
        Ok(Self::new(damping_ratio, angular_frequency))
    }

    /// Advance position `x0` and `velocity` by `dt` seconds, returning the
    /// new position and writing the new velocity back through `velocity`.
    ///
    /// All lanes of `x0`/`velocity` advance in lockstep under these shared
    /// constants; a multi-lane step is identical to per-lane scalar steps.
    /// Non-finite inputs or inconsistent constants produce NaN outputs
    /// rather than an error.
    #[inline]
    pub fn step<L: Lane<Float = F>>(&self, dt: F, x0: L, velocity: &mut L) -> L {
        match Regime::classify(self.damping_ratio) {
            Regime::Underdamped => self.step_underdamped(dt, x0, velocity),
            Regime::CriticallyDamped => self.step_critically_damped(dt, x0, velocity),
            Regime::Overdamped => self.step_overdamped(dt, x0, velocity),
        }
    }

    /// Oscillation inside the envelope `exp(-ratio * w0 * dt)`.
    #[inline]
    fn step_underdamped<L: Lane<Float = F>>(&self, dt: F, x0: L, velocity: &mut L) -> L {
        let zeta_w0 = self.damping_ratio * self.angular_frequency;
        let wd = self.damped_frequency;

        let envelope = (-zeta_w0 * dt).exp();
        let cos_wd = (wd * dt).cos();
        let sin_wd = (wd * dt).sin();

        let a = x0;
        let b = (*velocity + x0.scale(zeta_w0)).scale(F::one() / wd);
        let x = (a.scale(cos_wd) + b.scale(sin_wd)).scale(envelope);

        let dx = (*velocity + x0.scale(zeta_w0)).scale(cos_wd) - x0.scale(wd * sin_wd);
        *velocity = -(x.scale(zeta_w0) - dx.scale(envelope));
        x
    }

    /// No oscillation; envelope `exp(-w0 * dt)` with a linear-in-t factor.
    #[inline]
    fn step_critically_damped<L: Lane<Float = F>>(&self, dt: F, x0: L, velocity: &mut L) -> L {
        let w0 = self.angular_frequency;

        let envelope = (-w0 * dt).exp();
        let b = *velocity + x0.scale(w0);
        let x = (x0 + b.scale(dt)).scale(envelope);

        *velocity =
            -(x0.scale(dt * w0 * w0) + velocity.scale(dt * w0) - *velocity).scale(envelope);
        x
    }

    /// Two real decay modes with rates `r0`, `r1` from the characteristic
    /// equation. The classifier's tolerance band keeps `r1 - r0` away from
    /// zero; if the constants are inconsistent the discriminant square root
    /// goes NaN and propagates.
    #[inline]
    fn step_overdamped<L: Lane<Float = F>>(&self, dt: F, x0: L, velocity: &mut L) -> L {
        let damping = self.damping_coefficient;
        let four = F::from_f32(4.0);

        let x_ = (damping * damping - four * self.angular_frequency).sqrt();
        let r0 = (-damping + x_) * F::half();
        let r1 = (-damping - x_) * F::half();
        let r1_r0 = r1 - r0;

        let a = x0 - (x0.scale(r1) - *velocity).scale(F::one() / r1_r0);
        let b = a + x0;

        let envelope_a = (r1 * dt).exp();
        let envelope_b = (r0 * dt).exp();
        let x = a.scale(envelope_a) + b.scale(envelope_b);

        *velocity = a.scale(envelope_a * r1) + b.scale(envelope_b * r0);
        x
    }
}
