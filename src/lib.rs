//! Closed-form spring stepping for animation.
//!
//! `springstep` advances a damped harmonic oscillator one time step per call
//! by evaluating the analytic solution of its equation of motion, so every
//! step lands exactly on the continuous-time trajectory with no numerical
//! integration and no accumulated drift.
//!
//! The caller supplies four precomputed physical constants
//! ([`SpringConstants`]), the elapsed time, the current position, and the
//! current velocity; [`SpringConstants::step`] returns the new position and
//! updates the velocity in place. The correct solution branch (underdamped,
//! critically damped, overdamped) is selected per call from the damping
//! ratio.
//!
//! # Features
//!
//! - **Analytic stepping**: Closed-form under/critical/overdamped branches
//! - **Generic lane width**: Step a scalar or a 2/3/4-wide lane pack whose
//!   components share constants but carry independent positions/velocities
//! - **Stateless**: Each call is a pure function of its inputs; any number of
//!   springs may be stepped concurrently
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

pub mod float;
pub mod lane;
pub mod spring;
pub mod error;

// Re-export primary API
pub use error::SpringError;
pub use float::Float;
pub use lane::{Lane, Lane1, Lane2, Lane3, Lane4};
pub use spring::{Regime, SpringConstants, CRITICAL_DAMPING_TOLERANCE};
