//! Fixed-width lane packs stepped in lockstep.
//!
//! A lane pack holds one position (or velocity) value per lane. All lanes in
//! a pack share the same [`SpringConstants`](crate::SpringConstants) but
//! carry independent values, so a `Lane3` spring is exactly three scalar
//! springs evaluated together.

use crate::float::Float;
use core::ops::{Add, Neg, Sub};

/// Trait for the per-lane values the stepper operates on.
///
/// Abstracts over width (1 to 4 lanes) so the solver code is written once.
/// Lanes never mix: every operation is elementwise, with scalars broadcast
/// via [`scale`](Lane::scale).
pub trait Lane:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type of each lane.
    type Float: Float;

    /// All lanes zero.
    fn zero() -> Self;

    /// All lanes set to the same value.
    fn splat(value: Self::Float) -> Self;

    /// Multiply every lane by a scalar.
    fn scale(self, s: Self::Float) -> Self;
}

// --------------------------------------------------------------------------
// Lane1<F> — a single scalar lane
// --------------------------------------------------------------------------

/// Single-lane value — a scalar spring (e.g., opacity, zoom, scroll offset).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Lane1<F: Float>(pub F);

impl<F: Float> Add for Lane1<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Lane1(self.0 + rhs.0) }
}

impl<F: Float> Sub for Lane1<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Lane1(self.0 - rhs.0) }
}

impl<F: Float> Neg for Lane1<F> {
    type Output = Self;
    fn neg(self) -> Self { Lane1(-self.0) }
}

impl<F: Float> Lane for Lane1<F> {
    type Float = F;
    fn zero() -> Self { Lane1(F::zero()) }
    fn splat(value: F) -> Self { Lane1(value) }
    fn scale(self, s: F) -> Self { Lane1(self.0 * s) }
}

// --------------------------------------------------------------------------
// Lane2<F> — two lanes
// --------------------------------------------------------------------------

/// Two-lane value for planar quantities (e.g., a 2D position or offset).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Lane2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Lane2<F> {
    /// Create a new two-lane value.
    pub fn new(x: F, y: F) -> Self { Lane2 { x, y } }
}

impl<F: Float> Add for Lane2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Lane2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Lane2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Lane2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Lane2<F> {
    type Output = Self;
    fn neg(self) -> Self { Lane2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Lane for Lane2<F> {
    type Float = F;
    fn zero() -> Self { Lane2 { x: F::zero(), y: F::zero() } }
    fn splat(value: F) -> Self { Lane2 { x: value, y: value } }
    fn scale(self, s: F) -> Self { Lane2 { x: self.x * s, y: self.y * s } }
}

// --------------------------------------------------------------------------
// Lane3<F> — three lanes
// --------------------------------------------------------------------------

/// Three-lane value for spatial quantities (e.g., a 3D position or RGB).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Lane3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Lane3<F> {
    /// Create a new three-lane value.
    pub fn new(x: F, y: F, z: F) -> Self { Lane3 { x, y, z } }
}

impl<F: Float> Add for Lane3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Lane3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Lane3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Lane3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Lane3<F> {
    type Output = Self;
    fn neg(self) -> Self { Lane3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Lane for Lane3<F> {
    type Float = F;
    fn zero() -> Self { Lane3 { x: F::zero(), y: F::zero(), z: F::zero() } }
    fn splat(value: F) -> Self { Lane3 { x: value, y: value, z: value } }
    fn scale(self, s: F) -> Self {
        Lane3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }
}

// --------------------------------------------------------------------------
// Lane4<F> — four lanes
// --------------------------------------------------------------------------

/// Four-lane value (e.g., RGBA color or a rect's edges).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Lane4<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub w: F,
}

impl<F: Float> Lane4<F> {
    /// Create a new four-lane value.
    pub fn new(x: F, y: F, z: F, w: F) -> Self { Lane4 { x, y, z, w } }
}

impl<F: Float> Add for Lane4<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Lane4 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z, w: self.w + rhs.w }
    }
}

impl<F: Float> Sub for Lane4<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Lane4 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z, w: self.w - rhs.w }
    }
}

impl<F: Float> Neg for Lane4<F> {
    type Output = Self;
    fn neg(self) -> Self { Lane4 { x: -self.x, y: -self.y, z: -self.z, w: -self.w } }
}

impl<F: Float> Lane for Lane4<F> {
    type Float = F;
    fn zero() -> Self {
        Lane4 { x: F::zero(), y: F::zero(), z: F::zero(), w: F::zero() }
    }
    fn splat(value: F) -> Self {
        Lane4 { x: value, y: value, z: value, w: value }
    }
    fn scale(self, s: F) -> Self {
        Lane4 { x: self.x * s, y: self.y * s, z: self.z * s, w: self.w * s }
    }
}
