// Copyright (c) 2018-2024 Via Technology Ltd.

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! This library provides three composable 2D value types: a `Point`, a `Line`
//! (a directed segment or free vector) and a circular `Arc`, together with
//! the algebra that relates them: distances, angles, intersections,
//! polar/Cartesian conversion and arc construction from partial geometric
//! constraints.
//!
//! The `trig` module contains the `Degrees` and `Radians` newtypes, so the unit
//! of an angle is always explicit: angle parameters accept either type and
//! angle queries have a radians form and a degrees form.
//!
//! The library uses the [contracts](https://crates.io/crates/contracts) crate
//! to implement Design By Contract [(DbC)](https://wiki.c2.com/?DesignByContract).
//! It also defines a `Validate` trait to define an `is_valid` invariant
//! function to support Design By Contract invariants.
//!
//! Errors come in two tiers:
//! * contract errors (bad arguments, operations on degenerate lines) are
//!   returned as an [`Error`];
//! * geometric infeasibility of an arc construction (e.g. collinear points)
//!   is an expected outcome, reported as [`arc::ArcSolution::NotFound`].

pub mod arc;
pub mod convert;
pub mod error;
pub mod line;
pub mod point;
pub mod trig;

pub use arc::{Arc, ArcSolution, NoSolution};
pub use error::{Error, Result};
pub use line::{Line, SegmentIntersection};
pub use point::Point;
pub use trig::{Degrees, Radians};

use contracts::{debug_ensures, debug_requires};
use serde::{Deserialize, Serialize};

/// The minimum meaningful distance between two points.
pub const TOLERANCE_LENGTH: f64 = 1.0e-9;

/// The minimum meaningful angular separation, in radians.
pub const TOLERANCE_ANGLE: f64 = 1.0e-8;

/// The cross product denominator below which two segments are parallel.
pub const PARALLEL_DENOMINATOR: f64 = 1.0e-10;

/// Return the maximum of a or b.
#[inline]
#[must_use]
pub fn max<T>(a: T, b: T) -> T
where
    T: PartialOrd + Copy,
{
    if b < a {
        a
    } else {
        b
    }
}

/// Clamp value into the range: min to max inclusive.
/// * `value` - value to clamp
/// * `min` - minimum value.
/// * `max` - maximum value.
#[debug_ensures((min ..= max).contains(&ret))]
#[inline]
#[must_use]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: PartialOrd + Copy,
{
    if value < min {
        min
    } else if max < value {
        max
    } else {
        value
    }
}

/// The Validate trait.
pub trait Validate {
    /// return true if the type is valid, false otherwise.
    fn is_valid(&self) -> bool;
}

/// Check whether a value is within tolerance of zero.
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if value is <= tolerance
#[debug_requires(value >= 0.0)]
#[inline]
#[must_use]
pub fn is_small(value: f64, tolerance: f64) -> bool {
    value <= tolerance
}

/// Check whether a value are within tolerance of a reference value.
/// * `reference` the required value
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if abs(reference - value) is <= tolerance
#[inline]
#[must_use]
pub fn is_within_tolerance(reference: f64, value: f64, tolerance: f64) -> bool {
    is_small(libm::fabs(reference - value), tolerance)
}

/// The length and angle tolerances used by the tolerance-parameterised
/// predicates, e.g. `Line::is_parallel_within`.
///
/// The default values are [`TOLERANCE_LENGTH`] and [`TOLERANCE_ANGLE`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// The minimum meaningful distance between two points.
    pub length: f64,
    /// The minimum meaningful angular separation, in radians.
    pub angle: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            length: TOLERANCE_LENGTH,
            angle: TOLERANCE_ANGLE,
        }
    }
}

impl Validate for Tolerances {
    /// Test whether the `Tolerances` are valid.
    /// I.e. whether both tolerances are finite and not negative.
    fn is_valid(&self) -> bool {
        self.length.is_finite()
            && self.angle.is_finite()
            && (0.0 <= self.length)
            && (0.0 <= self.angle)
    }
}
