// Copyright (c) 2024 Via Technology Ltd.

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

//! The point module contains the `Point` type and its associated functions.
//!
//! A `Point` is a 2D coordinate with value semantics: the arithmetic operators
//! return new Points, while `normalize`, `set_polar`, `rotate` and the
//! coordinate setters mutate a Point in place.
//!
//! The polar functions (`angle_to`, `polar` and `set_polar`) measure angles
//! with the y axis inverted, i.e. the screen convention: a positive angle
//! sweeps towards negative y.

#![allow(clippy::float_cmp)]

extern crate nalgebra as na;
use crate::error::{Error, Result};
use crate::trig::{Angle, Degrees, Radians};
use crate::{is_small, Tolerances, Validate};
use contracts::debug_ensures;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::sync::atomic::{AtomicU64, Ordering};

/// The creation order counter of Points.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A 2D coordinate.
///
/// Equality compares the coordinates exactly: use `distance_to` or `is_near`
/// for a tolerance based comparison.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
    /// Creation order, for diagnostics only. Copies share the id.
    #[serde(skip, default = "next_id")]
    id: u64,
}

impl Point {
    /// Construct a Point from x and y coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, id: next_id() }
    }

    /// The x coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The creation order of the Point.
    ///
    /// Ids increase monotonically across all threads; they carry no
    /// geometric meaning and are ignored by equality.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Set both coordinates.
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Whether the point is exactly at the origin.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Whether the point is not exactly at the origin.
    #[must_use]
    pub fn non_zero(&self) -> bool {
        !self.is_zero()
    }

    /// The distance of the point from the origin.
    #[debug_ensures(0.0 <= ret)]
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        libm::hypot(self.x, self.y)
    }

    /// Calculate the Euclidean distance to another Point.
    #[debug_ensures(0.0 <= ret)]
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        libm::hypot(other.x - self.x, other.y - self.y)
    }

    /// Calculate the square of the Euclidean distance to another Point.
    /// Prefer this to `distance_to` for comparisons, it avoids the square root.
    #[debug_ensures(0.0 <= ret)]
    #[must_use]
    pub fn distance_to_squared(&self, other: &Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Whether the point is within the length tolerance of another Point.
    #[must_use]
    pub fn is_near(&self, other: &Self, tolerances: &Tolerances) -> bool {
        is_small(self.distance_to(other), tolerances.length)
    }

    /// The dot product of the two points as vectors from the origin.
    #[must_use]
    pub fn dot_product(&self, other: &Self) -> f64 {
        na::Vector2::from(*self).dot(&na::Vector2::from(*other))
    }

    /// The z component of the 3D cross product of the two points as vectors
    /// from the origin.
    ///
    /// Positive when `other` lies counter-clockwise from `self`.
    /// # Examples
    /// ```
    /// use planar_arc::Point;
    ///
    /// let a = Point::new(1.0, 0.0);
    /// let b = Point::new(0.0, 1.0);
    /// assert_eq!(1.0, a.cross_product(&b));
    /// assert_eq!(-1.0, b.cross_product(&a));
    /// ```
    #[must_use]
    pub fn cross_product(&self, other: &Self) -> f64 {
        na::Vector2::from(*self).perp(&na::Vector2::from(*other))
    }

    /// The angle of the vector from this point to another, with the y axis
    /// inverted.
    ///
    /// returns the angle in the range: 0 <= angle < 2 * PI
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> Radians {
        Radians(libm::atan2(self.y - other.y, other.x - self.x)).normalise_positive()
    }

    /// The angle of the vector from this point to another, in Degrees.
    ///
    /// returns the angle in the range: 0 <= angle < 360
    #[must_use]
    pub fn angle_to_deg(&self, other: &Self) -> Degrees {
        Degrees::from(self.angle_to(other)).normalise_positive()
    }

    /// The midpoint between this point and another Point.
    #[must_use]
    pub fn midpoint_to(&self, other: &Self) -> Self {
        self.midpoint_to_xy(other.x, other.y)
    }

    /// The midpoint between this point and the coordinates x and y.
    #[must_use]
    pub fn midpoint_to_xy(&self, x: f64, y: f64) -> Self {
        Self::new(0.5 * (self.x + x), 0.5 * (self.y + y))
    }

    /// Rescale the point in place to unit distance from the origin.
    ///
    /// returns false, leaving the point unchanged, if the point is at the
    /// origin, true otherwise.
    /// # Errors
    ///
    /// `InvalidOperation` if the distance from the origin is negative. This
    /// can only happen if the distance calculation is corrupt.
    pub fn normalize(&mut self) -> Result<bool> {
        if self.is_zero() {
            return Ok(false);
        }

        let distance = self.magnitude();
        if distance < 0.0 {
            return Err(Error::InvalidOperation(format!(
                "normalize: negative distance {distance} from the origin"
            )));
        }

        self.x /= distance;
        self.y /= distance;
        Ok(true)
    }

    /// The point rescaled to unit distance from the origin.
    /// The origin is returned unchanged.
    /// # Errors
    ///
    /// See `normalize`.
    pub fn normalized(&self) -> Result<Self> {
        let mut result = Self::new(self.x, self.y);
        result.normalize()?;
        Ok(result)
    }

    /// The polar coordinates of the point about the origin.
    ///
    /// returns the radius and the angle, in the range: 0 <= angle < 2 * PI.
    /// The origin is (0, 0).
    #[must_use]
    pub fn polar(&self) -> (f64, Radians) {
        let radius = self.magnitude();
        if radius == 0.0 {
            (0.0, Radians(0.0))
        } else {
            (
                radius,
                Radians(libm::atan2(-self.y, self.x)).normalise_positive(),
            )
        }
    }

    /// The polar coordinates of the point about the origin.
    ///
    /// returns the radius and the angle, in the range: 0 <= angle < 360.
    /// # Examples
    /// ```
    /// use planar_arc::{Degrees, Point};
    ///
    /// let point = Point::new(0.0, -2.0);
    /// assert_eq!((2.0, Degrees(90.0)), point.polar_deg());
    /// ```
    #[must_use]
    pub fn polar_deg(&self) -> (f64, Degrees) {
        let (radius, angle) = self.polar();
        (radius, Degrees::from(angle).normalise_positive())
    }

    /// Set the position of the point from polar coordinates about the origin.
    /// * `radius` - the distance from the origin.
    /// * `angle` - the angle, in `Radians` or `Degrees`.
    ///
    /// Multiples of 90 `Degrees` give exact coordinates.
    /// # Errors
    ///
    /// `InvalidArgument` if the radius is negative; the point is unchanged.
    /// # Examples
    /// ```
    /// use planar_arc::{Degrees, Point};
    ///
    /// let mut point = Point::default();
    /// point.set_polar(2.0, Degrees(270.0)).unwrap();
    /// assert_eq!(Point::new(0.0, 2.0), point);
    /// ```
    pub fn set_polar(&mut self, radius: f64, angle: impl Into<Angle>) -> Result<()> {
        if radius < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "set_polar: radius {radius} is negative"
            )));
        }

        let angle = angle.into();
        self.x = radius * angle.cos();
        self.y = -radius * angle.sin();
        Ok(())
    }

    /// The point rotated about the origin, counter-clockwise positive.
    /// * `angle` - an `Angle`, or an angle in `Radians` or `Degrees`.
    #[must_use]
    pub fn rotated(&self, angle: impl Into<Angle>) -> Self {
        let (x, y) = angle.into().rotate(self.x, self.y);
        Self::new(x, y)
    }

    /// Rotate the point in place about the origin, counter-clockwise positive.
    pub fn rotate(&mut self, angle: impl Into<Angle>) {
        let (x, y) = angle.into().rotate(self.x, self.y);
        self.x = x;
        self.y = y;
    }

    /// Rotate the point in place about a centre, counter-clockwise positive.
    pub fn rotate_about(&mut self, centre: &Self, angle: impl Into<Angle>) {
        let (x, y) = angle.into().rotate(self.x - centre.x, self.y - centre.y);
        self.x = centre.x + x;
        self.y = centre.y + y;
    }

    /// Raise each coordinate to the power `exponent`.
    #[must_use]
    pub fn pow(&self, exponent: f64) -> Self {
        Self::new(libm::pow(self.x, exponent), libm::pow(self.y, exponent))
    }

    /// Divide each coordinate by `divisor`.
    /// # Errors
    ///
    /// `DivisionByZero` if divisor is zero.
    pub fn try_div(&self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            Err(Error::DivisionByZero)
        } else {
            Ok(Self::new(self.x / divisor, self.y / divisor))
        }
    }

    /// The remainder of each coordinate divided by `divisor`.
    /// # Errors
    ///
    /// `DivisionByZero` if divisor is zero.
    pub fn try_rem(&self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            Err(Error::DivisionByZero)
        } else {
            Ok(Self::new(
                libm::fmod(self.x, divisor),
                libm::fmod(self.y, divisor),
            ))
        }
    }
}

impl Default for Point {
    /// The origin.
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Validate for Point {
    /// Test whether a Point is valid.
    /// I.e. whether both coordinates are finite.
    fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }
}

impl From<f64> for Point {
    /// A Point on the x axis.
    fn from(x: f64) -> Self {
        Self::new(x, 0.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = Error;

    /// Construct a Point from a slice of one (x) or two (x, y) coordinates.
    fn try_from(values: &[f64]) -> Result<Self> {
        match *values {
            [x] => Ok(Self::new(x, 0.0)),
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(Error::InvalidArgument(format!(
                "Point requires 1 or 2 coordinates, found {}",
                values.len()
            ))),
        }
    }
}
