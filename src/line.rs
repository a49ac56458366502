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

//! The line module contains the `Line` type and its associated functions.
//!
//! A `Line` is a directed segment from a start point, `sp`, to an end point,
//! `ep`. It may also be used as a free vector: the `dx`, `dy` components.
//!
//! Line angles use the mathematical convention: measured from the positive x
//! axis, counter-clockwise positive, in the range: 0 <= angle < 2 * PI.
//!
//! The length, angle and slope of a Line are derived from its points on
//! demand, so they always reflect the current `sp` and `ep`.

#![allow(clippy::float_cmp)]

pub mod intersection;

pub use intersection::SegmentIntersection;

use crate::error::{Error, Result};
use crate::point::Point;
use crate::trig::{Angle, Degrees, Radians};
use crate::{is_small, is_within_tolerance, Tolerances, Validate, TOLERANCE_ANGLE, TOLERANCE_LENGTH};
use contracts::debug_ensures;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// A directed line segment between two Points.
///
/// Equality is undirected: a Line equals another Line with the same
/// points in either order.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Line {
    /// The start point.
    sp: Point,
    /// The end point.
    ep: Point,
}

impl Line {
    /// Construct a Line from its start and end points.
    #[must_use]
    pub const fn new(sp: Point, ep: Point) -> Self {
        Self { sp, ep }
    }

    /// Construct a Line from the coordinates of its start and end points.
    #[must_use]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// The start point.
    #[must_use]
    pub const fn sp(&self) -> Point {
        self.sp
    }

    /// The end point.
    #[must_use]
    pub const fn ep(&self) -> Point {
        self.ep
    }

    /// The start and end points.
    #[must_use]
    pub const fn points(&self) -> (Point, Point) {
        (self.sp, self.ep)
    }

    pub fn set_sp(&mut self, sp: Point) {
        self.sp = sp;
    }

    pub fn set_ep(&mut self, ep: Point) {
        self.ep = ep;
    }

    pub fn set_points(&mut self, sp: Point, ep: Point) {
        self.sp = sp;
        self.ep = ep;
    }

    #[must_use]
    pub const fn sp_x(&self) -> f64 {
        self.sp.x()
    }

    #[must_use]
    pub const fn sp_y(&self) -> f64 {
        self.sp.y()
    }

    #[must_use]
    pub const fn ep_x(&self) -> f64 {
        self.ep.x()
    }

    #[must_use]
    pub const fn ep_y(&self) -> f64 {
        self.ep.y()
    }

    pub fn set_sp_x(&mut self, x: f64) {
        self.sp.set_x(x);
    }

    pub fn set_sp_y(&mut self, y: f64) {
        self.sp.set_y(y);
    }

    pub fn set_ep_x(&mut self, x: f64) {
        self.ep.set_x(x);
    }

    pub fn set_ep_y(&mut self, y: f64) {
        self.ep.set_y(y);
    }

    /// The x component of the Line: `ep.x - sp.x`.
    #[must_use]
    pub fn dx(&self) -> f64 {
        self.ep.x() - self.sp.x()
    }

    /// The y component of the Line: `ep.y - sp.y`.
    #[must_use]
    pub fn dy(&self) -> f64 {
        self.ep.y() - self.sp.y()
    }

    /// The Euclidean length of the Line.
    #[debug_ensures(0.0 <= ret)]
    #[must_use]
    pub fn length(&self) -> f64 {
        libm::hypot(self.dx(), self.dy())
    }

    /// The point halfway between the start and end points.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.sp.midpoint_to(&self.ep)
    }

    /// Whether the start and end points are the same.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.sp == self.ep
    }

    /// Whether the Line is vertical, i.e. `dx` is within `TOLERANCE_LENGTH`
    /// of zero.
    /// Note: a zero length Line is both vertical and horizontal.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        is_small(libm::fabs(self.dx()), TOLERANCE_LENGTH)
    }

    /// Whether the Line is horizontal, i.e. `dy` is within `TOLERANCE_LENGTH`
    /// of zero.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        is_small(libm::fabs(self.dy()), TOLERANCE_LENGTH)
    }

    /// The slope of the Line: `dy / dx`.
    /// # Errors
    ///
    /// `UndefinedOperation` if the Line is vertical.
    /// # Examples
    /// ```
    /// use planar_arc::{Error, Line};
    ///
    /// let line = Line::from_coords(1.0, 1.0, 3.0, 2.0);
    /// assert_eq!(Ok(0.5), line.slope());
    ///
    /// let vertical = Line::from_coords(1.0, 1.0, 1.0, 2.0);
    /// assert!(matches!(vertical.slope(), Err(Error::UndefinedOperation(_))));
    /// ```
    pub fn slope(&self) -> Result<f64> {
        if self.is_vertical() {
            return Err(Error::UndefinedOperation(format!(
                "slope: {self} is vertical"
            )));
        }

        Ok(self.dy() / self.dx())
    }

    /// The direction of the Line from `sp` to `ep`.
    ///
    /// returns the angle in the range: 0 <= angle < 2 * PI.
    /// A zero length Line has an angle of zero.
    #[must_use]
    pub fn angle(&self) -> Radians {
        Radians(libm::atan2(self.dy(), self.dx())).normalise_positive()
    }

    /// The direction of the Line from `sp` to `ep`.
    ///
    /// returns the angle in the range: 0 <= angle < 360.
    #[must_use]
    pub fn angle_deg(&self) -> Degrees {
        Degrees::from(self.angle()).normalise_positive()
    }

    /// Whether this Line is parallel to another Line, i.e. whether their
    /// slopes are within `TOLERANCE_ANGLE`.
    /// # Errors
    ///
    /// `UndefinedOperation` if either Line is vertical.
    /// See `is_parallel_within` for a test that accepts vertical Lines.
    pub fn is_parallel(&self, other: &Self) -> Result<bool> {
        Ok(is_within_tolerance(
            self.slope()?,
            other.slope()?,
            TOLERANCE_ANGLE,
        ))
    }

    /// Whether this Line is perpendicular to another Line, i.e. whether the
    /// product of their slopes is within `TOLERANCE_ANGLE` of -1.
    /// # Errors
    ///
    /// `UndefinedOperation` if either Line is vertical.
    pub fn is_perpendicular(&self, other: &Self) -> Result<bool> {
        Ok(is_within_tolerance(
            -1.0,
            self.slope()? * other.slope()?,
            TOLERANCE_ANGLE,
        ))
    }

    /// Whether this Line is parallel to another Line in any orientation,
    /// including vertical.
    ///
    /// The Lines are parallel if the sine of the angle between them is
    /// within the angle tolerance. A Line shorter than the length
    /// tolerance has no direction, so it is not parallel to anything.
    #[must_use]
    pub fn is_parallel_within(&self, other: &Self, tolerances: &Tolerances) -> bool {
        let lengths = self.length() * other.length();
        if is_small(self.length(), tolerances.length) || is_small(other.length(), tolerances.length)
        {
            return false;
        }

        let cross = self.dx().mul_add(other.dy(), -(self.dy() * other.dx()));
        is_small(libm::fabs(cross) / lengths, tolerances.angle)
    }

    /// Set the length of the Line, keeping its start point and direction.
    /// # Errors
    ///
    /// `InvalidArgument` if `length` is negative.
    /// `InvalidOperation` if the Line has zero length, since its direction
    /// is undefined.
    /// The Line is unchanged on error.
    /// # Examples
    /// ```
    /// use planar_arc::{Line, Point};
    ///
    /// let mut line = Line::from_coords(1.0, 1.0, 4.0, 5.0);
    /// line.set_length(10.0).unwrap();
    /// assert_eq!(Point::new(7.0, 9.0), line.ep());
    /// ```
    pub fn set_length(&mut self, length: f64) -> Result<()> {
        if length < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "set_length: length {length} is negative"
            )));
        }

        let current = self.length();
        if is_small(current, TOLERANCE_LENGTH) {
            return Err(Error::InvalidOperation(format!(
                "set_length: {self} has zero length"
            )));
        }

        let scale = length / current;
        self.ep.set(
            self.dx().mul_add(scale, self.sp.x()),
            self.dy().mul_add(scale, self.sp.y()),
        );
        Ok(())
    }

    /// Set the direction of the Line, keeping its start point and length.
    /// * `angle` - the absolute angle, in `Radians` or `Degrees`.
    /// # Errors
    ///
    /// `InvalidOperation` if the Line has zero length.
    pub fn set_angle(&mut self, angle: impl Into<Angle>) -> Result<()> {
        let length = self.length();
        if is_small(length, TOLERANCE_LENGTH) {
            return Err(Error::InvalidOperation(format!(
                "set_angle: {self} has zero length"
            )));
        }

        self.place_ep(length, angle.into());
        Ok(())
    }

    /// Set the length and direction of the Line, keeping its start point.
    ///
    /// Unlike `set_length` and `set_angle`, a zero length Line may be set,
    /// since both the length and direction are given.
    /// # Errors
    ///
    /// `InvalidArgument` if `length` is negative.
    /// # Examples
    /// ```
    /// use planar_arc::{Degrees, Line, Point};
    ///
    /// let mut line = Line::default();
    /// line.set_polar(2.0, Degrees(90.0)).unwrap();
    /// assert_eq!(Point::new(0.0, 2.0), line.ep());
    /// ```
    pub fn set_polar(&mut self, length: f64, angle: impl Into<Angle>) -> Result<()> {
        if length < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "set_polar: length {length} is negative"
            )));
        }

        self.place_ep(length, angle.into());
        Ok(())
    }

    /// Rotate the end point about the start point by a relative angle,
    /// counter-clockwise positive.
    pub fn rotate(&mut self, angle: impl Into<Angle>) {
        let sp = self.sp;
        self.ep.rotate_about(&sp, angle);
    }

    fn place_ep(&mut self, length: f64, angle: Angle) {
        self.ep.set(
            length.mul_add(angle.cos(), self.sp.x()),
            length.mul_add(angle.sin(), self.sp.y()),
        );
    }

    /// A Line of the same length from the start point, rotated
    /// counter-clockwise by 90 degrees.
    ///
    /// Built from a chord's midpoint towards a chord end, it lies on the
    /// chord's perpendicular bisector.
    /// # Errors
    ///
    /// `InvalidOperation` if the Line has zero length.
    /// # Examples
    /// ```
    /// use planar_arc::{Line, Point};
    ///
    /// let line = Line::from_coords(1.0, 1.0, 3.0, 1.0);
    /// let normal = line.normal_vector().unwrap();
    /// assert_eq!(Point::new(1.0, 3.0), normal.ep());
    /// ```
    pub fn normal_vector(&self) -> Result<Self> {
        if is_small(self.length(), TOLERANCE_LENGTH) {
            return Err(Error::InvalidOperation(format!(
                "normal_vector: {self} has zero length"
            )));
        }

        let ep = Point::new(self.sp.x() - self.dy(), self.sp.y() + self.dx());
        Ok(Self::new(self.sp, ep))
    }

    /// A Line of unit length from the start point in the direction of this
    /// Line.
    /// # Errors
    ///
    /// `InvalidOperation` if the Line has zero length.
    pub fn unit_vector(&self) -> Result<Self> {
        let length = self.length();
        if is_small(length, TOLERANCE_LENGTH) {
            return Err(Error::InvalidOperation(format!(
                "unit_vector: {self} has zero length"
            )));
        }

        let ep = Point::new(
            self.sp.x() + self.dx() / length,
            self.sp.y() + self.dy() / length,
        );
        Ok(Self::new(self.sp, ep))
    }

    /// The point at a fraction of the way along the Line.
    /// * `t` - the fraction: 0 is the start point, 1 the end point.
    /// # Errors
    ///
    /// `InvalidArgument` if `t` is outside the range: 0 <= t <= 1.
    pub fn interpolate(&self, t: f64) -> Result<Point> {
        if !(0.0..=1.0).contains(&t) {
            return Err(Error::InvalidArgument(format!(
                "interpolate: {t} is not in the range [0, 1]"
            )));
        }

        Ok(Point::new(
            self.dx().mul_add(t, self.sp.x()),
            self.dy().mul_add(t, self.sp.y()),
        ))
    }

    /// The point at a fraction of the way along the Line, see `interpolate`.
    /// # Errors
    ///
    /// `InvalidArgument` if `t` is outside the range: 0 <= t <= 1.
    pub fn point_at(&self, t: f64) -> Result<Point> {
        self.interpolate(t)
    }

    /// The angle to turn from the direction of this Line to the direction
    /// of another Line, by the shorter way round.
    ///
    /// returns the absolute angle, in the range: 0 <= angle <= PI, and
    /// whether the turn is clockwise.
    /// A half turn is counter-clockwise.
    /// # Examples
    /// ```
    /// use planar_arc::{Line, Radians};
    ///
    /// let east = Line::from_coords(0.0, 0.0, 1.0, 0.0);
    /// let south = Line::from_coords(0.0, 0.0, 0.0, -1.0);
    /// let (angle, clockwise) = east.angle_to_line(&south);
    /// assert_eq!(Radians(std::f64::consts::FRAC_PI_2), angle);
    /// assert!(clockwise);
    /// ```
    #[debug_ensures((0.0..=PI).contains(&(ret.0).0))]
    #[must_use]
    pub fn angle_to_line(&self, other: &Self) -> (Radians, bool) {
        let delta = other.angle() - self.angle();
        let angle = delta.abs();
        if is_within_tolerance(PI, angle.0, TOLERANCE_ANGLE) {
            (Radians(PI), false)
        } else {
            (angle, delta.0 < 0.0)
        }
    }

    /// The angle to turn from this Line to another Line, see
    /// `angle_to_line`.
    ///
    /// returns the absolute angle, in the range: 0 <= angle <= 180, and
    /// whether the turn is clockwise.
    #[must_use]
    pub fn angle_to_line_deg(&self, other: &Self) -> (Degrees, bool) {
        let (angle, clockwise) = self.angle_to_line(other);
        (Degrees::from(angle), clockwise)
    }

    /// The coefficients (A, B, C) of the Line's equation: `Ax + By + C = 0`.
    #[must_use]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        let a = self.dy();
        let b = -self.dx();
        let c = -a.mul_add(self.sp.x(), b * self.sp.y());
        (a, b, c)
    }

    /// Solve the Line's equation for y.
    ///
    /// returns None if the Line is vertical.
    #[must_use]
    pub fn evaluate_y(&self, x: f64) -> Option<f64> {
        if self.is_vertical() {
            return None;
        }

        let (a, b, c) = self.coefficients();
        Some(-a.mul_add(x, c) / b)
    }

    /// Solve the Line's equation for x.
    ///
    /// returns None if the Line is horizontal.
    #[must_use]
    pub fn evaluate_x(&self, y: f64) -> Option<f64> {
        if self.is_horizontal() {
            return None;
        }

        let (a, b, c) = self.coefficients();
        Some(-b.mul_add(y, c) / a)
    }

    /// The perpendicular distance from a point to the infinite line
    /// through this Line.
    ///
    /// returns infinity if the Line has zero length.
    #[debug_ensures(0.0 <= ret)]
    #[must_use]
    pub fn distance_to_point(&self, point: &Point) -> f64 {
        let length = self.length();
        if is_small(length, TOLERANCE_LENGTH) {
            return f64::INFINITY;
        }

        let (a, b, c) = self.coefficients();
        libm::fabs(a.mul_add(point.x(), b.mul_add(point.y(), c))) / length
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        (self.sp == other.sp && self.ep == other.ep)
            || (self.sp == other.ep && self.ep == other.sp)
    }
}

impl Validate for Line {
    /// Test whether a Line is valid.
    /// I.e. both points are valid and the Line is not null.
    fn is_valid(&self) -> bool {
        self.sp.is_valid() && self.ep.is_valid() && !self.is_null()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({}, {})", self.sp, self.ep)
    }
}

impl From<(Point, Point)> for Line {
    fn from((sp, ep): (Point, Point)) -> Self {
        Self::new(sp, ep)
    }
}

impl From<[f64; 4]> for Line {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self::from_coords(x1, y1, x2, y2)
    }
}

impl TryFrom<&[Point]> for Line {
    type Error = Error;

    /// Construct a Line from a slice of zero or two Points.
    /// An empty slice gives a zero length Line at the origin.
    fn try_from(points: &[Point]) -> Result<Self> {
        match points {
            [] => Ok(Self::default()),
            [sp, ep] => Ok(Self::new(*sp, *ep)),
            _ => Err(Error::InvalidArgument(format!(
                "Line requires 0 or 2 points, not {}",
                points.len()
            ))),
        }
    }
}

impl TryFrom<&[f64]> for Line {
    type Error = Error;

    /// Construct a Line from a slice of four coordinates: x1, y1, x2, y2.
    fn try_from(values: &[f64]) -> Result<Self> {
        match values {
            [x1, y1, x2, y2] => Ok(Self::from_coords(*x1, *y1, *x2, *y2)),
            _ => Err(Error::InvalidArgument(format!(
                "Line requires 4 coordinates, not {}",
                values.len()
            ))),
        }
    }
}
