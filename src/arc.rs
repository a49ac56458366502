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

//! The arc module contains the `Arc` type and its associated functions.
//!
//! An `Arc` is a circular arc defined by three points: its centre `cp`, its
//! start point `sp` and its end point `ep`. The radius, sweep angle and
//! orientation are derived from the points on demand.
//!
//! The orientation of an Arc is the direction of the shorter turn from the
//! centre to start radius to the centre to end radius, so the sweep angle of
//! an Arc is in the range: 0 <= angle <= PI. A half turn is
//! counter-clockwise.
//!
//! The points are independent values: setting one point does not move the
//! others, so the caller must keep `sp` and `ep` equidistant from `cp`.
//!
//! The `construct` module solves for a complete Arc from partial
//! constraints.

#![allow(clippy::float_cmp)]

pub mod construct;

pub use construct::{ArcSolution, NoSolution};

use crate::error::{Error, Result};
use crate::line::Line;
use crate::point::Point;
use crate::trig::{Angle, Degrees, Radians};
use crate::{is_small, is_within_tolerance, Tolerances, Validate, TOLERANCE_ANGLE, TOLERANCE_LENGTH};
use contracts::debug_ensures;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;

/// A circular arc.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    /// The centre point.
    cp: Point,
    /// The start point.
    sp: Point,
    /// The end point.
    ep: Point,
}

impl Arc {
    /// Construct an Arc from its centre, start and end points.
    #[must_use]
    pub const fn new(cp: Point, sp: Point, ep: Point) -> Self {
        Self { cp, sp, ep }
    }

    #[must_use]
    pub const fn cp(&self) -> Point {
        self.cp
    }

    #[must_use]
    pub const fn sp(&self) -> Point {
        self.sp
    }

    #[must_use]
    pub const fn ep(&self) -> Point {
        self.ep
    }

    /// The centre, start and end points.
    #[must_use]
    pub const fn points(&self) -> (Point, Point, Point) {
        (self.cp, self.sp, self.ep)
    }

    pub fn set_cp(&mut self, cp: Point) {
        self.cp = cp;
    }

    pub fn set_sp(&mut self, sp: Point) {
        self.sp = sp;
    }

    pub fn set_ep(&mut self, ep: Point) {
        self.ep = ep;
    }

    pub fn set_points(&mut self, cp: Point, sp: Point, ep: Point) {
        self.cp = cp;
        self.sp = sp;
        self.ep = ep;
    }

    /// The Line from the centre to the start point.
    #[must_use]
    pub const fn segment_cp_sp(&self) -> Line {
        Line::new(self.cp, self.sp)
    }

    /// The Line from the centre to the end point.
    #[must_use]
    pub const fn segment_cp_ep(&self) -> Line {
        Line::new(self.cp, self.ep)
    }

    /// The chord: the Line from the start point to the end point.
    #[must_use]
    pub const fn segment_sp_ep(&self) -> Line {
        Line::new(self.sp, self.ep)
    }

    /// The distance from the centre to the start point.
    #[must_use]
    pub fn radius_cp_sp(&self) -> f64 {
        self.segment_cp_sp().length()
    }

    /// The distance from the centre to the end point.
    #[must_use]
    pub fn radius_cp_ep(&self) -> f64 {
        self.segment_cp_ep().length()
    }

    /// The radius of the Arc, measured to the start point.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius_cp_sp()
    }

    /// Move the start point along its radius to `radius` from the centre.
    /// # Errors
    ///
    /// As `Line::set_length`: `InvalidArgument` if `radius` is negative,
    /// `InvalidOperation` if the start point is at the centre.
    pub fn set_radius_cp_sp(&mut self, radius: f64) -> Result<()> {
        let mut segment = self.segment_cp_sp();
        segment.set_length(radius)?;
        self.sp = segment.ep();
        Ok(())
    }

    /// Move the end point along its radius to `radius` from the centre.
    /// # Errors
    ///
    /// As `Line::set_length`.
    pub fn set_radius_cp_ep(&mut self, radius: f64) -> Result<()> {
        let mut segment = self.segment_cp_ep();
        segment.set_length(radius)?;
        self.ep = segment.ep();
        Ok(())
    }

    /// The direction from the centre to the start point.
    ///
    /// returns the angle in the range: 0 <= angle < 2 * PI.
    #[must_use]
    pub fn angle_cp_sp(&self) -> Radians {
        self.segment_cp_sp().angle()
    }

    /// The direction from the centre to the end point.
    ///
    /// returns the angle in the range: 0 <= angle < 2 * PI.
    #[must_use]
    pub fn angle_cp_ep(&self) -> Radians {
        self.segment_cp_ep().angle()
    }

    #[must_use]
    pub fn angle_cp_sp_deg(&self) -> Degrees {
        self.segment_cp_sp().angle_deg()
    }

    #[must_use]
    pub fn angle_cp_ep_deg(&self) -> Degrees {
        self.segment_cp_ep().angle_deg()
    }

    /// Move the start point around the centre to an absolute angle.
    /// # Errors
    ///
    /// As `Line::set_angle`: `InvalidOperation` if the start point is at
    /// the centre.
    pub fn set_angle_cp_sp(&mut self, angle: impl Into<Angle>) -> Result<()> {
        let mut segment = self.segment_cp_sp();
        segment.set_angle(angle)?;
        self.sp = segment.ep();
        Ok(())
    }

    /// Move the end point around the centre to an absolute angle.
    /// # Errors
    ///
    /// As `Line::set_angle`.
    pub fn set_angle_cp_ep(&mut self, angle: impl Into<Angle>) -> Result<()> {
        let mut segment = self.segment_cp_ep();
        segment.set_angle(angle)?;
        self.ep = segment.ep();
        Ok(())
    }

    /// The angle of the start point about the centre, see `angle_cp_sp`.
    #[must_use]
    pub fn start_angle(&self) -> Radians {
        self.angle_cp_sp()
    }

    /// The angle of the end point about the centre, see `angle_cp_ep`.
    #[must_use]
    pub fn end_angle(&self) -> Radians {
        self.angle_cp_ep()
    }

    /// The length of the chord.
    #[must_use]
    pub fn distance_sp_ep(&self) -> f64 {
        self.sp.distance_to(&self.ep)
    }

    /// Whether the Arc turns clockwise from its start to its end point.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.segment_cp_sp()
            .angle_to_line(&self.segment_cp_ep())
            .1
    }

    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        !self.is_clockwise()
    }

    /// The sweep angle of the Arc, in its direction of travel.
    ///
    /// returns the angle in the range: 0 <= angle <= PI.
    /// # Examples
    /// ```
    /// use planar_arc::{Arc, Point, Radians};
    ///
    /// let arc = Arc::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0));
    /// assert_eq!(1.0, arc.radius_cp_sp());
    /// assert_eq!(Radians(std::f64::consts::FRAC_PI_2), arc.arc_angle());
    /// assert!(arc.is_counter_clockwise());
    /// ```
    #[must_use]
    pub fn arc_angle(&self) -> Radians {
        self.segment_cp_sp()
            .angle_to_line(&self.segment_cp_ep())
            .0
    }

    /// The sweep angle of the Arc, in the range: 0 <= angle <= 180.
    #[must_use]
    pub fn arc_angle_deg(&self) -> Degrees {
        Degrees::from(self.arc_angle())
    }

    /// The length of the Arc: radius * sweep angle.
    #[debug_ensures(0.0 <= ret)]
    #[must_use]
    pub fn arc_length(&self) -> f64 {
        self.radius() * self.arc_angle().0
    }

    /// Whether the start and end points are the same.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.sp == self.ep
    }

    /// Whether all three points are at the origin.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.cp.is_zero() && self.sp.is_zero() && self.ep.is_zero()
    }

    /// Whether an angle about the centre lies within the sweep of the Arc.
    ///
    /// The sweep runs counter-clockwise from the start angle, or from the
    /// end angle of a clockwise Arc, so that it may cross zero.
    fn is_within_sweep(&self, angle: Radians, tolerance: f64) -> bool {
        let (sweep, clockwise) = self.segment_cp_sp().angle_to_line(&self.segment_cp_ep());
        let lower = if clockwise {
            self.end_angle()
        } else {
            self.start_angle()
        };

        let offset = Radians(angle.0 - lower.0).normalise_positive();
        (offset.0 <= sweep.0 + tolerance) || (TAU - tolerance <= offset.0)
    }

    /// The point on the circle of the Arc at `angle` about the centre.
    fn point_on_circle(&self, angle: Radians) -> Point {
        let radius = self.radius();
        let angle = Angle::from(angle);
        Point::new(
            radius.mul_add(angle.cos(), self.cp.x()),
            radius.mul_add(angle.sin(), self.cp.y()),
        )
    }

    /// The point on the Arc at an angle about the centre.
    /// * `angle` - the absolute angle, in `Radians` or `Degrees`.
    ///
    /// The angle is normalised, so an Arc that crosses the positive x axis
    /// accepts angles either side of it.
    /// # Errors
    ///
    /// `InvalidArgument` if the angle is outside the sweep of the Arc.
    /// # Examples
    /// ```
    /// use planar_arc::{Arc, Degrees, Error};
    ///
    /// // a quarter circle from 315 to 45 degrees
    /// let half_root2 = std::f64::consts::FRAC_1_SQRT_2;
    /// let arc = Arc::from([(0.0, 0.0), (half_root2, -half_root2), (half_root2, half_root2)]);
    ///
    /// let point = arc.point_at_angle(Degrees(0.0)).unwrap();
    /// assert!((1.0 - point.x()).abs() < 1e-15);
    /// assert!(arc.point_at_angle(Degrees(350.0)).is_ok());
    /// assert!(matches!(arc.point_at_angle(Degrees(90.0)), Err(Error::InvalidArgument(_))));
    /// ```
    pub fn point_at_angle(&self, angle: impl Into<Radians>) -> Result<Point> {
        let angle = angle.into().normalise_positive();
        if !self.is_within_sweep(angle, TOLERANCE_ANGLE) {
            return Err(Error::InvalidArgument(format!(
                "point_at_angle: {} radians is outside {self}",
                angle.0
            )));
        }

        Ok(self.point_on_circle(angle))
    }

    /// The point on the Arc halfway along its sweep.
    #[must_use]
    pub fn point_at_midpoint(&self) -> Point {
        let (sweep, clockwise) = self.segment_cp_sp().angle_to_line(&self.segment_cp_ep());
        let half = if clockwise { -0.5 * sweep.0 } else { 0.5 * sweep.0 };
        self.point_on_circle(Radians(self.start_angle().0 + half))
    }

    /// Set the sweep angle of the Arc by moving its end point around the
    /// circle from the start point, in the current direction of the Arc.
    /// * `angle` - the sweep angle, normalised into: 0 <= angle < 2 * PI.
    ///
    /// Note: a sweep greater than PI reverses the direction of the Arc,
    /// since the direction is that of the shorter turn.
    /// # Errors
    ///
    /// `InvalidOperation` if the Arc has zero radius.
    pub fn set_arc_angle(&mut self, angle: impl Into<Radians>) -> Result<()> {
        if is_small(self.radius(), TOLERANCE_LENGTH) {
            return Err(Error::InvalidOperation(format!(
                "set_arc_angle: {self} has zero radius"
            )));
        }

        let sweep = angle.into().normalise_positive();
        let rotation = if self.is_clockwise() { -sweep } else { sweep };
        let (x, y) = Angle::from(rotation).rotate(
            self.sp.x() - self.cp.x(),
            self.sp.y() - self.cp.y(),
        );
        self.ep.set(self.cp.x() + x, self.cp.y() + y);
        Ok(())
    }

    /// Whether a point lies on the Arc, using the default `Tolerances`.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        self.contains_point_within(point, &Tolerances::default())
    }

    /// Whether a point lies on the Arc: within `tolerances.length` of its
    /// circle and within `tolerances.angle` of its sweep.
    #[must_use]
    pub fn contains_point_within(&self, point: &Point, tolerances: &Tolerances) -> bool {
        let segment = Line::new(self.cp, *point);
        is_within_tolerance(self.radius(), segment.length(), tolerances.length)
            && self.is_within_sweep(segment.angle(), tolerances.angle)
    }
}

impl Validate for Arc {
    /// Test whether an Arc is valid.
    /// I.e. whether it is neither null nor zero.
    fn is_valid(&self) -> bool {
        !self.is_null() && !self.is_zero()
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Arc({}, {}, {})", self.cp, self.sp, self.ep)
    }
}

impl From<[(f64, f64); 3]> for Arc {
    /// Construct an Arc from the centre, start and end coordinates.
    fn from([cp, sp, ep]: [(f64, f64); 3]) -> Self {
        Self::new(Point::from(cp), Point::from(sp), Point::from(ep))
    }
}

impl TryFrom<&[Point]> for Arc {
    type Error = Error;

    /// Construct an Arc from a slice of zero or three Points: the centre,
    /// start and end points.
    /// An empty slice gives a zero Arc.
    fn try_from(points: &[Point]) -> Result<Self> {
        match points {
            [] => Ok(Self::default()),
            [cp, sp, ep] => Ok(Self::new(*cp, *sp, *ep)),
            _ => Err(Error::InvalidArgument(format!(
                "Arc requires 0 or 3 points, not {}",
                points.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI, SQRT_2};

    fn quarter_circle() -> Arc {
        Arc::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        )
    }

    #[test]
    fn test_arc_constructors() {
        let arc0 = Arc::default();
        assert!(arc0.is_zero());
        assert!(arc0.is_null());
        assert!(!arc0.is_valid());

        let cp = Point::new(1.0, 2.0);
        let sp = Point::new(3.0, 2.0);
        let ep = Point::new(1.0, 4.0);
        let arc1 = Arc::new(cp, sp, ep);
        assert_eq!((cp, sp, ep), arc1.points());
        assert!(arc1.is_valid());

        assert_eq!(arc1, Arc::from([(1.0, 2.0), (3.0, 2.0), (1.0, 4.0)]));

        let points = [cp, sp, ep];
        assert_eq!(arc1, Arc::try_from(points.as_slice()).unwrap());
        let empty: &[Point] = &[];
        assert_eq!(arc0, Arc::try_from(empty).unwrap());
        assert!(matches!(
            Arc::try_from([cp, sp].as_slice()),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Arc::try_from([cp, sp, ep, cp].as_slice()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_arc_accessors() {
        let mut arc = Arc::default();
        arc.set_cp(Point::new(1.0, 1.0));
        arc.set_sp(Point::new(2.0, 1.0));
        arc.set_ep(Point::new(1.0, 0.0));
        assert_eq!(Point::new(1.0, 1.0), arc.cp());
        assert_eq!(Point::new(2.0, 1.0), arc.sp());
        assert_eq!(Point::new(1.0, 0.0), arc.ep());

        assert_eq!(Line::from_coords(1.0, 1.0, 2.0, 1.0), arc.segment_cp_sp());
        assert_eq!(Line::from_coords(1.0, 1.0, 1.0, 0.0), arc.segment_cp_ep());
        assert_eq!(Line::from_coords(2.0, 1.0, 1.0, 0.0), arc.segment_sp_ep());
        assert_eq!(SQRT_2, arc.distance_sp_ep());

        arc.set_points(
            Point::new(0.0, 0.0),
            Point::new(-2.0, 0.0),
            Point::new(0.0, 2.0),
        );
        assert_eq!(2.0, arc.radius_cp_sp());
        assert_eq!(2.0, arc.radius_cp_ep());
        assert_eq!(2.0, arc.radius());
    }

    #[test]
    fn test_arc_quarter_circle() {
        let arc = quarter_circle();
        assert_eq!(1.0, arc.radius_cp_sp());
        assert_eq!(1.0, arc.radius_cp_ep());
        assert_eq!(Radians(0.0), arc.start_angle());
        assert_eq!(Radians(FRAC_PI_2), arc.end_angle());
        assert_eq!(Degrees(0.0), arc.angle_cp_sp_deg());
        assert_eq!(Degrees(90.0), arc.angle_cp_ep_deg());

        assert!(arc.is_counter_clockwise());
        assert!(!arc.is_clockwise());
        assert_eq!(Radians(FRAC_PI_2), arc.arc_angle());
        assert_eq!(Degrees(90.0), arc.arc_angle_deg());
        assert_eq!(FRAC_PI_2, arc.arc_length());

        let reversed = Arc::new(arc.cp(), arc.ep(), arc.sp());
        assert!(reversed.is_clockwise());
        assert_eq!(Radians(FRAC_PI_2), reversed.arc_angle());
    }

    #[test]
    fn test_arc_orientation_across_zero() {
        // from 315 to 45 degrees, through 0
        let arc = Arc::from([
            (0.0, 0.0),
            (FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
            (FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        ]);
        assert!(arc.is_counter_clockwise());
        assert!(libm::fabs(FRAC_PI_2 - arc.arc_angle().0) < 1e-14);

        // a half turn is counter-clockwise
        let semicircle = Arc::from([(0.0, 0.0), (1.0, 0.0), (-1.0, 0.0)]);
        assert!(semicircle.is_counter_clockwise());
        assert_eq!(Radians(PI), semicircle.arc_angle());
        assert_eq!(PI, semicircle.arc_length());
    }

    #[test]
    fn test_arc_set_radius() {
        let mut arc = quarter_circle();
        arc.set_radius_cp_sp(2.0).unwrap();
        assert_eq!(Point::new(2.0, 0.0), arc.sp());
        arc.set_radius_cp_ep(2.0).unwrap();
        assert_eq!(Point::new(0.0, 2.0), arc.ep());
        assert_eq!(2.0, arc.radius());
        assert_eq!(PI, arc.arc_length());

        assert!(matches!(
            arc.set_radius_cp_sp(-1.0),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(Point::new(2.0, 0.0), arc.sp());

        let mut zero = Arc::default();
        assert!(matches!(
            zero.set_radius_cp_ep(1.0),
            Err(Error::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_arc_set_angles() {
        let mut arc = quarter_circle();
        arc.set_angle_cp_ep(Degrees(180.0)).unwrap();
        assert_eq!(Point::new(-1.0, 0.0), arc.ep());
        arc.set_angle_cp_sp(Degrees(270.0)).unwrap();
        assert_eq!(Point::new(0.0, -1.0), arc.sp());
        assert!(arc.is_clockwise());
        assert_eq!(Radians(FRAC_PI_2), arc.arc_angle());

        let mut zero = Arc::default();
        assert!(matches!(
            zero.set_angle_cp_sp(Degrees(90.0)),
            Err(Error::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_arc_point_at_angle() {
        let arc = Arc::from([(1.0, 1.0), (3.0, 1.0), (1.0, 3.0)]);
        let point = arc.point_at_angle(Radians(FRAC_PI_4)).unwrap();
        assert!(libm::fabs(1.0 + SQRT_2 - point.x()) < 1e-14);
        assert!(libm::fabs(1.0 + SQRT_2 - point.y()) < 1e-14);

        assert_eq!(Ok(arc.sp()), arc.point_at_angle(Degrees(0.0)));
        assert_eq!(Ok(arc.ep()), arc.point_at_angle(Degrees(90.0)));
        // outside the sweep
        assert!(matches!(
            arc.point_at_angle(Degrees(135.0)),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            arc.point_at_angle(Degrees(-1.0)),
            Err(Error::InvalidArgument(_))
        ));
        // an unnormalised angle
        assert!(arc.point_at_angle(Degrees(405.0)).is_ok());
    }

    #[test]
    fn test_arc_point_at_angle_wraparound() {
        // clockwise from 30 to 330 degrees, through 0
        let cp = Point::new(0.0, 0.0);
        let mut sp = Point::new(1.0, 0.0);
        sp.rotate(Degrees(30.0));
        let mut ep = Point::new(1.0, 0.0);
        ep.rotate(Degrees(-30.0));
        let arc = Arc::new(cp, sp, ep);
        assert!(arc.is_clockwise());

        let point = arc.point_at_angle(Degrees(0.0)).unwrap();
        assert!(libm::fabs(1.0 - point.x()) < 1e-14);
        assert_eq!(0.0, point.y());
        assert!(arc.point_at_angle(Degrees(10.0)).is_ok());
        assert!(arc.point_at_angle(Degrees(-10.0)).is_ok());
        assert!(arc.point_at_angle(Degrees(340.0)).is_ok());
        assert!(arc.point_at_angle(Degrees(180.0)).is_err());
        assert!(arc.point_at_angle(Degrees(45.0)).is_err());
        assert!(arc.point_at_angle(Degrees(315.0)).is_err());
    }

    #[test]
    fn test_arc_point_at_midpoint() {
        let arc = Arc::from([(0.0, 0.0), (0.0, 2.0), (-2.0, 0.0)]);
        let midpoint = arc.point_at_midpoint();
        assert!(libm::fabs(-SQRT_2 - midpoint.x()) < 1e-14);
        assert!(libm::fabs(SQRT_2 - midpoint.y()) < 1e-14);

        // a half turn is counter-clockwise
        let arc = Arc::from([(0.0, 0.0), (0.0, 1.0), (0.0, -1.0)]);
        assert!(arc.is_counter_clockwise());
        let midpoint = arc.point_at_midpoint();
        assert_eq!(-1.0, midpoint.x());
        assert!(libm::fabs(midpoint.y()) < 1e-14);

        // clockwise through 0
        let arc = Arc::from([(0.0, 0.0), (1.0, 1.0), (1.0, -1.0)]);
        assert!(arc.is_clockwise());
        let midpoint = arc.point_at_midpoint();
        assert!(libm::fabs(SQRT_2 - midpoint.x()) < 1e-14);
        assert!(libm::fabs(midpoint.y()) < 1e-14);
    }

    #[test]
    fn test_arc_set_arc_angle() {
        let mut arc = quarter_circle();
        arc.set_arc_angle(Degrees(45.0)).unwrap();
        assert!(libm::fabs(FRAC_1_SQRT_2 - arc.ep().x()) < 1e-14);
        assert!(libm::fabs(FRAC_1_SQRT_2 - arc.ep().y()) < 1e-14);
        assert!(libm::fabs(FRAC_PI_4 - arc.arc_angle().0) < 1e-14);
        assert_eq!(Point::new(0.0, 0.0), arc.cp());
        assert_eq!(Point::new(1.0, 0.0), arc.sp());

        // a clockwise arc stays clockwise
        let mut arc = Arc::from([(0.0, 0.0), (1.0, 0.0), (0.0, -1.0)]);
        assert!(arc.is_clockwise());
        arc.set_arc_angle(Radians(FRAC_PI_4)).unwrap();
        assert!(arc.is_clockwise());
        assert!(libm::fabs(-FRAC_1_SQRT_2 - arc.ep().y()) < 1e-14);
        assert!(libm::fabs(1.0 - arc.radius_cp_ep()) < 1e-14);

        let mut zero = Arc::default();
        assert!(matches!(
            zero.set_arc_angle(Degrees(90.0)),
            Err(Error::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_arc_contains_point() {
        let arc = Arc::from([(0.0, 0.0), (2.0, 0.0), (0.0, 2.0)]);
        assert!(arc.contains_point(&Point::new(2.0, 0.0)));
        assert!(arc.contains_point(&Point::new(0.0, 2.0)));
        let mut on_arc = Point::new(2.0, 0.0);
        on_arc.rotate(Degrees(60.0));
        assert!(arc.contains_point(&on_arc));

        // on the circle, outside the sweep
        assert!(!arc.contains_point(&Point::new(-2.0, 0.0)));
        assert!(!arc.contains_point(&Point::new(0.0, -2.0)));
        // inside the sweep, off the circle
        assert!(!arc.contains_point(&Point::new(1.0, 1.0)));
        assert!(!arc.contains_point(&Point::new(1.5, 1.5)));

        let near = Point::new(2.001, 0.0);
        assert!(!arc.contains_point(&near));
        let loose = Tolerances {
            length: 0.01,
            angle: TOLERANCE_ANGLE,
        };
        assert!(arc.contains_point_within(&near, &loose));
    }

    #[test]
    fn test_arc_display_and_serde() {
        let arc = quarter_circle();
        assert_eq!(
            "Arc(Point(0, 0), Point(1, 0), Point(0, 1))",
            arc.to_string()
        );

        let serialized = serde_json::to_string(&arc).unwrap();
        assert_eq!(
            r#"{"cp":{"x":0.0,"y":0.0},"sp":{"x":1.0,"y":0.0},"ep":{"x":0.0,"y":1.0}}"#,
            serialized
        );
        let deserialized: Arc = serde_json::from_str(&serialized).unwrap();
        assert_eq!(arc, deserialized);
    }
}
