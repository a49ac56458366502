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

//! The construct module contains the functions that solve for a complete
//! `Arc` from partial geometric constraints:
//! * three points on the arc;
//! * the start and end points and a radius;
//! * the start and end points and a sweep angle;
//! * the centre and start points and a sweep angle.
//!
//! A constraint that no arc satisfies is an expected outcome, not an error:
//! the constructors return an [`ArcSolution`], which is `NotFound` with a
//! [`NoSolution`] reason when there is no arc.
//! An `Err` is only returned for an invalid argument, e.g. a negative radius.

use super::Arc;
use crate::error::{Error, Result};
use crate::line::Line;
use crate::point::Point;
use crate::trig::Radians;
use crate::{is_small, max, TOLERANCE_ANGLE, TOLERANCE_LENGTH};
use std::f64::consts::{PI, TAU};

/// The reason that no `Arc` satisfies a set of constraints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NoSolution {
    /// Two of the points are within `TOLERANCE_LENGTH` of each other.
    #[error("coincident points")]
    CoincidentPoints,
    /// The points lie on a straight line.
    #[error("collinear points")]
    CollinearPoints,
    /// The centre is within `TOLERANCE_LENGTH` of the start or end point.
    #[error("the centre coincides with an end point")]
    DegenerateCentre,
    /// The start and end points are within `TOLERANCE_LENGTH`.
    #[error("zero length chord")]
    DegenerateChord,
    /// No candidate arc has the requested orientation.
    #[error("no arc in the requested direction")]
    OrientationMismatch,
    /// The sweep angle is greater than a half turn.
    #[error("sweep angle greater than a half turn")]
    ReflexSweep,
}

/// The outcome of an `Arc` construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArcSolution {
    Found(Arc),
    NotFound(NoSolution),
}

impl ArcSolution {
    /// Whether an Arc was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The Arc, if one was found.
    #[must_use]
    pub const fn arc(&self) -> Option<&Arc> {
        match self {
            Self::Found(arc) => Some(arc),
            Self::NotFound(_) => None,
        }
    }

    /// The reason that no Arc was found, if none was.
    #[must_use]
    pub const fn reason(&self) -> Option<NoSolution> {
        match self {
            Self::Found(_) => None,
            Self::NotFound(reason) => Some(*reason),
        }
    }

    #[must_use]
    pub const fn into_arc(self) -> Option<Arc> {
        match self {
            Self::Found(arc) => Some(arc),
            Self::NotFound(_) => None,
        }
    }

    /// The outcome as a pair: whether an Arc was found and the Arc.
    #[must_use]
    pub const fn into_pair(self) -> (bool, Option<Arc>) {
        match self {
            Self::Found(arc) => (true, Some(arc)),
            Self::NotFound(_) => (false, None),
        }
    }
}

fn found(operation: &str, arc: Arc) -> ArcSolution {
    tracing::trace!("{operation}: {arc}");
    ArcSolution::Found(arc)
}

fn not_found(operation: &str, reason: NoSolution, sp: &Point, ep: &Point) -> ArcSolution {
    tracing::debug!("{operation}: no arc from {sp} to {ep}: {reason}");
    ArcSolution::NotFound(reason)
}

/// Check that a sweep angle is in the range: `TOLERANCE_ANGLE` < angle < 2 * PI
fn validate_sweep(operation: &str, angle: Radians) -> Result<()> {
    if TOLERANCE_ANGLE < angle.0 && angle.0 < TAU {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "{operation}: sweep angle {} is not in the range (0, 2 * PI)",
            angle.0
        )))
    }
}

impl Arc {
    /// Construct the Arc through three points.
    ///
    /// The centre is the intersection of the perpendicular bisectors of the
    /// chords from `sp` to `mp` and from `mp` to `ep`.
    /// Note: the orientation of the Arc is the shorter turn from `sp` to
    /// `ep`, so `mp` is only on the Arc if the sweep through it is at most
    /// a half turn.
    ///
    /// returns `NotFound` if any two of the points coincide, the points are
    /// collinear or the centre coincides with `sp` or `ep`.
    /// # Examples
    /// ```
    /// use planar_arc::{Arc, NoSolution, Point};
    ///
    /// let sp = Point::new(1.0, 0.0);
    /// let mp = Point::new(0.0, 1.0);
    /// let ep = Point::new(-1.0, 0.0);
    /// let arc = Arc::from_sp_mp_ep(&sp, &mp, &ep).into_arc().unwrap();
    /// assert_eq!(Point::new(0.0, 0.0), arc.cp());
    ///
    /// let collinear = Arc::from_sp_mp_ep(&sp, &Point::new(2.0, 0.0), &Point::new(3.0, 0.0));
    /// assert_eq!(Some(NoSolution::CollinearPoints), collinear.reason());
    /// ```
    #[must_use]
    pub fn from_sp_mp_ep(sp: &Point, mp: &Point, ep: &Point) -> ArcSolution {
        const OPERATION: &str = "from_sp_mp_ep";

        if is_small(sp.distance_to(mp), TOLERANCE_LENGTH)
            || is_small(mp.distance_to(ep), TOLERANCE_LENGTH)
            || is_small(sp.distance_to(ep), TOLERANCE_LENGTH)
        {
            return not_found(OPERATION, NoSolution::CoincidentPoints, sp, ep);
        }

        let chord1 = Line::new(sp.midpoint_to(mp), *mp);
        let chord2 = Line::new(mp.midpoint_to(ep), *ep);
        let (Ok(bisector1), Ok(bisector2)) = (chord1.normal_vector(), chord2.normal_vector())
        else {
            return not_found(OPERATION, NoSolution::CoincidentPoints, sp, ep);
        };

        let Some(cp) = bisector1.intersection_with(&bisector2) else {
            return not_found(OPERATION, NoSolution::CollinearPoints, sp, ep);
        };

        if is_small(cp.distance_to(sp), TOLERANCE_LENGTH)
            || is_small(cp.distance_to(ep), TOLERANCE_LENGTH)
        {
            return not_found(OPERATION, NoSolution::DegenerateCentre, sp, ep);
        }

        found(OPERATION, Self::new(cp, *sp, *ep))
    }

    /// Construct the Arc of `radius` from `sp` to `ep` in the given
    /// direction.
    ///
    /// There are two circles of `radius` through `sp` and `ep`, with centres
    /// either side of the chord. The first centre whose Arc has the
    /// requested orientation is chosen.
    /// Note: when the chord is a diameter the Arc is a half turn, which is
    /// counter-clockwise, so a clockwise Arc is `NotFound`.
    ///
    /// returns `NotFound` if the chord has zero length or no candidate has
    /// the requested orientation.
    /// # Errors
    ///
    /// `InvalidArgument` if `radius` is negative or less than half the
    /// chord length.
    /// # Examples
    /// ```
    /// use planar_arc::{Arc, Error, Point};
    ///
    /// let sp = Point::new(0.0, 0.0);
    /// let ep = Point::new(4.0, 0.0);
    /// let arc = Arc::from_sp_ep_rd_cw(&sp, &ep, 2.5, true).unwrap().into_arc().unwrap();
    /// assert_eq!(Point::new(2.0, -1.5), arc.cp());
    /// assert!(arc.is_clockwise());
    ///
    /// let result = Arc::from_sp_ep_rd_cw(&sp, &ep, 1.0, true);
    /// assert!(matches!(result, Err(Error::InvalidArgument(_))));
    /// ```
    pub fn from_sp_ep_rd_cw(
        sp: &Point,
        ep: &Point,
        radius: f64,
        clockwise: bool,
    ) -> Result<ArcSolution> {
        const OPERATION: &str = "from_sp_ep_rd_cw";

        if radius < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "{OPERATION}: radius {radius} is negative"
            )));
        }

        let chord = Line::new(*sp, *ep);
        let chord_length = chord.length();
        if is_small(chord_length, TOLERANCE_LENGTH) {
            return Ok(not_found(OPERATION, NoSolution::DegenerateChord, sp, ep));
        }

        let half_length = 0.5 * chord_length;
        if half_length > radius + TOLERANCE_LENGTH {
            return Err(Error::InvalidArgument(format!(
                "{OPERATION}: radius {radius} is less than half the chord length {half_length}"
            )));
        }

        // the distance from the chord to the centre, along its unit normal
        let height = libm::sqrt(max(radius.mul_add(radius, -(half_length * half_length)), 0.0));
        let normal_x = -chord.dy() / chord_length;
        let normal_y = chord.dx() / chord_length;
        let midpoint = chord.midpoint();

        for side in [1.0, -1.0] {
            let offset = side * height;
            let cp = Point::new(
                offset.mul_add(normal_x, midpoint.x()),
                offset.mul_add(normal_y, midpoint.y()),
            );
            let arc = Self::new(cp, *sp, *ep);
            if arc.is_clockwise() == clockwise {
                return Ok(found(OPERATION, arc));
            }
        }

        Ok(not_found(OPERATION, NoSolution::OrientationMismatch, sp, ep))
    }

    /// Construct the Arc from `sp` to `ep` that sweeps `arc_angle` about its
    /// centre, in the given direction.
    /// * `arc_angle` - the sweep angle, in `Radians` or `Degrees`.
    ///
    /// The radius is: half the chord length / sin(`arc_angle` / 2).
    ///
    /// returns `NotFound` if the chord has zero length or `arc_angle` is
    /// greater than a half turn.
    /// # Errors
    ///
    /// `InvalidArgument` if `arc_angle` is not in the range: 0 < angle < 2 * PI.
    pub fn from_sp_ep_aa(
        sp: &Point,
        ep: &Point,
        arc_angle: impl Into<Radians>,
        clockwise: bool,
    ) -> Result<ArcSolution> {
        const OPERATION: &str = "from_sp_ep_aa";

        let arc_angle = arc_angle.into();
        validate_sweep(OPERATION, arc_angle)?;
        if arc_angle.0 > PI + TOLERANCE_ANGLE {
            return Ok(not_found(OPERATION, NoSolution::ReflexSweep, sp, ep));
        }

        let chord_length = sp.distance_to(ep);
        if is_small(chord_length, TOLERANCE_LENGTH) {
            return Ok(not_found(OPERATION, NoSolution::DegenerateChord, sp, ep));
        }

        let radius = 0.5 * chord_length / libm::sin(0.5 * arc_angle.0);
        Self::from_sp_ep_rd_cw(sp, ep, radius, clockwise)
    }

    /// Construct the clockwise Arc about `cp` from `sp` that sweeps
    /// `arc_angle`.
    /// * `arc_angle` - the sweep angle, in `Radians` or `Degrees`.
    ///
    /// returns `NotFound` if `sp` is at the centre or `arc_angle` is greater
    /// than a half turn.
    /// # Errors
    ///
    /// `InvalidArgument` if `arc_angle` is not in the range: 0 < angle < 2 * PI.
    /// # Examples
    /// ```
    /// use planar_arc::{Arc, Degrees, Point};
    ///
    /// let cp = Point::new(0.0, 0.0);
    /// let sp = Point::new(1.0, 0.0);
    /// let arc = Arc::from_cp_sp_aa_cw(&cp, &sp, Degrees(90.0)).unwrap().into_arc().unwrap();
    /// assert_eq!(Point::new(0.0, -1.0), arc.ep());
    /// ```
    pub fn from_cp_sp_aa_cw(
        cp: &Point,
        sp: &Point,
        arc_angle: impl Into<Radians>,
    ) -> Result<ArcSolution> {
        Self::from_cp_sp_aa("from_cp_sp_aa_cw", cp, sp, arc_angle.into(), true)
    }

    /// Construct the counter-clockwise Arc about `cp` from `sp` that sweeps
    /// `arc_angle`.
    /// # Errors
    ///
    /// `InvalidArgument` if `arc_angle` is not in the range: 0 < angle < 2 * PI.
    pub fn from_cp_sp_aa_ccw(
        cp: &Point,
        sp: &Point,
        arc_angle: impl Into<Radians>,
    ) -> Result<ArcSolution> {
        Self::from_cp_sp_aa("from_cp_sp_aa_ccw", cp, sp, arc_angle.into(), false)
    }

    fn from_cp_sp_aa(
        operation: &str,
        cp: &Point,
        sp: &Point,
        arc_angle: Radians,
        clockwise: bool,
    ) -> Result<ArcSolution> {
        validate_sweep(operation, arc_angle)?;
        if arc_angle.0 > PI + TOLERANCE_ANGLE {
            return Ok(not_found(operation, NoSolution::ReflexSweep, sp, sp));
        }

        if is_small(cp.distance_to(sp), TOLERANCE_LENGTH) {
            return Ok(not_found(operation, NoSolution::DegenerateCentre, sp, sp));
        }

        let mut radius = Line::new(*cp, *sp);
        radius.rotate(if clockwise { -arc_angle } else { arc_angle });
        let ep = Point::new(radius.ep_x(), radius.ep_y());

        let arc = Self::new(*cp, *sp, ep);
        if arc.is_clockwise() != clockwise {
            return Ok(not_found(operation, NoSolution::OrientationMismatch, sp, &ep));
        }

        Ok(found(operation, arc))
    }
}
