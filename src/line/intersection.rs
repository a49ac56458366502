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

//! The intersection module contains functions for calculating the
//! intersection of a pair of Lines, either as infinite lines or as finite
//! segments.

use super::Line;
use crate::point::Point;
use crate::{is_small, PARALLEL_DENOMINATOR, TOLERANCE_ANGLE, TOLERANCE_LENGTH};

/// The intersection of a pair of finite line segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentIntersection {
    /// The segments are parallel or coincident.
    Parallel,
    /// The segments intersect at a point within both segments.
    Within(Point),
    /// The infinite lines through the segments intersect at a point outside
    /// at least one of the segments.
    Extended(Point),
}

impl SegmentIntersection {
    /// The status code of the intersection:
    /// 0 parallel, 1 within both segments, 2 on the extended lines.
    #[must_use]
    pub const fn status(&self) -> u8 {
        match self {
            Self::Parallel => 0,
            Self::Within(_) => 1,
            Self::Extended(_) => 2,
        }
    }

    /// The intersection point, if any.
    #[must_use]
    pub const fn point(&self) -> Option<Point> {
        match self {
            Self::Parallel => None,
            Self::Within(point) | Self::Extended(point) => Some(*point),
        }
    }
}

impl Line {
    /// Calculate the intersection point of the infinite lines through this
    /// Line and another Line, from their `Ax + By + C = 0` equations.
    ///
    /// returns None if either Line has zero length or if the Lines are
    /// parallel or coincident.
    /// # Examples
    /// ```
    /// use planar_arc::{Line, Point};
    ///
    /// let line1 = Line::from_coords(0.0, 0.0, 2.0, 2.0);
    /// let line2 = Line::from_coords(0.0, 2.0, 2.0, 0.0);
    /// assert_eq!(Some(Point::new(1.0, 1.0)), line1.intersection_with(&line2));
    /// ```
    #[must_use]
    pub fn intersection_with(&self, other: &Self) -> Option<Point> {
        let length1 = self.length();
        let length2 = other.length();
        if is_small(length1, TOLERANCE_LENGTH) || is_small(length2, TOLERANCE_LENGTH) {
            return None;
        }

        let (a1, b1, c1) = self.coefficients();
        let (a2, b2, c2) = other.coefficients();

        // the determinant is the sine of the angle between the lines scaled
        // by their lengths
        let det = a1.mul_add(b2, -(a2 * b1));
        if is_small(libm::fabs(det), TOLERANCE_ANGLE * length1 * length2) {
            return None;
        }

        let x = b1.mul_add(c2, -(b2 * c1)) / det;
        let y = a2.mul_add(c1, -(a1 * c2)) / det;
        Some(Point::new(x, y))
    }

    /// Calculate the intersection of this Line and another Line as finite
    /// segments.
    ///
    /// The segments are parameterised from their start points, an
    /// intersection at parameters within 0 and 1 inclusive on both segments
    /// is `Within` them.
    /// # Examples
    /// ```
    /// use planar_arc::{Line, Point, SegmentIntersection};
    ///
    /// let line1 = Line::from_coords(0.0, 0.0, 1.0, 1.0);
    /// let line2 = Line::from_coords(3.0, 0.0, 3.0, 1.0);
    /// let result = line1.intersection_with_line(&line2);
    /// assert_eq!(SegmentIntersection::Extended(Point::new(3.0, 3.0)), result);
    /// assert_eq!(2, result.status());
    /// ```
    #[must_use]
    pub fn intersection_with_line(&self, other: &Self) -> SegmentIntersection {
        let r = Point::new(self.dx(), self.dy());
        let s = Point::new(other.dx(), other.dy());

        let denominator = r.cross_product(&s);
        if libm::fabs(denominator) < PARALLEL_DENOMINATOR {
            return SegmentIntersection::Parallel;
        }

        let qp = other.sp() - self.sp();
        let t = qp.cross_product(&s) / denominator;
        let u = qp.cross_product(&r) / denominator;

        let point = Point::new(
            r.x().mul_add(t, self.sp_x()),
            r.y().mul_add(t, self.sp_y()),
        );
        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            SegmentIntersection::Within(point)
        } else {
            SegmentIntersection::Extended(point)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_with() {
        let line1 = Line::from_coords(0.0, 0.0, 2.0, 2.0);
        let line2 = Line::from_coords(0.0, 2.0, 2.0, 0.0);
        assert_eq!(Some(Point::new(1.0, 1.0)), line1.intersection_with(&line2));
        assert_eq!(Some(Point::new(1.0, 1.0)), line2.intersection_with(&line1));

        // vertical and horizontal, the lines are extended to intersect
        let vertical = Line::from_coords(1.0, -1.0, 1.0, 5.0);
        let horizontal = Line::from_coords(0.0, 2.0, 3.0, 2.0);
        assert_eq!(
            Some(Point::new(1.0, 2.0)),
            vertical.intersection_with(&horizontal)
        );
        let short = Line::from_coords(4.0, 7.0, 5.0, 7.0);
        assert_eq!(Some(Point::new(1.0, 7.0)), vertical.intersection_with(&short));
    }

    #[test]
    fn test_intersection_with_no_solution() {
        let line1 = Line::from_coords(0.0, 0.0, 2.0, 1.0);

        // parallel
        let line2 = Line::from_coords(0.0, 1.0, 4.0, 3.0);
        assert_eq!(None, line1.intersection_with(&line2));

        // coincident, in the opposite direction
        let line3 = Line::from_coords(6.0, 3.0, 4.0, 2.0);
        assert_eq!(None, line1.intersection_with(&line3));

        // zero length
        let null_line = Line::from_coords(1.0, 1.0, 1.0, 1.0);
        assert_eq!(None, line1.intersection_with(&null_line));
        assert_eq!(None, null_line.intersection_with(&line1));
    }

    #[test]
    fn test_intersection_with_line() {
        let line1 = Line::from_coords(0.0, 0.0, 2.0, 2.0);
        let line2 = Line::from_coords(0.0, 2.0, 2.0, 0.0);
        let result = line1.intersection_with_line(&line2);
        assert_eq!(SegmentIntersection::Within(Point::new(1.0, 1.0)), result);
        assert_eq!(1, result.status());
        assert_eq!(Some(Point::new(1.0, 1.0)), result.point());

        // touching at an end point is within
        let line3 = Line::from_coords(0.0, 0.0, 1.0, 0.0);
        let line4 = Line::from_coords(1.0, 0.0, 1.0, 1.0);
        assert_eq!(
            SegmentIntersection::Within(Point::new(1.0, 0.0)),
            line3.intersection_with_line(&line4)
        );

        // outside one of the segments
        let line5 = Line::from_coords(0.0, 0.0, 1.0, 1.0);
        let line6 = Line::from_coords(3.0, 0.0, 3.0, 1.0);
        let result = line5.intersection_with_line(&line6);
        assert_eq!(SegmentIntersection::Extended(Point::new(3.0, 3.0)), result);
        assert_eq!(2, result.status());

        // outside the other segment
        let line7 = Line::from_coords(0.0, 0.0, 4.0, 4.0);
        let result = line7.intersection_with_line(&line6);
        assert_eq!(SegmentIntersection::Extended(Point::new(3.0, 3.0)), result);
    }

    #[test]
    fn test_intersection_with_line_parallel() {
        let line1 = Line::from_coords(0.0, 0.0, 2.0, 1.0);
        let line2 = Line::from_coords(0.0, 1.0, 4.0, 3.0);
        let result = line1.intersection_with_line(&line2);
        assert_eq!(SegmentIntersection::Parallel, result);
        assert_eq!(0, result.status());
        assert_eq!(None, result.point());

        // overlapping segments are coincident, not intersecting
        let line3 = Line::from_coords(1.0, 0.5, 4.0, 2.0);
        assert_eq!(
            SegmentIntersection::Parallel,
            line1.intersection_with_line(&line3)
        );

        let null_line = Line::default();
        assert_eq!(
            SegmentIntersection::Parallel,
            line1.intersection_with_line(&null_line)
        );
    }
}
