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

//! The `convert` module contains conversions between the types of this
//! library and those of [nalgebra](https://crates.io/crates/nalgebra) and
//! [geo-types](https://crates.io/crates/geo-types).
//!
//! Note: the diagnostic id of a `Point` is not carried by the other types,
//! a Point converted back from them has a new id.

extern crate nalgebra as na;
use crate::line::Line;
use crate::point::Point;
use geo_types;

impl From<Point> for na::Vector2<f64> {
    fn from(a: Point) -> Self {
        Self::new(a.x(), a.y())
    }
}

impl From<na::Vector2<f64>> for Point {
    fn from(a: na::Vector2<f64>) -> Self {
        Self::new(a.x, a.y)
    }
}

impl From<Point> for geo_types::Coord {
    fn from(a: Point) -> Self {
        Self { x: a.x(), y: a.y() }
    }
}

impl From<geo_types::Coord> for Point {
    fn from(item: geo_types::Coord) -> Self {
        Self::new(item.x, item.y)
    }
}

impl From<Point> for geo_types::Point {
    fn from(a: Point) -> Self {
        Self::new(a.x(), a.y())
    }
}

impl From<geo_types::Point> for Point {
    fn from(item: geo_types::Point) -> Self {
        Self::from(item.0)
    }
}

impl From<Line> for geo_types::Line {
    /// Convert a `Line` to a geo-types `Line` from its start to its end point.
    fn from(a: Line) -> Self {
        Self::new(geo_types::Coord::from(a.sp()), geo_types::Coord::from(a.ep()))
    }
}

impl From<geo_types::Line> for Line {
    fn from(item: geo_types::Line) -> Self {
        Self::new(Point::from(item.start), Point::from(item.end))
    }
}
