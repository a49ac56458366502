// Copyright (c) 2020-2024 Via Technology Ltd.

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

//! The trig module contains the unit-tagged angle types.
//!
//! An angle value is always a `Degrees` or a `Radians`, never a bare `f64`.
//! An `Angle` holds the sine and cosine of an angle, it is the form in which
//! rotations are applied to coordinates.

#![allow(clippy::float_cmp)]

use super::{clamp, Validate};
use contracts::debug_ensures;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI, TAU};
use std::ops::{Neg, Sub};

/// An angle in degrees.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Degrees(pub f64);

/// An angle in radians.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Radians(pub f64);

impl Degrees {
    /// Normalise into the range: 0.0 <= value < 360.0
    /// # Examples
    /// ```
    /// use planar_arc::trig::Degrees;
    ///
    /// assert_eq!(0.0, Degrees(360.0).normalise_positive().0);
    /// assert_eq!(270.0, Degrees(-90.0).normalise_positive().0);
    /// assert_eq!(90.0, Degrees(450.0).normalise_positive().0);
    /// ```
    #[debug_ensures((0.0..360.0).contains(&ret.0))]
    #[must_use]
    pub fn normalise_positive(&self) -> Self {
        Self(wrap_positive(self.0, 360.0))
    }
}

impl From<Radians> for Degrees {
    fn from(a: Radians) -> Self {
        Self(a.0.to_degrees())
    }
}

impl Radians {
    /// Normalise into the range: -PI < value <= PI
    /// # Examples
    /// ```
    /// use planar_arc::trig::Radians;
    /// use std::f64::consts::PI;
    ///
    /// assert_eq!(0.0, Radians(-2.0 * PI).normalise().0);
    /// assert_eq!(PI, Radians(-PI).normalise().0);
    /// assert_eq!(PI, Radians(PI).normalise().0);
    /// ```
    #[must_use]
    pub fn normalise(&self) -> Self {
        let value = libm::remainder(self.0, TAU);
        Self(if value <= -PI { value + TAU } else { value })
    }

    /// Normalise into the range: 0 <= value < 2 * PI
    /// # Examples
    /// ```
    /// use planar_arc::trig::Radians;
    /// use std::f64::consts::{FRAC_PI_2, PI};
    ///
    /// assert_eq!(0.0, Radians(2.0 * PI).normalise_positive().0);
    /// assert_eq!(3.0 * FRAC_PI_2, Radians(-FRAC_PI_2).normalise_positive().0);
    /// ```
    #[debug_ensures((0.0..TAU).contains(&ret.0))]
    #[must_use]
    pub fn normalise_positive(&self) -> Self {
        Self(wrap_positive(self.0, TAU))
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        Self(libm::fabs(self.0))
    }
}

/// Wrap `value` into the range: 0 <= value < `period`.
/// A tiny negative value would round up to `period`, so it wraps to zero.
fn wrap_positive(value: f64, period: f64) -> f64 {
    let value = libm::fmod(value, period);
    let value = if value < 0.0 { value + period } else { value };
    if value < period {
        value
    } else {
        0.0
    }
}

impl Validate for Radians {
    /// Test whether a Radians is in the range: -PI <= value <= PI
    fn is_valid(&self) -> bool {
        (-PI..=PI).contains(&self.0)
    }
}

impl From<Degrees> for Radians {
    fn from(a: Degrees) -> Self {
        Self(a.0.to_radians())
    }
}

impl Neg for Radians {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sub for Radians {
    type Output = Self;

    /// The signed difference of two angles, normalised into the range:
    /// -PI < value <= PI
    /// # Examples
    /// ```
    /// use planar_arc::trig::Radians;
    ///
    /// let angle_350 = Radians(350.0_f64.to_radians());
    /// let angle_10 = Radians(10.0_f64.to_radians());
    /// let result = angle_10 - angle_350;
    /// assert!((20.0_f64.to_radians() - result.0).abs() <= 16.0 * f64::EPSILON);
    /// ```
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0).normalise()
    }
}

/// A value in the range: -1.0 <= value <= 1.0, i.e. a sine or cosine.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct UnitNegRange(pub f64);

impl UnitNegRange {
    /// Clamp a value into the range: -1.0 to +1.0 inclusive.
    /// # Examples
    /// ```
    /// use planar_arc::trig::UnitNegRange;
    ///
    /// assert_eq!(-1.0, UnitNegRange::clamp(-1.0 - f64::EPSILON).0);
    /// assert_eq!(-0.5, UnitNegRange::clamp(-0.5).0);
    /// assert_eq!(1.0, UnitNegRange::clamp(1.0 + f64::EPSILON).0);
    /// ```
    #[must_use]
    pub fn clamp(value: f64) -> Self {
        Self(clamp(value, -1.0, 1.0))
    }

    /// The other of the sine and cosine of an angle with a sine or cosine
    /// of this value, from: sin<sup>2</sup> + cos<sup>2</sup> = 1.
    /// The result is not negative.
    #[must_use]
    pub fn complement(self) -> Self {
        Self::clamp(libm::sqrt((1.0 - self.0) * (1.0 + self.0)))
    }
}

impl Validate for UnitNegRange {
    fn is_valid(&self) -> bool {
        (-1.0..=1.0).contains(&self.0)
    }
}

/// An angle held as its sine and cosine.
///
/// Rotating by an `Angle` is counter-clockwise for a positive angle.
/// Angles that are multiples of 90 degrees or PI / 2 radians have exact
/// sines and cosines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    s: UnitNegRange,
    c: UnitNegRange,
}

impl Default for Angle {
    /// Zero degrees.
    fn default() -> Self {
        Self {
            s: UnitNegRange(0.0),
            c: UnitNegRange(1.0),
        }
    }
}

impl Neg for Angle {
    type Output = Self;

    /// The angle in the opposite direction: the sine is negated.
    fn neg(self) -> Self {
        Self {
            s: UnitNegRange(-self.s.0),
            c: self.c,
        }
    }
}

impl Validate for Angle {
    /// Test whether s^2 + c^2 is within a few epsilon of 1.0.
    fn is_valid(&self) -> bool {
        const MAX_ERROR: f64 = 32.0 * f64::EPSILON;
        let sq_length = self.s.0.mul_add(self.s.0, self.c.0 * self.c.0);
        libm::fabs(1.0 - sq_length) <= MAX_ERROR
    }
}

impl Angle {
    /// The Angle of a whole number of quarter turns plus a remainder
    /// angle with sine `s` and cosine `c`.
    /// The remainder must be within +/- 45 degrees, so `c` is positive.
    fn from_quarter_turns(s: f64, c: f64, quarter_turns: i32) -> Self {
        let (s, c) = match quarter_turns.rem_euclid(4) {
            0 => (s, c),
            1 => (c, -s),
            2 => (-s, -c),
            _ => (-c, s),
        };
        Self {
            s: UnitNegRange(s),
            c: UnitNegRange(c),
        }
    }

    #[must_use]
    pub const fn sin(self) -> f64 {
        self.s.0
    }

    #[must_use]
    pub const fn cos(self) -> f64 {
        self.c.0
    }

    /// The Angle in Radians, in the range: -PI <= value <= PI
    #[debug_ensures(ret.is_valid())]
    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(libm::atan2(self.s.0, self.c.0))
    }

    /// Rotate the vector (x, y) by the Angle.
    ///
    /// returns the rotated (x, y) pair.
    /// # Examples
    /// ```
    /// use planar_arc::trig::{Angle, Degrees};
    ///
    /// let quarter_turn = Angle::from(Degrees(90.0));
    /// assert_eq!((-2.0, 1.0), quarter_turn.rotate(1.0, 2.0));
    /// ```
    #[must_use]
    pub fn rotate(self, x: f64, y: f64) -> (f64, f64) {
        (
            x.mul_add(self.c.0, -(y * self.s.0)),
            x.mul_add(self.s.0, y * self.c.0),
        )
    }
}

impl From<Degrees> for Angle {
    /// The remainder after removing quarter turns is within +/- 45 degrees;
    /// 30 and 45 degrees use their exact sines.
    #[debug_ensures(ret.is_valid())]
    fn from(a: Degrees) -> Self {
        let (remainder, quarter_turns) = libm::remquo(a.0, 90.0);
        let (sine, cosine) = match libm::fabs(remainder) {
            r if r == 45.0 => (FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            r if r == 30.0 => (0.5, UnitNegRange(0.5).complement().0),
            r => {
                let sine = UnitNegRange::clamp(libm::sin(r.to_radians()));
                (sine.0, sine.complement().0)
            }
        };
        Self::from_quarter_turns(libm::copysign(sine, remainder), cosine, quarter_turns)
    }
}

impl From<Radians> for Angle {
    #[debug_ensures(ret.is_valid())]
    fn from(a: Radians) -> Self {
        let (remainder, quarter_turns) = libm::remquo(a.0, FRAC_PI_2);
        let sine = UnitNegRange::clamp(libm::sin(remainder));
        Self::from_quarter_turns(sine.0, sine.complement().0, quarter_turns)
    }
}

impl From<Angle> for Radians {
    fn from(a: Angle) -> Self {
        a.to_radians()
    }
}

impl From<Angle> for Degrees {
    fn from(a: Angle) -> Self {
        Self::from(a.to_radians())
    }
}

impl Serialize for Angle {
    /// Serialize an Angle as a value in Degrees.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_newtype_struct("Degrees", &Degrees::from(*self))
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::from(Degrees::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_normalise_positive() {
        assert_eq!(Degrees(0.0), Degrees(-720.0).normalise_positive());
        assert_eq!(Degrees(350.0), Degrees(-10.0).normalise_positive());
        assert_eq!(Degrees(10.0), Degrees(370.0).normalise_positive());
        assert_eq!(Degrees(359.5), Degrees(359.5).normalise_positive());
        // tiny negative values must not wrap to 360
        assert_eq!(Degrees(0.0), Degrees(-1.0e-15).normalise_positive());
    }

    #[test]
    fn test_radians_normalise() {
        let result = Radians(5.0 * PI).normalise();
        assert!(libm::fabs(PI - result.0) <= 4.0 * f64::EPSILON);

        assert_eq!(1.5 * PI, Radians(-0.5 * PI).normalise_positive().0);
        assert_eq!(0.0, Radians(-1.0e-18).normalise_positive().0);

        for i in -720..720 {
            let value = Radians(f64::from(i).to_radians());
            let positive = value.normalise_positive();
            assert!((0.0..TAU).contains(&positive.0));
            let signed = value.normalise();
            assert!(-PI < signed.0 && signed.0 <= PI);
            assert!(signed.is_valid());
        }
    }

    #[test]
    fn test_radians_sub_and_abs() {
        let result = Radians(0.5) - Radians(3.0 * FRAC_PI_2);
        assert!(result.0 > 0.0);
        assert!(libm::fabs(0.5 + FRAC_PI_2 - result.0) <= 4.0 * f64::EPSILON);

        assert_eq!(Radians(1.0), Radians(-1.0).abs());
        assert_eq!(Radians(-1.0), -Radians(1.0));
        assert_eq!(Degrees(180.0), Degrees::from(Radians(PI)));
        assert_eq!(Radians(-FRAC_PI_2), Radians::from(Degrees(-90.0)));
    }

    #[test]
    fn test_unit_neg_range() {
        assert_eq!(UnitNegRange(0.0), UnitNegRange(-1.0).complement());
        assert_eq!(UnitNegRange(1.0), UnitNegRange(0.0).complement());
        assert_eq!(UnitNegRange(0.75_f64.sqrt()), UnitNegRange(-0.5).complement());
        assert!(UnitNegRange::clamp(2.0).is_valid());
        assert!(!UnitNegRange(-1.5).is_valid());
    }

    #[test]
    fn test_angle_zero() {
        let angle = Angle::default();
        assert!(angle.is_valid());
        assert_eq!(0.0, angle.sin());
        assert_eq!(1.0, angle.cos());
        assert_eq!(Radians(0.0), angle.to_radians());
        assert_eq!(Degrees(0.0), Degrees::from(angle));
        assert_eq!(angle, Angle::from(Degrees(0.0)));
        assert_eq!(angle, Angle::from(Radians(0.0)));
    }

    #[test]
    fn test_angle_quarter_turns_are_exact() {
        for (degrees, sin, cos) in [
            (90.0, 1.0, 0.0),
            (180.0, 0.0, -1.0),
            (270.0, -1.0, 0.0),
            (-90.0, -1.0, 0.0),
            (360.0, 0.0, 1.0),
            (450.0, 1.0, 0.0),
        ] {
            let angle = Angle::from(Degrees(degrees));
            assert_eq!(sin, angle.sin(), "{degrees}");
            assert_eq!(cos, angle.cos(), "{degrees}");

            let angle = Angle::from(Radians::from(Degrees(degrees)));
            assert_eq!(sin, angle.sin(), "{degrees}");
            assert_eq!(cos, angle.cos(), "{degrees}");
        }
    }

    #[test]
    fn test_angle_from_degrees() {
        let angle = Angle::from(Degrees(45.0));
        assert_eq!(FRAC_1_SQRT_2, angle.sin());
        assert_eq!(FRAC_1_SQRT_2, angle.cos());
        assert_eq!(Degrees(45.0), Degrees::from(angle));

        let angle = Angle::from(Degrees(-30.0));
        assert_eq!(-0.5, angle.sin());
        let angle = Angle::from(Degrees(150.0));
        assert_eq!(0.5, angle.sin());
        assert!(angle.cos() < 0.0);
        let angle = Angle::from(Degrees(240.0));
        assert_eq!(-0.5, angle.cos());

        for i in -360..=360 {
            let degrees = f64::from(i);
            let angle = Angle::from(Degrees(degrees));
            assert!(angle.is_valid());
            let radians = degrees.to_radians();
            assert!(libm::fabs(libm::sin(radians) - angle.sin()) < 1e-15, "{i}");
            assert!(libm::fabs(libm::cos(radians) - angle.cos()) < 1e-15, "{i}");
        }
    }

    #[test]
    fn test_angle_from_radians() {
        let angle = Angle::from(Radians(FRAC_PI_2));
        assert_eq!(1.0, angle.sin());
        assert_eq!(0.0, angle.cos());
        assert_eq!(Radians(FRAC_PI_2), angle.to_radians());
        assert_eq!(Degrees(90.0), Degrees::from(angle));

        for i in -100..=100 {
            let radians = 0.07 * f64::from(i);
            let angle = Angle::from(Radians(radians));
            assert!(angle.is_valid());
            assert!(libm::fabs(libm::sin(radians) - angle.sin()) < 1e-15, "{i}");
            assert!(libm::fabs(libm::cos(radians) - angle.cos()) < 1e-15, "{i}");
        }
    }

    #[test]
    fn test_angle_rotate() {
        let quarter_turn = Angle::from(Degrees(90.0));
        assert_eq!((0.0, 1.0), quarter_turn.rotate(1.0, 0.0));
        assert_eq!((-1.0, 0.0), quarter_turn.rotate(0.0, 1.0));

        let half_turn = Angle::from(Degrees(180.0));
        assert_eq!((-3.0, -4.0), half_turn.rotate(3.0, 4.0));

        let clockwise = -quarter_turn;
        assert_eq!((0.0, -1.0), clockwise.rotate(1.0, 0.0));
        assert_eq!(Radians(-FRAC_PI_2), clockwise.to_radians());
    }

    #[test]
    fn test_serde_degrees_and_angle() {
        let degrees_20 = Degrees(20.0);
        let serialized = serde_json::to_string(&degrees_20).unwrap();
        assert_eq!("20.0", serialized);
        let deserialized: Degrees = serde_json::from_str(&serialized).unwrap();
        assert_eq!(degrees_20, deserialized);

        let angle_90 = Angle::from(Degrees(90.0));
        let serialized = serde_json::to_string(&angle_90).unwrap();
        assert_eq!("90.0", serialized);
        let deserialized: Angle = serde_json::from_str(&serialized).unwrap();
        assert_eq!(angle_90, deserialized);
    }
}
