/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::{fmt, ops};
use crate::{PI, TWO_PI};
use crate::errors::{HelmCommonError, Result};

/// fold a radian value into (-π, π]
///
/// values within the range are returned as they are (with the exception of -π which maps to π).
/// Outside of it negative values are folded with `(x-π) % 2π + π` and positive ones with
/// `(x+π) % 2π - π`, which keeps the remainder sign of the dividend.
#[inline]
pub fn wrap_angle (x: f64) -> f64 {
    let r = if x.abs() > PI {
        if x < 0.0 { (x - PI) % TWO_PI + PI } else { (x + PI) % TWO_PI - PI }
    } else {
        x
    };

    if r <= -PI { PI } else { r }
}

/// fold a radian value into [0, 2π)
#[inline]
pub fn wrap_two_pi (x: f64) -> f64 {
    let r = x % TWO_PI;
    let r = if r < 0.0 { r + TWO_PI } else { r };
    if r >= TWO_PI { 0.0 } else { r }
}

/// a normalized angle in radians. The stored value is always within (-π, π], all arithmetic
/// operators re-normalize their result.
///
/// Course angles follow the local frame convention: 0 points along +x (north) and positive
/// angles turn towards +y (east), i.e. clockwise on a chart.
#[derive(Clone,Copy,PartialEq,Default)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    /// fails for NaN or infinite values
    pub fn from_radians (rad: f64) -> Result<Self> {
        if rad.is_finite() {
            Ok( Angle( wrap_angle(rad)))
        } else {
            Err( HelmCommonError::NonFiniteAngle(rad))
        }
    }

    pub fn from_degrees (deg: f64) -> Result<Self> {
        if deg.is_finite() {
            Ok( Angle( wrap_angle( deg.to_radians())))
        } else {
            Err( HelmCommonError::NonFiniteAngle(deg))
        }
    }

    // only for values that are known to be finite (results of arithmetic on angles)
    #[inline]
    fn wrapped (rad: f64) -> Self { Angle( wrap_angle(rad)) }

    #[inline] pub fn radians (&self)->f64 { self.0 }
    #[inline] pub fn degrees (&self)->f64 { self.0.to_degrees() }

    #[inline] pub fn sin (&self)->f64 { self.0.sin() }
    #[inline] pub fn cos (&self)->f64 { self.0.cos() }

    /// the value mapped into [0, 2π)
    #[inline] pub fn positive_radians (&self)->f64 { wrap_two_pi(self.0) }

    /// does self lie strictly inside the arc swept clockwise (increasing angle) from `min`
    /// towards `max`? The arc does not include `max`, and an empty arc (`min == max`) never
    /// contains anything.
    pub fn between (&self, min: Angle, max: Angle) -> bool {
        let span = wrap_two_pi( max.0 - min.0);
        let offset = wrap_two_pi( self.0 - min.0);
        offset < span
    }

    /// scale by `factor`, failing if the result is not finite
    pub fn scale (&self, factor: f64) -> Result<Self> {
        Angle::from_radians( self.0 * factor)
    }

    /// smallest unsigned separation between two angles, in [0, π]
    pub fn abs_diff (&self, other: Angle) -> f64 {
        wrap_angle( self.0 - other.0).abs()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({}rad)", self.0)
    }
}

impl From<Angle> for f64 {
    fn from (a: Angle) -> Self { a.0 }
}

//--- allowed num ops

impl ops::Add<Angle> for Angle {
    type Output = Self;
    fn add (self, rhs: Angle) -> Self::Output { Angle::wrapped( self.0 + rhs.0) }
}

impl ops::AddAssign<Angle> for Angle {
    fn add_assign (&mut self, rhs: Angle) { *self = *self + rhs }
}

impl ops::Sub<Angle> for Angle {
    type Output = Self;
    fn sub (self, rhs: Angle) -> Self::Output { Angle::wrapped( self.0 - rhs.0) }
}

impl ops::SubAssign<Angle> for Angle {
    fn sub_assign (&mut self, rhs: Angle) { *self = *self - rhs }
}

// scaling is only allowed with floats. Non-finite products yield Angle::ZERO, use
// Angle::scale if the factor is not known to be finite
impl ops::Mul<f64> for Angle {
    type Output = Self;
    fn mul (self, rhs: f64) -> Self::Output { self.scale(rhs).unwrap_or(Angle::ZERO) }
}

impl ops::Neg for Angle {
    type Output = Self;
    fn neg (self) -> Self::Output { Angle::wrapped( -self.0) }
}

//--- serde support

use serde::ser::{Serialize, Serializer};
use serde::de::{self, Deserialize, Deserializer, Visitor};

impl Serialize for Angle {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Angle, D::Error> where D: Deserializer<'de> {
        struct AngleVisitor;

        impl<'de> Visitor<'de> for AngleVisitor {
            type Value = Angle;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("finite floating point radians")
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> where E: de::Error {
                Angle::from_radians(value).map_err( |e| E::custom(e.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> where E: de::Error {
                self.visit_f64( value as f64)
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> where E: de::Error {
                self.visit_f64( value as f64)
            }
        }

        deserializer.deserialize_f64( AngleVisitor)
    }
}
