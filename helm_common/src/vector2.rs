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

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::fmt;
use serde::{Serialize,Deserialize};
use geo_types::Coord;
use crate::angle::Angle;

/// a 2D point or vector in the local frame. Units are whatever the frame uses (nautical miles
/// for [`crate::Frame`]), `x` points north and `y` east.
/// Note that `*` between two vectors is the dot product.
#[derive(Debug,Clone,Copy,PartialEq,Default,Serialize,Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub fn new (x: f64, y: f64)->Self {
        Vector2 { x, y }
    }

    /// construct from magnitude and direction
    pub fn polar (radius: f64, angle: Angle)->Self {
        Vector2 { x: radius * angle.cos(), y: radius * angle.sin() }
    }

    pub fn dot (&self, v: &Vector2)->f64 {
        self.x * v.x + self.y * v.y
    }

    /// 2D cross product (determinant of [self, v]). Positive if `v` is rotated towards +y
    /// relative to self
    pub fn det (&self, v: &Vector2)->f64 {
        self.x * v.y - self.y * v.x
    }

    pub fn abs (&self)->f64 {
        self.x.hypot(self.y)
    }

    pub fn abs_sq (&self)->f64 {
        self.x * self.x + self.y * self.y
    }

    /// phase angle (direction) of the vector. The zero vector has phase 0
    pub fn phi (&self)->Angle {
        Angle::from_radians( self.y.atan2(self.x)).unwrap_or(Angle::ZERO)
    }

    pub fn distance (&self, v: &Vector2)->f64 {
        (*v - *self).abs()
    }

    /// rotated by +90°
    pub fn perp (&self)->Self {
        Vector2 { x: -self.y, y: self.x }
    }

    pub fn rotate (&self, angle: Angle)->Self {
        self.rotate_rad( angle.radians())
    }

    /// rotation by a raw radian value that does not have to be normalized (e.g. swept arc angles)
    pub fn rotate_rad (&self, rad: f64)->Self {
        let (s,c) = rad.sin_cos();
        Vector2 { x: c * self.x - s * self.y, y: s * self.x + c * self.y }
    }

    /// unit vector in the same direction, or None for a zero length vector
    pub fn unit (&self)->Option<Self> {
        let len = self.abs();
        if len > 0.0 { Some( *self / len) } else { None }
    }

    pub fn is_finite (&self)->bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

//--- geo_types interop (x,y stay x,y - these are local frame coordinates, not lon/lat)

impl From<Vector2> for Coord<f64> {
    fn from (v: Vector2) -> Self { Coord { x: v.x, y: v.y } }
}

impl From<Coord<f64>> for Vector2 {
    fn from (c: Coord<f64>) -> Self { Vector2 { x: c.x, y: c.y } }
}

impl From<(f64,f64)> for Vector2 {
    fn from (t: (f64,f64)) -> Self { Vector2 { x: t.0, y: t.1 } }
}

//--- num ops

impl Add for Vector2 {
    type Output = Vector2;
    fn add (self, v: Vector2) -> Vector2 { Vector2 { x: self.x + v.x, y: self.y + v.y } }
}

impl AddAssign for Vector2 {
    fn add_assign (&mut self, v: Vector2) { self.x += v.x; self.y += v.y; }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub (self, v: Vector2) -> Vector2 { Vector2 { x: self.x - v.x, y: self.y - v.y } }
}

impl SubAssign for Vector2 {
    fn sub_assign (&mut self, v: Vector2) { self.x -= v.x; self.y -= v.y; }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg (self) -> Vector2 { Vector2 { x: -self.x, y: -self.y } }
}

/// dot product
impl Mul<Vector2> for Vector2 {
    type Output = f64;
    fn mul (self, v: Vector2) -> f64 { self.dot(&v) }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul (self, s: f64) -> Vector2 { Vector2 { x: self.x * s, y: self.y * s } }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    fn mul (self, v: Vector2) -> Vector2 { Vector2 { x: v.x * self, y: v.y * self } }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;
    fn div (self, s: f64) -> Vector2 { Vector2 { x: self.x / s, y: self.y / s } }
}
