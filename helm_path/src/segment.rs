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

use std::fmt;
use helm_common::{Angle, Vector2, PI};
use helm_common::angle::wrap_two_pi;

use crate::{Position, STRAIGHT_CURVE_EPSILON, TIME_TOLERANCE};
use crate::errors::{HelmPathError, Result, invalid_segment};

/// a single straight run or constant curvature arc of a path.
///
/// The curvature is signed: positive values turn towards +y (starboard for a north/east local
/// frame), the magnitude is the inverse turning radius in local distance units.
/// Speed (length / duration) is constant along the segment.
#[derive(Debug,Clone,PartialEq)]
pub struct Segment {
    start_point: Vector2,
    begin_angle: Angle,
    curve: f64,
    length: f64,
    duration: f64,
    port_dev: f64,
    starboard_dev: f64,

    o_v: Vector2, // unit direction at start, cached to avoid trig per query
}

impl Segment {
    pub fn new (start_point: Vector2, begin_angle: Angle, curve: f64, length: f64, duration: f64, port_dev: f64, starboard_dev: f64)->Result<Self> {
        if !start_point.is_finite() {
            return Err( invalid_segment!("non-finite start point {}", start_point))
        }
        if !curve.is_finite() {
            return Err( invalid_segment!("non-finite curvature {}", curve))
        }
        if !length.is_finite() || length < 0.0 {
            return Err( invalid_segment!("invalid length {}", length))
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err( invalid_segment!("invalid duration {}", duration))
        }
        if !port_dev.is_finite() || port_dev < 0.0 || !starboard_dev.is_finite() || starboard_dev < 0.0 {
            return Err( invalid_segment!("invalid deviation bounds {}/{}", port_dev, starboard_dev))
        }
        if !(length * curve).is_finite() {
            return Err( invalid_segment!("swept angle of length {} and curvature {} is not finite", length, curve))
        }

        let o_v = Vector2::polar( 1.0, begin_angle);
        Ok( Segment { start_point, begin_angle, curve, length, duration, port_dev, starboard_dev, o_v })
    }

    /// a turn by `turn` in the direction of the (signed) curvature, starting at `start`.
    /// The turn amount is measured in the curvature direction, i.e. a left turn of 90° with a
    /// negative curvature is given as -90°. Zero curvature can't be parameterized by turn angle.
    pub fn from_turn (start: &Position, curve: f64, turn: Angle)->Result<Self> {
        if !curve.is_finite() || curve.abs() < STRAIGHT_CURVE_EPSILON {
            return Err( invalid_segment!("turn with zero curvature {}", curve))
        }
        if !start.speed.is_finite() || start.speed <= 0.0 {
            return Err( invalid_segment!("turn with invalid speed {}", start.speed))
        }

        let sweep = if curve > 0.0 { wrap_two_pi( turn.radians()) } else { wrap_two_pi( -turn.radians()) };
        let length = sweep / curve.abs();
        let duration = length / start.speed;

        Segment::new( start.point, start.course, curve, length, duration, 0.0, 0.0)
    }

    /// a segment with given curvature that keeps the speed of `start` for `duration` seconds
    pub fn from_duration (start: &Position, curve: f64, duration: f64)->Result<Self> {
        if !start.speed.is_finite() || start.speed < 0.0 {
            return Err( invalid_segment!("invalid speed {}", start.speed))
        }
        Segment::new( start.point, start.course, curve, start.speed * duration, duration, 0.0, 0.0)
    }

    /// set the lateral corridor bounds (port, starboard) in local distance units
    pub fn with_deviations (self, port_dev: f64, starboard_dev: f64)->Result<Self> {
        Segment::new( self.start_point, self.begin_angle, self.curve, self.length, self.duration, port_dev, starboard_dev)
    }

    //--- accessors

    #[inline] pub fn start_point (&self)->Vector2 { self.start_point }
    #[inline] pub fn begin_angle (&self)->Angle { self.begin_angle }
    #[inline] pub fn curve (&self)->f64 { self.curve }
    #[inline] pub fn length (&self)->f64 { self.length }
    #[inline] pub fn duration (&self)->f64 { self.duration }
    #[inline] pub fn port_deviation (&self)->f64 { self.port_dev }
    #[inline] pub fn starboard_deviation (&self)->f64 { self.starboard_dev }
    #[inline] pub fn direction (&self)->Vector2 { self.o_v }

    /// constant speed along the segment (local distance units per second)
    #[inline] pub fn speed (&self)->f64 { self.length / self.duration }

    #[inline] pub fn is_straight (&self)->bool { self.curve.abs() < STRAIGHT_CURVE_EPSILON }

    /// signed turning radius, None for straight segments
    pub fn radius (&self)->Option<f64> {
        if self.is_straight() { None } else { Some( 1.0 / self.curve) }
    }

    /// signed course change over the whole segment in radians (not normalized, arcs can exceed 2π)
    pub fn swept_angle (&self)->f64 {
        if self.is_straight() { 0.0 } else { self.length * self.curve }
    }

    /// the center of the turning circle, None for straight segments
    pub fn center (&self)->Option<Vector2> {
        self.radius().map( |r| self.start_point + self.o_v.perp() * r)
    }

    pub fn start_position (&self)->Position {
        Position::new( self.start_point, self.begin_angle, self.speed())
    }

    pub fn end_point (&self)->Vector2 {
        self.point_at_length( self.length)
    }

    pub fn end_angle (&self)->Angle {
        self.begin_angle + angle_of( self.swept_angle())
    }

    pub fn end_position (&self)->Position {
        Position::new( self.end_point(), self.end_angle(), self.speed())
    }

    //--- kinematics

    /// position at segment local time `t` (seconds since the segment start). Times that exceed
    /// the duration by no more than [`TIME_TOLERANCE`] are clamped, everything else outside
    /// [0,duration] is an out-of-range error
    pub fn position (&self, t: f64)->Result<Position> {
        if !(t >= 0.0) || t > self.duration + TIME_TOLERANCE {
            return Err( HelmPathError::TimeOutOfRange { t, begin: 0.0, end: self.duration })
        }
        let t = t.min( self.duration);
        let speed = self.speed();
        let s = speed * t;

        Ok( Position::new( self.point_at_length(s), self.begin_angle + angle_of( s * self.curve_or_zero()), speed))
    }

    /// like [`Segment::position`] but treating out-of-range times as "no position"
    pub fn position_at (&self, t: f64)->Option<Position> {
        self.position(t).ok()
    }

    #[inline]
    fn curve_or_zero (&self)->f64 {
        if self.is_straight() { 0.0 } else { self.curve }
    }

    /// point after travelling `s` along the segment. Arcs rotate the start offset around the
    /// circle center by the swept angle `s * curve`
    fn point_at_length (&self, s: f64)->Vector2 {
        match self.radius() {
            None => self.start_point + self.o_v * s,
            Some(r) => {
                let center = self.start_point + self.o_v.perp() * r;
                center + (self.start_point - center).rotate_rad( s * self.curve)
            }
        }
    }

    /// point on the arc that is reached after turning by `rad` (unsigned, in curvature direction)
    pub(crate) fn point_at_turn (&self, rad: f64)->Vector2 {
        match self.radius() {
            None => self.start_point,
            Some(r) => {
                let center = self.start_point + self.o_v.perp() * r;
                center + (self.start_point - center).rotate_rad( rad * self.curve.signum())
            }
        }
    }

    //--- geometry

    /// closest approach distance between `p` and the segment (bounded line or arc).
    ///
    /// The sign tells on which side the point is: for straight segments positive values are on
    /// the +y side of the direction of travel, for arcs positive values are inside the turning
    /// circle. Distances to the segment end points are always positive.
    pub fn distance_signed (&self, p: &Vector2)->f64 {
        match self.center() {
            None => self.straight_distance_signed(p),
            Some(center) => self.arc_distance_signed( p, center)
        }
    }

    pub fn distance (&self, p: &Vector2)->f64 {
        self.distance_signed(p).abs()
    }

    fn straight_distance_signed (&self, p: &Vector2)->f64 {
        let ac = *p - self.start_point;
        if self.length <= 0.0 {
            return ac.abs()
        }

        let ab = self.o_v * self.length;
        let r = (ac * ab) / self.length;

        if r <= 0.0 {
            ac.abs()
        } else if r >= self.length {
            (*p - self.end_point()).abs()
        } else {
            ab.det(&ac) / self.length
        }
    }

    fn arc_distance_signed (&self, p: &Vector2, center: Vector2)->f64 {
        let radius = (1.0 / self.curve).abs();
        let to_p = *p - center;
        let dc = to_p.abs();

        let gamma = to_p.phi();
        let alpha = (self.start_point - center).phi();
        let beta = (self.end_point() - center).phi();

        let d1 = (gamma - alpha).radians();
        let d2 = (gamma - beta).radians();
        let sweep = self.swept_angle().abs();

        // the d1/d2 sign test only holds for arcs shorter than a half circle
        let within = if sweep >= PI {
            let offset = if self.curve > 0.0 { wrap_two_pi(d1) } else { wrap_two_pi(-d1) };
            offset <= sweep
        } else if self.curve > 0.0 {
            d1 >= 0.0 && d2 <= 0.0
        } else {
            d1 <= 0.0 && d2 >= 0.0
        };

        if within {
            radius - dc
        } else if d1.abs() < d2.abs() {
            (*p - self.start_point).abs()
        } else {
            // law of cosines against the end bearing
            (dc*dc + radius*radius - 2.0*dc*radius*d2.cos()).max(0.0).sqrt()
        }
    }

    /// arc length coordinate of the closest position to `p`, measured from the segment start.
    /// This is an ordering key along the path, not a distance.
    ///
    /// The arc offset is computed with `atan2(det, dot)` and not with `asin` of the cross product
    /// ratio, so that offsets of more than a quarter turn keep their quadrant
    pub fn length_from_start (&self, p: &Vector2)->f64 {
        match self.center() {
            None => (*p - self.start_point) * self.o_v,
            Some(center) => {
                let a = self.start_point - center;
                let b = *p - center;
                let mut theta = a.det(&b).atan2( a * b);
                if self.curve < 0.0 { theta = -theta }
                wrap_two_pi(theta) / self.curve.abs()
            }
        }
    }

    /// shorten the segment to the new duration `t`, keeping its speed
    pub fn cut (&mut self, t: f64)->Result<()> {
        if !(t > 0.0) || t > self.duration + TIME_TOLERANCE {
            return Err( HelmPathError::TimeOutOfRange { t, begin: 0.0, end: self.duration })
        }
        let t = t.min( self.duration);
        let speed = self.speed();

        self.duration = t;
        self.length = speed * t;
        Ok(())
    }

    /// number of intermediate sample points for a given angle increment (radians). Samples are
    /// strictly inside of the arc, i.e. a sweep that is a multiple of the increment does not
    /// produce a sample at the end point. Straight segments don't have any
    pub fn sample_count (&self, angle_increment: f64)->usize {
        if self.is_straight() || !(angle_increment > 0.0) {
            0
        } else {
            let n = (self.swept_angle().abs() / angle_increment).ceil();
            if n > 1.0 { n as usize - 1 } else { 0 }
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment{{start: {}, angle: {:.1}°, curve: {}, length: {}, duration: {}s}}",
            self.start_point, self.begin_angle.degrees(), self.curve, self.length, self.duration)
    }
}

// radian values computed from finite segment fields are always finite
#[inline]
fn angle_of (rad: f64)->Angle {
    Angle::from_radians(rad).unwrap_or(Angle::ZERO)
}
