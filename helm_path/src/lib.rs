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

//! piecewise vessel trajectories in the local frame. A [`Path`] is a time keyed sequence of
//! straight or constant curvature [`Segment`]s that can be queried for positions at a given
//! simulation time and for distances to arbitrary points or other paths.
//!
//! All queries are pure functions over already constructed paths, i.e. paths can be shared
//! between reader threads once they are built.

use std::fmt;
use serde::{Serialize,Deserialize};
use helm_common::{Angle, Vector2};

pub mod errors;
pub mod config;
pub mod segment;
pub mod path;
pub mod curved_path;

pub use errors::{HelmPathError, Result};
pub use segment::Segment;
pub use path::{Path, PointsPath, ClosestSegment};
pub use curved_path::{CurvedPath, CurvedSegment};
pub use config::PathConfig;

/// max |curvature| that is still treated as a straight segment
pub const STRAIGHT_CURVE_EPSILON: f64 = 1e-7;

/// how far (in seconds) a segment time query can overshoot the segment duration. Such values are
/// clamped to the duration
pub const TIME_TOLERANCE: f64 = 0.01;

/// kinematic state at a given time: where we are, where we are heading and how fast
/// we are moving (local distance units per second)
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Position {
    pub point: Vector2,
    pub course: Angle,
    pub speed: f64
}

impl Position {
    pub fn new (point: Vector2, course: Angle, speed: f64)->Self {
        Position { point, course, speed }
    }

    /// speed in local distance units per hour (knots for nautical mile frames)
    pub fn speed_per_hour (&self)->f64 { self.speed * 3600.0 }

    pub fn velocity (&self)->Vector2 {
        Vector2::polar( self.speed, self.course)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{point: {}, course: {:.1}°, speed: {:.2}/h}}", self.point, self.course.degrees(), self.speed_per_hour())
    }
}
