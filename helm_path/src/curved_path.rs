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

/// the geodetic input format of paths as it is produced by route planners and solvers

use std::path::Path as FilePath;
use serde::{Serialize,Deserialize};
use helm_common::{Angle, Frame};

use crate::Segment;
use crate::errors::Result;

/// one raw path element. Lengths and deviations are in nautical miles, curvature in 1/nm,
/// `begin_angle` in degrees and `duration` in seconds
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct CurvedSegment {
    pub lat: f64,
    pub lon: f64,
    pub begin_angle: f64,
    pub curve: f64,
    pub length: f64,
    pub duration: f64,
    #[serde(default)]
    pub port_dev: f64,
    #[serde(default)]
    pub starboard_dev: f64,
}

impl CurvedSegment {
    pub fn to_segment (&self, frame: &Frame)->Result<Segment> {
        let start = frame.try_from_wgs( self.lat, self.lon)?;
        let begin_angle = Angle::from_degrees( self.begin_angle)?;

        Segment::new( start, begin_angle, self.curve, self.length, self.duration, self.port_dev, self.starboard_dev)
    }

    pub fn from_segment (segment: &Segment, frame: &Frame)->Self {
        let pos = frame.to_wgs( &segment.start_point());

        CurvedSegment {
            lat: pos.lat,
            lon: pos.lon,
            begin_angle: segment.begin_angle().degrees(),
            curve: segment.curve(),
            length: segment.length(),
            duration: segment.duration(),
            port_dev: segment.port_deviation(),
            starboard_dev: segment.starboard_deviation(),
        }
    }
}

impl Segment {
    pub fn to_curved_segment (&self, frame: &Frame)->CurvedSegment {
        CurvedSegment::from_segment( self, frame)
    }
}

/// a raw path: start time (epoch seconds) plus ordered segments
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct CurvedPath {
    pub start_time: f64,
    pub segments: Vec<CurvedSegment>,
}

impl CurvedPath {
    pub fn from_json_str (s: &str)->Result<Self> {
        Ok( serde_json::from_str(s)?)
    }

    pub fn from_json_file (path: impl AsRef<FilePath>)->Result<Self> {
        let input = std::fs::read_to_string( path.as_ref()).map_err( helm_common::errors::HelmCommonError::from)?;
        CurvedPath::from_json_str( &input)
    }
}
