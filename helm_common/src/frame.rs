/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
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

/// conversion between geodetic WGS84 coordinates and a local planar frame centered at a
/// reference point. The local frame is an azimuthal projection: a point is placed at its geodesic
/// distance (in nautical miles) from the reference along its initial azimuth, with +x pointing
/// north and +y east. We use the ellipsoidal geodesic solutions of
/// [geographiclib](https://docs.rs/geographiclib-rs/latest/geographiclib_rs/) (which also backs
/// the `geo` crate's `Geodesic` metric space) so that longer ranges stay accurate.

use std::fmt;
use serde::{Serialize,Deserialize};
use lazy_static::lazy_static;
use geographiclib_rs::{Geodesic, DirectGeodesic, InverseGeodesic};
use uom::si::f64::Length;
use uom::si::length::{meter, nautical_mile};

use crate::vector2::Vector2;
use crate::invalid_coordinate;
use crate::errors::Result;

lazy_static! {
    static ref WGS84: Geodesic = Geodesic::wgs84();
}

/// geodetic position in degrees
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeoPos {
    pub lat: f64,
    pub lon: f64
}

impl GeoPos {
    pub fn new (lat: f64, lon: f64)->Self { GeoPos { lat, lon } }

    /// GeoJSON and `geo` store positions in (lon,lat) order
    pub fn from_lon_lat (lon: f64, lat: f64)->Self { GeoPos { lat, lon } }

    pub fn is_valid (&self)->bool {
        self.lat.is_finite() && self.lon.is_finite() && self.lat.abs() <= 90.0 && self.lon.abs() <= 180.0
    }
}

impl fmt::Display for GeoPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.lat, self.lon)
    }
}

/// the local reference frame. Immutable once created, so it can be shared by reference between
/// all paths and restrictions of a case
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Frame {
    reference: GeoPos
}

impl Frame {
    pub fn new (lat: f64, lon: f64)->Result<Self> {
        Frame::from_geo_pos( GeoPos::new( lat, lon))
    }

    pub fn from_geo_pos (reference: GeoPos)->Result<Self> {
        if reference.is_valid() {
            Ok( Frame { reference })
        } else {
            Err( invalid_coordinate!("frame reference {}", reference))
        }
    }

    pub fn reference (&self)->GeoPos { self.reference }

    /// map geodetic degrees into the local frame (nautical miles). Coordinates have to be valid,
    /// use [`Frame::try_from_wgs`] for unchecked input
    pub fn from_wgs (&self, lat: f64, lon: f64)->Vector2 {
        let (s12, azi1, _azi2, _a12): (f64, f64, f64, f64) = WGS84.inverse( self.reference.lat, self.reference.lon, lat, lon);
        let dist = Length::new::<meter>(s12).get::<nautical_mile>();
        let azi = azi1.to_radians();

        Vector2::new( dist * azi.cos(), dist * azi.sin())
    }

    /// like [`Frame::from_wgs`] but rejecting out of range or non-finite coordinates
    pub fn try_from_wgs (&self, lat: f64, lon: f64)->Result<Vector2> {
        self.local_of( &GeoPos::new( lat, lon))
    }

    pub fn local_of (&self, pos: &GeoPos)->Result<Vector2> {
        if pos.is_valid() {
            Ok( self.from_wgs( pos.lat, pos.lon))
        } else {
            Err( invalid_coordinate!("{}", pos))
        }
    }

    /// map a local frame vector (nautical miles) back into geodetic degrees
    pub fn to_wgs (&self, v: &Vector2)->GeoPos {
        let azi1 = v.y.atan2(v.x).to_degrees();
        let s12 = Length::new::<nautical_mile>(v.abs()).get::<meter>();
        let (lat, lon): (f64, f64) = WGS84.direct( self.reference.lat, self.reference.lon, azi1, s12);

        GeoPos { lat, lon }
    }
}
