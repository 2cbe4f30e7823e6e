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

//! local frame geometries of limitations and their conversion from geodetic geo-types.
//! Geodetic coordinates follow the GeoJSON convention (x = longitude, y = latitude)

use serde::{Serialize,Deserialize};
use geo::{Contains, Intersects, Coord, Line, LineString, Point, Polygon};
use helm_common::{Frame, Vector2};

use crate::errors::Result;

/// a polygon in the local frame. Rings are open, i.e. the last point implicitly connects to the first
#[derive(Debug,Clone,PartialEq,Default,Serialize,Deserialize)]
pub struct LocalPolygon {
    pub exterior: Vec<Vector2>,
    pub interiors: Vec<Vec<Vector2>>,
}

impl LocalPolygon {
    pub fn new (exterior: Vec<Vector2>, interiors: Vec<Vec<Vector2>>)->Self {
        LocalPolygon { exterior, interiors }
    }

    pub fn has_interiors (&self)->bool { !self.interiors.is_empty() }

    /// the closed geo polygon for this local polygon
    pub fn to_polygon (&self)->Polygon<f64> {
        Polygon::new( ring_line_string( &self.exterior), self.interiors.iter().map( |r| ring_line_string(r)).collect())
    }

    /// is `p` inside of the exterior and outside of all interiors. Points on the boundary are not contained
    pub fn contains (&self, p: &Vector2)->bool {
        self.to_polygon().contains( &Point::from( Coord::from(*p)))
    }
}

fn ring_line_string (ring: &[Vector2])->LineString<f64> {
    LineString::new( ring.iter().map( |p| Coord::from(*p)).collect())
}

/// an open polyline in the local frame
#[derive(Debug,Clone,PartialEq,Default,Serialize,Deserialize)]
pub struct LocalLine {
    pub points: Vec<Vector2>,
}

impl LocalLine {
    pub fn new (points: Vec<Vector2>)->Self {
        LocalLine { points }
    }

    #[inline] pub fn len (&self)->usize { self.points.len() }
    #[inline] pub fn is_empty (&self)->bool { self.points.is_empty() }

    pub fn to_line_string (&self)->LineString<f64> {
        ring_line_string( &self.points)
    }

    /// shortest distance between `p` and any part of the line. Empty lines are infinitely far away
    pub fn distance (&self, p: &Vector2)->f64 {
        match self.points.as_slice() {
            [] => f64::INFINITY,
            [a] => a.distance(p),
            pts => pts.windows(2).map( |w| line_distance( p, &w[0], &w[1])).fold( f64::INFINITY, f64::min)
        }
    }

    /// does a straight move from `a` to `b` touch or cross this line
    pub fn crosses (&self, a: &Vector2, b: &Vector2)->bool {
        if self.points.len() < 2 {
            return false
        }
        Line::new( Coord::from(*a), Coord::from(*b)).intersects( &self.to_line_string())
    }
}

fn line_distance (p: &Vector2, a: &Vector2, b: &Vector2)->f64 {
    let ab = *b - *a;
    let len_sq = ab.abs_sq();
    if len_sq == 0.0 {
        return p.distance(a)
    }

    let r = ((*p - *a) * ab / len_sq).clamp( 0.0, 1.0);
    p.distance( &(*a + ab * r))
}

//--- conversion from geodetic coordinates

/// map a (lon,lat) coordinate into the local frame. Fails for invalid coordinates
#[inline]
pub fn geojson_to_local (coord: &Coord<f64>, frame: &Frame)->Result<Vector2> {
    Ok( frame.try_from_wgs( coord.y, coord.x)?)
}

pub fn line_to_local (line: &LineString<f64>, frame: &Frame)->Result<LocalLine> {
    let points = line.coords().map( |c| geojson_to_local( c, frame)).collect::<Result<Vec<Vector2>>>()?;
    Ok( LocalLine::new( points))
}

/// convert a closed ring, dropping its last (closing) point
pub fn ring_to_local (ring: &LineString<f64>, frame: &Frame)->Result<Vec<Vector2>> {
    let n = ring.0.len().saturating_sub(1);
    ring.0[..n].iter().map( |c| geojson_to_local( c, frame)).collect()
}

pub fn polygon_to_local (polygon: &Polygon<f64>, frame: &Frame)->Result<LocalPolygon> {
    Ok( LocalPolygon {
        exterior: ring_to_local( polygon.exterior(), frame)?,
        interiors: polygon.interiors().iter().map( |r| ring_to_local( r, frame)).collect::<Result<Vec<_>>>()?
    })
}
