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

use tracing::{debug,trace};
use helm_common::{Frame, Vector2};

use crate::{Position, Segment};
use crate::curved_path::{CurvedPath, CurvedSegment};
use crate::errors::{HelmPathError, Result, invalid_segment};

/// a segment together with its absolute [begin,end] time keys
#[derive(Debug,Clone)]
struct PathEntry {
    begin: f64,
    end: f64,
    segment: Segment,
}

/// a trajectory given as an ordered sequence of segments. Segments are keyed by their cumulative
/// end time (seconds since the same epoch as `start_time`), keys strictly increase.
///
/// Paths are append-only until they get truncated with [`Path::cut`]. Time queries outside of
/// [start_time, end_time] are out-of-range errors, there is no clamping at the path boundaries.
#[derive(Debug,Clone)]
pub struct Path {
    start_time: f64,
    entries: Vec<PathEntry>,
}

/// result of a nearest segment search
#[derive(Debug,Clone,Copy)]
pub struct ClosestSegment<'a> {
    pub distance: f64,
    pub index: usize,
    pub segment: &'a Segment,
}

impl Path {
    pub fn new (start_time: f64)->Self {
        Path { start_time, entries: Vec::new() }
    }

    pub fn with_capacity (start_time: f64, capacity: usize)->Self {
        Path { start_time, entries: Vec::with_capacity(capacity) }
    }

    /// convert a geodetic input path into the local frame
    pub fn from_curved_path (curved_path: &CurvedPath, frame: &Frame)->Result<Self> {
        let mut path = Path::with_capacity( curved_path.start_time, curved_path.segments.len());

        for cs in &curved_path.segments {
            path.append_segment( cs.to_segment(frame)?)?;
        }
        debug!("created path with {} segments for [{}..{}]", path.len(), path.start_time, path.end_time());

        Ok(path)
    }

    pub fn to_curved_path (&self, frame: &Frame)->CurvedPath {
        CurvedPath {
            start_time: self.start_time,
            segments: self.entries.iter().map( |e| CurvedSegment::from_segment( &e.segment, frame)).collect()
        }
    }

    /// add a segment at the end of the path. Its key is the cumulative end time
    pub fn append_segment (&mut self, segment: Segment)->Result<()> {
        let begin = self.end_time();
        let end = begin + segment.duration();

        // can happen if the duration is below the resolution of large epoch values
        if end <= begin {
            return Err( invalid_segment!("segment duration {} does not advance path end time {}", segment.duration(), begin))
        }

        trace!("append segment [{}..{}]: {}", begin, end, segment);
        self.entries.push( PathEntry { begin, end, segment });
        Ok(())
    }

    //--- accessors

    #[inline] pub fn start_time (&self)->f64 { self.start_time }

    /// end key of the last segment, or start_time if there are no segments yet
    pub fn end_time (&self)->f64 {
        self.entries.last().map( |e| e.end).unwrap_or( self.start_time)
    }

    #[inline] pub fn duration (&self)->f64 { self.end_time() - self.start_time }
    #[inline] pub fn len (&self)->usize { self.entries.len() }
    #[inline] pub fn is_empty (&self)->bool { self.entries.is_empty() }

    pub fn segments (&self)->impl Iterator<Item=&Segment> {
        self.entries.iter().map( |e| &e.segment)
    }

    /// segments with their absolute (begin,end) time keys
    pub fn timed_segments (&self)->impl Iterator<Item=(f64,f64,&Segment)> {
        self.entries.iter().map( |e| (e.begin, e.end, &e.segment))
    }

    pub fn segment_at_index (&self, idx: usize)->Option<&Segment> {
        self.entries.get(idx).map( |e| &e.segment)
    }

    //--- time queries

    /// index of the first segment whose end key is >= t
    pub fn segment_index (&self, t: f64)->Result<usize> {
        if self.entries.is_empty() {
            return Err( HelmPathError::EmptyPath)
        }

        let end = self.end_time();
        if !(t >= self.start_time) || t > end {
            return Err( HelmPathError::TimeOutOfRange { t, begin: self.start_time, end })
        }

        let idx = self.entries.partition_point( |e| e.end < t);
        if idx < self.entries.len() {
            Ok(idx)
        } else {
            Err( HelmPathError::TimeOutOfRange { t, begin: self.start_time, end })
        }
    }

    /// the segment covering absolute time `t`
    pub fn segment (&self, t: f64)->Result<&Segment> {
        let idx = self.segment_index(t)?;
        Ok( &self.entries[idx].segment)
    }

    /// position at absolute time `t`
    pub fn position (&self, t: f64)->Result<Position> {
        let e = &self.entries[ self.segment_index(t)?];
        e.segment.position( t - e.begin)
    }

    /// position at absolute time `t`, or None if the path does not cover `t` (e.g. the vessel
    /// has not started yet or already arrived)
    pub fn position_at (&self, t: f64)->Option<Position> {
        self.position(t).ok()
    }

    pub fn start_position (&self)->Result<Position> {
        self.entries.first().map( |e| e.segment.start_position()).ok_or( HelmPathError::EmptyPath)
    }

    /// terminal position of the path
    pub fn end_position (&self)->Result<Position> {
        let e = self.entries.last().ok_or( HelmPathError::EmptyPath)?;
        e.segment.position( e.segment.duration())
    }

    /// truncate the path at absolute time `t`. Segments after `t` are dropped and the covering
    /// segment is shortened so that the new end time is `t`
    pub fn cut (&mut self, t: f64)->Result<()> {
        let idx = self.segment_index(t)?;
        let local = t - self.entries[idx].begin;

        let mut segment = self.entries[idx].segment.clone();
        segment.cut( local)?;

        let n_dropped = self.entries.len() - idx - 1;
        self.entries.truncate(idx);
        self.append_segment( segment)?;

        debug!("cut path at {}, dropped {} segments", t, n_dropped);
        Ok(())
    }

    //--- spatial queries

    /// linear scan for the segment closest to `p`. This is O(n) per query, which is fine for
    /// the segment counts of planned routes
    pub fn closest_segment (&self, p: &Vector2)->Result<ClosestSegment<'_>> {
        let mut closest: Option<ClosestSegment> = None;

        for (index, e) in self.entries.iter().enumerate() {
            let distance = e.segment.distance(p);
            if closest.map_or( true, |c| distance < c.distance) {
                closest = Some( ClosestSegment { distance, index, segment: &e.segment })
            }
        }

        closest.ok_or( HelmPathError::EmptyPath)
    }

    /// sampled outline of the path for rendering. `angle_increment` (radians) is the sampling
    /// step along arcs, straight segments only contribute their start point. The terminal point
    /// of the path comes last
    pub fn points_path (&self, angle_increment: f64)->PointsPath<'_> {
        PointsPath { path: self, angle_increment, seg_idx: 0, step: 0, steps: 0, done: self.entries.is_empty() }
    }

    /// max distance of the sampled points of `other` to this path
    pub fn max_distance (&self, other: &Path, angle_increment: f64)->Result<f64> {
        if other.is_empty() {
            return Err( HelmPathError::EmptyPath)
        }

        let mut max = 0.0f64;
        for p in other.points_path( angle_increment) {
            max = max.max( self.closest_segment(&p)?.distance);
        }
        Ok(max)
    }

    /// check if all sampled points of `other` are within `max_distance` of this path. This is
    /// what we use to validate that a computed maneuver stays close to a planned route
    pub fn check_max_distance (&self, other: &Path, max_distance: f64, angle_increment: f64)->Result<bool> {
        if other.is_empty() {
            return Err( HelmPathError::EmptyPath)
        }

        for p in other.points_path( angle_increment) {
            let c = self.closest_segment(&p)?;
            if c.distance > max_distance {
                debug!("point {} exceeds max distance {} to segment {}: {}", p, max_distance, c.index, c.distance);
                return Ok(false)
            }
        }
        Ok(true)
    }
}

/// iterator over the sampled points of a path. This is a pure function of the path, i.e. a new
/// (or cloned) iterator restarts the sampling
#[derive(Debug,Clone)]
pub struct PointsPath<'a> {
    path: &'a Path,
    angle_increment: f64,
    seg_idx: usize,
    step: usize,
    steps: usize,
    done: bool,
}

impl<'a> Iterator for PointsPath<'a> {
    type Item = Vector2;

    fn next (&mut self)->Option<Vector2> {
        while let Some(e) = self.path.entries.get( self.seg_idx) {
            let segment = &e.segment;

            if self.step == 0 {
                self.steps = segment.sample_count( self.angle_increment);
                self.step = 1;
                return Some( segment.start_point())
            }

            if self.step <= self.steps {
                let p = segment.point_at_turn( self.step as f64 * self.angle_increment);
                self.step += 1;
                return Some(p)
            }

            self.seg_idx += 1;
            self.step = 0;
        }

        if !self.done {
            self.done = true;
            self.path.entries.last().map( |e| e.segment.end_point())
        } else {
            None
        }
    }
}
