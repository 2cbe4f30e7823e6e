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

use helm_common::{Angle, Vector2, HALF_PI, PI};
use helm_path::{HelmPathError, Path, Position, Segment};

// run with "cargo test -p helm_path --test test_path -- --nocapture"

fn assert_near (a: f64, b: f64) {
    assert!( (a - b).abs() < 1e-9, "{a} != {b}");
}

fn assert_near_v (a: Vector2, b: Vector2) {
    assert!( a.distance(&b) < 1e-9, "{a} != {b}");
}

fn knots (v: f64)->f64 { v / 3600.0 }

const T0: f64 = 1000.0;

/// 1nm north, quarter turn to starboard with radius 1nm, 2nm east - all at 10kn
fn test_path ()->Path {
    let start = Position::new( Vector2::ZERO, Angle::ZERO, knots(10.0));
    let s0 = Segment::from_duration( &start, 0.0, 360.0).unwrap();
    let s1 = Segment::from_turn( &s0.end_position(), 1.0, Angle::from_degrees(90.0).unwrap()).unwrap();
    let s2 = Segment::from_duration( &s1.end_position(), 0.0, 720.0).unwrap();

    let mut path = Path::new( T0);
    path.append_segment(s0).unwrap();
    path.append_segment(s1).unwrap();
    path.append_segment(s2).unwrap();
    path
}

#[test]
fn test_keys() {
    let path = test_path();
    let t1 = T0 + 360.0;
    let t2 = t1 + HALF_PI / knots(10.0);
    let t3 = t2 + 720.0;

    assert_eq!( path.len(), 3);
    assert_near( path.start_time(), T0);
    assert_near( path.end_time(), t3);
    assert_near( path.duration(), t3 - T0);

    let keys: Vec<(f64,f64)> = path.timed_segments().map( |(b,e,_)| (b,e)).collect();
    println!("segment keys: {keys:?}");
    assert!( keys.windows(2).all( |w| w[0].1 < w[1].1 && w[0].1 == w[1].0));

    assert_eq!( path.segment_index( T0).unwrap(), 0);
    assert_eq!( path.segment_index( t1).unwrap(), 0);
    assert_eq!( path.segment_index( t1 + 0.001).unwrap(), 1);
    assert_eq!( path.segment_index( t3).unwrap(), 2);
    assert!( path.segment( t3 + 0.001).unwrap_err().is_out_of_range());
    assert!( path.segment( T0 - 0.001).unwrap_err().is_out_of_range());
}

#[test]
fn test_position() {
    let path = test_path();
    let t1 = T0 + 360.0;
    let t2 = path.timed_segments().nth(1).unwrap().1;

    let pos = path.position( T0 + 180.0).unwrap();
    println!("position at T0+180: {pos}");
    assert_near_v( pos.point, Vector2::new( 0.5, 0.0));

    // continuity at segment boundaries
    for (i,t) in [t1, t2].into_iter().enumerate() {
        let p = path.position(t).unwrap();
        let prev_end = path.segment_at_index(i).unwrap().end_point();
        let next_start = path.segment_at_index(i+1).unwrap().start_point();
        assert_near_v( p.point, prev_end);
        assert_near_v( p.point, next_start);
    }

    let pos = path.position( t2).unwrap();
    assert_near_v( pos.point, Vector2::new( 2.0, 1.0));
    assert_near( pos.course.radians(), HALF_PI);

    let end = path.end_position().unwrap();
    println!("end position: {end}");
    assert_near_v( end.point, Vector2::new( 2.0, 3.0));
    assert_near( end.speed_per_hour(), 10.0);
    assert_near_v( end.velocity(), Vector2::new( 0.0, knots(10.0)));

    let start = path.start_position().unwrap();
    assert_near_v( start.point, Vector2::ZERO);

    assert!( path.position( path.end_time() + 1.0).unwrap_err().is_out_of_range());
    assert!( path.position_at( T0 - 1.0).is_none());
    assert!( path.position_at( T0).is_some());
}

#[test]
fn test_empty_path() {
    let path = Path::new( T0);

    assert!( path.is_empty());
    assert_near( path.end_time(), T0);
    assert!( matches!( path.closest_segment( &Vector2::ZERO), Err(HelmPathError::EmptyPath)));
    assert!( matches!( path.end_position(), Err(HelmPathError::EmptyPath)));
    assert!( matches!( path.position(T0), Err(HelmPathError::EmptyPath)));
    assert_eq!( path.points_path(0.1).count(), 0);
}

#[test]
fn test_cut() {
    let original = test_path();
    let mut path = original.clone();
    let t = T0 + 500.0;

    path.cut(t).unwrap();
    println!("cut path: {} segments, end time {}", path.len(), path.end_time());

    assert_eq!( path.len(), 2);
    assert_near( path.end_time(), t);

    for dt in [0.5, 10.0, 200.0, 499.0] {
        let p0 = original.position( t - dt).unwrap();
        let p1 = path.position( t - dt).unwrap();
        assert_near_v( p0.point, p1.point);
        assert_near( p0.course.radians(), p1.course.radians());
    }

    assert_near_v( path.end_position().unwrap().point, original.position(t).unwrap().point);
    assert!( path.position( t + 1.0).is_err());

    // cutting at the very start would leave an empty segment
    let mut path = original.clone();
    assert!( path.cut(T0).is_err());
    assert!( path.cut( original.end_time() + 1.0).is_err());
}

#[test]
fn test_closest_segment() {
    let path = test_path();

    let c = path.closest_segment( &Vector2::new( 1.5, -1.0)).unwrap();
    assert_eq!( c.index, 1);
    assert_near( c.distance, 4.25f64.sqrt() - 1.0);

    let c = path.closest_segment( &Vector2::new( 2.5, 2.0)).unwrap();
    assert_eq!( c.index, 2);
    assert_near( c.distance, 0.5);

    let c = path.closest_segment( &Vector2::new( -3.0, 0.0)).unwrap();
    assert_eq!( c.index, 0);
    assert_near( c.distance, 3.0);
}

#[test]
fn test_closest_segment_scaling() {
    // closest segment is a linear scan - check it for varying path lengths
    for n in [1usize, 10, 100, 1000] {
        let mut path = Path::new( 0.0);
        let mut pos = Position::new( Vector2::ZERO, Angle::ZERO, knots(6.0));
        for _ in 0..n {
            let s = Segment::from_duration( &pos, 0.0, 600.0).unwrap();
            pos = s.end_position();
            path.append_segment(s).unwrap();
        }

        let c = path.closest_segment( &Vector2::new( n as f64 - 0.5, 1.0)).unwrap();
        assert_eq!( c.index, n-1);
        assert_near( c.distance, 1.0);
    }
}

#[test]
fn test_points_path() {
    let path = test_path();
    let pts: Vec<Vector2> = path.points_path( 0.3).collect();
    for p in &pts { println!("  {p}") }

    // 1 + (1 + ceil(π/2 / 0.3) - 1) + 1 + terminal point
    assert_eq!( pts.len(), 9);
    assert_near_v( pts[0], Vector2::ZERO);
    assert_near_v( pts[1], Vector2::new( 1.0, 0.0));
    assert_near_v( pts[2], Vector2::new( 1.0 + 0.3f64.sin(), 1.0 - 0.3f64.cos()));
    assert_near_v( pts[7], Vector2::new( 2.0, 1.0));
    assert_near_v( pts[8], Vector2::new( 2.0, 3.0));

    // all arc samples are on the turning circle
    for p in &pts[2..7] {
        assert_near( p.distance( &Vector2::new( 1.0, 1.0)), 1.0);
    }

    // restartable
    let again: Vec<Vector2> = path.points_path( 0.3).collect();
    assert_eq!( pts, again);
}

#[test]
fn test_points_path_exact_increment() {
    // π/8 divides the quarter turn exactly, the last arc sample would be the arc end point
    let start = Position::new( Vector2::ZERO, Angle::ZERO, knots(10.0));
    let s0 = Segment::from_duration( &start, 0.0, 360.0).unwrap();
    let s1 = Segment::new( s0.end_point(), Angle::ZERO, 1.0, HALF_PI, 600.0, 0.0, 0.0).unwrap();
    let s2 = Segment::from_duration( &s1.end_position(), 0.0, 720.0).unwrap();

    let mut path = Path::new( T0);
    for s in [s0, s1, s2] { path.append_segment(s).unwrap() }

    let pts: Vec<Vector2> = path.points_path( PI / 8.0).collect();
    for p in &pts { println!("  {p}") }

    // 1 + (1 + 3) + 1 + terminal point
    assert_eq!( pts.len(), 7);
    assert_near_v( pts[4], Vector2::new( 1.0 + (3.0 * PI / 8.0).sin(), 1.0 - (3.0 * PI / 8.0).cos()));
    assert_near_v( pts[5], Vector2::new( 2.0, 1.0));

    for w in pts.windows(2) {
        assert!( w[0].distance( &w[1]) > 1e-6, "duplicate point {}", w[1]);
    }
}

#[test]
fn test_max_distance() {
    let path = test_path();
    let inc = 5.0f64.to_radians();

    assert!( path.max_distance( &path, inc).unwrap() < 1e-9);

    let start = Position::new( Vector2::new( 0.0, 0.3), Angle::ZERO, knots(10.0));
    let mut other = Path::new( T0);
    other.append_segment( Segment::from_duration( &start, 0.0, 360.0).unwrap()).unwrap();

    let d = path.max_distance( &other, inc).unwrap();
    println!("max distance: {d}");
    assert_near( d, 0.3);

    assert!( path.check_max_distance( &other, 0.5, inc).unwrap());
    assert!( !path.check_max_distance( &other, 0.2, inc).unwrap());
    assert!( path.max_distance( &Path::new(T0), inc).is_err());
}

#[test]
fn test_append_order() {
    let start = Position::new( Vector2::ZERO, Angle::ZERO, knots(10.0));
    let mut path = Path::new( 1.7e9);

    // a duration below the resolution of the epoch key does not advance the path
    let tiny = Segment::new( Vector2::ZERO, Angle::ZERO, 0.0, 0.0, 1e-9, 0.0, 0.0).unwrap();
    assert!( path.append_segment( tiny).is_err());

    path.append_segment( Segment::from_duration( &start, 0.0, 60.0).unwrap()).unwrap();
    assert_near( path.end_time(), 1.7e9 + 60.0);
}
