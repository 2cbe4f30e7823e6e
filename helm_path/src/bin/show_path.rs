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

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use helm_common::{define_cli, Frame, config::load_config_or_default};
use helm_path::{CurvedPath, Path, PathConfig};

define_cli! { ARGS [about="show positions and sampled outline of a curved path"] =
    config: Option<String> [long, help="optional RON PathConfig file"],
    outline: bool [short, long, help="also print the sampled path outline"],
    lat: f64 [long, allow_negative_numbers=true, help="reference latitude of the local frame (degrees)"],
    lon: f64 [long, allow_negative_numbers=true, help="reference longitude of the local frame (degrees)"],
    path: String [help="path to curved path JSON file"]
}

fn main ()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())
        .init();

    let config: PathConfig = load_config_or_default( ARGS.config.as_deref().map( std::path::Path::new))?;
    let frame = Frame::new( ARGS.lat, ARGS.lon)?;
    let curved_path = CurvedPath::from_json_file( &ARGS.path)?;
    let path = Path::from_curved_path( &curved_path, &frame)?;

    println!("path with {} segments, [{} .. {}] ({:.0}s)", path.len(), path.start_time(), path.end_time(), path.duration());

    let time_step = if config.time_step > 0.0 { config.time_step } else { 60.0 };
    let mut t = path.start_time();
    while t <= path.end_time() {
        if let Some(pos) = path.position_at(t) {
            let geo = frame.to_wgs( &pos.point);
            println!("{:12.1}: {:10.5}°,{:11.5}° {}", t, geo.lat, geo.lon, pos);
        }
        t += time_step;
    }

    let end = path.end_position()?;
    println!("end: {}", end);

    if ARGS.outline {
        println!("outline:");
        for (i,p) in path.points_path( config.sample_angle_increment_rad()).enumerate() {
            let geo = frame.to_wgs( &p);
            println!("[{:4}]: {:10.4},{:10.4} = {}", i, p.x, p.y, geo);
        }
    }

    Ok(())
}
