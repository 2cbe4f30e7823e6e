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

use helm_common::define_serde_struct;

fn default_sample_angle_increment ()->f64 { 5.0 }
fn default_max_route_deviation ()->f64 { 0.5 }
fn default_time_step ()->f64 { 60.0 }

define_serde_struct! {
    /// runtime parameters for path sampling and route validation. Loaded from RON, e.g.
    /// `PathConfig( sample_angle_increment: 2.0, max_route_deviation: 0.25, time_step: 30.0 )`
    pub PathConfig : Debug,Clone,PartialEq =
        /// arc sampling step in degrees
        pub sample_angle_increment: f64 [default="default_sample_angle_increment"],
        /// max allowed distance (nm) of a computed maneuver from the planned route
        pub max_route_deviation: f64 [default="default_max_route_deviation"],
        /// time step (seconds) for position listings
        pub time_step: f64 [default="default_time_step"]
}

impl PathConfig {
    pub fn sample_angle_increment_rad (&self)->f64 {
        self.sample_angle_increment.to_radians()
    }
}

impl Default for PathConfig {
    fn default ()->Self {
        PathConfig {
            sample_angle_increment: default_sample_angle_increment(),
            max_route_deviation: default_max_route_deviation(),
            time_step: default_time_step(),
        }
    }
}
