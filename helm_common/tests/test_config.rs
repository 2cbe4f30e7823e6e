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

use serde::Deserialize;
use helm_common::config::{config_from_str, load_config, load_config_or_default};

#[derive(Debug,Deserialize,Default,PartialEq)]
struct TestConfig {
    name: String,
    #[serde(default)]
    tolerance: f64,
}

#[test]
fn test_config_from_str() {
    let cfg: TestConfig = config_from_str( r#"TestConfig( name: "route-check", tolerance: 0.25 )"#).unwrap();
    println!("config: {cfg:?}");
    assert_eq!( cfg.name, "route-check");
    assert_eq!( cfg.tolerance, 0.25);

    let cfg: TestConfig = config_from_str( r#"( name: "defaults" )"#).unwrap();
    assert_eq!( cfg.tolerance, 0.0);

    assert!( config_from_str::<TestConfig>( "( tolerance: 1.0 )").is_err());
}

#[test]
fn test_load_config() {
    assert!( load_config::<TestConfig>( "does/not/exist.ron").is_err());

    let cfg: TestConfig = load_config_or_default( None).unwrap();
    assert_eq!( cfg, TestConfig::default());
}
