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

/// module with utility functions to load RON configuration files.
/// Configs are plain serde structs, which means missing files are errors but missing fields can
/// be handled by the config type itself (`#[serde(default)]`)

use std::{fs, path::Path};
use serde::de::DeserializeOwned;
use crate::errors::Result;

pub fn config_from_str<T> (s: &str)->Result<T> where T: DeserializeOwned {
    Ok( ron::from_str(s)?)
}

pub fn load_config<T> (path: impl AsRef<Path>)->Result<T> where T: DeserializeOwned {
    let input = fs::read_to_string( path.as_ref())?;
    config_from_str( &input)
}

/// load config from an optional path, falling back to the `Default` of the config type
pub fn load_config_or_default<T> (path: Option<&Path>)->Result<T> where T: DeserializeOwned + Default {
    match path {
        Some(path) => load_config( path),
        None => Ok( T::default())
    }
}
