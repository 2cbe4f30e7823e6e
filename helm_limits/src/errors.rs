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

use thiserror::Error;
use helm_common::errors::HelmCommonError;

pub type Result<T> = std::result::Result<T, HelmLimitsError>;

#[derive(Error,Debug)]
pub enum HelmLimitsError {
    #[error("unknown limitation type {0}")]
    UnknownLimitationType(String),

    #[error("unknown hardness {0}")]
    UnknownHardness(String),

    #[error("geometry {geometry} not supported for {limitation}")]
    UnsupportedGeometry { limitation: String, geometry: String },

    #[error("missing feature property {0}")]
    MissingProperty(String),

    #[error("common error {0}")]
    Common( #[from] HelmCommonError),

    #[error("GeoJSON error {0}")]
    GeoJsonError( #[from] geojson::Error),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),
}

pub fn missing_property (name: impl ToString)->HelmLimitsError {
    HelmLimitsError::MissingProperty( name.to_string())
}
