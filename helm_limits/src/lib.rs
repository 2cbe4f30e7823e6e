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

//! navigational restrictions of a scenario. Geographic limitation features (usually from a GeoJSON
//! FeatureCollection) are converted into the local frame and sorted into hard and soft
//! [`Limitations`] with five categories each.

pub mod errors;
pub mod feature;
pub mod geometry;
pub mod restrictions;

pub use errors::{HelmLimitsError, Result};
pub use feature::{FeatureProperties, GeoFeature, Hardness, LimitationType};
pub use geometry::{LocalLine, LocalPolygon, geojson_to_local, line_to_local, polygon_to_local};
pub use restrictions::{Limitation, Limitations, PropertiesHandle, Restrictions};
