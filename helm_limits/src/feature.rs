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

use std::str::FromStr;
use serde::{Serialize,Deserialize};
use serde_json::Value as JsonValue;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use geojson::{Feature, JsonObject, feature::Id};
use geo_types::Geometry;

use crate::errors::{HelmLimitsError, Result, missing_property};

/// the five kinds of navigational limitations we classify features into
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize,Display,EnumString,EnumIter,IntoStaticStr)]
#[serde(rename_all="snake_case")]
#[strum(serialize_all="snake_case")]
pub enum LimitationType {
    PointApproachProhibition,
    LineCrossingProhibition,
    ZoneEnteringProhibition,
    ZoneLeavingProhibition,
    MovementParametersLimitation,
}

impl LimitationType {
    pub fn parse (s: &str)->Result<Self> {
        LimitationType::from_str(s).map_err( |_| HelmLimitsError::UnknownLimitationType( s.to_string()))
    }
}

/// hard limitations must not be violated, soft ones are advisory
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize,Display,EnumString,EnumIter,IntoStaticStr)]
#[serde(rename_all="lowercase")]
#[strum(serialize_all="lowercase")]
pub enum Hardness {
    Hard,
    Soft,
}

impl Hardness {
    pub fn parse (s: &str)->Result<Self> {
        Hardness::from_str(s).map_err( |_| HelmLimitsError::UnknownHardness( s.to_string()))
    }
}

/// the descriptive part of a limitation feature. Thresholds are only set for the limitation types
/// that use them (e.g. `max_speed` for movement parameter limitations, `distance` for point
/// approach prohibitions)
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct FeatureProperties {
    pub id: String,
    pub source_id: Option<String>,
    pub source_object_code: Option<String>,
    pub limitation_type: LimitationType,
    pub hardness: Hardness,
    pub max_course: Option<f64>,
    pub min_course: Option<f64>,
    pub max_speed: Option<f64>,
    pub distance: Option<f64>,
}

// what we accept in GeoJSON property objects. Ids are often numeric
#[derive(Debug,Deserialize)]
struct RawProperties {
    #[serde(default)] id: Option<JsonValue>,
    #[serde(default)] source_id: Option<JsonValue>,
    #[serde(default)] source_object_code: Option<JsonValue>,
    #[serde(default)] limitation_type: Option<String>,
    #[serde(default)] hardness: Option<String>,
    #[serde(default)] max_course: Option<f64>,
    #[serde(default)] min_course: Option<f64>,
    #[serde(default)] max_speed: Option<f64>,
    #[serde(default)] distance: Option<f64>,
}

fn json_string (v: JsonValue)->Option<String> {
    match v {
        JsonValue::String(s) => Some(s),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None
    }
}

impl FeatureProperties {
    /// parse a GeoJSON property object. If it has no "id" we fall back to the feature id
    pub fn from_json_object (props: &JsonObject, feature_id: Option<&Id>)->Result<Self> {
        let raw: RawProperties = serde_json::from_value( JsonValue::Object( props.clone()))?;

        let limitation_type = LimitationType::parse( &raw.limitation_type.ok_or_else( || missing_property("limitation_type"))?)?;
        let hardness = Hardness::parse( &raw.hardness.ok_or_else( || missing_property("hardness"))?)?;

        let id = raw.id.and_then( json_string)
            .or_else( || feature_id.map( |id| match id {
                Id::String(s) => s.clone(),
                Id::Number(n) => n.to_string()
            }))
            .ok_or_else( || missing_property("id"))?;

        Ok( FeatureProperties {
            id,
            source_id: raw.source_id.and_then( json_string),
            source_object_code: raw.source_object_code.and_then( json_string),
            limitation_type,
            hardness,
            max_course: raw.max_course,
            min_course: raw.min_course,
            max_speed: raw.max_speed,
            distance: raw.distance,
        })
    }
}

/// a limitation feature with typed properties and geodetic geometry (x = longitude, y = latitude)
#[derive(Debug,Clone,PartialEq)]
pub struct GeoFeature {
    pub properties: FeatureProperties,
    pub geometry: Geometry<f64>,
}

impl GeoFeature {
    pub fn new (properties: FeatureProperties, geometry: Geometry<f64>)->Self {
        GeoFeature { properties, geometry }
    }

    pub fn from_feature (feature: &Feature)->Result<Self> {
        let props = feature.properties.as_ref().ok_or_else( || missing_property("properties"))?;
        let properties = FeatureProperties::from_json_object( props, feature.id.as_ref())?;

        let geometry = feature.geometry.clone().ok_or_else( || missing_property("geometry"))?;
        let geometry = Geometry::<f64>::try_from( geometry)?;

        Ok( GeoFeature { properties, geometry })
    }
}

pub fn geometry_name (geometry: &Geometry<f64>)->&'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
