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

use geo_types::Geometry;
use geojson::{FeatureCollection, GeoJson};
use tracing::{debug,warn};
use helm_common::{Frame, Vector2};

use crate::errors::{HelmLimitsError, Result, missing_property};
use crate::feature::{FeatureProperties, GeoFeature, Hardness, LimitationType, geometry_name};
use crate::geometry::{LocalLine, LocalPolygon, geojson_to_local, line_to_local, polygon_to_local};

/// index of a [`FeatureProperties`] entry in the properties arena of a [`Restrictions`] object.
/// Handles stay valid for the lifetime of their Restrictions
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord)]
pub struct PropertiesHandle(usize);

impl PropertiesHandle {
    #[inline] pub fn index (&self)->usize { self.0 }
}

/// a local frame geometry together with the handle of its originating feature properties
#[derive(Debug,Clone,PartialEq)]
pub struct Limitation<G> {
    pub geometry: G,
    pub properties: PropertiesHandle,
}

/// the limitations of one hardness tier, sorted into categories
#[derive(Debug,Clone,Default)]
pub struct Limitations {
    point_approach: Vec<Limitation<Vector2>>,
    line_crossing: Vec<Limitation<LocalLine>>,
    zone_entering: Vec<Limitation<LocalPolygon>>,
    zone_leaving: Vec<Limitation<LocalPolygon>>,
    movement_parameters: Vec<Limitation<LocalPolygon>>,
}

impl Limitations {
    pub fn point_approach_prohibitions (&self)->&[Limitation<Vector2>] { &self.point_approach }
    pub fn line_crossing_prohibitions (&self)->&[Limitation<LocalLine>] { &self.line_crossing }
    pub fn zone_entering_prohibitions (&self)->&[Limitation<LocalPolygon>] { &self.zone_entering }
    pub fn zone_leaving_prohibitions (&self)->&[Limitation<LocalPolygon>] { &self.zone_leaving }
    pub fn movement_parameters_limitations (&self)->&[Limitation<LocalPolygon>] { &self.movement_parameters }

    /// number of limitations across all categories
    pub fn len (&self)->usize {
        self.point_approach.len() + self.line_crossing.len() + self.zone_entering.len()
            + self.zone_leaving.len() + self.movement_parameters.len()
    }

    pub fn is_empty (&self)->bool { self.len() == 0 }

    /// number of limitations of the given type
    pub fn count (&self, limitation_type: LimitationType)->usize {
        match limitation_type {
            LimitationType::PointApproachProhibition => self.point_approach.len(),
            LimitationType::LineCrossingProhibition => self.line_crossing.len(),
            LimitationType::ZoneEnteringProhibition => self.zone_entering.len(),
            LimitationType::ZoneLeavingProhibition => self.zone_leaving.len(),
            LimitationType::MovementParametersLimitation => self.movement_parameters.len(),
        }
    }

    fn add (&mut self, limitation_type: LimitationType, geometry: &Geometry<f64>, properties: PropertiesHandle, frame: &Frame)->Result<usize> {
        let unsupported = || HelmLimitsError::UnsupportedGeometry {
            limitation: limitation_type.to_string(),
            geometry: geometry_name(geometry).to_string()
        };

        let n = match limitation_type {
            LimitationType::PointApproachProhibition => {
                let points: Vec<Vector2> = match geometry {
                    Geometry::Point(p) => vec![ geojson_to_local( &p.0, frame)? ],
                    Geometry::MultiPoint(mp) => mp.iter().map( |p| geojson_to_local( &p.0, frame)).collect::<Result<_>>()?,
                    _ => return Err( unsupported())
                };
                push_all( &mut self.point_approach, points, properties)
            }
            LimitationType::LineCrossingProhibition => {
                let lines: Vec<LocalLine> = match geometry {
                    Geometry::LineString(ls) => vec![ line_to_local( ls, frame)? ],
                    Geometry::MultiLineString(mls) => mls.iter().map( |ls| line_to_local( ls, frame)).collect::<Result<_>>()?,
                    _ => return Err( unsupported())
                };
                push_all( &mut self.line_crossing, lines, properties)
            }
            zone_type => {
                let polygons: Vec<LocalPolygon> = match geometry {
                    Geometry::Polygon(poly) => vec![ polygon_to_local( poly, frame)? ],
                    Geometry::MultiPolygon(mp) => mp.iter().map( |poly| polygon_to_local( poly, frame)).collect::<Result<_>>()?,
                    _ => return Err( unsupported())
                };
                let list = match zone_type {
                    LimitationType::ZoneEnteringProhibition => &mut self.zone_entering,
                    LimitationType::ZoneLeavingProhibition => &mut self.zone_leaving,
                    _ => &mut self.movement_parameters,
                };
                push_all( list, polygons, properties)
            }
        };

        Ok(n)
    }
}

fn push_all<G> (list: &mut Vec<Limitation<G>>, geometries: Vec<G>, properties: PropertiesHandle)->usize {
    let n = geometries.len();
    list.extend( geometries.into_iter().map( |geometry| Limitation { geometry, properties }));
    n
}

/// the hard and soft limitations of a scenario in the local frame.
///
/// Feature properties are kept in an append-only arena so that all limitations that are derived
/// from the same (multi-geometry) feature refer to a single properties entry. Restrictions are
/// built once and are read-only afterwards.
#[derive(Debug,Clone,Default)]
pub struct Restrictions {
    properties: Vec<FeatureProperties>,
    hard: Limitations,
    soft: Limitations,
}

impl Restrictions {
    pub fn new (features: impl IntoIterator<Item=GeoFeature>, frame: &Frame)->Result<Self> {
        let mut restrictions = Restrictions::default();

        for feature in features {
            restrictions.add_feature( feature, frame)?;
        }

        debug!("classified {} features into {} hard and {} soft limitations",
               restrictions.properties.len(), restrictions.hard.len(), restrictions.soft.len());
        Ok(restrictions)
    }

    pub fn from_feature_collection (fc: &FeatureCollection, frame: &Frame)->Result<Self> {
        let features = fc.features.iter().map( GeoFeature::from_feature).collect::<Result<Vec<GeoFeature>>>()?;
        Restrictions::new( features, frame)
    }

    /// parse a GeoJSON FeatureCollection (a single Feature is also accepted)
    pub fn from_geojson_str (s: &str, frame: &Frame)->Result<Self> {
        match s.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(fc) => Restrictions::from_feature_collection( &fc, frame),
            GeoJson::Feature(f) => Restrictions::new( [GeoFeature::from_feature(&f)?], frame),
            GeoJson::Geometry(_) => Err( missing_property("properties"))
        }
    }

    fn add_feature (&mut self, feature: GeoFeature, frame: &Frame)->Result<()> {
        let GeoFeature { properties, geometry } = feature;
        let handle = PropertiesHandle( self.properties.len());
        let limitation_type = properties.limitation_type;
        let hardness = properties.hardness;

        let limitations = match hardness {
            Hardness::Hard => &mut self.hard,
            Hardness::Soft => &mut self.soft,
        };
        let n = limitations.add( limitation_type, &geometry, handle, frame)?;

        if n == 0 {
            warn!("feature {} has empty {} geometry", properties.id, geometry_name(&geometry));
        } else {
            debug!("feature {}: {} {} limitations", properties.id, n, limitation_type);
        }

        self.properties.push( properties);
        Ok(())
    }

    //--- accessors

    pub fn hard (&self)->&Limitations { &self.hard }
    pub fn soft (&self)->&Limitations { &self.soft }

    pub fn limitations (&self, hardness: Hardness)->&Limitations {
        match hardness {
            Hardness::Hard => &self.hard,
            Hardness::Soft => &self.soft,
        }
    }

    pub fn properties (&self, handle: PropertiesHandle)->Option<&FeatureProperties> {
        self.properties.get( handle.0)
    }

    /// all feature properties in the order in which features were added
    pub fn all_properties (&self)->&[FeatureProperties] { &self.properties }

    /// total number of limitations (not features)
    pub fn len (&self)->usize { self.hard.len() + self.soft.len() }

    /// true iff there are no hard and no soft limitations in any category
    pub fn empty (&self)->bool { self.hard.is_empty() && self.soft.is_empty() }
}
