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

use serde_json::{json, Value};
use strum::IntoEnumIterator;
use helm_common::{Frame, Vector2};
use helm_common::errors::HelmCommonError;
use helm_limits::{Hardness, HelmLimitsError, LimitationType, Restrictions};

// run with "cargo test -p helm_limits --test test_restrictions -- --nocapture"

fn frame ()->Frame {
    Frame::new( 54.35, 10.15).unwrap()
}

fn square (lon0: f64, lat0: f64, lon1: f64, lat1: f64)->Value {
    json!([ [lon0,lat0], [lon1,lat0], [lon1,lat1], [lon0,lat1], [lon0,lat0] ])
}

fn geometry_for (lt: LimitationType)->Value {
    match lt {
        LimitationType::PointApproachProhibition => json!({ "type": "Point", "coordinates": [10.2, 54.4] }),
        LimitationType::LineCrossingProhibition => json!({ "type": "LineString", "coordinates": [[10.1, 54.3], [10.2, 54.4], [10.3, 54.4]] }),
        _ => json!({ "type": "Polygon", "coordinates": [ square( 10.1, 54.3, 10.2, 54.4) ] })
    }
}

fn feature (id: &str, lt: &str, hardness: &str, geometry: Value)->Value {
    json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "id": id,
            "source_id": "enc-de-421",
            "source_object_code": "RESARE",
            "limitation_type": lt,
            "hardness": hardness,
            "max_speed": 8.0
        }
    })
}

fn collection (features: Vec<Value>)->String {
    json!({ "type": "FeatureCollection", "features": features }).to_string()
}

#[test]
fn test_classification() {
    let mut features = Vec::new();
    for h in Hardness::iter() {
        for lt in LimitationType::iter() {
            features.push( feature( &format!("{lt}-{h}"), &lt.to_string(), &h.to_string(), geometry_for(lt)));
        }
    }
    assert_eq!( features.len(), 10);

    let restrictions = Restrictions::from_geojson_str( &collection(features), &frame()).unwrap();
    println!("{restrictions:#?}");

    assert!( !restrictions.empty());
    assert_eq!( restrictions.len(), 10);
    assert_eq!( restrictions.all_properties().len(), 10);

    for h in Hardness::iter() {
        let limitations = restrictions.limitations(h);
        for lt in LimitationType::iter() {
            assert_eq!( limitations.count(lt), 1, "{h} {lt}");
        }

        let l = &limitations.zone_leaving_prohibitions()[0];
        let props = restrictions.properties( l.properties).unwrap();
        assert_eq!( props.limitation_type, LimitationType::ZoneLeavingProhibition);
        assert_eq!( props.hardness, h);
        assert_eq!( props.id, format!("zone_leaving_prohibition-{h}"));
        assert_eq!( props.source_object_code.as_deref(), Some("RESARE"));
        assert_eq!( props.max_speed, Some(8.0));
        assert_eq!( props.max_course, None);
    }

    let line = &restrictions.hard().line_crossing_prohibitions()[0].geometry;
    assert_eq!( line.len(), 3);
    assert!( restrictions.soft().point_approach_prohibitions()[0].geometry.x > 0.0);
}

#[test]
fn test_empty() {
    let restrictions = Restrictions::from_geojson_str( &collection( vec![]), &frame()).unwrap();
    assert!( restrictions.empty());
    assert_eq!( restrictions.len(), 0);
    assert!( restrictions.hard().is_empty() && restrictions.soft().is_empty());
}

#[test]
fn test_ring_closing() {
    let geometry = json!({
        "type": "Polygon",
        "coordinates": [ square( 10.1, 54.3, 10.2, 54.4), square( 10.13, 54.33, 10.17, 54.37) ]
    });
    let fc = collection( vec![ feature( "z1", "zone_entering_prohibition", "hard", geometry) ]);
    let restrictions = Restrictions::from_geojson_str( &fc, &frame()).unwrap();

    let poly = &restrictions.hard().zone_entering_prohibitions()[0].geometry;
    println!("exterior: {:?}", poly.exterior);
    assert_eq!( poly.exterior.len(), 4);
    assert_eq!( poly.interiors.len(), 1);
    assert_eq!( poly.interiors[0].len(), 4);
    assert!( poly.exterior[0] != poly.exterior[3]);
}

#[test]
fn test_contains() {
    let fr = frame();
    let geometry = json!({ "type": "Polygon", "coordinates": [ square( 10.1, 54.3, 10.2, 54.4) ] });
    let fc = collection( vec![ feature( "z1", "zone_entering_prohibition", "soft", geometry) ]);
    let restrictions = Restrictions::from_geojson_str( &fc, &fr).unwrap();
    let poly = &restrictions.soft().zone_entering_prohibitions()[0].geometry;

    assert!( poly.contains( &Vector2::ZERO));
    assert!( poly.contains( &fr.from_wgs( 54.38, 10.18)));
    assert!( !poly.contains( &fr.from_wgs( 54.45, 10.15)));
    assert!( !poly.contains( &Vector2::new( 0.0, 10.0)));

    let geometry = json!({
        "type": "Polygon",
        "coordinates": [ square( 10.1, 54.3, 10.2, 54.4), square( 10.14, 54.34, 10.16, 54.36) ]
    });
    let fc = collection( vec![ feature( "z2", "zone_leaving_prohibition", "hard", geometry) ]);
    let restrictions = Restrictions::from_geojson_str( &fc, &fr).unwrap();
    let poly = &restrictions.hard().zone_leaving_prohibitions()[0].geometry;

    assert!( poly.has_interiors());
    assert!( !poly.contains( &Vector2::ZERO)); // inside the hole
    assert!( poly.contains( &fr.from_wgs( 54.38, 10.18)));
}

#[test]
fn test_multi_geometry() {
    let geometry = json!({
        "type": "MultiPolygon",
        "coordinates": [
            [ square( 10.1, 54.3, 10.2, 54.4) ],
            [ square( 10.3, 54.5, 10.4, 54.6) ]
        ]
    });
    let points = json!({ "type": "MultiPoint", "coordinates": [[10.2, 54.4], [10.3, 54.4], [10.4, 54.4]] });

    let fc = collection( vec![
        feature( "mp", "movement_parameters_limitation", "hard", geometry),
        feature( "pts", "point_approach_prohibition", "hard", points),
    ]);
    let restrictions = Restrictions::from_geojson_str( &fc, &frame()).unwrap();

    assert_eq!( restrictions.all_properties().len(), 2);
    assert_eq!( restrictions.len(), 5);

    let zones = restrictions.hard().movement_parameters_limitations();
    assert_eq!( zones.len(), 2);
    assert_eq!( zones[0].properties, zones[1].properties);
    assert_eq!( restrictions.properties( zones[0].properties).unwrap().id, "mp");

    let pts = restrictions.hard().point_approach_prohibitions();
    assert_eq!( pts.len(), 3);
    assert!( pts.iter().all( |p| p.properties == pts[0].properties));
    assert_ne!( pts[0].properties, zones[0].properties);
}

#[test]
fn test_feature_id_fallback() {
    let fc = json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "id": 42,
            "geometry": { "type": "Point", "coordinates": [10.2, 54.4] },
            "properties": { "limitation_type": "point_approach_prohibition", "hardness": "soft", "distance": 0.5 }
        }]
    }).to_string();

    let restrictions = Restrictions::from_geojson_str( &fc, &frame()).unwrap();
    let p = &restrictions.soft().point_approach_prohibitions()[0];
    let props = restrictions.properties( p.properties).unwrap();
    assert_eq!( props.id, "42");
    assert_eq!( props.distance, Some(0.5));
    assert_eq!( props.source_id, None);
}

#[test]
fn test_errors() {
    let fr = frame();
    let point = || json!({ "type": "Point", "coordinates": [10.2, 54.4] });

    let fc = collection( vec![ feature( "x", "anchoring_prohibition", "hard", point()) ]);
    match Restrictions::from_geojson_str( &fc, &fr) {
        Err( HelmLimitsError::UnknownLimitationType(s)) => assert_eq!( s, "anchoring_prohibition"),
        other => panic!("unexpected result {other:?}")
    }

    let fc = collection( vec![ feature( "x", "point_approach_prohibition", "medium", point()) ]);
    assert!( matches!( Restrictions::from_geojson_str( &fc, &fr), Err( HelmLimitsError::UnknownHardness(_))));

    // a zone needs a polygon
    let fc = collection( vec![ feature( "x", "zone_entering_prohibition", "hard", point()) ]);
    match Restrictions::from_geojson_str( &fc, &fr) {
        Err( HelmLimitsError::UnsupportedGeometry { limitation, geometry }) => {
            assert_eq!( limitation, "zone_entering_prohibition");
            assert_eq!( geometry, "Point");
        }
        other => panic!("unexpected result {other:?}")
    }

    let fc = json!({
        "type": "FeatureCollection",
        "features": [{ "type": "Feature", "geometry": point(), "properties": { "id": "x", "limitation_type": "point_approach_prohibition" } }]
    }).to_string();
    assert!( matches!( Restrictions::from_geojson_str( &fc, &fr), Err( HelmLimitsError::MissingProperty(_))));

    assert!( Restrictions::from_geojson_str( "{ not json", &fr).is_err());
}

#[test]
fn test_invalid_coordinates() {
    let fr = frame();

    let fc = collection( vec![ feature( "p", "point_approach_prohibition", "hard",
                                        json!({ "type": "Point", "coordinates": [10.2, 95.0] })) ]);
    let res = Restrictions::from_geojson_str( &fc, &fr);
    println!("lat 95: {res:?}");
    assert!( matches!( res, Err( HelmLimitsError::Common( HelmCommonError::InvalidCoordinate(_)))));

    let fc = collection( vec![ feature( "l", "line_crossing_prohibition", "soft",
                                        json!({ "type": "LineString", "coordinates": [[10.1, 54.3], [190.0, 54.4]] })) ]);
    assert!( matches!( Restrictions::from_geojson_str( &fc, &fr), Err( HelmLimitsError::Common(_))));

    let geometry = json!({ "type": "Polygon", "coordinates": [ square( 10.1, 54.3, 10.2, 54.4), square( 10.13, -91.0, 10.17, 54.37) ] });
    let fc = collection( vec![ feature( "z", "zone_entering_prohibition", "hard", geometry) ]);
    assert!( matches!( Restrictions::from_geojson_str( &fc, &fr), Err( HelmLimitsError::Common(_))));
}
