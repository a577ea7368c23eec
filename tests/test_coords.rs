/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
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
#![allow(unused)]

use chrono::{TimeDelta, TimeZone, Utc};
use odin_satpass::angle::{normalize_180, normalize_360, normalize_90, Angle360, Angle90};
use odin_satpass::cartesian3::Cartesian3;
use odin_satpass::coords::{
    cartesian_to_geodetic, ecf_to_geodetic, ecf_to_look_angles, eci_to_ecf, geodetic_to_cartesian,
    geodetic_to_ecf, gmst, gstime,
};
use odin_satpass::datetime::{julian_date, minutes_between, parse_datetime};
use odin_satpass::distance::three_d_distance;
use odin_satpass::geo_constants::MEAN_EARTH_RADIUS_KM;
use odin_satpass::geodetic::Geodetic;

// run with "cargo test test_scene_frame_roundtrip -- --nocapture"

const R: f64 = MEAN_EARTH_RADIUS_KM;

#[test]
fn test_angles() {
    assert!( normalize_360(-45.0) == 315.0);
    assert!( normalize_360(720.0) == 0.0);
    assert!( normalize_180(190.0) == -170.0);
    assert!( normalize_180(-190.0) == 170.0);
    assert!( normalize_90(100.0) == 80.0);
    assert!( normalize_90(-100.0) == -80.0);
    assert!( normalize_90(90.0) == 90.0);

    let az = Angle360::from_degrees(-90.0);
    println!("az -90 -> {}", az);
    assert!( az == Angle360::from_degrees(270.0));

    assert!( Angle90::from_radians( std::f64::consts::FRAC_PI_4).degrees() == 45.0);
    assert!( Angle90::from_degrees(45.0) < Angle90::from_degrees(46.0));
}

#[test]
fn test_angle_serde() {
    let el = Angle90::from_degrees(45.0);
    assert!( serde_json::to_string(&el).unwrap() == "45.0");

    let el: Angle90 = serde_json::from_str("45.0").unwrap();
    assert!( el.degrees() == 45.0);

    // deserialization rejects out of range values instead of wrapping them
    assert!( serde_json::from_str::<Angle90>("95.0").is_err());
    assert!( serde_json::from_str::<Angle90>("-90.5").is_err());
    assert!( serde_json::from_str::<Angle360>("-0.5").is_err());
    assert!( serde_json::from_str::<Angle360>("400.0").is_err());
    assert!( serde_json::from_str::<Angle360>("359.5").is_ok());
}

#[test]
fn test_datetime() {
    let t = Utc.with_ymd_and_hms( 2000, 1, 1, 12, 0, 0).unwrap();
    assert!( julian_date(&t) == 2451545.0); // the J2000 epoch

    let t = Utc.with_ymd_and_hms( 2025, 3, 17, 0, 0, 0).unwrap();
    assert!( julian_date(&t) == 2460751.5);

    let t1 = t + TimeDelta::seconds(90);
    assert!( minutes_between( &t, &t1) == 1.5);
    assert!( minutes_between( &t1, &t) == -1.5);

    let t = parse_datetime( "2025-03-17T22:16:50Z").unwrap();
    assert!( t.to_rfc3339().starts_with( "2025-03-17T22:16:50"));

    let t = parse_datetime( "2025-03-17T22:16:50+02:00").unwrap();
    assert!( t.to_rfc3339().starts_with( "2025-03-17T20:16:50")); // normalized to UTC

    assert!( parse_datetime( "not a date").is_none());
}

#[test]
fn test_sidereal_time() {
    let gst = gstime( 2451545.0);
    println!("gstime(J2000) = {}", gst);
    assert!( (gst - 4.894961212823756).abs() < 1.0e-9);

    let t = Utc.with_ymd_and_hms( 2000, 1, 1, 12, 0, 0).unwrap();
    assert!( gmst(&t) == gst);

    // one sidereal rotation later (23h 56m 4.1s) the angle comes back around
    let t1 = t + TimeDelta::milliseconds( 86164100);
    let dg = (gmst(&t1) - gst).abs();
    assert!( dg < 1.0e-4 || (dg - 2.0 * std::f64::consts::PI).abs() < 1.0e-4);
}

#[test]
fn test_scene_frame_axes() {
    // (0,0) is on the +x axis, the north pole on +y, lon 90W on +z
    let p = geodetic_to_cartesian( &Geodetic::from_degrees( 0.0, 0.0, 0.0).unwrap());
    println!("(0,0,0) -> {}", p);
    assert!( (p.x - R).abs() < 1.0e-9 && p.y.abs() < 1.0e-9 && p.z.abs() < 1.0e-9);

    let p = geodetic_to_cartesian( &Geodetic::from_degrees( 90.0, 0.0, 0.0).unwrap());
    assert!( p.x.abs() < 1.0e-9 && (p.y - R).abs() < 1.0e-9 && p.z.abs() < 1.0e-9);

    let p = geodetic_to_cartesian( &Geodetic::from_degrees( 0.0, -90.0, 0.0).unwrap());
    assert!( p.x.abs() < 1.0e-9 && p.y.abs() < 1.0e-9 && (p.z - R).abs() < 1.0e-9);

    let p = geodetic_to_cartesian( &Geodetic::from_degrees( 0.0, 90.0, 0.0).unwrap());
    assert!( (p.z + R).abs() < 1.0e-9);

    let p = geodetic_to_cartesian( &Geodetic::from_degrees( 0.0, 0.0, 800.0).unwrap());
    assert!( (p.length() - (R + 800.0)).abs() < 1.0e-9);
}

#[test]
fn test_scene_frame_roundtrip() {
    for lat in [-89.9, -45.0, -0.001, 0.0, 37.7749, 51.5, 89.9] {
        for lon in [-179.99, -122.4194, -1.0, 0.0, 13.4, 179.99, 180.0] {
            for height in [0.0, 0.5, 800.0] {
                let pos = Geodetic::from_degrees( lat, lon, height).unwrap();
                let rt = cartesian_to_geodetic( &geodetic_to_cartesian( &pos)).unwrap();

                assert!( (rt.latitude_deg() - lat).abs() < 1.0e-6, "lat {} -> {}", lat, rt.latitude_deg());
                assert!( (rt.longitude_deg() - lon).abs() < 1.0e-6, "lon {} -> {}", lon, rt.longitude_deg());
                assert!( (rt.height - height).abs() < 1.0e-6);
            }
        }
    }

    // longitude of the round tripped antimeridian stays on the +180 side
    let pos = Geodetic::from_degrees( 10.0, -180.0, 0.0).unwrap();
    assert!( pos.longitude_deg() == 180.0);
    let rt = cartesian_to_geodetic( &geodetic_to_cartesian( &pos)).unwrap();
    assert!( rt.longitude_deg() > 0.0);

    // at the poles only latitude and height are meaningful
    let rt = cartesian_to_geodetic( &geodetic_to_cartesian( &Geodetic::from_degrees( 90.0, 45.0, 2.0).unwrap())).unwrap();
    assert!( (rt.latitude_deg() - 90.0).abs() < 1.0e-6);
    assert!( (rt.height - 2.0).abs() < 1.0e-6);
}

#[test]
fn test_ecf_frame() {
    let p = geodetic_to_ecf( &Geodetic::from_degrees( 0.0, 0.0, 0.0).unwrap());
    assert!( (p.x - R).abs() < 1.0e-9 && p.y.abs() < 1.0e-9 && p.z.abs() < 1.0e-9);

    let p = geodetic_to_ecf( &Geodetic::from_degrees( 0.0, 90.0, 0.0).unwrap());
    assert!( p.x.abs() < 1.0e-9 && (p.y - R).abs() < 1.0e-9);

    let p = geodetic_to_ecf( &Geodetic::from_degrees( 90.0, 0.0, 400.0).unwrap());
    assert!( (p.z - (R + 400.0)).abs() < 1.0e-9);

    for lat in [-80.0, -33.5, 0.0, 48.1, 80.0] {
        for lon in [-179.0, -122.4, 0.0, 151.2, 180.0] {
            let pos = Geodetic::from_degrees( lat, lon, 427.5).unwrap();
            let rt = ecf_to_geodetic( &geodetic_to_ecf( &pos)).unwrap();
            assert!( (rt.latitude_deg() - lat).abs() < 1.0e-6);
            assert!( (rt.longitude_deg() - lon).abs() < 1.0e-6);
            assert!( (rt.height - 427.5).abs() < 1.0e-6);
        }
    }
}

#[test]
fn test_eci_rotation() {
    let eci = Cartesian3::new( 7000.0, 0.0, 700.0);

    let p = eci_to_ecf( &eci, 0.0);
    assert!( p.x == 7000.0 && p.y == 0.0 && p.z == 700.0);

    let p = eci_to_ecf( &eci, std::f64::consts::FRAC_PI_2);
    assert!( p.x.abs() < 1.0e-9 && (p.y + 7000.0).abs() < 1.0e-9 && p.z == 700.0);

    // plain rotation, lengths are preserved
    let p = eci_to_ecf( &eci, 1.234);
    assert!( (p.length() - eci.length()).abs() < 1.0e-9);
}

#[test]
fn test_look_angles() {
    let obs = Geodetic::from_degrees( 0.0, 0.0, 0.0).unwrap();

    // directly overhead
    let sat = Geodetic::from_degrees( 0.0, 0.0, 800.0).unwrap();
    let la = ecf_to_look_angles( &obs, &geodetic_to_ecf( &sat));
    println!("overhead: {}", la);
    assert!( (la.elevation.degrees() - 90.0).abs() < 1.0e-6);
    assert!( (la.range - 800.0).abs() < 1.0e-6);

    // a target due north appears at azimuth 0, east at 90, south at 180, west at 270
    let la_n = ecf_to_look_angles( &obs, &geodetic_to_ecf( &Geodetic::from_degrees( 10.0, 0.0, 800.0).unwrap()));
    let la_e = ecf_to_look_angles( &obs, &geodetic_to_ecf( &Geodetic::from_degrees( 0.0, 10.0, 800.0).unwrap()));
    let la_s = ecf_to_look_angles( &obs, &geodetic_to_ecf( &Geodetic::from_degrees( -10.0, 0.0, 800.0).unwrap()));
    let la_w = ecf_to_look_angles( &obs, &geodetic_to_ecf( &Geodetic::from_degrees( 0.0, -10.0, 800.0).unwrap()));

    assert!( la_n.azimuth.degrees().abs() < 1.0e-9);
    assert!( (la_e.azimuth.degrees() - 90.0).abs() < 1.0e-9);
    assert!( (la_s.azimuth.degrees() - 180.0).abs() < 1.0e-9);
    assert!( (la_w.azimuth.degrees() - 270.0).abs() < 1.0e-9);

    assert!( la_n.elevation.degrees() > 0.0 && la_n.elevation.degrees() < 90.0);
    assert!( la_n.range > 800.0);

    // slant range is the same chord distance the scene frame computes
    let target = Geodetic::from_degrees( 10.0, 0.0, 800.0).unwrap();
    assert!( (la_n.range - three_d_distance( &obs, &target)).abs() < 1.0e-9);

    // a target on the far side of the earth is far below the horizon
    let la_far = ecf_to_look_angles( &obs, &geodetic_to_ecf( &Geodetic::from_degrees( 0.0, 180.0, 800.0).unwrap()));
    assert!( la_far.elevation.degrees() < -30.0);
}

#[test]
fn test_degenerate_input() {
    assert!( cartesian_to_geodetic( &Cartesian3::zero()).is_err());
    assert!( ecf_to_geodetic( &Cartesian3::zero()).is_err());
    assert!( ecf_to_geodetic( &Cartesian3::new( f64::NAN, 0.0, 0.0)).is_err());

    assert!( Geodetic::from_degrees( 91.0, 0.0, 0.0).is_err());
    assert!( Geodetic::from_degrees( -90.001, 0.0, 0.0).is_err());
    assert!( Geodetic::from_degrees( f64::NAN, 0.0, 0.0).is_err());
    assert!( Geodetic::from_degrees( 0.0, f64::INFINITY, 0.0).is_err());
    assert!( Geodetic::from_degrees( 0.0, 0.0, -7000.0).is_err());

    assert!( Geodetic::from_degrees( 0.0, 720.5, 0.0).is_ok()); // longitudes fold instead
}
