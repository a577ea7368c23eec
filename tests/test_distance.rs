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

use odin_satpass::angle::Angle90;
use odin_satpass::distance::{bearing, elevation_angle, is_visible, surface_distance, three_d_distance, DEFAULT_MIN_ELEVATION_DEG};
use odin_satpass::geodetic::Geodetic;

// run with "cargo test test_surface_distance -- --nocapture"

fn pos (lat: f64, lon: f64, height: f64) -> Geodetic {
    Geodetic::from_degrees( lat, lon, height).unwrap()
}

#[test]
fn test_surface_distance() {
    // a quarter of a great circle, along the equator and pole to equator
    let d = surface_distance( &pos(0.0, 0.0, 0.0), &pos(0.0, 90.0, 0.0));
    println!("quarter circle = {:.6} km", d);
    assert!( (d - 10007.543398010286).abs() < 1.0e-6);

    let d = surface_distance( &pos(0.0, 0.0, 0.0), &pos(90.0, 0.0, 0.0));
    assert!( (d - 10007.543398010286).abs() < 1.0e-6);

    let sf = pos( 37.7749, -122.4194, 0.0);
    let nyc = pos( 40.7128, -74.0060, 0.0);
    let d = surface_distance( &sf, &nyc);
    println!("SF - NYC = {:.3} km", d);
    assert!( (d - 4129.086165).abs() < 1.0e-3);

    // symmetric, zero on itself, height has no effect
    assert!( surface_distance( &nyc, &sf) == d);
    assert!( surface_distance( &sf, &sf) == 0.0);
    assert!( (surface_distance( &pos(37.7749, -122.4194, 100.0), &nyc) - d).abs() < 1.0e-9);
}

#[test]
fn test_three_d_distance() {
    // stacked positions differ by height only
    let d = three_d_distance( &pos(0.0, 0.0, 0.0), &pos(0.0, 0.0, 100.0));
    assert!( (d - 100.0).abs() < 1.0e-9);

    // the chord runs a little short of the surface arc
    let a = pos( 0.0, 0.0, 0.0);
    let b = pos( 0.0, 1.0, 0.0);
    let chord = three_d_distance( &a, &b);
    let arc = surface_distance( &a, &b);
    println!("1 deg: chord {:.6} km, arc {:.6} km", chord, arc);
    assert!( (chord - 111.193515).abs() < 1.0e-3);
    assert!( chord < arc && (arc - chord) < 0.01);
}

#[test]
fn test_bearing() {
    let origin = pos( 0.0, 0.0, 0.0);

    assert!( bearing( &origin, &pos( 10.0, 0.0, 0.0)).degrees() == 0.0);
    assert!( bearing( &origin, &pos( 0.0, 10.0, 0.0)).degrees() == 90.0);
    assert!( bearing( &origin, &pos( -10.0, 0.0, 0.0)).degrees() == 180.0);
    assert!( bearing( &origin, &pos( 0.0, -10.0, 0.0)).degrees() == 270.0);

    let b = bearing( &origin, &pos( 10.0, 10.0, 0.0));
    println!("bearing to (10,10) = {:.6} deg", b.degrees());
    assert!( (b.degrees() - 44.561451).abs() < 1.0e-6);

    // shortest direction across the antimeridian is east
    let b = bearing( &pos( 0.0, 179.0, 0.0), &pos( 0.0, -179.0, 0.0));
    assert!( (b.degrees() - 90.0).abs() < 1.0e-9);

    // longitudes wrapped by full turns name the same point
    let b = bearing( &origin, &pos( 0.0, 10.0, 0.0));
    assert!( bearing( &origin, &pos( 0.0, 370.0, 0.0)).degrees() == b.degrees());
    assert!( bearing( &origin, &pos( 0.0, -350.0, 0.0)).degrees() == b.degrees());
}

#[test]
fn test_elevation_angle() {
    let observer = pos( 0.0, 0.0, 0.0);

    // directly overhead
    let el = elevation_angle( &observer, &pos( 0.0, 0.0, 10.0));
    assert!( el.degrees() == 90.0);

    let el = elevation_angle( &observer, &pos( 0.0, 1.0, 10.0));
    println!("el of 10 km target at 1 deg distance = {:.4} deg", el.degrees());
    assert!( (el.degrees() - 5.138909).abs() < 1.0e-4);

    // below the observer height
    let el = elevation_angle( &pos( 0.0, 0.0, 1.0), &pos( 0.0, 1.0, 0.0));
    assert!( el.degrees() < 0.0);
}

#[test]
fn test_visibility() {
    let observer = pos( 0.0, 0.0, 0.0);
    let min_el = Angle90::from_degrees( DEFAULT_MIN_ELEVATION_DEG);

    let near_sat = pos( 0.0, 30.0, 800.0); // appears at ~13.5 deg
    let far_sat = pos( 0.0, 50.0, 800.0);  // appears at ~8.2 deg

    assert!( is_visible( &observer, &near_sat, min_el));
    assert!( !is_visible( &observer, &far_sat, min_el));

    // the same target clears a lower threshold
    assert!( is_visible( &observer, &far_sat, Angle90::from_degrees( 5.0)));
}
