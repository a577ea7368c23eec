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

//! distance and direction computations between geodetic positions, over the same mean radius
//! sphere the coordinate transforms use. Surface distances deliberately ignore the heights of
//! their endpoints, the chord distance includes them

use crate::angle::{Angle360, Angle90};
use crate::coords::geodetic_to_cartesian;
use crate::geo_constants::MEAN_EARTH_RADIUS_KM;
use crate::geodetic::Geodetic;
use crate::{atan2, cos, pow2, sin, sqrt};

/// elevation threshold in degrees under which we consider a target obstructed by terrain and
/// atmosphere even though it is geometrically above the horizon
pub const DEFAULT_MIN_ELEVATION_DEG: f64 = 10.0;

/// great circle distance between two positions in km, over the mean radius sphere and ignoring
/// heights. This uses the haversine form, which stays well conditioned for small separations
pub fn surface_distance (a: &Geodetic, b: &Geodetic) -> f64 {
    let dlat = b.latitude - a.latitude;
    let dlon = b.longitude - a.longitude;

    let h = pow2( sin( dlat * 0.5)) + cos(a.latitude) * cos(b.latitude) * pow2( sin( dlon * 0.5));
    2.0 * MEAN_EARTH_RADIUS_KM * atan2( sqrt(h), sqrt( 1.0 - h))
}

/// straight line (chord) distance between two positions in km, including their heights
pub fn three_d_distance (a: &Geodetic, b: &Geodetic) -> f64 {
    geodetic_to_cartesian(a).distance_to( &geodetic_to_cartesian(b))
}

/// initial great circle bearing from `a` towards `b`, clockwise from true north
pub fn bearing (a: &Geodetic, b: &Geodetic) -> Angle360 {
    let dlon = b.longitude - a.longitude;
    let y = sin(dlon) * cos(b.latitude);
    let x = cos(a.latitude) * sin(b.latitude) - sin(a.latitude) * cos(b.latitude) * cos(dlon);
    Angle360::from_radians( atan2( y, x))
}

/// elevation angle under which `target` appears from `observer`, as the flat geometry
/// approximation of height difference over great circle distance. Negative when the target sits
/// below the observer height
pub fn elevation_angle (observer: &Geodetic, target: &Geodetic) -> Angle90 {
    let alt_delta = target.height - observer.height;
    Angle90::from_radians( atan2( alt_delta, surface_distance( observer, target)))
}

/// whether `target` stands at least `min_elevation` above the horizon of `observer`
pub fn is_visible (observer: &Geodetic, target: &Geodetic, min_elevation: Angle90) -> bool {
    elevation_angle( observer, target) >= min_elevation
}
