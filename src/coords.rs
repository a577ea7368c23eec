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

//! coordinate transforms on the spherical earth model.
//!
//! two cartesian frames appear here, both centered on the earth center and in km:
//!
//!   - the scene frame used for 3d display and point-to-point distances: +y towards the north
//!     pole, +x towards the equator/antimeridian side away from (0,0), i.e. +x pierces the
//!     surface at lat 0 lon 0, +z pierces it at lon 90W
//!   - the earth fixed frame (ECEF) used for observer relative look angles: +z towards the
//!     north pole, +x piercing the surface at lat 0 lon 0, +y at lon 90E
//!
//! both are rotations of each other around the common origin, so lengths and distances computed
//! in either frame agree. Inertial (ECI) positions from the propagator rotate into the earth
//! fixed frame via [`eci_to_ecf`] with the greenwich mean sidereal time of the instant

use chrono::{DateTime, Utc};
use std::fmt;
use crate::{
    angle::{Angle360, Angle90},
    cartesian3::Cartesian3,
    datetime::julian_date,
    errors::{invalid_input, Result},
    geo_constants::MEAN_EARTH_RADIUS_KM,
    geodetic::Geodetic,
    acos, asin, atan2, cos, sin, HALF_PI, PI, TWO_PI,
};

/* #region sidereal time *************************************************************************/

/// greenwich mean sidereal time in radians [0..2PI) for a julian date (IAU-82 polynomial)
pub fn gstime (jdut1: f64) -> f64 {
    let tut1 = (jdut1 - 2451545.0) / 36525.0;

    let mut temp = -6.2e-6 * tut1 * tut1 * tut1
        + 0.093104 * tut1 * tut1
        + (876600.0 * 3600.0 + 8640184.812866) * tut1
        + 67310.54841; // in time-seconds

    temp = (temp.to_radians() / 240.0) % TWO_PI; // 360deg / 86400sec = 1/240 deg per time-second
    if temp < 0.0 { temp += TWO_PI }

    temp
}

/// greenwich mean sidereal time in radians [0..2PI) for a UTC instant
pub fn gmst (t: &DateTime<Utc>) -> f64 {
    gstime( julian_date(t))
}

/* #endregion sidereal time */

/* #region scene frame transforms ****************************************************************/

/// map a geodetic position into the scene frame, at its full radius (mean earth radius plus
/// height). The inverse is [`cartesian_to_geodetic`]
pub fn geodetic_to_cartesian (pos: &Geodetic) -> Cartesian3 {
    let r = pos.radius_km();
    let phi = HALF_PI - pos.latitude;  // polar angle
    let theta = pos.longitude + PI;

    Cartesian3::new(
        -r * sin(phi) * cos(theta),
        r * cos(phi),
        r * sin(phi) * sin(theta),
    )
}

/// map a scene frame position back to geodetic latitude/longitude/height. Fails for degenerate
/// (zero length or non-finite) input
pub fn cartesian_to_geodetic (p: &Cartesian3) -> Result<Geodetic> {
    let r = p.length();
    if !r.is_finite() || r <= 0.0 {
        return Err( invalid_input!("not a surface-relative position: {:?}", p));
    }

    let latitude = HALF_PI - acos( (p.y / r).clamp( -1.0, 1.0));
    let mut longitude = atan2( p.z, -p.x) - PI;
    if longitude <= -PI { longitude += TWO_PI }  // fold into (-PI..PI]

    Ok( Geodetic::new( latitude, longitude, r - MEAN_EARTH_RADIUS_KM))
}

/* #endregion scene frame transforms */

/* #region earth fixed frame transforms **********************************************************/

/// map a geodetic position into the earth fixed frame
pub fn geodetic_to_ecf (pos: &Geodetic) -> Cartesian3 {
    let r = pos.radius_km();
    let (sin_lat, cos_lat) = (sin(pos.latitude), cos(pos.latitude));
    let (sin_lon, cos_lon) = (sin(pos.longitude), cos(pos.longitude));

    Cartesian3::new( r * cos_lat * cos_lon, r * cos_lat * sin_lon, r * sin_lat)
}

/// map an earth fixed position back to geodetic latitude/longitude/height (e.g. for satellite
/// ground points). Fails for degenerate input
pub fn ecf_to_geodetic (p: &Cartesian3) -> Result<Geodetic> {
    let r = p.length();
    if !r.is_finite() || r <= 0.0 {
        return Err( invalid_input!("not a surface-relative position: {:?}", p));
    }

    let latitude = asin( (p.z / r).clamp( -1.0, 1.0));
    let mut longitude = atan2( p.y, p.x);
    if longitude <= -PI { longitude += TWO_PI }

    Ok( Geodetic::new( latitude, longitude, r - MEAN_EARTH_RADIUS_KM))
}

/// rotate an inertial (ECI) position into the earth fixed frame for the given greenwich mean
/// sidereal time in radians
pub fn eci_to_ecf (eci: &Cartesian3, gmst: f64) -> Cartesian3 {
    let (sin_g, cos_g) = (sin(gmst), cos(gmst));

    Cartesian3::new(
        eci.x * cos_g + eci.y * sin_g,
        -eci.x * sin_g + eci.y * cos_g,
        eci.z,
    )
}

/* #endregion earth fixed frame transforms */

/* #region look angles ***************************************************************************/

/// observer-relative direction and distance of a satellite
#[derive(Debug,Clone,Copy)]
pub struct LookAngles {
    pub azimuth: Angle360,   // degrees clockwise from north
    pub elevation: Angle90,  // degrees above the horizon plane
    pub range: f64,          // slant range in km
}

impl fmt::Display for LookAngles {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LookAngles( az:{:.2}deg, el:{:.2}deg, range:{:.3}km)", self.azimuth.degrees(), self.elevation.degrees(), self.range)
    }
}

/// azimuth/elevation/range of an earth fixed position as seen from a ground observer. This goes
/// through the observer topocentric south/east/zenith frame
pub fn ecf_to_look_angles (observer: &Geodetic, ecf: &Cartesian3) -> LookAngles {
    let (sin_lat, cos_lat) = (sin(observer.latitude), cos(observer.latitude));
    let (sin_lon, cos_lon) = (sin(observer.longitude), cos(observer.longitude));

    let d = *ecf - geodetic_to_ecf(observer);

    let top_s = sin_lat * cos_lon * d.x + sin_lat * sin_lon * d.y - cos_lat * d.z;
    let top_e = -sin_lon * d.x + cos_lon * d.y;
    let top_z = cos_lat * cos_lon * d.x + cos_lat * sin_lon * d.y + sin_lat * d.z;

    let range = d.length();
    let elevation = if range > 0.0 { asin( (top_z / range).clamp( -1.0, 1.0)) } else { HALF_PI };

    LookAngles {
        azimuth: Angle360::from_radians( atan2( top_e, -top_s)),
        elevation: Angle90::from_radians( elevation),
        range,
    }
}

/* #endregion look angles */
