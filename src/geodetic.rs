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

use std::fmt;
use crate::{
    angle::normalize_180,
    errors::{invalid_input, Result},
    geo_constants::MEAN_EARTH_RADIUS_KM,
};

/// geodetic position on the spherical earth model, in radians and km height above the mean
/// radius surface. Note this deliberately mirrors the argument order of the underlying math
/// (latitude first) - going through `from_degrees` avoids surprises
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Geodetic {
    pub latitude: f64,  // radians
    pub longitude: f64, // radians, within (-PI..PI]
    pub height: f64,    // km above the mean radius sphere
}

impl Geodetic {

    /// raw constructor for values that are already radians/km and known to be in range
    pub fn new (latitude: f64, longitude: f64, height: f64) -> Self {
        Geodetic { latitude, longitude, height }
    }

    /// checked construction from user facing degree values. Latitudes outside [-90..90] and
    /// non-finite or sub-center heights are rejected, longitudes of any magnitude are folded
    /// into (-180..180]
    pub fn from_degrees (latitude_deg: f64, longitude_deg: f64, height_km: f64) -> Result<Self> {
        if !latitude_deg.is_finite() || latitude_deg < -90.0 || latitude_deg > 90.0 {
            return Err( invalid_input!("latitude out of range: {}", latitude_deg));
        }
        if !longitude_deg.is_finite() {
            return Err( invalid_input!("longitude not finite: {}", longitude_deg));
        }
        if !height_km.is_finite() || height_km <= -MEAN_EARTH_RADIUS_KM {
            return Err( invalid_input!("height out of range: {} km", height_km));
        }

        let mut lon = normalize_180( longitude_deg);
        if lon == -180.0 { lon = 180.0 }

        Ok( Geodetic::new( latitude_deg.to_radians(), lon.to_radians(), height_km))
    }

    #[inline] pub fn latitude_deg (&self) -> f64 { self.latitude.to_degrees() }
    #[inline] pub fn longitude_deg (&self) -> f64 { self.longitude.to_degrees() }

    /// distance of this point from the earth center in km
    #[inline] pub fn radius_km (&self) -> f64 { MEAN_EARTH_RADIUS_KM + self.height }
}

impl fmt::Display for Geodetic {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Geodetic( lat:{:.4}deg, lon:{:.4}deg, height:{:.3}km)", self.latitude_deg(), self.longitude_deg(), self.height)
    }
}
