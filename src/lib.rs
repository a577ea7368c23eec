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

//! satellite pass prediction from two-line element sets.
//!
//! this crate parses TLEs, propagates them with a native SGP4/SDP4 implementation and scans
//! observer-relative look angles for visibility windows (overpasses). It also provides the
//! coordinate transforms and point-to-point geometry (great circle distance, bearing, line of
//! sight) that go with it. All earth-referenced computations here use a spherical earth model
//! with a single shared mean radius, which is accurate to about 0.5% and is the intended
//! trade-off for display and planning purposes (no WGS84 ellipsoid).

use std::{fs, path::Path};
use serde::de::DeserializeOwned;

pub mod errors;
use errors::Result;

pub mod macros;
pub mod angle;
pub mod geo_constants;
pub mod cartesian3;
pub mod geodetic;
pub mod datetime;
pub mod uom;
pub mod coords;
pub mod tle;
pub mod sgp4;
mod sdp4;
pub mod overpass;
pub mod distance;

/* #region constants and f64 function sugar ******************************************************/

pub const PI: f64 = std::f64::consts::PI;
pub const TWO_PI: f64 = PI * 2.0;
pub const HALF_PI: f64 = PI / 2.0;

#[inline(always)] pub fn sin (x: f64) -> f64 { x.sin() }
#[inline(always)] pub fn cos (x: f64) -> f64 { x.cos() }
#[inline(always)] pub fn tan (x: f64) -> f64 { x.tan() }
#[inline(always)] pub fn asin (x: f64) -> f64 { x.asin() }
#[inline(always)] pub fn acos (x: f64) -> f64 { x.acos() }
#[inline(always)] pub fn atan2 (y: f64, x: f64) -> f64 { y.atan2(x) }
#[inline(always)] pub fn sqrt (x: f64) -> f64 { x.sqrt() }
#[inline(always)] pub fn pow2 (x: f64) -> f64 { x * x }
#[inline(always)] pub fn abs (x: f64) -> f64 { x.abs() }
#[inline(always)] pub fn deg (rad: f64) -> f64 { rad.to_degrees() }
#[inline(always)] pub fn rad (deg: f64) -> f64 { deg.to_radians() }

/* #endregion constants and f64 function sugar */

/// load a RON config of the given type from an explicit pathname
pub fn load_config<T> (path: impl AsRef<Path>) -> Result<T> where T: DeserializeOwned {
    let input = fs::read_to_string( path)?;
    Ok( ron::de::from_str( &input)?)
}
