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

use std::{fmt, ops};
use serde::{Deserialize, Serialize};
use crate::sqrt;

/// plain 3-dimensional cartesian vector. Units are whatever the context provides, the position
/// and velocity vectors of this crate carry km and km/sec
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian3 {

    pub fn new (x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    pub fn zero () -> Self {
        Cartesian3 { x: 0.0, y: 0.0, z: 0.0 }
    }

    #[inline]
    pub fn length (&self) -> f64 {
        sqrt( self.x * self.x + self.y * self.y + self.z * self.z)
    }

    #[inline]
    pub fn distance_to (&self, p: &Cartesian3) -> f64 {
        (*self - *p).length()
    }
}

impl fmt::Display for Cartesian3 {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3},{:.3},{:.3})", self.x, self.y, self.z)
    }
}

impl ops::Add<Cartesian3> for Cartesian3 {
    type Output = Cartesian3;
    fn add (self, rhs: Cartesian3) -> Cartesian3 {
        Cartesian3::new( self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl ops::Sub<Cartesian3> for Cartesian3 {
    type Output = Cartesian3;
    fn sub (self, rhs: Cartesian3) -> Cartesian3 {
        Cartesian3::new( self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl ops::Mul<f64> for Cartesian3 {
    type Output = Cartesian3;
    fn mul (self, rhs: f64) -> Cartesian3 {
        Cartesian3::new( self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
