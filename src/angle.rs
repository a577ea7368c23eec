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

//! self-normalizing angle types in degrees. These are for the user facing boundary (configs,
//! serialized records, look angle reports) - the numeric internals of this crate work on raw
//! f64 radians

use std::{fmt, marker::PhantomData, cmp};

#[inline]
pub fn normalize_90 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

pub trait AngleKind {
    fn normalize (v: f64) -> f64;
    fn fmt_display (value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}deg", value) }
    fn fmt_debug (value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// elevation angles and other values within [-90..90] degrees
#[derive(Debug,Clone,Copy)]
pub struct HalfPiKind {}
impl AngleKind for HalfPiKind {
    fn normalize (v: f64) -> f64 { normalize_90(v) }
    fn fmt_debug (value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}deg", value) }
}

/// azimuth angles and other values within [0..360) degrees
#[derive(Debug,Clone,Copy)]
pub struct FullCircleKind {}
impl AngleKind for FullCircleKind {
    fn normalize (v: f64) -> f64 { normalize_360(v) }
    fn fmt_debug (value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}deg", value) }
}

#[derive(Copy, Clone)]
pub struct NormalizedAngle<K> where K: AngleKind {
    value: f64, // always kept normalized degrees
    kind: PhantomData<K>,
}

impl<K> NormalizedAngle<K> where K: AngleKind {
    #[inline]
    pub fn from_degrees (deg: f64) -> Self {
        NormalizedAngle { value: K::normalize(deg), kind: PhantomData }
    }

    #[inline]
    pub fn from_radians (rad: f64) -> Self {
        NormalizedAngle { value: K::normalize( rad.to_degrees()), kind: PhantomData }
    }

    #[inline] pub fn degrees (&self) -> f64 { self.value }
    #[inline] pub fn radians (&self) -> f64 { self.value.to_radians() }

    #[inline] pub fn sin (&self) -> f64 { self.value.to_radians().sin() }
    #[inline] pub fn cos (&self) -> f64 { self.value.to_radians().cos() }
}

pub type Angle90 = NormalizedAngle<HalfPiKind>;
pub type Angle360 = NormalizedAngle<FullCircleKind>;

//--- formatting

impl<K> fmt::Display for NormalizedAngle<K> where K: AngleKind {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { K::fmt_display( self.value, f) }
}

impl<K> fmt::Debug for NormalizedAngle<K> where K: AngleKind {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { K::fmt_debug( self.value, f) }
}

impl<K> cmp::PartialEq for NormalizedAngle<K> where K: AngleKind {
    fn eq (&self, other: &Self) -> bool { self.value == other.value }
}

impl<K> cmp::PartialOrd for NormalizedAngle<K> where K: AngleKind {
    fn partial_cmp (&self, other: &Self) -> Option<cmp::Ordering> { self.value.partial_cmp( &other.value) }
}

//--- serde support

use serde::ser::{Serialize as SerializeTrait, Serializer};
use serde::de::{self, Deserialize as DeserializeTrait, Deserializer, Visitor};

impl<K> SerializeTrait for NormalizedAngle<K> where K: AngleKind {
    fn serialize<S> (&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_f64( self.value)
    }
}

/// angles deserialize from plain f64 degrees but reject values outside the kind range instead
/// of silently wrapping them
macro_rules! define_angle_deserializer {
    ($angle_type: ident, $min:literal, $max:literal) => {
        impl<'de> DeserializeTrait<'de> for $angle_type {
            fn deserialize<D> (deserializer: D) -> Result<$angle_type, D::Error> where D: Deserializer<'de> {
                struct AngleVisitor;

                impl<'de> Visitor<'de> for AngleVisitor {
                    type Value = $angle_type;

                    fn expecting (&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        let msg = format!("expecting floating point degrees between [{}..{}]", $min, $max);
                        formatter.write_str(&msg)
                    }

                    fn visit_f64<E> (self, value: f64) -> Result<Self::Value, E> where E: de::Error {
                        if value >= $min && value <= $max {
                            Ok($angle_type::from_degrees(value))
                        } else {
                            Err(E::custom(format!("degrees out of range: {}", value)))
                        }
                    }
                }

                deserializer.deserialize_f64( AngleVisitor)
            }
        }
    };
}

define_angle_deserializer!{ Angle90, -90.0, 90.0 }
define_angle_deserializer!{ Angle360, 0.0, 360.0 }
