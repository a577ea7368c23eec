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

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

pub const MINUTES_PER_DAY: f64 = 1440.0;
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// julian date of a UTC instant, days plus day fraction in one f64 (valid for years 1900..2100).
/// This is the time argument the orbit propagation math runs on
pub fn julian_date (t: &DateTime<Utc>) -> f64 {
    let year = t.year() as f64;
    let month = t.month() as f64;
    let day = t.day() as f64;

    let jd = 367.0 * year
        - ((7.0 * (year + ((month + 9.0) / 12.0).floor())) * 0.25).floor()
        + (275.0 * month / 9.0).floor()
        + day + 1721013.5;

    let day_secs = t.num_seconds_from_midnight() as f64 + (t.nanosecond() as f64) * 1e-9;
    jd + day_secs / SECONDS_PER_DAY
}

/// signed minutes from t0 to t1, negative if t1 is earlier
pub fn minutes_between (t0: &DateTime<Utc>, t1: &DateTime<Utc>) -> f64 {
    let dt = t1.signed_duration_since(t0);
    match dt.num_microseconds() {
        Some(usecs) => usecs as f64 / 60.0e6,
        None => dt.num_milliseconds() as f64 / 60.0e3, // out of micro range (+/- 292000 years)
    }
}

/// parse an ISO 8601 datetime spec such as "2025-03-17T22:16:50Z"
pub fn parse_datetime (s: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_str(s, "%+") {
        Ok(dt) => Some(dt.to_utc()),
        Err(_) => None
    }
}

/* #region serde support *************************************************************************/

pub fn ser_epoch_millis<S: Serializer> (date: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64( date.timestamp_millis())
}

pub fn de_from_epoch_millis<'a,D> (deserializer: D) -> Result<DateTime<Utc>, D::Error> where D: Deserializer<'a> {
    let millis = i64::deserialize(deserializer)?;
    DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else( || de::Error::custom( format!("epoch millis out of range: {millis}")))
}

/* #endregion serde support */
