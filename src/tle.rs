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

//! support for parsing NORAD two-line element sets (TLEs).
//!
//! parsing is strict - both lines have to be 69 columns, carry matching catalog numbers and a
//! valid mod-10 checksum. A TLE that fails any of these is rejected as a whole since none of its
//! fields can be trusted. Values are kept in the units the format encodes (degrees, rev/day),
//! conversion to propagator units happens in [`crate::sgp4`]

use std::{fmt, ops::Range, sync::LazyLock};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use crate::{
    datetime::{de_from_epoch_millis, julian_date, ser_epoch_millis, MINUTES_PER_DAY, SECONDS_PER_DAY},
    errors::{tle_error, Result},
};

pub const TLE_LINE_LEN: usize = 69;

static TLE_LINE_RE: LazyLock<Regex> = LazyLock::new( || Regex::new( r"(?m)^([12] .{67})\s*?$").unwrap());

/// a parsed two-line element set, in the units of the wire format (angles in degrees, mean
/// motion in rev/day, drag term in 1/earth-radii)
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct TLE {
    pub sat_id: u32,             // NORAD catalog number
    pub classification: char,
    pub intl_designator: String, // launch year/number/piece, e.g. "98067A"

    #[serde(serialize_with="ser_epoch_millis", deserialize_with="de_from_epoch_millis")]
    pub epoch: DateTime<Utc>,
    pub epoch_jd: f64,           // julian date of epoch

    pub mean_motion_dot: f64,    // first derivative field (n-dot/2) in rev/day^2
    pub mean_motion_ddot: f64,   // second derivative field (n-ddot/6) in rev/day^3
    pub bstar: f64,              // drag term in 1/earth-radii
    pub element_set: u32,

    pub inclination: f64,        // deg
    pub raan: f64,               // right ascension of ascending node in deg
    pub eccentricity: f64,
    pub arg_of_perigee: f64,     // deg
    pub mean_anomaly: f64,       // deg
    pub mean_motion: f64,        // rev/day
    pub rev_number: u32,         // revolution number at epoch
}

impl TLE {

    /// parse a TLE from its two lines. Line input may carry trailing whitespace but is
    /// otherwise held to the fixed 69 column format
    pub fn from_lines (line1: &str, line2: &str) -> Result<TLE> {
        let l1 = check_line( 1, line1)?;
        let l2 = check_line( 2, line2)?;

        let sat_id: u32 = parse_num( l1, 2..7, "catalog number")?;
        let sat_id2: u32 = parse_num( l2, 2..7, "catalog number")?;
        if sat_id != sat_id2 {
            return Err( tle_error!("catalog number mismatch between lines: {} / {}", sat_id, sat_id2));
        }

        let classification = l1.as_bytes()[7] as char;
        let intl_designator = l1[9..17].trim().to_string();

        let epoch = parse_epoch( l1)?;
        let epoch_jd = julian_date( &epoch);

        let mean_motion_dot: f64 = parse_num( l1, 33..43, "mean motion derivative")?;
        let mean_motion_ddot = parse_exp_format( &l1[44..52], "mean motion 2nd derivative")?;
        let bstar = parse_exp_format( &l1[53..61], "bstar")?;
        let element_set = parse_num_or_zero( l1, 64..68);

        let inclination: f64 = parse_num( l2, 8..16, "inclination")?;
        let raan: f64 = parse_num( l2, 17..25, "raan")?;
        let eccentricity: f64 = format!("0.{}", l2[26..33].trim())
            .parse().map_err( |_| tle_error!("malformed eccentricity field: '{}'", &l2[26..33]))?;
        let arg_of_perigee: f64 = parse_num( l2, 34..42, "argument of perigee")?;
        let mean_anomaly: f64 = parse_num( l2, 43..51, "mean anomaly")?;
        let mean_motion: f64 = parse_num( l2, 52..63, "mean motion")?;
        let rev_number = parse_num_or_zero( l2, 63..68);

        Ok( TLE {
            sat_id, classification, intl_designator, epoch, epoch_jd,
            mean_motion_dot, mean_motion_ddot, bstar, element_set,
            inclination, raan, eccentricity, arg_of_perigee, mean_anomaly, mean_motion, rev_number,
        })
    }

    /// the mean orbit period in minutes
    pub fn period_minutes (&self) -> f64 {
        MINUTES_PER_DAY / self.mean_motion
    }
}

impl fmt::Display for TLE {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TLE( sat_id:{}, epoch:{})", self.sat_id, self.epoch.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}

/// extract all TLEs from text that may also contain satellite name lines, blank lines or other
/// decoration (3LE files, celestrak downloads). Lines that do look like element lines but fail
/// validation poison the whole input - a file with broken checksums should be re-fetched, not
/// silently thinned out
pub fn parse_tles (text: &str) -> Result<Vec<TLE>> {
    let mut tles = Vec::new();
    let mut pending_line1: Option<&str> = None;

    for cap in TLE_LINE_RE.captures_iter( text) {
        if let Some(m) = cap.get(1) {
            let line = m.as_str();
            if line.starts_with('1') {
                pending_line1 = Some(line);
            } else if let Some(line1) = pending_line1.take() {
                tles.push( TLE::from_lines( line1, line)?);
            }
        }
    }

    if tles.is_empty() {
        return Err( tle_error!("no TLE line pairs in input"));
    }
    Ok(tles)
}

/// mod-10 checksum over the first 68 columns of an element line: digits count their value,
/// minus signs count 1, everything else 0
pub fn line_checksum (line: &str) -> u32 {
    line.bytes().take(68).fold( 0u32, |acc, b| {
        acc + match b {
            b'0'..=b'9' => (b - b'0') as u32,
            b'-' => 1,
            _ => 0,
        }
    }) % 10
}

fn check_line<'a> (line_no: u32, line: &'a str) -> Result<&'a str> {
    let line = line.trim_end();
    if line.len() != TLE_LINE_LEN || !line.is_ascii() {
        return Err( tle_error!("line {} has wrong length {} (expected {} columns)", line_no, line.len(), TLE_LINE_LEN));
    }

    let bs = line.as_bytes();
    if bs[0] != b'0' + line_no as u8 || bs[1] != b' ' {
        return Err( tle_error!("not a TLE line {}: '{}'", line_no, line));
    }

    let checksum = (bs[68] as char).to_digit(10)
        .ok_or_else( || tle_error!("line {} has non-digit checksum column", line_no))?;
    let computed = line_checksum( line);
    if checksum != computed {
        return Err( tle_error!("line {} checksum failure ({} != {})", line_no, computed, checksum));
    }

    Ok(line)
}

fn parse_num<T: std::str::FromStr> (line: &str, range: Range<usize>, what: &str) -> Result<T> {
    let field = &line[range];
    field.trim().parse().map_err( |_| tle_error!("malformed {} field: '{}'", what, field))
}

fn parse_num_or_zero (line: &str, range: Range<usize>) -> u32 {
    line[range].trim().parse().unwrap_or(0)
}

/// parse the assumed-decimal exponent fields (bstar, 2nd derivative): "[+-]NNNNN[+-]E" encodes
/// [+-]0.NNNNN * 10^[+-]E
fn parse_exp_format (field: &str, what: &str) -> Result<f64> {
    let s = field.trim();
    if s.is_empty() { return Ok(0.0) }

    let (sign, rest) = match s.as_bytes()[0] {
        b'-' => (-1.0, &s[1..]),
        b'+' => (1.0, &s[1..]),
        _ => (1.0, s),
    };

    let (mantissa_str, exp) = match rest.rfind( ['+','-']) {
        Some(pos) if pos > 0 => {
            let exp: i32 = rest[pos..].parse().map_err( |_| tle_error!("malformed {} exponent: '{}'", what, field))?;
            (&rest[..pos], exp)
        }
        _ => (rest, 0),
    };

    let mantissa: f64 = format!("0.{}", mantissa_str.trim())
        .parse().map_err( |_| tle_error!("malformed {} field: '{}'", what, field))?;

    Ok( sign * mantissa * 10f64.powi(exp))
}

/// TLE epochs encode a 2-digit year (wrapping at 57, the sputnik era convention) plus a
/// fractional day-of-year
fn parse_epoch (l1: &str) -> Result<DateTime<Utc>> {
    let yy: i32 = parse_num( l1, 18..20, "epoch year")?;
    let year = if yy < 57 { 2000 + yy } else { 1900 + yy };

    let epoch_day: f64 = parse_num( l1, 20..32, "epoch day")?;
    let doy = epoch_day.floor();
    let day_frac = epoch_day - doy;

    let date = NaiveDate::from_yo_opt( year, doy as u32)
        .ok_or_else( || tle_error!("epoch day {} out of range for year {}", epoch_day, year))?;

    let frac_nanos = (day_frac * SECONDS_PER_DAY * 1e9).round() as i64;
    Ok( date.and_time( NaiveTime::MIN).and_utc() + TimeDelta::nanoseconds( frac_nanos))
}
