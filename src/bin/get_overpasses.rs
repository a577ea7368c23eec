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

use std::{fs, path::PathBuf};
use anyhow::{anyhow, Result};
use chrono::{DateTime, TimeDelta, Utc};
use ron;
use serde_json;
use tracing_subscriber::EnvFilter;
use odin_satpass::{
    check_cli, define_cli, load_config,
    angle::Angle90,
    datetime::parse_datetime,
    geodetic::Geodetic,
    overpass::{OverpassCalculator, OverpassConfig},
    tle::parse_tles,
};

define_cli! { ARGS [about="compute satellite overpasses of a ground observer from TLE element sets"] =
    date: Option<String> [help="ISO-8601 scan start (if not specified use current datetime)", long, short],
    window_hours: f64 [help="scan window in hours", long, default_value="24.0"],
    height: f64 [help="observer height above the mean radius sphere in km", long, default_value="0.0", allow_negative_numbers=true],
    config: Option<PathBuf> [help="pathname of overpass config to use instead of the individual options", long, short],
    min_elevation: f64 [help="minimum elevation in degrees", long, default_value="10.0", allow_negative_numbers=true],
    step_secs: f64 [help="scan step in seconds", long, default_value="30.0"],
    include_partial: bool [help="also report a pass still in progress at window end", long],
    ron: bool [help="print passes as RON", long],
    json: bool [help="print passes as JSON", long],
    lat: f64 [help="observer latitude in degrees (north positive)", allow_negative_numbers=true],
    lon: f64 [help="observer longitude in degrees (east positive)", allow_negative_numbers=true],
    tle_file: PathBuf [help="pathname of TLE file"]
}

fn main () -> Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .try_init();

    let start: DateTime<Utc> = match &ARGS.date {
        Some(spec) => parse_datetime(spec).ok_or_else( || anyhow!("not a valid ISO-8601 datetime: {spec}"))?,
        None => Utc::now()
    };
    let window = TimeDelta::milliseconds( (ARGS.window_hours * 3_600_000.0).round() as i64);
    let config = get_overpass_config()?;
    let observer = Geodetic::from_degrees( ARGS.lat, ARGS.lon, ARGS.height)?;

    let input = fs::read_to_string( &ARGS.tle_file)?;
    let tles = parse_tles( &input)?;

    for tle in &tles {
        let calc = OverpassCalculator::new( tle, observer, config.clone())?;
        let passes = calc.get_overpasses( &start, window)?;

        if ARGS.json {
            println!("{}", serde_json::to_string_pretty( &passes)?);
        } else if ARGS.ron {
            println!("{}", ron::ser::to_string_pretty( &passes, ron::ser::PrettyConfig::default().compact_structs(true))?);
        } else {
            println!("{} overpasses of sat {} for observer ({:.4},{:.4}) within {:.1} h of {}:",
                     passes.len(), tle.sat_id, ARGS.lat, ARGS.lon, ARGS.window_hours, start.format("%Y-%m-%dT%H:%M:%SZ"));
            for o in &passes { println!("    {o}") }
        }
    }

    println!("ok.");
    Ok(())
}

fn get_overpass_config () -> Result<OverpassConfig> {
    if let Some(path) = &ARGS.config {
        Ok( load_config( path)?)
    } else {
        if !(-90.0..=90.0).contains( &ARGS.min_elevation) {
            return Err( anyhow!("minimum elevation {} outside -90.0..90.0 deg", ARGS.min_elevation));
        }
        Ok( OverpassConfig {
            min_elevation: Angle90::from_degrees( ARGS.min_elevation),
            step_secs: ARGS.step_secs,
            include_partial: ARGS.include_partial,
            ..OverpassConfig::default()
        })
    }
}
