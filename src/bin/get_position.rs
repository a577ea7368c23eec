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
use chrono::{DateTime, Utc};
use serde_json;
use tracing_subscriber::EnvFilter;
use odin_satpass::{
    check_cli, define_cli,
    angle::Angle90,
    coords::{ecf_to_geodetic, ecf_to_look_angles, eci_to_ecf, gmst},
    datetime::parse_datetime,
    distance::{bearing, is_visible, surface_distance, three_d_distance, DEFAULT_MIN_ELEVATION_DEG},
    geodetic::Geodetic,
    sgp4::SatelliteState,
    tle::parse_tles,
};

define_cli! { ARGS [about="propagate TLE element sets and print satellite positions, ground points and observer look angles"] =
    date: Option<String> [help="ISO-8601 datetime to propagate to (if not specified use current datetime)", long, short],
    lat: Option<f64> [help="observer latitude in degrees", long, allow_negative_numbers=true],
    lon: Option<f64> [help="observer longitude in degrees", long, allow_negative_numbers=true],
    height: f64 [help="observer height above the mean radius sphere in km", long, default_value="0.0", allow_negative_numbers=true],
    json: bool [help="print states as JSON", long],
    tle_file: PathBuf [help="pathname of TLE file"]
}

fn main () -> Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .try_init();

    let t: DateTime<Utc> = match &ARGS.date {
        Some(spec) => parse_datetime(spec).ok_or_else( || anyhow!("not a valid ISO-8601 datetime: {spec}"))?,
        None => Utc::now()
    };
    let observer = get_observer()?;

    let input = fs::read_to_string( &ARGS.tle_file)?;
    for tle in parse_tles( &input)? {
        let state = SatelliteState::new( &tle)?;
        match state.propagate( &t) {
            Ok(os) => {
                if ARGS.json {
                    println!("{}", serde_json::to_string_pretty( &os)?);
                    continue;
                }
                let orbit_kind = if state.is_deep_space() { "deep space" } else { "near earth" };
                println!("sat {} ({}, period {:.1} min):", tle.sat_id, orbit_kind, state.period_minutes());
                println!("    {os}");

                let ecf = eci_to_ecf( &os.position, gmst( &t));
                let gp = ecf_to_geodetic( &ecf)?;
                println!("    {gp}");

                if let Some(obs) = &observer {
                    let la = ecf_to_look_angles( obs, &ecf);
                    println!("    {la}");
                    println!("    ground track: bearing {:.1} deg, surface dist {:.1} km, 3d dist {:.1} km, visible: {}",
                             bearing( obs, &gp).degrees(), surface_distance( obs, &gp), three_d_distance( obs, &gp),
                             is_visible( obs, &gp, Angle90::from_degrees( DEFAULT_MIN_ELEVATION_DEG)));
                }
            }
            Err(e) => println!("sat {}: {e}", tle.sat_id)
        }
    }

    println!("ok.");
    Ok(())
}

fn get_observer () -> Result<Option<Geodetic>> {
    match (ARGS.lat, ARGS.lon) {
        (Some(lat), Some(lon)) => Ok( Some( Geodetic::from_degrees( lat, lon, ARGS.height)?)),
        (None, None) => Ok( None),
        _ => Err( anyhow!("--lat and --lon have to be given together"))
    }
}
