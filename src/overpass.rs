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

//! overpass (visibility window) prediction for a ground observer. This samples satellite look
//! angles over a time window at a fixed step and turns the above-threshold stretches into
//! [`Overpass`] records:
//!
//!   - AOS (acquisition of signal) is the first sampled time at which elevation meets the
//!     threshold. If the satellite is already above it at the window start, AOS is the window start
//!   - TCA (time of closest approach) is the first sampled time of maximum elevation within the
//!     pass (later samples of equal elevation do not move it)
//!   - LOS (loss of signal) is the last sampled time at which elevation still met the threshold
//!
//! all of which are accurate to the sampling step, not interpolated. A pass still in progress when
//! the window ends is dropped unless [`OverpassConfig::include_partial`] is set, in which case it
//! is reported with its `complete` flag cleared.
//!
//! Sample times at which the propagator reports a recoverable error (e.g. orbit decay) are
//! skipped, which can split or swallow passes of a decaying object but never aborts the scan.
//! Long scans can be aborted cooperatively through [`OverpassCalculator::get_overpasses_while`]

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uom::si::f64::Length;
use uom::si::length::kilometer;

use crate::angle::Angle90;
use crate::coords::{ecf_to_look_angles, eci_to_ecf, gmst, LookAngles};
use crate::datetime::{de_from_epoch_millis, ser_epoch_millis};
use crate::uom::{de_length_from_meters, kilometers, ser_length_as_meters};
use crate::distance::DEFAULT_MIN_ELEVATION_DEG;
use crate::errors::{invalid_input, OdinSatpassError, Result};
use crate::geodetic::Geodetic;
use crate::sgp4::SatelliteState;
use crate::tle::TLE;

pub const DEFAULT_STEP_SECS: f64 = 30.0;
pub const DEFAULT_MAX_PASSES: usize = 100;

/* #region config ********************************************************************************/

/// overpass scan parameters. All fields have defaults so a deserialized config only needs to name
/// what it overrides
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct OverpassConfig {
    /// minimum elevation above the horizon for the satellite to count as visible
    #[serde(default="default_min_elevation")]
    pub min_elevation: Angle90,

    /// scan step in seconds. Passes shorter than this can be missed
    #[serde(default="default_step_secs")]
    pub step_secs: f64,

    /// report a pass that is still in progress when the scan window ends
    #[serde(default)]
    pub include_partial: bool,

    /// stop scanning once this many passes were found
    #[serde(default="default_max_passes")]
    pub max_passes: usize,
}

fn default_min_elevation () -> Angle90 { Angle90::from_degrees( DEFAULT_MIN_ELEVATION_DEG) }
fn default_step_secs () -> f64 { DEFAULT_STEP_SECS }
fn default_max_passes () -> usize { DEFAULT_MAX_PASSES }

impl Default for OverpassConfig {
    fn default () -> Self {
        OverpassConfig {
            min_elevation: default_min_elevation(),
            step_secs: default_step_secs(),
            include_partial: false,
            max_passes: default_max_passes(),
        }
    }
}

/* #endregion config */

/* #region overpass records **********************************************************************/

/// one predicted visibility window of a satellite for a ground observer
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct Overpass {
    pub sat_id: u32,

    #[serde(serialize_with="ser_epoch_millis", deserialize_with="de_from_epoch_millis")]
    pub aos: DateTime<Utc>,
    #[serde(serialize_with="ser_epoch_millis", deserialize_with="de_from_epoch_millis")]
    pub tca: DateTime<Utc>,
    #[serde(serialize_with="ser_epoch_millis", deserialize_with="de_from_epoch_millis")]
    pub los: DateTime<Utc>,

    /// peak elevation of the pass, reached at `tca`
    pub max_elevation: Angle90,

    /// slant range to the satellite at `tca`
    #[serde(serialize_with="ser_length_as_meters", deserialize_with="de_length_from_meters")]
    pub tca_range: Length,

    /// false if the pass was cut short by the end of the scan window
    pub complete: bool,
}

impl Overpass {
    pub fn duration (&self) -> TimeDelta {
        self.los - self.aos
    }
}

impl fmt::Display for Overpass {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tfmt = "%Y-%m-%dT%H:%M:%SZ";
        write!( f, "Overpass( sat_id:{}, aos:{}, tca:{}, los:{}, dur:{} s, max_elev:{:.1} deg, tca_range:{:.1} km{})",
                self.sat_id,
                self.aos.format(tfmt), self.tca.format(tfmt), self.los.format(tfmt),
                self.duration().num_seconds(),
                self.max_elevation.degrees(),
                self.tca_range.get::<kilometer>(),
                if self.complete { "" } else { ", partial" })
    }
}

/* #endregion overpass records */

/* #region calculator ****************************************************************************/

/// scans the trajectory of one satellite for overpasses of one ground observer
#[derive(Debug,Clone)]
pub struct OverpassCalculator {
    observer: Geodetic,
    state: SatelliteState,
    config: OverpassConfig,
}

impl OverpassCalculator {

    /// set up a calculator for the given element set and observer position. Fails on a scan step
    /// that is non-positive, non-finite or rounds below 1 msec, an out-of-range observer position
    /// or an element set the propagator rejects
    pub fn new (tle: &TLE, observer: Geodetic, config: OverpassConfig) -> Result<OverpassCalculator> {
        if !(config.step_secs > 0.0 && config.step_secs.is_finite()) {
            return Err( invalid_input!("overpass scan step {} sec not positive", config.step_secs));
        }
        // the scan samples at whole millisecond steps - a step that rounds to none would never advance
        if ((config.step_secs * 1000.0).round() as i64) < 1 {
            return Err( invalid_input!("overpass scan step {} sec rounds below the 1 msec sampling resolution", config.step_secs));
        }
        // re-validate so raw constructed observer positions cannot sneak past range checks
        let observer = Geodetic::from_degrees( observer.latitude_deg(), observer.longitude_deg(), observer.height)?;
        let state = SatelliteState::new(tle)?;

        Ok( OverpassCalculator { observer, state, config })
    }

    pub fn sat_id (&self) -> u32 {
        self.state.sat_id
    }

    /// look angles (azimuth, elevation, slant range) from the observer to the satellite at time t
    pub fn look_angles_at (&self, t: &DateTime<Utc>) -> Result<LookAngles> {
        let state = self.state.propagate(t)?;
        let ecf = eci_to_ecf( &state.position, gmst(t));
        Ok( ecf_to_look_angles( &self.observer, &ecf))
    }

    /// find all overpasses within `window` from `start`
    pub fn get_overpasses (&self, start: &DateTime<Utc>, window: TimeDelta) -> Result<Vec<Overpass>> {
        let cancel = AtomicBool::new(false);
        self.get_overpasses_while( start, window, &cancel)
    }

    /// find all overpasses within `window` from `start`, checking `cancel` once per sample step.
    /// A raised cancel flag aborts the scan with a `CancelledError` so callers can distinguish an
    /// aborted scan from one that legitimately found nothing
    pub fn get_overpasses_while (&self, start: &DateTime<Utc>, window: TimeDelta, cancel: &AtomicBool) -> Result<Vec<Overpass>> {
        if window <= TimeDelta::zero() {
            return Err( invalid_input!("overpass scan window {} not positive", window));
        }
        let step = TimeDelta::milliseconds( (self.config.step_secs * 1000.0).round() as i64);
        let t_end = *start + window;
        let min_el = self.config.min_elevation;

        let mut passes: Vec<Overpass> = Vec::new();

        let mut in_pass = false;
        let mut aos = *start;
        let mut tca = *start;
        let mut los = *start;
        let mut max_el = min_el;
        let mut tca_range_km = 0.0;

        let mut t = *start;
        while t <= t_end {
            if cancel.load( Ordering::Relaxed) {
                return Err( OdinSatpassError::CancelledError( format!("overpass scan for sat {} at {}", self.sat_id(), t)));
            }

            match self.look_angles_at(&t) {
                Ok(la) => {
                    if la.elevation >= min_el {
                        if !in_pass {
                            in_pass = true;
                            aos = t;
                            tca = t;
                            max_el = la.elevation;
                            tca_range_km = la.range;
                        } else if la.elevation > max_el {
                            tca = t;
                            max_el = la.elevation;
                            tca_range_km = la.range;
                        }
                        los = t;
                    } else if in_pass {
                        in_pass = false;
                        passes.push( self.overpass( aos, tca, los, max_el, tca_range_km, true));
                        if passes.len() >= self.config.max_passes {
                            return Ok(passes)
                        }
                    }
                }
                Err(OdinSatpassError::PropagationError(msg)) => {
                    debug!("skipping overpass sample for sat {} at {}: {}", self.sat_id(), t, msg);
                }
                Err(e) => return Err(e),
            }
            t += step;
        }

        if in_pass && self.config.include_partial {
            passes.push( self.overpass( aos, tca, los, max_el, tca_range_km, false));
        }
        Ok(passes)
    }

    fn overpass (&self, aos: DateTime<Utc>, tca: DateTime<Utc>, los: DateTime<Utc>,
                 max_elevation: Angle90, tca_range_km: f64, complete: bool) -> Overpass {
        Overpass {
            sat_id: self.sat_id(),
            aos, tca, los,
            max_elevation,
            tca_range: kilometers(tca_range_km),
            complete,
        }
    }
}

/* #endregion calculator */
