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

//! the SGP4/SDP4 orbit propagator after Hoots/Roehrich (Spacetrack Report #3) in the consolidated
//! Vallado et al. 2006 revision. This computes earth centered inertial (TEME frame) position and
//! velocity of an earth orbiting object from its general perturbation mean element set at
//! arbitrary minutes-since-epoch offsets. Near earth objects get the atmospheric drag and J2..J4
//! secular/periodic terms, objects with orbital periods of 225 minutes and up additionally get the
//! lunar/solar and resonance handling of the sdp4 module.
//!
//! [`SatelliteState`] holds the element set together with all derived propagation coefficients and
//! is immutable once initialized, which makes [`SatelliteState::propagate`] a pure function - safe
//! to call from several threads and insensitive to call order

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    abs, atan2, cos, sin, sqrt, PI, TWO_PI,
    cartesian3::Cartesian3,
    coords::gstime,
    datetime::{de_from_epoch_millis, minutes_between, ser_epoch_millis},
    errors::{prop_error, Result},
    sdp4::{DeepSpace, DsInitArgs, DsPeriodics, DsSecular},
    tle::TLE,
};

const X2O3: f64 = 2.0 / 3.0;

// divisor guard for xlcof at inclination 180 deg
const TEMP4: f64 = 1.5e-12;

/// orbital periods of 225 min and up get the deep space perturbation treatment
pub const DEEP_SPACE_PERIOD_MIN: f64 = 225.0;

/* #region gravity models ************************************************************************/

/// the geopotential model the propagator constants are derived from. TLE mean elements are fitted
/// against wgs72, which therefore is the default. Use [`GravModel::Wgs84`] only if the element
/// source is known to use it
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
pub enum GravModel {
    Wgs72Old,
    #[default]
    Wgs72,
    Wgs84,
}

/// gravitational and geopotential constants of a [`GravModel`]
#[derive(Debug,Clone,Copy)]
pub struct GravConst {
    pub mu: f64,              // km^3/s^2
    pub radius_earth_km: f64,
    pub xke: f64,             // sqrt(mu) in (earth radii)^1.5 per min
    pub j2: f64,
    pub j3: f64,
    pub j4: f64,
    pub j3oj2: f64,
}

impl GravConst {
    pub fn for_model (model: GravModel) -> GravConst {
        match model {
            GravModel::Wgs72Old => {
                let j2 = 0.001082616;
                let j3 = -0.00000253881;
                GravConst {
                    mu: 398600.79964,
                    radius_earth_km: 6378.135,
                    xke: 0.0743669161, // the historical STR#3 value, not derived from mu
                    j2, j3,
                    j4: -0.00000165597,
                    j3oj2: j3 / j2,
                }
            }
            GravModel::Wgs72 => {
                let mu = 398600.8;
                let radius_earth_km = 6378.135;
                let j2 = 0.001082616;
                let j3 = -0.00000253881;
                GravConst {
                    mu, radius_earth_km,
                    xke: 60.0 / sqrt( radius_earth_km * radius_earth_km * radius_earth_km / mu),
                    j2, j3,
                    j4: -0.00000165597,
                    j3oj2: j3 / j2,
                }
            }
            GravModel::Wgs84 => {
                let mu = 398600.5;
                let radius_earth_km = 6378.137;
                let j2 = 0.00108262998905;
                let j3 = -0.00000253215306;
                GravConst {
                    mu, radius_earth_km,
                    xke: 60.0 / sqrt( radius_earth_km * radius_earth_km * radius_earth_km / mu),
                    j2, j3,
                    j4: -0.00000161098761,
                    j3oj2: j3 / j2,
                }
            }
        }
    }
}

/* #endregion gravity models */

/// earth centered inertial (TEME) position and velocity at an absolute time
#[derive(Debug,Clone,Copy,Serialize,Deserialize)]
pub struct OrbitalState {
    #[serde(serialize_with="ser_epoch_millis", deserialize_with="de_from_epoch_millis")]
    pub time: DateTime<Utc>,
    pub position: Cartesian3, // km
    pub velocity: Cartesian3, // km/s
}

impl fmt::Display for OrbitalState {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "OrbitalState( time:{}, r:{} km, v:{} km/s)",
                self.time.format("%Y-%m-%dT%H:%M:%S%.3fZ"), self.position, self.velocity)
    }
}

/// a TLE mean element set with all propagation coefficients derived from it, ready to be
/// propagated to arbitrary times. Initialization does all the heavy lifting once so that
/// [`SatelliteState::propagate`] stays cheap and free of mutable state
#[derive(Debug,Clone)]
pub struct SatelliteState {
    pub sat_id: u32,
    pub epoch: DateTime<Utc>,
    pub epoch_jd: f64,

    gc: GravConst,

    // mean elements in radians and radians/min
    bstar: f64,
    ecco: f64,
    argpo: f64,
    inclo: f64,
    mo: f64,
    no_unkozai: f64,
    nodeo: f64,

    // near earth coefficients
    isimp: bool,
    aycof: f64, xlcof: f64,
    con41: f64, x1mth2: f64, x7thm1: f64,
    cc1: f64, cc4: f64, cc5: f64,
    d2: f64, d3: f64, d4: f64,
    delmo: f64, eta: f64, sinmao: f64,
    argpdot: f64, mdot: f64, nodedot: f64, nodecf: f64,
    omgcof: f64, xmcof: f64,
    t2cof: f64, t3cof: f64, t4cof: f64, t5cof: f64,

    deep: Option<DeepSpace>,
}

impl SatelliteState {

    /// initialize from a TLE with the default wgs72 gravity model
    pub fn new (tle: &TLE) -> Result<SatelliteState> {
        Self::with_model( tle, GravModel::default())
    }

    /// initialize from a TLE (sgp4init). This derives every time-independent coefficient of the
    /// propagation from the mean elements, including the deep space sets where the orbital period
    /// calls for them
    pub fn with_model (tle: &TLE, model: GravModel) -> Result<SatelliteState> {
        let gc = GravConst::for_model(model);

        if tle.mean_motion <= 0.0 {
            return Err( prop_error!("sat {}: mean motion {} rev/day not positive", tle.sat_id, tle.mean_motion));
        }
        if !(0.0..1.0).contains( &tle.eccentricity) {
            return Err( prop_error!("sat {}: eccentricity {} outside 0.0..1.0", tle.sat_id, tle.eccentricity));
        }

        let xpdotp = 1440.0 / TWO_PI; // rev/day per rad/min
        let no_kozai = tle.mean_motion / xpdotp;
        let bstar = tle.bstar;
        let ecco = tle.eccentricity;
        let argpo = tle.arg_of_perigee.to_radians();
        let inclo = tle.inclination.to_radians();
        let mo = tle.mean_anomaly.to_radians();
        let nodeo = tle.raan.to_radians();

        let epoch1950 = tle.epoch_jd - 2433281.5; // days since 1949-12-31 00:00 UT
        let gsto = gstime( tle.epoch_jd);

        //--- un-kozai the mean motion and compute the orbit geometry constants (initl)
        let eccsq = ecco * ecco;
        let omeosq = 1.0 - eccsq;
        let rteosq = sqrt(omeosq);
        let cosio = cos(inclo);
        let cosio2 = cosio * cosio;

        let ak = (gc.xke / no_kozai).powf(X2O3);
        let d1 = 0.75 * gc.j2 * (3.0 * cosio2 - 1.0) / (rteosq * omeosq);
        let mut del = d1 / (ak * ak);
        let adel = ak * (1.0 - del * del - del * (1.0 / 3.0 + 134.0 * del * del / 81.0));
        del = d1 / (adel * adel);
        let no_unkozai = no_kozai / (1.0 + del);

        let ao = (gc.xke / no_unkozai).powf(X2O3);
        let sinio = sin(inclo);
        let po = ao * omeosq;
        let con42 = 1.0 - 5.0 * cosio2;
        let con41 = -con42 - cosio2 - cosio2;
        let posq = po * po;
        let rp = ao * (1.0 - ecco);

        //--- the near earth coefficient set (sgp4init)
        let ss = 78.0 / gc.radius_earth_km + 1.0;
        let qzms2t = ((120.0 - 78.0) / gc.radius_earth_km).powi(4);

        // the simplified drag expansion applies below 220 km perigee height
        let isimp = rp < 220.0 / gc.radius_earth_km + 1.0;

        let mut sfour = ss;
        let mut qzms24 = qzms2t;
        let perige = (rp - 1.0) * gc.radius_earth_km;
        if perige < 156.0 {
            sfour = perige - 78.0;
            if perige < 98.0 { sfour = 20.0 }
            qzms24 = ((120.0 - sfour) / gc.radius_earth_km).powi(4);
            sfour = sfour / gc.radius_earth_km + 1.0;
        }
        let pinvsq = 1.0 / posq;

        let tsi = 1.0 / (ao - sfour);
        let eta = ao * ecco * tsi;
        let etasq = eta * eta;
        let eeta = ecco * eta;
        let psisq = abs( 1.0 - etasq);
        let coef = qzms24 * tsi.powi(4);
        let coef1 = coef / psisq.powf(3.5);
        let cc2 = coef1 * no_unkozai
            * (ao * (1.0 + 1.5 * etasq + eeta * (4.0 + etasq))
                + 0.375 * gc.j2 * tsi / psisq * con41 * (8.0 + 3.0 * etasq * (8.0 + etasq)));
        let cc1 = bstar * cc2;
        let mut cc3 = 0.0;
        if ecco > 1.0e-4 {
            cc3 = -2.0 * coef * tsi * gc.j3oj2 * no_unkozai * sinio / ecco;
        }
        let x1mth2 = 1.0 - cosio2;
        let cc4 = 2.0 * no_unkozai * coef1 * ao * omeosq
            * (eta * (2.0 + 0.5 * etasq) + ecco * (0.5 + 2.0 * etasq)
                - gc.j2 * tsi / (ao * psisq)
                    * (-3.0 * con41 * (1.0 - 2.0 * eeta + etasq * (1.5 - 0.5 * eeta))
                        + 0.75 * x1mth2 * (2.0 * etasq - eeta * (1.0 + etasq)) * cos( 2.0 * argpo)));
        let cc5 = 2.0 * coef1 * ao * omeosq * (1.0 + 2.75 * (etasq + eeta) + eeta * etasq);

        let cosio4 = cosio2 * cosio2;
        let temp1 = 1.5 * gc.j2 * pinvsq * no_unkozai;
        let temp2 = 0.5 * temp1 * gc.j2 * pinvsq;
        let temp3 = -0.46875 * gc.j4 * pinvsq * pinvsq * no_unkozai;
        let mdot = no_unkozai + 0.5 * temp1 * rteosq * con41
            + 0.0625 * temp2 * rteosq * (13.0 - 78.0 * cosio2 + 137.0 * cosio4);
        let argpdot = -0.5 * temp1 * con42
            + 0.0625 * temp2 * (7.0 - 114.0 * cosio2 + 395.0 * cosio4)
            + temp3 * (3.0 - 36.0 * cosio2 + 49.0 * cosio4);
        let xhdot1 = -temp1 * cosio;
        let nodedot = xhdot1
            + (0.5 * temp2 * (4.0 - 19.0 * cosio2) + 2.0 * temp3 * (3.0 - 7.0 * cosio2)) * cosio;
        let xpidot = argpdot + nodedot;

        let omgcof = bstar * cc3 * cos(argpo);
        let mut xmcof = 0.0;
        if ecco > 1.0e-4 {
            xmcof = -X2O3 * coef * bstar / eeta;
        }
        let nodecf = 3.5 * omeosq * xhdot1 * cc1;
        let t2cof = 1.5 * cc1;
        let xlcof = if abs( cosio + 1.0) > 1.5e-12 {
            -0.25 * gc.j3oj2 * sinio * (3.0 + 5.0 * cosio) / (1.0 + cosio)
        } else {
            -0.25 * gc.j3oj2 * sinio * (3.0 + 5.0 * cosio) / TEMP4
        };
        let aycof = -0.5 * gc.j3oj2 * sinio;
        let delmo = (1.0 + eta * cos(mo)).powi(3);
        let sinmao = sin(mo);
        let x7thm1 = 7.0 * cosio2 - 1.0;

        //--- deep space initialization
        let mut deep = None;
        let mut isimp = isimp;
        if TWO_PI / no_unkozai >= DEEP_SPACE_PERIOD_MIN {
            isimp = true;
            let (periodics, common) = DsPeriodics::compute( epoch1950, ecco, argpo, 0.0, inclo, nodeo, no_unkozai);
            let secular = DsSecular::init( &common, &DsInitArgs {
                xke: gc.xke, ecco, eccsq, inclo,
                argpo, argpdot, mo, mdot,
                no: no_unkozai, nodeo, nodedot, xpidot, gsto,
            });
            deep = Some( DeepSpace { periodics, secular });
        }

        //--- higher order drag terms for perigees above 220 km
        let (mut d2, mut d3, mut d4) = (0.0, 0.0, 0.0);
        let (mut t3cof, mut t4cof, mut t5cof) = (0.0, 0.0, 0.0);
        if !isimp {
            let cc1sq = cc1 * cc1;
            d2 = 4.0 * ao * tsi * cc1sq;
            let temp = d2 * tsi * cc1 / 3.0;
            d3 = (17.0 * ao + sfour) * temp;
            d4 = 0.5 * temp * ao * tsi * (221.0 * ao + 31.0 * sfour) * cc1;
            t3cof = d2 + 2.0 * cc1sq;
            t4cof = 0.25 * (3.0 * d3 + cc1 * (12.0 * d2 + 10.0 * cc1sq));
            t5cof = 0.2 * (3.0 * d4 + 12.0 * cc1 * d3 + 6.0 * d2 * d2 + 15.0 * cc1sq * (2.0 * d2 + cc1sq));
        }

        Ok( SatelliteState {
            sat_id: tle.sat_id,
            epoch: tle.epoch,
            epoch_jd: tle.epoch_jd,
            gc,
            bstar, ecco, argpo, inclo, mo, no_unkozai, nodeo,
            isimp,
            aycof, xlcof,
            con41, x1mth2, x7thm1,
            cc1, cc4, cc5,
            d2, d3, d4,
            delmo, eta, sinmao,
            argpdot, mdot, nodedot, nodecf,
            omgcof, xmcof,
            t2cof, t3cof, t4cof, t5cof,
            deep,
        })
    }

    /// whether this element set gets the deep space perturbation treatment
    pub fn is_deep_space (&self) -> bool {
        self.deep.is_some()
    }

    /// the (un-kozai'd) orbital period in minutes
    pub fn period_minutes (&self) -> f64 {
        TWO_PI / self.no_unkozai
    }

    /// propagate to an absolute UTC time
    pub fn propagate (&self, t: &DateTime<Utc>) -> Result<OrbitalState> {
        let tsince = minutes_between( &self.epoch, t);
        let (position, velocity) = self.propagate_tsince(tsince)?;
        Ok( OrbitalState { time: *t, position, velocity })
    }

    /// propagate to an offset from the element epoch, in minutes (negative offsets run the model
    /// backwards). Returns TEME position (km) and velocity (km/s), or a recoverable
    /// `PropagationError` should the mean elements decay or leave their physical range at this
    /// time. An error for one offset does not preclude valid states at other offsets
    pub fn propagate_tsince (&self, tsince: f64) -> Result<(Cartesian3, Cartesian3)> {
        let gc = &self.gc;
        let vkmpersec = gc.radius_earth_km * gc.xke / 60.0;
        let t = tsince;

        //--- secular gravity and atmospheric drag
        let xmdf = self.mo + self.mdot * t;
        let argpdf = self.argpo + self.argpdot * t;
        let nodedf = self.nodeo + self.nodedot * t;
        let mut argpm = argpdf;
        let mut mm = xmdf;
        let t2 = t * t;
        let mut nodem = nodedf + self.nodecf * t2;
        let mut tempa = 1.0 - self.cc1 * t;
        let mut tempe = self.bstar * self.cc4 * t;
        let mut templ = self.t2cof * t2;

        if !self.isimp {
            let delomg = self.omgcof * t;
            let delmtemp = 1.0 + self.eta * cos(xmdf);
            let delm = self.xmcof * (delmtemp * delmtemp * delmtemp - self.delmo);
            let temp = delomg + delm;
            mm = xmdf + temp;
            argpm = argpdf - temp;
            let t3 = t2 * t;
            let t4 = t3 * t;
            tempa = tempa - self.d2 * t2 - self.d3 * t3 - self.d4 * t4;
            tempe += self.bstar * self.cc5 * (sin(mm) - self.sinmao);
            templ = templ + self.t3cof * t3 + t4 * (self.t4cof + t * self.t5cof);
        }

        let mut nm = self.no_unkozai;
        let mut em = self.ecco;
        let mut inclm = self.inclo;

        if let Some(deep) = &self.deep {
            (em, argpm, inclm, nodem, mm, nm) = deep.secular.apply( t, em, argpm, inclm, nodem, mm, nm);
        }

        if nm <= 0.0 {
            return Err( prop_error!("sat {}: mean motion {} not positive at tsince {:.1} min", self.sat_id, nm, t));
        }
        let am = (gc.xke / nm).powf(X2O3) * tempa * tempa;
        nm = gc.xke / am.powf(1.5);
        em -= tempe;
        if em >= 1.0 || em < -0.001 {
            return Err( prop_error!("sat {}: mean eccentricity {} outside 0.0..1.0 at tsince {:.1} min", self.sat_id, em, t));
        }
        if em < 1.0e-6 { em = 1.0e-6 }
        mm += self.no_unkozai * templ;
        let mut xlm = mm + argpm + nodem;

        nodem = if nodem >= 0.0 { nodem % TWO_PI } else { -((-nodem) % TWO_PI) };
        argpm %= TWO_PI;
        xlm %= TWO_PI;
        mm = (xlm - argpm - nodem) % TWO_PI;

        let sinim = sin(inclm);
        let cosim = cos(inclm);

        //--- lunar/solar periodics
        let mut ep = em;
        let mut xincp = inclm;
        let mut argpp = argpm;
        let mut nodep = nodem;
        let mut mp = mm;
        let mut sinip = sinim;
        let mut cosip = cosim;

        let (aycof, xlcof, con41, x1mth2, x7thm1);
        if let Some(deep) = &self.deep {
            (ep, xincp, nodep, argpp, mp) = deep.periodics.apply( t, ep, xincp, nodep, argpp, mp);
            if xincp < 0.0 {
                xincp = -xincp;
                nodep += PI;
                argpp -= PI;
            }
            if ep < 0.0 || ep > 1.0 {
                return Err( prop_error!("sat {}: perturbed eccentricity {} outside 0.0..1.0 at tsince {:.1} min", self.sat_id, ep, t));
            }
            // inclination dependent factors have to track the perturbed inclination
            sinip = sin(xincp);
            cosip = cos(xincp);
            aycof = -0.5 * gc.j3oj2 * sinip;
            xlcof = if abs( cosip + 1.0) > 1.5e-12 {
                -0.25 * gc.j3oj2 * sinip * (3.0 + 5.0 * cosip) / (1.0 + cosip)
            } else {
                -0.25 * gc.j3oj2 * sinip * (3.0 + 5.0 * cosip) / TEMP4
            };
            let cosisq = cosip * cosip;
            con41 = 3.0 * cosisq - 1.0;
            x1mth2 = 1.0 - cosisq;
            x7thm1 = 7.0 * cosisq - 1.0;
        } else {
            aycof = self.aycof;
            xlcof = self.xlcof;
            con41 = self.con41;
            x1mth2 = self.x1mth2;
            x7thm1 = self.x7thm1;
        }

        //--- long period periodics
        let axnl = ep * cos(argpp);
        let temp = 1.0 / (am * (1.0 - ep * ep));
        let aynl = ep * sin(argpp) + temp * aycof;
        let xl = mp + argpp + nodep + temp * xlcof * axnl;

        //--- solve kepler's equation for the perturbed elements
        let u = (xl - nodep) % TWO_PI;
        let mut eo1 = u;
        let mut tem5 = 9999.9;
        let mut sineo1 = 0.0;
        let mut coseo1 = 1.0;
        let mut ktr = 1;
        while abs(tem5) >= 1.0e-12 && ktr <= 10 {
            sineo1 = sin(eo1);
            coseo1 = cos(eo1);
            tem5 = 1.0 - coseo1 * axnl - sineo1 * aynl;
            tem5 = (u - aynl * coseo1 + axnl * sineo1 - eo1) / tem5;
            if abs(tem5) >= 0.95 {
                tem5 = if tem5 > 0.0 { 0.95 } else { -0.95 };
            }
            eo1 += tem5;
            ktr += 1;
        }

        //--- short period preliminary quantities
        let ecose = axnl * coseo1 + aynl * sineo1;
        let esine = axnl * sineo1 - aynl * coseo1;
        let el2 = axnl * axnl + aynl * aynl;
        let pl = am * (1.0 - el2);
        if pl < 0.0 {
            return Err( prop_error!("sat {}: semilatus rectum {} negative at tsince {:.1} min", self.sat_id, pl, t));
        }

        let rl = am * (1.0 - ecose);
        let rdotl = sqrt(am) * esine / rl;
        let rvdotl = sqrt(pl) / rl;
        let betal = sqrt( 1.0 - el2);
        let temp = esine / (1.0 + betal);
        let sinu = am / rl * (sineo1 - aynl - axnl * temp);
        let cosu = am / rl * (coseo1 - axnl + aynl * temp);
        let mut su = atan2( sinu, cosu);
        let sin2u = (cosu + cosu) * sinu;
        let cos2u = 1.0 - 2.0 * sinu * sinu;
        let temp = 1.0 / pl;
        let temp1 = 0.5 * gc.j2 * temp;
        let temp2 = temp1 * temp;

        //--- short period periodics
        let mrt = rl * (1.0 - 1.5 * temp2 * betal * con41) + 0.5 * temp1 * x1mth2 * cos2u;
        if mrt < 1.0 {
            return Err( prop_error!("sat {}: orbit decayed at tsince {:.1} min (radius {:.4} earth radii)", self.sat_id, t, mrt));
        }
        su -= 0.25 * temp2 * x7thm1 * sin2u;
        let xnode = nodep + 1.5 * temp2 * cosip * sin2u;
        let xinc = xincp + 1.5 * temp2 * cosip * sinip * cos2u;
        let mvt = rdotl - nm * temp1 * x1mth2 * sin2u / gc.xke;
        let rvdot = rvdotl + nm * temp1 * (x1mth2 * cos2u + 1.5 * con41) / gc.xke;

        //--- orientation vectors and the final state
        let sinsu = sin(su);
        let cossu = cos(su);
        let snod = sin(xnode);
        let cnod = cos(xnode);
        let sini = sin(xinc);
        let cosi = cos(xinc);
        let xmx = -snod * cosi;
        let xmy = cnod * cosi;
        let ux = xmx * sinsu + cnod * cossu;
        let uy = xmy * sinsu + snod * cossu;
        let uz = sini * sinsu;
        let vx = xmx * cossu - cnod * sinsu;
        let vy = xmy * cossu - snod * sinsu;
        let vz = sini * cossu;

        let mr = mrt * gc.radius_earth_km;
        let r = Cartesian3::new( mr * ux, mr * uy, mr * uz);
        let v = Cartesian3::new(
            (mvt * ux + rvdot * vx) * vkmpersec,
            (mvt * uy + rvdot * vy) * vkmpersec,
            (mvt * uz + rvdot * vz) * vkmpersec,
        );
        Ok( (r, v))
    }
}

/// one-shot propagation of a TLE to an absolute time with the default gravity model. Prefer
/// keeping a [`SatelliteState`] around when propagating the same element set to many times
pub fn propagate (tle: &TLE, t: &DateTime<Utc>) -> Result<OrbitalState> {
    SatelliteState::new(tle)?.propagate(t)
}
