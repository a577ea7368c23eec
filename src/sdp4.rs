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

//! deep space portion of the propagator (the SDP4 extension of SGP4, after Hoots and the
//! consolidated Vallado revision). Orbits with periods of 225 minutes and up pick up lunar/solar
//! secular and periodic perturbations plus resonance handling for 12h and 24h orbits. All
//! coefficient sets here are computed once per element set at init time and are immutable
//! afterwards - the resonance integrator runs from its epoch reset on every call, which keeps
//! propagation a pure function of time

use crate::{abs, atan2, cos, sin, sqrt, PI, TWO_PI};

// lunar/solar eccentricity and mean motion (rad/min)
const ZES: f64 = 0.01675;
const ZEL: f64 = 0.05490;
const ZNS: f64 = 1.19459e-5;
const ZNL: f64 = 1.5835218e-4;

// earth rotation rate in rad/min
const RPTIM: f64 = 4.37526908801129966e-3;

/// one day in minutes, the resonance integrator step
const STEPP: f64 = 720.0;
const STEP2: f64 = 259200.0; // stepp^2 / 2

#[derive(Debug,Clone)]
pub (crate) struct DeepSpace {
    pub periodics: DsPeriodics,
    pub secular: DsSecular,
}

/* #region lunar/solar periodics *****************************************************************/

/// lunar/solar periodic coefficients plus the values dscom feeds into the secular init
#[derive(Debug,Clone)]
pub (crate) struct DsPeriodics {
    e3: f64, ee2: f64,
    peo: f64, pgho: f64, pho: f64, pinco: f64, plo: f64,
    se2: f64, se3: f64,
    sgh2: f64, sgh3: f64, sgh4: f64,
    sh2: f64, sh3: f64,
    si2: f64, si3: f64,
    sl2: f64, sl3: f64, sl4: f64,
    xgh2: f64, xgh3: f64, xgh4: f64,
    xh2: f64, xh3: f64,
    xi2: f64, xi3: f64,
    xl2: f64, xl3: f64, xl4: f64,
    zmol: f64, zmos: f64,
}

/// intermediates of the periodics computation that only live until secular init
pub (crate) struct DsCommon {
    pub sinim: f64, pub cosim: f64, pub emsq: f64,
    s1: f64, s2: f64, s3: f64, s4: f64, s5: f64,
    ss1: f64, ss2: f64, ss3: f64, ss4: f64, ss5: f64,
    sz1: f64, sz3: f64, sz11: f64, sz13: f64, sz21: f64, sz23: f64, sz31: f64, sz33: f64,
    z1: f64, z3: f64, z11: f64, z13: f64, z21: f64, z23: f64, z31: f64, z33: f64,
}

impl DsPeriodics {

    /// compute the lunar/solar periodic coefficient sets for a mean element set (dscom).
    /// `epoch1950` is the element epoch in days since 1950-01-00
    pub (crate) fn compute (epoch1950: f64, ecco: f64, argpo: f64, tc: f64, inclo: f64, nodeo: f64, np: f64) -> (DsPeriodics, DsCommon) {
        const C1SS: f64 = 2.9864797e-6;
        const C1L: f64 = 4.7968065e-7;
        const ZSINIS: f64 = 0.39785416;
        const ZCOSIS: f64 = 0.91744867;
        const ZCOSGS: f64 = 0.1945905;
        const ZSINGS: f64 = -0.98088458;

        let snodm = sin(nodeo);
        let cnodm = cos(nodeo);
        let sinomm = sin(argpo);
        let cosomm = cos(argpo);
        let sinim = sin(inclo);
        let cosim = cos(inclo);
        let emsq = ecco * ecco;
        let betasq = 1.0 - emsq;
        let rtemsq = sqrt(betasq);

        let day = epoch1950 + 18261.5 + tc / 1440.0;
        let xnodce = (4.5236020 - 9.2422029e-4 * day) % TWO_PI;
        let stem = sin(xnodce);
        let ctem = cos(xnodce);
        let zcosil = 0.91375164 - 0.03568096 * ctem;
        let zsinil = sqrt( 1.0 - zcosil * zcosil);
        let zsinhl = 0.089683511 * stem / zsinil;
        let zcoshl = sqrt( 1.0 - zsinhl * zsinhl);
        let gam = 5.8351514 + 0.0019443680 * day;
        let mut zx = 0.39785416 * stem / zsinil;
        let zy = zcoshl * ctem + 0.91744867 * zsinhl * stem;
        zx = atan2( zx, zy);
        zx = gam + zx - xnodce;
        let zcosgl = cos(zx);
        let zsingl = sin(zx);

        // two identical passes, first with solar then with lunar orientation terms
        let mut zcosg = ZCOSGS;
        let mut zsing = ZSINGS;
        let mut zcosi = ZCOSIS;
        let mut zsini = ZSINIS;
        let mut zcosh = cnodm;
        let mut zsinh = snodm;
        let mut cc = C1SS;
        let xnoi = 1.0 / np;

        let (mut s1, mut s2, mut s3, mut s4, mut s5, mut s6, mut s7) = (0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let (mut ss1, mut ss2, mut ss3, mut ss4, mut ss5, mut ss6, mut ss7) = (0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let (mut sz1, mut sz3, mut sz11, mut sz13, mut sz21, mut sz23, mut sz31, mut sz33) = (0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let (mut sz2, mut sz12, mut sz22, mut sz32) = (0.0, 0.0, 0.0, 0.0);
        let (mut z1, mut z2, mut z3) = (0.0, 0.0, 0.0);
        let (mut z11, mut z12, mut z13) = (0.0, 0.0, 0.0);
        let (mut z21, mut z22, mut z23) = (0.0, 0.0, 0.0);
        let (mut z31, mut z32, mut z33) = (0.0, 0.0, 0.0);

        for lsflg in 1..=2 {
            let a1 = zcosg * zcosh + zsing * zcosi * zsinh;
            let a3 = -zsing * zcosh + zcosg * zcosi * zsinh;
            let a7 = -zcosg * zsinh + zsing * zcosi * zcosh;
            let a8 = zsing * zsini;
            let a9 = zsing * zsinh + zcosg * zcosi * zcosh;
            let a10 = zcosg * zsini;
            let a2 = cosim * a7 + sinim * a8;
            let a4 = cosim * a9 + sinim * a10;
            let a5 = -sinim * a7 + cosim * a8;
            let a6 = -sinim * a9 + cosim * a10;

            let x1 = a1 * cosomm + a2 * sinomm;
            let x2 = a3 * cosomm + a4 * sinomm;
            let x3 = -a1 * sinomm + a2 * cosomm;
            let x4 = -a3 * sinomm + a4 * cosomm;
            let x5 = a5 * sinomm;
            let x6 = a6 * sinomm;
            let x7 = a5 * cosomm;
            let x8 = a6 * cosomm;

            z31 = 12.0 * x1 * x1 - 3.0 * x3 * x3;
            z32 = 24.0 * x1 * x2 - 6.0 * x3 * x4;
            z33 = 12.0 * x2 * x2 - 3.0 * x4 * x4;
            z1 = 3.0 * (a1 * a1 + a2 * a2) + z31 * emsq;
            z2 = 6.0 * (a1 * a3 + a2 * a4) + z32 * emsq;
            z3 = 3.0 * (a3 * a3 + a4 * a4) + z33 * emsq;
            z11 = -6.0 * a1 * a5 + emsq * (-24.0 * x1 * x7 - 6.0 * x3 * x5);
            z12 = -6.0 * (a1 * a6 + a3 * a5) + emsq * (-24.0 * (x2 * x7 + x1 * x8) - 6.0 * (x3 * x6 + x4 * x5));
            z13 = -6.0 * a3 * a6 + emsq * (-24.0 * x2 * x8 - 6.0 * x4 * x6);
            z21 = 6.0 * a2 * a5 + emsq * (24.0 * x1 * x5 - 6.0 * x3 * x7);
            z22 = 6.0 * (a4 * a5 + a2 * a6) + emsq * (24.0 * (x2 * x5 + x1 * x6) - 6.0 * (x4 * x7 + x3 * x8));
            z23 = 6.0 * a4 * a6 + emsq * (24.0 * x2 * x6 - 6.0 * x4 * x8);
            z1 = z1 + z1 + betasq * z31;
            z2 = z2 + z2 + betasq * z32;
            z3 = z3 + z3 + betasq * z33;
            s3 = cc * xnoi;
            s2 = -0.5 * s3 / rtemsq;
            s4 = s3 * rtemsq;
            s1 = -15.0 * ecco * s4;
            s5 = x1 * x3 + x2 * x4;
            s6 = x2 * x3 + x1 * x4;
            s7 = x2 * x4 - x1 * x3;

            if lsflg == 1 {
                ss1 = s1; ss2 = s2; ss3 = s3; ss4 = s4; ss5 = s5; ss6 = s6; ss7 = s7;
                sz1 = z1; sz2 = z2; sz3 = z3;
                sz11 = z11; sz12 = z12; sz13 = z13;
                sz21 = z21; sz22 = z22; sz23 = z23;
                sz31 = z31; sz32 = z32; sz33 = z33;
                zcosg = zcosgl;
                zsing = zsingl;
                zcosi = zcosil;
                zsini = zsinil;
                zcosh = zcoshl * cnodm + zsinhl * snodm;
                zsinh = snodm * zcoshl - cnodm * zsinhl;
                cc = C1L;
            }
        }

        let zmol = (4.7199672 + 0.22997150 * day - gam) % TWO_PI;
        let zmos = (6.2565837 + 0.017201977 * day) % TWO_PI;

        let periodics = DsPeriodics {
            // solar coefficients
            se2: 2.0 * ss1 * ss6,
            se3: 2.0 * ss1 * ss7,
            si2: 2.0 * ss2 * sz12,
            si3: 2.0 * ss2 * (sz13 - sz11),
            sl2: -2.0 * ss3 * sz2,
            sl3: -2.0 * ss3 * (sz3 - sz1),
            sl4: -2.0 * ss3 * (-21.0 - 9.0 * emsq) * ZES,
            sgh2: 2.0 * ss4 * sz32,
            sgh3: 2.0 * ss4 * (sz33 - sz31),
            sgh4: -18.0 * ss4 * ZES,
            sh2: -2.0 * ss2 * sz22,
            sh3: -2.0 * ss2 * (sz23 - sz21),

            // lunar coefficients
            ee2: 2.0 * s1 * s6,
            e3: 2.0 * s1 * s7,
            xi2: 2.0 * s2 * z12,
            xi3: 2.0 * s2 * (z13 - z11),
            xl2: -2.0 * s3 * z2,
            xl3: -2.0 * s3 * (z3 - z1),
            xl4: -2.0 * s3 * (-21.0 - 9.0 * emsq) * ZEL,
            xgh2: 2.0 * s4 * z32,
            xgh3: 2.0 * s4 * (z33 - z31),
            xgh4: -18.0 * s4 * ZEL,
            xh2: -2.0 * s2 * z22,
            xh3: -2.0 * s2 * (z23 - z21),

            peo: 0.0, pinco: 0.0, plo: 0.0, pgho: 0.0, pho: 0.0,
            zmol, zmos,
        };

        let common = DsCommon {
            sinim, cosim, emsq,
            s1, s2, s3, s4, s5,
            ss1, ss2, ss3, ss4, ss5,
            sz1, sz3, sz11, sz13, sz21, sz23, sz31, sz33,
            z1, z3, z11, z13, z21, z23, z31, z33,
        };

        (periodics, common)
    }

    /// apply the lunar/solar periodic corrections at minutes-since-epoch t to the mean elements
    /// (dpper). Returns the corrected (e, incl, node, argp, M)
    pub (crate) fn apply (&self, t: f64, ep: f64, inclp: f64, nodep: f64, argpp: f64, mp: f64) -> (f64, f64, f64, f64, f64) {
        // solar terms
        let zm = self.zmos + ZNS * t;
        let zf = zm + 2.0 * ZES * sin(zm);
        let sinzf = sin(zf);
        let f2 = 0.5 * sinzf * sinzf - 0.25;
        let f3 = -0.5 * sinzf * cos(zf);
        let ses = self.se2 * f2 + self.se3 * f3;
        let sis = self.si2 * f2 + self.si3 * f3;
        let sls = self.sl2 * f2 + self.sl3 * f3 + self.sl4 * sinzf;
        let sghs = self.sgh2 * f2 + self.sgh3 * f3 + self.sgh4 * sinzf;
        let shs = self.sh2 * f2 + self.sh3 * f3;

        // lunar terms
        let zm = self.zmol + ZNL * t;
        let zf = zm + 2.0 * ZEL * sin(zm);
        let sinzf = sin(zf);
        let f2 = 0.5 * sinzf * sinzf - 0.25;
        let f3 = -0.5 * sinzf * cos(zf);
        let sel = self.ee2 * f2 + self.e3 * f3;
        let sil = self.xi2 * f2 + self.xi3 * f3;
        let sll = self.xl2 * f2 + self.xl3 * f3 + self.xl4 * sinzf;
        let sghl = self.xgh2 * f2 + self.xgh3 * f3 + self.xgh4 * sinzf;
        let shll = self.xh2 * f2 + self.xh3 * f3;

        let pe = (ses + sel) - self.peo;
        let pinc = (sis + sil) - self.pinco;
        let pl = (sls + sll) - self.plo;
        let pgh = (sghs + sghl) - self.pgho;
        let ph = (shs + shll) - self.pho;

        let inclp = inclp + pinc;
        let ep = ep + pe;
        let sinip = sin(inclp);
        let cosip = cos(inclp);

        if inclp >= 0.2 {
            let ph = ph / sinip;
            let pgh = pgh - cosip * ph;
            (ep, inclp, nodep + ph, argpp + pgh, mp + pl)
        } else {
            // Lyddane modification for low inclination
            let sinop = sin(nodep);
            let cosop = cos(nodep);
            let mut alfdp = sinip * sinop;
            let mut betdp = sinip * cosop;
            alfdp += ph * cosop + pinc * cosip * sinop;
            betdp += -ph * sinop + pinc * cosip * cosop;

            let mut nodep = if nodep >= 0.0 { nodep % TWO_PI } else { -((-nodep) % TWO_PI) };
            let xls = mp + argpp + pl + pgh + (cosip - pinc * sinip) * nodep;
            let xnoh = nodep;
            nodep = atan2( alfdp, betdp);
            if abs(xnoh - nodep) > PI {
                if nodep < xnoh { nodep += TWO_PI } else { nodep -= TWO_PI }
            }

            let mp = mp + pl;
            (ep, inclp, nodep, xls - mp - cosip * nodep, mp)
        }
    }
}

/* #endregion lunar/solar periodics */

/* #region secular terms and resonance ***********************************************************/

#[derive(Debug,Clone,Copy,PartialEq)]
pub (crate) enum Resonance {
    None,
    OneDay,   // geosynchronous band
    HalfDay,  // 12h orbits of significant eccentricity (molniya type)
}

/// deep space secular rates plus resonance coefficients (dsinit)
#[derive(Debug,Clone)]
pub (crate) struct DsSecular {
    dedt: f64, didt: f64, dmdt: f64, dnodt: f64, domdt: f64,

    resonance: Resonance,
    d2201: f64, d2211: f64, d3210: f64, d3222: f64, d4410: f64,
    d4422: f64, d5220: f64, d5232: f64, d5421: f64, d5433: f64,
    del1: f64, del2: f64, del3: f64,
    xlamo: f64, xfact: f64,

    // element set constants the resonance integrator needs
    no: f64, argpo: f64, argpdot: f64, gsto: f64,
}

/// everything dsinit needs from the near-earth init besides the dscom intermediates
pub (crate) struct DsInitArgs {
    pub xke: f64,
    pub ecco: f64,
    pub eccsq: f64,
    pub inclo: f64,
    pub argpo: f64,
    pub argpdot: f64,
    pub mo: f64,
    pub mdot: f64,
    pub no: f64,      // un-kozai mean motion, rad/min
    pub nodeo: f64,
    pub nodedot: f64,
    pub xpidot: f64,
    pub gsto: f64,
}

impl DsSecular {

    pub (crate) fn init (cm: &DsCommon, args: &DsInitArgs) -> DsSecular {
        const Q22: f64 = 1.7891679e-6;
        const Q31: f64 = 2.1460748e-6;
        const Q33: f64 = 2.2123015e-7;
        const ROOT22: f64 = 1.7891679e-6;
        const ROOT44: f64 = 7.3636953e-9;
        const ROOT54: f64 = 2.1765803e-9;
        const ROOT32: f64 = 3.7393792e-7;
        const ROOT52: f64 = 1.1428639e-7;
        const X2O3: f64 = 2.0 / 3.0;

        let nm = args.no;
        let em = args.ecco;
        let inclm = args.inclo;
        let sinim = cm.sinim;
        let cosim = cm.cosim;
        let emsq = cm.emsq;

        let resonance =
            if nm > 0.0034906585 && nm < 0.0052359877 { Resonance::OneDay }
            else if (8.26e-3..=9.24e-3).contains(&nm) && em >= 0.5 { Resonance::HalfDay }
            else { Resonance::None };

        // solar secular rates
        let ses = cm.ss1 * ZNS * cm.ss5;
        let sis = cm.ss2 * ZNS * (cm.sz11 + cm.sz13);
        let sls = -ZNS * cm.ss3 * (cm.sz1 + cm.sz3 - 14.0 - 6.0 * emsq);
        let sghs = cm.ss4 * ZNS * (cm.sz31 + cm.sz33 - 6.0);
        let mut shs = -ZNS * cm.ss2 * (cm.sz21 + cm.sz23);
        if inclm < 5.2359877e-2 || inclm > PI - 5.2359877e-2 { shs = 0.0 }
        if sinim != 0.0 { shs /= sinim }
        let sgs = sghs - cosim * shs;

        // lunar secular rates
        let dedt = ses + cm.s1 * ZNL * cm.s5;
        let didt = sis + cm.s2 * ZNL * (cm.z11 + cm.z13);
        let dmdt = sls - ZNL * cm.s3 * (cm.z1 + cm.z3 - 14.0 - 6.0 * emsq);
        let sghl = cm.s4 * ZNL * (cm.z31 + cm.z33 - 6.0);
        let mut shll = -ZNL * cm.s2 * (cm.z21 + cm.z23);
        if inclm < 5.2359877e-2 || inclm > PI - 5.2359877e-2 { shll = 0.0 }
        let mut domdt = sgs + sghl;
        let mut dnodt = shs;
        if sinim != 0.0 {
            domdt -= cosim / sinim * shll;
            dnodt += shll / sinim;
        }

        let mut secular = DsSecular {
            dedt, didt, dmdt, dnodt, domdt,
            resonance,
            d2201: 0.0, d2211: 0.0, d3210: 0.0, d3222: 0.0, d4410: 0.0,
            d4422: 0.0, d5220: 0.0, d5232: 0.0, d5421: 0.0, d5433: 0.0,
            del1: 0.0, del2: 0.0, del3: 0.0,
            xlamo: 0.0, xfact: 0.0,
            no: args.no, argpo: args.argpo, argpdot: args.argpdot, gsto: args.gsto,
        };

        let theta = args.gsto % TWO_PI;
        let aonv = (nm / args.xke).powf(X2O3);

        if resonance == Resonance::HalfDay {
            let cosisq = cosim * cosim;
            let em = args.ecco;
            let emsq = args.eccsq;
            let eoc = em * emsq;

            let g201 = -0.306 - (em - 0.64) * 0.440;
            let (g211, g310, g322, g410, g422, g520);
            if em <= 0.65 {
                g211 = 3.616 - 13.2470 * em + 16.2900 * emsq;
                g310 = -19.302 + 117.3900 * em - 228.4190 * emsq + 156.5910 * eoc;
                g322 = -18.9068 + 109.7927 * em - 214.6334 * emsq + 146.5816 * eoc;
                g410 = -41.122 + 242.6940 * em - 471.0940 * emsq + 313.9530 * eoc;
                g422 = -146.407 + 841.8800 * em - 1629.014 * emsq + 1083.4350 * eoc;
                g520 = -532.114 + 3017.977 * em - 5740.032 * emsq + 3708.2760 * eoc;
            } else {
                g211 = -72.099 + 331.819 * em - 508.738 * emsq + 266.724 * eoc;
                g310 = -346.844 + 1582.851 * em - 2415.925 * emsq + 1246.113 * eoc;
                g322 = -342.585 + 1554.908 * em - 2366.899 * emsq + 1215.972 * eoc;
                g410 = -1052.797 + 4758.686 * em - 7193.992 * emsq + 3651.957 * eoc;
                g422 = -3581.690 + 16178.110 * em - 24462.770 * emsq + 12422.520 * eoc;
                g520 = if em > 0.715 { -5149.66 + 29936.92 * em - 54087.36 * emsq + 31324.56 * eoc }
                       else { 1464.74 - 4664.75 * em + 3763.64 * emsq };
            }

            let (g533, g521, g532);
            if em < 0.7 {
                g533 = -919.22770 + 4988.61 * em - 9064.77 * emsq + 5542.21 * eoc;
                g521 = -822.71072 + 4568.6173 * em - 8491.4146 * emsq + 5337.524 * eoc;
                g532 = -853.66600 + 4690.25 * em - 8624.77 * emsq + 5341.4 * eoc;
            } else {
                g533 = -37995.78 + 161616.52 * em - 229838.2 * emsq + 109377.94 * eoc;
                g521 = -51752.104 + 218913.95 * em - 309468.16 * emsq + 146349.42 * eoc;
                g532 = -40023.88 + 170470.89 * em - 242699.48 * emsq + 115605.82 * eoc;
            }

            let sini2 = sinim * sinim;
            let f220 = 0.75 * (1.0 + 2.0 * cosim + cosisq);
            let f221 = 1.5 * sini2;
            let f321 = 1.875 * sinim * (1.0 - 2.0 * cosim - 3.0 * cosisq);
            let f322 = -1.875 * sinim * (1.0 + 2.0 * cosim - 3.0 * cosisq);
            let f441 = 35.0 * sini2 * f220;
            let f442 = 39.375 * sini2 * sini2;
            let f522 = 9.84375 * sinim * (sini2 * (1.0 - 2.0 * cosim - 5.0 * cosisq)
                + 1.0 / 3.0 * (-2.0 + 4.0 * cosim + 6.0 * cosisq));
            let f523 = sinim * (4.92187512 * sini2 * (-2.0 - 4.0 * cosim + 10.0 * cosisq)
                + 6.56250012 * (1.0 + 2.0 * cosim - 3.0 * cosisq));
            let f542 = 29.53125 * sinim * (2.0 - 8.0 * cosim + cosisq * (-12.0 + 8.0 * cosim + 10.0 * cosisq));
            let f543 = 29.53125 * sinim * (-2.0 - 8.0 * cosim + cosisq * (12.0 + 8.0 * cosim - 10.0 * cosisq));

            let xno2 = nm * nm;
            let ainv2 = aonv * aonv;
            let mut temp1 = 3.0 * xno2 * ainv2;
            let mut temp = temp1 * ROOT22;
            secular.d2201 = temp * f220 * g201;
            secular.d2211 = temp * f221 * g211;
            temp1 *= aonv;
            temp = temp1 * ROOT32;
            secular.d3210 = temp * f321 * g310;
            secular.d3222 = temp * f322 * g322;
            temp1 *= aonv;
            temp = 2.0 * temp1 * ROOT44;
            secular.d4410 = temp * f441 * g410;
            secular.d4422 = temp * f442 * g422;
            temp1 *= aonv;
            temp = temp1 * ROOT52;
            secular.d5220 = temp * f522 * g520;
            secular.d5232 = temp * f523 * g532;
            temp = 2.0 * temp1 * ROOT54;
            secular.d5421 = temp * f542 * g521;
            secular.d5433 = temp * f543 * g533;

            secular.xlamo = (args.mo + args.nodeo + args.nodeo - theta - theta) % TWO_PI;
            secular.xfact = args.mdot + dmdt + 2.0 * (args.nodedot + dnodt - RPTIM) - args.no;
        }

        if resonance == Resonance::OneDay {
            let g200 = 1.0 + emsq * (-2.5 + 0.8125 * emsq);
            let g310 = 1.0 + 2.0 * emsq;
            let g300 = 1.0 + emsq * (-6.0 + 6.60937 * emsq);
            let f220 = 0.75 * (1.0 + cosim) * (1.0 + cosim);
            let f311 = 0.9375 * sinim * sinim * (1.0 + 3.0 * cosim) - 0.75 * (1.0 + cosim);
            let mut f330 = 1.0 + cosim;
            f330 = 1.875 * f330 * f330 * f330;

            secular.del1 = 3.0 * nm * nm * aonv * aonv;
            secular.del2 = 2.0 * secular.del1 * f220 * g200 * Q22;
            secular.del3 = 3.0 * secular.del1 * f330 * g300 * Q33 * aonv;
            secular.del1 = secular.del1 * f311 * g310 * Q31 * aonv;

            secular.xlamo = (args.mo + args.nodeo + args.argpo - theta) % TWO_PI;
            secular.xfact = args.mdot + args.xpidot - RPTIM + dmdt + domdt + dnodt - args.no;
        }

        secular
    }

    /// apply the deep space secular rates and resonance contributions at minutes-since-epoch t
    /// (dspace). Takes and returns the running mean elements (e, argp, incl, node, M, n)
    pub (crate) fn apply (&self, t: f64, em: f64, argpm: f64, inclm: f64, nodem: f64, mm: f64, nm: f64) -> (f64, f64, f64, f64, f64, f64) {
        let theta = (self.gsto + t * RPTIM) % TWO_PI;

        let em = em + self.dedt * t;
        let inclm = inclm + self.didt * t;
        let argpm = argpm + self.domdt * t;
        let nodem = nodem + self.dnodt * t;
        let mut mm = mm + self.dmdt * t;
        let mut nm = nm;

        if self.resonance != Resonance::None {
            // numerically integrate the resonance terms in whole-day steps from epoch. Since the
            // integrator always restarts at epoch the result only depends on t
            let mut atime = 0.0;
            let mut xni = self.no;
            let mut xli = self.xlamo;
            let delt = if t > 0.0 { STEPP } else { -STEPP };

            let (ft, xndt, xldot, xnddt) = loop {
                let (xndt, xldot, xnddt) = self.resonance_rates( atime, xli, xni);
                if abs(t - atime) < STEPP {
                    break (t - atime, xndt, xldot, xnddt);
                }
                xli += xldot * delt + xndt * STEP2;
                xni += xndt * delt + xnddt * STEP2;
                atime += delt;
            };

            nm = xni + xndt * ft + xnddt * ft * ft * 0.5;
            let xl = xli + xldot * ft + xndt * ft * ft * 0.5;

            mm = if self.resonance == Resonance::OneDay {
                xl - nodem - argpm + theta
            } else {
                xl - 2.0 * nodem + 2.0 * theta
            };
        }

        (em, argpm, inclm, nodem, mm, nm)
    }

    /// mean motion and mean longitude rates of the resonance terms at integrator state
    /// (atime, xli, xni)
    fn resonance_rates (&self, atime: f64, xli: f64, xni: f64) -> (f64, f64, f64) {
        const FASX2: f64 = 0.13130908;
        const FASX4: f64 = 2.8843198;
        const FASX6: f64 = 0.37448087;
        const G22: f64 = 5.7686396;
        const G32: f64 = 0.95240898;
        const G44: f64 = 1.8014998;
        const G52: f64 = 1.0508330;
        const G54: f64 = 4.4108898;

        let xldot = xni + self.xfact;

        if self.resonance == Resonance::HalfDay {
            let xomi = self.argpo + self.argpdot * atime;
            let x2omi = xomi + xomi;
            let x2li = xli + xli;
            let xndt = self.d2201 * sin( x2omi + xli - G22) + self.d2211 * sin( xli - G22)
                + self.d3210 * sin( xomi + xli - G32) + self.d3222 * sin( -xomi + xli - G32)
                + self.d4410 * sin( x2omi + x2li - G44) + self.d4422 * sin( x2li - G44)
                + self.d5220 * sin( xomi + xli - G52) + self.d5232 * sin( -xomi + xli - G52)
                + self.d5421 * sin( xomi + x2li - G54) + self.d5433 * sin( -xomi + x2li - G54);
            let mut xnddt = self.d2201 * cos( x2omi + xli - G22) + self.d2211 * cos( xli - G22)
                + self.d3210 * cos( xomi + xli - G32) + self.d3222 * cos( -xomi + xli - G32)
                + self.d5220 * cos( xomi + xli - G52) + self.d5232 * cos( -xomi + xli - G52)
                + 2.0 * (self.d4410 * cos( x2omi + x2li - G44) + self.d4422 * cos( x2li - G44)
                    + self.d5421 * cos( xomi + x2li - G54) + self.d5433 * cos( -xomi + x2li - G54));
            xnddt *= xldot;
            (xndt, xldot, xnddt)
        } else {
            let xndt = self.del1 * sin( xli - FASX2)
                + self.del2 * sin( 2.0 * (xli - FASX4))
                + self.del3 * sin( 3.0 * (xli - FASX6));
            let mut xnddt = self.del1 * cos( xli - FASX2)
                + 2.0 * self.del2 * cos( 2.0 * (xli - FASX4))
                + 3.0 * self.del3 * cos( 3.0 * (xli - FASX6));
            xnddt *= xldot;
            (xndt, xldot, xnddt)
        }
    }
}

/* #endregion secular terms and resonance */
