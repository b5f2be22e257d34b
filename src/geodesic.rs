// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The geodesic module contains the solver for the inverse geodesic problem:
//! given two points on the surface of an ellipsoid, find the distance between
//! them along the shortest surface path and the azimuths of that path at both
//! points.
//!
//! The input is first reduced to a canonical configuration with
//! 0 ≤ Δλ ≤ 180°, -90° ≤ φ₁ ≤ 0 and φ₁ ≤ φ₂ ≤ -φ₁, recording the applied
//! symmetry transforms. Meridional and equatorial geodesics are dispatched
//! directly; everything else is solved by Newton's method on the azimuth at
//! the first point, with the longitude difference on the ellipsoid as the
//! residual. Near-antipodal configurations get their starting azimuth from a
//! cubic closely related to the astroid of Karney section 7.

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_arguments)]

use crate::ellipsoid::coefficients::{
    distance_coeffs, distance_scale, longitude_coeffs, longitude_coeffs_dmu,
    longitude_scale, longitude_scale_dmu, sin_series,
};
use crate::numerics::{
    normalise_angle, normalise_sin_cos, round_angle, sqrt_epsilon, tiny, TOLERANCE,
};
use crate::{Ellipsoid, Error};
use angle_sc::Degrees;
use core::f64::consts::PI;
use icao_units::si::Metres;

/// The iteration cap of the Newton solver on the longitude residual.
const MAX_ITERATIONS: u32 = 50;

/// The iteration cap of the Newton polish of the near-antipodal estimate.
const MAX_ESTIMATE_ITERATIONS: u32 = 30;

/// The longitude difference on the ellipsoid for a trial azimuth at point 1,
/// together with everything else the trial propagates along the geodesic.
struct Residual {
    /// The longitude difference χ₁₂ on the ellipsoid, in radians.
    chi12: f64,
    /// The sine and cosine of the azimuth at point 2.
    salp2: f64,
    calp2: f64,
    /// The great circle arc between the points on the auxiliary sphere.
    sig12: f64,
    /// The sines and cosines of the arcs from the equator crossing.
    ssig1: f64,
    csig1: f64,
    ssig2: f64,
    csig2: f64,
    /// The distance series parameter μ e′².
    u2: f64,
    /// dχ₁₂/dα₁; only valid when requested.
    dchi12: f64,
}

/// Evaluate the longitude difference χ₁₂ produced by the trial azimuth
/// (salp1, calp1) at point 1, carrying the azimuth through the auxiliary
/// sphere identities
///   sin α cos β = sin α₀,  tan β = tan σ cos α,  tan ω = sin α₀ tan σ,
/// and applying the ellipsoid longitude correction. When `diffp` is set the
/// analytic derivative dχ₁₂/dα₁ is evaluated as well.
fn longitude_residual(
    ellipsoid: &Ellipsoid,
    sbet1: f64,
    cbet1: f64,
    sbet2: f64,
    cbet2: f64,
    salp1: f64,
    calp1: f64,
    diffp: bool,
) -> Residual {
    let f = ellipsoid.f();
    let e_2 = ellipsoid.e_2();

    // Break the degeneracy of an equatorial line; that case has already
    // been dispatched.
    let calp1 = if sbet1 == 0.0 && calp1 == 0.0 {
        -tiny()
    } else {
        calp1
    };

    // sin(alp1) * cos(bet1) = sin(alp0); calp0 > 0
    let salp0 = salp1 * cbet1;
    let calp0 = libm::hypot(calp1, salp1 * sbet1);

    // tan(bet1) = tan(sig1) * cos(alp1)
    // tan(lam1) = sin(alp0) * tan(sig1)
    let ssig1 = sbet1;
    let slam1 = salp0 * sbet1;
    let csig1 = calp1 * cbet1;
    let clam1 = csig1;
    let (ssig1, csig1) = normalise_sin_cos(ssig1, csig1);
    let (slam1, clam1) = normalise_sin_cos(slam1, clam1);

    // Enforce the symmetries of the case abs(bet2) = -bet1, which can
    // otherwise yield singularities in the Newton iteration.
    // sin(alp2) * cos(bet2) = sin(alp0)
    let salp2 = if cbet2 != cbet1 { salp0 / cbet2 } else { salp1 };
    // calp2 = sqrt(sq(calp0) - sq(sbet2)) / cbet2, with calp0 substituted
    // and rearranged; the positive root puts alp2 in [0, pi/2].
    let calp2 = if cbet2 != cbet1 || libm::fabs(sbet2) != -sbet1 {
        libm::sqrt(
            (calp1 * cbet1) * (calp1 * cbet1)
                + if cbet1 < -sbet1 {
                    (cbet2 - cbet1) * (cbet1 + cbet2)
                } else {
                    (sbet1 - sbet2) * (sbet1 + sbet2)
                },
        ) / cbet2
    } else {
        libm::fabs(calp1)
    };

    // tan(bet2) = tan(sig2) * cos(alp2)
    // tan(lam2) = sin(alp0) * tan(sig2)
    let ssig2 = sbet2;
    let slam2 = salp0 * sbet2;
    let csig2 = calp2 * cbet2;
    let clam2 = csig2;
    let (ssig2, csig2) = normalise_sin_cos(ssig2, csig2);
    let (slam2, clam2) = normalise_sin_cos(slam2, clam2);

    // sig12 = sig2 - sig1, limited to [0, pi]
    let sig12 = libm::atan2(
        (csig1 * ssig2 - ssig1 * csig2).max(0.0),
        csig1 * csig2 + ssig1 * ssig2,
    );

    // lam12 = lam2 - lam1, limited to [0, pi]
    let lam12 = libm::atan2(
        (clam1 * slam2 - slam1 * clam2).max(0.0),
        clam1 * clam2 + slam1 * slam2,
    );

    let mu = calp0 * calp0;
    let lam_coeffs = longitude_coeffs(f, mu);
    let eta12 =
        sin_series(ssig2, csig2, &lam_coeffs) - sin_series(ssig1, csig1, &lam_coeffs);
    let lamscale = longitude_scale(f, mu);
    let chi12 = lam12 + salp0 * lamscale * (sig12 + eta12);

    let mut dchi12 = 0.0;
    if diffp {
        // Differentiate sin(alp) * cos(bet) = sin(alp0)
        let dalp0 = cbet1 * calp1 / calp0;
        let dalp2 = if calp2 != 0.0 {
            calp1 * cbet1 / (calp2 * cbet2)
        } else if calp1 >= 0.0 {
            1.0
        } else {
            -1.0
        };
        // Differentiate tan(bet) = tan(sig) * cos(alp) and clear calp from
        // the denominator with tan(alp0) = cos(sig) * tan(alp).
        let dsig1 = ssig1 * salp0 / calp0;
        let dsig2 = ssig2 * salp0 / calp0 * dalp2;
        // Differentiate tan(lam) = sin(alp0) * tan(sig), substituting
        //   tan(sig) = tan(lam) / sin(alp0) and cos(lam) / cos(sig) = 1 / cos(bet).
        let dlam1 = sbet1 * (clam1 * clam1) + slam1 * salp0 / (calp0 * cbet1);
        let dlam2 = (sbet2 * (clam2 * clam2) + slam2 * salp0 / (calp0 * cbet2)) * dalp2;

        let dmu_coeffs = longitude_coeffs_dmu(f, mu);
        let dmu = -2.0 * calp0 * salp0 * dalp0;
        let deta12 = dmu
            * (sin_series(ssig2, csig2, &dmu_coeffs)
                - sin_series(ssig1, csig1, &dmu_coeffs));
        let dlamscale = longitude_scale_dmu(f, mu) * dmu;

        // Derivative of salp0 * lamscale * (sig + eta) wrt sig, from the
        // integral form of that expression.
        let dchisig = -e_2
            * salp0
            * (dsig2 / (libm::sqrt(1.0 - e_2 * (1.0 - mu * (ssig2 * ssig2))) + 1.0)
                - dsig1 / (libm::sqrt(1.0 - e_2 * (1.0 - mu * (ssig1 * ssig1))) + 1.0));

        dchi12 = (dlam2 - dlam1)
            + dchisig
            + (dalp0 * calp0 * lamscale + salp0 * dlamscale) * (sig12 + eta12)
            + salp0 * lamscale * deta12;
    }

    Residual {
        chi12,
        salp2,
        calp2,
        sig12,
        ssig1,
        csig1,
        ssig2,
        csig2,
        u2: mu * ellipsoid.ep_2(),
        dchi12,
    }
}

/// Estimate the azimuth at point 1 for a nearly antipodal configuration.
///
/// The azimuth is the root of a cubic closely related to the astroid of the
/// antipodal neighbourhood: v(α₁) = cos α₁ (sin α₁ + x) - y sin α₁, seeded
/// per region of the (x, y) plane and polished with a short Newton loop, then
/// mapped back to a longitude estimate and through the spherical formula.
fn antipodal_initial_azimuth(
    x: f64,
    y: f64,
    chicrita: f64,
    sbet1: f64,
    cbet2: f64,
    sbet12a: f64,
) -> (f64, f64) {
    if y > -TOLERANCE && x > -1.0 - 10.0 * sqrt_epsilon() {
        // strip near the antipodal cut
        let salp1 = (-x).min(1.0);
        let calp1 = -libm::sqrt(1.0 - salp1 * salp1);
        return (salp1, calp1);
    }

    let (mut salp1, mut calp1) = if y == 0.0 {
        (1.0, 0.0)
    } else if y > -0.027 && x > -1.09 && x < -0.91 {
        // Near the singular point solve t^3 - 2*a*t - 2 = 0 where
        // a = (x + 1)/|y|^(2/3) and t = calp1/|y|^(1/3).
        let a = (x + 1.0) / (libm::cbrt(y) * libm::cbrt(y));
        let a3 = (a * a) * a;
        let disc = 27.0 - 8.0 * a3;
        let mut v = 1.0;
        if disc >= 0.0 {
            let mut s = 4.0 * a3 - 27.0;
            s += (if s > 0.0 { 1.0 } else { -1.0 }) * 3.0 * libm::sqrt(3.0) * libm::sqrt(disc);
            s /= 4.0 * a3;
            let s = libm::cbrt(s);
            v += s + 1.0 / s;
        } else {
            let ang = libm::atan2(3.0 * libm::sqrt(3.0) * libm::sqrt(-disc), 4.0 * a3 - 27.0)
                + 2.0 * PI;
            v += 2.0 * libm::cos(ang / 3.0);
        }
        let calp1 = libm::cbrt(-y) * -3.0 / a / v;
        (libm::sqrt(1.0 - calp1 * calp1), calp1)
    } else {
        (0.0, 1.0)
    };

    for _ in 0..MAX_ESTIMATE_ITERATIONS {
        let v = calp1 * (salp1 + x) - y * salp1;
        let dv = -calp1 * y - salp1 * x + (calp1 - salp1) * (calp1 + salp1);
        let da = -v / dv;
        let sda = libm::sin(da);
        let cda = libm::cos(da);
        let nsalp1 = salp1 * cda + calp1 * sda;
        if v == 0.0 {
            break;
        }
        calp1 = (calp1 * cda - salp1 * sda).max(0.0);
        salp1 = nsalp1.max(0.0);
        let (s, c) = normalise_sin_cos(salp1, calp1);
        salp1 = s;
        calp1 = c;
        if libm::fabs(da) < sqrt_epsilon() {
            break;
        }
    }

    // Map the root back to an estimate of the longitude difference,
    // chi12 = pi - chicrita * r * salp1, and through the spherical formula.
    let r = libm::hypot(y, salp1 + x) * chicrita * salp1;
    let schi12 = libm::sin(r);
    let cchi12 = -libm::cos(r);
    let salp1 = cbet2 * schi12;
    let calp1 = sbet12a - cbet2 * sbet1 * (schi12 * schi12) / (1.0 - cchi12);
    normalise_sin_cos(salp1, calp1)
}

/// Solve the inverse geodesic problem between two positions on the ellipsoid.
/// * `ellipsoid` - the ellipsoid.
/// * `lat1`, `lon1` - the geodetic coordinates of the start point, in degrees.
/// * `lat2`, `lon2` - the geodetic coordinates of the finish point, in degrees.
///
/// returns the geodesic distance in metres and the azimuths of the geodesic
/// at the start and finish points, in degrees clockwise from North.
///
/// # Errors
///
/// `Error::Domain` for non-finite coordinates or latitudes outside
/// [-90, 90]; `Error::Convergence` if the Newton iteration fails to reach
/// tolerance, reporting the input coordinates.
pub fn inverse(
    ellipsoid: &Ellipsoid,
    lat1: Degrees,
    lon1: Degrees,
    lat2: Degrees,
    lon2: Degrees,
) -> Result<(Metres, Degrees, Degrees), Error> {
    crate::validate_position(lat1, lon1)?;
    crate::validate_position(lat2, lon2)?;

    let f1 = ellipsoid.one_minus_f();

    // Canonicalise: 0 <= lon12 <= 180, -90 <= lat1 <= 0, lat1 <= lat2 <= -lat1.
    // lonsign, swapp and latsign record the transforms (1 means unchanged),
    // keeping the quadrant checks below few and enforcing the output
    // symmetries.
    let norm_lon1 = normalise_angle(lon1.0);
    let mut lon12 = round_angle(normalise_angle(normalise_angle(lon2.0) - norm_lon1));
    let mut lonsign = if lon12 >= 0.0 { 1.0 } else { -1.0 };
    lon12 *= lonsign;

    let mut lat_a = round_angle(lat1.0);
    let mut lat_b = round_angle(lat2.0);
    let swapp = if libm::fabs(lat_a) >= libm::fabs(lat_b) {
        1.0
    } else {
        -1.0
    };
    if swapp < 0.0 {
        lonsign = -lonsign;
        core::mem::swap(&mut lat_a, &mut lat_b);
    }
    let latsign = if lat_a < 0.0 { 1.0 } else { -1.0 };
    lat_a *= latsign;
    lat_b *= latsign;

    // Reduced latitudes, with cbet = +eps at the poles
    let mut phi = lat_a.to_radians();
    let mut sbet1 = f1 * libm::sin(phi);
    let mut cbet1 = if lat_a == -90.0 { tiny() } else { libm::cos(phi) };
    // n1 = sqrt(1 - e2 * sq(sin(phi)))
    let n1 = libm::hypot(sbet1, cbet1);
    sbet1 /= n1;
    cbet1 /= n1;

    phi = lat_b.to_radians();
    let sbet2 = f1 * libm::sin(phi);
    let cbet2 = if libm::fabs(lat_b) == 90.0 {
        tiny()
    } else {
        libm::cos(phi)
    };
    let (sbet2, cbet2) = normalise_sin_cos(sbet2, cbet2);

    // bet2 - bet1 in [0, pi); bet2 + bet1 in (-pi, 0]
    let sbet12 = sbet2 * cbet1 - cbet2 * sbet1;
    let sbet12a = sbet2 * cbet1 + cbet2 * sbet1;

    let chi12 = lon12.to_radians();
    let cchi12 = libm::cos(chi12);
    let schi12 = if lon12 == 180.0 { 0.0 } else { libm::sin(chi12) };

    let (s12, salp1, calp1, salp2, calp2) = if schi12 == 0.0 || lat_a == -90.0 {
        // The geodesic is a meridian (possibly through a pole); this includes
        // coincident points. Head to the target longitude, arrive northbound.
        let calp1 = cchi12;
        let salp1 = schi12;
        let calp2 = 1.0;
        let salp2 = 0.0;

        // tan(bet) = tan(sig) * cos(alp)
        let (ssig1, csig1) = normalise_sin_cos(sbet1, calp1 * cbet1);
        let (ssig2, csig2) = normalise_sin_cos(sbet2, calp2 * cbet2);

        // sig12 = sig2 - sig1
        let sig12 = libm::atan2(
            (csig1 * ssig2 - ssig1 * csig2).max(0.0),
            csig1 * csig2 + ssig1 * ssig2,
        );

        // alp0 = 0 on a meridian, so u2 = e'^2
        let u2 = ellipsoid.ep_2();
        let c = distance_coeffs(u2);
        let s12 = ellipsoid.b().0
            * distance_scale(u2)
            * (sig12 + (sin_series(ssig2, csig2, &c) - sin_series(ssig1, csig1, &c)));
        (s12, salp1, calp1, salp2, calp2)
    } else if sbet1 == 0.0 && chi12 <= PI - ellipsoid.f() * PI {
        // The geodesic runs along the equator (sbet2 == 0 follows from the
        // canonical octant); past the critical longitude the shortest path
        // leaves the equator and is found by Newton's method below.
        (ellipsoid.a().0 * chi12, 1.0, 0.0, 1.0, 0.0)
    } else {
        // The general case: point 2 lies within the hemisphere bounded by
        // the meridians lon12/2 +/- 90 centred on point 1.

        // A starting point for Newton's method
        let csig12 = sbet1 * sbet2 + cbet1 * cbet2 * cchi12;
        let mut salp1 = cbet2 * schi12;
        let mut calp1 = if cchi12 >= 0.0 {
            // f1 / n1 corrects the ellipsoid shape for short distances
            sbet12 * f1 / n1 + cbet2 * sbet1 * (schi12 * schi12) / (1.0 + cchi12)
        } else {
            sbet12a - cbet2 * sbet1 * (schi12 * schi12) / (1.0 - cchi12)
        };
        let ssig12 = libm::hypot(salp1, calp1);
        let chicrita = -cbet1 * longitude_scale(ellipsoid.f(), sbet1 * sbet1) * PI;

        if csig12 >= 0.0 || ssig12 >= 3.0 * chicrita * cbet1 {
            // The zeroth order spherical approximation suffices
            let (s, c) = normalise_sin_cos(salp1, calp1);
            salp1 = s;
            calp1 = c;
        } else {
            let x = (chi12 - PI) / chicrita;
            let y = sbet12a / (chicrita * cbet1);
            let (s, c) = antipodal_initial_azimuth(x, y, chicrita, sbet1, cbet2, sbet12a);
            salp1 = s;
            calp1 = c;
        }

        // Newton's method on chi12(alp1), rotating (salp1, calp1) by the
        // correction angle each step. The derivative is skipped once the
        // residual has passed tolerance and the following pass confirms it.
        let mut trip = 0;
        let mut converged = false;
        let mut r = longitude_residual(
            ellipsoid, sbet1, cbet1, sbet2, cbet2, salp1, calp1, true,
        );
        let mut v = r.chi12 - chi12;
        for _ in 1..MAX_ITERATIONS {
            if libm::fabs(v) <= tiny() || trip >= 1 {
                converged = true;
                break;
            }
            let dalp1 = -v / r.dchi12;
            let sdalp1 = libm::sin(dalp1);
            let cdalp1 = libm::cos(dalp1);
            let nsalp1 = salp1 * cdalp1 + calp1 * sdalp1;
            calp1 = calp1 * cdalp1 - salp1 * sdalp1;
            salp1 = nsalp1.max(0.0);
            let (s, c) = normalise_sin_cos(salp1, calp1);
            salp1 = s;
            calp1 = c;
            if libm::fabs(v) < TOLERANCE {
                trip += 1;
            }
            r = longitude_residual(
                ellipsoid, sbet1, cbet1, sbet2, cbet2, salp1, calp1, trip < 1,
            );
            v = r.chi12 - chi12;
        }
        if !(converged || libm::fabs(v) <= TOLERANCE) {
            return Err(Error::Convergence {
                lat1: lat1.0,
                lon1: lon1.0,
                lat2: lat2.0,
                lon2: lon2.0,
            });
        }

        let c = distance_coeffs(r.u2);
        let s12 = ellipsoid.b().0
            * distance_scale(r.u2)
            * (r.sig12
                + (sin_series(r.ssig2, r.csig2, &c) - sin_series(r.ssig1, r.csig1, &c)));
        (s12, salp1, calp1, r.salp2, r.calp2)
    };

    // Undo the canonical transforms on the azimuth sines and cosines
    let (salp1, calp1, salp2, calp2) = if swapp < 0.0 {
        (salp2, calp2, salp1, calp1)
    } else {
        (salp1, calp1, salp2, calp2)
    };

    // The minus signs give the range [-180, 180); 0 - collapses -0 to +0.
    let azi1 = 0.0
        - libm::atan2(-swapp * lonsign * salp1, swapp * latsign * calp1).to_degrees();
    let azi2 = 0.0
        - libm::atan2(-swapp * lonsign * salp2, swapp * latsign * calp2).to_degrees();

    Ok((Metres(s12), Degrees(azi1), Degrees(azi2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WGS84_ELLIPSOID;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_inverse_meridional() {
        // Northbound geodesic along a meridian
        let (s12, azi1, azi2) = inverse(
            &WGS84_ELLIPSOID,
            Degrees(-70.0),
            Degrees(40.0),
            Degrees(80.0),
            Degrees(40.0),
        )
        .unwrap();
        assert_eq!(0.0, azi1.0);
        assert_eq!(0.0, azi2.0);
        assert!(s12.0 > 0.0);

        // Southbound geodesic along a meridian
        let (s12_south, azi1, azi2) = inverse(
            &WGS84_ELLIPSOID,
            Degrees(80.0),
            Degrees(40.0),
            Degrees(-70.0),
            Degrees(40.0),
        )
        .unwrap();
        assert!(is_within_tolerance(180.0, azi1.0, 1.0e-12));
        assert!(is_within_tolerance(180.0, azi2.0, 1.0e-12));
        assert_eq!(s12.0, s12_south.0);
    }

    #[test]
    fn test_inverse_equatorial() {
        // Eastbound geodesic along the equator
        let (s12, azi1, azi2) = inverse(
            &WGS84_ELLIPSOID,
            Degrees(0.0),
            Degrees(-40.0),
            Degrees(0.0),
            Degrees(50.0),
        )
        .unwrap();
        assert!(is_within_tolerance(90.0, azi1.0, 1.0e-12));
        assert!(is_within_tolerance(90.0, azi2.0, 1.0e-12));
        assert!(is_within_tolerance(
            WGS84_ELLIPSOID.a().0 * 90.0_f64.to_radians(),
            s12.0,
            1.0e-6
        ));

        // Westbound geodesic along the equator
        let (s12_west, azi1, azi2) = inverse(
            &WGS84_ELLIPSOID,
            Degrees(0.0),
            Degrees(50.0),
            Degrees(0.0),
            Degrees(-40.0),
        )
        .unwrap();
        assert!(is_within_tolerance(-90.0, azi1.0, 1.0e-12));
        assert!(is_within_tolerance(-90.0, azi2.0, 1.0e-12));
        assert_eq!(s12.0, s12_west.0);
    }

    #[test]
    fn test_inverse_coincident_points() {
        let (s12, _, _) = inverse(
            &WGS84_ELLIPSOID,
            Degrees(40.0),
            Degrees(10.0),
            Degrees(40.0),
            Degrees(10.0),
        )
        .unwrap();
        assert_eq!(0.0, s12.0);

        // both points at the same pole
        let (s12, _, _) = inverse(
            &WGS84_ELLIPSOID,
            Degrees(90.0),
            Degrees(10.0),
            Degrees(90.0),
            Degrees(50.0),
        )
        .unwrap();
        assert!(libm::fabs(s12.0) < 1.0e-9);
    }

    #[test]
    fn test_inverse_domain_errors() {
        assert!(inverse(
            &WGS84_ELLIPSOID,
            Degrees(f64::NAN),
            Degrees(0.0),
            Degrees(0.0),
            Degrees(0.0)
        )
        .is_err());
        assert!(inverse(
            &WGS84_ELLIPSOID,
            Degrees(0.0),
            Degrees(f64::INFINITY),
            Degrees(0.0),
            Degrees(0.0)
        )
        .is_err());
        assert!(inverse(
            &WGS84_ELLIPSOID,
            Degrees(0.0),
            Degrees(0.0),
            Degrees(90.001),
            Degrees(0.0)
        )
        .is_err());
    }
}
