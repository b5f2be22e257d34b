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

//! ellipsoid-geodesic
//!
//! [![crates.io](https://img.shields.io/crates/v/ellipsoid-geodesic.svg)](https://crates.io/crates/ellipsoid-geodesic)
//! [![docs.io](https://docs.rs/ellipsoid-geodesic/badge.svg)](https://docs.rs/ellipsoid-geodesic/)
//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! A library for solving the direct and inverse
//! [geodesic](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid)
//! problems on an oblate ellipsoid of revolution, such as the
//! [WGS84](https://en.wikipedia.org/wiki/World_Geodetic_System) ellipsoid:
//!
//! - the **direct** problem: given a start position, an azimuth and a
//!   distance, find the end position and the azimuth there;
//! - the **inverse** problem: given two positions, find the distance between
//!   them along the shortest surface path and the azimuths at both ends.
//!
//! Following [Karney(2013)](https://link.springer.com/article/10.1007/s00190-012-0578-z),
//! a geodesic is mapped onto a great circle of an auxiliary sphere and the
//! corresponding problem is solved in
//! [great-circle navigation](https://en.wikipedia.org/wiki/Great-circle_navigation).
//! Truncated series (see [`ellipsoid::coefficients`]) convert spherical arc
//! lengths and longitudes back to ellipsoidal distances and longitudes. The
//! inverse problem is solved by Newton's method on the azimuth at the first
//! point; nearly antipodal configurations, where the problem is ill
//! conditioned, are seeded from the astroid construction of Karney section 7.
//!
//! The library is declared
//! [no_std](https://docs.rust-embedded.org/book/intro/no-std.html) and
//! depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`,
//!   `Radians` and the `Validate` trait;
//! - [icao-units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [libm](https://crates.io/crates/libm) - for the transcendental functions;
//! - [thiserror](https://crates.io/crates/thiserror) - to define the `Error`
//!   type.
//!
//! # Examples
//! ```
//! use ellipsoid_geodesic::{Degrees, Metres, WGS84_ELLIPSOID};
//! use angle_sc::is_within_tolerance;
//!
//! let istanbul = (Degrees(42.0), Degrees(29.0));
//! let washington = (Degrees(39.0), Degrees(-77.0));
//! let (s12, azi1, azi2) = WGS84_ELLIPSOID
//!     .inverse(istanbul.0, istanbul.1, washington.0, washington.1)
//!     .expect("valid coordinates");
//!
//! assert!(is_within_tolerance(8_339_863.136, s12.0, 1.0e-3));
//! assert!(is_within_tolerance(-50.693753041, azi1.0, 1.0e-9));
//! assert!(is_within_tolerance(-132.264660712, azi2.0, 1.0e-9));
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

pub mod ellipsoid;
pub mod geodesic;
pub mod numerics;

pub use angle_sc::{Degrees, Radians, Validate};
pub use icao_units::si::Metres;

use ellipsoid::coefficients::{
    arc_coeffs, distance_coeffs, distance_scale, longitude_coeffs, longitude_scale,
    sin_series, ORDER,
};
use ellipsoid::{
    calculate_minor_axis, calculate_sq_2nd_eccentricity, calculate_sq_eccentricity, wgs84,
};
use numerics::{normalise_angle, normalise_sin_cos, round_angle, tiny};

/// The errors returned by geodesic calculations.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// An input lies outside the domain of the calculation: a non-finite
    /// coordinate, a latitude beyond ±90° or a non-positive Semimajor axis.
    #[error("invalid geodesic input: {0}")]
    Domain(&'static str),

    /// The inverse solver failed to reach tolerance within its iteration
    /// cap. The input coordinates are reported verbatim.
    #[error(
        "geodesic inverse failed to converge between ({lat1}, {lon1}) and ({lat2}, {lon2})"
    )]
    Convergence {
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
    },
}

/// Check that a position has finite coordinates and a latitude within ±90°.
pub(crate) fn validate_position(lat: Degrees, lon: Degrees) -> Result<(), Error> {
    if !(lat.0.is_finite() && lon.0.is_finite()) {
        Err(Error::Domain("coordinate is not finite"))
    } else if libm::fabs(lat.0) > 90.0 {
        Err(Error::Domain("latitude is outside -90 to 90 degrees"))
    } else {
        Ok(())
    }
}

/// The parameters of an ellipsoid of revolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,
    /// One minus the flattening ratio.
    f1: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
    /// The Semiminor axis of the ellipsoid.
    b: Metres,
}

/// The WGS 84 ellipsoid.
pub const WGS84_ELLIPSOID: Ellipsoid = Ellipsoid::from_parameters(wgs84::A, wgs84::RECIP_F);

impl Ellipsoid {
    /// Construct an `Ellipsoid` from its Semimajor axis and the reciprocal
    /// of its flattening, without validating them.
    /// * `a` - the Semimajor axis of the ellipsoid.
    /// * `recip_f` - the reciprocal flattening; zero or negative means a
    ///   sphere.
    #[must_use]
    pub const fn from_parameters(a: Metres, recip_f: f64) -> Self {
        let f = if recip_f > 0.0 { 1.0 / recip_f } else { 0.0 };
        Self {
            a,
            f,
            f1: 1.0 - f,
            e_2: calculate_sq_eccentricity(f),
            ep_2: calculate_sq_2nd_eccentricity(f),
            b: calculate_minor_axis(a, f),
        }
    }

    /// Construct an `Ellipsoid`.
    /// * `a` - the Semimajor axis of the ellipsoid; must be finite and
    ///   positive.
    /// * `recip_f` - the reciprocal flattening; zero or negative means a
    ///   sphere.
    ///
    /// # Errors
    ///
    /// `Error::Domain` if either parameter is not finite or the axis is not
    /// positive.
    pub fn new(a: Metres, recip_f: f64) -> Result<Self, Error> {
        if !(a.0.is_finite() && recip_f.is_finite()) {
            Err(Error::Domain("ellipsoid parameter is not finite"))
        } else if a.0 <= 0.0 {
            Err(Error::Domain("Semimajor axis is not positive"))
        } else {
            Ok(Self::from_parameters(a, recip_f))
        }
    }

    /// Construct an `Ellipsoid` with the WGS 84 parameters.
    #[must_use]
    pub const fn wgs84() -> Self {
        WGS84_ELLIPSOID
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.f1
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// Construct a [`GeodesicLine`] from a start position and azimuth.
    /// * `lat1`, `lon1` - the geodetic coordinates of the start point.
    /// * `azi1` - the azimuth at the start point.
    ///
    /// # Errors
    ///
    /// `Error::Domain` for non-finite inputs or a latitude outside ±90°.
    pub fn line(
        &self,
        lat1: Degrees,
        lon1: Degrees,
        azi1: Degrees,
    ) -> Result<GeodesicLine, Error> {
        GeodesicLine::new(self, lat1, lon1, azi1)
    }

    /// Solve the direct geodesic problem: find the end position and azimuth
    /// given a start position, an azimuth and a signed distance.
    /// * `lat1`, `lon1` - the geodetic coordinates of the start point.
    /// * `azi1` - the azimuth at the start point.
    /// * `s12` - the distance along the geodesic, negative for backwards.
    ///
    /// returns the geodetic coordinates of the end point and the azimuth
    /// there.
    ///
    /// # Errors
    ///
    /// `Error::Domain` for non-finite inputs or a latitude outside ±90°.
    ///
    /// # Examples
    /// ```
    /// use ellipsoid_geodesic::{Degrees, Metres, WGS84_ELLIPSOID};
    /// use angle_sc::is_within_tolerance;
    ///
    /// let (lat2, lon2, azi2) = WGS84_ELLIPSOID
    ///     .direct(Degrees(40.0), Degrees(0.0), Degrees(30.0), Metres(10_000_000.0))
    ///     .expect("valid inputs");
    ///
    /// // the inverse problem recovers the azimuths and distance
    /// let (s12, azi1, azi2_inv) = WGS84_ELLIPSOID
    ///     .inverse(Degrees(40.0), Degrees(0.0), lat2, lon2)
    ///     .expect("valid coordinates");
    /// assert!(is_within_tolerance(10_000_000.0, s12.0, 1.0e-6));
    /// assert!(is_within_tolerance(30.0, azi1.0, 1.0e-9));
    /// assert!(is_within_tolerance(azi2.0, azi2_inv.0, 1.0e-9));
    /// ```
    pub fn direct(
        &self,
        lat1: Degrees,
        lon1: Degrees,
        azi1: Degrees,
        s12: Metres,
    ) -> Result<(Degrees, Degrees, Degrees), Error> {
        self.line(lat1, lon1, azi1)?.position(s12)
    }

    /// Solve the inverse geodesic problem: find the distance and azimuths of
    /// the shortest surface path between two positions.
    /// * `lat1`, `lon1` - the geodetic coordinates of the start point.
    /// * `lat2`, `lon2` - the geodetic coordinates of the finish point.
    ///
    /// returns the geodesic distance and the azimuths of the geodesic at the
    /// start and finish points.
    ///
    /// # Errors
    ///
    /// `Error::Domain` for non-finite inputs or latitudes outside ±90°;
    /// `Error::Convergence` if the solver fails to reach tolerance.
    pub fn inverse(
        &self,
        lat1: Degrees,
        lon1: Degrees,
        lat2: Degrees,
        lon2: Degrees,
    ) -> Result<(Metres, Degrees, Degrees), Error> {
        geodesic::inverse(self, lat1, lon1, lat2, lon2)
    }
}

/// A default Ellipsoid: WGS 84.
impl Default for Ellipsoid {
    fn default() -> Self {
        WGS84_ELLIPSOID
    }
}

impl Validate for Ellipsoid {
    /// Test whether an `Ellipsoid` is valid: a positive Semimajor axis and a
    /// flattening below one.
    fn is_valid(&self) -> bool {
        self.a.0.is_finite() && self.a.0 > 0.0 && self.f < 1.0
    }
}

/// A geodesic on the surface of an ellipsoid, anchored at a start position
/// and azimuth. Immutable after construction; positions along the geodesic
/// may be queried at arbitrary signed distances.
#[derive(Clone, Debug, PartialEq)]
pub struct GeodesicLine {
    /// The start position.
    lat1: Degrees,
    lon1: Degrees,
    /// The start azimuth, normalised into (-180, 180].
    azi1: Degrees,
    /// The sign absorbing the east/west symmetry of the geodesic.
    bsign: f64,
    /// One minus the flattening ratio of the ellipsoid.
    f1: f64,
    /// The sine and cosine of the azimuth at the northward equator crossing.
    salp0: f64,
    calp0: f64,
    /// The sine and cosine of the arc from the equator crossing.
    ssig1: f64,
    csig1: f64,
    /// The sine and cosine of the spherical longitude from the crossing.
    slam1: f64,
    clam1: f64,
    /// The scale from scaled arc length to distance, b * distance_scale(u2).
    s_scale: f64,
    /// The sine series value converting sigma1 to tau1.
    dtau1: f64,
    /// The sine and cosine of tau1 = sigma1 + dtau1.
    stau1: f64,
    ctau1: f64,
    /// The coefficients of the tau to sigma reversion series.
    arc_coeffs: [f64; ORDER],
    /// The longitude correction scale, sin(alp0) * longitude_scale(f, mu).
    dlam_scale: f64,
    /// The coefficients of the longitude correction series.
    lon_coeffs: [f64; ORDER],
    /// The longitude correction series evaluated at sigma1.
    dchi1: f64,
}

impl GeodesicLine {
    /// Construct a `GeodesicLine` from a start position and azimuth.
    /// * `ellipsoid` - the ellipsoid.
    /// * `lat1`, `lon1` - the geodetic coordinates of the start point.
    /// * `azi1` - the azimuth at the start point.
    ///
    /// # Errors
    ///
    /// `Error::Domain` for non-finite inputs or a latitude outside ±90°.
    pub fn new(
        ellipsoid: &Ellipsoid,
        lat1: Degrees,
        lon1: Degrees,
        azi1: Degrees,
    ) -> Result<Self, Error> {
        validate_position(lat1, lon1)?;
        if !azi1.0.is_finite() {
            return Err(Error::Domain("azimuth is not finite"));
        }

        let f1 = ellipsoid.one_minus_f();
        let lat = lat1.0;
        let mut azi = normalise_angle(azi1.0);
        let mut lon = lon1.0;

        // At a pole every azimuth is a meridian: fold the azimuth into a
        // longitude shift and head along the resulting meridian.
        if lat == 90.0 {
            lon -= azi - (if azi >= 0.0 { 180.0 } else { -180.0 });
            azi = -180.0;
        } else if lat == -90.0 {
            lon += azi;
            azi = 0.0;
        }
        // Guard against underflow in salp0
        azi = round_angle(azi);
        lon = normalise_angle(lon);
        let bsign = if azi >= 0.0 { 1.0 } else { -1.0 };
        azi *= bsign;

        // alp1 is in [0, pi]; enforce sin(pi) == 0 and cos(pi/2) == 0 rather
        // than skirt the ensuing problems.
        let alp1 = azi.to_radians();
        let salp1 = if azi == 180.0 { 0.0 } else { libm::sin(alp1) };
        let calp1 = if azi == 90.0 { 0.0 } else { libm::cos(alp1) };

        // Reduced latitude, with cbet1 = +eps at the poles
        let phi = lat.to_radians();
        let sbet1 = f1 * libm::sin(phi);
        let cbet1 = if libm::fabs(lat) == 90.0 {
            tiny()
        } else {
            libm::cos(phi)
        };
        let (sbet1, cbet1) = normalise_sin_cos(sbet1, cbet1);

        // alp0 in [0, pi/2 - |bet1|], from sin(alp1) * cos(bet1) = sin(alp0)
        let salp0 = salp1 * cbet1;
        // Alt: calp0 = hypot(sbet1, calp1 * cbet1); this is better when
        // salp1 = 0.
        let calp0 = libm::hypot(calp1, salp1 * sbet1);

        // Evaluate sig1 with tan(bet1) = tan(sig1) * cos(alp1); sig = 0 is
        // the nearest northward crossing of the equator. Evaluate lam1 with
        // tan(lam1) = sin(alp0) * tan(sig1); with alp0 in (0, pi/2] the
        // quadrants of sig and lam coincide. No atan2(0, 0) ambiguity at the
        // poles since cbet1 = +eps there; an equatorial line has sig1 = 0.
        let ssig1 = sbet1;
        let slam1 = salp0 * sbet1;
        let c1 = if sbet1 != 0.0 || calp1 != 0.0 {
            cbet1 * calp1
        } else {
            1.0
        };
        let (ssig1, csig1) = normalise_sin_cos(ssig1, c1); // sig1 in (-pi, pi]
        let (slam1, clam1) = normalise_sin_cos(slam1, c1);

        let mu = calp0 * calp0;
        let u2 = mu * ellipsoid.ep_2();

        let s_scale = ellipsoid.b().0 * distance_scale(u2);
        let dist_coeffs = distance_coeffs(u2);
        let dtau1 = sin_series(ssig1, csig1, &dist_coeffs);
        // tau1 = sig1 + dtau1 by angle addition
        let s = libm::sin(dtau1);
        let c = libm::cos(dtau1);
        let stau1 = ssig1 * c + csig1 * s;
        let ctau1 = csig1 * c - ssig1 * s;

        let f = ellipsoid.f();
        let dlam_scale = salp0 * longitude_scale(f, mu);
        let lon_coeffs = longitude_coeffs(f, mu);
        let dchi1 = sin_series(ssig1, csig1, &lon_coeffs);

        Ok(Self {
            lat1: Degrees(lat),
            lon1: Degrees(lon),
            azi1: Degrees(bsign * azi),
            bsign,
            f1,
            salp0,
            calp0,
            ssig1,
            csig1,
            slam1,
            clam1,
            s_scale,
            dtau1,
            stau1,
            ctau1,
            arc_coeffs: arc_coeffs(u2),
            dlam_scale,
            lon_coeffs,
            dchi1,
        })
    }

    /// The latitude of the start point.
    #[must_use]
    pub const fn lat1(&self) -> Degrees {
        self.lat1
    }

    /// The longitude of the start point, normalised; at a pole the azimuth
    /// is folded into the longitude.
    #[must_use]
    pub const fn lon1(&self) -> Degrees {
        self.lon1
    }

    /// The azimuth at the start point, normalised into (-180, 180].
    #[must_use]
    pub const fn azi1(&self) -> Degrees {
        self.azi1
    }

    /// Find the position and azimuth at a signed distance along the geodesic.
    /// * `s12` - the distance from the start point, negative for backwards.
    ///
    /// returns the geodetic coordinates of the position and the azimuth
    /// there.
    ///
    /// # Errors
    ///
    /// `Error::Domain` if the distance is not finite.
    pub fn position(&self, s12: Metres) -> Result<(Degrees, Degrees, Degrees), Error> {
        if !s12.0.is_finite() {
            return Err(Error::Domain("distance is not finite"));
        }

        let tau12 = s12.0 / self.s_scale;
        let s = libm::sin(tau12);
        let c = libm::cos(tau12);
        // tau2 = tau1 + tau12; the reversion series converts it to sig2
        let sig12 = tau12
            + (self.dtau1
                + sin_series(
                    self.stau1 * c + self.ctau1 * s,
                    self.ctau1 * c - self.stau1 * s,
                    &self.arc_coeffs,
                ));
        let s = libm::sin(sig12);
        let c = libm::cos(sig12);
        // sig2 = sig1 + sig12
        let ssig2 = self.ssig1 * c + self.csig1 * s;
        let csig2 = self.csig1 * c - self.ssig1 * s;
        // sin(bet2) = cos(alp0) * sin(sig2)
        let sbet2 = self.calp0 * ssig2;
        // Alt: cbet2 = hypot(csig2, salp0 * ssig2)
        let cbet2 = libm::hypot(self.salp0, self.calp0 * csig2);
        // tan(lam2) = sin(alp0) * tan(sig2); no need to normalise
        let slam2 = self.salp0 * ssig2;
        let clam2 = csig2;
        // tan(alp0) = cos(sig2) * tan(alp2); no need to normalise
        let salp2 = self.salp0;
        let calp2 = self.calp0 * csig2;
        // lam12 = lam2 - lam1
        let lam12 = libm::atan2(
            slam2 * self.clam1 - clam2 * self.slam1,
            clam2 * self.clam1 + slam2 * self.slam1,
        );
        let chi12 = lam12
            + self.dlam_scale
                * (sig12 + (sin_series(ssig2, csig2, &self.lon_coeffs) - self.dchi1));
        let lon12 = self.bsign * chi12.to_degrees();
        // AngNormalize would be wrong here: the longitude may have wrapped
        // multiple times.
        let lon12 = lon12 - 360.0 * libm::floor(lon12 / 360.0 + 0.5);

        let lat2 = libm::atan2(sbet2, self.f1 * cbet2).to_degrees();
        let lon2 = normalise_angle(self.lon1.0 + lon12);
        // The minus signs give the range [-180, 180); 0 - collapses -0 to +0.
        let azi2 = 0.0 - libm::atan2(-self.bsign * salp2, calp2).to_degrees();

        Ok((Degrees(lat2), Degrees(lon2), Degrees(azi2)))
    }
}

impl Validate for GeodesicLine {
    /// Test whether a `GeodesicLine` is valid: the equator crossing azimuth
    /// components form a unit (sin, cos) pair with non-negative cosine.
    fn is_valid(&self) -> bool {
        self.calp0 >= 0.0
            && angle_sc::is_within_tolerance(
                1.0,
                self.salp0 * self.salp0 + self.calp0 * self.calp0,
                4.0 * f64::EPSILON,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_wgs84_ellipsoid() {
        let geoid = WGS84_ELLIPSOID;
        assert_eq!(wgs84::A, geoid.a());
        assert_eq!(1.0 / wgs84::RECIP_F, geoid.f());
        assert_eq!(1.0 - 1.0 / wgs84::RECIP_F, geoid.one_minus_f());
        assert_eq!(0.0066943799901413165, geoid.e_2());
        assert_eq!(0.006739496742276434, geoid.ep_2());
        assert_eq!(Metres(6_356_752.314_245_179), geoid.b());

        assert_eq!(geoid, Ellipsoid::wgs84());
        assert_eq!(geoid, Ellipsoid::default());
        assert!(geoid.is_valid());
    }

    #[test]
    fn test_ellipsoid_new() {
        let sphere = Ellipsoid::new(Metres(6_371_000.0), 0.0).unwrap();
        assert_eq!(0.0, sphere.f());
        assert_eq!(sphere.a(), sphere.b());
        assert_eq!(0.0, sphere.e_2());
        assert!(sphere.is_valid());

        assert_eq!(
            Err(Error::Domain("Semimajor axis is not positive")),
            Ellipsoid::new(Metres(-6_378_137.0), wgs84::RECIP_F)
        );
        assert!(Ellipsoid::new(Metres(f64::NAN), wgs84::RECIP_F).is_err());
        assert!(Ellipsoid::new(wgs84::A, f64::INFINITY).is_err());
    }

    #[test]
    fn test_ellipsoid_traits() {
        let geoid = Ellipsoid::default();
        let geoid_copy = geoid;
        assert!(geoid_copy == geoid);

        println!("Ellipsoid: {:?}", geoid);
        println!("Error: {}", Error::Domain("coordinate is not finite"));
    }

    #[test]
    fn test_line_position_at_start() {
        let line = WGS84_ELLIPSOID
            .line(Degrees(45.0), Degrees(45.0), Degrees(30.0))
            .unwrap();
        assert!(line.is_valid());
        assert_eq!(45.0, line.lat1().0);
        assert_eq!(45.0, line.lon1().0);
        assert_eq!(30.0, line.azi1().0);

        let (lat, lon, azi) = line.position(Metres(0.0)).unwrap();
        assert!(is_within_tolerance(45.0, lat.0, 1.0e-9));
        assert!(is_within_tolerance(45.0, lon.0, 1.0e-9));
        assert!(is_within_tolerance(30.0, azi.0, 1.0e-9));
    }

    #[test]
    fn test_line_westbound_azimuth() {
        let line = WGS84_ELLIPSOID
            .line(Degrees(45.0), Degrees(45.0), Degrees(-30.0))
            .unwrap();
        assert_eq!(-30.0, line.azi1().0);

        let (lat, lon, azi) = line.position(Metres(0.0)).unwrap();
        assert!(is_within_tolerance(45.0, lat.0, 1.0e-9));
        assert!(is_within_tolerance(45.0, lon.0, 1.0e-9));
        assert!(is_within_tolerance(-30.0, azi.0, 1.0e-9));
    }

    #[test]
    fn test_line_from_north_pole() {
        // at the pole the azimuth selects the meridian to descend
        let line = WGS84_ELLIPSOID
            .line(Degrees(90.0), Degrees(0.0), Degrees(45.0))
            .unwrap();
        assert_eq!(135.0, line.lon1().0);

        let (lat, lon, _azi) = line.position(Metres(10_000.0)).unwrap();
        assert!(lat.0 < 90.0);
        assert!(is_within_tolerance(135.0, lon.0, 1.0e-6));
    }

    #[test]
    fn test_direct_equator_half_revolution() {
        // half the equator circumference reaches the antipodal longitude
        let s12 = Metres(core::f64::consts::PI * WGS84_ELLIPSOID.a().0);
        let (lat2, lon2, azi2) = WGS84_ELLIPSOID
            .direct(Degrees(0.0), Degrees(0.0), Degrees(90.0), s12)
            .unwrap();
        assert!(is_within_tolerance(0.0, lat2.0, 1.0e-12));
        assert!(is_within_tolerance(180.0, libm::fabs(lon2.0), 1.0e-9));
        assert!(is_within_tolerance(90.0, azi2.0, 1.0e-9));
    }

    #[test]
    fn test_position_signed_distance() {
        // a negative distance runs the geodesic backwards
        let (lat2, lon2, azi2) = WGS84_ELLIPSOID
            .direct(Degrees(40.0), Degrees(0.0), Degrees(30.0), Metres(1.0e6))
            .unwrap();
        let (lat, lon, _azi) = WGS84_ELLIPSOID
            .line(lat2, lon2, azi2)
            .unwrap()
            .position(Metres(-1.0e6))
            .unwrap();
        assert!(is_within_tolerance(40.0, lat.0, 1.0e-9));
        assert!(is_within_tolerance(0.0, lon.0, 1.0e-9));
    }

    #[test]
    fn test_line_domain_errors() {
        assert!(WGS84_ELLIPSOID
            .line(Degrees(91.0), Degrees(0.0), Degrees(0.0))
            .is_err());
        assert!(WGS84_ELLIPSOID
            .line(Degrees(0.0), Degrees(0.0), Degrees(f64::NAN))
            .is_err());

        let line = WGS84_ELLIPSOID
            .line(Degrees(0.0), Degrees(0.0), Degrees(90.0))
            .unwrap();
        assert!(line.position(Metres(f64::INFINITY)).is_err());
    }
}
