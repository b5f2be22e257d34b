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

//! The ellipsoid module contains functions for deriving the parameters of an
//! ellipsoid from its Semimajor axis and flattening ratio, together with the
//! series [`coefficients`] and the [`wgs84`] primary parameters.

#![allow(clippy::suboptimal_flops)]

pub mod coefficients;
pub mod wgs84;

use icao_units::si::Metres;

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use ellipsoid_geodesic::Metres;
/// use ellipsoid_geodesic::ellipsoid::{calculate_minor_axis, wgs84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b: Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(wgs84::A, 1.0 / wgs84::RECIP_F));
/// ```
#[must_use]
pub const fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use ellipsoid_geodesic::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 sq_eccentricity.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(1.0 / wgs84::RECIP_F));
/// ```
#[must_use]
pub const fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the second Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use ellipsoid_geodesic::ellipsoid::{calculate_sq_2nd_eccentricity, wgs84};
///
/// // The WGS 84 sq 2nd eccentricity.
/// assert_eq!(0.006739496742276434, calculate_sq_2nd_eccentricity(1.0 / wgs84::RECIP_F));
/// ```
#[must_use]
pub const fn calculate_sq_2nd_eccentricity(f: f64) -> f64 {
    let one_minus_f = 1.0 - f;
    calculate_sq_eccentricity(f) / (one_minus_f * one_minus_f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_parameters_of_a_sphere() {
        assert_eq!(wgs84::A, calculate_minor_axis(wgs84::A, 0.0));
        assert_eq!(0.0, calculate_sq_eccentricity(0.0));
        assert_eq!(0.0, calculate_sq_2nd_eccentricity(0.0));
    }

    #[test]
    fn test_derived_parameters_of_wgs84() {
        let f = 1.0 / wgs84::RECIP_F;
        assert_eq!(
            Metres(6_356_752.314_245_179),
            calculate_minor_axis(wgs84::A, f)
        );

        // e'^2 = e^2 / (1 - e^2)
        let e_2 = calculate_sq_eccentricity(f);
        let ep_2 = calculate_sq_2nd_eccentricity(f);
        assert!(e_2 < ep_2);
        assert!(angle_sc::is_within_tolerance(
            e_2 / (1.0 - e_2),
            ep_2,
            f64::EPSILON
        ));
    }
}
