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

//! The numerics module contains the elementary floating point helpers used
//! throughout the geodesic calculations: angle normalisation and rounding in
//! degrees, renormalisation of (sin, cos) pairs and the tolerances that
//! control the inverse solver.

#![allow(clippy::float_cmp)]

/// The tolerance for the Newton iterations of the inverse solver, in radians.
pub const TOLERANCE: f64 = 100.0 * f64::EPSILON;

/// The square root of the machine epsilon.
#[must_use]
pub fn sqrt_epsilon() -> f64 {
    libm::sqrt(f64::EPSILON)
}

/// The underflow guard: the square root of the smallest positive normal
/// double. It satisfies `tiny() * EPSILON > 0` and
/// `tiny() + EPSILON == EPSILON`, so values clamped to it survive the
/// divisions they later appear in.
#[must_use]
pub fn tiny() -> f64 {
    libm::sqrt(f64::MIN_POSITIVE)
}

/// Normalise an angle in degrees into the range (-180, 180].
#[must_use]
pub fn normalise_angle(x: f64) -> f64 {
    let mut x = x;
    while x <= -180.0 {
        x += 360.0;
    }
    while x > 180.0 {
        x -= 360.0;
    }
    x
}

/// Round a tiny angle in degrees to zero, preserving its sign.
///
/// Forming `z - (z - y)` with z = 1/16 rounds y to a multiple of the ULP of
/// 1/16, so angles below about 1.4e-17 degrees collapse to zero. This makes
/// meridional and equatorial configurations detectable by exact comparison.
#[must_use]
pub fn round_angle(x: f64) -> f64 {
    const Z: f64 = 1.0 / 16.0;
    let mut y = libm::fabs(x);
    if y < Z {
        y = Z - (Z - y);
    }
    if x < 0.0 {
        -y
    } else {
        y
    }
}

/// Scale a (sin, cos) pair so that it lies on the unit circle.
///
/// The pair must not be (0, 0); the pole guards in the callers ensure that
/// the cosine operand is at least [`tiny`] whenever the sine can vanish.
#[must_use]
pub fn normalise_sin_cos(s: f64, c: f64) -> (f64, f64) {
    let r = libm::hypot(s, c);
    (s / r, c / r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_normalise_angle() {
        assert_eq!(0.0, normalise_angle(0.0));
        assert_eq!(0.0, normalise_angle(-360.0));
        assert_eq!(180.0, normalise_angle(180.0));
        assert_eq!(180.0, normalise_angle(-180.0));
        assert_eq!(180.0, normalise_angle(540.0));
        assert_eq!(-179.0, normalise_angle(181.0));
        assert_eq!(-90.0, normalise_angle(270.0));

        // idempotent over a sweep of already normalised angles
        for i in -179..=180 {
            let x = f64::from(i);
            assert_eq!(x, normalise_angle(normalise_angle(x)));
        }
    }

    #[test]
    fn test_round_angle() {
        assert_eq!(0.0, round_angle(1.0e-18));
        let neg = round_angle(-1.0e-18);
        assert_eq!(0.0, neg);
        assert!(neg.is_sign_negative());

        // values above the threshold are essentially unchanged
        assert!(is_within_tolerance(1.0e-10, round_angle(1.0e-10), 1.0e-16));
        assert_eq!(0.0625, round_angle(0.0625));
        assert_eq!(-90.0, round_angle(-90.0));
        assert_eq!(179.5, round_angle(179.5));
    }

    #[test]
    fn test_normalise_sin_cos() {
        let (s, c) = normalise_sin_cos(3.0, 4.0);
        assert_eq!(0.6, s);
        assert_eq!(0.8, c);

        let (s, c) = normalise_sin_cos(0.0, tiny());
        assert_eq!(0.0, s);
        assert_eq!(1.0, c);
    }

    #[test]
    fn test_tolerances() {
        assert!(0.0 < tiny());
        assert_eq!(f64::EPSILON, tiny() + f64::EPSILON);
        assert!(TOLERANCE < sqrt_epsilon());
        assert!(sqrt_epsilon() < 1.0e-7);
    }
}
