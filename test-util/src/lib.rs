//! Sample periodic curves for fourier-epicycle tests and benchmarks
//!
//! Every curve maps the unit time interval `[0, 1]` onto a closed path in the
//! complex plane and is returned as a plain closure, so it plugs directly
//! into `fourier_epicycle::PeriodicFunction`.

use num_complex::Complex64;
use std::f64::consts::TAU;

/// Unit circle traversed counterclockwise once per period
pub fn circle(t: f64) -> Complex64 {
    Complex64::cis(TAU * t)
}

/// Axis-aligned ellipse with the given semi-axes
pub fn ellipse(a: f64, b: f64) -> impl Fn(f64) -> Complex64 + Copy + Send + Sync {
    move |t| Complex64::new(a * f64::cos(TAU * t), b * f64::sin(TAU * t))
}

/// Lissajous figure with integer frequencies `p` (real axis) and `q`
/// (imaginary axis)
pub fn lissajous(p: u32, q: u32) -> impl Fn(f64) -> Complex64 + Copy + Send + Sync {
    move |t| {
        Complex64::new(
            f64::cos(TAU * f64::from(p) * t),
            f64::sin(TAU * f64::from(q) * t),
        )
    }
}

/// Boundary of the square with corners `±1 ± i`, traversed counterclockwise
/// at constant speed
///
/// Continuous but not smooth: the corners make its Fourier coefficients decay
/// slowly, which is handy for exercising large truncation orders.
pub fn square_path(t: f64) -> Complex64 {
    let s = 4.0 * t.rem_euclid(1.0);
    match s {
        _ if s < 1.0 => Complex64::new(1.0, 2.0 * s - 1.0),
        _ if s < 2.0 => Complex64::new(1.0 - 2.0 * (s - 1.0), 1.0),
        _ if s < 3.0 => Complex64::new(-1.0, 1.0 - 2.0 * (s - 2.0)),
        _ => Complex64::new(2.0 * (s - 3.0) - 1.0, -1.0),
    }
}
