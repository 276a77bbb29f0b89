use crate::core::data::complex::Complex;

pub const DEFAULT_ESCAPE_RADIUS_SQUARED: f64 = 100.0;

/// Runs the bounded escape-time loop for `c` and returns the number of steps
/// taken before `|z|²` exceeded `escape_radius_squared`, normalised by
/// `max_iterations`.
///
/// Points that never escape return `1.0`. A zero bound returns `0.0`.
#[must_use]
pub fn escape_fraction(c: Complex, max_iterations: u32, escape_radius_squared: f64) -> f64 {
    if max_iterations == 0 {
        return 0.0;
    }

    let mut z = Complex::default();
    let mut steps: u32 = 0;

    for _ in 0..max_iterations {
        z = z.square() + c;
        if z.magnitude_squared() > escape_radius_squared {
            break;
        }
        steps += 1;
    }

    f64::from(steps) / f64::from(max_iterations)
}
