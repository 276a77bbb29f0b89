use crate::core::data::colour::Rgb;

/// Maps a normalised escape fraction to the viewer's cubic colour ramp.
///
/// Every channel carries a `(1 - t)` factor, so points inside the set
/// (`t == 1`) and points escaping immediately (`t == 0`) are both black.
#[must_use]
pub fn cubic_ramp(t: f32) -> Rgb {
    let s = 1.0 - t;

    Rgb {
        r: 9.0 * s * t * t * t,
        g: 15.0 * s * s * t * t,
        b: 8.5 * s * s * s * t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_ends_of_ramp_are_black() {
        assert_eq!(cubic_ramp(0.0), Rgb::default());
        assert_eq!(cubic_ramp(1.0), Rgb::default());
    }

    #[test]
    fn test_midpoint_matches_polynomials() {
        let colour = cubic_ramp(0.5);

        assert!((colour.r - 0.5625).abs() < EPSILON);
        assert!((colour.g - 0.9375).abs() < EPSILON);
        assert!((colour.b - 0.53125).abs() < EPSILON);
    }

    #[test]
    fn test_channels_stay_within_unit_range() {
        for step in 0..=100 {
            let colour = cubic_ramp(step as f32 / 100.0);

            for channel in [colour.r, colour.g, colour.b] {
                assert!((0.0..=1.0).contains(&channel), "channel {} at step {}", channel, step);
            }
        }
    }

    #[test]
    fn test_low_fractions_lean_blue_and_high_fractions_lean_red() {
        let low = cubic_ramp(0.1);
        let high = cubic_ramp(0.9);

        assert!(low.b > low.r);
        assert!(high.r > high.b);
    }
}
