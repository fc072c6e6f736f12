use std::f32::consts::PI;

/// Multiplier taking degrees to radians.
pub const DEG_TO_RAD: f32 = PI / 180.0;

/// Multiplier taking radians to degrees.
pub const RAD_TO_DEG: f32 = 180.0 / PI;

/// Converts an angle in degrees to radians.
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts an angle in radians to degrees.
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Clamps `value` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: when `min > max` the result is
/// `min`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(value.min(max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rng;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_deg_to_rad_half_turn() {
        assert!((deg_to_rad(180.0) - PI).abs() < EPSILON);
    }

    #[test]
    fn test_rad_to_deg_half_turn() {
        assert!((rad_to_deg(PI) - 180.0).abs() < EPSILON);
    }

    #[test]
    fn test_angle_conversion_round_trip() {
        for degrees in [-720.0, -90.0, 0.0, 30.0, 45.0, 360.0] {
            let round_trip = rad_to_deg(deg_to_rad(degrees));
            assert!(
                (round_trip - degrees).abs() < 1e-3,
                "{} round-tripped to {}",
                degrees,
                round_trip
            );
        }
    }

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp(-2.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_inverted_range_yields_min() {
        assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn test_clamp_stays_in_range_for_random_triples() {
        let mut rng = Rng::new(7);

        for _ in 0..1000 {
            let a = rng.gen_range(-100.0, 100.0);
            let b = rng.gen_range(-100.0, 100.0);
            let (min, max) = if a <= b { (a, b) } else { (b, a) };

            let value = rng.gen_range(-200.0, 200.0);
            let clamped = clamp(value, min, max);
            assert!(clamped >= min && clamped <= max);
        }
    }
}
