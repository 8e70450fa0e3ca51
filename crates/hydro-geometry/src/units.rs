//! Unit conversions shared by the resolver, the layout builder and the reports.

/// Scene units are meters; parameters are centimeters.
pub const CM_TO_SCENE: f64 = 0.01;

pub const CM_PER_INCH: f64 = 2.54;

pub fn cm_to_scene(cm: f64) -> f64 {
    cm * CM_TO_SCENE
}

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Round to `decimals` places with ties going away from zero.
///
/// `format!("{:.1}")` rounds an exact tie to even, which turns a 6.25 cm cut
/// into "6.2"; shopping lists and tags print "6.3".
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// `value` with exactly `decimals` places, ties rounded up.
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, round_half_up(value, decimals as u32))
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Tilt of a tube, in degrees, for a drainage slope given in percent.
///
/// A 100% slope maps to 90 degrees, so 1% is 0.9 degrees.
pub fn slope_angle_deg(slope_percent: f64) -> f64 {
    3.6 * slope_percent / 4.0
}

pub fn slope_angle_rad(slope_percent: f64) -> f64 {
    deg_to_rad(slope_angle_deg(slope_percent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_slope_angle() {
        assert_relative_eq!(slope_angle_deg(2.0), 1.8);
        assert_relative_eq!(slope_angle_deg(0.0), 0.0);
        assert_relative_eq!(slope_angle_rad(100.0), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_fixed_rounds_ties_up() {
        assert_eq!(fixed(6.25, 1), "6.3");
        assert_eq!(fixed(16.25, 1), "16.3");
        assert_eq!(fixed(3.125, 2), "3.13");
        assert_eq!(fixed(-6.25, 1), "-6.3");
        assert_eq!(fixed(92.68292682926829, 1), "92.7");
        assert_eq!(fixed(80.0, 2), "80.00");
    }

    #[test]
    fn test_round_half_up() {
        assert_relative_eq!(round_half_up(6.25, 1), 6.3);
        assert_relative_eq!(round_half_up(6.24, 1), 6.2);
        assert_relative_eq!(round_half_up(7.0, 0), 7.0);
    }

    #[test]
    fn test_lengths() {
        assert_relative_eq!(cm_to_scene(220.0), 2.2);
        assert_relative_eq!(cm_to_inches(2.54), 1.0);
    }
}
