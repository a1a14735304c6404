//! Correction constant K for the overnight minimum formula.
//!
//! K is chosen by wind speed band first, then by cloud cover band. Every
//! band is upper-inclusive and bands are tried in order, so a wind speed of
//! exactly 12 belongs to the first row. Wind speeds above the last band have
//! no constant.

/// Cloud cover bands shared by every wind row, in oktas
const CLOUD_BANDS: [f64; 4] = [2.0, 4.0, 6.0, f64::INFINITY];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindBand {
    pub max_wind_speed: f64,
    /// K for each entry of the cloud cover bands
    pub constants: [f64; 4],
}

pub const CORRECTION_TABLE: [WindBand; 4] = [
    WindBand {
        max_wind_speed: 12.0,
        constants: [-2.2, -1.7, -0.6, 0.0],
    },
    WindBand {
        max_wind_speed: 25.0,
        constants: [-1.1, 0.0, 0.6, 1.1],
    },
    WindBand {
        max_wind_speed: 38.0,
        constants: [-0.6, 0.0, 0.6, 1.1],
    },
    WindBand {
        max_wind_speed: 51.0,
        constants: [1.1, 1.7, 2.8, 3.5],
    },
];

/// Look up K for a wind speed and cloud cover.
///
/// Returns `None` when no band applies (wind above 51, or a NaN input).
/// That is an expected outcome, not a fault.
pub fn correction_constant(wind_speed: f64, cloud_cover: f64) -> Option<f64> {
    let band = CORRECTION_TABLE
        .iter()
        .find(|band| wind_speed <= band.max_wind_speed)?;

    CLOUD_BANDS
        .iter()
        .position(|max_cloud| cloud_cover <= *max_cloud)
        .map(|idx| band.constants[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_lookups() {
        assert_eq!(correction_constant(10.0, 2.0), Some(-2.2));
        assert_eq!(correction_constant(15.0, 4.0), Some(0.0));
        assert_eq!(correction_constant(30.0, 6.0), Some(0.6));
        assert_eq!(correction_constant(40.0, 8.0), Some(3.5));
        assert_eq!(correction_constant(60.0, 8.0), None);
    }

    #[test]
    fn test_calm_clear_band() {
        for wind in [0.0, 3.0, 7.5, 12.0] {
            for cloud in [0.0, 1.0, 2.0] {
                assert_eq!(correction_constant(wind, cloud), Some(-2.2));
            }
        }
    }

    #[test]
    fn test_boundaries_are_upper_inclusive() {
        assert_eq!(correction_constant(12.0, 2.0), Some(-2.2));
        assert_eq!(correction_constant(12.0, 4.0), Some(-1.7));
        assert_eq!(correction_constant(12.0, 6.0), Some(-0.6));
        assert_eq!(correction_constant(12.0, 7.0), Some(0.0));
        assert_eq!(correction_constant(25.0, 2.0), Some(-1.1));
        assert_eq!(correction_constant(38.0, 2.0), Some(-0.6));
        assert_eq!(correction_constant(51.0, 6.0), Some(2.8));
    }

    #[test]
    fn test_next_band_just_above_boundary() {
        assert_eq!(correction_constant(12.1, 2.0), Some(-1.1));
        assert_eq!(correction_constant(12.0, 2.1), Some(-1.7));
        assert_eq!(correction_constant(51.0001, 0.0), None);
    }

    #[test]
    fn test_strong_wind_overcast_band() {
        for wind in [38.5, 45.0, 51.0] {
            for cloud in [7.0, 8.0] {
                assert_eq!(correction_constant(wind, cloud), Some(3.5));
            }
        }
    }

    #[test]
    fn test_undefined_above_last_wind_band() {
        for cloud in 0..=8 {
            assert_eq!(correction_constant(52.0, cloud as f64), None);
            assert_eq!(correction_constant(120.0, cloud as f64), None);
        }
    }

    #[test]
    fn test_nan_inputs_are_undefined() {
        assert_eq!(correction_constant(f64::NAN, 2.0), None);
        assert_eq!(correction_constant(10.0, f64::NAN), None);
    }
}
