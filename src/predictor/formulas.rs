use tracing::warn;

use crate::predictor::correction::correction_constant;
use crate::utils::constants::{
    DEW_POINT_COEFFICIENT, HALF_SUM_WEIGHT, MIDDAY_TEMP_COEFFICIENT, REGRESSION_INTERCEPT,
};

/// Overnight minimum from midday temperature and dew point with a known K
pub fn predict_min_temp(midday_temp: f64, dew_point: f64, k: f64) -> f64 {
    MIDDAY_TEMP_COEFFICIENT * midday_temp + DEW_POINT_COEFFICIENT * dew_point
        + REGRESSION_INTERCEPT
        + k
}

/// Overnight minimum, resolving K from wind speed and cloud cover.
///
/// Returns `None` when no correction band applies.
pub fn calculate_min_temp(
    midday_temp: f64,
    dew_point: f64,
    wind_speed: f64,
    cloud_cover: f64,
) -> Option<f64> {
    match correction_constant(wind_speed, cloud_cover) {
        Some(k) => Some(predict_min_temp(midday_temp, dew_point, k)),
        None => {
            warn!(
                wind_speed,
                cloud_cover, "No correction constant applies; minimum temperature is undefined"
            );
            None
        }
    }
}

/// Half-sum minimum used as the comparison value
pub fn calculate_actual_min_temp(midday_temp: f64, dew_point: f64, k: f64) -> f64 {
    HALF_SUM_WEIGHT * (midday_temp + dew_point) - k
}
