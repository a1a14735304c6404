/// Input defaults
pub const DEFAULT_FILE_PATH: &str = "met_office_data.csv";

/// Required CSV column names
pub const COL_MIDDAY_TEMPERATURE: &str = "Midday_Temperature";
pub const COL_MIDDAY_DEW_POINT: &str = "Midday_Dew_Point";
pub const COL_WIND_SPEED: &str = "Wind_Speed";
pub const COL_CLOUD_COVER: &str = "Cloud_Cover";

pub const REQUIRED_COLUMNS: [&str; 4] = [
    COL_MIDDAY_TEMPERATURE,
    COL_MIDDAY_DEW_POINT,
    COL_WIND_SPEED,
    COL_CLOUD_COVER,
];

/// Overnight minimum regression coefficients
pub const MIDDAY_TEMP_COEFFICIENT: f64 = 0.316;
pub const DEW_POINT_COEFFICIENT: f64 = 0.548;
pub const REGRESSION_INTERCEPT: f64 = -1.24;

/// Half-sum ("actual") minimum weighting
pub const HALF_SUM_WEIGHT: f64 = 0.5;

/// Terminal chart dimensions in character cells
pub const CHART_WIDTH: u32 = 100;
pub const CHART_HEIGHT: u32 = 30;
pub const BAR_CHART_WIDTH: u32 = 80;
pub const BAR_CHART_HEIGHT: u32 = 25;

/// Chart labels
pub const ACTUAL_SERIES_LABEL: &str = "Actual Minimum Temperature";
pub const PREDICTED_SERIES_LABEL: &str = "Predicted Minimum Temperature";
pub const ERROR_METRIC_LABELS: [&str; 3] = ["MAE", "MSE", "RMSE"];
