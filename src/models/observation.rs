use serde::{Deserialize, Serialize};

/// A single midday observation as read from the input table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "Midday_Temperature")]
    pub midday_temperature: f64,

    #[serde(rename = "Midday_Dew_Point")]
    pub midday_dew_point: f64,

    #[serde(rename = "Wind_Speed")]
    pub wind_speed: f64,

    /// Cloud cover in oktas
    #[serde(rename = "Cloud_Cover")]
    pub cloud_cover: f64,
}

impl Observation {
    pub fn new(
        midday_temperature: f64,
        midday_dew_point: f64,
        wind_speed: f64,
        cloud_cover: f64,
    ) -> Self {
        Self {
            midday_temperature,
            midday_dew_point,
            wind_speed,
            cloud_cover,
        }
    }
}
