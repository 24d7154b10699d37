//! Weather reading model and display methods

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Current weather conditions for one place, as received from the upstream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReading {
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    /// Relative humidity percentage (0-100)
    pub humidity_percent: u8,
    /// Wind speed in m/s
    pub wind_speed_mps: f64,
    /// Upstream description of the conditions, verbatim
    pub condition_text: String,
    /// When the reading was received
    pub fetched_at: DateTime<Utc>,
}

impl WeatherReading {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature_celsius)
    }

    /// Format humidity with unit
    #[must_use]
    pub fn format_humidity(&self) -> String {
        format!("{}%", self.humidity_percent)
    }

    /// Format wind speed with unit
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{} m/s", self.wind_speed_mps)
    }

    /// Condition text in sentence case ("clear sky" -> "Clear sky")
    #[must_use]
    pub fn condition_display(&self) -> String {
        let mut chars = self.condition_text.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}
