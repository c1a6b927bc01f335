use std::fmt;

/// One decoded measurement from the climate sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateData {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
}

impl ClimateData {
    /// Temperature in whole degrees Fahrenheit, fraction dropped.
    pub fn temperature_fahrenheit(&self) -> i32 {
        (self.temperature * 9.0 / 5.0 + 32.0) as i32
    }

    /// Humidity as a whole percentage, fraction dropped.
    pub fn humidity_percent(&self) -> i32 {
        self.humidity as i32
    }
}

/// Renders the report line consumed downstream, e.g.
/// `--temperature 71 --humidity 45`.
impl fmt::Display for ClimateData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "--temperature {} --humidity {}",
            self.temperature_fahrenheit(),
            self.humidity_percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn climate(temperature: f32, humidity: f32) -> ClimateData {
        ClimateData {
            temperature,
            humidity,
        }
    }

    #[test]
    fn converts_celsius_to_whole_fahrenheit() {
        assert_eq!(climate(20.0, 50.0).temperature_fahrenheit(), 68);
        assert_eq!(climate(0.0, 50.0).temperature_fahrenheit(), 32);
        assert_eq!(climate(-40.0, 50.0).temperature_fahrenheit(), -40);
    }

    #[test]
    fn conversion_truncates_toward_zero() {
        // -5.6C is 21.92F, dropping the fraction gives 21
        assert_eq!(climate(-5.6, 50.0).temperature_fahrenheit(), 21);
        assert_eq!(climate(36.6, 50.0).temperature_fahrenheit(), 97);
    }

    #[test]
    fn humidity_is_truncated_not_rounded() {
        assert_eq!(climate(20.0, 65.9).humidity_percent(), 65);
        assert_eq!(climate(20.0, 45.0).humidity_percent(), 45);
    }

    #[test]
    fn report_line_has_exact_flag_shape() {
        assert_eq!(
            climate(22.0, 45.0).to_string(),
            "--temperature 71 --humidity 45"
        );
    }

    #[test]
    fn report_line_is_stable_for_equal_readings() {
        let data = climate(18.3, 61.2);
        assert_eq!(data.to_string(), data.to_string());
    }
}
