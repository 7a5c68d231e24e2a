use std::time::Duration;

/// Client-side behaviour knobs, provided as context at the root of the app.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Time the simulated VIN scanner takes before reporting a vehicle.
    pub vin_scan_delay: Duration,
    /// Time before the mechanic's canned reply arrives.
    pub mechanic_reply_delay: Duration,
    pub toast_short: Duration,
    pub toast_long: Duration,
    /// What the simulated scanner "reads".
    pub sample_vin: String,
    pub sample_vin_vehicle: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            vin_scan_delay: Duration::from_millis(2000),
            mechanic_reply_delay: Duration::from_millis(2000),
            toast_short: Duration::from_millis(3000),
            toast_long: Duration::from_millis(4000),
            sample_vin: "1HGBH41JXMN109186".to_string(),
            sample_vin_vehicle: "2021 Honda Accord".to_string(),
        }
    }
}

impl AppConfig {
    /// Same behaviour with every delay cut down, for browser tests.
    pub fn with_short_delays() -> Self {
        AppConfig {
            vin_scan_delay: Duration::from_millis(20),
            mechanic_reply_delay: Duration::from_millis(20),
            toast_short: Duration::from_millis(50),
            toast_long: Duration::from_millis(50),
            ..AppConfig::default()
        }
    }

    /// Text of the "VIN Detected!" toast.
    pub fn vin_detected_message(&self) -> String {
        format!("{} - {}", self.sample_vin, self.sample_vin_vehicle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vin_message() {
        assert_eq!(
            AppConfig::default().vin_detected_message(),
            "1HGBH41JXMN109186 - 2021 Honda Accord"
        );
    }

    #[test]
    fn short_delays_keep_the_sample_vehicle() {
        let fast = AppConfig::with_short_delays();
        assert!(fast.vin_scan_delay < AppConfig::default().vin_scan_delay);
        assert_eq!(fast.sample_vin, AppConfig::default().sample_vin);
    }
}
