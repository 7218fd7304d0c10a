//! Application configuration
//!
//! Loaded from a TOML file, by default
//! `~/.config/texnouz-parking/config.toml`. Every section is optional and
//! falls back to its defaults.
//!
//! ```toml
//! [server]
//! api_host = "0.0.0.0"
//! api_port = 8080
//!
//! [facility]
//! slot_count = 20
//! currency = "INR"
//!
//! [rates]
//! night_rate = 10000
//! [rates.car]
//! standard = 15000
//! rush_surcharge = 3000
//!
//! [[holidays]]
//! date = "2025-08-15"
//! name = "Independence Day"
//! rush_from = "08:00"
//! rush_to = "14:00"
//! ```

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    HolidayCalendar, HolidayRecord, RateTable, RushWindow, SlotRegistry, TariffEngine,
    VehicleRate,
};

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Default config file location
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("texnouz-parking")
        .join("config.toml")
}

// ── Sections ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub api_host: String,
    pub api_port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
            shutdown_timeout: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`, or any `EnvFilter` directive
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilityConfig {
    pub name: String,
    pub slot_count: usize,
    pub currency: String,
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            name: "Texnouz Parking".to_string(),
            slot_count: 20,
            currency: "INR".to_string(),
        }
    }
}

/// Hourly rates in minor currency units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatesConfig {
    pub night_rate: i64,
    pub car: VehicleRate,
    pub bike: VehicleRate,
    pub truck: VehicleRate,
}

impl Default for RatesConfig {
    fn default() -> Self {
        let table = RateTable::default();
        Self {
            night_rate: table.night_rate,
            car: table.car,
            bike: table.bike,
            truck: table.truck,
        }
    }
}

// ── AppConfig ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub facility: FacilityConfig,
    pub rates: RatesConfig,
    pub holidays: Vec<HolidayRecord>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            facility: FacilityConfig::default(),
            rates: RatesConfig::default(),
            holidays: default_holidays(),
        }
    }
}

impl AppConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.facility.slot_count == 0 {
            return Err(ConfigError::Invalid(
                "facility.slot_count must be at least 1".to_string(),
            ));
        }
        if self.facility.currency.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "facility.currency must not be empty".to_string(),
            ));
        }

        let rates = [
            ("car", self.rates.car),
            ("bike", self.rates.bike),
            ("truck", self.rates.truck),
        ];
        for (name, rate) in rates {
            if rate.standard < 0 || rate.rush_surcharge < 0 {
                return Err(ConfigError::Invalid(format!(
                    "rates.{} must not be negative",
                    name
                )));
            }
        }
        if self.rates.night_rate < 0 {
            return Err(ConfigError::Invalid(
                "rates.night_rate must not be negative".to_string(),
            ));
        }

        for holiday in &self.holidays {
            if holiday.name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "holiday on {} has no name",
                    holiday.date
                )));
            }
            if holiday.rush.from == holiday.rush.to {
                return Err(ConfigError::Invalid(format!(
                    "holiday '{}' has an empty rush window",
                    holiday.name
                )));
            }
        }
        for pair in self.holiday_calendar().records().windows(2) {
            if pair[0].date == pair[1].date {
                return Err(ConfigError::Invalid(format!(
                    "holiday date {} is listed twice",
                    pair[0].date
                )));
            }
        }

        Ok(())
    }

    pub fn rate_table(&self) -> RateTable {
        RateTable {
            currency: self.facility.currency.clone(),
            car: self.rates.car,
            bike: self.rates.bike,
            truck: self.rates.truck,
            night_rate: self.rates.night_rate,
        }
    }

    pub fn holiday_calendar(&self) -> HolidayCalendar {
        HolidayCalendar::new(self.holidays.clone())
    }

    pub fn tariff_engine(&self) -> TariffEngine {
        TariffEngine::new(self.rate_table(), self.holiday_calendar())
    }

    pub fn slot_registry(&self) -> SlotRegistry {
        SlotRegistry::new(self.facility.slot_count)
    }
}

/// Holidays shipped with the default configuration: (date, name, rush window)
const DEFAULT_HOLIDAYS: &[((i32, u32, u32), &str, (u32, u32), (u32, u32))] = &[
    ((2025, 1, 1), "New Year's Day", (0, 0), (23, 59)),
    ((2025, 1, 26), "Republic Day", (8, 0), (14, 0)),
    ((2025, 2, 2), "Vasant Panchami", (9, 0), (17, 0)),
    ((2025, 2, 26), "Maha Shivaratri", (9, 0), (17, 0)),
    ((2025, 3, 13), "Holika Dahana", (9, 0), (22, 0)),
    ((2025, 3, 14), "Holi", (9, 0), (20, 0)),
    ((2025, 3, 28), "Jamat Ul-Vida", (9, 0), (17, 0)),
    ((2025, 3, 30), "Chaitra Sukhladi / Ugadi / Gudi Padwa", (9, 0), (17, 0)),
    ((2025, 3, 31), "Eid-ul-Fitr", (8, 0), (21, 0)),
    ((2025, 4, 6), "Rama Navami", (9, 0), (17, 0)),
    ((2025, 4, 10), "Mahavir Jayanti", (9, 0), (17, 0)),
    ((2025, 4, 18), "Good Friday", (8, 0), (16, 0)),
    ((2025, 5, 12), "Buddha Purnima", (9, 0), (18, 0)),
    ((2025, 6, 7), "Eid ul-Adha (Bakrid)", (8, 0), (21, 0)),
    ((2025, 7, 6), "Muharram", (7, 0), (19, 0)),
    ((2025, 8, 9), "Raksha Bandhan", (10, 0), (18, 0)),
    ((2025, 8, 15), "Independence Day", (8, 0), (14, 0)),
    ((2025, 8, 16), "Janmashtami", (8, 0), (23, 0)),
    ((2025, 8, 27), "Ganesh Chaturthi", (8, 0), (21, 0)),
    ((2025, 9, 5), "Milad-un-Nabi / Onam", (9, 0), (17, 0)),
    ((2025, 9, 29), "Maha Saptami", (6, 0), (23, 59)),
    ((2025, 9, 30), "Maha Ashtami", (6, 0), (23, 59)),
    ((2025, 10, 1), "Maha Navami", (6, 0), (23, 59)),
    ((2025, 10, 2), "Mahatma Gandhi Jayanti / Dussehra", (8, 0), (17, 0)),
    ((2025, 10, 7), "Maharishi Valmiki Jayanti", (9, 0), (17, 0)),
    ((2025, 10, 20), "Diwali", (10, 0), (23, 59)),
    ((2025, 10, 22), "Govardhan Puja", (9, 0), (18, 0)),
    ((2025, 10, 23), "Bhai Duj", (10, 0), (18, 0)),
    ((2025, 11, 5), "Guru Nanak Jayanti", (9, 0), (19, 0)),
    ((2025, 11, 24), "Guru Tegh Bahadur's Martyrdom Day", (9, 0), (17, 0)),
    ((2025, 12, 25), "Christmas Day", (9, 0), (22, 0)),
    ((2025, 12, 31), "New Year's Eve", (0, 0), (23, 59)),
];

pub fn default_holidays() -> Vec<HolidayRecord> {
    DEFAULT_HOLIDAYS
        .iter()
        .filter_map(|&((y, m, d), name, (fh, fm), (th, tm))| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            let from = NaiveTime::from_hms_opt(fh, fm, 0)?;
            let to = NaiveTime::from_hms_opt(th, tm, 0)?;
            Some(HolidayRecord::new(date, name, RushWindow::new(from, to)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();
        assert_eq!(config.facility.slot_count, 20);
        assert_eq!(config.holidays.len(), DEFAULT_HOLIDAYS.len());
        assert_eq!(config.rate_table(), RateTable::default());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn parses_sections() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            api_port = 9090

            [logging]
            format = "json"

            [facility]
            slot_count = 5
            currency = "EUR"

            [rates]
            night_rate = 500
            [rates.truck]
            standard = 4000
            rush_surcharge = 1000

            [[holidays]]
            date = "2025-08-15"
            name = "Independence Day"
            rush_from = "08:00"
            rush_to = "14:00"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.api_port, 9090);
        assert_eq!(config.server.api_host, "0.0.0.0");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.slot_registry().capacity(), 5);

        let rates = config.rate_table();
        assert_eq!(rates.currency, "EUR");
        assert_eq!(rates.night_rate, 500);
        assert_eq!(rates.truck.rush(), 5_000);
        assert_eq!(rates.car, RateTable::default().car);

        let calendar = config.holiday_calendar();
        assert_eq!(calendar.len(), 1);
        let day = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        assert!(calendar.find(day).unwrap().rush.contains_hour(9));
    }

    #[test]
    fn rejects_zero_slots() {
        let err = AppConfig::from_toml("[facility]\nslot_count = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_bad_holiday_time() {
        let err = AppConfig::from_toml(
            r#"
            [[holidays]]
            date = "2025-08-15"
            name = "Independence Day"
            rush_from = "8am"
            rush_to = "14:00"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_duplicate_holiday_dates() {
        let mut config = AppConfig::default();
        config.holidays.push(config.holidays[0].clone());
        assert!(config.validate().is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("parking-config-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");
        let mut config = AppConfig::default();
        config.facility.slot_count = 7;

        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/texnouz/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
