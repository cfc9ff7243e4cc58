//! Cinema configuration.
//!
//! Loaded from `CINEMA_*` environment variables on top of built-in defaults, and
//! fixed for the whole run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CLIENT_COUNT: usize = 8;
pub const DEFAULT_ROOM_CAPACITY: usize = 4;
pub const DEFAULT_TICKET_CAPACITY: u32 = 6;
pub const DEFAULT_BOARDING_MS: u64 = 3000;
pub const DEFAULT_SCREENING_MS: u64 = 5000;
pub const DEFAULT_CLEANING_MS: u64 = 2000;
pub const DEFAULT_DEPARTURE_MS: u64 = 500;
pub const DEFAULT_MAILBOX_SIZE: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CinemaConfig {
    /// Customers spawned at opening time.
    pub client_count: usize,
    /// Seats in the screening room.
    pub room_capacity: usize,
    /// Tickets on sale for the whole day. Zero means sold out.
    pub ticket_capacity: u32,
    /// Time the room stays open for boarding.
    pub boarding_ms: u64,
    /// Length of the film.
    pub screening_ms: u64,
    /// Time spent cleaning between shows.
    pub cleaning_ms: u64,
    /// Pause between leaving the room and leaving the cinema.
    pub departure_ms: u64,
    /// Capacity of each resource actor's mailbox.
    pub mailbox_size: usize,
    /// Cancels everything still running once elapsed.
    pub deadline_ms: Option<u64>,
    /// CSV file whose first column holds customer names.
    pub names_file: Option<PathBuf>,
}

impl Default for CinemaConfig {
    fn default() -> Self {
        Self {
            client_count: DEFAULT_CLIENT_COUNT,
            room_capacity: DEFAULT_ROOM_CAPACITY,
            ticket_capacity: DEFAULT_TICKET_CAPACITY,
            boarding_ms: DEFAULT_BOARDING_MS,
            screening_ms: DEFAULT_SCREENING_MS,
            cleaning_ms: DEFAULT_CLEANING_MS,
            departure_ms: DEFAULT_DEPARTURE_MS,
            mailbox_size: DEFAULT_MAILBOX_SIZE,
            deadline_ms: None,
            names_file: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("The screening room needs at least one seat")]
    ZeroRoomCapacity,

    #[error("Mailbox size must be at least 1")]
    ZeroMailbox,

    #[error("Cannot read names file {path}: {reason}")]
    NamesFile { path: String, reason: String },
}

fn parse_var<T: std::str::FromStr>(
    vars: &HashMap<String, String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match vars.get(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.clone(),
        }),
    }
}

impl CinemaConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let deadline_ms = match vars.get("CINEMA_DEADLINE_MS") {
            None => None,
            Some(_) => Some(parse_var(vars, "CINEMA_DEADLINE_MS", 0u64)?),
        };

        let config = Self {
            client_count: parse_var(vars, "CINEMA_CLIENT_COUNT", defaults.client_count)?,
            room_capacity: parse_var(vars, "CINEMA_ROOM_CAPACITY", defaults.room_capacity)?,
            ticket_capacity: parse_var(vars, "CINEMA_TICKET_CAPACITY", defaults.ticket_capacity)?,
            boarding_ms: parse_var(vars, "CINEMA_BOARDING_MS", defaults.boarding_ms)?,
            screening_ms: parse_var(vars, "CINEMA_SCREENING_MS", defaults.screening_ms)?,
            cleaning_ms: parse_var(vars, "CINEMA_CLEANING_MS", defaults.cleaning_ms)?,
            departure_ms: parse_var(vars, "CINEMA_DEPARTURE_MS", defaults.departure_ms)?,
            mailbox_size: defaults.mailbox_size,
            deadline_ms,
            names_file: vars.get("CINEMA_NAMES_FILE").map(PathBuf::from),
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the cinema cannot run with. Called before anything is spawned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_capacity == 0 {
            return Err(ConfigError::ZeroRoomCapacity);
        }
        if self.mailbox_size == 0 {
            return Err(ConfigError::ZeroMailbox);
        }
        Ok(())
    }

    pub fn boarding(&self) -> Duration {
        Duration::from_millis(self.boarding_ms)
    }

    pub fn screening(&self) -> Duration {
        Duration::from_millis(self.screening_ms)
    }

    pub fn cleaning(&self) -> Duration {
        Duration::from_millis(self.cleaning_ms)
    }

    pub fn departure(&self) -> Duration {
        Duration::from_millis(self.departure_ms)
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = CinemaConfig::from_vars(&HashMap::new()).unwrap();
        assert_eq!(config, CinemaConfig::default());
        assert_eq!(config.client_count, 8);
        assert_eq!(config.room_capacity, 4);
        assert_eq!(config.ticket_capacity, 6);
        assert_eq!(config.boarding(), Duration::from_secs(3));
        assert_eq!(config.deadline(), None);
    }

    #[test]
    fn test_overrides_from_vars() {
        let config = CinemaConfig::from_vars(&vars(&[
            ("CINEMA_CLIENT_COUNT", "20"),
            ("CINEMA_TICKET_CAPACITY", "0"),
            ("CINEMA_SCREENING_MS", " 10 "),
            ("CINEMA_DEADLINE_MS", "60000"),
            ("CINEMA_NAMES_FILE", "names.csv"),
        ]))
        .unwrap();

        assert_eq!(config.client_count, 20);
        assert_eq!(config.ticket_capacity, 0);
        assert_eq!(config.screening(), Duration::from_millis(10));
        assert_eq!(config.deadline(), Some(Duration::from_secs(60)));
        assert_eq!(config.names_file, Some(PathBuf::from("names.csv")));
    }

    #[test]
    fn test_zero_room_capacity_is_rejected() {
        let result = CinemaConfig::from_vars(&vars(&[("CINEMA_ROOM_CAPACITY", "0")]));
        assert_eq!(result, Err(ConfigError::ZeroRoomCapacity));
    }

    #[test]
    fn test_negative_values_do_not_parse() {
        let result = CinemaConfig::from_vars(&vars(&[("CINEMA_TICKET_CAPACITY", "-1")]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                key: "CINEMA_TICKET_CAPACITY".to_string(),
                value: "-1".to_string(),
            })
        );
    }

    #[test]
    fn test_json_round_trip_fills_missing_fields_with_defaults() {
        let config = CinemaConfig {
            client_count: 3,
            deadline_ms: Some(500),
            names_file: Some(PathBuf::from("names.csv")),
            ..CinemaConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: CinemaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let partial: CinemaConfig =
            serde_json::from_str(r#"{"room_capacity": 2, "screening_ms": 100}"#).unwrap();
        assert_eq!(partial.room_capacity, 2);
        assert_eq!(partial.screening(), Duration::from_millis(100));
        assert_eq!(partial.client_count, DEFAULT_CLIENT_COUNT);
        assert_eq!(partial.deadline_ms, None);
    }

    #[test]
    fn test_zero_mailbox_is_rejected() {
        let config = CinemaConfig {
            mailbox_size: 0,
            ..CinemaConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMailbox));
    }
}
