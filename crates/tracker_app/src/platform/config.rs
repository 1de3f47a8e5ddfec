//! Command-line and environment configuration.
//!
//! ```bash
//! job_tracker --base-url http://127.0.0.1:5000 --refresh-secs 300
//! JOB_TRACKER_URL=http://tracker.local:5000 JOB_TRACKER_LOG=both job_tracker
//! ```

use std::time::Duration;

use clap::Parser;
use tracker_engine::ClientSettings;

use super::logging::LogDestination;

#[derive(Debug, Clone, Parser)]
#[command(name = "job_tracker")]
#[command(about = "Terminal client for the job tracker backend")]
#[command(version)]
pub struct Config {
    /// Origin of the backend serving /api/*
    #[arg(
        short = 'u',
        long = "base-url",
        default_value = "http://127.0.0.1:5000",
        env = "JOB_TRACKER_URL"
    )]
    pub base_url: String,

    /// Seconds between automatic refreshes of stats and the current page
    #[arg(
        long = "refresh-secs",
        default_value = "300",
        env = "JOB_TRACKER_REFRESH_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub refresh_secs: u64,

    /// Idle time after the last search edit before the search applies
    #[arg(long = "debounce-ms", default_value = "500", env = "JOB_TRACKER_DEBOUNCE_MS")]
    pub debounce_ms: u64,

    /// Connect timeout; the transport default applies when unset
    #[arg(long = "connect-timeout-ms", env = "JOB_TRACKER_CONNECT_TIMEOUT_MS")]
    pub connect_timeout_ms: Option<u64>,

    /// Whole-request timeout; the transport default applies when unset
    #[arg(long = "request-timeout-ms", env = "JOB_TRACKER_REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: Option<u64>,

    /// Where log output goes
    #[arg(long = "log", value_enum, default_value = "file", env = "JOB_TRACKER_LOG")]
    pub log: LogDestination,
}

impl Config {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            connect_timeout: self.connect_timeout_ms.map(Duration::from_millis),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_override_defaults() {
        let config = Config::try_parse_from([
            "job_tracker",
            "--base-url",
            "http://tracker.local:8080",
            "--refresh-secs",
            "60",
            "--debounce-ms",
            "250",
            "--request-timeout-ms",
            "1500",
            "--log",
            "both",
        ])
        .expect("valid args");

        assert_eq!(config.base_url, "http://tracker.local:8080");
        assert_eq!(config.refresh_interval(), Duration::from_secs(60));
        assert_eq!(config.search_debounce(), Duration::from_millis(250));
        let settings = config.client_settings();
        assert_eq!(settings.request_timeout, Some(Duration::from_millis(1500)));
        assert_eq!(settings.connect_timeout, None);
        assert_eq!(config.log, LogDestination::Both);
    }

    #[test]
    fn defaults_refresh_every_five_minutes_and_debounce_half_a_second() {
        let config = Config::try_parse_from(["job_tracker"]).expect("valid args");

        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.refresh_interval(), Duration::from_secs(300));
        assert_eq!(config.search_debounce(), Duration::from_millis(500));
        assert_eq!(config.search_debounce(), tracker_core::SEARCH_DEBOUNCE);
        let settings = config.client_settings();
        assert_eq!(settings.connect_timeout, None);
        assert_eq!(settings.request_timeout, None);
        assert_eq!(config.log, LogDestination::File);
    }

    #[test]
    fn zero_refresh_interval_is_rejected() {
        assert!(Config::try_parse_from(["job_tracker", "--refresh-secs", "0"]).is_err());
    }
}
