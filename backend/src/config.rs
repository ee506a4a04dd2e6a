//! # Configuration
//!
//! Optional YAML file read from the working directory at startup. Every
//! field has a default, so the server runs without one.
//!
//! ```yaml
//! host: "127.0.0.1"
//! port: 8050
//! initial_week: "2025-08-18"
//! cors_origin: "http://localhost:8080"
//! schedule_source:
//!   kind: csv
//!   path: "schedule.csv"
//! ```
//!
//! `schedule_source.kind` is one of `none`, `csv` (with `path`) or
//! `published_sheet` (with `url`). Setting `initial_week: null` opens on the
//! Monday of the current week.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::week_resolver::monday_of;

pub const CONFIG_FILE_NAME: &str = "library_calendar.yaml";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;

/// Where imported schedule rows come from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleSourceConfig {
    /// Sample schedule only
    #[default]
    None,
    /// Sheet exported to a CSV file
    Csv { path: PathBuf },
    /// Sheet published to the web as CSV
    PublishedSheet { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Week shown when the page first opens
    pub initial_week: Option<NaiveDate>,
    /// Extra origin allowed to call the API from another host
    pub cors_origin: Option<String>,
    pub schedule_source: ScheduleSourceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            initial_week: NaiveDate::from_ymd_opt(2025, 8, 18),
            cors_origin: None,
            schedule_source: ScheduleSourceConfig::None,
        }
    }
}

impl AppConfig {
    /// Load `library_calendar.yaml` from the working directory
    pub fn load_default() -> Result<Self> {
        Self::load(Path::new(CONFIG_FILE_NAME))
    }

    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }

    /// First day of the week shown at startup
    pub fn start_week(&self) -> NaiveDate {
        self.initial_week
            .unwrap_or_else(|| monday_of(Local::now().date_naive()))
    }
}
