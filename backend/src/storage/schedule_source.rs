//! # Schedule Sources
//!
//! Imports the school's day-type sheet. The sheet has one row per date:
//!
//! ```text
//! Date,Day Type,Notes
//! 08/18/2025,A Day,
//! 08/20/2025,A Day,Early Out
//! ```
//!
//! Dates arrive as `MM/DD/YYYY` and are stored as calendar dates. Rows with
//! an unreadable date are skipped with a warning. A source that cannot be
//! read at all never stops the server: the sample schedule stays in place.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::traits::ScheduleSource;
use crate::config::ScheduleSourceConfig;
use crate::domain::models::ScheduleEntry;
use crate::domain::schedule_store::ScheduleStore;

const SHEET_DATE_FORMAT: &str = "%m/%d/%Y";
const REQUIRED_COLUMNS: [&str; 2] = ["Date", "Day Type"];

/// One raw sheet row
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SheetRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Day Type")]
    pub day_type: String,
    #[serde(rename = "Notes", default)]
    pub notes: Option<String>,
}

/// Normalized rows ready to merge into the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub entries: Vec<ScheduleEntry>,
    /// Rows dropped for an unreadable date
    pub skipped: usize,
}

/// Parse sheet CSV. Fails only when a required column is missing; rows that
/// do not fit the columns are skipped.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<SheetRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("schedule sheet has no '{}' column", column);
        }
    }

    let mut rows = Vec::new();
    for (index, result) in csv_reader.deserialize::<SheetRow>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            // header is line 1
            Err(e) => warn!("Skipping unreadable sheet row {}: {}", index + 2, e),
        }
    }
    Ok(rows)
}

/// Convert raw rows into schedule entries, dropping rows whose date is not
/// `MM/DD/YYYY`
pub fn normalize_rows(rows: Vec<SheetRow>) -> ImportReport {
    let mut entries = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for row in rows {
        match NaiveDate::parse_from_str(row.date.trim(), SHEET_DATE_FORMAT) {
            Ok(date) => entries.push(ScheduleEntry::new(
                date,
                row.day_type.as_str(),
                row.notes.unwrap_or_default(),
            )),
            Err(_) => {
                warn!("⚠️ Could not parse date: {}", row.date);
                skipped += 1;
            }
        }
    }

    ImportReport { entries, skipped }
}

/// Fetch and normalize every row of `source`
pub async fn fetch_entries(source: &dyn ScheduleSource) -> Result<ImportReport> {
    let rows = source
        .fetch_rows()
        .await
        .with_context(|| format!("reading schedule from {}", source.describe()))?;
    Ok(normalize_rows(rows))
}

/// Merge `source` into `store`. Any failure is logged and leaves the store
/// as it was.
pub async fn load_schedule(source: &dyn ScheduleSource, store: &mut ScheduleStore) -> Option<ImportReport> {
    match fetch_entries(source).await {
        Ok(report) => {
            let applied = store.upsert_all(report.entries.iter().cloned());
            info!(
                "📋 Loaded {} dates from {} ({} skipped, {} known)",
                applied,
                source.describe(),
                report.skipped,
                store.len()
            );
            Some(report)
        }
        Err(e) => {
            error!("Error loading schedule: {:#}", e);
            warn!("Using sample schedule instead");
            None
        }
    }
}

/// Build the source named in the configuration, if any
pub fn build_schedule_source(config: &ScheduleSourceConfig) -> Option<Arc<dyn ScheduleSource>> {
    match config {
        ScheduleSourceConfig::None => None,
        ScheduleSourceConfig::Csv { path } => Some(Arc::new(CsvFileSource::new(path.clone()))),
        ScheduleSourceConfig::PublishedSheet { url } => {
            Some(Arc::new(PublishedSheetSource::new(url.clone())))
        }
    }
}

/// Sheet exported to a CSV file on disk
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ScheduleSource for CsvFileSource {
    async fn fetch_rows(&self) -> Result<Vec<SheetRow>> {
        if !self.path.exists() {
            bail!("schedule file {} not found", self.path.display());
        }
        let content = tokio::fs::read(&self.path).await?;
        read_rows(content.as_slice())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Spreadsheet published to the web as CSV
pub struct PublishedSheetSource {
    url: String,
    client: reqwest::Client,
}

impl PublishedSheetSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ScheduleSource for PublishedSheetSource {
    async fn fetch_rows(&self) -> Result<Vec<SheetRow>> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        read_rows(body.as_ref())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
