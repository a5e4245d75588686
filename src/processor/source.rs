//! Yearly OMNI2 data sources
//!
//! A [`YearSource`] hands the pipeline the raw lines of one calendar year.
//! Failures are reported per year so the pipeline can skip that partition
//! and keep going.

use crate::constants::{OMNI_FILE_EXTENSION, OMNI_FILE_PREFIX};
use crate::error::{OmniError, Result};
use std::collections::{BTreeSet, HashMap};
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use walkdir::WalkDir;

/// Provider of one text partition per calendar year
pub trait YearSource: Send + Sync {
    /// Raw lines of `year`, in file order
    fn fetch_year(&self, year: i32) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Short human-readable location for logs
    fn describe(&self) -> String;
}

/// Reads `omni2_YYYY.dat` files from a local directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `year`
    pub fn year_path(&self, year: i32) -> PathBuf {
        self.root.join(omni_file_name(year))
    }

    /// Years with a data file present in the root directory
    pub fn available_years(&self) -> Result<BTreeSet<i32>> {
        let mut years = BTreeSet::new();
        if !self.root.exists() {
            return Ok(years);
        }

        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                OmniError::configuration(format!(
                    "Failed to scan {}: {}",
                    self.root.display(),
                    e
                ))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(year) = year_from_file_name(&entry.file_name().to_string_lossy()) {
                years.insert(year);
            }
        }

        debug!(
            "Found {} OMNI year files in {}",
            years.len(),
            self.root.display()
        );
        Ok(years)
    }
}

impl YearSource for DirectorySource {
    async fn fetch_year(&self, year: i32) -> Result<Vec<String>> {
        let path = self.year_path(year);
        debug!("Reading {}", path.display());

        let contents = fs::read_to_string(&path)
            .await
            .map_err(|e| OmniError::source_fetch(year, format!("{}: {}", path.display(), e)))?;

        Ok(contents.lines().map(str::to_string).collect())
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Serves text blocks already held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    years: HashMap<i32, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the text of one year
    pub fn with_year(mut self, year: i32, text: impl Into<String>) -> Self {
        self.years.insert(year, text.into());
        self
    }

    /// Add one year from individual lines
    pub fn with_lines<I, S>(self, year: i32, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = lines
            .into_iter()
            .map(|line| line.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        self.with_year(year, text)
    }
}

impl YearSource for MemorySource {
    async fn fetch_year(&self, year: i32) -> Result<Vec<String>> {
        self.years
            .get(&year)
            .map(|text| text.lines().map(str::to_string).collect())
            .ok_or_else(|| OmniError::source_fetch(year, "no data loaded for this year"))
    }

    fn describe(&self) -> String {
        format!("memory ({} years)", self.years.len())
    }
}

/// `omni2_2003.dat`
pub fn omni_file_name(year: i32) -> String {
    format!("{}{}.{}", OMNI_FILE_PREFIX, year, OMNI_FILE_EXTENSION)
}

/// Extract the year from an OMNI2 file name (e.g. "omni2_2003.dat" -> Some(2003))
pub fn year_from_file_name(file_name: &str) -> Option<i32> {
    let stem = file_name
        .strip_prefix(OMNI_FILE_PREFIX)?
        .strip_suffix(OMNI_FILE_EXTENSION)?
        .strip_suffix('.')?;

    if stem.len() != 4 {
        return None;
    }
    stem.parse::<i32>().ok()
}
