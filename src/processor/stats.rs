//! Run statistics for the event pipeline
//!
//! Counts what happened to every requested year and every source line, so
//! dropped data is visible in logs even though it never fails a run.

/// Statistics for one pipeline run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    /// Years the date range touches
    pub years_requested: usize,
    /// Years whose source returned data
    pub years_fetched: usize,
    /// Years whose fetch failed or timed out
    pub years_failed: Vec<i32>,
    /// Total source lines seen
    pub lines_read: usize,
    /// Blank lines skipped
    pub blank_lines: usize,
    /// Lines dropped as malformed (too short or non-numeric)
    pub malformed_lines: usize,
    /// Records outside the requested date range
    pub out_of_range: usize,
    /// In-range records dropped for missing year/day/hour
    pub incomplete_timestamps: usize,
    /// Records in the output
    pub records_produced: usize,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed year
    pub fn add_failed_year(&mut self, year: i32) {
        self.years_failed.push(year);
    }

    /// True when no requested year could be fetched
    pub fn all_years_failed(&self) -> bool {
        self.years_requested > 0 && self.years_fetched == 0
    }

    /// Fold in the counters of another run
    pub fn merge(&mut self, other: &PipelineStats) {
        self.years_requested += other.years_requested;
        self.years_fetched += other.years_fetched;
        self.years_failed.extend_from_slice(&other.years_failed);
        self.lines_read += other.lines_read;
        self.blank_lines += other.blank_lines;
        self.malformed_lines += other.malformed_lines;
        self.out_of_range += other.out_of_range;
        self.incomplete_timestamps += other.incomplete_timestamps;
        self.records_produced += other.records_produced;
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Years: {}/{} fetched | Lines: {} read, {} malformed | \
             Records: {} produced, {} out of range, {} without timestamp",
            self.years_fetched,
            self.years_requested,
            self.lines_read,
            self.malformed_lines,
            self.records_produced,
            self.out_of_range,
            self.incomplete_timestamps
        )
    }
}
