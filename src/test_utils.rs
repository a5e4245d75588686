//! Shared fixtures for unit tests

use crate::constants::columns;

/// Number of columns in a full OMNI2 hourly line
pub const OMNI2_COLUMN_COUNT: usize = 55;

/// Builds synthetic OMNI2 lines with quiet-time defaults
#[derive(Debug, Clone)]
pub struct OmniLineBuilder {
    tokens: Vec<String>,
}

impl OmniLineBuilder {
    pub fn new(year: i32, doy: u32, hour: u32) -> Self {
        let mut tokens = vec!["0".to_string(); OMNI2_COLUMN_COUNT];
        tokens[columns::YEAR] = year.to_string();
        tokens[columns::DAY_OF_YEAR] = doy.to_string();
        tokens[columns::HOUR] = hour.to_string();

        let builder = Self { tokens };
        builder
            .with(columns::IMF_MAGNITUDE, "5.2")
            .with(columns::IMF_BX_GSE, "1.1")
            .with(columns::IMF_BY_GSE, "-2.3")
            .with(columns::IMF_BZ_GSE, "1.5")
            .with(columns::PLASMA_TEMPERATURE, "95000.")
            .with(columns::PROTON_DENSITY, "5.0")
            .with(columns::PLASMA_SPEED, "400.")
            .with(columns::KP_TIMES_10, "13")
            .with(columns::DST, "-8")
    }

    /// Set the raw token at `column`
    pub fn with(mut self, column: usize, token: &str) -> Self {
        self.tokens[column] = token.to_string();
        self
    }

    pub fn density(self, token: &str) -> Self {
        self.with(columns::PROTON_DENSITY, token)
    }

    pub fn speed(self, token: &str) -> Self {
        self.with(columns::PLASMA_SPEED, token)
    }

    pub fn bz(self, token: &str) -> Self {
        self.with(columns::IMF_BZ_GSE, token)
    }

    pub fn kp(self, token: &str) -> Self {
        self.with(columns::KP_TIMES_10, token)
    }

    pub fn dst(self, token: &str) -> Self {
        self.with(columns::DST, token)
    }

    /// Drop trailing columns so the line has `count` tokens
    pub fn truncated(mut self, count: usize) -> Self {
        self.tokens.truncate(count);
        self
    }

    pub fn build(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Quiet-time lines for every hour of `doy`
pub fn quiet_day(year: i32, doy: u32) -> Vec<String> {
    (0..24)
        .map(|hour| OmniLineBuilder::new(year, doy, hour).build())
        .collect()
}
