//! Enumerated OMNI2 column schema
//!
//! Each field the pipeline reads is described once by a [`FieldSpec`]:
//! its column position, missing-data sentinel, unit, and the physically
//! valid range its sentinel must fall outside of. The table is checked
//! for consistency when the schema is built.

use crate::constants::{MIN_TOKENS_PER_LINE, SENTINEL_TOLERANCE, columns, sentinels};
use crate::error::{OmniError, Result};
use crate::models::OmniField;
use std::collections::HashSet;
use tracing::debug;

/// Description of one OMNI2 column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub field: OmniField,
    /// 0-indexed token position
    pub column: usize,
    /// Fill value meaning "no data"; `None` for calendar columns
    pub sentinel: Option<f64>,
    pub unit: &'static str,
    /// Inclusive range of physically meaningful values
    pub valid_range: (f64, f64),
}

impl FieldSpec {
    const fn new(
        field: OmniField,
        column: usize,
        sentinel: Option<f64>,
        unit: &'static str,
        valid_range: (f64, f64),
    ) -> Self {
        Self {
            field,
            column,
            sentinel,
            unit,
            valid_range,
        }
    }
}

/// Standard OMNI2 hourly layout
pub const STANDARD_FIELDS: [FieldSpec; 12] = [
    FieldSpec::new(OmniField::Year, columns::YEAR, None, "year", (1963.0, 2100.0)),
    FieldSpec::new(OmniField::DayOfYear, columns::DAY_OF_YEAR, None, "day", (1.0, 366.0)),
    FieldSpec::new(OmniField::Hour, columns::HOUR, None, "hour", (0.0, 23.0)),
    FieldSpec::new(
        OmniField::ImfMagnitude,
        columns::IMF_MAGNITUDE,
        Some(sentinels::FIELD_OR_DENSITY),
        "nT",
        (0.0, 500.0),
    ),
    FieldSpec::new(
        OmniField::ImfBx,
        columns::IMF_BX_GSE,
        Some(sentinels::FIELD_OR_DENSITY),
        "nT",
        (-500.0, 500.0),
    ),
    FieldSpec::new(
        OmniField::ImfBy,
        columns::IMF_BY_GSE,
        Some(sentinels::FIELD_OR_DENSITY),
        "nT",
        (-500.0, 500.0),
    ),
    FieldSpec::new(
        OmniField::ImfBz,
        columns::IMF_BZ_GSE,
        Some(sentinels::FIELD_OR_DENSITY),
        "nT",
        (-500.0, 500.0),
    ),
    FieldSpec::new(
        OmniField::PlasmaTemperature,
        columns::PLASMA_TEMPERATURE,
        Some(sentinels::TEMPERATURE),
        "K",
        (0.0, 5_000_000.0),
    ),
    FieldSpec::new(
        OmniField::ProtonDensity,
        columns::PROTON_DENSITY,
        Some(sentinels::FIELD_OR_DENSITY),
        "n/cc",
        (0.0, 500.0),
    ),
    FieldSpec::new(
        OmniField::PlasmaSpeed,
        columns::PLASMA_SPEED,
        Some(sentinels::SPEED),
        "km/s",
        (0.0, 3000.0),
    ),
    FieldSpec::new(
        OmniField::KpTimes10,
        columns::KP_TIMES_10,
        Some(sentinels::KP),
        "Kp*10",
        (0.0, 90.0),
    ),
    FieldSpec::new(
        OmniField::Dst,
        columns::DST,
        Some(sentinels::DST),
        "nT",
        (-2000.0, 500.0),
    ),
];

/// Validated column schema
#[derive(Debug, Clone, PartialEq)]
pub struct OmniSchema {
    fields: Vec<FieldSpec>,
    min_tokens: usize,
}

impl OmniSchema {
    /// The standard OMNI2 schema
    pub fn standard() -> Result<Self> {
        Self::new(STANDARD_FIELDS.to_vec(), MIN_TOKENS_PER_LINE)
    }

    /// Build a schema, rejecting inconsistent tables
    pub fn new(fields: Vec<FieldSpec>, min_tokens: usize) -> Result<Self> {
        let mut seen_fields = HashSet::new();
        let mut seen_columns = HashSet::new();

        for spec in &fields {
            if !seen_fields.insert(spec.field) {
                return Err(invalid(format!("field '{}' is listed twice", spec.field)));
            }
            if !seen_columns.insert(spec.column) {
                return Err(invalid(format!(
                    "column {} is used by more than one field ('{}')",
                    spec.column, spec.field
                )));
            }
            if spec.column >= min_tokens {
                return Err(invalid(format!(
                    "column {} of '{}' is not covered by the minimum token count {}",
                    spec.column, spec.field, min_tokens
                )));
            }

            let (low, high) = spec.valid_range;
            if low > high {
                return Err(invalid(format!(
                    "valid range of '{}' is empty ({} > {})",
                    spec.field, low, high
                )));
            }

            if let Some(sentinel) = spec.sentinel {
                if !sentinel.is_finite() {
                    return Err(invalid(format!("sentinel of '{}' is not finite", spec.field)));
                }
                if sentinel > low - SENTINEL_TOLERANCE && sentinel < high + SENTINEL_TOLERANCE {
                    return Err(invalid(format!(
                        "sentinel {} of '{}' lies inside its valid range [{}, {}]",
                        sentinel, spec.field, low, high
                    )));
                }
            }
        }

        for required in [OmniField::Year, OmniField::DayOfYear, OmniField::Hour] {
            if !seen_fields.contains(&required) {
                return Err(invalid(format!("missing required field '{}'", required)));
            }
        }

        debug!(
            "OMNI schema validated: {} fields, minimum {} tokens",
            fields.len(),
            min_tokens
        );

        Ok(Self { fields, min_tokens })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn min_tokens(&self) -> usize {
        self.min_tokens
    }

    /// Look up the spec of a field
    pub fn spec(&self, field: OmniField) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.field == field)
    }
}

fn invalid(reason: String) -> OmniError {
    OmniError::InvalidSchema { reason }
}
