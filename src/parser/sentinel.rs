//! Missing-data sentinel resolution
//!
//! OMNI2 marks missing measurements with out-of-range fill values (999.9,
//! 9999., 99999 ...). These are replaced by `None` before any arithmetic
//! sees them.

use super::schema::FieldSpec;
use crate::constants::SENTINEL_TOLERANCE;

/// Resolve a decoded value against its field's sentinel
pub fn resolve_sentinel(spec: &FieldSpec, value: f64) -> Option<f64> {
    match spec.sentinel {
        Some(sentinel) if is_sentinel(value, sentinel) => None,
        _ => Some(value),
    }
}

/// Whether `value` equals `sentinel` within the format tolerance
pub fn is_sentinel(value: f64, sentinel: f64) -> bool {
    (value - sentinel).abs() < SENTINEL_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OmniField;
    use crate::parser::schema::STANDARD_FIELDS;

    fn spec_for(field: OmniField) -> FieldSpec {
        STANDARD_FIELDS
            .iter()
            .copied()
            .find(|spec| spec.field == field)
            .unwrap()
    }

    #[test]
    fn test_exact_sentinels_resolve_to_none() {
        assert_eq!(resolve_sentinel(&spec_for(OmniField::PlasmaSpeed), 9999.0), None);
        assert_eq!(resolve_sentinel(&spec_for(OmniField::ProtonDensity), 999.9), None);
        assert_eq!(resolve_sentinel(&spec_for(OmniField::ImfBz), 999.9), None);
        assert_eq!(
            resolve_sentinel(&spec_for(OmniField::PlasmaTemperature), 9_999_999.0),
            None
        );
        assert_eq!(resolve_sentinel(&spec_for(OmniField::KpTimes10), 99.0), None);
        assert_eq!(resolve_sentinel(&spec_for(OmniField::Dst), 99999.0), None);
    }

    #[test]
    fn test_values_near_sentinel_within_tolerance() {
        let density = spec_for(OmniField::ProtonDensity);
        assert_eq!(resolve_sentinel(&density, 999.85), None);
        assert_eq!(resolve_sentinel(&density, 999.95), None);
        assert_eq!(resolve_sentinel(&density, 999.7), Some(999.7));
    }

    #[test]
    fn test_physical_values_pass_through() {
        assert_eq!(resolve_sentinel(&spec_for(OmniField::PlasmaSpeed), 812.0), Some(812.0));
        assert_eq!(resolve_sentinel(&spec_for(OmniField::Dst), -383.0), Some(-383.0));
        assert_eq!(resolve_sentinel(&spec_for(OmniField::KpTimes10), 90.0), Some(90.0));
    }

    #[test]
    fn test_calendar_fields_have_no_sentinel() {
        let year = spec_for(OmniField::Year);
        assert_eq!(resolve_sentinel(&year, 9999.0), Some(9999.0));
    }
}
