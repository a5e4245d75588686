//! Registry of notable historical space-weather events.
//!
//! The built-in catalog is embedded JSON data, so adding an event does not
//! touch code. A catalog is loaded once and then only read.

use crate::error::{OmniError, Result};
use crate::models::EventDescriptor;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

const BUILTIN_CATALOG: &str = include_str!("../data/events.json");

/// Immutable, ordered set of event descriptors
#[derive(Debug, Clone, PartialEq)]
pub struct EventCatalog {
    events: Vec<EventDescriptor>,
}

impl EventCatalog {
    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG, "built-in catalog")
    }

    /// Load a catalog from a JSON file containing an array of events
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents, &path.display().to_string())
    }

    pub fn from_json_str(json: &str, source_name: &str) -> Result<Self> {
        let events: Vec<EventDescriptor> =
            serde_json::from_str(json).map_err(|e| OmniError::InvalidCatalog {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })?;
        let catalog = Self::new(events).map_err(|e| match e {
            OmniError::InvalidCatalog { reason, .. } => OmniError::InvalidCatalog {
                source_name: source_name.to_string(),
                reason,
            },
            other => other,
        })?;

        debug!("Loaded {} events from {}", catalog.len(), source_name);
        Ok(catalog)
    }

    /// Build a catalog, rejecting duplicate ids and inverted date ranges
    pub fn new(events: Vec<EventDescriptor>) -> Result<Self> {
        let mut ids = HashSet::new();
        for event in &events {
            if event.id.trim().is_empty() {
                return Err(invalid("event with empty id"));
            }
            if !ids.insert(event.id.as_str()) {
                return Err(invalid(format!("duplicate event id '{}'", event.id)));
            }
            if event.start > event.end {
                return Err(invalid(format!(
                    "event '{}' starts ({}) after it ends ({})",
                    event.id, event.start, event.end
                )));
            }
        }

        Ok(Self { events })
    }

    /// Resolve an event id
    pub fn get(&self, id: &str) -> Result<&EventDescriptor> {
        self.events
            .iter()
            .find(|event| event.id == id)
            .ok_or_else(|| OmniError::UnknownEvent { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.events.iter().any(|event| event.id == id)
    }

    /// Events in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &EventDescriptor> {
        self.events.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.events.iter().map(|event| event.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn invalid(reason: impl Into<String>) -> OmniError {
    OmniError::InvalidCatalog {
        source_name: "catalog".to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn event(id: &str, start: NaiveDate, end: NaiveDate) -> EventDescriptor {
        EventDescriptor {
            id: id.to_string(),
            name: format!("{} storm", id),
            description: "test event".to_string(),
            start,
            end,
            peak_flare: "X1.0".to_string(),
            min_dst: -100,
        }
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = EventCatalog::builtin().unwrap();

        assert_eq!(
            catalog.ids(),
            vec!["halloween2003", "march1989", "bastille2000", "may2024", "october2024"]
        );

        let halloween = catalog.get("halloween2003").unwrap();
        assert_eq!(halloween.name, "Halloween Solar Storms 2003");
        assert_eq!(halloween.start, date(2003, 10, 28));
        assert_eq!(halloween.end, date(2003, 11, 2));
        assert_eq!(halloween.peak_flare, "X28 (estimated X45)");
        assert_eq!(halloween.min_dst, -383);

        assert_eq!(catalog.get("march1989").unwrap().min_dst, -589);
    }

    #[test]
    fn test_unknown_event() {
        let catalog = EventCatalog::builtin().unwrap();
        let err = catalog.get("carrington1859").unwrap_err();

        assert!(matches!(err, OmniError::UnknownEvent { ref id } if id == "carrington1859"));
        assert!(!catalog.contains("carrington1859"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let events = vec![
            event("a", date(2020, 1, 1), date(2020, 1, 2)),
            event("a", date(2021, 1, 1), date(2021, 1, 2)),
        ];

        let err = EventCatalog::new(events).unwrap_err();
        assert!(err.to_string().contains("duplicate event id 'a'"));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let events = vec![event("b", date(2020, 1, 5), date(2020, 1, 2))];
        assert!(EventCatalog::new(events).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "nov2004", "name": "November 2004 Storm",
                 "description": "Two-step storm.", "start": "2004-11-07",
                 "end": "2004-11-11", "peak_flare": "X2.0", "min_dst": -374}}]"#
        )
        .unwrap();

        let catalog = EventCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("nov2004").unwrap().end, date(2004, 11, 11));
    }

    #[test]
    fn test_malformed_json_reports_source() {
        let err = EventCatalog::from_json_str("{not json", "events.json").unwrap_err();
        assert!(err.to_string().contains("events.json"));
    }
}
