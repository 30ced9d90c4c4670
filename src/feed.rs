//! Cat sighting feed.
//!
//! Sightings are read-only display records loaded from a TOML file:
//!
//! ```toml
//! [[sightings]]
//! id = "s-001"
//! cat_name = "Biscuit"
//! location = "Harbour steps"
//! spotted_at = "2026-09-30T08:15:00Z"
//! status = "verified"
//! notes = "Ginger, one white paw"
//! ```

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{FeedError, FeedResult};

/// Where a sighting is in the verification workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SightingStatus {
    #[default]
    Pending,
    Verified,
    Disputed,
}

impl SightingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SightingStatus::Pending => "pending",
            SightingStatus::Verified => "verified",
            SightingStatus::Disputed => "disputed",
        }
    }
}

/// One reported cat sighting
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sighting {
    pub id: String,
    pub cat_name: String,
    pub location: String,
    #[serde(default)]
    pub spotted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: SightingStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FeedFile {
    #[serde(default)]
    sightings: Vec<Sighting>,
}

/// Parse a feed document, preserving order.
pub fn parse(contents: &str) -> FeedResult<Vec<Sighting>> {
    let feed: FeedFile = toml::from_str(contents)?;
    validate(&feed.sightings)?;
    Ok(feed.sightings)
}

/// Load a feed file from disk.
pub fn load(path: &Path) -> FeedResult<Vec<Sighting>> {
    let contents = std::fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents)
}

fn validate(sightings: &[Sighting]) -> FeedResult<()> {
    let mut seen = HashSet::new();
    for (index, sighting) in sightings.iter().enumerate() {
        if sighting.id.trim().is_empty() {
            return Err(FeedError::EmptyField { index, field: "id" });
        }
        if sighting.cat_name.trim().is_empty() {
            return Err(FeedError::EmptyField { index, field: "cat_name" });
        }
        if !seen.insert(sighting.id.as_str()) {
            return Err(FeedError::DuplicateId(sighting.id.clone()));
        }
    }
    Ok(())
}

/// Feed shown when nothing is configured.
pub fn builtin() -> Vec<Sighting> {
    let entry = |id: &str, cat_name: &str, location: &str, status, notes: Option<&str>| Sighting {
        id: id.to_string(),
        cat_name: cat_name.to_string(),
        location: location.to_string(),
        spotted_at: None,
        status,
        notes: notes.map(str::to_string),
    };

    vec![
        entry(
            "builtin-1",
            "Biscuit",
            "Harbour steps",
            SightingStatus::Verified,
            Some("Ginger, one white paw"),
        ),
        entry("builtin-2", "Mochi", "Library garden", SightingStatus::Pending, None),
        entry(
            "builtin-3",
            "Pepper",
            "Market alley",
            SightingStatus::Verified,
            Some("Sleeps on the fruit crates"),
        ),
        entry(
            "builtin-4",
            "Ghost",
            "Old tram depot",
            SightingStatus::Disputed,
            Some("Might be two different cats"),
        ),
        entry("builtin-5", "Tofu", "Riverside bench", SightingStatus::Pending, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_feed() {
        let toml = r#"
            [[sightings]]
            id = "a"
            cat_name = "Biscuit"
            location = "Harbour"
            spotted_at = "2026-09-30T08:15:00Z"
            status = "verified"

            [[sightings]]
            id = "b"
            cat_name = "Mochi"
            location = "Garden"
        "#;

        let sightings = parse(toml).unwrap();
        assert_eq!(sightings.len(), 2);
        assert_eq!(sightings[0].status, SightingStatus::Verified);
        assert!(sightings[0].spotted_at.is_some());
        assert_eq!(sightings[1].status, SightingStatus::Pending);
        assert!(sightings[1].notes.is_none());
    }

    #[test]
    fn test_empty_document_is_empty_feed() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let toml = r#"
            [[sightings]]
            id = "a"
            cat_name = "One"
            location = "x"

            [[sightings]]
            id = "a"
            cat_name = "Two"
            location = "y"
        "#;
        assert!(matches!(parse(toml), Err(FeedError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let toml = r#"
            [[sightings]]
            id = "a"
            cat_name = " "
            location = "x"
        "#;
        assert!(matches!(
            parse(toml),
            Err(FeedError::EmptyField { index: 0, field: "cat_name" })
        ));
    }

    #[test]
    fn test_unknown_status_is_parse_error() {
        let toml = r#"
            [[sightings]]
            id = "a"
            cat_name = "One"
            location = "x"
            status = "adopted"
        "#;
        assert!(matches!(parse(toml), Err(FeedError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[sightings]]\nid = \"z\"\ncat_name = \"Zed\"\nlocation = \"Roof\""
        )
        .unwrap();

        let sightings = load(file.path()).unwrap();
        assert_eq!(sightings[0].cat_name, "Zed");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/catreel/feed.toml")).unwrap_err();
        assert!(matches!(err, FeedError::Io { .. }));
    }

    #[test]
    fn test_builtin_feed_is_valid() {
        assert!(validate(&builtin()).is_ok());
    }
}
