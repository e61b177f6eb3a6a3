// src/presets/mod.rs
//
// Built-in preset batches and user-supplied preset files.
//
// A preset is an ordered list of name-based PresetRecords, ready to hand to
// IngestionService::ingest.

use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::domain::PresetRecord;
use crate::error::{AppResult, CatalogError};

const TEST_PRESET_JSON: &str = include_str!("data/test.json");
const CLASSICS_PRESET_JSON: &str = include_str!("data/classics.json");

/// A named, embedded preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Two small records, handy for a smoke test against a fresh backend
    Test,
    /// Seven well-known movies with heavily shared cast and genres
    Classics,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Test, Preset::Classics];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Test => "test",
            Preset::Classics => "classics",
        }
    }

    pub fn by_name(name: &str) -> Option<Preset> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn records(&self) -> AppResult<Vec<PresetRecord>> {
        let raw = match self {
            Preset::Test => TEST_PRESET_JSON,
            Preset::Classics => CLASSICS_PRESET_JSON,
        };
        parse_records(raw)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::by_name(s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(Preset::name).collect();
            CatalogError::Other(format!(
                "Unknown preset '{}' (available: {})",
                s,
                known.join(", ")
            ))
        })
    }
}

/// Read a JSON array of preset records from disk
pub fn load_preset_file(path: &Path) -> AppResult<Vec<PresetRecord>> {
    log::debug!("Loading preset file {}", path.display());
    let raw = std::fs::read_to_string(path)?;
    parse_records(&raw)
}

fn parse_records(raw: &str) -> AppResult<Vec<PresetRecord>> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate_preset_record;
    use std::io::Write;

    #[test]
    fn test_builtin_presets_parse_and_validate() {
        for preset in Preset::ALL {
            let records = preset.records().unwrap();
            assert!(!records.is_empty(), "{} is empty", preset);
            for record in &records {
                validate_preset_record(record).unwrap();
            }
        }
    }

    #[test]
    fn test_classics_contents() {
        let records = Preset::Classics.records().unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records[0].title, "Pulp Fiction");
        assert_eq!(records[0].director, "Quentin Tarantino");
        assert_eq!(records[0].cast[0], "Quentin Tarantino");

        let wachowski = records
            .iter()
            .filter(|r| r.director == "Lana Wachowski")
            .count();
        assert_eq!(wachowski, 4);
    }

    #[test]
    fn test_null_poster_is_absent() {
        let records = Preset::Test.records().unwrap();
        assert_eq!(records[1].title, "Time to sleep");
        assert!(records[1].poster.is_none());
        assert_eq!(records[1].rating, Some(26.0));
    }

    #[test]
    fn test_by_name() {
        assert_eq!(Preset::by_name("test"), Some(Preset::Test));
        assert_eq!(Preset::by_name(" Classics "), Some(Preset::Classics));
        assert_eq!(Preset::by_name("preset1"), None);
        assert!("nope".parse::<Preset>().is_err());
    }

    #[test]
    fn test_load_preset_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "Heat", "director": "Michael Mann", "cast": ["Al Pacino"], "year": 1995}}]"#
        )
        .unwrap();

        let records = load_preset_file(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Heat");
        assert_eq!(records[0].cast, vec!["Al Pacino"]);
        assert!(records[0].genres.is_empty());
        assert_eq!(records[0].year, Some(1995));
    }

    #[test]
    fn test_load_preset_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = load_preset_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, CatalogError::Io(_)));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{\"title\": \"not an array\"}").unwrap();
        let err = load_preset_file(&bad).unwrap_err();
        assert!(matches!(err, CatalogError::Serialization(_)));
    }
}
