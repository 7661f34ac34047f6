//! Test fixture loader for songrank golden scenarios and catalogs.
//!
//! Fixture JSON lives next to this crate (`golden/`, `catalog/`) and is
//! found by walking up from the calling crate's `CARGO_MANIFEST_DIR`, so
//! any crate in the workspace can load it.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

const FIXTURES_DIR: &str = "test-fixtures";
const MARKER: &str = "golden";

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // From crates/<name> the sibling crates/test-fixtures is found first.
    loop {
        let candidate = path.join(FIXTURES_DIR);
        if candidate.join(MARKER).is_dir() {
            return candidate;
        }
        if path.join(MARKER).is_dir() && path.ends_with(FIXTURES_DIR) {
            return path;
        }
        if !path.pop() {
            panic!(
                "Could not find {}/{} from CARGO_MANIFEST_DIR={}",
                FIXTURES_DIR, MARKER, manifest_dir
            );
        }
    }
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// All JSON files in a fixture subdirectory, sorted by file name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension()
                .is_some_and(|ext| ext == "json")
                .then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Relative paths (`golden/<file>.json`) of every golden scenario.
pub fn golden_scenarios() -> Vec<String> {
    list_fixtures("golden")
        .into_iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?.to_string();
            Some(format!("golden/{name}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use songrank_core::catalog::{Song, Source, SourceCatalog};
    use songrank_core::config::RankingConfig;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().join(MARKER).is_dir());
    }

    #[test]
    fn all_golden_files_exist() {
        let files = [
            "golden/single_source.json",
            "golden/multi_cluster.json",
            "golden/rank_cutoff.json",
            "golden/tie_break.json",
            "golden/empty_result.json",
            "golden/year_end_consensus.json",
            "golden/year_end_conviction.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
        assert_eq!(golden_scenarios().len(), files.len());
    }

    #[test]
    fn year_end_catalog_is_valid() {
        let sources: Vec<Source> = load_fixture("catalog/year_end_sources.json");
        assert_eq!(sources.len(), 29);
        let catalog = SourceCatalog::new(sources).expect("catalog validates");
        let npr = catalog.get("NPR Top 125").expect("NPR Top 125 present");
        assert_eq!(npr.shadow_rank(), Some(75.5));
        assert_eq!(catalog.clusters().len(), 4);
    }

    #[test]
    fn golden_inputs_deserialize() {
        for rel in golden_scenarios() {
            let value = load_fixture_value(&rel);
            let _: Vec<Source> = serde_json::from_value(value["sources"].clone())
                .unwrap_or_else(|e| panic!("{rel} sources: {e}"));
            let _: Vec<Song> = serde_json::from_value(value["songs"].clone())
                .unwrap_or_else(|e| panic!("{rel} songs: {e}"));
            let _: RankingConfig = serde_json::from_value(value["config"].clone())
                .unwrap_or_else(|e| panic!("{rel} config: {e}"));
        }
    }
}
