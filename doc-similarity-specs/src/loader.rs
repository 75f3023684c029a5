//! Fixture file loading.

use crate::{parse_fixture, SimilarityFixture, SpecError};
use std::fs;
use std::path::Path;

/// Name of the expected-failures ledger, never loaded as a fixture.
pub const EXPECTED_FAILURES_FILE: &str = "expected-failures.toml";

/// Load a single fixture file.
pub fn load_fixture(path: &Path) -> Result<SimilarityFixture, SpecError> {
    let content = fs::read_to_string(path).map_err(|e| SpecError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_fixture(&content).map_err(|e| SpecError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load all fixtures from a directory (glob: **/*.toml), sorted by path.
pub fn load_all_fixtures(dir: &Path) -> Result<Vec<(String, SimilarityFixture)>, SpecError> {
    let mut fixtures = Vec::new();
    load_fixtures_recursive(dir, dir, &mut fixtures)?;
    fixtures.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(fixtures)
}

fn load_fixtures_recursive(
    base: &Path,
    dir: &Path,
    fixtures: &mut Vec<(String, SimilarityFixture)>,
) -> Result<(), SpecError> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(|e| SpecError::Load {
        path: dir.display().to_string(),
        message: e.to_string(),
    })? {
        let entry = entry.map_err(|e| SpecError::Load {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        let path = entry.path();

        if path.is_dir() {
            load_fixtures_recursive(base, &path, fixtures)?;
        } else if path.extension().map_or(false, |e| e == "toml")
            && path.file_name().map_or(true, |n| n != EXPECTED_FAILURES_FILE)
        {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let fixture = load_fixture(&path)?;
            fixtures.push((relative.display().to_string(), fixture));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("near-identical-opening.toml");
        let fixture = load_fixture(&path).unwrap();
        assert!(fixture.title.is_some());
    }

    #[test]
    fn test_load_all_fixtures_recurses() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
        let fixtures = load_all_fixtures(&dir).unwrap();
        assert!(fixtures.len() >= 6);
        assert!(fixtures.iter().any(|(name, _)| name.starts_with("regression")));
    }

    #[test]
    fn test_skips_ledger_and_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut fixture = fs::File::create(dir.path().join("pair.toml")).unwrap();
        writeln!(fixture, "text_a = \"a b\"\ntext_b = \"c d\"").unwrap();
        let mut ledger = fs::File::create(dir.path().join(EXPECTED_FAILURES_FILE)).unwrap();
        writeln!(ledger, "[[known]]\nfixture = \"x\"\nfield = \"y\"").unwrap();
        fs::write(dir.path().join("notes.md"), "not a fixture").unwrap();

        let fixtures = load_all_fixtures(dir.path()).unwrap();
        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0].0, "pair.toml");
    }

    #[test]
    fn test_bad_fixture_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.toml"), "text_a = ").unwrap();
        let err = load_all_fixtures(dir.path()).unwrap_err();
        match err {
            SpecError::Load { path, .. } => assert!(path.ends_with("broken.toml")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let fixtures = load_all_fixtures(Path::new("/nonexistent/fixtures")).unwrap();
        assert!(fixtures.is_empty());
    }
}
