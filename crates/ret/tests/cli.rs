//! CLI integration tests for ret commands.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a ret command.
fn ret() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("ret").unwrap()
}

/// Sets up a temp dir with a `.ret.toml` pointing at a `docs` collection
/// containing one markdown file.
fn docs_fixture() -> tempfile::TempDir {
    let dir = temp_dir();
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(
        docs.join("guide.md"),
        "# Guide\n\nAn introduction to the deploy pipeline.\n\n## Steps\n\nRun the deploy script.\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(".ret.toml"),
        r#"
[collections]
docs = "./docs"
"#,
    )
    .unwrap();
    dir
}

mod config {
    use super::*;

    #[test]
    fn shows_no_config_message() {
        let dir = temp_dir();

        ret().current_dir(dir.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("No configuration files found"));
    }

    #[test]
    fn shows_collections_and_warnings() {
        let dir = docs_fixture();

        ret().current_dir(dir.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("docs"))
            .stdout(predicate::str::contains("No issues found"));
    }

    #[test]
    fn empty_config_warns() {
        let dir = temp_dir();
        fs::write(dir.path().join(".ret.toml"), "").unwrap();

        ret().current_dir(dir.path())
            .arg("config")
            .assert()
            .failure()
            .stdout(predicate::str::contains("no collections are defined"));
    }

    #[test]
    fn json_output_is_valid() {
        let dir = docs_fixture();

        let output = ret()
            .current_dir(dir.path())
            .args(["config", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert!(value["collections"].is_array());
    }
}

mod index {
    use super::*;

    #[test]
    fn reports_document_and_section_counts() {
        let dir = docs_fixture();

        ret().current_dir(dir.path())
            .arg("index")
            .assert()
            .success()
            .stdout(predicate::str::contains("indexed 1 documents"));
    }

    #[test]
    fn fails_with_no_collections() {
        let dir = temp_dir();

        ret().current_dir(dir.path())
            .arg("index")
            .assert()
            .failure()
            .stderr(predicate::str::contains("no collections are defined"));
    }
}

mod search {
    use super::*;

    #[test]
    fn finds_matching_section() {
        let dir = docs_fixture();

        ret().current_dir(dir.path())
            .args(["search", "deploy"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Guide"));
    }

    #[test]
    fn no_match_reports_no_results() {
        let dir = docs_fixture();

        ret().current_dir(dir.path())
            .args(["search", "nonexistentterm"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No matches"));
    }

    #[test]
    fn json_output_is_valid() {
        let dir = docs_fixture();

        let output = ret()
            .current_dir(dir.path())
            .args(["search", "deploy", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert!(value.as_array().unwrap().iter().any(|r| r["doc_title"] == "Guide"));
    }
}

mod ls {
    use super::*;

    #[test]
    fn lists_indexed_documents() {
        let dir = docs_fixture();

        ret().current_dir(dir.path())
            .arg("ls")
            .assert()
            .success()
            .stdout(predicate::str::contains("Guide"));
    }
}

mod tree {
    use super::*;

    #[test]
    fn prints_document_sections() {
        let dir = docs_fixture();

        ret().current_dir(dir.path())
            .args(["tree", "docs:guide.md"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Guide"))
            .stdout(predicate::str::contains("Steps"));
    }

    #[test]
    fn unknown_document_fails() {
        let dir = docs_fixture();

        ret().current_dir(dir.path())
            .args(["tree", "docs:missing.md"])
            .assert()
            .failure();
    }
}

mod get {
    use super::*;

    #[test]
    fn fetches_whole_document_by_default() {
        let dir = docs_fixture();

        ret().current_dir(dir.path())
            .args(["get", "docs:guide.md"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Guide"))
            .stdout(predicate::str::contains("Steps"));
    }

    #[test]
    fn fetches_single_section() {
        let dir = docs_fixture();

        ret().current_dir(dir.path())
            .args(["get", "docs:guide.md#steps"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Run the deploy script"));
    }

    #[test]
    fn unknown_id_fails() {
        let dir = docs_fixture();

        ret().current_dir(dir.path())
            .args(["get", "docs:guide.md#nope"])
            .assert()
            .failure();
    }
}

mod stats {
    use super::*;

    #[test]
    fn reports_section_count() {
        let dir = docs_fixture();

        ret().current_dir(dir.path())
            .arg("stats")
            .assert()
            .success()
            .stdout(predicate::str::contains("total sections"));
    }
}

mod facets {
    use super::*;

    #[test]
    fn reports_collection_facet() {
        let dir = docs_fixture();

        ret().current_dir(dir.path())
            .arg("facets")
            .assert()
            .success()
            .stdout(predicate::str::contains("collection"));
    }
}
