use assert_cmd::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const NS: &str = "http://example.org/sdm#";

/// Helper to create an `sdm` command that runs in an isolated temp directory,
/// so a stray `sdm.toml` in the repo never leaks into a test.
fn sdm_cmd(work_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("sdm");
    cmd.current_dir(work_dir.path());
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/dataset.json")
}

/// Fixture with author 3 (the conference chair) removed.
fn broken_fixture(dir: &TempDir) -> PathBuf {
    let mut doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(fixture()).unwrap()).unwrap();
    doc["author"] = serde_json::json!([{ "author": 5, "name": "Edgar Codd" }]);
    let path = dir.path().join("broken.json");
    fs::write(&path, doc.to_string()).unwrap();
    path
}

// ============================================================================
// Basics
// ============================================================================

#[test]
fn version_flag() {
    cargo_bin_cmd!("sdm")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sdm"));
}

#[test]
fn help_flag() {
    cargo_bin_cmd!("sdm")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("knowledge-graph mapper"))
        .stdout(predicate::str::contains("schema"))
        .stdout(predicate::str::contains("map"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn verbose_quiet_conflict() {
    cargo_bin_cmd!("sdm")
        .args(["--verbose", "--quiet", "schema"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// ============================================================================
// schema
// ============================================================================

#[test]
fn schema_to_stdout() {
    let tmp = TempDir::new().unwrap();
    sdm_cmd(&tmp)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "<{NS}Chair> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <{NS}Organizer> ."
        )));
}

#[test]
fn schema_turtle_with_namespace() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("tbox.ttl");
    sdm_cmd(&tmp)
        .args(["schema", "--format", "turtle", "--namespace", "http://pub.example/#", "-o"])
        .arg(&out)
        .assert()
        .success();

    let ttl = fs::read_to_string(&out).unwrap();
    assert!(ttl.starts_with("@prefix"));
    assert!(ttl.contains("@prefix sdm: <http://pub.example/#> ."));
    assert!(ttl.contains("sdm:Chair rdfs:subClassOf sdm:Organizer"));
}

// ============================================================================
// map
// ============================================================================

#[test]
fn map_fixture_to_ntriples() {
    let tmp = TempDir::new().unwrap();
    let output = sdm_cmd(&tmp)
        .args(["map", "-i"])
        .arg(fixture())
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let nt = String::from_utf8(output.stdout).unwrap();
    let rdf_type = "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>";
    assert!(nt.contains(&format!("<{NS}Conference_7> {rdf_type} <{NS}Workshop> .")));
    assert!(nt.contains(&format!("<{NS}Conference_7> <{NS}hasOrganizer> <{NS}Author_3> .")));
    assert!(nt.contains(&format!("<{NS}Author_3> {rdf_type} <{NS}Chair> .")));
    // Paper 10 has no decision of its own; the review majority accepts it
    assert!(nt.contains(&format!("<{NS}Paper_10> <{NS}posterPublishedIn> <{NS}Proceeding_P-9> .")));
    // Paper 11 claims acceptance, but its only review rejects it
    assert!(nt.contains(&format!("<{NS}Paper_11> {rdf_type} <{NS}FullPaper> .")));
    assert!(!nt.contains(&format!("<{NS}Paper_11> <{NS}publishedIn>")));
}

#[test]
fn map_to_turtle_file() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("abox.ttl");
    sdm_cmd(&tmp)
        .args(["map", "--format", "turtle", "-i"])
        .arg(fixture())
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote"));

    let ttl = fs::read_to_string(&out).unwrap();
    assert!(ttl.contains("sdm:Conference_7 a sdm:Workshop ;"));
    assert!(ttl.contains("sdm:heldInYear 2024"));
}

#[test]
fn map_from_stdin() {
    let tmp = TempDir::new().unwrap();
    sdm_cmd(&tmp)
        .args(["map", "-i", "-"])
        .write_stdin(r#"{"area": [{"area": "data mining", "topic_name": "Data Mining"}]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "<{NS}Area_data_mining> <{NS}hasTopicName> \"Data Mining\" ."
        )));
}

#[test]
fn map_float_organizer_joins_author() {
    let tmp = TempDir::new().unwrap();
    sdm_cmd(&tmp)
        .args(["map", "-i", "-"])
        .write_stdin(
            r#"{
                "author": [{"author": 3, "name": "Ada Lovelace"}],
                "conference": [{"conference": 7, "title": "ABC", "organizer": 3.0, "type": "workshop"}]
            }"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "<{NS}Conference_7> <{NS}hasOrganizer> <{NS}Author_3> ."
        )))
        .stdout(predicate::str::contains("Author_3.0").not());
}

#[test]
fn map_is_deterministic() {
    let tmp = TempDir::new().unwrap();
    let run = || {
        sdm_cmd(&tmp)
            .args(["map", "-i"])
            .arg(fixture())
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn map_strict_fails_on_dangling_organizer() {
    let tmp = TempDir::new().unwrap();
    let input = broken_fixture(&tmp);
    sdm_cmd(&tmp)
        .args(["map", "-i"])
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("Author_3"));
}

#[test]
fn map_warn_writes_graph() {
    let tmp = TempDir::new().unwrap();
    let input = broken_fixture(&tmp);
    sdm_cmd(&tmp)
        .args(["map", "--strictness", "warn", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Conference_7"))
        .stderr(predicate::str::contains("referential violation"));
}

#[test]
fn map_rejects_unknown_table() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("bad.json");
    fs::write(&input, r#"{"papers": []}"#).unwrap();
    sdm_cmd(&tmp)
        .args(["map", "-i"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown table 'papers'"));
}

#[test]
fn map_missing_input_file() {
    let tmp = TempDir::new().unwrap();
    sdm_cmd(&tmp)
        .args(["map", "-i", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read nope.json"));
}

// ============================================================================
// check
// ============================================================================

#[test]
fn check_clean_fixture() {
    let tmp = TempDir::new().unwrap();
    sdm_cmd(&tmp)
        .args(["check", "-i"])
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("conference"))
        .stdout(predicate::str::contains("total"))
        .stdout(predicate::str::contains("No referential violations."));
}

#[test]
fn check_reports_violations() {
    let tmp = TempDir::new().unwrap();
    let input = broken_fixture(&tmp);
    sdm_cmd(&tmp)
        .args(["--quiet", "check", "-i"])
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("undeclared"))
        .stdout(predicate::str::contains(format!("<{NS}Author_3>")))
        .stderr(predicate::str::contains("referential violation(s)"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_file_in_working_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("sdm.toml"),
        "[mapping]\nnamespace = \"http://cfg.example/#\"\n\n[output]\nformat = \"turtle\"\n",
    )
    .unwrap();
    sdm_cmd(&tmp)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("@prefix sdm: <http://cfg.example/#> ."));
}

#[test]
fn flags_override_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("custom.toml");
    fs::write(&config, "[output]\nformat = \"turtle\"\n").unwrap();
    sdm_cmd(&tmp)
        .args(["schema", "--format", "ntriples", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("@prefix").not());
}

#[test]
fn missing_explicit_config_is_error() {
    let tmp = TempDir::new().unwrap();
    sdm_cmd(&tmp)
        .args(["--config", "absent.toml", "schema"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
