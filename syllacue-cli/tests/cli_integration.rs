//! Integration tests for the syllacue CLI

use assert_cmd::Command;
use flate2::read::GzDecoder;
use predicates::prelude::*;
use std::fs;
use std::io::Read;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn syllacue() -> Command {
    Command::cargo_bin("syllacue").unwrap()
}

#[test]
fn test_syllabify_arguments() {
    syllacue()
        .arg("syllabify")
        .arg("EH1 K S T R AH0")
        .arg("B AE1 T")
        .assert()
        .success()
        .stdout("EH1K STRAH0\nBAE1T\n");
}

#[test]
fn test_syllabify_file_with_labels() {
    syllacue()
        .arg("syllabify")
        .arg("-i")
        .arg(fixture_path("transcriptions.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("ABOUT\tAH0 BAW1T"))
        .stdout(predicate::str::contains("EXTRA\tEH1K STRAH0"))
        .stdout(predicate::str::contains("STRAA1D"));
}

#[test]
fn test_syllabify_json() {
    syllacue()
        .args(["syllabify", "-f", "json", "AH0 B AW1 T"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"syllabification\": \"AH0 BAW1T\""))
        .stdout(predicate::str::contains("\"syllable_cue\": \"y.ah0_y.baw1t\""))
        .stdout(predicate::str::contains("\"nucleus\": \"AW\""));
}

#[test]
fn test_syllabify_invalid_phoneme() {
    syllacue()
        .args(["syllabify", "B XX1 G"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid phoneme 'XX1' at position 1"));

    syllacue()
        .args(["syllabify", "--on-invalid", "skip", "B XX1 G", "B AE1 T"])
        .assert()
        .success()
        .stdout("BAE1T\n");
}

#[test]
fn test_syllabify_external_profile() {
    syllacue()
        .arg("syllabify")
        .arg("--language-config")
        .arg(fixture_path("toy.toml"))
        .arg("K A S T A")
        .arg("K A T . S AH0")
        .assert()
        .success()
        .stdout("KAS TA\nKAT SAH0\n");
}

#[test]
fn test_syllabify_unknown_language() {
    syllacue()
        .args(["syllabify", "-l", "klingon", "B AE1 T"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported language: klingon"));
}

#[test]
fn test_events_to_stdout() {
    syllacue()
        .arg("events")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("s01.words"))
        .arg("--lexicon")
        .arg(fixture_path("lexicon.dict"))
        .assert()
        .success()
        .stdout(
            "cues\toutcomes\n\
             c.dog_y.dhah0_s.dh_s.ah0\tthe\n\
             c.the_c.runs_y.dao1g_s.d_s.ao1_s.g\tdog\n\
             c.dog_c.fast_y.rah1nz_s.r_s.ah1_s.n_s.z\truns\n\
             c.runs_y.fae1st_s.f_s.ae1_s.s_s.t\tfast\n",
        );
}

#[test]
fn test_events_unknown_word_aborts() {
    syllacue()
        .arg("events")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("s02.words"))
        .arg("--lexicon")
        .arg(fixture_path("lexicon.dict"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no transcription for word 'a'"));
}

#[test]
fn test_events_files_and_gzip() {
    let temp_dir = TempDir::new().unwrap();
    let merged = temp_dir.path().join("all.tsv");
    let speakers = temp_dir.path().join("speakers");

    syllacue()
        .arg("events")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("s0*.words"))
        .arg("--lexicon")
        .arg(fixture_path("lexicon.dict"))
        .arg("--on-invalid")
        .arg("skip")
        .arg("--gzip")
        .arg("-o")
        .arg(&merged)
        .arg("--per-speaker-dir")
        .arg(&speakers)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let mut content = String::new();
    GzDecoder::new(fs::File::open(temp_dir.path().join("all.tsv.gz")).unwrap())
        .read_to_string(&mut content)
        .unwrap();
    let lines: Vec<&str> = content.lines().collect();
    // header + 4 words of s01 + 5 words of s02 minus the unknown "a"
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "cues\toutcomes");
    assert!(lines.iter().all(|line| !line.contains("NA_")));
    assert!(lines.contains(&"c.a_c.hmm_y.strey1n_y.jher0_s.s_s.t_s.r_s.ey1_s.n_s.jh_s.er0\tstranger"));

    assert!(speakers.join("s01.tsv.gz").exists());
    assert!(speakers.join("s02.tsv.gz").exists());
}

#[test]
fn test_events_missing_input() {
    syllacue()
        .args(["events", "-q", "-i", "nonexistent/*.words", "--lexicon"])
        .arg(fixture_path("lexicon.dict"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_validate_and_generate_config() {
    syllacue()
        .args(["validate", "--language-config"])
        .arg(fixture_path("toy.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Language code: toy"));

    let temp_dir = TempDir::new().unwrap();
    let generated = temp_dir.path().join("custom.toml");
    syllacue()
        .args(["generate-config", "-l", "xx", "-o"])
        .arg(&generated)
        .assert()
        .success();

    syllacue()
        .args(["validate", "--language-config"])
        .arg(&generated)
        .assert()
        .success()
        .stdout(predicate::str::contains("Language code: xx"));
}

#[test]
fn test_validate_invalid_profile() {
    let temp_dir = TempDir::new().unwrap();
    let profile = temp_dir.path().join("bad.toml");
    fs::write(
        &profile,
        "[metadata]\ncode = \"bad\"\nname = \"Bad\"\n\n[inventory]\nconsonants = [\"K\"]\nvowels = []\n",
    )
    .unwrap();

    syllacue()
        .args(["validate", "--language-config"])
        .arg(&profile)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Profile is invalid"));
}

#[test]
fn test_list_languages() {
    syllacue()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("English"));
}
