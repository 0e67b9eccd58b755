use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::{TempDir, tempdir};

const PASSWORD: &str = "passwordpassword";
const SALT: &str = "saltsaltsaltsalt";

/// Runs the binary isolated from any user level parameter file.
fn bin(config_home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("zucrypt"));
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env_remove("ZUCRYPT_PARAMS")
        .env_remove("RUST_LOG");
    cmd
}

fn hash_digest(dir: &TempDir, mode: &str) -> String {
    let output = bin(dir.path())
        .env("ZUCRYPT_PASSWORD", PASSWORD)
        .args(["hash", "--mode", mode, "--salt", SALT])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    String::from_utf8(output).unwrap().trim().to_string()
}

#[test]
fn hash_prints_encoded_digest() {
    let dir = tempdir().unwrap();
    let digest = hash_digest(&dir, "d");

    assert!(digest.starts_with("$argon2d$v=19$m=65536,t=3,p=1$"));
}

#[test]
fn hash_and_verify_roundtrip() {
    let dir = tempdir().unwrap();
    let digest = hash_digest(&dir, "id");

    bin(dir.path())
        .env("ZUCRYPT_PASSWORD", PASSWORD)
        .args(["verify", "--mode", "id"])
        .arg(&digest)
        .assert()
        .success()
        .stdout(predicate::str::diff("OK\n"));
}

#[test]
fn verify_wrong_password_fails() {
    let dir = tempdir().unwrap();
    let digest = hash_digest(&dir, "i");

    bin(dir.path())
        .env("ZUCRYPT_PASSWORD", "thisisthewrongpassword")
        .args(["verify", "--mode", "i"])
        .arg(&digest)
        .assert()
        .failure()
        .stdout(predicate::str::contains("VERIFY_MISMATCH"));
}

#[test]
fn verify_reads_password_from_stdin() {
    let dir = tempdir().unwrap();
    let digest = hash_digest(&dir, "d");

    bin(dir.path())
        .env_remove("ZUCRYPT_PASSWORD")
        .args(["verify", "--mode", "d"])
        .arg(&digest)
        .write_stdin(format!("{PASSWORD}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn verify_with_wrong_mode_reports_decoding_failure() {
    let dir = tempdir().unwrap();
    let digest = hash_digest(&dir, "d");

    bin(dir.path())
        .env("ZUCRYPT_PASSWORD", PASSWORD)
        .args(["verify", "--mode", "id"])
        .arg(&digest)
        .assert()
        .failure()
        .stdout(predicate::str::contains("DECODING_FAIL"));
}

#[test]
fn short_password_is_rejected() {
    let dir = tempdir().unwrap();

    bin(dir.path())
        .env("ZUCRYPT_PASSWORD", "1")
        .args(["hash", "--mode", "d", "--salt", SALT])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Password of length 1 does not correspond to minimal security settings.",
        ));
}

#[test]
fn short_salt_is_rejected() {
    let dir = tempdir().unwrap();

    bin(dir.path())
        .env("ZUCRYPT_PASSWORD", PASSWORD)
        .args(["hash", "--salt", "salt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Salt of length 4 does not correspond to minimal security settings.",
        ));
}

#[test]
fn insecure_flag_is_rejected() {
    let dir = tempdir().unwrap();

    bin(dir.path())
        .env("ZUCRYPT_PASSWORD", PASSWORD)
        .args(["hash", "--salt", SALT, "--argon-time", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Parameter time_cost does not fulfill minimal security settings.",
        ));
}

#[test]
fn params_file_is_applied_and_flags_override() {
    let dir = tempdir().unwrap();
    let params = dir.path().join("params.json");
    std::fs::write(&params, r#"{"time_cost": 4, "parallelism": 2}"#).unwrap();

    bin(dir.path())
        .env("ZUCRYPT_PASSWORD", PASSWORD)
        .arg("--params-file")
        .arg(&params)
        .args(["hash", "--mode", "d", "--salt", SALT, "--argon-parallelism", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("m=65536,t=4,p=3"));
}

#[test]
fn random_salt_when_omitted() {
    let dir = tempdir().unwrap();
    let run = || {
        let out = bin(dir.path())
            .env("ZUCRYPT_PASSWORD", PASSWORD)
            .arg("hash")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).unwrap()
    };

    assert_ne!(run(), run());
}

#[test]
fn check_reports_validation_outcomes() {
    let dir = tempdir().unwrap();

    bin(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("time_cost"))
        .stdout(predicate::str::contains("INCOMPLETE"))
        .stdout(predicate::str::contains("65536"));

    bin(dir.path())
        .args(["check", "--argon-mem", "1024"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("NOT_MINIMAL_SECURE"));
}
