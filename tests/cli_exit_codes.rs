use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Config pointing the store at a temp file and the API at a port nothing
/// listens on, so tests never touch a real service or the user's store.
fn write_config(dir: &Path) -> std::path::PathBuf {
    let store_path = dir.join("store.json");
    let config_path = dir.join("srf.toml");
    std::fs::write(
        &config_path,
        format!(
            "[api]\nbase_url = \"http://127.0.0.1:9\"\ntimeout = \"2s\"\n\n[store]\npath = \"{}\"\n",
            store_path.display()
        ),
    )
    .expect("write config");
    config_path
}

fn srf() -> Command {
    Command::new(env!("CARGO_BIN_EXE_srf"))
}

#[test]
fn rate_valid_value_exits_zero_and_persists() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_config(dir.path());

    let out = srf()
        .args([
            "rate",
            "--id",
            "1",
            "--stars",
            "4.5",
            "--config",
            config.to_str().unwrap(),
        ])
        .output()
        .expect("run srf");
    assert_eq!(out.status.code(), Some(0));

    let stdout: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(stdout["mode"], "rate");
    assert_eq!(stdout["rating"], 4.5);

    let raw = std::fs::read_to_string(dir.path().join("store.json")).expect("store file");
    let store: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(store["ratings"]["1"], serde_json::json!(4.5));
}

#[test]
fn rate_out_of_range_exits_two_and_leaves_store_untouched() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_config(dir.path());

    for stars in ["0", "6"] {
        let out = srf()
            .args([
                "rate",
                "--id",
                "1",
                "--stars",
                stars,
                "--config",
                config.to_str().unwrap(),
            ])
            .output()
            .expect("run srf");
        assert_eq!(out.status.code(), Some(2), "stars={stars}");

        let stdout: serde_json::Value =
            serde_json::from_slice(&out.stdout).expect("json error output");
        assert_eq!(stdout["mode"], "error");
        assert_eq!(stdout["error"]["category"], "validation");
    }

    assert!(
        !dir.path().join("store.json").exists(),
        "rejected ratings must not create or mutate the store"
    );
}

#[test]
fn rate_non_numeric_stars_is_a_usage_error() {
    let out = srf()
        .args(["rate", "--id", "1", "--stars", "lots"])
        .output()
        .expect("run srf");
    assert_ne!(out.status.code(), Some(0));
}

#[test]
fn find_without_ingredients_or_image_exits_two() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_config(dir.path());

    let out = srf()
        .args(["find", "--config", config.to_str().unwrap()])
        .output()
        .expect("run srf");
    assert_eq!(out.status.code(), Some(2));

    let stdout: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(stdout["error"]["category"], "validation");
}

#[test]
fn find_with_only_commas_exits_two() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_config(dir.path());

    let out = srf()
        .args([
            "find",
            "--ingredients",
            " , ,, ",
            "--config",
            config.to_str().unwrap(),
        ])
        .output()
        .expect("run srf");
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn find_against_unreachable_service_exits_two_with_network_error() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_config(dir.path());

    let out = srf()
        .args([
            "find",
            "--ingredients",
            "egg, milk",
            "--config",
            config.to_str().unwrap(),
        ])
        .output()
        .expect("run srf");
    assert_eq!(out.status.code(), Some(2));

    let stdout: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(stdout["mode"], "error");
    assert_eq!(stdout["error"]["category"], "network");
}

#[test]
fn samples_swallows_transport_failure() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_config(dir.path());

    let out = srf()
        .args(["samples", "--config", config.to_str().unwrap()])
        .output()
        .expect("run srf");
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty(), "swallowed failure prints nothing");
}

#[test]
fn subs_with_empty_list_is_a_noop_success() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_config(dir.path());

    let out = srf()
        .args([
            "subs",
            "--missing",
            " , ",
            "--config",
            config.to_str().unwrap(),
        ])
        .output()
        .expect("run srf");
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn saved_lists_rated_and_saved_state_locally() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_config(dir.path());

    let rate = srf()
        .args([
            "rate",
            "--id",
            "2",
            "--stars",
            "3",
            "--config",
            config.to_str().unwrap(),
        ])
        .status()
        .expect("run srf");
    assert_eq!(rate.code(), Some(0));

    let out = srf()
        .args(["saved", "--config", config.to_str().unwrap()])
        .output()
        .expect("run srf");
    assert_eq!(out.status.code(), Some(0));

    let stdout: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(stdout["mode"], "saved");
    assert_eq!(stdout["recipes"], serde_json::json!([]));
    assert_eq!(stdout["ratings"]["2"], serde_json::json!(3.0));
}

#[test]
fn invalid_config_file_exits_two() {
    let dir = TempDir::new().expect("tempdir");
    let config_path = dir.path().join("srf.toml");
    std::fs::write(&config_path, "[api]\nbase_url = \"not a url\"\n").expect("write config");

    let out = srf()
        .args([
            "saved",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .output()
        .expect("run srf");
    assert_eq!(out.status.code(), Some(2));

    let stdout: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(stdout["error"]["category"], "config");
}
