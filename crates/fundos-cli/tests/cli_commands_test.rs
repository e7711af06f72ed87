//! Integration tests for the fundos binary
//!
//! Every test runs against its own temporary data directory and reads the
//! JSON envelope printed on stdout.

use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fundos(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fundos"))
        .arg("--json")
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env_remove("FUNDOS_LOCALE")
        .env_remove("FUNDOS_DEFAULT_SORT")
        .env_remove("FUNDOS_CITY")
        .env_remove("FUNDOS_COUNTRY")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Run a command that must succeed and return its `data` field
fn data(data_dir: &Path, args: &[&str]) -> Value {
    let output = fundos(data_dir, args);
    assert!(
        output.status.success(),
        "{:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );

    let parsed: Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(parsed["status"], "success");
    parsed["data"].clone()
}

fn names(list: &Value) -> Vec<String> {
    list["places"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["place"]["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_list_defaults_to_type_order() {
    let dir = TempDir::new().unwrap();
    let list = data(dir.path(), &["list"]);

    assert_eq!(list["count"], 26);
    assert_eq!(list["sort"], "type");
    // Fundo sorts before Parque, then by name
    assert_eq!(names(&list)[0], "La Fogata");
    assert_eq!(list["places"][0]["distance_km"], Value::Null);
}

#[test]
fn test_search_ignores_accents_and_unknown_sort_falls_back() {
    let dir = TempDir::new().unwrap();
    let list = data(dir.path(), &["list", "--search", "lurin", "--sort", "popularity"]);

    assert_eq!(names(&list), vec!["Mamacona", "San Vicente"]);
    assert_eq!(list["sort"], "type");
}

#[test]
fn test_visit_is_persisted_and_counted() {
    let dir = TempDir::new().unwrap();
    let visit = data(dir.path(), &["visit", "parque-parque-salazar-miraflores"]);
    assert_eq!(visit["visited"], true);
    assert_eq!(visit["progress"]["visited"], 1);

    let status = data(dir.path(), &["status"]);
    assert_eq!(status["progress"]["visited"], 1);
    assert_eq!(status["progress"]["total"], 26);
    assert_eq!(status["collation_locale"], "es");

    let pending = data(dir.path(), &["list", "--only-pending"]);
    assert_eq!(pending["count"], 25);

    data(dir.path(), &["unvisit", "parque-parque-salazar-miraflores"]);
    assert_eq!(data(dir.path(), &["status"])["progress"]["visited"], 0);
}

#[test]
fn test_visit_unknown_place_fails() {
    let dir = TempDir::new().unwrap();
    let output = fundos(dir.path(), &["visit", "parque-que-no-existe"]);
    assert!(!output.status.success());
}

#[test]
fn test_type_and_district_filters() {
    let dir = TempDir::new().unwrap();

    let facets = data(dir.path(), &["facets"]);
    assert_eq!(facets["district_facet_visible"], false);

    let facets = data(dir.path(), &["filter", "type", "fundo"]);
    assert_eq!(facets["district_facet_visible"], true);
    let districts: Vec<&str> = facets["districts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["district"].as_str().unwrap())
        .collect();
    assert_eq!(districts, vec!["Chosica", "Cieneguilla", "Huaral", "Lurín"]);

    let facets = data(dir.path(), &["filter", "all-districts"]);
    assert_eq!(facets["all_districts_selected"], true);
    assert_eq!(facets["select_all_total"], 6);

    let facets = data(dir.path(), &["filter", "district", "Huaral"]);
    assert_eq!(facets["all_districts_selected"], false);
    assert_eq!(data(dir.path(), &["list"])["count"], 5);

    data(dir.path(), &["filter", "clear"]);
    assert_eq!(data(dir.path(), &["list"])["count"], 26);
}

#[test]
fn test_unknown_type_filter_fails() {
    let dir = TempDir::new().unwrap();
    let output = fundos(dir.path(), &["filter", "type", "playa"]);
    assert!(!output.status.success());
}

#[test]
fn test_add_from_link_then_links() {
    let dir = TempDir::new().unwrap();
    let added = data(
        dir.path(),
        &[
            "add",
            "--name",
            "Huerto Azul",
            "--district",
            "Pachacámac",
            "--type",
            "Fundo",
            "--link",
            "https://www.google.com/maps/place/Huerto/@-12.2301,-76.8602,15z",
        ],
    );
    assert_eq!(added["place"]["id"], "fundo-huerto-azul-pachacamac");
    assert_eq!(added["replaced"], false);
    assert_eq!(added["place"]["coordinates"]["lat"], -12.2301);

    assert_eq!(data(dir.path(), &["list"])["count"], 27);

    let links = data(dir.path(), &["links", "fundo-huerto-azul-pachacamac"]);
    assert_eq!(links["by_coordinates"], true);
    assert_eq!(
        links["links"]["waze"],
        "https://waze.com/ul?ll=-12.2301,-76.8602&navigate=yes"
    );
}

#[test]
fn test_add_rejects_invalid_submission() {
    let dir = TempDir::new().unwrap();
    let output = fundos(
        dir.path(),
        &["add", "--name", "  ", "--district", "Surco", "--type", "Parque"],
    );
    assert!(!output.status.success());

    let output = fundos(
        dir.path(),
        &["add", "--name", "Zoo", "--district", "Surco", "--type", "zoo"],
    );
    assert!(!output.status.success());
    assert_eq!(data(dir.path(), &["list"])["count"], 26);
}

#[test]
fn test_locate_sorts_by_distance() {
    let dir = TempDir::new().unwrap();
    let located = data(dir.path(), &["locate", "--lat", "-12.1211", "--lon", "-77.0297"]);
    assert_eq!(located["nearest"][0]["place"]["name"], "Parque Miguel Grau");
    assert_eq!(located["nearest"].as_array().unwrap().len(), 5);

    let status = data(dir.path(), &["status"]);
    assert_eq!(status["position"]["lat"], -12.1211);

    let list = data(dir.path(), &["list", "--sort", "distance"]);
    assert!(list["places"][0]["distance_km"].as_f64().unwrap() < 1.0);
    assert!(list["places"][0]["drive_time_label"].is_string());
}

#[test]
fn test_parse_link() {
    let dir = TempDir::new().unwrap();
    let parsed = data(dir.path(), &["parse-link", "https://maps.example/@-12.12,-77.03,15z"]);
    assert_eq!(parsed["coordinates"]["lat"], -12.12);
    assert_eq!(parsed["coordinates"]["lon"], -77.03);

    let parsed = data(dir.path(), &["parse-link", "not a url"]);
    assert_eq!(parsed["coordinates"], Value::Null);
}

#[test]
fn test_sync_replaces_custom_places() {
    let dir = TempDir::new().unwrap();
    data(dir.path(), &["add", "--name", "Viejo", "--district", "Surco", "--type", "Parque"]);

    let snapshot = dir.path().join("snapshot.json");
    std::fs::write(
        &snapshot,
        r#"[
            {"id": "remote-1", "name": "Nuevo", "district": "Ate", "type": "Parque",
             "lat": -12.03, "lon": -76.92},
            {"name": "Sin distrito", "district": "", "type": "Parque"}
        ]"#,
    )
    .unwrap();

    let synced = data(dir.path(), &["sync", snapshot.to_str().unwrap()]);
    assert_eq!(synced["records"], 2);
    assert_eq!(synced["accepted"], 1);
    assert_eq!(synced["custom_places"], 1);

    let list = data(dir.path(), &["list", "--search", "nuevo"]);
    assert_eq!(list["places"][0]["place"]["id"], "remote-1");
    assert_eq!(data(dir.path(), &["list", "--search", "viejo"])["count"], 0);
}

#[test]
fn test_export_geojson() {
    let dir = TempDir::new().unwrap();
    let collection = data(dir.path(), &["export", "--search", "miraflores"]);

    assert_eq!(collection["type"], "FeatureCollection");
    assert_eq!(collection["features"].as_array().unwrap().len(), 6);
    assert_eq!(collection["features"][0]["geometry"]["type"], "Point");
    assert_eq!(collection["features"][0]["properties"]["visited"], false);
}

#[test]
fn test_corrupt_state_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("visited-parks-and-fundos-v1.json"), "{{{").unwrap();
    std::fs::write(dir.path().join("filters-v1.json"), "42").unwrap();

    let list = data(dir.path(), &["list"]);
    assert_eq!(list["count"], 26);
    assert_eq!(list["progress"]["visited"], 0);
}

#[test]
fn test_config_file_sets_default_sort() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "default_sort = \"name\"\n").unwrap();

    let list = data(dir.path(), &["list"]);
    assert_eq!(list["sort"], "name");
    assert_eq!(names(&list)[0], "Circuito Mágico del Agua");
}

#[test]
fn test_sync_rejects_snapshot_that_is_not_a_list() {
    let dir = TempDir::new().unwrap();
    data(dir.path(), &["add", "--name", "Mio", "--district", "Surco", "--type", "Parque"]);

    let snapshot = dir.path().join("snapshot.json");
    std::fs::write(
        &snapshot,
        r#"{"places": [{"name": "Nuevo", "district": "Ate", "type": "Parque"}]}"#,
    )
    .unwrap();

    let output = fundos(dir.path(), &["sync", snapshot.to_str().unwrap()]);
    assert!(!output.status.success());

    let list = data(dir.path(), &["list", "--search", "mio"]);
    assert_eq!(list["count"], 1);
    let saved = std::fs::read_to_string(dir.path().join("custom-places-v1.json")).unwrap();
    let saved: Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(saved.as_array().unwrap().len(), 1);
}

#[test]
fn test_stale_district_selection_is_pruned_and_saved() {
    let dir = TempDir::new().unwrap();
    let filters = dir.path().join("filters-v1.json");
    std::fs::write(&filters, r#"{"types": ["Fundo"], "districts": ["Miraflores", "Lurín"]}"#)
        .unwrap();

    let list = data(dir.path(), &["list"]);
    assert_eq!(list["count"], 2);

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&filters).unwrap()).unwrap();
    assert_eq!(saved["types"], serde_json::json!(["Fundo"]));
    assert_eq!(saved["districts"], serde_json::json!(["Lurín"]));
}
