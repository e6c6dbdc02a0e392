use assert_cmd::Command;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

fn car_metadata() -> serde_json::Value {
    json!({
        "schema": {
            "name": "car",
            "fields": {
                "make": { "type": "string" },
                "owner": { "type": "object", "fields": { "name": { "type": "string" } } }
            }
        }
    })
}

fn car_definitions() -> serde_json::Value {
    json!({
        "definitions": {
            "Car": {
                "type": "object",
                "properties": {
                    "make": { "type": "string" },
                    "owner": { "$ref": "#/definitions/CarOwner" }
                }
            },
            "CarOwner": {
                "type": "object",
                "properties": { "name": { "type": "string" } }
            }
        }
    })
}

fn md2swagger() -> Command {
    Command::cargo_bin("md2swagger").unwrap()
}

#[test]
fn emits_yaml_definitions_on_stdout() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("car.json");
    fs::write(&input, car_metadata().to_string()).unwrap();

    let assert = md2swagger().arg(&input).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_yaml::from_str(&stdout).unwrap();
    assert_eq!(parsed, car_definitions());
}

#[test]
fn json_flag_emits_the_same_tree_as_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("car.json");
    fs::write(&input, car_metadata().to_string()).unwrap();

    let assert = md2swagger().arg(&input).arg("--json").assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed, car_definitions());
}

#[test]
fn out_flag_writes_the_document_to_a_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("car.json");
    let output = dir.path().join("nested").join("model.yaml");
    fs::write(&input, car_metadata().to_string()).unwrap();

    md2swagger()
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    let parsed: serde_json::Value = serde_yaml::from_str(&written).unwrap();
    assert_eq!(parsed, car_definitions());
}

#[test]
fn later_inputs_overwrite_same_named_entities() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("car-a.json");
    let second = dir.path().join("car-b.json");
    fs::write(&first, car_metadata().to_string()).unwrap();
    fs::write(
        &second,
        json!({
            "schema": { "name": "car", "fields": { "vin": { "type": "string" } } }
        })
        .to_string(),
    )
    .unwrap();

    let assert = md2swagger().arg(&first).arg(&second).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_yaml::from_str(&stdout).unwrap();
    assert_eq!(
        parsed["definitions"]["Car"],
        json!({ "type": "object", "properties": { "vin": { "type": "string" } } })
    );
    // the first document's nested entity survives the merge untouched
    assert_eq!(
        parsed["definitions"]["CarOwner"],
        json!({ "type": "object", "properties": { "name": { "type": "string" } } })
    );
}

#[test]
fn malformed_input_fails_the_whole_run() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.json");
    fs::write(&input, "this is not json").unwrap();

    let assert = md2swagger().arg(&input).assert().failure();
    assert!(assert.get_output().stdout.is_empty());
}

#[test]
fn missing_input_file_fails_the_whole_run() {
    let dir = tempdir().unwrap();
    md2swagger()
        .arg(dir.path().join("does-not-exist.json"))
        .assert()
        .failure();
}
