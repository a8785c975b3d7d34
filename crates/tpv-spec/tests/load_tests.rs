use std::io::Write;

use tpv_core::{MemberKind, UnitKind};
use tpv_spec::load_units;

#[test]
fn test_load_yaml_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unzip.yaml");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(
        f,
        "name: org.example.Unzip\nkind: transform\ncacheable: true\nmembers:\n  - name: getInputArtifact\n    kind: getter_method\n    annotations: [\"@InputFiles\", \"@PathSensitive(NAME_ONLY)\"]"
    )
    .unwrap();

    let units = load_units(&path).unwrap();
    assert_eq!(units[0].kind, UnitKind::Transform);
    assert_eq!(units[0].members[0].kind, MemberKind::Getter);
}

#[test]
fn test_load_json_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("units.json");
    std::fs::write(&path, r#"{"units": [{"name": "A", "kind": "task"}]}"#).unwrap();
    assert_eq!(load_units(&path).unwrap().len(), 1);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.yaml");
    let err = load_units(&path).unwrap_err();
    assert!(format!("{err:#}").contains("nope.yaml"));
}
