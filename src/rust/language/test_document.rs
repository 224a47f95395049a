use super::*;
use std::io::Write;

const DOC: &str = r#"{
    "meta": {
        "net": "10.0.0.0/24",
        "index": 5,
        "wide": 6000000000
    },
    "networks": [
        { "name": "default", "range": "10.1.0.0/16" },
        { "name": "mgmt", "range": "10.2.0.0/16" }
    ]
}"#;

fn doc() -> Document {
    Document::from_json_str(DOC).unwrap()
}

fn cur(s: &str) -> Cursor {
    s.parse().unwrap()
}

#[test]
fn test_resolve_scalar() {
    let d = doc();
    assert_eq!(
        d.resolve_reference(&cur("meta.net")).unwrap(),
        Value::from("10.0.0.0/24")
    );
    assert_eq!(d.resolve_reference(&cur("meta.index")).unwrap(), Value::Int(5));
    assert_eq!(
        d.resolve_reference(&cur("meta.wide")).unwrap(),
        Value::Int64(6_000_000_000)
    );
}

#[test]
fn test_resolve_list_by_index_and_name() {
    let d = doc();
    assert_eq!(
        d.resolve_reference(&cur("networks[1].range")).unwrap(),
        Value::from("10.2.0.0/16")
    );
    assert_eq!(
        d.resolve_reference(&cur("networks.default.range")).unwrap(),
        Value::from("10.1.0.0/16")
    );
}

#[test]
fn test_resolve_collections() {
    let d = doc();
    assert!(matches!(
        d.resolve_reference(&cur("networks")).unwrap(),
        Value::Sequence(_)
    ));
    assert!(matches!(
        d.resolve_reference(&cur("meta")).unwrap(),
        Value::Mapping(_)
    ));
}

#[test]
fn test_missing_path_error() {
    let err = doc().resolve_reference(&cur("meta.nope")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "`$.meta.nope` could not be found in the datastructure"
    );
    assert!(doc().resolve_reference(&cur("meta.net.deeper")).is_err());
    assert!(doc().resolve_reference(&cur("networks.9")).is_err());
}

#[test]
fn test_locations_preorder() {
    let locs: Vec<String> = doc().locations().iter().map(|c| c.to_string()).collect();
    assert_eq!(
        locs,
        vec![
            "meta",
            "meta.index",
            "meta.net",
            "meta.wide",
            "networks",
            "networks.0",
            "networks.0.name",
            "networks.0.range",
            "networks.1",
            "networks.1.name",
            "networks.1.range",
        ]
    );
}

#[test]
fn test_load_from_files() {
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("doc.json");
    std::fs::write(&json_path, DOC).unwrap();
    assert_eq!(Document::load(&json_path).unwrap(), doc());

    let toml_path = dir.path().join("doc.toml");
    let mut file = std::fs::File::create(&toml_path).unwrap();
    writeln!(file, "[meta]\nnet = \"10.9.0.0/24\"").unwrap();
    let d = Document::load(&toml_path).unwrap();
    assert_eq!(d.get(&cur("meta.net")), Some(&Value::from("10.9.0.0/24")));
}

#[test]
fn test_load_reports_bad_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(Document::load(&path).is_err());
    assert!(Document::load(dir.path().join("missing.json")).is_err());
}
