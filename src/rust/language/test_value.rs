use super::*;
use serde_json::json;

#[test]
fn test_integer_coercion_accepts_both_widths() {
    assert_eq!(Value::Int(-3).as_integer(), Some(-3));
    assert_eq!(Value::Int64(1 << 40).as_integer(), Some(1 << 40));
    assert_eq!(Value::from("42").as_integer(), Some(42));
    assert_eq!(Value::from(" -7 ").as_integer(), Some(-7));
}

#[test]
fn test_integer_coercion_rejects_non_integers() {
    assert_eq!(Value::Float(1.0).as_integer(), None);
    assert_eq!(Value::Bool(true).as_integer(), None);
    assert_eq!(Value::Null.as_integer(), None);
    assert_eq!(Value::from("1.5").as_integer(), None);
    assert_eq!(Value::from("ten").as_integer(), None);
    assert_eq!(Value::Sequence(vec![Value::Int(1)]).as_integer(), None);
}

#[test]
fn test_scalars() {
    assert!(Value::from("x").is_scalar());
    assert!(Value::Int(1).is_scalar());
    assert!(!Value::Sequence(vec![]).is_scalar());
    assert!(!Value::Mapping(BTreeMap::new()).is_scalar());
}

#[test]
fn test_from_json_picks_integer_width() {
    assert_eq!(Value::from_json(json!(5)), Value::Int(5));
    assert_eq!(
        Value::from_json(json!(5_000_000_000i64)),
        Value::Int64(5_000_000_000)
    );
    assert_eq!(Value::from_json(json!(2.5)), Value::Float(2.5));
}

#[test]
fn test_json_nested_conversion() {
    let json = json!({
        "networks": [{ "name": "default", "range": "10.0.0.0/24" }],
        "enabled": true
    });
    let value = Value::from_json(json.clone());

    match &value {
        Value::Mapping(map) => {
            assert_eq!(map.get("enabled"), Some(&Value::Bool(true)));
            assert!(matches!(map.get("networks"), Some(Value::Sequence(_))));
        }
        other => panic!("expected mapping, got {:?}", other),
    }

    assert_eq!(value.to_json(), json);
}

#[test]
fn test_from_toml() {
    let table: toml::Value = toml::from_str("size = 3\nbig = 9000000000\nname = \"a\"").unwrap();
    match Value::from_toml(table) {
        Value::Mapping(map) => {
            assert_eq!(map.get("size"), Some(&Value::Int(3)));
            assert_eq!(map.get("big"), Some(&Value::Int64(9_000_000_000)));
            assert_eq!(map.get("name"), Some(&Value::from("a")));
        }
        other => panic!("expected mapping, got {:?}", other),
    }
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Int(1).type_name(), "integer");
    assert_eq!(Value::Int64(1).type_name(), "integer");
    assert_eq!(Value::Sequence(vec![]).type_name(), "list");
    assert_eq!(Value::Mapping(BTreeMap::new()).type_name(), "map");
}
