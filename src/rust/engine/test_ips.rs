use super::*;
use crate::addr::RangePolicy;
use crate::engine::error::ErrorKind;
use crate::language::Document;
use crate::tools::logger::Logger;

fn doc() -> Document {
    Document::from_json_str(
        r#"{
            "meta": {
                "net": "10.0.0.0/24",
                "bare": "10.0.0.5",
                "index": 5,
                "wide": 3000000000,
                "count": "3",
                "list": ["a"],
                "map": { "k": "v" }
            }
        }"#,
    )
    .unwrap()
}

fn run(args: Vec<Argument>) -> Result<Response, OperatorError> {
    let d = doc();
    let logger = Logger::new();
    let ev = Evaluation::new("jobs.0.ip".parse().unwrap(), &d, &logger);
    IpsOperator.run(&ev, &args)
}

fn lit(s: &str) -> Argument {
    Argument::literal(s)
}

fn reference(s: &str) -> Argument {
    Argument::reference(s.parse().unwrap())
}

fn strings(list: &[&str]) -> Value {
    Value::Sequence(list.iter().map(|s| Value::from(*s)).collect())
}

#[test]
fn test_single_address() {
    let response = run(vec![lit("10.0.0.0/24"), lit("5")]).unwrap();
    assert_eq!(response, Response::replace(Value::from("10.0.0.5")));
}

#[test]
fn test_negative_index() {
    let response = run(vec![lit("10.0.0.0/24"), lit("-1")]).unwrap();
    assert_eq!(response.value, Value::from("10.0.0.255"));
}

#[test]
fn test_range() {
    let response = run(vec![lit("10.0.0.0/24"), lit("0"), lit("3")]).unwrap();
    assert_eq!(
        response.value,
        strings(&["10.0.0.0", "10.0.0.1", "10.0.0.2"])
    );
}

#[test]
fn test_integer_literals_of_both_widths() {
    let response = run(vec![
        lit("10.0.0.0/24"),
        Argument::literal(Value::Int(1)),
        Argument::literal(Value::Int64(2)),
    ])
    .unwrap();
    assert_eq!(response.value, strings(&["10.0.0.1", "10.0.0.2"]));
}

#[test]
fn test_references_are_resolved() {
    let response = run(vec![reference("meta.net"), reference("meta.index")]).unwrap();
    assert_eq!(response.value, Value::from("10.0.0.5"));

    let response = run(vec![reference("meta.net"), lit("1"), reference("meta.count")]).unwrap();
    assert_eq!(
        response.value,
        strings(&["10.0.0.1", "10.0.0.2", "10.0.0.3"])
    );
}

#[test]
fn test_wide_integer_reference_hits_bounds() {
    let err = run(vec![reference("meta.net"), reference("meta.wide")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Bounds);
}

#[test]
fn test_bare_address_has_no_bounds_check() {
    let response = run(vec![reference("meta.bare"), lit("-1")]).unwrap();
    assert_eq!(response.value, Value::from("10.0.0.4"));
}

#[test]
fn test_range_exceeding_block() {
    let err = run(vec![lit("10.0.0.0/24"), lit("250"), lit("10")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Bounds);
    assert_eq!(
        err.to_string(),
        "start index 250 and count 10 would exceed size of block 10.0.0.0/24"
    );
}

#[test]
fn test_argument_count() {
    for args in [
        vec![],
        vec![lit("10.0.0.0/24")],
        vec![lit("10.0.0.0/24"), lit("1"), lit("2"), lit("3")],
    ] {
        let err = run(args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentCount);
    }

    let err = run(vec![lit("10.0.0.0/24")]).unwrap_err();
    assert_eq!(err.to_string(), "ips requires 2 to 3 arguments, got 1");
}

#[test]
fn test_unresolvable_reference() {
    let err = run(vec![reference("meta.missing"), lit("1")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ReferenceResolution);
    assert_eq!(err.argument_index(), Some(0));
    match err {
        OperatorError::ReferenceResolution { path, message, .. } => {
            assert_eq!(path, "meta.missing");
            assert!(message.contains("could not be found"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_nested_call_is_an_argument_type_error() {
    let call = Argument::Call {
        name: "calc".to_string(),
        args: vec![],
    };
    let err = run(vec![lit("10.0.0.0/24"), call]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentType);
    assert_eq!(err.argument_index(), Some(1));
}

#[test]
fn test_collections_are_argument_type_errors() {
    let err = run(vec![reference("meta.list"), lit("1")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentType);
    assert_eq!(err.argument_index(), Some(0));

    let err = run(vec![lit("10.0.0.0/24"), reference("meta.map")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentType);
    assert_eq!(err.argument_index(), Some(1));
}

#[test]
fn test_non_string_first_argument() {
    let err = run(vec![Argument::literal(Value::Int(10)), lit("1")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentType);
}

#[test]
fn test_coercion_errors() {
    let err = run(vec![lit("10.0.0.0/24"), lit("five")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Coercion);
    assert_eq!(err.argument_index(), Some(1));

    let err = run(vec![lit("10.0.0.0/24"), lit("1"), Argument::literal(Value::Float(2.5))])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Coercion);
    assert_eq!(err.argument_index(), Some(2));
}

#[test]
fn test_parse_error() {
    let err = run(vec![lit("10.0.0/24"), lit("1")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.argument_index(), Some(0));
}

#[test]
fn test_or_fallback_argument() {
    let arg = Argument::or(reference("meta.missing"), lit("192.168.1.0/24"));
    let response = run(vec![arg, lit("-2")]).unwrap();
    assert_eq!(response.value, Value::from("192.168.1.254"));
}

#[test]
fn test_missing_env_var() {
    let err = run(vec![
        Argument::EnvVar("ADDRSPAN_TEST_SURELY_UNSET_VAR".to_string()),
        lit("1"),
    ])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ReferenceResolution);
    match err {
        OperatorError::ReferenceResolution { path, .. } => {
            assert_eq!(path, "$ADDRSPAN_TEST_SURELY_UNSET_VAR")
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_strict_policy_is_honoured() {
    let d = doc();
    let logger = Logger::new();
    let ev = Evaluation::new(Cursor::root(), &d, &logger).with_policy(RangePolicy::strict());

    let err = IpsOperator
        .run(&ev, &[lit("0.0.0.0"), lit("-1")])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Bounds);
}

#[test]
fn test_declarations() {
    assert_eq!(IpsOperator.name(), "ips");
    assert_eq!(IpsOperator.phase(), Phase::Eval);
    let sig = IpsOperator.signature();
    assert!(sig.pure);
    assert!(!sig.accepts(1));
    assert!(sig.accepts(2));
    assert!(sig.accepts(3));
    assert!(!sig.accepts(4));
}

#[test]
fn test_dependencies_delegate_to_extractor() {
    let locations: Vec<Cursor> = ["meta", "meta.net", "other"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let deps = IpsOperator.dependencies(&[reference("meta.net"), lit("1")], &locations, &[]);
    assert_eq!(deps, vec!["meta.net".parse::<Cursor>().unwrap()]);
}
