use super::*;
use crate::engine::error::ErrorKind;
use crate::language::{Document, Value};

fn doc() -> Document {
    Document::from_json_str(
        r#"{
            "meta": { "net": "10.4.0.0/16", "bare": "0.0.0.0" },
            "jobs": [ { "name": "web", "ip": null } ]
        }"#,
    )
    .unwrap()
}

fn cur(s: &str) -> Cursor {
    s.parse().unwrap()
}

fn ips(at: &str, args: Vec<Argument>) -> CallSite {
    CallSite::new(cur(at), "ips", args)
}

#[test]
fn test_evaluate_single_call() {
    let call = ips(
        "jobs.0.ip",
        vec![
            Argument::reference(cur("meta.net")),
            Argument::literal("256"),
        ],
    );
    let response = Evaluator::default().evaluate(&doc(), &call).unwrap();
    assert_eq!(response.value, Value::from("10.4.1.0"));
}

#[test]
fn test_unknown_operator() {
    let call = CallSite::new(cur("x"), "nope", vec![]);
    let err = Evaluator::default().evaluate(&doc(), &call).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownOperator);
    assert_eq!(err.to_string(), "unknown operator 'nope'");
}

#[test]
fn test_evaluate_all_keeps_input_order() {
    let calls: Vec<CallSite> = (0..200)
        .map(|i| {
            ips(
                &format!("hosts.{}", i),
                vec![Argument::literal("10.0.0.0/16"), Argument::literal(Value::Int(i))],
            )
        })
        .collect();

    let evaluator = Evaluator::default();
    let results = evaluator.evaluate_all(&doc(), &calls);
    assert_eq!(results.len(), 200);
    for (i, result) in results.iter().enumerate() {
        let expected = format!("10.0.{}.{}", i / 256, i % 256);
        assert_eq!(result.as_ref().unwrap().value, Value::String(expected));
    }

    // Same inputs, same outputs.
    assert_eq!(evaluator.evaluate_all(&doc(), &calls), results);
}

#[test]
fn test_evaluate_all_isolates_failures() {
    let calls = vec![
        ips("a", vec![Argument::literal("10.0.0.0/24"), Argument::literal("1")]),
        ips("b", vec![Argument::literal("10.0.0.0/24"), Argument::literal("999")]),
        ips("c", vec![Argument::literal("garbage"), Argument::literal("1")]),
    ];
    let results = Evaluator::default().evaluate_all(&doc(), &calls);
    assert!(results[0].is_ok());
    assert_eq!(results[1].as_ref().unwrap_err().kind(), ErrorKind::Bounds);
    assert_eq!(results[2].as_ref().unwrap_err().kind(), ErrorKind::Parse);
}

#[test]
fn test_config_policy_reaches_operator() {
    let mut config = AppConfig::default();
    config.ips.strict_bare_addresses = true;
    let evaluator = Evaluator::from_config(OperatorRegistry::new(), &config);

    let call = ips(
        "x",
        vec![Argument::reference(cur("meta.bare")), Argument::literal("-1")],
    );
    let err = evaluator.evaluate(&doc(), &call).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Bounds);

    let lenient = Evaluator::default().evaluate(&doc(), &call).unwrap();
    assert_eq!(lenient.value, Value::from("255.255.255.255"));
}

#[test]
fn test_dependencies_of() {
    let d = doc();
    let call = ips(
        "jobs.0.ip",
        vec![
            Argument::reference(cur("meta")),
            Argument::literal("1"),
        ],
    );
    let deps = Evaluator::default().dependencies_of(&call, &d.locations(), &[cur("auto.dep")]);
    assert_eq!(
        deps,
        vec![cur("meta"), cur("meta.bare"), cur("meta.net"), cur("auto.dep")]
    );

    let unknown = CallSite::new(cur("x"), "nope", vec![Argument::reference(cur("meta"))]);
    assert!(Evaluator::default().dependencies_of(&unknown, &d.locations(), &[]).is_empty());
}
