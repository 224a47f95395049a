use std::fs;

use addrspan::engine::{CallSite, ErrorKind, Evaluator};
use addrspan::{Argument, Cursor, Document, RangeError, Resolved, Value, dependencies, resolve};

#[test]
fn test_end_to_end_resolution() {
    assert_eq!(
        resolve("10.0.0.0/24", 5, None).unwrap(),
        Resolved::Single("10.0.0.5".to_string())
    );
    assert_eq!(
        resolve("10.0.0.0/24", -1, None).unwrap(),
        Resolved::Single("10.0.0.255".to_string())
    );
    assert_eq!(
        resolve("10.0.0.0/24", 0, Some(3)).unwrap(),
        Resolved::Range(vec![
            "10.0.0.0".to_string(),
            "10.0.0.1".to_string(),
            "10.0.0.2".to_string(),
        ])
    );
    assert!(matches!(
        resolve("10.0.0.0/24", 250, Some(10)),
        Err(RangeError::RangeOutOfBlock { .. })
    ));
    assert_eq!(
        resolve("10.0.0.5", -1, None).unwrap(),
        Resolved::Single("10.0.0.4".to_string())
    );
}

#[test]
fn test_dependency_law() {
    let known: Vec<Cursor> = ["a", "a.b", "a.b.c", "x"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let auto: Vec<Cursor> = vec!["auto.one".parse().unwrap()];
    let args = vec![Argument::reference("a.b".parse().unwrap())];

    let deps: Vec<String> = dependencies(&args, &known, &auto)
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(deps, vec!["a.b", "a.b.c", "auto.one"]);
}

#[test]
fn test_manifest_style_document() {
    let doc = Document::from_json_str(
        r#"{
            "networks": [
                { "name": "default", "subnet": "10.244.0.0/22", "static_count": 4 }
            ],
            "jobs": [
                { "name": "web", "instances": 3 },
                { "name": "db", "instances": 1 }
            ]
        }"#,
    )
    .unwrap();

    let subnet = Argument::reference("networks.default.subnet".parse().unwrap());
    let calls = vec![
        CallSite::new(
            "jobs.web.static_ips".parse().unwrap(),
            "ips",
            vec![
                subnet.clone(),
                Argument::literal(Value::Int(10)),
                Argument::reference("jobs.web.instances".parse().unwrap()),
            ],
        ),
        CallSite::new(
            "jobs.db.static_ips".parse().unwrap(),
            "ips",
            vec![subnet.clone(), Argument::literal("-2"), Argument::literal("1")],
        ),
        CallSite::new(
            "jobs.db.gateway".parse().unwrap(),
            "ips",
            vec![subnet, Argument::literal("1")],
        ),
    ];

    let results = Evaluator::default().evaluate_all(&doc, &calls);
    let values: Vec<Value> = results.into_iter().map(|r| r.unwrap().value).collect();

    assert_eq!(
        values[0],
        Value::Sequence(vec![
            Value::from("10.244.0.10"),
            Value::from("10.244.0.11"),
            Value::from("10.244.0.12"),
        ])
    );
    assert_eq!(values[1], Value::Sequence(vec![Value::from("10.244.3.254")]));
    assert_eq!(values[2], Value::from("10.244.0.1"));
}

#[test]
fn test_errors_are_typed() {
    let doc = Document::new(Value::Null);
    let call = CallSite::new(
        Cursor::root(),
        "ips",
        vec![Argument::literal("10.0.0.0/24"), Argument::literal("x")],
    );
    let err = Evaluator::default().evaluate(&doc, &call).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Coercion);
    assert_eq!(err.kind().code(), "CoercionError");
}

#[test]
fn test_document_file_drives_evaluation() {
    // Prepare temporary files in target dir
    let tmp_dir = std::env::temp_dir().join("addrspan_test_scenarios");
    let _ = fs::remove_dir_all(&tmp_dir);
    let _ = fs::create_dir_all(&tmp_dir);

    let doc_path = tmp_dir.join("manifest.toml");
    let content = r#"
[meta]
net = "192.168.10.0/28"
first = "2"

[[jobs]]
name = "cache"
instances = 2
"#;
    fs::write(&doc_path, content).expect("write document");

    // Load and evaluate
    let doc = Document::load(&doc_path).expect("load document");
    let call = CallSite::new(
        "jobs.cache.static_ips".parse().unwrap(),
        "ips",
        vec![
            Argument::reference("meta.net".parse().unwrap()),
            Argument::reference("meta.first".parse().unwrap()),
            Argument::reference("jobs.cache.instances".parse().unwrap()),
        ],
    );

    let response = Evaluator::default().evaluate(&doc, &call).expect("evaluate");
    assert_eq!(
        response.value,
        Value::Sequence(vec![Value::from("192.168.10.2"), Value::from("192.168.10.3")])
    );

    let locations = doc.locations();
    assert!(locations.iter().any(|c| c.to_string() == "jobs.0.instances"));

    let deps = Evaluator::default().dependencies_of(&call, &locations, &[]);
    let deps: Vec<String> = deps.iter().map(|c| c.to_string()).collect();
    assert_eq!(deps, vec!["meta.net", "meta.first"]);
}
