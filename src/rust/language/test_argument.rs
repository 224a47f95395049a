use super::*;
use crate::language::document::Document;

fn doc() -> Document {
    Document::from_json_str(r#"{ "meta": { "net": "10.0.0.0/24" } }"#).unwrap()
}

fn fake_env(name: &str) -> Option<String> {
    match name {
        "NET" => Some("192.168.0.0/16".to_string()),
        _ => None,
    }
}

#[test]
fn test_plain_arguments_are_untouched() {
    let d = doc();
    let lit = Argument::literal("10.0.0.0/8");
    assert_eq!(lit.simplify_with(&d, &fake_env).unwrap(), lit);

    let reference = Argument::reference("meta.net".parse().unwrap());
    assert_eq!(reference.simplify_with(&d, &fake_env).unwrap(), reference);
}

#[test]
fn test_env_var_becomes_literal() {
    let arg = Argument::EnvVar("NET".to_string());
    assert_eq!(
        arg.simplify_with(&doc(), &fake_env).unwrap(),
        Argument::literal("192.168.0.0/16")
    );
}

#[test]
fn test_missing_env_var_fails() {
    let err = Argument::EnvVar("MISSING".to_string())
        .simplify_with(&doc(), &fake_env)
        .unwrap_err();
    assert_eq!(err.to_string(), "environment variable $MISSING is not set");
}

#[test]
fn test_or_prefers_resolvable_left() {
    let arg = Argument::or(
        Argument::reference("meta.net".parse().unwrap()),
        Argument::literal("fallback"),
    );
    assert_eq!(
        arg.simplify_with(&doc(), &fake_env).unwrap(),
        Argument::reference("meta.net".parse().unwrap())
    );
}

#[test]
fn test_or_falls_back_on_missing_reference() {
    let arg = Argument::or(
        Argument::reference("meta.missing".parse().unwrap()),
        Argument::literal("10.9.0.0/24"),
    );
    assert_eq!(
        arg.simplify_with(&doc(), &fake_env).unwrap(),
        Argument::literal("10.9.0.0/24")
    );
}

#[test]
fn test_or_falls_back_on_missing_env_var() {
    let arg = Argument::or(
        Argument::EnvVar("MISSING".to_string()),
        Argument::EnvVar("NET".to_string()),
    );
    assert_eq!(
        arg.simplify_with(&doc(), &fake_env).unwrap(),
        Argument::literal("192.168.0.0/16")
    );
}

#[test]
fn test_nested_call_is_left_alone() {
    let call = Argument::Call {
        name: "concat".to_string(),
        args: vec![Argument::literal("a")],
    };
    assert_eq!(call.simplify_with(&doc(), &fake_env).unwrap(), call);
    assert!(call.as_reference().is_none());
}
