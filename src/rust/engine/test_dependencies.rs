use super::*;

fn cur(s: &str) -> Cursor {
    s.parse().unwrap()
}

fn known() -> Vec<Cursor> {
    vec![cur("a"), cur("a.b"), cur("a.b.c"), cur("x")]
}

#[test]
fn test_reference_pulls_in_self_and_descendants() {
    let args = vec![Argument::reference(cur("a.b")), Argument::literal("0")];
    assert_eq!(
        dependencies(&args, &known(), &[]),
        vec![cur("a.b"), cur("a.b.c")]
    );
}

#[test]
fn test_auto_dependencies_are_appended_verbatim() {
    let args = vec![Argument::reference(cur("a.b"))];
    let auto = vec![cur("a.b"), cur("z.y")];
    assert_eq!(
        dependencies(&args, &known(), &auto),
        vec![cur("a.b"), cur("a.b.c"), cur("a.b"), cur("z.y")]
    );
}

#[test]
fn test_literals_contribute_nothing() {
    let args = vec![Argument::literal("10.0.0.0/24"), Argument::literal("3")];
    assert!(dependencies(&args, &known(), &[]).is_empty());
}

#[test]
fn test_only_top_level_references_count() {
    let args = vec![
        Argument::or(Argument::reference(cur("a")), Argument::literal("x")),
        Argument::EnvVar("HOME".to_string()),
        Argument::Call {
            name: "grab".to_string(),
            args: vec![Argument::reference(cur("x"))],
        },
    ];
    assert!(dependencies(&args, &known(), &[]).is_empty());
}

#[test]
fn test_output_follows_argument_order() {
    let args = vec![Argument::reference(cur("x")), Argument::reference(cur("a.b.c"))];
    assert_eq!(
        dependencies(&args, &known(), &[cur("q")]),
        vec![cur("x"), cur("a.b.c"), cur("q")]
    );
}

#[test]
fn test_unknown_reference_matches_nothing() {
    let args = vec![Argument::reference(cur("nope"))];
    assert_eq!(dependencies(&args, &known(), &[]), Vec::<Cursor>::new());
}
