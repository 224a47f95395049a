use super::*;

fn cur(s: &str) -> Cursor {
    s.parse().unwrap()
}

#[test]
fn test_parse_dotted_path() {
    assert_eq!(cur("meta.net.range").nodes(), ["meta", "net", "range"]);
    assert_eq!(cur("$.meta.net").nodes(), ["meta", "net"]);
    assert_eq!(cur("meta.net").to_string(), "meta.net");
}

#[test]
fn test_parse_bracket_indices() {
    assert_eq!(
        cur("$.networks[0].subnets[2][1]").nodes(),
        ["networks", "0", "subnets", "2", "1"]
    );
    assert_eq!(cur("networks.0").nodes(), ["networks", "0"]);
}

#[test]
fn test_parse_root() {
    assert!(cur("$").is_root());
    assert!(cur("").is_root());
    assert_eq!(Cursor::root().depth(), 0);
}

#[test]
fn test_parse_errors() {
    assert!("a..b".parse::<Cursor>().is_err());
    assert!("a[0".parse::<Cursor>().is_err());
    assert!("a]".parse::<Cursor>().is_err());
}

#[test]
fn test_under_includes_self_and_descendants() {
    let reference = cur("a.b");
    assert!(cur("a.b").under(&reference));
    assert!(cur("a.b.c").under(&reference));
    assert!(cur("a.b.c.d").under(&reference));
    assert!(!cur("a").under(&reference));
    assert!(!cur("x").under(&reference));
    assert!(!cur("a.bc").under(&reference));
}

#[test]
fn test_everything_is_under_root() {
    assert!(cur("a.b").under(&Cursor::root()));
    assert!(Cursor::root().under(&Cursor::root()));
}

#[test]
fn test_child_and_parent() {
    let c = Cursor::root().child("a").child("b");
    assert_eq!(c, cur("a.b"));
    assert_eq!(c.parent(), Some(cur("a")));
    assert_eq!(Cursor::root().parent(), None);
}
