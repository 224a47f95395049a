use super::*;
use crate::language::Document;

struct Echo {
    ready: bool,
}

impl Operator for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn signature(&self) -> Signature {
        Signature {
            min_args: 1,
            max_args: None,
            pure: true,
        }
    }

    fn phase(&self) -> Phase {
        Phase::Merge
    }

    fn setup(&mut self) -> Result<()> {
        self.ready = true;
        Ok(())
    }

    fn dependencies(&self, _: &[Argument], _: &[Cursor], auto: &[Cursor]) -> Vec<Cursor> {
        auto.to_vec()
    }

    fn run(&self, _: &Evaluation<'_>, args: &[Argument]) -> Result<Response, OperatorError> {
        match args.first() {
            Some(Argument::Literal(v)) if self.ready => Ok(Response::replace(v.clone())),
            _ => Err(OperatorError::ArgumentType {
                index: 0,
                message: "not ready".to_string(),
            }),
        }
    }
}

#[test]
fn test_builtins_are_registered() {
    let registry = OperatorRegistry::new();
    assert!(registry.has("ips"));
    assert_eq!(registry.names(), vec!["ips"]);
    assert_eq!(registry.get("ips").map(|op| op.phase()), Some(Phase::Eval));
    assert!(registry.get("nope").is_none());
}

#[test]
fn test_register_and_setup() {
    let mut registry = OperatorRegistry::empty();
    assert!(registry.names().is_empty());

    registry.register(Box::new(Echo { ready: false }));
    registry.setup_all().unwrap();

    let d = Document::new(Value::Null);
    let logger = Logger::new();
    let ev = Evaluation::new(Cursor::root(), &d, &logger);
    let op = registry.get("echo").unwrap();
    assert_eq!(
        op.run(&ev, &[Argument::literal("hi")]).unwrap().value,
        Value::from("hi")
    );
}

#[test]
fn test_signature_description() {
    let variadic = Signature {
        min_args: 1,
        max_args: None,
        pure: false,
    };
    assert_eq!(variadic.describe(), "at least 1");
    assert!(variadic.accepts(50));
    assert!(!variadic.accepts(0));

    let fixed = Signature {
        min_args: 2,
        max_args: Some(2),
        pure: true,
    };
    assert_eq!(fixed.describe(), "exactly 2");
}

#[test]
fn test_phase_ordering() {
    assert!(Phase::Merge < Phase::Param);
    assert!(Phase::Param < Phase::Eval);
}
