#![allow(dead_code)]

use reckon::ast::{Ast, AstBuilder, NodeKind, Pending};

/// Initializes a tracing subscriber writing to the test output.
///
/// The filter defaults to `debug` and honours `RUST_LOG`. Safe to call from
/// every test; only the first call installs the subscriber.
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                                        EnvFilter::new("debug")
                                                                    }))
                 .with_test_writer()
                 .try_init();
}

/// Builds `first op1 v1 op2 v2 ...` the way the grammar nests it:
/// `first op1 (v1 op2 (v2 ...))`.
pub fn additive_chain(first: f64, rest: &[(char, f64)]) -> Ast {
    let mut b = AstBuilder::new();
    let root = nest(&mut b, first, rest);
    b.finish(root)
}

fn nest(b: &mut AstBuilder, first: f64, rest: &[(char, f64)]) -> Pending {
    let left = b.number(first.to_string());
    let Some((&(op, next), tail)) = rest.split_first() else {
        return left;
    };
    let kind = match op {
        '+' => NodeKind::Addition,
        '-' => NodeKind::Subtraction,
        other => panic!("not an additive operator: {other}"),
    };
    let right = nest(b, next, tail);
    b.node(kind, vec![left, right])
}

/// Left-to-right reference evaluation of an additive chain.
pub fn fold_chain(first: f64, rest: &[(char, f64)]) -> f64 {
    rest.iter().fold(first, |acc, &(op, value)| match op {
                   '+' => acc + value,
                   _ => acc - value,
               })
}

/// Builds `left <kind> right` over two number literals.
pub fn binary(kind: NodeKind, left: &str, right: &str) -> Ast {
    let mut b = AstBuilder::new();
    let (left, right) = (b.number(left), b.number(right));
    let root = b.node(kind, vec![left, right]);
    b.finish(root)
}

/// Builds a call of `name` over number literals.
pub fn call(name: &str, args: &[&str]) -> Ast {
    let mut b = AstBuilder::new();
    let args = args.iter().map(|arg| b.number(*arg)).collect();
    let root = b.function(name, args);
    b.finish(root)
}

/// Asserts that `actual` is within a relative tolerance of `expected`.
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-12 * expected.abs().max(1.0);
    assert!((actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}");
}
