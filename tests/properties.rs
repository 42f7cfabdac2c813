mod common;

use common::{additive_chain, binary, fold_chain};
use quickcheck::{QuickCheck, TestResult};
use reckon::{ast::NodeKind, context::Context, error::EvalError, evaluate};

const TESTS: u64 = 500;
const MAX_CHAIN: usize = 12;

fn operator(add: bool) -> char {
    if add { '+' } else { '-' }
}

#[test]
fn additive_chains_match_a_left_fold() {
    fn prop(first: i16, rest: Vec<(bool, i16)>) -> bool {
        let rest = rest.into_iter()
                       .take(MAX_CHAIN)
                       .map(|(add, value)| (operator(add), f64::from(value)))
                       .collect::<Vec<_>>();
        let first = f64::from(first);

        let ast = additive_chain(first, &rest);
        evaluate(&ast, &Context::new()) == Ok(fold_chain(first, &rest))
    }

    QuickCheck::new().tests(TESTS)
                     .quickcheck(prop as fn(i16, Vec<(bool, i16)>) -> bool);
}

#[test]
fn evaluation_is_idempotent() {
    fn prop(first: i16, rest: Vec<(bool, i16)>) -> bool {
        let rest = rest.into_iter()
                       .take(MAX_CHAIN)
                       .map(|(add, value)| (operator(add), f64::from(value)))
                       .collect::<Vec<_>>();

        let ast = additive_chain(f64::from(first), &rest);
        let context = Context::new();
        evaluate(&ast, &context) == evaluate(&ast, &context)
    }

    QuickCheck::new().tests(TESTS)
                     .quickcheck(prop as fn(i16, Vec<(bool, i16)>) -> bool);
}

#[test]
fn zero_divisors_always_fail() {
    fn prop(numerator: i32, modulo: bool) -> bool {
        let kind = if modulo { NodeKind::Modulo } else { NodeKind::Division };
        let ast = binary(kind, &numerator.to_string(), "0");

        evaluate(&ast, &Context::new())
        == Err(EvalError::DivisionByZero { numerator: f64::from(numerator) })
    }

    QuickCheck::new().tests(TESTS)
                     .quickcheck(prop as fn(i32, bool) -> bool);
}

#[test]
fn nonzero_divisors_match_float_division() {
    fn prop(numerator: i32, divisor: i32) -> TestResult {
        if divisor == 0 {
            return TestResult::discard();
        }
        let ast = binary(NodeKind::Division, &numerator.to_string(), &divisor.to_string());
        let expected = f64::from(numerator) / f64::from(divisor);

        TestResult::from_bool(evaluate(&ast, &Context::new()) == Ok(expected))
    }

    QuickCheck::new().tests(TESTS)
                     .quickcheck(prop as fn(i32, i32) -> TestResult);
}
