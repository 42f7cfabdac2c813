mod common;

use std::{fs, path::Path};

use common::init_test_logging;
use reckon::{
    ast::{Ast, RawNode},
    context::Context,
    error::EvalError,
    evaluate,
};
use serde::Deserialize;
use walkdir::WalkDir;

/// One recorded parser tree together with its expected outcome.
#[derive(Debug, Deserialize)]
struct Case {
    /// The source text the tree was parsed from.
    expression: String,
    tree:       RawNode,
    #[serde(default)]
    value:      Option<f64>,
    #[serde(default)]
    error:      Option<String>,
}

fn error_name(err: &EvalError) -> &'static str {
    match err {
        EvalError::UnknownFunction { .. } => "UnknownFunction",
        EvalError::UnknownConstant { .. } => "UnknownConstant",
        EvalError::UnknownVariable { .. } => "UnknownVariable",
        EvalError::DivisionByZero { .. } => "DivisionByZero",
        EvalError::UnsupportedNodeKind { .. } => "UnsupportedNodeKind",
        EvalError::MalformedNode { .. } => "MalformedNode",
        EvalError::InvalidNumber { .. } => "InvalidNumber",
        EvalError::ArityMismatch { .. } => "ArityMismatch",
        EvalError::InvalidArgument { .. } => "InvalidArgument",
        EvalError::RecursionLimitExceeded { .. } => "RecursionLimitExceeded",
        EvalError::Cancelled => "Cancelled",
    }
}

fn run_case(path: &Path, case: &Case, context: &Context) {
    let result = Ast::from_raw(&case.tree).and_then(|ast| evaluate(&ast, context));

    match (&result, case.value, case.error.as_deref()) {
        (Ok(actual), Some(expected), None) => {
            let tolerance = 1e-12 * expected.abs().max(1.0);
            assert!((actual - expected).abs() <= tolerance,
                    "{:?}: `{}` evaluated to {actual}, expected {expected}",
                    path,
                    case.expression);
        },
        (Err(err), None, Some(expected)) => {
            assert_eq!(error_name(err),
                       expected,
                       "{:?}: `{}` failed with {err}",
                       path,
                       case.expression);
        },
        (_, Some(_), Some(_)) | (_, None, None) => {
            panic!("{path:?}: a case needs exactly one of `value` and `error`")
        },
        _ => panic!("{:?}: `{}` gave {result:?}, expected {:?}",
                    path,
                    case.expression,
                    case.value.map_or_else(|| case.error.clone().unwrap_or_default(),
                                           |v| v.to_string())),
    }
}

#[test]
fn recorded_parser_trees_evaluate() {
    init_test_logging();

    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/cases");
    let context = Context::new();
    let mut count = 0;

    for entry in WalkDir::new(&root).sort_by_file_name()
                                    .into_iter()
                                    .filter_map(Result::ok)
                                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let case: Case = serde_json::from_str(&content).unwrap_or_else(|e| {
                                                            panic!("Failed to decode {path:?}: {e}")
                                                        });

        run_case(path, &case, &context);
        count += 1;
    }

    assert!(count > 0, "No cases found in {root:?}");
}
