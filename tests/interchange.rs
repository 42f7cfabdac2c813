mod common;

use common::init_test_logging;
use pretty_assertions::assert_eq;
use reckon::{
    ast::{Ast, NodeKind, RawNode, TokenClass},
    context::Context,
    error::{EvalError, LoadError},
    evaluate,
};

fn load(json: &str) -> Ast {
    Ast::from_json(json).unwrap_or_else(|e| panic!("Failed to load {json}: {e}"))
}

#[test]
fn parent_links_and_child_positions() {
    init_test_logging();

    let ast = load(r##"{ "id": "#substraction", "children": [
                          { "id": "token", "token": "number", "value": "10" },
                          { "id": "#addition", "children": [
                              { "id": "token", "token": "number", "value": "3" },
                              { "id": "token", "token": "number", "value": "2" }
                          ] }
                      ] }"##);

    assert_eq!(ast.len(), 5);
    let root = ast.root();
    assert_eq!(ast.node(root).kind(), NodeKind::Subtraction);
    assert_eq!(ast.parent(root), None);

    let [left, right] = ast.children(root) else {
        panic!("expected two children");
    };
    assert_eq!(ast.parent(*left), Some(root));
    assert_eq!(ast.child_index(*left), Some(0));
    assert_eq!(ast.child_index(*right), Some(1));
    assert_eq!(ast.node(*right).kind(), NodeKind::Addition);

    let token = ast.node(*left).token().unwrap();
    assert_eq!(token.class(), TokenClass::Number);
    assert_eq!(token.value(), "10");

    assert_eq!(evaluate(&ast, &Context::new()), Ok(9.0));
}

#[test]
fn functions_and_variables() {
    let ast = load(r##"{ "id": "#function", "children": [
                          { "id": "token", "token": "id", "value": "max" },
                          { "id": "#variable", "children": [
                              { "id": "token", "token": "id", "value": "x" }
                          ] },
                          { "id": "token", "token": "constant", "value": "PI" }
                      ] }"##);

    let mut context = Context::new();
    context.add_variable("x", || 10.0);
    assert_eq!(evaluate(&ast, &context), Ok(10.0));

    context.add_variable("x", || 1.0);
    assert_eq!(evaluate(&ast, &context), Ok(std::f64::consts::PI));
}

/// `1 + 2 + ... + terms`, nested to the right as the grammar emits it.
fn addition_chain_json(terms: u32) -> String {
    let number = |n: u32| format!(r#"{{ "id": "token", "token": "number", "value": "{n}" }}"#);

    (1..terms).rev().fold(number(terms), |inner, n| {
                        format!(r##"{{ "id": "#addition", "children": [{}, {inner}] }}"##,
                                number(n))
                    })
}

#[test]
fn long_chains_load_and_evaluate() {
    for terms in [71, 300, 900] {
        let ast = Ast::from_json(&addition_chain_json(terms)).unwrap_or_else(|e| {
                                                              panic!("{terms} terms: {e}")
                                                          });
        assert_eq!(ast.len(), 2 * terms as usize - 1);
        assert_eq!(evaluate(&ast, &Context::new()), Ok(f64::from(terms * (terms + 1) / 2)));
    }
}

#[test]
fn trailing_input_is_rejected() {
    let err = Ast::from_json(r#"{ "id": "token", "token": "number", "value": "1" } {}"#)
              .unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn unsupported_kinds_are_rejected() {
    let err = Ast::from_json(r##"{ "id": "#matrix", "children": [] }"##).unwrap_err();
    assert!(matches!(&err,
                     LoadError::Tree(EvalError::UnsupportedNodeKind { kind }) if kind == "#matrix"),
            "unexpected error: {err}");

    let err = Ast::from_json(r#"{ "id": "token", "token": "string", "value": "a" }"#).unwrap_err();
    assert!(matches!(&err,
                     LoadError::Tree(EvalError::UnsupportedNodeKind { kind }) if kind == "token:string"),
            "unexpected error: {err}");
}

#[test]
fn malformed_tokens_are_rejected() {
    let err = Ast::from_json(r#"{ "id": "token", "token": "number" }"#).unwrap_err();
    assert!(matches!(err, LoadError::Tree(EvalError::MalformedNode { kind: NodeKind::Token, .. })));

    let err = Ast::from_json(r#"{ "id": "token", "token": "number", "value": "1",
                                 "children": [{ "id": "token", "token": "number", "value": "2" }] }"#)
              .unwrap_err();
    assert!(matches!(err, LoadError::Tree(EvalError::MalformedNode { kind: NodeKind::Token, .. })));
}

#[test]
fn invalid_json_is_a_decoding_error() {
    let err = Ast::from_json("{ \"id\": ").unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
    assert!(err.to_string().starts_with("Invalid tree document:"));

    let err = Ast::from_json(r#"{ "children": [] }"#).unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn child_counts_are_checked_during_evaluation() {
    let raw: RawNode = serde_json::from_str(r##"{ "id": "#negative", "children": [] }"##).unwrap();
    let ast = Ast::from_raw(&raw).unwrap();

    let result = evaluate(&ast, &Context::new());
    assert_eq!(result,
               Err(EvalError::malformed(NodeKind::Negative, "expected 1 child(ren), found 0")));
}
