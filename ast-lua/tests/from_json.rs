use ast_lua::ast::expr::{Expr, Indexer};
use ast_lua::ast::stmt::Stmt;
use ast_lua::error::TreeError;
use ast_lua::from_json;
use ast_lua::operator::OperatorName;

#[test]
fn loads_local_declaration() {
  let chunk = from_json(
    r#"{"body": [{"$t": "Local", "names": ["x"], "values": [{"$t": "LitNum", "raw": "1"}]}]}"#,
  )
  .unwrap();
  assert_eq!(chunk.body, vec![Stmt::local(vec!["x".to_string()], vec![Expr::num("1")])]);
  assert!(chunk.globals.is_empty());
}

#[test]
fn loads_nested_expressions() {
  let chunk = from_json(
    r#"{
      "globals": ["print", "string"],
      "body": [
        {"$t": "Call", "call": {"$t": "Call",
          "callee": {"$t": "Id", "name": "print", "is_local": false},
          "arguments": [
            {"$t": "Binary", "operator": "Concat",
              "left": {"$t": "Member", "object": {"$t": "Id", "name": "string", "is_local": false}, "indexer": "Dot", "name": "rep"},
              "right": {"$t": "Unary", "operator": "Length", "argument": {"$t": "Vararg"}}},
            {"$t": "LitNil"}
          ]}}
      ]
    }"#,
  )
  .unwrap();
  let expected = Stmt::call(Expr::call(Expr::global("print"), vec![
    Expr::binary(
      OperatorName::Concat,
      Expr::member(Expr::global("string"), Indexer::Dot, "rep"),
      Expr::unary(OperatorName::Length, Expr::vararg()),
    ),
    Expr::nil(),
  ]));
  assert_eq!(chunk.body, vec![expected]);
  assert_eq!(chunk.globals, vec!["print".to_string(), "string".to_string()]);
}

#[test]
fn unknown_statement_kind_is_fatal_and_named() {
  let err = from_json(r#"{"body": [{"$t": "Switch", "cases": []}]}"#).unwrap_err();
  match &err {
    TreeError::UnsupportedNode { kind, .. } => assert_eq!(kind, "Switch"),
    other => panic!("expected unsupported node, got {other:?}"),
  }
  assert!(err.to_string().contains("Switch"));
}

#[test]
fn unknown_expression_kind_is_fatal_and_named() {
  let err = from_json(
    r#"{"body": [{"$t": "Return", "values": [{"$t": "Ternary"}]}]}"#,
  )
  .unwrap_err();
  assert!(matches!(err, TreeError::UnsupportedNode { ref kind, .. } if kind == "Ternary"));
}

#[test]
fn unary_operator_in_binary_node_is_rejected() {
  let err = from_json(
    r#"{"body": [{"$t": "Return", "values": [{
      "$t": "Binary", "operator": "LogicalNot",
      "left": {"$t": "Id", "name": "a", "is_local": false},
      "right": {"$t": "Id", "name": "b", "is_local": false}
    }]}]}"#,
  )
  .unwrap_err();
  assert!(matches!(err, TreeError::UnsupportedNode { ref kind, .. } if kind == "LogicalNot"), "{err:?}");
}

#[test]
fn binary_operator_in_unary_node_is_rejected() {
  let err = from_json(
    r#"{"body": [{"$t": "Return", "values": [{
      "$t": "Unary", "operator": "Subtraction",
      "argument": {"$t": "Id", "name": "a", "is_local": false}
    }]}]}"#,
  )
  .unwrap_err();
  assert!(matches!(err, TreeError::UnsupportedNode { ref kind, .. } if kind == "Subtraction"), "{err:?}");
}

#[test]
fn matching_operator_arity_loads() {
  let chunk = from_json(
    r#"{"body": [{"$t": "Return", "values": [{
      "$t": "Unary", "operator": "UnaryNegation",
      "argument": {"$t": "Id", "name": "a", "is_local": false}
    }]}]}"#,
  )
  .unwrap();
  assert_eq!(chunk.body, vec![Stmt::ret(vec![Expr::unary(
    OperatorName::UnaryNegation,
    Expr::global("a"),
  )])]);
}

#[test]
fn function_statement_name_must_be_a_field_chain() {
  let err = from_json(
    r#"{"body": [{"$t": "FunctionDecl",
      "target": {"$t": "Call", "callee": {"$t": "Id", "name": "f", "is_local": false}, "arguments": []},
      "func": {"parameters": [], "body": []}}]}"#,
  )
  .unwrap_err();
  assert!(matches!(err, TreeError::Malformed(_)), "{err:?}");

  let chunk = from_json(
    r#"{"body": [{"$t": "FunctionDecl",
      "target": {"$t": "Member", "indexer": "Colon", "name": "m",
        "object": {"$t": "Member", "indexer": "Dot", "name": "b",
          "object": {"$t": "Id", "name": "a", "is_local": false}}},
      "func": {"parameters": [], "body": []}}]}"#,
  )
  .unwrap();
  assert_eq!(chunk.body.len(), 1);
}

#[test]
fn malformed_tree_is_reported() {
  let err = from_json(r#"{"body": [{"$t": "Local"}]}"#).unwrap_err();
  assert!(matches!(err, TreeError::Malformed(_)), "{err:?}");
  let err = from_json("not json").unwrap_err();
  assert!(matches!(err, TreeError::Malformed(_)), "{err:?}");
}

#[test]
fn serialisation_is_loadable() {
  let chunk = from_json(
    r#"{"body": [{"$t": "While", "condition": {"$t": "LitBool", "value": true}, "body": [{"$t": "Break"}]}]}"#,
  )
  .unwrap();
  let json = serde_json::to_string(&chunk).unwrap();
  assert_eq!(from_json(&json).unwrap(), chunk);
}
