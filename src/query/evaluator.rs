//! Tree-walking evaluation of a parsed query against a `Value`.
//!
//! Every step yields either one value or a set of independent branches
//! (from `*`). A chain continuing after a branching step is re-applied to
//! each branch separately, which is what makes `object.*.name` mean "the
//! name of every element" rather than "the name of the array".

use super::ast::{Expr, ExprList, KeyInt, KeyString, Query};
use super::error::EvalError;
use crate::document::value::Value;
use log::trace;

/// Result of one step, tagged with its multiplicity.
#[derive(Debug, Clone, PartialEq)]
enum Matched {
    /// Exactly one value (key or index access, grouping).
    Single(Value),
    /// Independent branches (wildcard access), in array order.
    Many(Vec<Value>),
}

impl Matched {
    fn into_value(self) -> Value {
        match self {
            Matched::Single(value) => value,
            Matched::Many(values) => Value::Array(values),
        }
    }
}

pub struct Evaluator<'a> {
    root: &'a Value,
}

impl<'a> Evaluator<'a> {
    pub fn new(root: &'a Value) -> Self {
        Evaluator { root }
    }

    /// Evaluates a query against the root value.
    ///
    /// The empty query selects the whole root.
    pub fn evaluate(&self, query: &Query) -> Result<Value, EvalError> {
        match &query.body {
            Some(body) => Ok(self.expr_list(body, self.root)?.into_value()),
            None => Ok(self.root.clone()),
        }
    }

    fn expr_list(&self, node: &ExprList, data: &Value) -> Result<Matched, EvalError> {
        trace!("expr_list {} on {}", node, data.type_name());
        match node {
            ExprList::Expr(expr) => self.expr(expr, data),
            ExprList::Group(members) => {
                // Members never fan the group out; a branching member lands
                // as a nested array in its own slot.
                let values = members
                    .iter()
                    .map(|member| -> Result<Value, EvalError> {
                        Ok(self.expr_list(member, data)?.into_value())
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Matched::Single(Value::Array(values)))
            }
            ExprList::Chain(chain) => {
                let first = self.expr(&chain.head, data)?;
                self.continue_chain(first, &chain.steps)
            }
        }
    }

    /// Applies the remaining chain steps to an intermediate result.
    ///
    /// Steps after a SINGLE value are applied in a loop; only a fan-out
    /// recurses, once per `*` in the chain.
    fn continue_chain(&self, matched: Matched, steps: &[ExprList]) -> Result<Matched, EvalError> {
        let mut matched = matched;
        for (i, step) in steps.iter().enumerate() {
            match matched {
                Matched::Single(value) => {
                    matched = self.expr_list(step, &value)?;
                }
                Matched::Many(branches) => {
                    trace!("fanning out {} over {} branches", step, branches.len());
                    let rest = &steps[i..];
                    let results = branches
                        .into_iter()
                        .map(|branch| -> Result<Value, EvalError> {
                            Ok(self
                                .continue_chain(Matched::Single(branch), rest)?
                                .into_value())
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    return Ok(Matched::Many(results));
                }
            }
        }
        Ok(matched)
    }

    fn expr(&self, expr: &Expr, data: &Value) -> Result<Matched, EvalError> {
        match expr {
            Expr::Key(key) => self.key_string(key, data),
            Expr::Index(key) => self.key_int(*key, data),
        }
    }

    fn key_string(&self, key: &KeyString, data: &Value) -> Result<Matched, EvalError> {
        let Value::Object(fields) = data else {
            return Err(EvalError::TypeLookup {
                segment: key.to_string(),
                expected: "object",
                found: data.type_name(),
            });
        };
        fields
            .get(key.name())
            .cloned()
            .map(Matched::Single)
            .ok_or_else(|| EvalError::KeyNotFound {
                key: key.name().to_string(),
            })
    }

    fn key_int(&self, key: KeyInt, data: &Value) -> Result<Matched, EvalError> {
        let Value::Array(items) = data else {
            return Err(EvalError::TypeLookup {
                segment: key.to_string(),
                expected: "array",
                found: data.type_name(),
            });
        };
        match key {
            KeyInt::Index(index) => items
                .get(index)
                .cloned()
                .map(Matched::Single)
                .ok_or(EvalError::IndexOutOfRange {
                    index,
                    len: items.len(),
                }),
            KeyInt::Wildcard => Ok(Matched::Many(items.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_json;
    use crate::query::parser::Parser;

    fn make_test_tree() -> Value {
        parse_json(
            r#"{
                "name": "test",
                "age": 42,
                "items": ["a", "b", "c"],
                "matrix": [[1, 2], [3, 4]],
                "people": [
                    {"name": "a", "tags": ["x", "y"]},
                    {"name": "b", "tags": ["z"]}
                ]
            }"#,
        )
        .unwrap()
    }

    fn eval(query: &str) -> Result<Value, EvalError> {
        let tree = make_test_tree();
        let query = Parser::parse(query).unwrap();
        Evaluator::new(&tree).evaluate(&query)
    }

    fn strings(items: &[&str]) -> Value {
        Value::Array(items.iter().map(|s| Value::from(*s)).collect())
    }

    #[test]
    fn test_evaluate_empty_query_is_identity() {
        assert_eq!(eval("").unwrap(), make_test_tree());
    }

    #[test]
    fn test_evaluate_child() {
        assert_eq!(eval("name").unwrap(), Value::from("test"));
    }

    #[test]
    fn test_evaluate_array_index() {
        assert_eq!(eval("items.1").unwrap(), Value::from("b"));
    }

    #[test]
    fn test_evaluate_wildcard_is_identity_on_arrays() {
        assert_eq!(eval("items.*").unwrap(), strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_evaluate_wildcard_fans_out_chain() {
        assert_eq!(eval("people.*.name").unwrap(), strings(&["a", "b"]));
    }

    #[test]
    fn test_evaluate_nested_wildcards_nest_results() {
        assert_eq!(
            eval("people.*.tags.*").unwrap(),
            Value::Array(vec![strings(&["x", "y"]), strings(&["z"])])
        );
        assert_eq!(
            eval("matrix.*.0").unwrap(),
            Value::Array(vec![Value::from(1), Value::from(3)])
        );
    }

    #[test]
    fn test_evaluate_group_per_branch() {
        assert_eq!(
            eval("people.*.{name,tags.0}").unwrap(),
            Value::Array(vec![strings(&["a", "x"]), strings(&["b", "z"])])
        );
    }

    #[test]
    fn test_evaluate_wildcard_inside_group_stays_in_slot() {
        assert_eq!(
            eval("{name,items.*}").unwrap(),
            Value::Array(vec![Value::from("test"), strings(&["a", "b", "c"])])
        );
    }

    #[test]
    fn test_evaluate_chain_after_group_applies_to_group_array() {
        assert_eq!(
            eval("matrix.{0,1}.1").unwrap(),
            Value::Array(vec![Value::from(3), Value::from(4)])
        );
    }

    #[test]
    fn test_evaluate_missing_key() {
        assert_eq!(
            eval("nonexistent").unwrap_err(),
            EvalError::KeyNotFound {
                key: "nonexistent".to_string()
            }
        );
    }

    #[test]
    fn test_evaluate_index_out_of_range() {
        assert_eq!(
            eval("items.3").unwrap_err(),
            EvalError::IndexOutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn test_evaluate_key_on_array_is_type_error() {
        assert_eq!(
            eval("items.name").unwrap_err(),
            EvalError::TypeLookup {
                segment: "name".to_string(),
                expected: "object",
                found: "array",
            }
        );
    }

    #[test]
    fn test_evaluate_wildcard_on_object_is_type_error() {
        assert!(matches!(
            eval("*").unwrap_err(),
            EvalError::TypeLookup {
                expected: "array",
                found: "object",
                ..
            }
        ));
    }

    #[test]
    fn test_evaluate_index_on_string_is_type_error() {
        assert_eq!(
            eval("name.0").unwrap_err(),
            EvalError::TypeLookup {
                segment: "0".to_string(),
                expected: "array",
                found: "string",
            }
        );
    }

    #[test]
    fn test_evaluate_very_long_chain() {
        let tree = parse_json(r#"{"a": 1}"#).unwrap();
        let query = Parser::parse(&vec!["a"; 100_000].join(".")).unwrap();
        assert_eq!(
            Evaluator::new(&tree).evaluate(&query).unwrap_err(),
            EvalError::TypeLookup {
                segment: "a".to_string(),
                expected: "object",
                found: "number",
            }
        );
    }

    #[test]
    fn test_evaluate_failure_in_one_branch_aborts() {
        assert!(matches!(
            eval("people.*.tags.1").unwrap_err(),
            EvalError::IndexOutOfRange { index: 1, len: 1 }
        ));
    }

    #[test]
    fn test_evaluate_failure_in_group_member_aborts() {
        assert!(matches!(
            eval("{name,missing}").unwrap_err(),
            EvalError::KeyNotFound { .. }
        ));
    }
}
