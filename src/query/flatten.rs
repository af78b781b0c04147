//! Flattening of evaluation results into display rows.

use crate::document::value::Value;

/// One output row: scalars (or opaque objects) in left-to-right order.
pub type Row = Vec<Value>;

/// Turns an evaluation result into rows.
///
/// A top-level array yields one row per element, each element flattened
/// depth-first. Anything else is a single one-cell row. Objects are kept
/// whole as opaque cells.
///
/// ```
/// use jsonexplorer::document::value::Value;
/// use jsonexplorer::query::flatten_results;
///
/// let result = Value::Array(vec![
///     Value::Array(vec![Value::from("a"), Value::from("alast")]),
///     Value::Array(vec![Value::from("b"), Value::from("blast")]),
/// ]);
/// let rows = flatten_results(&result);
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1], vec![Value::from("b"), Value::from("blast")]);
/// ```
pub fn flatten_results(result: &Value) -> Vec<Row> {
    match result {
        Value::Array(items) => items.iter().map(flatten).collect(),
        other => vec![vec![other.clone()]],
    }
}

/// Collapses all array nesting of `value` into one flat sequence.
pub fn flatten(value: &Value) -> Row {
    let mut row = Vec::new();
    flatten_into(value, &mut row);
    row
}

fn flatten_into(value: &Value, row: &mut Row) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_into(item, row);
            }
        }
        other => row.push(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_flatten_scalar_result() {
        assert_eq!(
            flatten_results(&Value::from("res_object")),
            vec![vec![Value::from("res_object")]]
        );
    }

    #[test]
    fn test_flatten_flat_array_one_row_per_element() {
        let result = Value::Array(vec![Value::from("a"), Value::from("b")]);
        assert_eq!(
            flatten_results(&result),
            vec![vec![Value::from("a")], vec![Value::from("b")]]
        );
    }

    #[test]
    fn test_flatten_deep_nesting() {
        let result = Value::Array(vec![Value::Array(vec![
            Value::from(1),
            Value::Array(vec![Value::Array(vec![Value::from(2)]), Value::from(3)]),
        ])]);
        assert_eq!(
            flatten_results(&result),
            vec![vec![Value::from(1), Value::from(2), Value::from(3)]]
        );
    }

    #[test]
    fn test_flatten_empty_array_has_no_rows() {
        assert!(flatten_results(&Value::Array(vec![])).is_empty());
    }

    #[test]
    fn test_flatten_empty_nested_array_gives_empty_row() {
        let result = Value::Array(vec![Value::Array(vec![])]);
        assert_eq!(flatten_results(&result), vec![Vec::<Value>::new()]);
    }

    #[test]
    fn test_flatten_keeps_objects_opaque() {
        let mut fields = IndexMap::new();
        fields.insert("k".to_string(), Value::Array(vec![Value::from(1)]));
        let object = Value::Object(fields);
        let result = Value::Array(vec![Value::Array(vec![object.clone(), Value::Null])]);
        assert_eq!(flatten_results(&result), vec![vec![object, Value::Null]]);
    }
}
