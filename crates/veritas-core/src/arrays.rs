//! Sequence equality and array helpers.
//!
//! Equality here is always *value* equality: nested containers are compared
//! element by element, never by identity. An element type whose `PartialEq`
//! compares identity (for example via `Rc::ptr_eq`) will therefore report two
//! separately constructed but structurally identical values as unequal. That
//! is the documented contract of the element type, not a defect of these
//! functions.

use serde_json::Value;

/// Check whether two sequences are element-wise equal.
///
/// Returns true iff both slices have the same length and every pair of
/// elements at the same index compares equal under `T`'s `PartialEq`.
/// Two empty slices are equal. Deterministic, no side effects.
///
/// Nested containers recurse naturally: `Vec<T>: PartialEq` is itself
/// element-wise, so `is_equal(&[vec![1, 2]], &[vec![1, 2]])` holds.
pub fn is_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    // Comparing lengths first short-circuits the common mismatch case.
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

/// Check whether two dynamic JSON values are structurally equal.
///
/// Arrays are compared element-wise, objects key-wise, and numbers by
/// numeric value, so `1` and `1.0` are equal here even though
/// `serde_json::Value`'s own `PartialEq` distinguishes them. Everything
/// else falls back to `Value` equality.
pub fn is_equal_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len()
                && xs.iter().zip(ys.iter()).all(|(x, y)| is_equal_value(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs.iter().all(|(key, x)| {
                    ys.get(key).is_some_and(|y| is_equal_value(x, y))
                })
        }
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// Return a copy of `values` without any occurrence of `element`.
///
/// The input slice is left untouched. Matching uses the element type's
/// value equality, so removing `vec![1, 2]` from a slice of vectors removes
/// every structurally equal inner vector.
pub fn remove_element<T: PartialEq + Clone>(values: &[T], element: &T) -> Vec<T> {
    values.iter().filter(|v| *v != element).cloned().collect()
}
