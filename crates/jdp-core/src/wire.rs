//! The `jsondiffpatch` diff wire format.
//!
//! A diff node is itself a [`Value`]; these helpers construct and
//! classify the handful of shapes the format defines. Construction
//! always deep-clones its operands into the returned tree — see the
//! clone-policy decision recorded in `DESIGN.md` — so that a diff output
//! never aliases its inputs.

use crate::Value;

/// Literal key marking an array sub-diff.
pub const ARRAY_MARKER_KEY: &str = "_t";
/// Literal value bound to [`ARRAY_MARKER_KEY`] on an array sub-diff.
pub const ARRAY_MARKER_VALUE: &str = "a";

/// Builds a **change triple**: `[old, new]`, meaning "replace with `new`".
#[must_use]
pub fn change(old: &Value, new: &Value) -> Value {
    Value::Array(vec![old.clone(), new.clone()])
}

/// Builds an **addition single**: `[new]`, meaning "insert `new` here".
#[must_use]
pub fn addition(new: &Value) -> Value {
    Value::Array(vec![new.clone()])
}

/// Builds a **deletion triple**: `[old, 0, 0]`, meaning "remove this".
#[must_use]
pub fn deletion(old: &Value) -> Value {
    Value::Array(vec![old.clone(), Value::zero(), Value::zero()])
}

/// Builds the **move operation** extension used only as patch input:
/// `["", dest, 3]`, meaning "move the element currently here to `dest`".
#[must_use]
pub fn move_op(dest: i64) -> Value {
    Value::Array(vec![
        Value::String(String::new()),
        Value::Number(crate::Number::new(dest as f64)),
        Value::Number(crate::Number::new(3.0)),
    ])
}

/// The decoded shape of a diff entry at a value position, as interpreted
/// by the patch applier.
#[derive(Debug)]
pub enum WireShape<'a> {
    /// `[old, new]`.
    Change {
        /// The value before the change.
        old: &'a Value,
        /// The value after the change.
        new: &'a Value,
    },
    /// `[new]`.
    Addition {
        /// The inserted value.
        new: &'a Value,
    },
    /// `[old, 0, 0]`.
    Deletion {
        /// The removed value.
        old: &'a Value,
    },
    /// `["", dest, 3]` — patch input only.
    Move {
        /// The destination index.
        dest: i64,
    },
    /// Anything else: a nested diff (object, or array sub-diff marked
    /// with `_t`), or a malformed shape the caller should tolerate.
    Nested(&'a Value),
}

/// Classifies a diff entry by array arity as a tagged-variant match,
/// rather than a cascade of length tests.
#[must_use]
pub fn classify(entry: &Value) -> WireShape<'_> {
    let Value::Array(items) = entry else {
        return WireShape::Nested(entry);
    };
    match items.as_slice() {
        [new] => WireShape::Addition { new },
        [old, new] => WireShape::Change { old, new },
        [old, second, third] => {
            let second_is_zero = second.as_number().is_some_and(|n| n.get() == 0.0);
            let third_is_zero = third.as_number().is_some_and(|n| n.get() == 0.0);
            if second_is_zero && third_is_zero {
                WireShape::Deletion { old }
            } else if third.as_number().is_some_and(|n| n.get() == 3.0) {
                #[allow(clippy::cast_possible_truncation)]
                let dest = second.as_number().map_or(0, |n| n.get() as i64);
                WireShape::Move { dest }
            } else {
                WireShape::Nested(entry)
            }
        }
        _ => WireShape::Nested(entry),
    }
}

/// Returns `true` if `value` is an array sub-diff object: an object
/// containing `_t: "a"`.
#[must_use]
pub fn is_array_diff(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|obj| obj.get(ARRAY_MARKER_KEY))
        .and_then(Value::as_str)
        .is_some_and(|tag| tag == ARRAY_MARKER_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    #[test]
    fn classifies_change_addition_deletion() {
        let old = Value::Number(Number::new(1.0));
        let new = Value::Number(Number::new(2.0));
        assert!(matches!(classify(&change(&old, &new)), WireShape::Change { .. }));
        assert!(matches!(classify(&addition(&new)), WireShape::Addition { .. }));
        assert!(matches!(classify(&deletion(&old)), WireShape::Deletion { .. }));
    }

    #[test]
    fn classifies_move_operation() {
        let entry = move_op(2);
        assert!(matches!(classify(&entry), WireShape::Move { dest: 2 }));
    }

    #[test]
    fn non_array_is_nested() {
        let entry = Value::from_json_str(r#"{"x":[1,2]}"#).unwrap();
        assert!(matches!(classify(&entry), WireShape::Nested(_)));
    }

    #[test]
    fn array_marker_detection() {
        let marked = Value::from_json_str(r#"{"_t":"a","0":[1]}"#).unwrap();
        assert!(is_array_diff(&marked));
        let unmarked = Value::from_json_str(r#"{"0":[1]}"#).unwrap();
        assert!(!is_array_diff(&unmarked));
    }
}
