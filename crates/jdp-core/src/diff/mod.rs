//! The diff engine: equality-gated recursive dispatch over
//! [`Value`](crate::Value) into the object diff and array diff
//! sub-engines.

mod list;
mod object;

use crate::{equal, DiffError, DiffOptions, Value};

/// Computes the structural diff between `left` and `right`.
///
/// Returns `Ok(None)` for "no change": if `left` and
/// `right` are already equal under `options.strict_equality()`, or an
/// array/object sub-diff collapses to empty, the whole operation reports
/// no change rather than an empty container.
pub fn diff_value(
    left: &Value,
    right: &Value,
    options: &DiffOptions,
) -> Result<Option<Value>, DiffError> {
    if equal(left, right, options.strict_equality()) {
        return Ok(None);
    }

    match (left, right) {
        (Value::Object(l), Value::Object(r)) => object::diff_objects(l, r, options),
        (Value::Array(l), Value::Array(r)) => list::diff_arrays(l, r, options),
        _ => Ok(Some(crate::wire::change(left, right))),
    }
}
