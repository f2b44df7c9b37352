//! Object diff.

use indexmap::IndexMap;

use crate::diff::diff_value;
use crate::wire;
use crate::{DepthGuard, DepthKind, DiffError, DiffOptions, Value};

/// Diffs two objects, emitting an object sub-diff or `None` ("no
/// change").
///
/// Key order in the result follows left-object order for surviving keys,
/// with added keys appended in right-object order.
pub(crate) fn diff_objects(
    left: &IndexMap<String, Value>,
    right: &IndexMap<String, Value>,
    options: &DiffOptions,
) -> Result<Option<Value>, DiffError> {
    let _guard = DepthGuard::enter(DepthKind::Diff, options.max_recursion_depth())
        .map_err(|max_depth| DiffError::RecursionExceeded { max_depth })?;

    let mut entries: IndexMap<String, Value> = IndexMap::new();

    for (key, left_value) in left {
        match right.get(key) {
            Some(right_value) => {
                if let Some(sub_diff) = diff_value(left_value, right_value, options)? {
                    entries.insert(key.clone(), sub_diff);
                }
            }
            None => {
                entries.insert(key.clone(), wire::deletion(left_value));
            }
        }
    }

    for (key, right_value) in right {
        if !left.contains_key(key) {
            entries.insert(key.clone(), wire::addition(right_value));
        }
    }

    if entries.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Value::Object(entries)))
    }
}
