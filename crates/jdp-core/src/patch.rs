//! The patch applier.
//!
//! Malformed or unrecognised diff entries (non-numeric keys, negative
//! indices, shapes matching no rule) are tolerated and silently skipped
//! per a deliberate policy — this is not a catch-all, it is the
//! documented behaviour locked in by the boundary scenarios in `tests/`.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::wire::{self, WireShape};
use crate::{equal, DepthGuard, DepthKind, DiffOptions, PatchError, Value};

/// Applies `diff` to `original`, returning the patched value.
///
/// ```
/// # use jdp_core::{diff, patch, DiffOptions};
/// let original = jdp_core::Value::from_json_str("[1,2,3]").unwrap();
/// let target = jdp_core::Value::from_json_str("[1,4,3]").unwrap();
/// let opts = DiffOptions::default();
/// let delta = diff(&original, &target, &opts).unwrap().unwrap();
/// let patched = patch(&original, &delta, &opts).unwrap();
/// assert_eq!(patched, target);
/// ```
pub fn patch(original: &Value, diff: &Value, options: &DiffOptions) -> Result<Value, PatchError> {
    patch_value(original, diff, options)
}

/// Dispatch by wire shape.
fn patch_value(original: &Value, diff: &Value, options: &DiffOptions) -> Result<Value, PatchError> {
    let _guard = DepthGuard::enter(DepthKind::Patch, options.max_recursion_depth())
        .map_err(|max_depth| PatchError::RecursionExceeded { max_depth })?;

    match diff {
        // Change triple at the value position: replace with the new side.
        Value::Array(items) if items.len() == 2 => Ok(items[1].clone()),
        Value::Object(entries) => {
            if wire::is_array_diff(diff) {
                match original {
                    Value::Array(items) => patch_array(items, entries, options),
                    _ => Ok(original.clone()),
                }
            } else {
                let empty = IndexMap::new();
                let original_map = original.as_object().unwrap_or(&empty);
                patch_object(original_map, entries, options)
            }
        }
        // Anything else (addition/deletion/move singles, primitives) does
        // not apply at a value position on its own: the diff does not
        // apply here.
        _ => Ok(original.clone()),
    }
}

/// Object patch.
fn patch_object(
    original: &IndexMap<String, Value>,
    diff: &IndexMap<String, Value>,
    options: &DiffOptions,
) -> Result<Value, PatchError> {
    let mut result = original.clone();

    for (key, entry) in diff {
        match entry {
            Value::Array(items) if items.len() == 1 => {
                result.insert(key.clone(), items[0].clone());
            }
            Value::Array(items) if items.len() == 3 => {
                result.shift_remove(key);
            }
            Value::Array(items) if items.len() == 2 => {
                result.insert(key.clone(), items[1].clone());
            }
            _ => {
                if let Some(original_child) = original.get(key) {
                    let patched_child = patch_value(original_child, entry, options)?;
                    result.insert(key.clone(), patched_child);
                }
                // No corresponding key in the original to recurse into:
                // a malformed entry, tolerated by the skip policy above.
            }
        }
    }

    Ok(Value::Object(result))
}

/// Array patch.
fn patch_array(
    original: &[Value],
    diff: &IndexMap<String, Value>,
    options: &DiffOptions,
) -> Result<Value, PatchError> {
    let mut working: Vec<Value> = original.to_vec();

    let mut move_ops: Vec<(usize, i64)> = Vec::new();
    let mut delete_indices: Vec<usize> = Vec::new();
    let mut replace_index_set: HashSet<usize> = HashSet::new();

    for (key, entry) in diff {
        if key == wire::ARRAY_MARKER_KEY {
            continue;
        }
        if let Some(stripped) = key.strip_prefix('_') {
            let Some(idx) = parse_index(stripped) else { continue };
            match wire::classify(entry) {
                WireShape::Move { dest } => move_ops.push((idx, dest)),
                WireShape::Deletion { .. } => delete_indices.push(idx),
                _ => {}
            }
        } else if let Some(idx) = parse_index(key) {
            if let WireShape::Addition { .. } = wire::classify(entry) {
                replace_index_set.insert(idx);
            }
        }
    }

    let move_srcs: HashSet<usize> = move_ops.iter().map(|(src, _)| *src).collect();
    let mut delete_indices: Vec<usize> = delete_indices
        .into_iter()
        .filter(|idx| !replace_index_set.contains(idx) && !move_srcs.contains(idx))
        .collect();

    // Pass 2: deletions, descending pre-patch index.
    delete_indices.sort_unstable_by(|a, b| b.cmp(a));
    for idx in delete_indices {
        if idx < working.len() {
            working.remove(idx);
        }
    }

    // Pass 3: moves, ascending destination.
    let mut sorted_moves = move_ops;
    sorted_moves.sort_by_key(|(_, dest)| *dest);
    for (src, dest) in sorted_moves {
        let Some(src_value) = original.get(src) else { continue };
        if let Some(pos) = working.iter().position(|v| equal(v, src_value, true)) {
            let item = working.remove(pos);
            let dest_idx = if dest < 0 { 0 } else { (dest as usize).min(working.len()) };
            working.insert(dest_idx, item);
        }
    }

    // Pass 4: additions / replacements / nested recursion, ascending
    // post-patch index.
    let mut numeric_entries: Vec<(usize, &Value)> = diff
        .iter()
        .filter(|(key, _)| *key != wire::ARRAY_MARKER_KEY && !key.starts_with('_'))
        .filter_map(|(key, entry)| parse_index(key).map(|idx| (idx, entry)))
        .collect();
    numeric_entries.sort_by_key(|(idx, _)| *idx);

    for (idx, entry) in numeric_entries {
        match wire::classify(entry) {
            WireShape::Addition { new } => {
                if idx < working.len() {
                    working[idx] = new.clone();
                } else if idx == working.len() {
                    working.push(new.clone());
                }
                // idx > working.len(): drop the write.
            }
            WireShape::Change { new, .. } => {
                if idx < working.len() {
                    working[idx] = new.clone();
                }
                // out of range: drop the write.
            }
            _ => {
                if idx < working.len() {
                    let patched = patch_value(&working[idx], entry, options)?;
                    working[idx] = patched;
                } else {
                    return Err(PatchError::IndexOutOfRange {
                        path: idx.to_string(),
                        index: idx as i64,
                        len: working.len(),
                    });
                }
            }
        }
    }

    Ok(Value::Array(working))
}

/// Parses a non-negative decimal array index, per the tolerant-skip
/// policy for malformed keys (non-numeric, negative, or absurdly large).
fn parse_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<usize>().ok()
}
