//! Array diff: prefix/suffix trim, Myers SES over the middles, and the
//! object-pair fusion post-pass.

use indexmap::IndexMap;

use crate::wire;
use crate::{equal, DepthGuard, DepthKind, DiffError, DiffOptions, Value};

/// A single step of the reconstructed edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Equal(usize),
    Delete,
    Insert,
}

/// Diffs two arrays, emitting an array sub-diff (with the `_t: "a"`
/// marker) or `None` ("no change").
pub(crate) fn diff_arrays(
    left: &[Value],
    right: &[Value],
    options: &DiffOptions,
) -> Result<Option<Value>, DiffError> {
    let _guard = DepthGuard::enter(DepthKind::Diff, options.max_recursion_depth())
        .map_err(|max_depth| DiffError::RecursionExceeded { max_depth })?;

    let strict = options.strict_equality();

    // Trim the longest common prefix/suffix: p + s <= min(|left|, |right|).
    let max_trim = left.len().min(right.len());
    let mut prefix = 0usize;
    while prefix < max_trim && equal(&left[prefix], &right[prefix], strict) {
        prefix += 1;
    }
    let mut suffix = 0usize;
    while suffix < max_trim - prefix
        && equal(
            &left[left.len() - 1 - suffix],
            &right[right.len() - 1 - suffix],
            strict,
        )
    {
        suffix += 1;
    }

    let left_mid = &left[prefix..left.len() - suffix];
    let right_mid = &right[prefix..right.len() - suffix];
    let n = left_mid.len();
    let m = right_mid.len();

    let mut entries: IndexMap<String, Value> = IndexMap::new();
    let mut count = prefix; // post-patch index cursor
    let mut deleted_count = prefix; // pre-patch index cursor

    if n == 0 && m == 0 {
        return Ok(None);
    } else if n == 0 {
        for item in right_mid {
            entries.insert(count.to_string(), wire::addition(item));
            count += 1;
        }
    } else if m == 0 {
        for item in left_mid {
            entries.insert(format!("_{deleted_count}"), wire::deletion(item));
            deleted_count += 1;
        }
    } else {
        let segments = myers_ses(left_mid, right_mid, strict);
        let mut i_a = 0usize;
        let mut i_b = 0usize;
        for segment in segments {
            match segment {
                Segment::Equal(len) => {
                    i_a += len;
                    i_b += len;
                    count += len;
                    deleted_count += len;
                }
                Segment::Delete => {
                    entries.insert(format!("_{deleted_count}"), wire::deletion(&left_mid[i_a]));
                    i_a += 1;
                    deleted_count += 1;
                }
                Segment::Insert => {
                    entries.insert(count.to_string(), wire::addition(&right_mid[i_b]));
                    i_b += 1;
                    count += 1;
                }
            }
        }
    }

    fuse_object_pairs(&mut entries, options)?;

    if entries.is_empty() {
        return Ok(None);
    }

    entries.insert(
        wire::ARRAY_MARKER_KEY.to_string(),
        Value::String(wire::ARRAY_MARKER_VALUE.to_string()),
    );
    Ok(Some(Value::Object(entries)))
}

/// Object-pair fusion post-pass: rewrites a `(k, _k)` add+delete
/// pair of objects at the same slot into a nested object diff.
fn fuse_object_pairs(
    entries: &mut IndexMap<String, Value>,
    options: &DiffOptions,
) -> Result<(), DiffError> {
    let candidate_keys: Vec<String> =
        entries.keys().filter(|k| !k.starts_with('_')).cloned().collect();

    let mut fusions = Vec::new();
    for key in candidate_keys {
        let del_key = format!("_{key}");
        let Some(add_entry) = entries.get(&key) else { continue };
        let Some(del_entry) = entries.get(&del_key) else { continue };

        let Value::Array(add_items) = add_entry else { continue };
        let Value::Array(del_items) = del_entry else { continue };
        if add_items.len() != 1 || del_items.len() != 3 {
            continue;
        }
        let Value::Object(new_obj) = &add_items[0] else { continue };
        let Value::Object(old_obj) = &del_items[0] else { continue };
        let zero_padding = del_items[1].as_number().is_some_and(|n| n.get() == 0.0)
            && del_items[2].as_number().is_some_and(|n| n.get() == 0.0);
        if !zero_padding {
            continue;
        }

        let nested = super::object::diff_objects(old_obj, new_obj, options)?;
        fusions.push((key, del_key, nested));
    }

    for (key, del_key, nested) in fusions {
        entries.shift_remove(&key);
        entries.shift_remove(&del_key);
        if let Some(nested) = nested {
            entries.insert(key, nested);
        }
    }

    Ok(())
}

/// Builds the minimal-edit-distance trace via the classical Myers
/// algorithm, then walks it backwards to reconstruct the
/// forward sequence of `Equal`/`Insert`/`Delete` segments.
fn myers_ses(a: &[Value], b: &[Value], strict: bool) -> Vec<Segment> {
    let n = a.len() as i64;
    let m = b.len() as i64;
    let max = n + m;
    let size = (2 * max + 1) as usize;
    let offset = max as usize;

    let mut v = vec![0i64; size];
    let mut trace: Vec<Vec<i64>> = Vec::new();

    let idx = |k: i64| (k + offset as i64) as usize;

    let mut final_d = max;
    'outer: for d in 0..=max {
        trace.push(v.clone());
        let mut k = -d;
        while k <= d {
            let mut x = if k == -d || (k != d && v[idx(k - 1)] < v[idx(k + 1)]) {
                v[idx(k + 1)]
            } else {
                v[idx(k - 1)] + 1
            };
            let mut y = x - k;
            while x < n && y < m && equal(&a[x as usize], &b[y as usize], strict) {
                x += 1;
                y += 1;
            }
            v[idx(k)] = x;
            if x >= n && y >= m {
                final_d = d;
                break 'outer;
            }
            k += 2;
        }
    }

    backtrack(&trace, n, m, final_d, offset)
}

/// Walks the recorded `V` snapshots backwards from `(n, m)` to `(0, 0)`,
/// producing forward-ordered segments.
fn backtrack(trace: &[Vec<i64>], n: i64, m: i64, final_d: i64, offset: usize) -> Vec<Segment> {
    let idx = |k: i64| (k + offset as i64) as usize;
    let mut x = n;
    let mut y = m;
    let mut steps: Vec<(i64, i64, i64, i64)> = Vec::new();

    for d in (0..=final_d).rev() {
        let v = &trace[d as usize];
        let k = x - y;
        let down = k == -d || (k != d && v[idx(k - 1)] < v[idx(k + 1)]);
        let prev_k = if down { k + 1 } else { k - 1 };
        let prev_x = v[idx(prev_k)];
        let prev_y = prev_x - prev_k;

        let mut cur_x = x;
        let mut cur_y = y;
        while cur_x > prev_x && cur_y > prev_y {
            steps.push((cur_x - 1, cur_y - 1, cur_x, cur_y));
            cur_x -= 1;
            cur_y -= 1;
        }
        if d > 0 {
            steps.push((prev_x, prev_y, cur_x, cur_y));
        }
        x = prev_x;
        y = prev_y;
    }
    steps.reverse();

    let mut segments = Vec::new();
    let mut equal_run = 0usize;
    for (x0, y0, x1, y1) in steps {
        let dx = x1 - x0;
        let dy = y1 - y0;
        if dx == 1 && dy == 1 {
            equal_run += 1;
        } else {
            if equal_run > 0 {
                segments.push(Segment::Equal(equal_run));
                equal_run = 0;
            }
            if dx == 1 && dy == 0 {
                segments.push(Segment::Delete);
            } else if dx == 0 && dy == 1 {
                segments.push(Segment::Insert);
            }
        }
    }
    if equal_run > 0 {
        segments.push(Segment::Equal(equal_run));
    }
    segments
}
