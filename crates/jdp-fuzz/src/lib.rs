//! Fuzzing harnesses for the `jsondiffpatch`-wire-compatible diff/patch
//! engine: every operation must terminate without panicking on
//! arbitrary input, including malformed diffs fed straight to
//! [`jdp_core::patch`].
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use arbitrary::{Arbitrary, Unstructured};
use jdp_core::{DiffOptions, Value};

const MAX_DEPTH: u32 = 5;
const MAX_CHILDREN: usize = 6;

/// Builds an arbitrary [`Value`] from fuzzer-supplied bytes, bounding
/// container depth and fan-out so inputs stay small enough to be useful.
pub fn arbitrary_value(u: &mut Unstructured<'_>) -> arbitrary::Result<Value> {
    build_value(u, 0)
}

fn build_value(u: &mut Unstructured<'_>, depth: u32) -> arbitrary::Result<Value> {
    let leaf_only = depth >= MAX_DEPTH;
    let tag: u8 = u.int_in_range(0..=if leaf_only { 3 } else { 5 })?;
    match tag {
        0 => Ok(Value::Null),
        1 => Ok(Value::Bool(bool::arbitrary(u)?)),
        2 => Ok(Value::Number(jdp_core::Number::new(f64_finite_or_special(u)?))),
        3 => Ok(Value::String(String::arbitrary(u)?)),
        4 => {
            let len = u.int_in_range(0..=MAX_CHILDREN)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(build_value(u, depth + 1)?);
            }
            Ok(Value::Array(items))
        }
        _ => {
            let len = u.int_in_range(0..=MAX_CHILDREN)?;
            let mut object = indexmap::IndexMap::with_capacity(len);
            for _ in 0..len {
                let key = String::arbitrary(u)?;
                object.insert(key, build_value(u, depth + 1)?);
            }
            Ok(Value::Object(object))
        }
    }
}

fn f64_finite_or_special(u: &mut Unstructured<'_>) -> arbitrary::Result<f64> {
    let tag: u8 = u.int_in_range(0..=4)?;
    Ok(match tag {
        0 => f64::NAN,
        1 => f64::INFINITY,
        2 => f64::NEG_INFINITY,
        3 => 0.0,
        _ => f64::arbitrary(u)?,
    })
}

/// Fuzz target body for `diff`: builds two arbitrary values and diffs
/// them under both strict and loose equality, asserting only that the
/// call completes without panicking.
pub fn fuzz_diff(data: &[u8]) {
    let mut u = Unstructured::new(data);
    let Ok(left) = arbitrary_value(&mut u) else { return };
    let Ok(right) = arbitrary_value(&mut u) else { return };
    let Ok(loose) = bool::arbitrary(&mut u) else { return };

    let options = DiffOptions::default().with_strict_equality(!loose);
    let _ = jdp_core::diff(&left, &right, &options);
}

/// Fuzz target body for `patch`. Exercises two shapes: a realistic diff
/// produced by the engine itself (must always apply cleanly), and an
/// arbitrary value reinterpreted as a raw diff tree (exercises the
/// tolerant-skip policy against malformed/unrecognised shapes).
pub fn fuzz_patch(data: &[u8]) {
    let mut u = Unstructured::new(data);
    let Ok(original) = arbitrary_value(&mut u) else { return };
    let Ok(target) = arbitrary_value(&mut u) else { return };
    let options = DiffOptions::default();

    if let Ok(Some(delta)) = jdp_core::diff(&original, &target, &options) {
        let _ = jdp_core::patch(&original, &delta, &options);
    }

    if let Ok(raw_diff) = arbitrary_value(&mut u) {
        let _ = jdp_core::patch(&original, &raw_diff, &options);
    }
}

/// Fuzz target body for `diff_from_text`: feeds raw byte strings through
/// the text entry point, which must reject invalid JSON and oversized
/// input without panicking.
pub fn fuzz_diff_from_text(data: &[u8]) {
    let mut u = Unstructured::new(data);
    let Ok(left_text) = String::arbitrary(&mut u) else { return };
    let Ok(right_text) = String::arbitrary(&mut u) else { return };

    let options = DiffOptions::default();
    let _ = jdp_core::diff_from_text(&left_text, &right_text, &options);
}
