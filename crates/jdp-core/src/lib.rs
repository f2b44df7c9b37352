//! `jdp-core`: a `jsondiffpatch`-wire-compatible structural diff/patch
//! engine.
//!
//! The public surface is small and value-oriented: [`Value`] is the
//! seven-variant JSON model, [`diff`]/[`patch`] are the two core
//! operations, and [`equal`] is the recursive equality predicate they
//! both build on. A diff is itself a [`Value`] — there is no separate
//! "Diff" type — so it round-trips through `serde_json` without any
//! special-casing.
//!
//! # Examples
//!
//! ```
//! use jdp_core::{diff, patch, DiffOptions, Value};
//!
//! let original = Value::from_json_str(r#"{"count":1}"#).unwrap();
//! let target = Value::from_json_str(r#"{"count":2}"#).unwrap();
//! let opts = DiffOptions::default();
//!
//! let delta = diff(&original, &target, &opts).unwrap().expect("values differ");
//! let patched = patch(&original, &delta, &opts).unwrap();
//! assert_eq!(patched, target);
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod arena;
mod depth;
mod diff;
mod error;
mod number;
mod options;
mod patch;
mod stats;
mod value;
mod wire;

pub use arena::{bind, with_current, Arena, ArenaBinding};
pub use depth::{DepthGuard, DepthKind};
pub use error::{ArenaError, DiffError, OptionsError, PatchError};
pub use number::{Number, LOOSE_EPSILON};
pub use options::{
    DiffOptions, DEFAULT_ARENA_CAPACITY_BYTES, DEFAULT_MAX_INPUT_BYTES, DEFAULT_MAX_RECURSION_DEPTH,
};
pub use stats::DiffStats;
pub use value::{equal, Value};

/// Computes the structural diff between `left` and `right`.
///
/// Returns `Ok(None)` if the two values are equal under
/// `options.strict_equality()` — "no change" — rather than an empty
/// diff container.
///
/// If `options.arena_capacity_bytes()` is set, an [`Arena`] of that
/// capacity is bound to this thread for the duration of the call via
/// [`bind`], backing the algorithm's transient bookkeeping allocations
/// (Myers trace snapshots, scratch key vectors); it is unbound again on
/// return, regardless of outcome.
#[tracing::instrument(level = "trace", skip_all, fields(strict = options.strict_equality()))]
pub fn diff(left: &Value, right: &Value, options: &DiffOptions) -> Result<Option<Value>, DiffError> {
    let _arena_guard = options.arena_capacity_bytes().map(|cap| bind(Arena::init(cap)));
    let result = diff::diff_value(left, right, options);
    tracing::trace!(changed = matches!(result, Ok(Some(_))), "diff computed");
    result
}

/// Parses `left_text` and `right_text` as JSON and diffs the results
/// Rejects either input whose byte length exceeds
/// `options.max_input_bytes()` with [`DiffError::InputTooLarge`].
pub fn diff_from_text(
    left_text: &str,
    right_text: &str,
    options: &DiffOptions,
) -> Result<Option<Value>, DiffError> {
    let max = options.max_input_bytes();
    if left_text.len() > max {
        return Err(DiffError::InputTooLarge { limit: max, actual: left_text.len() });
    }
    if right_text.len() > max {
        return Err(DiffError::InputTooLarge { limit: max, actual: right_text.len() });
    }
    let left = Value::from_json_str(left_text)?;
    let right = Value::from_json_str(right_text)?;
    diff(&left, &right, options)
}

/// Applies `diff` to `original`, returning the patched value.
pub fn patch(original: &Value, diff: &Value, options: &DiffOptions) -> Result<Value, PatchError> {
    patch::patch(original, diff, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_too_large_is_rejected() {
        let opts = DiffOptions::default().with_max_input_bytes(4).unwrap();
        let err = diff_from_text("12345", "1", &opts).unwrap_err();
        assert!(matches!(err, DiffError::InputTooLarge { limit: 4, actual: 5 }));
    }

    #[test]
    fn parse_error_surfaces_from_diff_from_text() {
        let err = diff_from_text("{", "{}", &DiffOptions::default()).unwrap_err();
        assert!(matches!(err, DiffError::Parse(_)));
    }

    #[test]
    fn roundtrip_through_public_api() {
        let original = Value::from_json_str("[1,2,3]").unwrap();
        let target = Value::from_json_str("[1,2,4]").unwrap();
        let opts = DiffOptions::default();
        let delta = diff(&original, &target, &opts).unwrap().unwrap();
        let patched = patch(&original, &delta, &opts).unwrap();
        assert_eq!(patched, target);
    }

    #[test]
    fn self_diff_is_no_change() {
        let value = Value::from_json_str(r#"{"a":[1,2,{"b":true}]}"#).unwrap();
        assert!(diff(&value, &value, &DiffOptions::default()).unwrap().is_none());
    }
}
