use thiserror::Error;

/// Errors that can occur while computing a structural diff.
///
/// ```
/// # use jdp_core::{diff_from_text, DiffError, DiffOptions};
/// let err = diff_from_text("{", "{}", &DiffOptions::default()).unwrap_err();
/// assert!(matches!(err, DiffError::Parse(_)));
/// ```
#[derive(Debug, Error)]
pub enum DiffError {
    /// A text input passed to [`diff_from_text`](crate::diff_from_text) was not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A text input exceeded the configured maximum length.
    #[error("input of {actual} bytes exceeds the configured maximum of {limit} bytes")]
    InputTooLarge {
        /// The configured maximum, in bytes.
        limit: usize,
        /// The actual length of the offending input, in bytes.
        actual: usize,
    },
    /// Diff recursion exceeded the configured maximum depth.
    #[error("diff recursion exceeded the configured maximum depth of {max_depth}")]
    RecursionExceeded {
        /// The configured maximum recursion depth.
        max_depth: u32,
    },
    /// An arena-backed allocation failed.
    #[error("arena allocation failed: {0}")]
    OutOfMemory(#[from] ArenaError),
}

/// Errors that can occur while applying a diff to a [`Value`](crate::Value).
///
/// ```
/// # use jdp_core::{DiffOptions, Value};
/// let original = Value::from_json_str("[1,2,3]").unwrap();
/// let target = Value::from_json_str("[1,4,3]").unwrap();
/// let opts = DiffOptions::default();
/// let delta = jdp_core::diff(&original, &target, &opts).unwrap().unwrap();
/// let patched = jdp_core::patch(&original, &delta, &opts).unwrap();
/// assert_eq!(patched, target);
/// ```
#[derive(Debug, Error)]
pub enum PatchError {
    /// Patch recursion exceeded the configured maximum depth.
    #[error("patch recursion exceeded the configured maximum depth of {max_depth}")]
    RecursionExceeded {
        /// The configured maximum recursion depth.
        max_depth: u32,
    },
    /// A diff entry at `path` matched neither a recognised wire shape nor a
    /// nested diff object.
    #[error("invalid diff shape at {path}")]
    InvalidDiffShape {
        /// The path of the offending diff entry.
        path: String,
    },
    /// An array patch addressed an index that does not exist in the working
    /// array and cannot be appended.
    #[error("index {index} out of range at {path} (array has {len} elements)")]
    IndexOutOfRange {
        /// The path of the offending array.
        path: String,
        /// The out-of-range index.
        index: i64,
        /// The length of the working array at the time of the failure.
        len: usize,
    },
    /// An arena-backed allocation failed.
    #[error("arena allocation failed: {0}")]
    OutOfMemory(#[from] ArenaError),
}

/// Errors raised by the [`Arena`](crate::Arena) bump allocator.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArenaError {
    /// The requested allocation would exceed the arena's configured capacity.
    #[error("allocation of {requested} bytes would exceed the arena capacity of {cap} bytes")]
    CapacityExceeded {
        /// The number of bytes requested.
        requested: usize,
        /// The arena's configured maximum capacity, in bytes.
        cap: usize,
    },
    /// A size computation overflowed while aligning or growing the arena.
    #[error("arena size computation overflowed")]
    Overflow,
}

/// Errors raised when constructing an invalid [`DiffOptions`](crate::DiffOptions).
///
/// ```
/// # use jdp_core::{DiffOptions, OptionsError};
/// let err = DiffOptions::default().with_max_recursion_depth(0).unwrap_err();
/// assert_eq!(err, OptionsError::ZeroRecursionDepth);
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    /// `max_recursion_depth` must be at least 1.
    #[error("max_recursion_depth must be at least 1")]
    ZeroRecursionDepth,
    /// `max_input_bytes` must be at least 1.
    #[error("max_input_bytes must be at least 1")]
    ZeroInputLimit,
    /// `arena_capacity_bytes`, when set, must be at least 1.
    #[error("arena_capacity_bytes must be at least 1")]
    ZeroArenaCapacity,
}
