use crate::OptionsError;

/// Default maximum recursion depth for both diff and patch.
pub const DEFAULT_MAX_RECURSION_DEPTH: u32 = 1024;

/// Default maximum text input length (bytes) accepted by
/// [`diff_from_text`](crate::diff_from_text).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Default maximum arena capacity (bytes).
pub const DEFAULT_ARENA_CAPACITY_BYTES: usize = 16 * 1024 * 1024;

/// Configuration knobs passed to diff and patch operations.
///
/// ```
/// # use jdp_core::DiffOptions;
/// let opts = DiffOptions::default().with_strict_equality(false);
/// assert!(!opts.strict_equality());
/// ```
#[derive(Clone, Debug)]
pub struct DiffOptions {
    strict_equality: bool,
    max_recursion_depth: u32,
    max_input_bytes: usize,
    arena_capacity_bytes: Option<usize>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            strict_equality: true,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            arena_capacity_bytes: None,
        }
    }
}

impl DiffOptions {
    /// Returns whether numeric equality is bitwise-strict.
    #[must_use]
    pub fn strict_equality(&self) -> bool {
        self.strict_equality
    }

    /// Returns the configured maximum recursion depth.
    #[must_use]
    pub fn max_recursion_depth(&self) -> u32 {
        self.max_recursion_depth
    }

    /// Returns the configured maximum text input length, in bytes.
    #[must_use]
    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    /// Returns the arena capacity to bind for the duration of a call, if
    /// arena-backed diffing has been requested.
    #[must_use]
    pub fn arena_capacity_bytes(&self) -> Option<usize> {
        self.arena_capacity_bytes
    }

    /// Sets whether numeric equality is bitwise-strict (`true`, the
    /// default) or tolerant to within `1e-9` (`false`).
    ///
    /// ```
    /// # use jdp_core::DiffOptions;
    /// let opts = DiffOptions::default().with_strict_equality(false);
    /// assert!(!opts.strict_equality());
    /// ```
    #[must_use]
    pub fn with_strict_equality(mut self, strict: bool) -> Self {
        self.strict_equality = strict;
        self
    }

    /// Sets the maximum recursion depth for diff and patch.
    ///
    /// ```
    /// # use jdp_core::{DiffOptions, OptionsError};
    /// let err = DiffOptions::default().with_max_recursion_depth(0).unwrap_err();
    /// assert_eq!(err, OptionsError::ZeroRecursionDepth);
    /// ```
    pub fn with_max_recursion_depth(mut self, max_depth: u32) -> Result<Self, OptionsError> {
        if max_depth == 0 {
            return Err(OptionsError::ZeroRecursionDepth);
        }
        self.max_recursion_depth = max_depth;
        Ok(self)
    }

    /// Sets the maximum text input length, in bytes, accepted by
    /// `diff_from_text`.
    pub fn with_max_input_bytes(mut self, max_bytes: usize) -> Result<Self, OptionsError> {
        if max_bytes == 0 {
            return Err(OptionsError::ZeroInputLimit);
        }
        self.max_input_bytes = max_bytes;
        Ok(self)
    }

    /// Requests that the call bind an arena of the given capacity (bytes)
    /// for the duration of diff computation's transient bookkeeping.
    pub fn with_arena_capacity_bytes(mut self, cap: usize) -> Result<Self, OptionsError> {
        if cap == 0 {
            return Err(OptionsError::ZeroArenaCapacity);
        }
        self.arena_capacity_bytes = Some(cap);
        Ok(self)
    }
}
