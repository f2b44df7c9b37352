//! Thread-local recursion depth counters for diff and patch, fail-closed
//! at a configurable bound.

use std::cell::Cell;

thread_local! {
    static DIFF_DEPTH: Cell<u32> = const { Cell::new(0) };
    static PATCH_DEPTH: Cell<u32> = const { Cell::new(0) };
}

/// Which recursive operation a [`DepthGuard`] is tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthKind {
    /// Diff recursion (object/array sub-diffing).
    Diff,
    /// Patch recursion (object/array sub-patching).
    Patch,
}

/// RAII guard incrementing the thread-local depth counter for `kind` on
/// construction and decrementing it on drop. Construction fails once the
/// counter would exceed `max_depth`.
pub struct DepthGuard {
    kind: DepthKind,
}

impl DepthGuard {
    fn cell(kind: DepthKind) -> &'static std::thread::LocalKey<Cell<u32>> {
        match kind {
            DepthKind::Diff => &DIFF_DEPTH,
            DepthKind::Patch => &PATCH_DEPTH,
        }
    }

    /// Enters one level of recursion for `kind`, failing if doing so
    /// would exceed `max_depth`.
    pub fn enter(kind: DepthKind, max_depth: u32) -> Result<Self, u32> {
        let exceeded = Self::cell(kind).with(|depth| {
            let next = depth.get() + 1;
            if next > max_depth {
                true
            } else {
                depth.set(next);
                false
            }
        });
        if exceeded {
            Err(max_depth)
        } else {
            Ok(Self { kind })
        }
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        Self::cell(self.kind).with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}
