//! Bump-pointer arena used to back the transient bookkeeping allocations
//! (Myers trace snapshots, scratch key vectors) made while computing a
//! diff. Diff and patch output trees are always ordinary heap-owned
//! [`Value`](crate::Value)s, independent of any arena's lifetime — see
//! the clone-policy decision in `DESIGN.md`.

use std::cell::RefCell;

use crate::error::ArenaError;

/// Bump-pointer allocator with doubling growth, capped at a configurable
/// maximum.
///
/// ```
/// # use jdp_core::Arena;
/// let mut arena = Arena::init(64);
/// let value = arena.alloc(41i32 + 1);
/// assert_eq!(*value, 42);
/// arena.reset();
/// ```
pub struct Arena {
    bump: bumpalo::Bump,
    cap: usize,
}

impl Arena {
    /// Creates an arena with the given initial capacity (bytes) and the
    /// default maximum capacity (16 MiB).
    #[must_use]
    pub fn init(initial_capacity: usize) -> Self {
        Self::with_cap(initial_capacity, crate::options::DEFAULT_ARENA_CAPACITY_BYTES)
    }

    /// Creates an arena with the given initial capacity and an explicit
    /// maximum capacity, both in bytes.
    #[must_use]
    pub fn with_cap(initial_capacity: usize, cap: usize) -> Self {
        Self { bump: bumpalo::Bump::with_capacity(initial_capacity.min(cap)), cap }
    }

    /// Allocates `value` in the arena, growing the backing buffer
    /// (doubling) if needed, and failing once the configured capacity
    /// would be exceeded.
    ///
    /// # Panics
    ///
    /// This mirrors the arena's fail-closed contract: callers that need a
    /// fallible allocation should use [`Arena::try_alloc`] instead.
    #[must_use]
    pub fn alloc<T>(&self, value: T) -> &T {
        self.bump.alloc(value)
    }

    /// Fallible allocation: fails with [`ArenaError::CapacityExceeded`] if
    /// the arena has already reached its configured cap.
    pub fn try_alloc<T>(&self, value: T) -> Result<&T, ArenaError> {
        let requested = std::mem::size_of::<T>();
        let projected = self
            .bump
            .allocated_bytes()
            .checked_add(requested)
            .ok_or(ArenaError::Overflow)?;
        if projected > self.cap {
            return Err(ArenaError::CapacityExceeded { requested, cap: self.cap });
        }
        Ok(self.bump.alloc(value))
    }

    /// Resets the bump offset to zero, retaining the backing buffer for
    /// reuse. Individual `free` is a no-op by design; this is the only
    /// way to reclaim space before `cleanup`.
    pub fn reset(&mut self) {
        self.bump.reset();
    }

    /// Releases the backing buffer. Equivalent to dropping the arena.
    pub fn cleanup(self) {
        drop(self);
    }

    /// Returns the number of bytes currently allocated from this arena.
    #[must_use]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

thread_local! {
    static CURRENT_ARENA: RefCell<Option<Arena>> = const { RefCell::new(None) };
}

/// RAII guard that binds an arena to the current thread for the duration
/// of a call, restoring the previous binding (if any) on drop.
///
/// This is the idiomatic-Rust analogue of the source implementation's
/// global-allocator-hook-plus-thread-local pattern: rather than
/// redirecting a process-wide allocator, the arena is made available via
/// [`with_current`] to any code running on this thread while the guard is
/// alive.
pub struct ArenaBinding {
    previous: Option<Arena>,
}

impl Drop for ArenaBinding {
    fn drop(&mut self) {
        CURRENT_ARENA.with(|cell| {
            *cell.borrow_mut() = self.previous.take();
        });
    }
}

/// Binds `arena` as the current thread's arena, returning a guard that
/// restores the previous binding when dropped.
pub fn bind(arena: Arena) -> ArenaBinding {
    let previous = CURRENT_ARENA.with(|cell| cell.borrow_mut().replace(arena));
    ArenaBinding { previous }
}

/// Runs `f` with a reference to the currently bound arena, if any.
pub fn with_current<R>(f: impl FnOnce(Option<&Arena>) -> R) -> R {
    CURRENT_ARENA.with(|cell| f(cell.borrow().as_ref()))
}
