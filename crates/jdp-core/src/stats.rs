//! Summary statistics over a diff tree, used by the CLI's human-readable
//! summary and by the benches.

use crate::wire::{self, WireShape};
use crate::Value;

/// Counts of the wire shapes found while walking a diff tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Number of addition singles (`[new]`).
    pub additions: usize,
    /// Number of deletion triples (`[old, 0, 0]`).
    pub removals: usize,
    /// Number of change triples (`[old, new]`).
    pub changes: usize,
    /// Number of move operations (`["", dest, 3]`), patch input only.
    pub moves: usize,
}

impl DiffStats {
    /// Walks `diff`, tallying every wire-shape entry found at any depth.
    ///
    /// ```
    /// # use jdp_core::{DiffStats, Value};
    /// let diff = Value::from_json_str(r#"{"a":[1,2],"b":[3]}"#).unwrap();
    /// let stats = DiffStats::collect(&diff);
    /// assert_eq!(stats.changes, 1);
    /// assert_eq!(stats.additions, 1);
    /// ```
    #[must_use]
    pub fn collect(diff: &Value) -> Self {
        let mut stats = Self::default();
        stats.walk(diff);
        stats
    }

    /// Total number of wire-shape entries counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.additions + self.removals + self.changes + self.moves
    }

    fn walk(&mut self, node: &Value) {
        match wire::classify(node) {
            WireShape::Change { .. } => self.changes += 1,
            WireShape::Addition { .. } => self.additions += 1,
            WireShape::Deletion { .. } => self.removals += 1,
            WireShape::Move { .. } => self.moves += 1,
            WireShape::Nested(inner) => {
                if let Value::Object(map) = inner {
                    for (key, value) in map {
                        if key == wire::ARRAY_MARKER_KEY {
                            continue;
                        }
                        self.walk(value);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_nested_array_diff_entries() {
        let diff = Value::from_json_str(r#"{"1":{"2":[4],"_2":[3,0,0],"_t":"a"}}"#).unwrap();
        let stats = DiffStats::collect(&diff);
        assert_eq!(stats.additions, 1);
        assert_eq!(stats.removals, 1);
        assert_eq!(stats.total(), 2);
    }

    #[test]
    fn counts_move_operations() {
        let diff = Value::from_json_str(r#"{"_0":["",2,3],"_t":"a"}"#).unwrap();
        let stats = DiffStats::collect(&diff);
        assert_eq!(stats.moves, 1);
        assert_eq!(stats.total(), 1);
    }
}
