use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Expanded/collapsed flags for tree nodes, keyed by node id.
/// Unknown nodes are collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionState {
    expanded: HashMap<String, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Flip the node and return its new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        let next = !self.is_expanded(id);
        self.expanded.insert(id.to_string(), next);
        next
    }

    pub fn expand(&mut self, id: &str) {
        self.expanded.insert(id.to_string(), true);
    }

    pub fn collapse(&mut self, id: &str) {
        self.expanded.insert(id.to_string(), false);
    }

    pub fn expand_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            self.expand(id);
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.values().filter(|v| **v).count()
    }
}
