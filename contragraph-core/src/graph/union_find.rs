//! Append-only union-find used for both nodes and edge slots.
//!
//! Every entity keeps two parent links. The compressed link is rewritten by
//! `find` and answers "who represents me now". The absorption link is written
//! once, when the entity stops being a root, and is never touched again; it
//! preserves the merge history for leaf expansion. A parent is always created
//! after its children, so absorption links strictly increase ids.

use std::cell::Cell;

#[derive(Clone, Debug)]
pub(super) struct ParentForest {
    parent: Vec<Cell<usize>>,
    absorbed_by: Vec<Option<usize>>,
}

impl ParentForest {
    pub(super) fn with_roots(count: usize) -> Self {
        Self {
            parent: (0..count).map(Cell::new).collect(),
            absorbed_by: vec![None; count],
        }
    }

    pub(super) fn len(&self) -> usize {
        self.parent.len()
    }

    /// Appends a fresh root and returns its id.
    pub(super) fn push_root(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(Cell::new(id));
        self.absorbed_by.push(None);
        id
    }

    pub(super) fn is_root(&self, id: usize) -> bool {
        self.parent[id].get() == id
    }

    /// Resolves `id` to its representative, compressing the path behind it.
    pub(super) fn find(&self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root].get() != root {
            root = self.parent[root].get();
        }

        let mut current = id;
        while current != root {
            let next = self.parent[current].get();
            self.parent[current].set(root);
            current = next;
        }

        root
    }

    /// Makes the root `child` a direct child of the root `parent`.
    pub(super) fn attach(&mut self, child: usize, parent: usize) {
        debug_assert!(self.is_root(child), "only roots can be attached");
        debug_assert!(child < parent, "parents are created after their children");
        self.parent[child].set(parent);
        self.absorbed_by[child] = Some(parent);
    }

    /// Returns the entity that absorbed `id`, ignoring path compression.
    pub(super) fn absorbed_by(&self, id: usize) -> Option<usize> {
        self.absorbed_by[id]
    }
}
