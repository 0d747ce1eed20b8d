//! Registry of live nodes with constant-time removal.

#[derive(Clone, Debug)]
pub(super) struct ActiveNodes {
    order: Vec<usize>,
    position: Vec<Option<usize>>,
}

impl ActiveNodes {
    pub(super) fn new(count: usize) -> Self {
        Self {
            order: (0..count).collect(),
            position: (0..count).map(Some).collect(),
        }
    }

    pub(super) fn len(&self) -> usize {
        self.order.len()
    }

    pub(super) fn get(&self, index: usize) -> usize {
        self.order[index]
    }

    pub(super) fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub(super) fn contains(&self, node: usize) -> bool {
        self.position.get(node).is_some_and(Option::is_some)
    }

    pub(super) fn push(&mut self, node: usize) {
        self.reserve_node(node);
        self.position[node] = Some(self.order.len());
        self.order.push(node);
    }

    /// Puts `new` in the slot `old` occupied.
    pub(super) fn replace(&mut self, old: usize, new: usize) {
        debug_assert!(self.contains(old), "node {old} is not active");
        let Some(index) = self.position[old].take() else {
            return;
        };
        self.reserve_node(new);
        self.order[index] = new;
        self.position[new] = Some(index);
    }

    /// Removes `node` by swapping the last active node into its slot.
    pub(super) fn remove(&mut self, node: usize) {
        debug_assert!(self.contains(node), "node {node} is not active");
        let Some(index) = self.position[node].take() else {
            return;
        };
        self.order.swap_remove(index);
        if let Some(&moved) = self.order.get(index) {
            self.position[moved] = Some(index);
        }
    }

    fn reserve_node(&mut self, node: usize) {
        if self.position.len() <= node {
            self.position.resize(node + 1, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_swaps_last_into_the_gap() {
        let mut active = ActiveNodes::new(4);
        active.remove(1);
        assert_eq!(active.as_slice(), &[0, 3, 2]);
        assert!(!active.contains(1));
        active.remove(2);
        assert_eq!(active.as_slice(), &[0, 3]);
        active.remove(0);
        assert_eq!(active.as_slice(), &[3]);
        assert_eq!(active.get(0), 3);
    }

    #[test]
    fn replace_keeps_the_position() {
        let mut active = ActiveNodes::new(3);
        active.push(7);
        active.replace(1, 9);
        assert_eq!(active.as_slice(), &[0, 9, 2, 7]);
        assert!(active.contains(9));
        assert!(!active.contains(1));
        assert!(!active.contains(8));
        assert_eq!(active.len(), 4);
    }
}
