//! Append-only CSR storage.
//!
//! `offsets` always holds one more entry than there are rows. Only the last
//! row accepts new items, so opening a row freezes the one before it.

use std::ops::Range;

#[derive(Clone, Debug)]
pub(super) struct RowStore {
    offsets: Vec<usize>,
    items: Vec<usize>,
}

impl RowStore {
    /// Builds `row_count` rows from `(row, item)` pairs with a counting sort.
    ///
    /// Returns the store together with the position each input pair landed
    /// at, so callers can scatter parallel payloads (weights) the same way.
    pub(super) fn scatter(row_count: usize, pairs: &[(usize, usize)]) -> (Self, Vec<usize>) {
        let mut offsets = vec![0; row_count + 1];
        for &(row, _) in pairs {
            offsets[row + 1] += 1;
        }
        for row in 0..row_count {
            offsets[row + 1] += offsets[row];
        }

        let mut cursor = offsets.clone();
        let mut items = vec![0; pairs.len()];
        let mut positions = Vec::with_capacity(pairs.len());
        for &(row, item) in pairs {
            let position = cursor[row];
            cursor[row] += 1;
            items[position] = item;
            positions.push(position);
        }

        (Self { offsets, items }, positions)
    }

    pub(super) fn row_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the item positions that belong to `row`.
    pub(super) fn row(&self, row: usize) -> Range<usize> {
        self.offsets[row]..self.offsets[row + 1]
    }

    pub(super) fn item(&self, position: usize) -> usize {
        self.items[position]
    }

    /// Opens an empty row at the end of the store and returns its index.
    pub(super) fn open_row(&mut self) -> usize {
        let end = self.items.len();
        self.offsets.push(end);
        self.row_count() - 1
    }

    /// Appends `item` to the last row and returns its position.
    pub(super) fn push(&mut self, item: usize) -> usize {
        let position = self.items.len();
        self.items.push(item);
        if let Some(end) = self.offsets.last_mut() {
            *end += 1;
        }
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_groups_items_by_row_in_input_order() {
        let pairs = [(2, 10), (0, 11), (2, 12), (1, 13), (0, 14)];
        let (store, positions) = RowStore::scatter(4, &pairs);

        assert_eq!(store.row_count(), 4);
        let row = |index: usize| -> Vec<usize> {
            store.row(index).map(|position| store.item(position)).collect()
        };
        assert_eq!(row(0), vec![11, 14]);
        assert_eq!(row(1), vec![13]);
        assert_eq!(row(2), vec![10, 12]);
        assert!(row(3).is_empty());
        assert_eq!(positions, vec![3, 0, 4, 2, 1]);
    }

    #[test]
    fn appended_rows_only_grow_at_the_end() {
        let (mut store, _) = RowStore::scatter(1, &[(0, 5)]);
        let opened = store.open_row();
        assert_eq!(opened, 1);
        assert_eq!(store.push(7), 1);
        assert_eq!(store.push(8), 2);

        assert_eq!(store.row(0), 0..1);
        assert_eq!(store.row(1), 1..3);
        assert_eq!(store.item(2), 8);
    }
}
