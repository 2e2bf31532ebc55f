use crate::arena::Index;
use std::collections::HashMap;

pub trait HasIndex {
    fn index(self) -> Index;
}

/// Insertion-ordered set of entity handles. Iteration order is the order
/// entities were added, which is what makes "first match wins" collision
/// resolution deterministic.
pub struct IndexSet<H> {
    handles: Vec<H>,
    positions: HashMap<H, usize>,
}

impl<H: HasIndex + Copy + Eq + std::hash::Hash> IndexSet<H> {
    pub fn new() -> IndexSet<H> {
        IndexSet {
            handles: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn insert(&mut self, handle: H) {
        self.handles.push(handle);
        self.positions.insert(handle, self.handles.len() - 1);
    }

    pub fn remove(&mut self, handle: H) {
        let pos = match self.positions.remove(&handle) {
            Some(pos) => pos,
            None => return,
        };
        self.handles.remove(pos);
        for (i, h) in self.handles.iter().enumerate().skip(pos) {
            self.positions.insert(*h, i);
        }
    }

    pub fn contains(&self, handle: H) -> bool {
        self.positions.contains_key(&handle)
    }

    pub fn iter(&self) -> std::slice::Iter<H> {
        self.handles.iter()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<H: HasIndex + Copy + Eq + std::hash::Hash> Default for IndexSet<H> {
    fn default() -> IndexSet<H> {
        IndexSet::new()
    }
}

#[cfg(test)]
mod test {
    use super::{HasIndex, IndexSet};
    use crate::arena::Index;

    #[derive(Hash, PartialEq, Eq, Copy, Clone, Debug)]
    struct Handle(Index);

    impl HasIndex for Handle {
        fn index(self) -> Index {
            self.0
        }
    }

    fn list(set: &IndexSet<Handle>) -> Vec<Handle> {
        set.iter().copied().collect()
    }

    #[test]
    fn test_index_set() {
        let mut set = IndexSet::new();
        let h0 = Handle(Index::from_raw_parts(2, 1));
        let h1 = Handle(Index::from_raw_parts(1, 20));
        let h2 = Handle(Index::from_raw_parts(0, 7));

        assert_eq!(list(&set), vec![]);

        set.insert(h0);
        set.insert(h1);
        set.insert(h2);
        assert_eq!(list(&set), vec![h0, h1, h2]);

        // Removal preserves the order of the survivors.
        set.remove(h1);
        assert_eq!(list(&set), vec![h0, h2]);
        assert!(!set.contains(h1));

        set.remove(h0);
        set.remove(h2);
        assert_eq!(list(&set), vec![]);
    }
}
