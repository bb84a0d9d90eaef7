//! Binary min-heap keyed by dense integer ids, with decrease-key.
//!
//! `slots` is the heap array of ids; `position` maps an id back to its slot so
//! a pending entry can be found and sifted up in O(log n) instead of being
//! re-pushed as a stale duplicate.

const ABSENT: usize = usize::MAX;

#[derive(Debug, Clone)]
pub struct IndexMinHeap<K> {
    slots: Vec<usize>,
    position: Vec<usize>,
    keys: Vec<Option<K>>,
}

impl<K: Ord + Copy> IndexMinHeap<K> {
    /// Accepts ids in `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            position: vec![ABSENT; capacity],
            keys: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize { self.position.len() }
    pub fn len(&self) -> usize { self.slots.len() }
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        self.position.get(id).is_some_and(|&p| p != ABSENT)
    }

    pub fn key_of(&self, id: usize) -> Option<K> {
        if self.contains(id) { self.keys[id] } else { None }
    }

    pub fn peek_min(&self) -> Option<(usize, K)> {
        let &id = self.slots.first()?;
        self.keys[id].map(|k| (id, k))
    }

    /// Adds `id` with `key`. Returns false (and changes nothing) if `id` is
    /// already queued or out of range.
    pub fn insert(&mut self, id: usize, key: K) -> bool {
        if id >= self.capacity() || self.contains(id) {
            return false;
        }
        let slot = self.slots.len();
        self.slots.push(id);
        self.position[id] = slot;
        self.keys[id] = Some(key);
        self.sift_up(slot);
        true
    }

    /// Lowers the key of a queued id. Returns false if `id` is not queued or
    /// `key` would not lower it.
    pub fn decrease_key(&mut self, id: usize, key: K) -> bool {
        match self.key_of(id) {
            Some(current) if key < current => {
                self.keys[id] = Some(key);
                self.sift_up(self.position[id]);
                true
            }
            _ => false,
        }
    }

    /// Inserts `id` or lowers its key, whichever applies.
    pub fn push_or_decrease(&mut self, id: usize, key: K) -> bool {
        if self.contains(id) {
            self.decrease_key(id, key)
        } else {
            self.insert(id, key)
        }
    }

    pub fn pop_min(&mut self) -> Option<(usize, K)> {
        let last = self.slots.len().checked_sub(1)?;
        self.swap(0, last);
        let id = self.slots.pop()?;
        self.position[id] = ABSENT;
        let key = self.keys[id].take()?;
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        Some((id, key))
    }

    #[inline]
    fn key_at(&self, slot: usize) -> Option<K> {
        self.keys[self.slots[slot]]
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.key_at(a) < self.key_at(b)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.position[self.slots[a]] = a;
        self.position[self.slots[b]] = b;
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) { right } else { left };
            if !self.less(child, slot) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}
