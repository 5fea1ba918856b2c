//! Recency List Module
//!
//! Doubly linked list of cached artifacts ordered from most- to
//! least-recently used, backed by an arena of nodes with index-based
//! links. Slots are stable for the lifetime of an entry, so the index
//! can locate entries without raw pointers, and removing an arbitrary
//! node is pure index rewiring with no aliasing hazard. Freed slots are
//! recycled through a free list.

use crate::cache::CacheEntry;

/// Sentinel for null links.
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node {
    /// `None` while the slot sits on the free list
    entry: Option<CacheEntry>,
    prev: usize,
    next: usize,
}

// == Recency List ==
/// Arena-backed doubly linked list. Head = most recently used,
/// tail = least recently used. All structural edits are O(1).
#[derive(Debug)]
pub struct RecencyList {
    arena: Vec<Node>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl Default for RecencyList {
    fn default() -> Self {
        Self::new()
    }
}

impl RecencyList {
    // == Constructors ==
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    /// Creates an empty list with arena room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    // == Accessors ==
    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrows the entry stored in `slot`.
    ///
    /// # Panics
    /// Panics if `slot` does not hold a live entry; slots are handed out
    /// by [`push_front`](Self::push_front) and invalidated by removal, so
    /// this indicates caller misuse, not a runtime condition.
    pub fn get(&self, slot: usize) -> &CacheEntry {
        self.arena[slot]
            .entry
            .as_ref()
            .expect("slot must hold a live entry")
    }

    // == Insert Front ==
    /// Inserts `entry` as the new head and returns its slot.
    pub fn push_front(&mut self, entry: CacheEntry) -> usize {
        let slot = match self.free.pop() {
            Some(slot) => {
                self.arena[slot].entry = Some(entry);
                slot
            }
            None => {
                self.arena.push(Node {
                    entry: Some(entry),
                    prev: NIL,
                    next: NIL,
                });
                self.arena.len() - 1
            }
        };

        self.link_front(slot);
        self.len += 1;
        slot
    }

    // == Move To Front ==
    /// Promotes `slot` to head. No-op when it already is the head.
    ///
    /// Handles the tail, interior, and single-element cases uniformly:
    /// the node is fully unlinked before its links are rewritten, so no
    /// edit ever reads through a half-detached node.
    pub fn move_to_front(&mut self, slot: usize) {
        if slot == self.head {
            return;
        }
        self.unlink(slot);
        self.link_front(slot);
    }

    // == Pop Tail ==
    /// Detaches the least-recently-used entry and returns it together
    /// with the slot it occupied. Returns `None` on an empty list.
    pub fn pop_tail(&mut self) -> Option<(usize, CacheEntry)> {
        if self.tail == NIL {
            return None;
        }
        let slot = self.tail;
        Some((slot, self.remove(slot)))
    }

    // == Remove ==
    /// Detaches an arbitrary node and returns its entry, patching both
    /// neighbors and the head/tail boundaries as needed. The slot is
    /// recycled and must not be used again.
    ///
    /// # Panics
    /// Panics if `slot` does not hold a live entry.
    pub fn remove(&mut self, slot: usize) -> CacheEntry {
        let entry = self.arena[slot]
            .entry
            .take()
            .expect("slot must hold a live entry");

        self.unlink(slot);
        self.arena[slot].prev = NIL;
        self.arena[slot].next = NIL;
        self.free.push(slot);
        self.len -= 1;

        entry
    }

    // == Iteration ==
    /// Iterates entries front to back (most to least recently used).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            slot: self.head,
        }
    }

    // == Internal Link Management ==
    /// Wires an unlinked node in as the new head.
    fn link_front(&mut self, slot: usize) {
        self.arena[slot].prev = NIL;
        self.arena[slot].next = self.head;

        if self.head != NIL {
            self.arena[self.head].prev = slot;
        } else {
            // List was empty: the new head is also the tail
            self.tail = slot;
        }
        self.head = slot;
    }

    /// Splices a node out of the chain, fixing whichever of head/tail it
    /// occupied. Covers head, tail, interior, and sole-node removal.
    fn unlink(&mut self, slot: usize) {
        let Node { prev, next, .. } = self.arena[slot];

        if prev != NIL {
            self.arena[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.arena[next].prev = prev;
        } else {
            self.tail = prev;
        }
    }

    // == Test Support ==
    /// Walks the whole structure and checks every structural invariant:
    /// link symmetry, boundary links, length agreement, and free-list
    /// disjointness from the live chain.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        if self.len == 0 {
            assert_eq!(self.head, NIL);
            assert_eq!(self.tail, NIL);
        } else {
            assert_eq!(self.arena[self.head].prev, NIL, "head has a back-link");
            assert_eq!(self.arena[self.tail].next, NIL, "tail has a forward-link");
        }

        // Forward walk must visit exactly `len` nodes and end at the tail.
        let mut seen = 0;
        let mut slot = self.head;
        let mut last = NIL;
        while slot != NIL {
            assert!(self.arena[slot].entry.is_some(), "linked slot is vacant");
            assert_eq!(self.arena[slot].prev, last, "asymmetric links");
            assert!(seen < self.len, "cycle detected in recency list");
            last = slot;
            slot = self.arena[slot].next;
            seen += 1;
        }
        assert_eq!(seen, self.len, "walk length != len");
        assert_eq!(last, if self.len == 0 { NIL } else { self.tail });

        // Every arena slot is either live or on the free list, never both.
        assert_eq!(self.free.len() + self.len, self.arena.len());
        for &slot in &self.free {
            assert!(self.arena[slot].entry.is_none(), "free slot holds an entry");
        }
    }

    /// High-water mark of the arena, for slot-recycling tests.
    #[cfg(test)]
    pub(crate) fn arena_size(&self) -> usize {
        self.arena.len()
    }
}

/// Front-to-back iterator over live entries.
pub struct Iter<'a> {
    list: &'a RecencyList,
    slot: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CacheEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.slot == NIL {
            return None;
        }
        let entry = self.list.get(self.slot);
        self.slot = self.list.arena[self.slot].next;
        Some(entry)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str) -> CacheEntry {
        CacheEntry::new(key, "text/plain", key.as_bytes().to_vec(), 0)
    }

    fn keys(list: &RecencyList) -> Vec<&str> {
        list.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.assert_consistent();
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut list = RecencyList::new();
        list.push_front(entry("a"));
        list.push_front(entry("b"));
        list.push_front(entry("c"));

        assert_eq!(keys(&list), ["c", "b", "a"]);
        list.assert_consistent();
    }

    #[test]
    fn test_push_front_single_element_is_head_and_tail() {
        let mut list = RecencyList::new();
        let slot = list.push_front(entry("only"));

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(slot).key, "only");
        list.assert_consistent();
    }

    #[test]
    fn test_move_to_front_of_head_is_noop() {
        let mut list = RecencyList::new();
        list.push_front(entry("a"));
        let head = list.push_front(entry("b"));

        list.move_to_front(head);
        assert_eq!(keys(&list), ["b", "a"]);
        list.assert_consistent();
    }

    #[test]
    fn test_move_to_front_from_tail() {
        let mut list = RecencyList::new();
        let tail = list.push_front(entry("a"));
        list.push_front(entry("b"));
        list.push_front(entry("c"));

        list.move_to_front(tail);
        assert_eq!(keys(&list), ["a", "c", "b"]);
        list.assert_consistent();
    }

    #[test]
    fn test_move_to_front_from_interior() {
        let mut list = RecencyList::new();
        list.push_front(entry("a"));
        let mid = list.push_front(entry("b"));
        list.push_front(entry("c"));

        list.move_to_front(mid);
        assert_eq!(keys(&list), ["b", "c", "a"]);
        list.assert_consistent();
    }

    #[test]
    fn test_move_to_front_sole_element() {
        let mut list = RecencyList::new();
        let slot = list.push_front(entry("a"));

        list.move_to_front(slot);
        assert_eq!(keys(&list), ["a"]);
        list.assert_consistent();
    }

    #[test]
    fn test_pop_tail_returns_lru() {
        let mut list = RecencyList::new();
        list.push_front(entry("a"));
        list.push_front(entry("b"));

        let (_, evicted) = list.pop_tail().unwrap();
        assert_eq!(evicted.key, "a");
        assert_eq!(keys(&list), ["b"]);
        list.assert_consistent();
    }

    #[test]
    fn test_pop_tail_empty_returns_none() {
        let mut list = RecencyList::new();
        assert!(list.pop_tail().is_none());
    }

    #[test]
    fn test_pop_tail_drains_in_lru_order() {
        let mut list = RecencyList::new();
        list.push_front(entry("a"));
        list.push_front(entry("b"));
        list.push_front(entry("c"));

        let drained: Vec<String> = std::iter::from_fn(|| list.pop_tail())
            .map(|(_, e)| e.key)
            .collect();
        assert_eq!(drained, ["a", "b", "c"]);
        assert!(list.is_empty());
        list.assert_consistent();
    }

    #[test]
    fn test_remove_head() {
        let mut list = RecencyList::new();
        list.push_front(entry("a"));
        list.push_front(entry("b"));
        let head = list.push_front(entry("c"));

        let removed = list.remove(head);
        assert_eq!(removed.key, "c");
        assert_eq!(keys(&list), ["b", "a"]);
        list.assert_consistent();
    }

    #[test]
    fn test_remove_tail() {
        let mut list = RecencyList::new();
        let tail = list.push_front(entry("a"));
        list.push_front(entry("b"));
        list.push_front(entry("c"));

        let removed = list.remove(tail);
        assert_eq!(removed.key, "a");
        assert_eq!(keys(&list), ["c", "b"]);
        list.assert_consistent();
    }

    #[test]
    fn test_remove_interior() {
        let mut list = RecencyList::new();
        list.push_front(entry("a"));
        let mid = list.push_front(entry("b"));
        list.push_front(entry("c"));

        let removed = list.remove(mid);
        assert_eq!(removed.key, "b");
        assert_eq!(keys(&list), ["c", "a"]);
        list.assert_consistent();
    }

    #[test]
    fn test_remove_sole_node_empties_list() {
        let mut list = RecencyList::new();
        let slot = list.push_front(entry("a"));

        let removed = list.remove(slot);
        assert_eq!(removed.key, "a");
        assert!(list.is_empty());
        list.assert_consistent();

        // The list must be fully usable again afterwards
        list.push_front(entry("b"));
        assert_eq!(keys(&list), ["b"]);
        list.assert_consistent();
    }

    #[test]
    fn test_slots_are_recycled() {
        let mut list = RecencyList::new();

        // Churn far more entries than ever live at once; the arena must
        // stay at its high-water mark instead of growing per insertion.
        for round in 0..100 {
            list.push_front(entry(&format!("k{}", round)));
            if list.len() > 3 {
                list.pop_tail();
            }
        }

        assert_eq!(list.arena_size(), 4);
        list.assert_consistent();
    }

    #[test]
    fn test_mixed_churn_stays_consistent() {
        let mut list = RecencyList::new();
        let mut slots = Vec::new();

        for i in 0..10 {
            slots.push(list.push_front(entry(&format!("k{}", i))));
        }
        list.remove(slots[0]); // tail
        list.remove(slots[9]); // head
        list.remove(slots[5]); // interior
        list.move_to_front(slots[1]);
        list.assert_consistent();

        assert_eq!(keys(&list)[0], "k1");
        assert_eq!(list.len(), 7);
    }
}
