//! Arena-backed doubly linked list used as the sweep frontier.
//!
//! Slots are plain indices, so a vertex can be unlinked in O(1) given the
//! slot recorded for it. Freed slots are recycled.

const NIL: usize = usize::MAX;

#[derive(Clone, Debug)]
struct Slot<N> {
    node: N,
    prev: usize,
    next: usize,
    live: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct FrontierList<N> {
    slots: Vec<Slot<N>>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<N: Copy> FrontierList<N> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append `node` at the tail and return its slot.
    pub(crate) fn push_back(&mut self, node: N) -> usize {
        let slot = Slot {
            node,
            prev: self.tail,
            next: NIL,
            live: true,
        };
        let idx = match self.free.pop() {
            Some(i) => {
                self.slots[i] = slot;
                i
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };
        if self.tail == NIL {
            self.head = idx;
        } else {
            self.slots[self.tail].next = idx;
        }
        self.tail = idx;
        self.len += 1;
        idx
    }

    /// Unlink the slot and return its node. `None` if the slot is not live.
    pub(crate) fn remove(&mut self, idx: usize) -> Option<N> {
        let slot = self.slots.get(idx).filter(|s| s.live)?;
        let (prev, next, node) = (slot.prev, slot.next, slot.node);
        if prev == NIL {
            self.head = next;
        } else {
            self.slots[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.slots[next].prev = prev;
        }
        let s = &mut self.slots[idx];
        s.live = false;
        s.prev = NIL;
        s.next = NIL;
        self.free.push(idx);
        self.len -= 1;
        Some(node)
    }

    /// First live slot.
    #[inline]
    pub(crate) fn head(&self) -> Option<usize> {
        (self.head != NIL).then_some(self.head)
    }

    /// Slot following `idx`, as linked right now.
    #[inline]
    pub(crate) fn next(&self, idx: usize) -> Option<usize> {
        let n = self.slots.get(idx).filter(|s| s.live)?.next;
        (n != NIL).then_some(n)
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> N {
        self.slots[idx].node
    }
}
