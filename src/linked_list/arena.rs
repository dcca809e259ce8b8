//! Index-backed singly linked list.
//!
//! Nodes live in a backing vector owned by the list; the chain is threaded
//! through them with index handles instead of pointers. A *slot* -- the
//! head field or some node's successor field -- is addressed by the node
//! that owns it, so the removal walk can move a cursor over slots and
//! rewrite the one that points at the target, with no special case for the
//! head and no unchecked dereference at the end of the chain.
//!
//! The list owns node storage but keeps allocation separate from linking:
//! [`alloc`](ArenaList::alloc) creates a detached node,
//! [`push_front`](ArenaList::push_front) / [`push_back`](ArenaList::push_back)
//! link it, [`unlink`](ArenaList::unlink) detaches it again, and
//! [`release`](ArenaList::release) reclaims its storage. Unlinking never
//! allocates or frees.

use alloc::vec::Vec;

use super::UnlinkError;

/// A handle to a node allocated in an [`ArenaList`].
///
/// Handles are raw indices into the backing vector. They are not
/// generational: after [`release`](ArenaList::release) the index may be
/// handed out again by a later [`alloc`](ArenaList::alloc), so stale
/// handles must not be kept around across a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Entry<T> {
    /// `None` marks a released entry awaiting reuse.
    value: Option<T>,
    next: Option<NodeId>,
}

/// A singly linked list whose nodes are stored in a backing vector.
#[derive(Debug)]
pub struct ArenaList<T> {
    entries: Vec<Entry<T>>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    len: usize,
}

impl<T> ArenaList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        ArenaList {
            entries: Vec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Creates a new, empty list with room for `capacity` nodes before the
    /// backing vector reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        ArenaList {
            entries: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Allocate a detached node holding `value` and return its handle.
    ///
    /// The node is not part of the chain until it is pushed.
    pub fn alloc(&mut self, value: T) -> NodeId {
        let entry = Entry {
            value: Some(value),
            next: None,
        };
        match self.free.pop() {
            Some(id) => {
                self.entries[id.0] = entry;
                id
            }
            None => {
                let id = NodeId(self.entries.len());
                self.entries.push(entry);
                id
            }
        }
    }

    /// Reclaim a node's storage and return its payload.
    ///
    /// The node must be detached; releasing a node that is still chained
    /// leaves a dangling successor in the chain. Returns [`None`] if the
    /// handle is invalid or already released.
    pub fn release(&mut self, id: NodeId) -> Option<T> {
        let entry = self.entries.get_mut(id.0)?;
        let value = entry.value.take()?;
        entry.next = None;
        self.free.push(id);
        Some(value)
    }

    /// Link a detached node at the front of the chain.
    pub fn push_front(&mut self, node: NodeId) {
        debug_assert!(
            self.entries[node.0].value.is_some(),
            "pushed a released node"
        );
        debug_assert!(
            self.entries[node.0].next.is_none(),
            "pushed a node that is still chained"
        );
        self.entries[node.0].next = self.head;
        self.head = Some(node);
        self.len += 1;
    }

    /// Link a detached node at the end of the chain.
    ///
    /// Walks the chain to find the final slot, so this is O(n) in the
    /// chain length.
    pub fn push_back(&mut self, node: NodeId) {
        debug_assert!(
            self.entries[node.0].value.is_some(),
            "pushed a released node"
        );
        debug_assert!(
            self.entries[node.0].next.is_none(),
            "pushed a node that is still chained"
        );
        let mut slot: Option<NodeId> = None;
        loop {
            let curr = match slot {
                None => self.head,
                Some(id) => self.entries[id.0].next,
            };
            match curr {
                None => break,
                Some(id) => slot = Some(id),
            }
        }
        match slot {
            None => self.head = Some(node),
            Some(id) => self.entries[id.0].next = Some(node),
        }
        self.len += 1;
    }

    /// Remove `target` from the chain.
    ///
    /// The walk keeps a cursor over slots rather than nodes: the cursor
    /// names the slot currently pointing at the node under examination,
    /// starting with the head slot (`None`). When the slot under the
    /// cursor points at `target`, that one slot is overwritten with
    /// `target`'s successor -- removing the first node is not a separate
    /// case. The removed node keeps its payload and stays allocated, but
    /// its own successor slot is cleared.
    ///
    /// Returns [`UnlinkError::NotFound`] and leaves the chain untouched
    /// when the walk reaches the end of the chain without meeting
    /// `target`: the list is empty, the node was never linked, or it has
    /// already been unlinked.
    pub fn unlink(&mut self, target: NodeId) -> Result<(), UnlinkError> {
        let mut slot: Option<NodeId> = None;
        loop {
            let curr = match slot {
                None => self.head,
                Some(id) => self.entries[id.0].next,
            };
            match curr {
                None => return Err(UnlinkError::NotFound),
                Some(curr) if curr == target => {
                    let next = self.entries[target.0].next.take();
                    match slot {
                        None => self.head = next,
                        Some(id) => self.entries[id.0].next = next,
                    }
                    self.len -= 1;
                    return Ok(());
                }
                Some(curr) => slot = Some(curr),
            }
        }
    }

    /// Get the handle of the first node in the chain.
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Get the handle of the node after `id` in the chain.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.entries.get(id.0).and_then(|entry| entry.next)
    }

    /// Get the payload of a node. Returns [`None`] for invalid or released
    /// handles.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.entries.get(id.0).and_then(|entry| entry.value.as_ref())
    }

    /// Get the payload of a node mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.entries
            .get_mut(id.0)
            .and_then(|entry| entry.value.as_mut())
    }

    /// The number of nodes currently in the chain. Allocated but detached
    /// nodes are not counted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get an iterator over the handles of the chain, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            curr: self.head,
        }
    }
}

impl<T> Default for ArenaList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator over the node handles of an [`ArenaList`], front to back.
pub struct Iter<'a, T> {
    list: &'a ArenaList<T>,
    curr: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let curr = self.curr;
        self.curr = curr.and_then(|id| self.list.next(id));
        curr
    }
}
