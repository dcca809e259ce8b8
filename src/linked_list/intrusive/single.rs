use core::ptr::NonNull;

use slink_collection_derive::Node;

use super::traits::{Link, List, Node};

/// A node in a singly linked list, wrapping a payload it owns.
///
/// The link field sits at offset zero; chain pointers alias it.
#[derive(Node)]
#[node(crate_path = "crate")]
#[repr(C)]
pub struct SingleNode<T> {
    link: SingleLink,
    data: T,
}

impl<T: Default> Default for SingleNode<T> {
    fn default() -> Self {
        Self {
            link: SingleLink::default(),
            data: T::default(),
        }
    }
}

/// A slot in a singly linked chain: holds the successor, or `None` at the
/// end. A node's position in a chain and the head of
/// [`LinkedList`](super::list::LinkedList) are both such slots, which is
/// what lets removal rewrite either one through the same [`Link`] calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleLink {
    next: Option<NonNull<Self>>,
}

impl Link for SingleLink {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}

impl Node for SingleLink {
    #[inline]
    fn append_to<L>(&mut self, list: &mut L)
    where
        L: List<Target = Self>,
    {
        debug_assert!(self.next.is_none(), "node is already in a chain");
        self.next = list.next();
        list.set_next(Some(NonNull::from(self)));
    }

    #[inline]
    unsafe fn detach<L>(&mut self, parent: &mut L) -> Option<NonNull<Self>>
    where
        L: Link<Target = Self>,
    {
        debug_assert_eq!(parent.next(), Some(NonNull::from(&*self)));
        // A detached node must not lead back into the chain it left.
        let next = self.next.take();
        parent.set_next(next);
        next
    }
}

unsafe impl Send for SingleLink {}
unsafe impl Sync for SingleLink {}
