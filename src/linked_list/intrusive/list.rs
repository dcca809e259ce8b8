use core::ptr::NonNull;

use crate::linked_list::UnlinkError;

use super::traits::{Link, List, Node};

/// A generic intrusive linked list.
#[derive(Debug)]
pub struct LinkedList<T: Node> {
    head: Option<NonNull<T>>,
    count: usize,
}

impl<T> LinkedList<T>
where
    T: Node,
{
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            count: 0,
        }
    }
}

impl<T> Link for LinkedList<T>
where
    T: Node,
{
    type Target = T;

    /// The list's head is itself a link: the slot before the first node.
    /// This lets the removal walk treat the head like any node's link.
    fn next(&self) -> Option<NonNull<T>> {
        self.head
    }

    fn set_next(&mut self, next: Option<NonNull<T>>) {
        self.head = next;
    }
}

impl<T> List for LinkedList<T>
where
    T: Node<Target = T>,
{
    fn head(&self) -> Option<NonNull<T>> {
        self.next()
    }

    fn set_head(&mut self, head: Option<NonNull<T>>) {
        self.set_next(head);
    }

    fn push(&mut self, node: NonNull<T>) {
        unsafe {
            let node_ref = &mut *node.as_ptr();
            node_ref.append_to(self);
            self.count += 1;
        }
    }

    fn pop(&mut self) -> Option<NonNull<T>> {
        self.head.inspect(|head| {
            unsafe {
                let head_ref = &mut *head.as_ptr();
                head_ref.detach(self);
                self.count -= 1;
            }
        })
    }

    fn unlink(&mut self, node: NonNull<T>) -> Result<(), UnlinkError> {
        let parent = unsafe { self.iter().parent_of(node) }?;
        unsafe {
            let node_ref = &mut *node.as_ptr();
            match parent {
                // The previous node's link points at `node`.
                Some(prev) => node_ref.detach(&mut *prev.as_ptr()),
                // `node` is the head; the list itself is the link.
                None => node_ref.detach(self),
            };
        }
        self.count -= 1;
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn count(&self) -> usize {
        self.count
    }
}

impl<T> Default for LinkedList<T>
where
    T: Node,
{
    fn default() -> Self {
        Self {
            head: None,
            count: 0,
        }
    }
}

unsafe impl<T: Node + Send> Send for LinkedList<T> {}
unsafe impl<T: Node + Sync> Sync for LinkedList<T> {}
