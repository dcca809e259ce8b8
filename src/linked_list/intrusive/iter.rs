use core::ptr::NonNull;

use crate::linked_list::UnlinkError;

use super::traits::{Link, List, Node};

/// An iterator over a linked list.
pub struct LinkedListIter<'a, T: Node, L: List> {
    _list: &'a L,
    current: Option<NonNull<T>>,
}

impl<'a, T, L> LinkedListIter<'a, T, L>
where
    T: Node,
    L: List<Target = T>,
{
    /// Creates a new iterator over the given list.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the list is not modified while the iterator is alive.
    pub unsafe fn new(list: &'a L) -> Self {
        Self {
            current: list.head(),
            _list: list,
        }
    }

    /// Walk the rest of the chain to `target` and name the link that
    /// points at it: the previous node, or `None` when `target` sits at
    /// the head. The walk stops at the end of the chain and reports
    /// [`UnlinkError::NotFound`] instead of stepping past it.
    pub fn parent_of(mut self, target: NonNull<T>) -> Result<Option<NonNull<T>>, UnlinkError> {
        let mut prev = None;
        while let Some(current) = self.current {
            if current == target {
                return Ok(prev);
            }
            prev = Some(current);
            self.current = unsafe { current.as_ref().next().map(|n| n.cast()) };
        }
        Err(UnlinkError::NotFound)
    }
}

impl<'a, T, L> Iterator for LinkedListIter<'a, T, L>
where
    T: Node,
    L: List<Target = T>,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = unsafe { current.as_ref().next().map(|n| n.cast()) };
        Some(current)
    }
}

unsafe impl<'a, T, L> Send for LinkedListIter<'a, T, L>
where
    T: Node + Send,
    L: List<Target = T>,
{
}

unsafe impl<'a, T, L> Sync for LinkedListIter<'a, T, L>
where
    T: Node + Sync,
    L: List<Target = T>,
{
}
