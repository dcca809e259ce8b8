use core::ptr::NonNull;

use crate::linked_list::UnlinkError;

use super::{iter::LinkedListIter, traits::{Link, List, Node}};

/// A wrapper for a link that maps a `Link` to a different type.
/// This lets an embedded link treat its containing struct's links as its
/// own target type.
pub struct LinkWrapper<'a, L, T, M>
where
    L: Link<Target = T>,
{
    inner: &'a mut L,
    _marker: core::marker::PhantomData<M>,
}

impl<'a, L, T, M> LinkWrapper<'a, L, T, M>
where
    L: Link<Target = T>,
{
    /// Create a new `LinkWrapper` with the given inner link.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the mapped type aliases the inner
    /// target type (the link is embedded at offset zero of the target).
    pub unsafe fn new(inner: &'a mut L) -> Self {
        LinkWrapper {
            inner,
            _marker: core::marker::PhantomData,
        }
    }
}

impl<'a, L, T, M> Link for LinkWrapper<'a, L, T, M>
where
    L: Link<Target = T>,
{
    type Target = M;

    fn next(&self) -> Option<NonNull<M>> {
        self.inner.next().map(|n| n.cast())
    }

    fn set_next(&mut self, next: Option<NonNull<M>>) {
        self.inner.set_next(next.map(|n| n.cast()));
    }
}

/// A wrapper for a linked list that maps a `List` to a different type.
pub struct ListWrapper<'a, L, T, M>
where
    L: List<Target = T>,
{
    inner: &'a mut L,
    _marker: core::marker::PhantomData<M>,
}

impl<'a, L, T, M> ListWrapper<'a, L, T, M>
where
    L: List<Target = T>,
{
    /// Create a new `ListWrapper` with the given inner list.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the mapped type aliases the inner
    /// target type (the link is embedded at offset zero of the target).
    pub unsafe fn new(inner: &'a mut L) -> Self {
        ListWrapper {
            inner,
            _marker: core::marker::PhantomData,
        }
    }
}

impl<'a, L, T, M> Link for ListWrapper<'a, L, T, M>
where
    L: List<Target = T>,
{
    type Target = M;

    fn next(&self) -> Option<NonNull<M>> {
        self.inner.next().map(|n| n.cast())
    }

    fn set_next(&mut self, next: Option<NonNull<M>>) {
        self.inner.set_next(next.map(|n| n.cast()));
    }
}

impl<'a, L, T, M> List for ListWrapper<'a, L, T, M>
where
    L: List<Target = T>,
{
    fn head(&self) -> Option<NonNull<M>> {
        self.inner.head().map(|n| n.cast())
    }

    fn set_head(&mut self, head: Option<NonNull<M>>) {
        self.inner.set_head(head.map(|n| n.cast()));
    }

    fn push(&mut self, node: NonNull<M>) {
        self.inner.push(node.cast());
    }

    fn pop(&mut self) -> Option<NonNull<M>> {
        self.inner.pop().map(|n| n.cast())
    }

    fn unlink(&mut self, node: NonNull<M>) -> Result<(), UnlinkError> {
        self.inner.unlink(node.cast())
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn count(&self) -> usize {
        self.inner.count()
    }

    unsafe fn iter<'b>(&'b self) -> LinkedListIter<'b, M, Self>
    where
        M: Node,
    {
        unsafe { LinkedListIter::new(self) }
    }
}
