//! # Slink Collections
//!
//! Collections built around singly linked chains, centered on one
//! operation: removing a known node from a chain, given the chain's head
//! and a handle to that node.
//!
//! ## Core Components
//!
//! - [`linked_list::arena`]: chains stored in a backing vector, addressed
//!   by index handles. Fully safe; the removal walk treats the head slot
//!   and every successor slot uniformly.
//! - [`linked_list::intrusive`]: chains threaded through caller-owned
//!   nodes, either wrapped ([`linked_list::intrusive::single::SingleNode`])
//!   or embedded in a payload struct via `#[derive(Node)]`.
//!
//! Both families report [`linked_list::UnlinkError::NotFound`] instead of
//! walking past the end of a chain when the node to remove is absent.
#![no_std]

extern crate alloc;

pub mod linked_list;
