//! A generic list that keeps its values in ascending order.
//!
//! [`SortedLinkedList`] is a plain singly-linked chain : lookups, insertions and
//! removals are linear scans from the head. Values must be totally ordered and
//! implement [`ElementKind`], which lets the list reject absent values and
//! values of a different kind than the first one it accepted.

mod error;
mod kind;
mod linkedlist;

pub use error::{Error, InvalidArgument, Result};
pub use kind::ElementKind;
pub use linkedlist::SortedLinkedList;
