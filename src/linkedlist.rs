use core::fmt;
use std::fmt::{Debug, Display};

use crate::error::{Error, InvalidArgument, Result};
use crate::kind::ElementKind;

/*
 * A single link of the chain : one value and exclusive ownership
 * of the rest of the chain.
 */
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/*
 * Read-only walk over the chain, head to tail
 */
struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

/// A singly-linked list that keeps its values in ascending order.
///
/// Every operation walks the chain from the head, so searching, inserting
/// and removing are linear in the length of the list. Values that compare
/// equal keep the order in which they were inserted.
///
/// The first accepted value fixes the [kind](ElementKind::kind) of the list.
/// That kind is remembered for the lifetime of the list, even once it has
/// been emptied again.
///
/// ```
/// use sorted_linked_list::SortedLinkedList;
///
/// let mut list = SortedLinkedList::new();
/// list.insert(10).unwrap();
/// list.insert(5).unwrap();
/// assert_eq!(list.to_string(), "[5, 10]");
/// assert_eq!(list.index_of(&10).unwrap(), Some(1));
/// ```
pub struct SortedLinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
    kind: Option<&'static str>,
}

impl<T: Ord + ElementKind> SortedLinkedList<T> {
    pub fn new() -> Self {
        SortedLinkedList {
            head: None,
            len: 0,
            kind: None,
        }
    }

    /// Inserts `value` after every value that is less than or equal to it.
    ///
    /// Fails with [`Error::InvalidArgument`] if the value is absent or its kind
    /// differs from the kind established by the first insertion.
    pub fn insert(&mut self, value: T) -> Result<()> {
        if let Err(err) = self.check_present(&value).and_then(|_| self.check_kind(&value)) {
            log::debug!("rejected insertion: {}", err);
            return Err(err);
        }
        if self.kind.is_none() {
            log::trace!("list kind established as {}", value.kind());
            self.kind = Some(value.kind());
        }

        // Stop on the first strictly greater value
        let mut cursor = &mut self.head;
        let mut position = 0;
        while cursor.as_ref().is_some_and(|node| node.value <= value) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
                position += 1;
            }
        }
        let next = cursor.take();
        *cursor = Some(Box::new(Node { value, next }));
        self.len += 1;

        log::trace!("inserted at position {} (len {})", position, self.len);
        Ok(())
    }

    /// Whether some value in the list equals `value`.
    pub fn contains(&self, value: &T) -> Result<bool> {
        self.check_present(value)?;
        Ok(self.iter().any(|current| current == value))
    }

    /// Unlinks the first value equal to `value`. Returns `false` and leaves the
    /// list untouched when there is no such value.
    pub fn remove(&mut self, value: &T) -> Result<bool> {
        self.check_present(value)?;

        let mut cursor = &mut self.head;
        let mut position = 0;
        while cursor.as_ref().is_some_and(|node| node.value != *value) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
                position += 1;
            }
        }

        match cursor.take() {
            Some(node) => {
                *cursor = node.next;
                self.len -= 1;
                log::trace!("removed position {} (len {})", position, self.len);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let out_of_range = Error::IndexOutOfRange {
            index,
            size: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        self.iter().nth(index).ok_or(out_of_range)
    }

    /// Position of the first value equal to `value`, `None` if there is none.
    pub fn index_of(&self, value: &T) -> Result<Option<usize>> {
        self.check_present(value)?;
        Ok(self.iter().position(|current| current == value))
    }

    fn check_present(&self, value: &T) -> Result<()> {
        if value.is_absent() {
            return Err(InvalidArgument::Absent.into());
        }
        Ok(())
    }

    fn check_kind(&self, value: &T) -> Result<()> {
        match self.kind {
            Some(expected) if expected != value.kind() => Err(InvalidArgument::KindMismatch {
                expected,
                found: value.kind(),
            }
            .into()),
            _ => Ok(()),
        }
    }
}

impl<T> SortedLinkedList<T> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Kind fixed by the first successful insertion, if any.
    pub fn established_kind(&self) -> Option<&'static str> {
        self.kind
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: Display> SortedLinkedList<T> {
    /// Same as `to_string()` : `[e1, e2, ...]`, or `[]` when empty.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: Ord + ElementKind> Default for SortedLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/*
 * Unlink nodes one by one : dropping the head box directly would
 * recurse once per node.
 */
impl<T> Drop for SortedLinkedList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

/*
 * [e1, e2, ..., en]
 */
impl<T: Display> Display for SortedLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T: Debug> Debug for SortedLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortedLinkedList")
            .field("kind", &self.kind)
            .field("len", &self.len)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
