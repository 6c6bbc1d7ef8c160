use std::any::type_name;

/// Runtime view of an element used by [`SortedLinkedList`](crate::SortedLinkedList).
///
/// The list records the [`kind`](ElementKind::kind) of the first value it
/// accepts and refuses any later value of another kind. For plain types the
/// kind is the type name, so every value agrees and the check never fires.
/// Types that carry several kinds behind one declared type (typically an
/// enum) override `kind` per variant.
///
/// ```
/// use sorted_linked_list::{ElementKind, SortedLinkedList};
///
/// #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
/// enum Shape {
///     Circle(u32),
///     Square(u32),
/// }
///
/// impl ElementKind for Shape {
///     fn kind(&self) -> &'static str {
///         match self {
///             Shape::Circle(_) => "Circle",
///             Shape::Square(_) => "Square",
///         }
///     }
/// }
///
/// let mut list = SortedLinkedList::new();
/// list.insert(Shape::Circle(3)).unwrap();
/// assert!(list.insert(Shape::Square(1)).is_err());
/// ```
pub trait ElementKind {
    fn kind(&self) -> &'static str {
        type_name::<Self>()
    }

    /// Whether this value stands for "no value". Absent values are never stored.
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! plain_kind {
    ($($t:ty),* $(,)?) => {
        $(impl ElementKind for $t {})*
    };
}

plain_kind!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    bool,
    char,
    String,
    &'static str,
);

impl<A, B> ElementKind for (A, B) {}

impl<A, B, C> ElementKind for (A, B, C) {}

/*
 * None is the absent value; Some takes the kind of its content
 */
impl<T: ElementKind> ElementKind for Option<T> {
    fn kind(&self) -> &'static str {
        match self {
            Some(value) => value.kind(),
            None => type_name::<T>(),
        }
    }

    fn is_absent(&self) -> bool {
        match self {
            Some(value) => value.is_absent(),
            None => true,
        }
    }
}
