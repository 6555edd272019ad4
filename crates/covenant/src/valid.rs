use std::{rc::Rc, sync::Arc};

/// A type that can report whether its internal state is well-formed.
///
/// This is the only capability [`validity_check!`](crate::validity_check)
/// and [`invariant_check!`](crate::invariant_check) require. When checks are
/// compiled out, neither macro refers to it.
///
/// ```
/// use covenant::Valid;
///
/// struct Range {
///     lo: u32,
///     hi: u32,
/// }
///
/// impl Valid for Range {
///     fn is_valid(&self) -> bool {
///         self.lo <= self.hi
///     }
/// }
///
/// assert!(Range { lo: 1, hi: 2 }.is_valid());
/// assert!(!(&Range { lo: 3, hi: 2 }).is_valid());
/// ```
pub trait Valid {
    fn is_valid(&self) -> bool;
}

impl<T: Valid + ?Sized> Valid for &T {
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

impl<T: Valid + ?Sized> Valid for &mut T {
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

impl<T: Valid + ?Sized> Valid for Box<T> {
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

impl<T: Valid + ?Sized> Valid for Rc<T> {
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

impl<T: Valid + ?Sized> Valid for Arc<T> {
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}
