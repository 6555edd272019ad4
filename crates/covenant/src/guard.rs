use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{Site, Valid, __private};

/// A postcondition waiting for the end of its scope.
///
/// The guard owns a value and dereferences to it. When the guard is dropped,
/// the check is called once with a reference to the value's final state; if
/// it returns `false` the process aborts with a `POST_CONDITION` diagnostic.
///
/// Usually created by [`post_condition!`](crate::post_condition).
#[must_use = "a postcondition is checked when its guard is dropped; bind it to a local"]
pub struct PostCondition<T, F>
where
    F: FnOnce(&T) -> bool,
{
    site: Site,
    value: T,
    check: Option<F>,
}

impl<T, F> PostCondition<T, F>
where
    F: FnOnce(&T) -> bool,
{
    pub fn new(site: Site, value: T, check: F) -> Self {
        Self {
            site,
            value,
            check: Some(check),
        }
    }

    pub fn site(&self) -> &Site {
        &self.site
    }
}

impl<T, F> Deref for PostCondition<T, F>
where
    F: FnOnce(&T) -> bool,
{
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, F> DerefMut for PostCondition<T, F>
where
    F: FnOnce(&T) -> bool,
{
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T, F> Drop for PostCondition<T, F>
where
    F: FnOnce(&T) -> bool,
{
    fn drop(&mut self) {
        // Runs on every exit, unwinding included.
        if let Some(check) = self.check.take() {
            __private::post_condition(self.site, check(&self.value));
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PostCondition<T, F>
where
    F: FnOnce(&T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostCondition")
            .field("site", &self.site)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// An object invariant bracketing a scope.
///
/// Construction checks the object and aborts with a `BEFORE operations`
/// diagnostic if it is invalid. Dropping the guard checks the same object
/// again and aborts with an `AFTER operations` diagnostic if it became
/// invalid. In between, the guard dereferences to the object.
///
/// Usually created by [`invariant_check!`](crate::invariant_check).
#[must_use = "an invariant is re-checked when its guard is dropped; bind it to a local"]
pub struct InvariantGuard<R>
where
    R: Deref,
    R::Target: Valid,
{
    site: Site,
    object: R,
}

impl<R> InvariantGuard<R>
where
    R: Deref,
    R::Target: Valid,
{
    pub fn new(site: Site, object: R) -> Self {
        __private::invariant_before(site, Valid::is_valid(&*object));
        Self { site, object }
    }

    pub fn site(&self) -> &Site {
        &self.site
    }
}

impl<R> Deref for InvariantGuard<R>
where
    R: Deref,
    R::Target: Valid,
{
    type Target = R::Target;

    fn deref(&self) -> &R::Target {
        &self.object
    }
}

impl<R> DerefMut for InvariantGuard<R>
where
    R: DerefMut,
    R::Target: Valid,
{
    fn deref_mut(&mut self) -> &mut R::Target {
        &mut self.object
    }
}

impl<R> Drop for InvariantGuard<R>
where
    R: Deref,
    R::Target: Valid,
{
    fn drop(&mut self) {
        __private::invariant_after(self.site, Valid::is_valid(&*self.object));
    }
}

impl<R> fmt::Debug for InvariantGuard<R>
where
    R: Deref,
    R::Target: Valid,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvariantGuard")
            .field("site", &self.site)
            .finish_non_exhaustive()
    }
}

/// Hands a local over to [`invariant_check!`](crate::invariant_check) as a
/// mutable reference.
///
/// Implemented only for `&mut T`, so method-call autoref accepts both an
/// owned `mut` local and a binding that already holds `&mut T`.
#[doc(hidden)]
pub trait IntoGuarded<'a> {
    type Object: Valid + ?Sized + 'a;

    fn into_guarded(self) -> &'a mut Self::Object;
}

impl<'a, T: Valid + ?Sized> IntoGuarded<'a> for &'a mut T {
    type Object = T;

    #[inline(always)]
    fn into_guarded(self) -> &'a mut T {
        self
    }
}

/// A value standing where a guard would be when checks are compiled out.
///
/// It has no `Drop` impl and the same layout as `T`.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unchecked<T>(T);

impl<T> Unchecked<T> {
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Unchecked<T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Unchecked<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}
