//! Contract checks compiled out of the build.
//!
//! The macros discard their condition tokens before type checking, so
//! nothing is evaluated and no [`Valid`](crate::Valid) impl is required.

/// Checks that a condition holds at this point. Compiled out in this build.
#[macro_export]
macro_rules! pre_condition {
    ($($tokens:tt)*) => {
        ()
    };
}

/// Checks that a condition holds when the enclosing scope ends. Compiled out
/// in this build.
///
/// The statement form expands to nothing, so like the checked build it can
/// only be used as a statement. The binding form still yields its initial
/// value, wrapped in [`Unchecked`](crate::Unchecked) so callers read and
/// write it the same way in every build:
///
/// ```
/// # use covenant::post_condition;
/// let mut out = post_condition!(1_u8 => |out| unreachable!("{out}"));
/// *out += 1;
/// assert_eq!(*out, 2);
/// ```
#[macro_export]
macro_rules! post_condition {
    ($init:expr => |$bind:pat_param| $cond:expr $(,)?) => {
        $crate::Unchecked::new($init)
    };
    ($($tokens:tt)*) => {};
}

/// Checks that an object is valid at this point. Compiled out in this build.
#[macro_export]
macro_rules! validity_check {
    ($($tokens:tt)*) => {
        ()
    };
}

/// Checks that an object is valid here and when the enclosing scope ends.
/// Compiled out in this build: the statement expands to nothing and the
/// local it names is left as it was.
#[macro_export]
macro_rules! invariant_check {
    (self $(,)?) => {
        ::core::compile_error!(
            "`invariant_check!` shadows its argument; bind `self` to a local first, e.g. `let this = self;`"
        )
    };
    ($($tokens:tt)*) => {};
}
