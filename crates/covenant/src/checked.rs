//! Contract checks compiled into the build.
//!
//! Every failing check writes one diagnostic to stderr and aborts.

/// Checks that a condition holds at this point.
///
/// ```
/// # use covenant::pre_condition;
/// fn halve(n: u32) -> u32 {
///     pre_condition!(n % 2 == 0);
///     n / 2
/// }
/// assert_eq!(halve(8), 4);
/// ```
#[macro_export]
macro_rules! pre_condition {
    ($cond:expr $(,)?) => {
        $crate::__private::pre_condition(
            $crate::Site::new(
                ::core::file!(),
                ::core::line!(),
                ::core::stringify!($cond),
            ),
            $cond,
        )
    };
}

/// Checks that a condition holds when the enclosing scope ends, however the
/// scope is left: normal exit, early `return`, `?`, or a panic unwinding
/// through it.
///
/// `post_condition!(cond);` is a statement, never an expression. The
/// statement form borrows whatever the condition mentions until the
/// end of the scope, so those locals can only change through interior
/// mutability:
///
/// ```
/// # use covenant::post_condition;
/// use std::cell::Cell;
///
/// let count = Cell::new(0);
/// {
///     post_condition!(count.get() == 3);
///     for _ in 0..3 {
///         count.set(count.get() + 1);
///     }
/// }
/// ```
///
/// The binding form owns the value being built. The guard dereferences to
/// it and the closure receives a reference to its final state:
///
/// ```
/// # use covenant::post_condition;
/// fn triple(x: u64) -> u64 {
///     let mut out = post_condition!(0 => |out| *out == x * 3);
///     for _ in 0..3 {
///         *out += x;
///     }
///     *out
/// }
/// assert_eq!(triple(7), 21);
/// ```
#[macro_export]
macro_rules! post_condition {
    ($init:expr => |$bind:pat_param| $cond:expr $(,)?) => {
        $crate::PostCondition::new(
            $crate::Site::new(
                ::core::file!(),
                ::core::line!(),
                ::core::stringify!($cond),
            ),
            $init,
            |$bind| $cond,
        )
    };
    ($cond:expr $(,)?) => {
        let __covenant_post_condition = $crate::PostCondition::new(
            $crate::Site::new(
                ::core::file!(),
                ::core::line!(),
                ::core::stringify!($cond),
            ),
            (),
            |_: &()| $cond,
        );
    };
}

/// Checks that an object implementing [`Valid`](crate::Valid) is valid at
/// this point.
#[macro_export]
macro_rules! validity_check {
    ($obj:expr $(,)?) => {
        $crate::__private::validity(
            $crate::Site::new(
                ::core::file!(),
                ::core::line!(),
                ::core::stringify!($obj),
            ),
            $crate::Valid::is_valid(&$obj),
        )
    };
}

/// Checks that an object is valid here and again when the enclosing scope
/// ends.
///
/// Takes the name of a local holding either the object itself (declared
/// `mut`) or a `&mut` reference to it. The local is shadowed by a guard
/// that dereferences to the object, so the code after the check uses it
/// unchanged. It is a statement, and in a method `self` must first be
/// bound to a local:
///
/// ```
/// # use covenant::{invariant_check, Valid};
/// struct Stack {
///     items: Vec<u8>,
///     capacity: usize,
/// }
///
/// impl Valid for Stack {
///     fn is_valid(&self) -> bool {
///         self.items.len() <= self.capacity
///     }
/// }
///
/// impl Stack {
///     fn push(&mut self, item: u8) -> bool {
///         let stack = self;
///         invariant_check!(stack);
///         if stack.items.len() == stack.capacity {
///             return false;
///         }
///         stack.items.push(item);
///         true
///     }
/// }
///
/// let mut stack = Stack { items: vec![], capacity: 1 };
/// assert!(stack.push(1));
/// assert!(!stack.push(2));
/// ```
#[macro_export]
macro_rules! invariant_check {
    (self $(,)?) => {
        ::core::compile_error!(
            "`invariant_check!` shadows its argument; bind `self` to a local first, e.g. `let this = self;`"
        )
    };
    ($obj:ident $(,)?) => {
        #[allow(unused_mut)]
        let mut $obj = {
            use $crate::__private::IntoGuarded as _;
            $crate::InvariantGuard::new(
                $crate::Site::new(
                    ::core::file!(),
                    ::core::line!(),
                    ::core::stringify!($obj),
                ),
                $obj.into_guarded(),
            )
        };
    };
}
