#![doc = include_str!("../../../README.md")]

mod guard;
mod valid;
mod violation;

#[cfg(feature = "check-conditions")]
mod checked;
#[cfg(not(feature = "check-conditions"))]
mod elided;

pub use guard::{InvariantGuard, PostCondition, Unchecked};
pub use valid::Valid;
pub use violation::{Site, Violation};

/// Attaches a contract to a function signature.
///
/// ```
/// use covenant::contract;
///
/// #[contract(
///     requires: divisor != 0,
///     ensures: *output <= dividend,
/// )]
/// fn checked_divide(dividend: u32, divisor: u32) -> u32 {
///     dividend / divisor
/// }
///
/// assert_eq!(checked_divide(10, 2), 5);
/// ```
///
/// Clauses are `requires`, `maintains`, `binds` and `ensures`, in that order.
/// `maintains` names objects implementing [`Valid`] that are checked before
/// and after the body. `ensures` conditions see the return value through a
/// reference bound to `output`, or to the pattern given by `binds`.
pub use covenant_macros::contract;

/// Whether contract checks are compiled into this build.
pub const ENABLED: bool = cfg!(feature = "check-conditions");

/// Entry points used by macro expansions. Not public API.
#[doc(hidden)]
pub mod __private {
    use crate::{Site, Violation};

    pub use crate::guard::IntoGuarded;

    #[inline]
    pub fn pre_condition(site: Site, holds: bool) {
        if !holds {
            Violation::PreCondition(site).abort()
        }
    }

    #[inline]
    pub fn post_condition(site: Site, holds: bool) {
        if !holds {
            Violation::PostCondition(site).abort()
        }
    }

    #[inline]
    pub fn validity(site: Site, holds: bool) {
        if !holds {
            Violation::Invalid(site).abort()
        }
    }

    #[inline]
    pub fn invariant_before(site: Site, holds: bool) {
        if !holds {
            Violation::InvariantBefore(site).abort()
        }
    }

    #[inline]
    pub fn invariant_after(site: Site, holds: bool) {
        if !holds {
            Violation::InvariantAfter(site).abort()
        }
    }
}
