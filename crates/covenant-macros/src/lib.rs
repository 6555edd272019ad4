//! The `#[contract]` attribute. Use it through the `covenant` crate, which
//! re-exports it alongside the runtime the generated checks call into.

use proc_macro::TokenStream;
use quote::ToTokens;
use syn::{ItemFn, parse_macro_input};

use covenant_core::{Backend, Contract};

#[cfg(feature = "check-conditions")]
const BACKEND: Backend = Backend::CHECK_AND_ABORT;

#[cfg(not(feature = "check-conditions"))]
const BACKEND: Backend = Backend::NO_CHECK;

/// Attaches a contract to a function or method.
///
/// With checks enabled, each `requires` clause runs at entry, each
/// `maintains` object is checked for validity at entry and at exit, and
/// each `ensures` clause runs against the return value at exit. A failing
/// clause reports its location and source text on stderr and aborts.
/// With checks disabled the function is emitted unchanged.
#[proc_macro_attribute]
pub fn contract(args: TokenStream, input: TokenStream) -> TokenStream {
    // Parse the contract arguments from the attribute, e.g., `requires: x > 0, ...`
    let contract = parse_macro_input!(args as Contract);
    // Parse the function to which the attribute is attached.
    let func = parse_macro_input!(input as ItemFn);

    match BACKEND.instrument_fn(contract, func) {
        Ok(func) => func.into_token_stream().into(),
        Err(e) => e.to_compile_error().into(),
    }
}
