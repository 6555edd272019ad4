use proc_macro2::{Ident, Span, TokenStream};
use quote::quote_spanned;
use syn::spanned::Spanned;

pub mod function;

/// Which runtime check a generated statement reports through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckKind {
    PreCondition,
    PostCondition,
    InvariantBefore,
    InvariantAfter,
}

impl CheckKind {
    fn entry_point(self) -> Ident {
        let name = match self {
            CheckKind::PreCondition => "pre_condition",
            CheckKind::PostCondition => "post_condition",
            CheckKind::InvariantBefore => "invariant_before",
            CheckKind::InvariantAfter => "invariant_after",
        };
        Ident::new(name, Span::call_site())
    }
}

/// Builds one check statement from the check kind, the `bool`-valued
/// expression, and the tokens to show in the diagnostic.
pub type BuildCheck = fn(CheckKind, &TokenStream, &TokenStream) -> TokenStream;

#[derive(Clone, Copy)]
pub struct Backend {
    /// `None` when checks are compiled out: functions are left untouched.
    pub build_check: Option<BuildCheck>,
}

impl Backend {
    pub const CHECK_AND_ABORT: Backend = Backend {
        build_check: Some(build_abort),
    };

    pub const NO_CHECK: Backend = Backend { build_check: None };
}

fn build_abort(kind: CheckKind, holds: &TokenStream, repr: &TokenStream) -> TokenStream {
    let repr_str = repr.to_string();
    let entry_point = kind.entry_point();
    // Report the location of the clause, not of the attribute.
    quote_spanned! {repr.span()=>
        ::covenant::__private::#entry_point(
            ::covenant::Site::new(::core::file!(), ::core::line!(), #repr_str),
            #holds,
        );
    }
}
