//! Parsing and instrumentation for the `#[contract]` attribute.
//!
//! A [`Contract`] is parsed from the attribute arguments and a
//! [`Backend`] rewrites the annotated function so that each clause is
//! checked through the `covenant` runtime.

use proc_macro2::Span;
use syn::{
    Attribute, Expr, Pat, Token,
    parse::{Parse, ParseStream, Result},
    parse_quote,
    punctuated::Punctuated,
};

pub mod instrument;

pub use instrument::Backend;

/// A contract specifies the intended behavior of a function or method.
#[derive(Debug)]
pub struct Contract {
    /// Preconditions: conditions that must hold when the function is called.
    pub requires: Vec<Expr>,
    /// Invariants: objects implementing `covenant::Valid` that must be valid
    /// both when the function is called and when it returns.
    pub maintains: Vec<Expr>,
    /// Postconditions: conditions that must hold when the function returns.
    pub ensures: Vec<PostCondition>,
}

/// A postcondition represented by a binding pattern and a `bool`-valued expression.
#[derive(Debug)]
pub struct PostCondition {
    /// The pattern matched against a reference to the return value,
    /// e.g. `output`, `(lo, hi)`, `Ok(n)`. When a refutable pattern does not
    /// match, the postcondition holds vacuously.
    pub pattern: Pat,
    /// The `bool`-valued expression.
    pub expr: Expr,
}

impl Contract {
    pub fn is_empty(&self) -> bool {
        self.requires.is_empty() && self.maintains.is_empty() && self.ensures.is_empty()
    }
}

impl Parse for Contract {
    fn parse(input: ParseStream) -> Result<Self> {
        let args = Punctuated::<ContractArg, Token![,]>::parse_terminated(input)?;

        let mut last_arg_order: Option<ArgOrder> = None;
        let mut requires: Vec<Expr> = vec![];
        let mut maintains: Vec<Expr> = vec![];
        let mut binds_pattern: Option<Pat> = None;
        let mut ensures_exprs: Vec<Expr> = vec![];

        for arg in args {
            let current_arg_order = arg.get_order();
            if let Some(last_order) = last_arg_order {
                if current_arg_order < last_order {
                    return Err(syn::Error::new(
                        arg.get_keyword_span(),
                        "parameters are out of order: their order must be `requires`, `maintains`, `binds`, `ensures`",
                    ));
                }
            }
            last_arg_order = Some(current_arg_order);

            match arg {
                ContractArg::Requires { expr, .. } => requires.extend(flatten_list(expr)),
                ContractArg::Maintains { expr, .. } => maintains.extend(flatten_list(expr)),
                ContractArg::Binds { keyword, pattern } => {
                    if binds_pattern.is_some() {
                        return Err(syn::Error::new(
                            keyword.span,
                            "multiple `binds` parameters are not allowed",
                        ));
                    }
                    binds_pattern = Some(pattern);
                }
                ContractArg::Ensures { expr, .. } => ensures_exprs.extend(flatten_list(expr)),
            }
        }

        let default_pattern = binds_pattern.unwrap_or_else(|| parse_quote! { output });

        let ensures = ensures_exprs
            .into_iter()
            .map(|expr| interpret_expr_as_post_condition(expr, &default_pattern))
            .collect::<Result<Vec<PostCondition>>>()?;

        Ok(Contract {
            requires,
            maintains,
            ensures,
        })
    }
}

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
enum ArgOrder {
    Requires,
    Maintains,
    Binds,
    Ensures,
}

/// An intermediate enum to help parse either a clause or a `binds` setting.
enum ContractArg {
    Requires { keyword: kw::requires, expr: Expr },
    Maintains { keyword: kw::maintains, expr: Expr },
    Binds { keyword: kw::binds, pattern: Pat },
    Ensures { keyword: kw::ensures, expr: Expr },
}

impl ContractArg {
    fn get_order(&self) -> ArgOrder {
        match self {
            ContractArg::Requires { .. } => ArgOrder::Requires,
            ContractArg::Maintains { .. } => ArgOrder::Maintains,
            ContractArg::Binds { .. } => ArgOrder::Binds,
            ContractArg::Ensures { .. } => ArgOrder::Ensures,
        }
    }

    fn get_keyword_span(&self) -> Span {
        match self {
            ContractArg::Requires { keyword, .. } => keyword.span,
            ContractArg::Maintains { keyword, .. } => keyword.span,
            ContractArg::Binds { keyword, .. } => keyword.span,
            ContractArg::Ensures { keyword, .. } => keyword.span,
        }
    }
}

impl Parse for ContractArg {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        if let Some(attr) = attrs.first() {
            return Err(syn::Error::new_spanned(
                attr,
                "attributes are not supported on contract clauses; checks are switched on and off for the whole build",
            ));
        }

        let lookahead = input.lookahead1();
        if lookahead.peek(kw::binds) {
            // Parse `binds: <pattern>`
            let keyword = input.parse::<kw::binds>()?;
            input.parse::<Token![:]>()?;
            Ok(ContractArg::Binds {
                keyword,
                pattern: Pat::parse_single(input)?,
            })
        } else if lookahead.peek(kw::requires) {
            // Parse `requires: <conditions>`
            let keyword = input.parse::<kw::requires>()?;
            input.parse::<Token![:]>()?;
            Ok(ContractArg::Requires {
                keyword,
                expr: input.parse()?,
            })
        } else if lookahead.peek(kw::maintains) {
            // Parse `maintains: <objects>`
            let keyword = input.parse::<kw::maintains>()?;
            input.parse::<Token![:]>()?;
            Ok(ContractArg::Maintains {
                keyword,
                expr: input.parse()?,
            })
        } else if lookahead.peek(kw::ensures) {
            // Parse `ensures: <conditions>`
            let keyword = input.parse::<kw::ensures>()?;
            input.parse::<Token![:]>()?;
            Ok(ContractArg::Ensures {
                keyword,
                expr: input.parse()?,
            })
        } else {
            Err(lookahead.error())
        }
    }
}

/// An array literal lists several clauses at once.
fn flatten_list(expr: Expr) -> Vec<Expr> {
    match expr {
        Expr::Array(list) => list.elems.into_iter().collect(),
        expr => vec![expr],
    }
}

/// Try to interpret an Expr as a PostCondition
fn interpret_expr_as_post_condition(expr: Expr, default_pattern: &Pat) -> Result<PostCondition> {
    // A one-argument closure names its own binding: `|(lo, hi)| lo <= hi`
    if let Expr::Closure(closure) = expr {
        if let Some(keyword) = &closure.asyncness {
            return Err(syn::Error::new_spanned(
                keyword,
                "a postcondition closure must not be async",
            ));
        }
        let mut inputs = closure.inputs.iter().cloned();
        let pattern = match (inputs.next(), inputs.next()) {
            // The binding is always a reference to the return value, so any
            // type annotation is dropped.
            (Some(Pat::Type(typed)), None) => *typed.pat,
            (Some(pattern), None) => pattern,
            _ => {
                return Err(syn::Error::new_spanned(
                    &closure,
                    "a postcondition closure takes exactly one argument: the return value",
                ));
            }
        };
        return Ok(PostCondition {
            pattern,
            expr: *closure.body,
        });
    }

    // Naked expression uses default pattern
    Ok(PostCondition {
        pattern: default_pattern.clone(),
        expr,
    })
}

/// Custom keywords for parsing. This allows us to use `requires`, `ensures`, etc.,
/// as if they were built-in Rust keywords during parsing.
mod kw {
    syn::custom_keyword!(requires);
    syn::custom_keyword!(maintains);
    syn::custom_keyword!(binds);
    syn::custom_keyword!(ensures);
}

#[cfg(test)]
mod test_parse_contract;

#[cfg(test)]
mod test_util;
