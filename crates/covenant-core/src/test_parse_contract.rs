use crate::test_util::{assert_contract_eq, post_condition};

use super::*;
use syn::parse_quote;

#[test]
fn parse_simple_contract() {
    let contract: Contract = parse_quote! {
        requires: is_valid(x),
        ensures: *output > x,
    };

    let expected = Contract {
        requires: vec![parse_quote! { is_valid(x) }],
        maintains: vec![],
        ensures: vec![post_condition(
            parse_quote! { output },
            parse_quote! { *output > x },
        )],
    };

    assert_contract_eq(&contract, &expected);
}

#[test]
fn parse_all_clauses() {
    let contract: Contract = parse_quote! {
        requires: x > 0 && x.is_power_of_two(),
        maintains: self,
        binds: z,
        ensures: *z >= x,
    };

    let expected = Contract {
        requires: vec![parse_quote! { x > 0 && x.is_power_of_two() }],
        maintains: vec![parse_quote! { self }],
        ensures: vec![post_condition(parse_quote! { z }, parse_quote! { *z >= x })],
    };

    assert_contract_eq(&contract, &expected);
}

#[test]
fn parse_lists_of_clauses() {
    let contract: Contract = parse_quote! {
        requires: [
            x >= 0,
            y.len() < 10,
        ],
        maintains: [self, other],
        ensures: [
            *output != x,
            |out| out.is_some(),
        ],
    };

    let expected = Contract {
        requires: vec![parse_quote! { x >= 0 }, parse_quote! { y.len() < 10 }],
        maintains: vec![parse_quote! { self }, parse_quote! { other }],
        ensures: vec![
            post_condition(parse_quote! { output }, parse_quote! { *output != x }),
            post_condition(parse_quote! { out }, parse_quote! { out.is_some() }),
        ],
    };

    assert_contract_eq(&contract, &expected);
}

#[test]
fn parse_repeated_clauses_accumulate() {
    let contract: Contract = parse_quote! {
        requires: a,
        requires: b,
        ensures: c,
        ensures: d,
    };

    assert_eq!(contract.requires.len(), 2);
    assert_eq!(contract.ensures.len(), 2);
}

#[test]
fn parse_closure_postconditions() {
    let contract: Contract = parse_quote! {
        binds: result,
        ensures: [
            |(lo, hi)| lo <= hi,
            |Ok(n): &Result<u32, ()>| *n > 0,
            result.is_ok(),
        ],
    };

    let expected = Contract {
        requires: vec![],
        maintains: vec![],
        ensures: vec![
            post_condition(parse_quote! { (lo, hi) }, parse_quote! { lo <= hi }),
            post_condition(parse_quote! { Ok(n) }, parse_quote! { *n > 0 }),
            post_condition(parse_quote! { result }, parse_quote! { result.is_ok() }),
        ],
    };

    assert_contract_eq(&contract, &expected);
}

#[test]
fn parse_empty_contract() {
    let contract: Contract = parse_quote! {};
    assert!(contract.is_empty());
}

fn parse_err(tokens: proc_macro2::TokenStream) -> String {
    match syn::parse2::<Contract>(tokens) {
        Ok(contract) => panic!("expected a parse error, got {contract:?}"),
        Err(err) => err.to_string(),
    }
}

#[test]
fn reject_out_of_order_clauses() {
    let err = parse_err(quote::quote! {
        ensures: *output == x,
        requires: x > 0,
    });
    assert!(err.contains("parameters are out of order"), "{err}");
}

#[test]
fn reject_multiple_binds() {
    let err = parse_err(quote::quote! {
        binds: y,
        binds: z,
    });
    assert_eq!(err, "multiple `binds` parameters are not allowed");
}

#[test]
fn reject_closure_with_two_arguments() {
    let err = parse_err(quote::quote! {
        ensures: |a, b| a == b,
    });
    assert!(err.contains("exactly one argument"), "{err}");
}

#[test]
fn reject_clause_attributes() {
    let err = parse_err(quote::quote! {
        #[cfg(debug_assertions)]
        requires: x > 0,
    });
    assert!(err.contains("attributes are not supported"), "{err}");
}

#[test]
fn reject_unknown_clause() {
    let err = parse_err(quote::quote! {
        assumes: x > 0,
    });
    assert!(err.contains("expected one of"), "{err}");
}
