use crate::{Contract, PostCondition};
use pretty_assertions::assert_eq;
use quote::ToTokens;
use syn::Expr;

pub fn assert_tokens_eq<L: ToTokens, R: ToTokens>(left: &L, right: &R) {
    assert_eq!(
        left.to_token_stream().to_string(),
        right.to_token_stream().to_string(),
    );
}

pub fn assert_contract_eq(left: &Contract, right: &Contract) {
    // Destructure to ensure we handle all fields - compilation will fail if fields are added
    let Contract {
        requires: left_requires,
        maintains: left_maintains,
        ensures: left_ensures,
    } = left;

    let Contract {
        requires: right_requires,
        maintains: right_maintains,
        ensures: right_ensures,
    } = right;

    assert_slice_eq(left_requires, right_requires, "requires", &assert_expr_eq);
    assert_slice_eq(
        left_maintains,
        right_maintains,
        "maintains",
        &assert_expr_eq,
    );
    assert_slice_eq(
        left_ensures,
        right_ensures,
        "ensures",
        &assert_post_condition_eq,
    );
}

fn assert_slice_eq<T, F>(left: &[T], right: &[T], item_name: &str, assert_item_eq: F)
where
    F: Fn(&T, &T, &str),
{
    assert_eq!(
        left.len(),
        right.len(),
        "number of `{}` items do not match",
        item_name
    );

    for (i, (left_item, right_item)) in left.iter().zip(right.iter()).enumerate() {
        let msg_prefix = format!("`{}` items at index {}, ", item_name, i);
        assert_item_eq(left_item, right_item, &msg_prefix);
    }
}

fn assert_expr_eq(left: &Expr, right: &Expr, msg_prefix: &str) {
    assert_eq!(
        left.to_token_stream().to_string(),
        right.to_token_stream().to_string(),
        "{}expression does not match",
        msg_prefix
    );
}

fn assert_post_condition_eq(left: &PostCondition, right: &PostCondition, msg_prefix: &str) {
    // Destructure to ensure we handle all fields
    let PostCondition {
        pattern: left_pattern,
        expr: left_expr,
    } = left;

    let PostCondition {
        pattern: right_pattern,
        expr: right_expr,
    } = right;

    assert_eq!(
        left_pattern.to_token_stream().to_string(),
        right_pattern.to_token_stream().to_string(),
        "{}`pattern` does not match",
        msg_prefix
    );

    assert_eq!(
        left_expr.to_token_stream().to_string(),
        right_expr.to_token_stream().to_string(),
        "{}`expr` does not match",
        msg_prefix
    );
}

/// Builds the postcondition the parser should produce for `pattern` and `expr`.
pub fn post_condition(pattern: syn::Pat, expr: Expr) -> PostCondition {
    PostCondition { pattern, expr }
}
