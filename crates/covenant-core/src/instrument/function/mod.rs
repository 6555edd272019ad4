
use crate::{
    Contract,
    instrument::{Backend, BuildCheck, CheckKind},
};

use proc_macro2::Span;
use quote::{ToTokens, quote};
use syn::{Block, Ident, ItemFn, Type, TypeImplTrait, parse::Result, parse_quote, visit::Visit};

impl Backend {
    pub fn instrument_fn(self, contract: Contract, mut func: ItemFn) -> Result<ItemFn> {
        let Some(build_check) = self.build_check else {
            return Ok(func);
        };
        if contract.is_empty() {
            return Ok(func);
        }

        let is_async = func.sig.asyncness.is_some();

        // Extract the return type from the function signature
        let return_type = match &func.sig.output {
            syn::ReturnType::Default => syn::parse_quote!(()),
            syn::ReturnType::Type(_, ty) => ty.as_ref().clone(),
        };

        // Generate the new, instrumented function body.
        let new_body =
            instrument_fn_body(build_check, &contract, &func.block, is_async, &return_type)?;

        // Replace the old function body with the new one.
        *func.block = new_body;

        Ok(func)
    }
}

fn instrument_fn_body(
    build_check: BuildCheck,
    contract: &Contract,
    original_body: &Block,
    is_async: bool,
    return_type: &Type,
) -> Result<Block> {
    // The identifier for the return value binding.
    let output_ident = Ident::new("__covenant_output", Span::mixed_site());

    // --- Generate Entry Checks ---
    let precondition_checks = contract.requires.iter().map(|expr| {
        let expr = expr.to_token_stream();
        build_check(CheckKind::PreCondition, &expr, &expr)
    });

    let invariant_before_checks = contract.maintains.iter().map(|object| {
        let holds = quote! { ::covenant::Valid::is_valid(&#object) };
        build_check(
            CheckKind::InvariantBefore,
            &holds,
            &object.to_token_stream(),
        )
    });

    // --- Run the Body ---
    // The body runs in a closure so that `return` and `?` land here, where
    // the exit checks can see the result.
    let body_expr = if is_async {
        quote! { (async || #original_body)().await }
    } else {
        quote! { (|| #original_body)() }
    };

    // A `let` cannot name an opaque type, so leave those to inference.
    let run_body = if mentions_impl_trait(return_type) {
        quote! { let #output_ident = #body_expr; }
    } else {
        quote! { let #output_ident: #return_type = #body_expr; }
    };

    // --- Generate Exit Checks ---
    let invariant_after_checks = contract.maintains.iter().map(|object| {
        let holds = quote! { ::covenant::Valid::is_valid(&#object) };
        build_check(
            CheckKind::InvariantAfter,
            &holds,
            &object.to_token_stream(),
        )
    });

    let postcondition_checks = contract.ensures.iter().map(|postcondition| {
        let pattern = &postcondition.pattern;
        let expr = &postcondition.expr;
        let holds = quote! {
            match &#output_ident {
                #[allow(unused_variables)]
                #pattern => #expr,
                #[allow(unreachable_patterns)]
                _ => true,
            }
        };
        build_check(CheckKind::PostCondition, &holds, &expr.to_token_stream())
    });

    Ok(parse_quote! {
        {
            #(#precondition_checks)*
            #(#invariant_before_checks)*
            #run_body
            #(#invariant_after_checks)*
            #(#postcondition_checks)*
            #output_ident
        }
    })
}

fn mentions_impl_trait(ty: &Type) -> bool {
    struct Finder(bool);

    impl<'ast> Visit<'ast> for Finder {
        fn visit_type_impl_trait(&mut self, _: &'ast TypeImplTrait) {
            self.0 = true;
        }
    }

    let mut finder = Finder(false);
    finder.visit_type(ty);
    finder.0
}
