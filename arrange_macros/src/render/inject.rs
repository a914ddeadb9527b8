use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{FnArg, Ident, LitStr, Type};

use crate::{
    refident::{MaybeIdent, MaybePatType},
    resolver::Resolver,
};

/// An argument that receives a fixture: the fixture value is bound to `binding` before calling
/// the function.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Injected {
    pub(crate) binding: Ident,
    pub(crate) fixture: LitStr,
    pub(crate) ty: Type,
}

/// Arguments that `resolver` cannot resolve are skipped: they are reported as errors before
/// rendering.
pub(crate) fn resolve_arguments<'a>(
    args: impl Iterator<Item = &'a FnArg>,
    resolver: &impl Resolver,
) -> Vec<Injected> {
    args.filter_map(MaybePatType::maybe_pat_type)
        .enumerate()
        .filter_map(|(pos, arg)| {
            let fixture = resolver.resolve(&arg.pat)?;
            let binding = arg
                .maybe_ident()
                .cloned()
                .unwrap_or_else(|| format_ident!("__destruct_{}", pos + 1));
            Some(Injected {
                binding,
                fixture: LitStr::new(&fixture.to_string(), fixture.span()),
                ty: arg.ty.as_ref().clone(),
            })
        })
        .collect()
}

/// Take every injected value out of `arguments` by fixture name and type.
pub(crate) fn take_arguments(arguments: &Ident, injected: &[Injected]) -> TokenStream {
    let define_vars = injected.iter().map(
        |Injected {
             binding,
             fixture,
             ty,
         }| {
            quote! {
                let #binding = #arguments.take::<#ty>(#fixture)?;
            }
        },
    );
    quote! {
        #(#define_vars)*
    }
}
