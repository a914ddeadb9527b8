/// Module for error rendering stuff
use proc_macro2::TokenStream;
use syn::{visit, visit::Visit, ItemFn, Pat};

use crate::parse::{arrange::ArrangeInfo, fixture::FixtureInfo, InjectionData};
use crate::refident::{MaybeIdent, MaybePat};
use crate::utils::{fn_args, is_unit_return};

pub mod messages {
    pub const DESTRUCT_WITHOUT_FROM: &str =
        "To destruct a fixture you should provide its name by '#[from(...)]' attribute.";
    pub const GENERICS: &str =
        "Cannot inject generic arguments: fixtures are resolved by name and concrete type.";
    pub const IMPL_TRAIT: &str =
        "Cannot use `impl Trait`: fixtures are resolved by name and concrete type.";
    pub const ASYNC: &str = "Async functions are not supported.";
    pub const RECEIVER: &str = "Cannot inject a fixture into `self`.";
    pub const TEST_RETURN: &str = "Test functions should not return a value.";
    pub const SHOULD_PANIC: &str =
        "Expected `#[should_panic]` or `#[should_panic(expected = \"message\")]`.";

    pub fn use_more_than_once(name: &str) -> String {
        format!("You cannot use '{name}' attribute more than once for the same argument")
    }
}

pub(crate) fn fixture(fixture: &ItemFn, info: &FixtureInfo) -> TokenStream {
    injection_errors(fixture, &info.data)
        .map(|e| e.to_compile_error())
        .collect()
}

pub(crate) fn arrange(test: &ItemFn, info: &ArrangeInfo) -> TokenStream {
    injection_errors(test, &info.data)
        .chain(test_return(test))
        .map(|e| e.to_compile_error())
        .collect()
}

fn injection_errors<'a>(function: &'a ItemFn, data: &'a InjectionData) -> Errors<'a> {
    Box::new(
        async_fn(function)
            .chain(generics(function))
            .chain(impl_traits(function))
            .chain(receiver(function))
            .chain(destruct_fixture_without_from(function, data)),
    )
}

type Errors<'a> = Box<dyn Iterator<Item = syn::Error> + 'a>;

fn async_fn(function: &ItemFn) -> Errors<'_> {
    Box::new(
        function
            .sig
            .asyncness
            .iter()
            .map(|a| syn::Error::new_spanned(a, messages::ASYNC)),
    )
}

fn generics(function: &ItemFn) -> Errors<'_> {
    Box::new(
        function
            .sig
            .generics
            .params
            .iter()
            .map(|p| syn::Error::new_spanned(p, messages::GENERICS)),
    )
}

#[derive(Default)]
struct SearchImpl(Vec<syn::TypeImplTrait>);

impl<'ast> Visit<'ast> for SearchImpl {
    fn visit_type(&mut self, i: &'ast syn::Type) {
        if let syn::Type::ImplTrait(impl_trait) = i {
            self.0.push(impl_trait.clone());
            return;
        }
        visit::visit_type(self, i);
    }
}

impl SearchImpl {
    fn in_signature(f: &ItemFn) -> Vec<syn::TypeImplTrait> {
        let mut s = SearchImpl::default();
        visit::visit_signature(&mut s, &f.sig);
        s.0
    }
}

fn impl_traits(function: &ItemFn) -> Errors<'_> {
    Box::new(
        SearchImpl::in_signature(function)
            .into_iter()
            .map(|t| syn::Error::new_spanned(t, messages::IMPL_TRAIT)),
    )
}

fn receiver(function: &ItemFn) -> Errors<'_> {
    Box::new(
        function
            .sig
            .receiver()
            .into_iter()
            .map(|r| syn::Error::new_spanned(r, messages::RECEIVER)),
    )
}

fn destruct_fixture_without_from<'a>(
    function: &'a ItemFn,
    data: &'a InjectionData,
) -> Errors<'a> {
    Box::new(
        fn_args(function)
            .filter_map(|a| a.maybe_pat().map(|p| (a, p)))
            .filter(|&(_, p)| p.maybe_ident().is_none())
            .filter(move |&(_, p)| !is_renamed(data, p))
            .map(|(a, _)| syn::Error::new_spanned(a, messages::DESTRUCT_WITHOUT_FROM)),
    )
}

fn is_renamed(data: &InjectionData, pat: &Pat) -> bool {
    data.fixtures().any(|f| &f.arg == pat)
}

fn test_return(test: &ItemFn) -> Errors<'_> {
    match is_unit_return(&test.sig.output) {
        true => Box::new(std::iter::empty()),
        false => Box::new(std::iter::once(syn::Error::new_spanned(
            &test.sig.output,
            messages::TEST_RETURN,
        ))),
    }
}

#[derive(Debug, Default)]
pub struct ErrorsVec(Vec<syn::Error>);

impl std::ops::Deref for ErrorsVec {
    type Target = Vec<syn::Error>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for ErrorsVec {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<syn::Error> for ErrorsVec {
    fn from(errors: syn::Error) -> Self {
        vec![errors].into()
    }
}

impl From<Vec<syn::Error>> for ErrorsVec {
    fn from(errors: Vec<syn::Error>) -> Self {
        Self(errors)
    }
}

impl quote::ToTokens for ErrorsVec {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(self.0.iter().map(|e| e.to_compile_error()))
    }
}
