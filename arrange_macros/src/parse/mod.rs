use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{visit_mut::VisitMut, Ident, ItemFn, Pat};

use crate::error::ErrorsVec;
use just_once::{AttrBuilder, JustOnceFnArgAttributeExtractor};

pub(crate) mod arrange;
pub(crate) mod fixture;
pub(crate) mod just_once;

/// The argument attribute that picks the fixture to inject by name.
pub(crate) const FROM_ATTR: &str = "from";

pub(crate) trait ExtendWithFunctionAttrs {
    fn extend_with_function_attrs(
        &mut self,
        item_fn: &mut ItemFn,
    ) -> std::result::Result<(), ErrorsVec>;
}

/// An argument that should receive the fixture registered as `name`.
#[derive(PartialEq, Debug, Clone)]
pub(crate) struct FixtureRef {
    pub(crate) arg: Pat,
    pub(crate) name: Ident,
}

impl FixtureRef {
    pub(crate) fn new(arg: Pat, name: Ident) -> Self {
        Self { arg, name }
    }
}

impl ToTokens for FixtureRef {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.arg.to_tokens(tokens)
    }
}

/// Arguments whose fixture is named explicitly. Every other argument receives the
/// fixture with its own name.
#[derive(PartialEq, Debug, Clone, Default)]
pub(crate) struct InjectionData {
    pub(crate) items: Vec<FixtureRef>,
}

impl InjectionData {
    pub(crate) fn fixtures(&self) -> impl Iterator<Item = &FixtureRef> {
        self.items.iter()
    }
}

impl ExtendWithFunctionAttrs for InjectionData {
    fn extend_with_function_attrs(
        &mut self,
        item_fn: &mut ItemFn,
    ) -> std::result::Result<(), ErrorsVec> {
        self.items.extend(extract_fixture_refs(item_fn)?);
        Ok(())
    }
}

/// Remove every `#[from(name)]` attribute from the function signature.
pub(crate) fn extract_fixture_refs(item_fn: &mut ItemFn) -> Result<Vec<FixtureRef>, ErrorsVec> {
    struct FromBuilder;
    impl AttrBuilder<Pat> for FromBuilder {
        type Out = FixtureRef;

        fn build(attr: syn::Attribute, arg: &Pat) -> syn::Result<Self::Out> {
            attr.parse_args::<Ident>()
                .map(|name| FixtureRef::new(arg.clone(), name))
        }
    }

    let mut extractor = JustOnceFnArgAttributeExtractor::<FromBuilder>::new(FROM_ATTR);
    extractor.visit_signature_mut(&mut item_fn.sig);
    extractor.take()
}
