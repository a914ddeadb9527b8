use std::marker::PhantomData;

use quote::ToTokens;
use syn::{visit_mut::VisitMut, Attribute, FnArg, Pat};

use crate::{
    error::{messages, ErrorsVec},
    refident::MaybePat,
    utils::attr_is,
};

pub trait AttrBuilder<E> {
    type Out;

    fn build(attr: Attribute, extra: &E) -> syn::Result<Self::Out>;
}

/// Simple struct used to visit function arguments and extract the attributes that match
/// the `name`: only one attribute is allowed for each argument.
pub struct JustOnceFnArgAttributeExtractor<'a, B>
where
    B: AttrBuilder<Pat>,
{
    name: &'a str,
    elements: Vec<B::Out>,
    errors: Vec<syn::Error>,
    _phantom: PhantomData<B>,
}

impl<'a, B> JustOnceFnArgAttributeExtractor<'a, B>
where
    B: AttrBuilder<Pat>,
{
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            elements: Default::default(),
            errors: Default::default(),
            _phantom: PhantomData,
        }
    }

    pub fn take(self) -> Result<Vec<B::Out>, ErrorsVec> {
        if self.errors.is_empty() {
            Ok(self.elements)
        } else {
            Err(self.errors.into())
        }
    }
}

impl<B> VisitMut for JustOnceFnArgAttributeExtractor<'_, B>
where
    B: AttrBuilder<Pat>,
{
    fn visit_fn_arg_mut(&mut self, node: &mut FnArg) {
        let pat = match node.maybe_pat() {
            Some(pat) => pat.clone(),
            None => return,
        };
        if let FnArg::Typed(ref mut arg) = node {
            // Extract interesting attributes
            let attrs = std::mem::take(&mut arg.attrs);
            let (extracted, remain): (Vec<_>, Vec<_>) =
                attrs.into_iter().partition(|a| attr_is(a, self.name));

            arg.attrs = remain;

            let mut extracted = extracted.into_iter();
            if let Some(attr) = extracted.next() {
                match B::build(attr, &pat) {
                    Ok(out) => self.elements.push(out),
                    Err(e) => self.errors.push(e),
                }
            }
            self.errors.extend(extracted.map(|attr| {
                syn::Error::new_spanned(
                    attr.into_token_stream(),
                    messages::use_more_than_once(self.name),
                )
            }));
        }
    }
}
