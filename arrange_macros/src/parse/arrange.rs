/// `arrange`'s related data and parsing
use syn::{
    parse::{Parse, ParseStream},
    parse_quote, Attribute, Expr, ExprLit, ItemFn, Lit, LitStr, Meta, Path,
};

use super::{ExtendWithFunctionAttrs, InjectionData};
use crate::error::{messages, ErrorsVec};
use crate::utils::attr_is;

pub(crate) const SHOULD_PANIC_ATTR: &str = "should_panic";

#[derive(PartialEq, Debug, Default)]
pub(crate) struct ArrangeInfo {
    /// Function that collects the fixtures for this test.
    pub(crate) registry: Option<Path>,
    pub(crate) data: InjectionData,
    /// Taken from the test attributes: the runtime checks it, not libtest.
    pub(crate) should_panic: Option<ShouldPanic>,
}

/// A `#[should_panic]` attribute, with its optional expected message.
#[derive(PartialEq, Debug, Clone)]
pub(crate) enum ShouldPanic {
    Any,
    Expected(LitStr),
}

impl ArrangeInfo {
    pub(crate) fn registry(&self) -> Path {
        self.registry
            .clone()
            .unwrap_or_else(|| parse_quote! { registry })
    }
}

impl Parse for ArrangeInfo {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Ok(Default::default());
        }
        let registry = input.parse()?;
        if !input.is_empty() {
            return Err(input.error(
                "expected just the path of the function that collects the fixtures",
            ));
        }
        Ok(Self {
            registry: Some(registry),
            ..Default::default()
        })
    }
}

impl ExtendWithFunctionAttrs for ArrangeInfo {
    fn extend_with_function_attrs(
        &mut self,
        item_fn: &mut ItemFn,
    ) -> std::result::Result<(), ErrorsVec> {
        let mut errors = Vec::new();
        if let Err(mut data_errors) = self.data.extend_with_function_attrs(item_fn) {
            errors.append(&mut data_errors);
        }
        match extract_should_panic(item_fn) {
            Ok(should_panic) => self.should_panic = should_panic,
            Err(mut should_panic_errors) => errors.append(&mut should_panic_errors),
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }
}

/// Remove `#[should_panic]` from the function attributes.
fn extract_should_panic(item_fn: &mut ItemFn) -> Result<Option<ShouldPanic>, ErrorsVec> {
    let (extracted, remain): (Vec<_>, Vec<_>) = std::mem::take(&mut item_fn.attrs)
        .into_iter()
        .partition(|a| attr_is(a, SHOULD_PANIC_ATTR));
    item_fn.attrs = remain;

    let mut extracted = extracted.into_iter();
    let should_panic = extracted.next().map(|attr| parse_should_panic(&attr));
    let mut errors = extracted
        .map(|attr| {
            syn::Error::new_spanned(attr, messages::use_more_than_once(SHOULD_PANIC_ATTR))
        })
        .collect::<Vec<_>>();

    match should_panic {
        Some(Err(e)) => errors.insert(0, e),
        Some(Ok(should_panic)) if errors.is_empty() => return Ok(Some(should_panic)),
        None => return Ok(None),
        Some(Ok(_)) => {}
    }
    Err(errors.into())
}

fn parse_should_panic(attr: &Attribute) -> syn::Result<ShouldPanic> {
    match &attr.meta {
        Meta::Path(_) => Ok(ShouldPanic::Any),
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(expected),
                ..
            }) => Ok(ShouldPanic::Expected(expected.clone())),
            other => Err(syn::Error::new_spanned(other, messages::SHOULD_PANIC)),
        },
        Meta::List(_) => {
            let mut expected = None;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("expected") {
                    expected = Some(meta.value()?.parse::<LitStr>()?);
                    Ok(())
                } else {
                    Err(meta.error(messages::SHOULD_PANIC))
                }
            })?;
            Ok(expected.map_or(ShouldPanic::Any, ShouldPanic::Expected))
        }
    }
}
