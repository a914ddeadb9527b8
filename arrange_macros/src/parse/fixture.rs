/// `fixture`'s related data and parsing
use syn::{
    parse::{Parse, ParseStream},
    ItemFn,
};

use super::{ExtendWithFunctionAttrs, InjectionData};
use crate::error::ErrorsVec;

#[derive(PartialEq, Debug, Default)]
pub(crate) struct FixtureInfo {
    pub(crate) data: InjectionData,
}

impl Parse for FixtureInfo {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            Ok(Default::default())
        } else {
            Err(input.error(
                "#[fixture] takes no arguments: use #[from(name)] on an argument to pick a fixture",
            ))
        }
    }
}

impl ExtendWithFunctionAttrs for FixtureInfo {
    fn extend_with_function_attrs(
        &mut self,
        item_fn: &mut ItemFn,
    ) -> std::result::Result<(), ErrorsVec> {
        self.data.extend_with_function_attrs(item_fn)
    }
}
