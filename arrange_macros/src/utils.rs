/// Contains some unsorted functions used across others modules
///
use quote::format_ident;
use syn::{Attribute, FnArg, ItemFn, ReturnType, Type};

/// Return an iterator over fn arguments.
///
pub(crate) fn fn_args(item_fn: &ItemFn) -> impl Iterator<Item = &FnArg> {
    item_fn.sig.inputs.iter()
}

pub(crate) fn attr_is(attr: &Attribute, name: &str) -> bool {
    attr.path().is_ident(&format_ident!("{}", name))
}

pub(crate) fn attr_ends_with(attr: &Attribute, name: &str) -> bool {
    attr.path()
        .segments
        .iter()
        .last()
        .map(|segment| segment.ident == name && segment.arguments.is_none())
        .unwrap_or_default()
}

/// `#[test]`, `#[tokio::test]` and alike: the function is already a test.
pub(crate) fn has_test_attribute(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| attr_ends_with(attr, "test"))
}

pub(crate) fn is_unit_return(output: &ReturnType) -> bool {
    match output {
        ReturnType::Default => true,
        ReturnType::Type(_, t) => {
            matches!(t.as_ref(), Type::Tuple(tuple) if tuple.elems.is_empty())
        }
    }
}
