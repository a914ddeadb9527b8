use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{ItemFn, LitStr, Visibility};

use super::{crate_resolver::crate_name, inject};
use crate::parse::arrange::{ArrangeInfo, ShouldPanic};
use crate::resolver::{self, ByName};
use crate::utils::has_test_attribute;

pub(crate) fn render(mut test: ItemFn, info: ArrangeInfo) -> TokenStream {
    let arrange = crate_name();
    let attrs = std::mem::take(&mut test.attrs);
    let visibility = std::mem::replace(&mut test.vis, Visibility::Inherited);
    let name = test.sig.ident.clone();
    let test_name = LitStr::new(&name.to_string(), name.span());
    let registry = info.registry();
    let resolver = (resolver::fixtures::get(info.data.fixtures()), ByName);
    let injected = inject::resolve_arguments(test.sig.inputs.iter(), &resolver);
    let arguments = format_ident!("__arguments");
    let take = inject::take_arguments(&arguments, &injected);
    let parameters = injected.iter().map(|i| &i.fixture);
    let bindings = injected.iter().map(|i| &i.binding);
    let test_attr = (!has_test_attribute(&attrs)).then(|| quote! { #[test] });
    let should_panic = match &info.should_panic {
        None => quote! { #arrange::ShouldPanic::No },
        Some(ShouldPanic::Any) => quote! { #arrange::ShouldPanic::Yes },
        Some(ShouldPanic::Expected(expected)) => {
            quote! { #arrange::ShouldPanic::Expected(#expected) }
        }
    };

    quote! {
        #[allow(non_camel_case_types, dead_code)]
        #visibility struct #name {}

        #[allow(dead_code)]
        impl #name {
            pub const NAME: &'static str = #test_name;
            pub const PARAMETERS: &'static [&'static str] = &[#(#parameters),*];

            pub fn case() -> #arrange::TestCase {
                #test

                #arrange::TestCase::new(
                    Self::NAME,
                    Self::PARAMETERS,
                    |#arguments: &mut #arrange::Arguments| {
                        #take
                        #name(#(#bindings),*);
                        ::core::result::Result::Ok(())
                    }
                )
            }
        }

        #test_attr
        #(#attrs)*
        #visibility fn #name() {
            #arrange::run_test(#registry(), &#name::case(), #should_panic)
        }
    }
}
