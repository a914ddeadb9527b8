use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{ItemFn, LitStr};

use super::{crate_resolver::crate_name, inject};
use crate::parse::fixture::FixtureInfo;
use crate::resolver::{self, ByName};

pub(crate) fn render(fixture: ItemFn, info: FixtureInfo) -> TokenStream {
    let arrange = crate_name();
    let name = &fixture.sig.ident;
    let fixture_name = LitStr::new(&name.to_string(), name.span());
    let visibility = &fixture.vis;
    let output = &fixture.sig.output;
    let orig_attrs = &fixture.attrs;
    let resolver = (resolver::fixtures::get(info.data.fixtures()), ByName);
    let injected = inject::resolve_arguments(fixture.sig.inputs.iter(), &resolver);
    let arguments = format_ident!("__arguments");
    let take = inject::take_arguments(&arguments, &injected);
    let dependencies = injected.iter().map(|i| &i.fixture);
    let bindings = injected.iter().map(|i| &i.binding).collect::<Vec<_>>();
    let types = injected.iter().map(|i| &i.ty);

    quote! {
        #[allow(non_camel_case_types)]
        #visibility struct #name {}

        impl #name {
            pub const NAME: &'static str = #fixture_name;
            pub const DEPENDENCIES: &'static [&'static str] = &[#(#dependencies),*];

            #(#orig_attrs)*
            pub fn get(#(#bindings: #types),*) #output {
                #name(#(#bindings),*)
            }

            pub fn provider() -> #arrange::Provider {
                #arrange::Provider::new(Self::DEPENDENCIES, |#arguments: &mut #arrange::Arguments| {
                    #take
                    ::core::result::Result::Ok(Self::get(#(#bindings),*))
                })
            }

            pub fn register(
                registry: &mut #arrange::FixtureRegistry,
            ) -> ::core::result::Result<(), #arrange::RegistryError> {
                registry.register(Self::NAME, Self::provider())
            }
        }

        #[allow(dead_code)]
        #fixture
    }
}

#[cfg(test)]
mod should {
    use syn::{
        parse::{Parse, ParseStream},
        Expr, Ident, ImplItem, ImplItemConst, ImplItemFn, ItemImpl, ItemStruct, Result,
    };

    use super::*;
    use crate::parse::ExtendWithFunctionAttrs;
    use crate::test::{assert_eq, *};

    #[derive(Clone)]
    struct FixtureOutput {
        orig: ItemFn,
        fixture: ItemStruct,
        core_impl: ItemImpl,
    }

    impl Parse for FixtureOutput {
        fn parse(input: ParseStream) -> Result<Self> {
            Ok(FixtureOutput {
                fixture: input.parse()?,
                core_impl: input.parse()?,
                orig: input.parse()?,
            })
        }
    }

    impl FixtureOutput {
        fn constant(&self, name: &str) -> Expr {
            self.core_impl
                .items
                .iter()
                .find_map(|item| match item {
                    ImplItem::Const(ImplItemConst { ident, expr, .. }) if ident == name => {
                        Some(expr.clone())
                    }
                    _ => None,
                })
                .unwrap_or_else(|| panic!("No const {name}"))
        }

        fn method(&self, name: &str) -> ImplItemFn {
            self.core_impl
                .items
                .iter()
                .find_map(|item| match item {
                    ImplItem::Fn(f) if f.sig.ident == name => Some(f.clone()),
                    _ => None,
                })
                .unwrap_or_else(|| panic!("No method {name}"))
        }
    }

    fn parse_fixture<S: AsRef<str>>(code: S) -> (ItemFn, FixtureOutput) {
        let mut item_fn: ItemFn = code.as_ref().ast();
        let mut info = FixtureInfo::default();
        info.extend_with_function_attrs(&mut item_fn).unwrap();

        let tokens = render(item_fn.clone(), info);
        (item_fn, tokens.ast())
    }

    #[test]
    fn keep_the_original_function() {
        let (item_fn, out) = parse_fixture("pub fn fruit_bowl() -> Vec<Fruit> { vec![] }");

        assert_eq!(item_fn.sig, out.orig.sig);
        assert_eq!(item_fn.block, out.orig.block);
    }

    #[test]
    fn remove_from_attributes_from_the_original_function() {
        let (_, out) = parse_fixture("fn salad(#[from(fruit_bowl)] bowl: Vec<Fruit>) -> Salad {}");

        assert_eq!(
            out.orig.sig,
            "fn salad(bowl: Vec<Fruit>) -> Salad {}".ast::<ItemFn>().sig
        );
    }

    #[rstest]
    #[case::private("fn fruit_bowl() {}", syn::Visibility::Inherited)]
    #[case::public("pub fn fruit_bowl() {}", "pub".ast())]
    #[case::restricted("pub(crate) fn fruit_bowl() {}", "pub(crate)".ast())]
    fn define_a_struct_with_the_fixture_name_and_visibility(
        #[case] code: &str,
        #[case] expected: syn::Visibility,
    ) {
        let (_, out) = parse_fixture(code);

        assert_eq!(ident("fruit_bowl"), out.fixture.ident);
        assert_eq!(expected, out.fixture.vis);
        assert_eq!(out.fixture.ident, type_ident(&out.core_impl));
    }

    #[test]
    fn expose_name_and_dependencies() {
        let (_, out) = parse_fixture(
            "fn salad(#[from(fruit_bowl)] bowl: Vec<Fruit>, mut knife: Knife, (a, b): (u8, u8)) {}",
        );

        assert_eq!(expr(r#""salad""#), out.constant("NAME"));
        assert_eq!(
            expr(r#"&["fruit_bowl", "knife"]"#),
            out.constant("DEPENDENCIES")
        );
    }

    #[test]
    fn forward_get_to_the_fixture_function() {
        let (_, out) = parse_fixture(
            "fn salad(#[from(fruit_bowl)] mut bowl: Vec<Fruit>, knife: Knife) -> Salad {}",
        );

        let get = out.method("get");

        assert_eq!(
            get.sig,
            "fn get(bowl: Vec<Fruit>, knife: Knife) -> Salad {}"
                .ast::<ItemFn>()
                .sig
        );
        assert_eq!(get.block, "{ salad(bowl, knife) }".ast());
    }

    #[test]
    fn copy_original_attributes_to_get() {
        let (item_fn, out) = parse_fixture(
            r#"
            /// The fruit
            #[must_use]
            fn fruit_bowl() -> Vec<Fruit> {}
            "#,
        );

        assert_eq!(2, item_fn.attrs.len());
        assert_eq!(item_fn.attrs, out.method("get").attrs);
    }

    #[test]
    fn take_dependencies_in_provider() {
        let (_, out) = parse_fixture(
            "fn salad(#[from(fruit_bowl)] bowl: Vec<Fruit>, knife: Knife) -> Salad {}",
        );

        let provider = out.method("provider");

        assert_eq!(
            provider.block,
            r#"{
                arrange::Provider::new(Self::DEPENDENCIES, |__arguments: &mut arrange::Arguments| {
                    let bowl = __arguments.take::<Vec<Fruit>>("fruit_bowl")?;
                    let knife = __arguments.take::<Knife>("knife")?;
                    ::core::result::Result::Ok(Self::get(bowl, knife))
                })
            }"#
            .ast()
        );
    }

    #[test]
    fn register_under_its_name() {
        let (_, out) = parse_fixture("fn fruit_bowl() -> Vec<Fruit> {}");

        let register = out.method("register");

        assert_eq!(
            register.block,
            "{ registry.register(Self::NAME, Self::provider()) }".ast()
        );
    }

    fn type_ident(item_impl: &ItemImpl) -> Ident {
        match item_impl.self_ty.as_ref() {
            syn::Type::Path(tp) => tp.path.get_ident().unwrap().clone(),
            other => panic!("Unexpected self type {other:?}"),
        }
    }
}
