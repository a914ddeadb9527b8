use syn::parse_quote;

cfg_if::cfg_if! {
    if #[cfg(feature = "crate-name")] {
        use quote::format_ident;

        /// The path of the `arrange` crate as seen by the crate that uses the macros: it can
        /// be renamed in `Cargo.toml`.
        pub fn crate_name() -> syn::Path {
            use proc_macro_crate::FoundCrate;

            match proc_macro_crate::crate_name("arrange") {
                Ok(FoundCrate::Name(name)) => {
                    let myself = format_ident!("{name}");
                    parse_quote! { #myself }
                }
                Ok(FoundCrate::Itself) | Err(_) => parse_quote! { arrange },
            }
        }
    } else {
        pub fn crate_name() -> syn::Path {
            parse_quote! { arrange }
        }
    }
}
