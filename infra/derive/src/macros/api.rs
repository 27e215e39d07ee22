use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::{Attribute, ItemFn, ItemStruct, Lit, LitStr, Meta};

/// Expands the `#[api_model]` attribute macro.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    let rename_all = match parse_rename_all(args) {
        Ok(rename_all) => rename_all,
        Err(err) => return err.to_compile_error(),
    };
    let existing_rename = match serde_rename_all(&input.attrs) {
        Ok(existing) => existing,
        Err(err) => return err.to_compile_error(),
    };

    let derived = derived_names(&input.attrs);
    let mut derives = Vec::new();
    if !derived.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !derived.contains("Serialize") {
        derives.push(quote! { ::serde::Serialize });
    }
    if !derived.contains("Deserialize") {
        derives.push(quote! { ::serde::Deserialize });
    }
    let derive_attr =
        if derives.is_empty() { quote! {} } else { quote! { #[derive(#(#derives),*)] } };

    let schema_attr = if derived.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let wanted =
        rename_all.unwrap_or_else(|| LitStr::new("camelCase", proc_macro2::Span::call_site()));
    let rename_attr = match existing_rename {
        Some(existing) if existing.value() != wanted.value() => {
            return syn::Error::new_spanned(
                existing,
                "Conflicting serde rename_all; drop it or pass the same value to api_model",
            )
            .to_compile_error();
        },
        Some(_) => quote! {},
        None => quote! { #[serde(rename_all = #wanted)] },
    };

    quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #input
    }
}

/// Expands the `#[api_handler]` attribute macro.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn parse_rename_all(args: TokenStream) -> syn::Result<Option<LitStr>> {
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let mut rename_all = None;

    for meta in parser.parse2(args)? {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(meta, "Expected `rename_all = \"...\"`"));
        };
        if !name_value.path.is_ident("rename_all") {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "Unsupported argument; expected rename_all",
            ));
        }
        if rename_all.is_some() {
            return Err(syn::Error::new_spanned(name_value, "Duplicate argument"));
        }
        let syn::Expr::Lit(syn::ExprLit { lit: Lit::Str(lit), .. }) = &name_value.value else {
            return Err(syn::Error::new_spanned(
                &name_value.value,
                "rename_all must be a string literal",
            ));
        };
        rename_all = Some(lit.clone());
    }

    Ok(rename_all)
}

fn serde_rename_all(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut rename_all = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                rename_all = Some(meta.value()?.parse::<LitStr>()?);
            } else if meta.input.peek(syn::Token![=]) {
                let _: syn::Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(rename_all)
}

fn derived_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut names = FxHashSet::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                names.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }
    names
}
