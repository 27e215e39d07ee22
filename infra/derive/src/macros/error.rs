use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Fields, FieldsNamed, Ident, Type, Variant};

/// What the generator needs to know about one enum variant.
struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg_attrs: Vec<&'a Attribute>,
}

impl ErrorVariant<'_> {
    fn is_internal(&self) -> bool {
        self.ident == "Internal"
    }
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("mmrag_error can only be applied to enums"); };
    };

    let variants = match data.variants.iter().map(parse_variant).collect::<Result<Vec<_>, _>>() {
        Ok(variants) => variants,
        Err(err) => return err.to_compile_error(),
    };

    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);

    let derives = missing_derives(&input.attrs);
    let context_trait = context_trait(name, &ext, &variants);
    let context_note = context_note(name, &variants);
    let source_impls = variants.iter().filter(|v| !v.is_internal()).filter_map(|v| {
        let (field, ty) = v.source?;
        Some(source_impl(name, &ext, v, field, ty))
    });
    let internal_impls = variants.iter().find(|v| v.is_internal()).map(|v| internal_impls(name, v));

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #context_trait
        #context_note
        #(#source_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    }
}

fn parse_variant(variant: &Variant) -> syn::Result<ErrorVariant<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "mmrag_error variants must use named fields (`message`, `source`, `context`)",
        ));
    };

    let has_context = context_field(fields)?;
    let source = fields
        .named
        .iter()
        .find(|field| {
            field.ident.as_ref().is_some_and(|ident| ident == "source")
                || has_attr(&field.attrs, "source")
                || has_attr(&field.attrs, "from")
        })
        .and_then(|field| field.ident.as_ref().map(|ident| (ident, &field.ty)));

    if source.is_some() && !has_context {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "mmrag_error variants with a source need `context: Option<Cow<'static, str>>`",
        ));
    }

    Ok(ErrorVariant {
        ident: &variant.ident,
        source,
        has_context,
        cfg_attrs: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect(),
    })
}

fn context_field(fields: &FieldsNamed) -> syn::Result<bool> {
    let Some(field) =
        fields.named.iter().find(|field| field.ident.as_ref().is_some_and(|i| i == "context"))
    else {
        return Ok(false);
    };

    if is_optional_static_cow(&field.ty) {
        Ok(true)
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn missing_derives(attrs: &[Attribute]) -> TokenStream {
    let derived = derived_names(attrs);
    let mut tokens = Vec::new();
    if !derived.contains("Debug") {
        tokens.push(quote! { Debug });
    }
    if !derived.contains("Error") {
        tokens.push(quote! { ::thiserror::Error });
    }
    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}

fn context_trait(name: &Ident, ext: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let cfg_attrs = &v.cfg_attrs;
        let ident = v.ident;
        quote! { #(#cfg_attrs)* #name::#ident { context: c, .. } => *c = Some(context.into()), }
    });

    quote! {
        pub trait #ext<T> {
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut e| {
                    match &mut e {
                        #(#arms)*
                        _ => {}
                    }
                    e
                })
            }
        }
    }
}

fn context_note(name: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let cfg_attrs = &v.cfg_attrs;
        let ident = v.ident;
        quote! { #(#cfg_attrs)* Self::#ident { context, .. } => context.as_deref(), }
    });

    quote! {
        #[automatically_derived]
        impl #name {
            /// Returns the context attached through `.context(...)`, if any.
            #[must_use]
            #[allow(unreachable_patterns)]
            pub fn context_note(&self) -> Option<&str> {
                match self {
                    #(#arms)*
                    _ => None,
                }
            }
        }
    }
}

fn source_impl(
    name: &Ident,
    ext: &Ident,
    variant: &ErrorVariant<'_>,
    field: &Ident,
    ty: &Type,
) -> TokenStream {
    let ident = variant.ident;
    let cfg_attrs = &variant.cfg_attrs;

    quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#ident { #field, context: None } }
        }

        #(#cfg_attrs)*
        impl<T> #ext<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    }
}

fn internal_impls(name: &Ident, variant: &ErrorVariant<'_>) -> TokenStream {
    let cfg_attrs = &variant.cfg_attrs;

    quote! {
        #(#cfg_attrs)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self { Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None } }
        }
        #(#cfg_attrs)*
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self { Self::Internal { message: std::borrow::Cow::Owned(s), context: None } }
        }
    }
}

fn has_attr(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
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

/// Matches `Option<Cow<'static, str>>` with any path prefix on `Option`/`Cow`.
fn is_optional_static_cow(ty: &Type) -> bool {
    let Some(inner) = single_generic(ty, "Option") else {
        return false;
    };
    let Type::Path(path) = inner else {
        return false;
    };
    let Some(cow) = path.path.segments.last() else {
        return false;
    };
    if cow.ident != "Cow" {
        return false;
    }
    let syn::PathArguments::AngleBracketed(args) = &cow.arguments else {
        return false;
    };
    let mut args = args.args.iter();
    let lifetime_ok =
        matches!(args.next(), Some(syn::GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let str_ok = matches!(
        args.next(),
        Some(syn::GenericArgument::Type(Type::Path(p)))
            if p.path.segments.last().is_some_and(|s| s.ident == "str")
    );
    lifetime_ok && str_ok
}

fn single_generic<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
