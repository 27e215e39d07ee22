use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, ItemFn, ReturnType, Type};

/// Expands the `#[mmrag_runtime::main]` attribute macro.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            &input.sig.ident,
            "The #[mmrag_runtime::main] attribute can only be used on async functions",
        )
        .to_compile_error();
    }

    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.output,
            "The #[mmrag_runtime::main] attribute requires a Result return type",
        )
        .to_compile_error();
    }

    let profile = match parse_profile(args) {
        Ok(profile) => profile,
        Err(err) => return err,
    };

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let rt = ::mmrag_runtime::build_runtime(::mmrag_runtime::RuntimeProfile::#profile)?;
            rt.block_on(async #block)
        }
    }
}

fn parse_profile(args: TokenStream) -> Result<TokenStream, TokenStream> {
    if args.is_empty() {
        return Ok(quote! { Default });
    }

    let ident: syn::Ident = syn::parse2(args).map_err(|err| err.to_compile_error())?;
    match ident.to_string().as_str() {
        "server" => Ok(quote! { Server }),
        "compact" => Ok(quote! { Compact }),
        "default" => Ok(quote! { Default }),
        _ => Err(Error::new_spanned(
            ident,
            "Unknown runtime profile. Use: server, compact, or default",
        )
        .to_compile_error()),
    }
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = &**ty else {
        return false;
    };
    path.path.segments.last().is_some_and(|seg| seg.ident == "Result")
}
