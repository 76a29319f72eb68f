use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Result};

/// Expands `#[derive(EnumName)]`.
///
/// One comparison arm per variant; the spelling is assembled from
/// `module_path!` so it matches what a signature probe of the enum type
/// resolves to, qualifier for qualifier.
pub(crate) fn expand(ast: &DeriveInput) -> Result<TokenStream> {
    let Data::Enum(data) = &ast.data else {
        return Err(Error::new_spanned(
            &ast.ident,
            "`EnumName` can only be derived for enums",
        ));
    };
    if !ast.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &ast.generics,
            "`EnumName` does not support generic enums",
        ));
    }

    let ident = &ast.ident;

    let mut arms = TokenStream::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                "`EnumName` requires unit variants",
            ));
        }
        let v = &variant.ident;
        arms.extend(quote! {
            if raw == #ident::#v as i64 {
                return ::core::option::Option::Some(::core::concat!(
                    ::core::module_path!(), "::",
                    ::core::stringify!(#ident), "::",
                    ::core::stringify!(#v),
                ));
            }
        });
    }

    // Without variants the parameter would be unused.
    let raw_param = if data.variants.is_empty() {
        quote!(_raw)
    } else {
        quote!(raw)
    };

    let registration = registration(ident);

    Ok(quote! {
        impl ::versa_frozen::EnumName for #ident {
            fn spell(#raw_param: i64) -> ::core::option::Option<&'static str> {
                #arms
                ::core::option::Option::None
            }
        }

        #registration
    })
}

#[cfg(feature = "auto_register")]
fn registration(ident: &syn::Ident) -> TokenStream {
    quote! {
        ::versa_frozen::registry::inventory::submit! {
            ::versa_frozen::registry::EnumRegistration::of::<#ident>()
        }
    }
}

#[cfg(not(feature = "auto_register"))]
fn registration(_ident: &syn::Ident) -> TokenStream {
    TokenStream::new()
}
