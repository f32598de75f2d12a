//! Method Mock Builder.
//!
//! Each interface method expands to the full test-double surface: the
//! method itself (counter bump, hook invocation, stubbed return), a
//! `*_calls_count` field, a `*_called` predicate, a `*_closure` invocation
//! hook, and — for returning methods — a `*_return_value` stub field. The
//! hook sees the exact forwarded arguments; its result is always discarded,
//! the stub field is the sole source of the return value.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::classify::{classify, TypeExpr};
use crate::expand::{combine, MemberBlock};
use crate::names;
use crate::parse::MethodDecl;
use crate::substitute::TypeCtx;

pub fn build(method: &MethodDecl, ctx: &TypeCtx) -> syn::Result<MemberBlock> {
    let name = &method.name;
    let mut error: Option<syn::Error> = None;

    let mut params: Vec<(Ident, TypeExpr)> = Vec::new();
    for param in &method.params {
        let owner = format!("parameter `{}` of `{name}`", param.name);
        match classify(&param.ty, &owner) {
            Ok(expr) => params.push((param.name.clone(), expr)),
            Err(err) => combine(&mut error, err),
        }
    }

    let ret = match &method.ret {
        Some(raw) => match classify(raw, &format!("return type of `{name}`")) {
            Ok(expr) => Some(expr),
            Err(err) => {
                combine(&mut error, err);
                None
            }
        },
        None => None,
    };

    if let Some(error) = error {
        return Err(error);
    }

    let attrs = &method.attrs;
    let calls_count = names::calls_count_field(name);
    let called = names::called_predicate(name);
    let closure = names::closure_field(name);
    let return_value = names::return_value_field(name);

    let trait_params: Vec<TokenStream> = params
        .iter()
        .map(|(param, expr)| {
            let ty = ctx.trait_surface(expr);
            quote!(#param: #ty)
        })
        .collect();
    let mock_params: Vec<TokenStream> = params
        .iter()
        .map(|(param, expr)| {
            let ty = ctx.mock_surface(expr);
            quote!(#param: #ty)
        })
        .collect();
    let trait_ret = ret.as_ref().map(|expr| {
        let ty = ctx.trait_surface(expr);
        quote!(-> #ty)
    });
    let mock_ret = ret.as_ref().map(|expr| {
        let ty = ctx.mock_surface(expr);
        quote!(-> #ty)
    });

    let trait_items = quote! {
        #(#attrs)*
        fn #name(&mut self #(, #trait_params)*) #trait_ret;
    };

    let closure_params: Vec<TokenStream> =
        params.iter().map(|(_, expr)| ctx.mock_surface(expr)).collect();
    let closure_ty = match &ret {
        Some(expr) => {
            let ty = ctx.mock_surface(expr);
            quote!(::std::boxed::Box<dyn ::std::ops::FnMut(#(#closure_params),*) -> #ty>)
        }
        None => quote!(::std::boxed::Box<dyn ::std::ops::FnMut(#(#closure_params),*)>),
    };

    let count_doc = format!("Number of times `{name}` has been invoked.");
    let closure_doc = format!("Invocation hook for `{name}`; its result is discarded.");
    let mut struct_fields = quote! {
        #[doc = #count_doc]
        pub #calls_count: usize,
        #[doc = #closure_doc]
        pub #closure: ::std::option::Option<#closure_ty>,
    };
    if let Some(expr) = &ret {
        let storage = ctx.mock_storage(expr);
        let stub_doc = format!("Stubbed value returned by `{name}`.");
        struct_fields.extend(quote! {
            #[doc = #stub_doc]
            pub #return_value: #storage,
        });
    }

    let called_doc = format!("True once `{name}` has been invoked at least once.");
    let inherent_items = quote! {
        #[doc = #called_doc]
        pub fn #called(&self) -> bool {
            self.#calls_count > 0
        }
    };

    let forwarded: Vec<&Ident> = params.iter().map(|(param, _)| param).collect();
    // `__mock_hook` keeps the binding clear of user parameter names.
    let invoke_hook = match &ret {
        Some(_) => quote! {
            if let Some(__mock_hook) = self.#closure.as_mut() {
                let _ = __mock_hook(#(#forwarded),*);
            }
        },
        None => quote! {
            if let Some(__mock_hook) = self.#closure.as_mut() {
                __mock_hook(#(#forwarded),*);
            }
        },
    };
    let return_stub = match &ret {
        Some(TypeExpr::Optional(_)) => quote!(self.#return_value.clone()),
        Some(TypeExpr::Named(_)) | Some(TypeExpr::ImplicitlyUnwrapped(_)) => {
            let unstubbed = format!("{name}: return value has not been stubbed");
            quote!(self.#return_value.clone().expect(#unstubbed))
        }
        None => quote!(),
    };

    let impl_items = quote! {
        fn #name(&mut self #(, #mock_params)*) #mock_ret {
            self.#calls_count += 1;
            #invoke_hook
            #return_stub
        }
    };

    Ok(MemberBlock {
        trait_items,
        struct_fields,
        inherent_items,
        impl_items,
    })
}
