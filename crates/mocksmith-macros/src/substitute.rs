//! Associated-Type Resolver.
//!
//! An interface may declare one associated-type placeholder (`type Item;`).
//! When the invocation also supplies `#[mock(associated_type = "...")]` with
//! non-empty text, the two combine into a substitution rule: mock-side
//! renderings of the placeholder use the concrete type. Without the rule the
//! placeholder name passes through verbatim — the conformance impl then only
//! resolves if the caller has a type of that name in scope, matching the
//! pass-through behavior of the interface this was modeled on.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::classify::TypeExpr;
use crate::parse::{MacroArgs, Member};

/// placeholder name → concrete bound type.
#[derive(Debug)]
pub struct Substitution {
    pub placeholder: Ident,
    pub concrete: syn::Type,
}

/// Type-rendering context threaded through both builders.
///
/// `placeholder` is set whenever the interface declares one, independent of
/// whether a substitution was supplied; trait-side rendering needs it to
/// spell the placeholder as `Self::Name`.
#[derive(Debug, Default)]
pub struct TypeCtx {
    pub placeholder: Option<Ident>,
    pub substitution: Option<Substitution>,
}

/// Produce the rendering context for one expansion. Errors on a second
/// placeholder member (a single associated type is supported) and on an
/// `associated_type` string that is not a parseable Rust type.
pub fn resolve(args: &MacroArgs, members: &[Member]) -> syn::Result<TypeCtx> {
    let mut placeholder: Option<Ident> = None;
    for member in members {
        if let Member::AssociatedType(assoc) = member {
            if placeholder.is_some() {
                return Err(syn::Error::new(
                    assoc.name.span(),
                    "mock!: only one associated type is supported",
                ));
            }
            placeholder = Some(assoc.name.clone());
        }
    }

    let substitution = match (&placeholder, &args.associated_type) {
        (Some(name), Some(lit)) if !lit.value().is_empty() => {
            let concrete: syn::Type = syn::parse_str(&lit.value()).map_err(|_| {
                syn::Error::new(
                    lit.span(),
                    "mock!: `associated_type` must be a valid Rust type",
                )
            })?;
            Some(Substitution {
                placeholder: name.clone(),
                concrete,
            })
        }
        _ => None,
    };

    Ok(TypeCtx {
        placeholder,
        substitution,
    })
}

impl TypeCtx {
    /// Base type as it appears in the rendered trait: the placeholder is an
    /// associated type there, so it is spelled `Self::Name`.
    pub fn trait_base(&self, base: &Ident) -> TokenStream {
        match &self.placeholder {
            Some(placeholder) if base == placeholder => quote!(Self::#base),
            _ => quote!(#base),
        }
    }

    /// Base type as it appears in the mock (struct fields, inherent items,
    /// conformance impl): the substitution's concrete type, or the name
    /// verbatim when no rule applies.
    pub fn mock_base(&self, base: &Ident) -> TokenStream {
        match &self.substitution {
            Some(rule) if *base == rule.placeholder => {
                let concrete = &rule.concrete;
                quote!(#concrete)
            }
            _ => quote!(#base),
        }
    }

    /// Signature-position rendering in the trait. Optional wraps in
    /// `Option`; implicitly-unwrapped surfaces as the bare type (every read
    /// asserts presence, so callers never see the absence).
    pub fn trait_surface(&self, expr: &TypeExpr) -> TokenStream {
        let base = self.trait_base(expr.base());
        match expr {
            TypeExpr::Optional(_) => quote!(::std::option::Option<#base>),
            TypeExpr::Named(_) | TypeExpr::ImplicitlyUnwrapped(_) => base,
        }
    }

    /// Signature-position rendering in the mock.
    pub fn mock_surface(&self, expr: &TypeExpr) -> TokenStream {
        let base = self.mock_base(expr.base());
        match expr {
            TypeExpr::Optional(_) => quote!(::std::option::Option<#base>),
            TypeExpr::Named(_) | TypeExpr::ImplicitlyUnwrapped(_) => base,
        }
    }

    /// Storage-position rendering: every mock field stores `Option<T>` so
    /// "not yet set" exists for all three shapes.
    pub fn mock_storage(&self, expr: &TypeExpr) -> TokenStream {
        let base = self.mock_base(expr.base());
        quote!(::std::option::Option<#base>)
    }
}
