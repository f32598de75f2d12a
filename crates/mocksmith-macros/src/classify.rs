//! Type Classifier: one rule set for property types, parameter types, and
//! return types.
//!
//! A type position is either a bare type name, an optional (`T?`), or an
//! implicitly-unwrapped optional (`T!`). Exactly one level of wrapping is
//! recognized; everything else (generic applications, paths, tuples,
//! function types, nested wrappers) is an unsupported shape and errors
//! loudly rather than degrading the generated code.

use proc_macro2::TokenTree;
use syn::Ident;

use crate::parse::RawType;

/// Classified type expression. The identifier is the base type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `T` — a required value.
    Named(Ident),
    /// `T?` — absence is a valid observable state.
    Optional(Ident),
    /// `T!` — may be absent, but every read asserts presence.
    ImplicitlyUnwrapped(Ident),
}

impl TypeExpr {
    pub fn base(&self) -> &Ident {
        match self {
            TypeExpr::Named(base)
            | TypeExpr::Optional(base)
            | TypeExpr::ImplicitlyUnwrapped(base) => base,
        }
    }
}

/// Classify one raw type position. `owner` names the member the type belongs
/// to and only feeds diagnostics.
pub fn classify(raw: &RawType, owner: &str) -> syn::Result<TypeExpr> {
    let tokens: Vec<TokenTree> = raw.tokens.clone().into_iter().collect();

    match tokens.as_slice() {
        [TokenTree::Ident(base)] => Ok(TypeExpr::Named(base.clone())),
        [TokenTree::Ident(base), TokenTree::Punct(mark)] if mark.as_char() == '?' => {
            Ok(TypeExpr::Optional(base.clone()))
        }
        [TokenTree::Ident(base), TokenTree::Punct(mark)] if mark.as_char() == '!' => {
            Ok(TypeExpr::ImplicitlyUnwrapped(base.clone()))
        }
        _ => Err(syn::Error::new(
            raw.span,
            format!(
                "mock!: unsupported type shape for {owner}: \
                 expected a bare type name, `T?`, or `T!`"
            ),
        )),
    }
}
