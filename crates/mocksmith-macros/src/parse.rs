//! Parsing of the `mock!` invocation: the optional `#[mock(...)]` argument
//! attribute and the interface declaration grammar.
//!
//! The grammar is trait-shaped but not plain Rust — `var` members and the
//! `T?` / `T!` optionality suffixes have no trait equivalent, which is why
//! the entry point is a function-like macro with its own `Parse` impls.
//! Member type positions are captured as raw token runs and left for the
//! classifier to interpret; this module owns structure, not type shapes.

use proc_macro2::{Span, TokenStream, TokenTree};
use syn::parse::{Parse, ParseStream};
use syn::{braced, parenthesized, Attribute, Ident, Lit, LitStr, Token, Visibility};

mod kw {
    syn::custom_keyword!(var);
}

/// Parsed arguments from `#[mock(associated_type = "...")]`.
#[derive(Debug, Default)]
pub struct MacroArgs {
    /// Optional: concrete type bound to the interface's associated-type
    /// placeholder.
    pub associated_type: Option<LitStr>,
}

impl Parse for MacroArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut associated_type: Option<LitStr> = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match key.to_string().as_str() {
                "associated_type" => {
                    let lit: Lit = input.parse()?;
                    if let Lit::Str(s) = lit {
                        associated_type = Some(s);
                    } else {
                        return Err(syn::Error::new_spanned(
                            lit,
                            "mock!: `associated_type` must be a string literal",
                        ));
                    }
                }
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("mock!: unknown argument `{other}`"),
                    ));
                }
            }

            // Optional trailing comma
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(MacroArgs { associated_type })
    }
}

impl MacroArgs {
    /// Split the `#[mock(...)]` attribute out of an attribute list, parsing
    /// its arguments. Remaining attributes are returned untouched so they
    /// can be re-emitted on the rendered trait.
    pub fn extract(attrs: Vec<Attribute>) -> syn::Result<(Self, Vec<Attribute>)> {
        let mut args = MacroArgs::default();
        let mut rest = Vec::new();
        let mut seen = false;

        for attr in attrs {
            if attr.path().is_ident("mock") {
                if seen {
                    return Err(syn::Error::new_spanned(
                        &attr,
                        "mock!: duplicate `#[mock]` attribute",
                    ));
                }
                seen = true;
                match &attr.meta {
                    // Bare `#[mock]` carries no arguments
                    syn::Meta::Path(_) => {}
                    syn::Meta::List(_) => args = attr.parse_args::<MacroArgs>()?,
                    syn::Meta::NameValue(_) => {
                        return Err(syn::Error::new_spanned(
                            &attr,
                            "mock!: expected `#[mock(associated_type = \"...\")]`",
                        ));
                    }
                }
            } else {
                rest.push(attr);
            }
        }

        Ok((args, rest))
    }
}

/// One raw type position: the token run between `:`/`->` and the next
/// structural delimiter. Interpretation belongs to the classifier.
#[derive(Debug, Clone)]
pub struct RawType {
    pub tokens: TokenStream,
    pub span: Span,
}

impl RawType {
    fn parse_until(input: ParseStream, stop_at_comma: bool) -> syn::Result<Self> {
        let span = input.span();
        let mut tokens = TokenStream::new();
        // Commas nested inside angle brackets belong to the type, not the
        // parameter list. `->` never increases depth ('>' after a joint '-').
        let mut depth = 0usize;
        let mut prev_joint_minus = false;

        while !input.is_empty() {
            if input.peek(Token![;]) {
                break;
            }
            if stop_at_comma && depth == 0 && input.peek(Token![,]) {
                break;
            }
            let tt: TokenTree = input.parse()?;
            if let TokenTree::Punct(p) = &tt {
                match p.as_char() {
                    '<' => depth += 1,
                    '>' if !prev_joint_minus => depth = depth.saturating_sub(1),
                    _ => {}
                }
                prev_joint_minus =
                    p.as_char() == '-' && p.spacing() == proc_macro2::Spacing::Joint;
            } else {
                prev_joint_minus = false;
            }
            tokens.extend(std::iter::once(tt));
        }

        if tokens.is_empty() {
            return Err(syn::Error::new(span, "mock!: expected a type"));
        }
        Ok(RawType { tokens, span })
    }
}

/// `type Name;` — the interface's associated-type placeholder.
#[derive(Debug)]
pub struct AssociatedTypeDecl {
    pub attrs: Vec<Attribute>,
    pub name: Ident,
}

/// `var name: Type;` — a readable/writable interface property.
#[derive(Debug)]
pub struct PropertyDecl {
    pub attrs: Vec<Attribute>,
    pub name: Ident,
    pub ty: RawType,
}

/// One `name: Type` method parameter.
#[derive(Debug)]
pub struct Param {
    pub name: Ident,
    pub ty: RawType,
}

/// `fn name(params...) [-> Type];` — an interface method.
#[derive(Debug)]
pub struct MethodDecl {
    pub attrs: Vec<Attribute>,
    pub name: Ident,
    pub params: Vec<Param>,
    pub ret: Option<RawType>,
}

/// A single interface member. Declaration order is significant and preserved
/// all the way to the generated output.
#[derive(Debug)]
pub enum Member {
    AssociatedType(AssociatedTypeDecl),
    Property(PropertyDecl),
    Method(MethodDecl),
}

impl Parse for Member {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let lookahead = input.lookahead1();

        if lookahead.peek(Token![type]) {
            input.parse::<Token![type]>()?;
            let name: Ident = input.parse()?;
            input.parse::<Token![;]>()?;
            Ok(Member::AssociatedType(AssociatedTypeDecl { attrs, name }))
        } else if lookahead.peek(kw::var) {
            input.parse::<kw::var>()?;
            let name: Ident = input.parse()?;
            input.parse::<Token![:]>()?;
            let ty = RawType::parse_until(input, false)?;
            input.parse::<Token![;]>()?;
            Ok(Member::Property(PropertyDecl { attrs, name, ty }))
        } else if lookahead.peek(Token![fn]) {
            input.parse::<Token![fn]>()?;
            let name: Ident = input.parse()?;

            let content;
            parenthesized!(content in input);
            let mut params = Vec::new();
            while !content.is_empty() {
                let param_name: Ident = content.parse()?;
                content.parse::<Token![:]>()?;
                let ty = RawType::parse_until(&content, true)?;
                params.push(Param {
                    name: param_name,
                    ty,
                });
                if content.peek(Token![,]) {
                    content.parse::<Token![,]>()?;
                }
            }

            let ret = if input.peek(Token![->]) {
                input.parse::<Token![->]>()?;
                Some(RawType::parse_until(input, false)?)
            } else {
                None
            };
            input.parse::<Token![;]>()?;
            Ok(Member::Method(MethodDecl {
                attrs,
                name,
                params,
                ret,
            }))
        } else {
            Err(lookahead.error())
        }
    }
}

/// The interface declaration: name plus ordered members.
#[derive(Debug)]
pub struct InterfaceDecl {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub name: Ident,
    pub members: Vec<Member>,
}

/// Everything inside one `mock!` invocation.
///
/// `NotATrait` is a successful parse of input this macro rejects — the
/// orchestrator turns it into a diagnostic while re-emitting the original
/// tokens, so a misapplied `mock!` degrades to one error instead of a
/// cascade of parse failures.
#[derive(Debug)]
pub enum MockInput {
    Interface {
        args: MacroArgs,
        decl: InterfaceDecl,
    },
    NotATrait {
        span: Span,
    },
}

impl Parse for MockInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let (args, attrs) = MacroArgs::extract(attrs)?;
        let vis: Visibility = input.parse()?;

        if !input.peek(Token![trait]) {
            let span = input.span();
            input.parse::<TokenStream>()?;
            return Ok(MockInput::NotATrait { span });
        }

        input.parse::<Token![trait]>()?;
        let name: Ident = input.parse()?;

        let content;
        braced!(content in input);
        let mut members = Vec::new();
        while !content.is_empty() {
            members.push(content.parse::<Member>()?);
        }

        Ok(MockInput::Interface {
            args,
            decl: InterfaceDecl {
                attrs,
                vis,
                name,
                members,
            },
        })
    }
}
