//! Property Mock Builder.
//!
//! A plain property becomes a get/set trampoline over a distinct
//! `underlying_*` backing field: the backing storage starts unset and a read
//! before the first assignment panics, which is the "not yet stubbed"
//! contract a test double wants. Optional and implicitly-unwrapped
//! properties store directly under their own name — absence is a valid
//! state for them, so no indirection is needed.

use quote::quote;

use crate::classify::{classify, TypeExpr};
use crate::expand::MemberBlock;
use crate::names;
use crate::parse::PropertyDecl;
use crate::substitute::TypeCtx;

pub fn build(property: &PropertyDecl, ctx: &TypeCtx) -> syn::Result<MemberBlock> {
    let name = &property.name;
    let expr = classify(&property.ty, &format!("`{name}`"))?;

    let attrs = &property.attrs;
    let setter = names::setter_name(name);
    let trait_surface = ctx.trait_surface(&expr);
    let mock_surface = ctx.mock_surface(&expr);
    let storage = ctx.mock_storage(&expr);

    let trait_items = quote! {
        #(#attrs)*
        fn #name(&self) -> #trait_surface;
        fn #setter(&mut self, value: #trait_surface);
    };

    let unset_message = format!("{name}: property has not been set");

    let (struct_fields, impl_items) = match expr {
        TypeExpr::Named(_) => {
            let field = names::underlying_field(name);
            let field_doc = format!("Backing storage for `{name}`.");
            (
                quote! {
                    #[doc = #field_doc]
                    pub #field: #storage,
                },
                quote! {
                    fn #name(&self) -> #mock_surface {
                        self.#field.clone().expect(#unset_message)
                    }
                    fn #setter(&mut self, value: #mock_surface) {
                        self.#field = Some(value);
                    }
                },
            )
        }
        TypeExpr::Optional(_) => {
            let field_doc = format!("Storage for `{name}`; `None` is the valid \"absent\" state.");
            (
                quote! {
                    #[doc = #field_doc]
                    pub #name: #storage,
                },
                quote! {
                    fn #name(&self) -> #mock_surface {
                        self.#name.clone()
                    }
                    fn #setter(&mut self, value: #mock_surface) {
                        self.#name = value;
                    }
                },
            )
        }
        TypeExpr::ImplicitlyUnwrapped(_) => {
            let field_doc = format!("Storage for `{name}`; reads panic while unset.");
            (
                quote! {
                    #[doc = #field_doc]
                    pub #name: #storage,
                },
                quote! {
                    fn #name(&self) -> #mock_surface {
                        self.#name.clone().expect(#unset_message)
                    }
                    fn #setter(&mut self, value: #mock_surface) {
                        self.#name = Some(value);
                    }
                },
            )
        }
    };

    Ok(MemberBlock {
        trait_items,
        struct_fields,
        inherent_items: quote!(),
        impl_items,
    })
}
