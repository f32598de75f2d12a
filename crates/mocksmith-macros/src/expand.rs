//! Mock Orchestrator: validates the invocation, resolves the associated-type
//! substitution, runs the member builders in declaration order, and
//! assembles the output.
//!
//! The expansion is a pure function of its input tokens. On success the
//! output is the rendered trait followed by the peer mock type (struct +
//! inherent impl + conformance impl). When the invocation does not contain a
//! trait declaration, the original tokens are re-emitted verbatim next to a
//! single diagnostic so the caller's item survives the failed expansion.

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::{InterfaceDecl, MacroArgs, Member, MockInput};
use crate::{method, names, property, substitute};

pub const NOT_A_TRAIT: &str = "mock!: can only be applied to trait declarations";

/// Structured output of one member builder. The orchestrator concatenates
/// blocks property-group first, then method-group, preserving declaration
/// order inside each group; trait items keep the full declaration order.
#[derive(Debug, Default)]
pub struct MemberBlock {
    pub trait_items: TokenStream,
    pub struct_fields: TokenStream,
    pub inherent_items: TokenStream,
    pub impl_items: TokenStream,
}

pub fn expand(input: TokenStream) -> TokenStream {
    let original = input.clone();
    match syn::parse2::<MockInput>(input) {
        Ok(MockInput::Interface { args, decl }) => match expand_interface(&args, &decl) {
            Ok(tokens) => tokens,
            Err(err) => err.to_compile_error(),
        },
        Ok(MockInput::NotATrait { span }) => {
            let diagnostic = syn::Error::new(span, NOT_A_TRAIT).to_compile_error();
            quote! {
                #original
                #diagnostic
            }
        }
        Err(err) => err.to_compile_error(),
    }
}

fn expand_interface(args: &MacroArgs, decl: &InterfaceDecl) -> syn::Result<TokenStream> {
    let ctx = substitute::resolve(args, &decl.members)?;

    let mut trait_items = TokenStream::new();
    let mut property_blocks: Vec<MemberBlock> = Vec::new();
    let mut method_blocks: Vec<MemberBlock> = Vec::new();
    let mut error: Option<syn::Error> = None;

    for member in &decl.members {
        match member {
            Member::AssociatedType(assoc) => {
                let attrs = &assoc.attrs;
                let name = &assoc.name;
                trait_items.extend(quote! {
                    #(#attrs)*
                    type #name;
                });
            }
            Member::Property(property_decl) => match property::build(property_decl, &ctx) {
                Ok(block) => {
                    trait_items.extend(block.trait_items.clone());
                    property_blocks.push(block);
                }
                Err(err) => combine(&mut error, err),
            },
            Member::Method(method_decl) => match method::build(method_decl, &ctx) {
                Ok(block) => {
                    trait_items.extend(block.trait_items.clone());
                    method_blocks.push(block);
                }
                Err(err) => combine(&mut error, err),
            },
        }
    }

    if let Some(error) = error {
        return Err(error);
    }

    let attrs = &decl.attrs;
    let vis = &decl.vis;
    let name = &decl.name;
    let mock_name = names::mock_type_name(name);

    let mut struct_fields = TokenStream::new();
    let mut inherent_items = TokenStream::new();
    let mut impl_items = TokenStream::new();
    for block in property_blocks.iter().chain(method_blocks.iter()) {
        struct_fields.extend(block.struct_fields.clone());
        inherent_items.extend(block.inherent_items.clone());
        impl_items.extend(block.impl_items.clone());
    }

    // Without a substitution rule the placeholder name passes through
    // verbatim; it resolves only if the caller has such a type in scope.
    let type_binding = ctx.placeholder.as_ref().map(|placeholder| {
        let concrete = ctx.mock_base(placeholder);
        quote! {
            type #placeholder = #concrete;
        }
    });

    let mock_doc = format!("Generated test double for [`{name}`].");

    Ok(quote! {
        #(#attrs)*
        #vis trait #name {
            #trait_items
        }

        #[doc = #mock_doc]
        #[derive(Default)]
        #vis struct #mock_name {
            #struct_fields
        }

        impl #mock_name {
            pub fn new() -> Self {
                Self::default()
            }

            #inherent_items
        }

        impl #name for #mock_name {
            #type_binding
            #impl_items
        }
    })
}

/// Fold an error into the accumulator so one expansion reports every
/// offending member.
pub(crate) fn combine(slot: &mut Option<syn::Error>, err: syn::Error) {
    match slot {
        Some(previous) => previous.combine(err),
        None => *slot = Some(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::Item;

    fn expand_file(input: TokenStream) -> syn::File {
        let output = expand(input);
        syn::parse2(output).expect("generated code parses as items")
    }

    fn struct_field_names(file: &syn::File, name: &str) -> Vec<String> {
        file.items
            .iter()
            .find_map(|item| match item {
                Item::Struct(def) if def.ident == name => Some(
                    def.fields
                        .iter()
                        .map(|field| field.ident.as_ref().unwrap().to_string())
                        .collect(),
                ),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no struct `{name}` in output"))
    }

    #[test]
    fn test_empty_interface_generates_empty_mock() {
        let file = expand_file(quote! {
            pub trait Empty {}
        });
        assert_eq!(file.items.len(), 4);
        assert!(matches!(&file.items[0], Item::Trait(def) if def.ident == "Empty"));
        assert!(struct_field_names(&file, "EmptyMock").is_empty());
    }

    #[test]
    fn test_properties_emit_before_methods_in_declaration_order() {
        let file = expand_file(quote! {
            trait Service {
                fn do_work(arg: String) -> String;
                var worker: String;
                var optional_worker: String?;
                fn reset();
            }
        });
        assert_eq!(
            struct_field_names(&file, "ServiceMock"),
            vec![
                "underlying_worker",
                "optional_worker",
                "do_work_calls_count",
                "do_work_closure",
                "do_work_return_value",
                "reset_calls_count",
                "reset_closure",
            ],
        );
    }

    #[test]
    fn test_trait_keeps_full_declaration_order() {
        let file = expand_file(quote! {
            trait Service {
                fn do_work();
                var worker: String;
            }
        });
        let Item::Trait(def) = &file.items[0] else {
            panic!("expected the trait first");
        };
        let names: Vec<String> = def
            .items
            .iter()
            .map(|item| match item {
                syn::TraitItem::Fn(f) => f.sig.ident.to_string(),
                other => panic!("unexpected trait item: {other:?}"),
            })
            .collect();
        assert_eq!(names, vec!["do_work", "worker", "set_worker"]);
    }

    #[test]
    fn test_conformance_impl_targets_the_interface() {
        let file = expand_file(quote! {
            pub trait Store {
                var worker: String;
            }
        });
        let found = file.items.iter().any(|item| match item {
            Item::Impl(def) => match &def.trait_ {
                Some((_, path, _)) => path.is_ident("Store"),
                None => false,
            },
            _ => false,
        });
        assert!(found, "expected `impl Store for StoreMock`");
    }

    #[test]
    fn test_associated_type_binding_uses_substitution() {
        let output = expand(quote! {
            #[mock(associated_type = "String")]
            trait Repo {
                type Item;
                fn load() -> Item;
            }
        })
        .to_string();
        assert!(output.contains("type Item = String"));
        assert!(output.contains("load_return_value : :: std :: option :: Option < String >"));
    }

    #[test]
    fn test_unresolved_placeholder_passes_through_verbatim() {
        let output = expand(quote! {
            trait Repo {
                type Item;
            }
        })
        .to_string();
        assert!(output.contains("type Item = Item"));
    }

    #[test]
    fn test_non_trait_input_reemits_original_with_diagnostic() {
        let output = expand(quote! {
            struct Service {
                worker: String,
            }
        })
        .to_string();
        assert!(output.contains("compile_error"));
        assert!(output.contains("can only be applied to trait declarations"));
        assert!(output.contains("struct Service"));
    }

    #[test]
    fn test_unsupported_shapes_report_every_member() {
        let output = expand(quote! {
            trait Service {
                var pair: (u8, u8);
                fn run(items: Vec<String>);
            }
        })
        .to_string();
        assert!(output.contains("unsupported type shape for `pair`"));
        assert!(output.contains("parameter `items` of `run`"));
        // Diagnostics only; no mock is generated for a rejected interface.
        assert!(!output.contains("struct ServiceMock"));
    }

    #[test]
    fn test_rejection_leaves_other_expansions_independent() {
        let rejected = expand(quote! { struct Nope; }).to_string();
        let accepted = expand(quote! {
            trait Fine {
                fn run();
            }
        })
        .to_string();
        assert!(rejected.contains("compile_error"));
        assert!(!accepted.contains("compile_error"));
    }
}
