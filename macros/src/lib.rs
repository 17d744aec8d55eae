use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::{quote, ToTokens};

/// Generate a color model from a struct with exactly three fields of the same
/// type. The fields are made public and the model gets a `new` constructor,
/// array conversions and a `NOTATION` constant holding the snake case name of
/// the struct, e.g. `"hsl"` for `Hsl`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.");
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.");
        }
        .into();
    }

    let Some(field_names) = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Option<Vec<_>>>()
    else {
        return quote! {
            compile_error!("Model fields must be named.");
        }
        .into();
    };
    debug_assert!(field_names.len() == 3);

    let field_type = input.fields.iter().next().map(|f| f.ty.clone());
    let type_name = |ty: &syn::Type| ty.to_token_stream().to_string();
    let same_type = field_type.as_ref().is_some_and(|first| {
        input
            .fields
            .iter()
            .all(|f| type_name(&f.ty) == type_name(first))
    });
    let Some(ty) = field_type.filter(|_| same_type) else {
        return quote! {
            compile_error!("All 3 fields of a model must have the same type.");
        }
        .into();
    };

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let derive: syn::Attribute = syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    };
    input.attrs.push(derive);

    let struct_name = input.ident.clone();
    let notation = struct_name.to_string().to_case(Case::Snake);

    let new_impl: proc_macro2::TokenStream = quote! {
        impl #struct_name {
            /// The name of the functional notation for this model.
            pub const NOTATION: &'static str = #notation;

            /// Create a new color having this model.
            pub const fn new(#field1: #ty, #field2: #ty, #field3: #ty) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the three components of this model in declaration
            /// order.
            pub const fn to_array(&self) -> [#ty; 3] {
                [self.#field1, self.#field2, self.#field3]
            }
        }

        impl From<[#ty; 3]> for #struct_name {
            fn from(value: [#ty; 3]) -> Self {
                let [#field1, #field2, #field3] = value;
                Self::new(#field1, #field2, #field3)
            }
        }

        impl From<#struct_name> for [#ty; 3] {
            fn from(value: #struct_name) -> Self {
                value.to_array()
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
