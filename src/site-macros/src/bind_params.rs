/* src/site-macros/src/bind_params.rs */

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Type};

const INTEGER_TYPES: &[&str] =
  &["i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize"];

enum FieldKind {
  Text,
  Integer,
  Skipped,
}

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
  let name = &input.ident;
  let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

  let named = match &input.data {
    Data::Struct(data) => match &data.fields {
      Fields::Named(f) => f,
      _ => {
        return Err(syn::Error::new_spanned(
          &input.ident,
          "BindParams requires a struct with named fields",
        ));
      }
    },
    _ => {
      return Err(syn::Error::new_spanned(
        &input.ident,
        "BindParams can only be derived for structs",
      ));
    }
  };

  let mut binds = Vec::new();
  for field in &named.named {
    let field_name = field.ident.as_ref().unwrap();
    let key = field_name.to_string();
    match classify(&field.ty) {
      FieldKind::Text => binds.push(quote! {
        .text(#key, |params: &mut Self, value: &str| params.#field_name = value.to_string())
      }),
      FieldKind::Integer => {
        let ty = &field.ty;
        // Parse into the field's own width; failures leave the default
        binds.push(quote! {
          .bind(#key, |params: &mut Self, raw: &str| {
            if let Ok(value) = raw.parse::<#ty>() {
              params.#field_name = value;
            }
          })
        });
      }
      FieldKind::Skipped => {}
    }
  }

  Ok(quote! {
    impl #impl_generics quilt_site::BindParams for #name #ty_generics #where_clause {
      fn bindings() -> quilt_site::ParamBindings<Self> {
        quilt_site::ParamBindings::new()
          #(#binds)*
      }
    }
  })
}

fn classify(ty: &Type) -> FieldKind {
  if let Type::Path(tp) = ty {
    if let Some(seg) = tp.path.segments.last() {
      let ident = seg.ident.to_string();
      if ident == "String" {
        return FieldKind::Text;
      }
      if INTEGER_TYPES.contains(&ident.as_str()) {
        return FieldKind::Integer;
      }
    }
  }
  FieldKind::Skipped
}
