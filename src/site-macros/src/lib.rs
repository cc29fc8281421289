/* src/site-macros/src/lib.rs */

mod bind_params;

use proc_macro::TokenStream;

#[proc_macro_derive(BindParams)]
pub fn derive_bind_params(input: TokenStream) -> TokenStream {
  let input = syn::parse_macro_input!(input as syn::DeriveInput);
  match bind_params::expand(input) {
    Ok(tokens) => tokens.into(),
    Err(e) => e.to_compile_error().into(),
  }
}
