extern crate proc_macro;

use proc_macro_error::{proc_macro_error, Diagnostic};
use quote::quote;
use syn::parse::Parse;
use syn::punctuated::Punctuated;
use syn::{bracketed, token, Token};

#[derive(Default)]
struct CommandArguments {
	name: Option<syn::LitStr>,
	aliases: Option<Vec<syn::LitStr>>,
}

impl Parse for CommandArguments {
	fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
		let mut arguments = CommandArguments::default();

		while !input.is_empty() {
			let param_name = input.parse::<syn::Ident>()?;
			input.parse::<syn::Token![=]>()?;

			if param_name == "name" {
				if arguments.name.is_some() {
					return Err(syn::Error::new(param_name.span(), "Duplicate parameter 'name'"));
				}
				arguments.name = Some(input.parse::<syn::LitStr>()?);
			} else if param_name == "aliases" {
				if arguments.aliases.is_some() {
					return Err(syn::Error::new(
						param_name.span(),
						"Duplicate parameter 'aliases'",
					));
				}
				let content;
				let _: token::Bracket = bracketed!(content in input);

				let res = Punctuated::<syn::LitStr, Token![,]>::parse_terminated(&content)?;
				arguments.aliases = Some(res.into_iter().collect::<Vec<_>>());
			} else {
				return Err(syn::Error::new(
					param_name.span(),
					format!(
						"Invalid parameter name {}, accepted are: 'name', 'aliases'",
						param_name
					),
				));
			}

			if !input.is_empty() {
				input.parse::<syn::Token![,]>()?;
			}
		}

		Ok(arguments)
	}
}

/// `color_me` -> `ColorMe`
fn type_name(function_name: &str) -> String {
	function_name
		.split('_')
		.filter(|part| !part.is_empty())
		.map(|part| {
			let mut chars = part.chars();
			match chars.next() {
				Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
				None => String::new(),
			}
		})
		.collect()
}

/// `color_me` -> `color me`
fn command_phrase(function_name: &str) -> String {
	function_name
		.split('_')
		.filter(|part| !part.is_empty())
		.collect::<Vec<_>>()
		.join(" ")
}

#[proc_macro_error]
#[proc_macro_attribute]
pub fn command(
	args: proc_macro::TokenStream,
	item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
	let args = syn::parse_macro_input!(args as CommandArguments);
	let input = syn::parse_macro_input!(item as syn::ItemFn);

	if input.sig.asyncness.is_none() {
		Diagnostic::spanned(
			input.sig.ident.span(),
			proc_macro_error::Level::Error,
			"Function must be async".to_string(),
		)
		.emit();
		return quote! { #input }.into();
	}

	let function_name = input.sig.ident.to_string();

	let type_name = type_name(&function_name);
	if type_name.is_empty() {
		Diagnostic::spanned(
			input.sig.ident.span(),
			proc_macro_error::Level::Error,
			"Expected function name".to_string(),
		)
		.emit();
		return quote! { #input }.into();
	}
	let type_name = quote::format_ident!("{}", type_name);

	let phrase = args
		.name
		.map(|name| name.value())
		.unwrap_or_else(|| command_phrase(&function_name))
		.to_lowercase();

	let aliases = args
		.aliases
		.unwrap_or_default()
		.into_iter()
		.map(|alias| alias.value().to_lowercase())
		.collect::<Vec<_>>();

	let function_generics = input.sig.generics;
	let function_parameters = input.sig.inputs;
	let function_return = input.sig.output;
	let function_body = input.block;

	#[rustfmt::skip]
	let output = quote! {
		pub struct #type_name;

		#[async_trait]
		impl Command for #type_name {
			fn name() -> &'static str {
				#phrase
			}

			fn aliases() -> &'static [&'static str] {
				&[#(#aliases),*]
			}

			async fn execute #function_generics (#function_parameters) #function_return
				#function_body
		}
	};

	output.into()
}
