//! Document helpers. Contains [Document], a typed representation of the
//! generated source, and its renderer [Document::render].

use crate::{common::encoding::Encoding, identifier::Identifier, payload::Payload};
use anyhow::{Context, Error};
use proc_macro2::TokenStream;
use quote::quote;

/// First line of every rendered document.
pub const GENERATED_HEADER: &str = "// Code generated by embedgen-packer. DO NOT EDIT.";

/// Default path of the runtime crate, as seen from generated code.
pub const RUNTIME_PATH_DEFAULT: &str = "::embedgen";

/// Parses path (eg. `::embedgen` or `crate::vendored::embedgen`) under which
/// generated code finds the runtime crate.
pub fn parse_runtime_path(runtime_path: &str) -> Result<syn::Path, Error> {
    let runtime_path = syn::parse_str::<syn::Path>(runtime_path)
        .with_context(|| format!("invalid runtime path {:?}", runtime_path))?;

    Ok(runtime_path)
}

/// Single input file, ready to be rendered as a function.
///
/// Created once per input during generation, never modified.
#[derive(Debug)]
pub struct EmbeddedUnit {
    /// Name of the generated function.
    pub identifier: Identifier,
    /// Input path, as given by the user. Used in docs only.
    pub source_path: String,
    /// Encoded content.
    pub payload: Payload,
}
impl EmbeddedUnit {
    fn to_tokens(
        &self,
        runtime_path: &syn::Path,
    ) -> Result<TokenStream, Error> {
        let identifier = self.identifier.to_ident();
        let doc = format!(" Returns content of `{}`.", self.source_path);
        let literal = syn::parse_str::<syn::Lit>(&self.payload.literal)
            .with_context(|| format!("invalid payload literal for {}", self.identifier))?;
        let compressed = self.payload.compressed;

        // escaped literal is already a byte string, base64 is a str
        let (data_type, data, encoding) = match self.payload.encoding {
            Encoding::Escaped => (quote!(&[u8]), quote!(DATA), quote!(Escaped)),
            Encoding::Base64 => (quote!(&str), quote!(DATA.as_bytes()), quote!(Base64)),
        };

        let tokens = quote! {
            #[doc = #doc]
            pub fn #identifier() -> ::std::io::Result<::std::vec::Vec<u8>> {
                const DATA: #data_type = #literal;
                #runtime_path::decode(#data, #runtime_path::Encoding::#encoding, #compressed)
            }
        };

        Ok(tokens)
    }
}

/// Whole generated source: a module named after the package, holding one
/// function per [EmbeddedUnit], in order of addition.
#[derive(Debug)]
pub struct Document {
    /// Name of the wrapping module.
    pub package_name: Identifier,
    /// Functions to be generated.
    pub units: Vec<EmbeddedUnit>,
}
impl Document {
    /// Creates empty [self] to be filled with units.
    pub fn new(package_name: Identifier) -> Self {
        Self {
            package_name,
            units: Vec::new(),
        }
    }

    /// Appends unit to the document.
    pub fn unit_add(
        &mut self,
        unit: EmbeddedUnit,
    ) {
        self.units.push(unit);
    }

    /// Serializes [self] into Rust source.
    ///
    /// Output is valid, but not formatted (all items end up in a single line).
    /// Pass it through [crate::format] to make it readable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anyhow::Error;
    /// # use embedgen_packer::{
    /// #     document::{parse_runtime_path, Document, EmbeddedUnit, RUNTIME_PATH_DEFAULT},
    /// #     identifier::Identifier,
    /// #     payload::{encode, EncodeOptions},
    /// # };
    /// #
    /// # fn main() -> Result<(), Error> {
    /// #
    /// let mut document = Document::new(Identifier::validate("assets".to_owned())?);
    /// document.unit_add(EmbeddedUnit {
    ///     identifier: Identifier::validate("logo".to_owned())?,
    ///     source_path: "assets/logo.png".to_owned(),
    ///     payload: encode(b"\x89PNG", &EncodeOptions::default())?,
    /// });
    ///
    /// let source = document.render(&parse_runtime_path(RUNTIME_PATH_DEFAULT)?)?;
    /// assert!(source.contains("pub mod assets"));
    /// assert!(source.contains("pub fn logo"));
    /// #
    /// # Ok(())
    /// # }
    /// ```
    pub fn render(
        &self,
        runtime_path: &syn::Path,
    ) -> Result<String, Error> {
        let package_name = self.package_name.to_ident();
        let units = self
            .units
            .iter()
            .map(|unit| unit.to_tokens(runtime_path))
            .collect::<Result<Vec<_>, Error>>()?;

        let tokens = quote! {
            pub mod #package_name {
                #(#units)*
            }
        };

        let source = format!("{}\n\n{}\n", GENERATED_HEADER, tokens);

        Ok(source)
    }
}
