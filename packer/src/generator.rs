//! Generator. Contains [GenerationRequest], configuration of a single run, and
//! [generate] turning it into formatted source.

use crate::{
    document::{Document, EmbeddedUnit, RUNTIME_PATH_DEFAULT, parse_runtime_path},
    format::{FormatOptions, Formatter, format_source},
    identifier::{self, DeriveOptions, Identifier},
    payload::{self, EncodeOptions},
};
use anyhow::{Context, Error, ensure};
use std::path::PathBuf;

/// Whole-run configuration. Built once (eg. from command line arguments) and
/// passed to [generate].
#[derive(Debug)]
pub struct GenerationRequest {
    /// Name of the module wrapping generated functions.
    pub package_name: String,
    /// Files to embed, one function per file, in this order.
    pub inputs: Vec<PathBuf>,
    /// How function names are derived from paths.
    pub derive_options: DeriveOptions,
    /// How file contents are compressed and encoded.
    pub encode_options: EncodeOptions,
    /// Path of the runtime crate as seen from generated code.
    pub runtime_path: String,
    /// Formatting policy.
    pub format_options: FormatOptions,
}
impl GenerationRequest {
    /// Creates [self] with default options.
    pub fn new(
        package_name: String,
        inputs: Vec<PathBuf>,
    ) -> Self {
        Self {
            package_name,
            inputs,
            derive_options: DeriveOptions::default(),
            encode_options: EncodeOptions::default(),
            runtime_path: RUNTIME_PATH_DEFAULT.to_owned(),
            format_options: FormatOptions::default(),
        }
    }
}

/// Generates source embedding all inputs of `request`.
///
/// Steps, all in a single pass, without any retries:
/// - validates request (at least one input, valid package name and runtime
///   path),
/// - derives identifiers for all inputs and checks they are unique, before any
///   file is read,
/// - reads, compresses and encodes every input,
/// - renders [Document] and passes it through `formatter` according to
///   [GenerationRequest::format_options].
///
/// Nothing is written to fs. Either a complete source is returned or an error.
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use std::path::PathBuf;
/// # use embedgen_packer::{
/// #     format::Rustfmt,
/// #     generator::{generate, GenerationRequest},
/// # };
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// let mut request = GenerationRequest::new(
///     "sources".to_owned(),
///     vec![PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src").join("lib.rs")],
/// );
/// request.derive_options.prefix = format!("{}/src/", env!("CARGO_MANIFEST_DIR"));
/// request.derive_options.suffix = ".rs".to_owned();
/// request.format_options.enabled = false;
///
/// let source = generate(&request, &Rustfmt::default())?;
/// assert!(source.contains("pub fn lib"));
/// #
/// # Ok(())
/// # }
/// ```
pub fn generate(
    request: &GenerationRequest,
    formatter: &dyn Formatter,
) -> Result<String, Error> {
    ensure!(!request.inputs.is_empty(), "no input files given");

    let package_name =
        Identifier::validate(request.package_name.clone()).context("invalid package name")?;
    let runtime_path = parse_runtime_path(&request.runtime_path)?;

    // all names are known to be unique before any content is read
    let identifiers = identifier::derive_unique(&request.inputs, &request.derive_options)?;

    let mut document = Document::new(package_name);
    for (path, identifier) in request.inputs.iter().zip(identifiers) {
        log::debug!("embedding {} as {}", path.display(), identifier);

        let payload = payload::build_from_path(path, &request.encode_options)?;

        document.unit_add(EmbeddedUnit {
            identifier,
            source_path: path.to_string_lossy().into_owned(),
            payload,
        });
    }

    let units_count = document.units.len();
    let source = document.render(&runtime_path)?;

    let source = format_source(formatter, source, &request.format_options)?;

    log::info!(
        "generated {} functions in package {} ({} bytes)",
        units_count,
        request.package_name,
        source.len()
    );

    Ok(source)
}
