#![doc(hidden)]

use anyhow::Error;
use embedgen_packer::{
    format::Formatter,
    generator::{GenerationRequest, generate},
};
use std::{
    path::{MAIN_SEPARATOR_STR, PathBuf},
    process::Command,
};

// data/assets, source of all generated test sources
pub fn assets_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("assets")
}

// request for given files from data/assets, with assets directory as prefix
// and formatting disabled
pub fn assets_request(
    package_name: &str,
    file_names: &[&str],
) -> GenerationRequest {
    let assets = assets_path();

    let mut request = GenerationRequest::new(
        package_name.to_owned(),
        file_names
            .iter()
            .map(|file_name| assets.join(file_name))
            .collect(),
    );
    request.derive_options.prefix = format!("{}{}", assets.display(), MAIN_SEPARATOR_STR);
    request.format_options.enabled = false;
    request
}

// generates and parses the source, failing if it is not valid rust
pub fn generate_parsed(
    request: &GenerationRequest,
    formatter: &dyn Formatter,
) -> Result<(String, syn::File), Error> {
    let source = generate(request, formatter)?;
    let file = syn::parse_file(&source)?;
    Ok((source, file))
}

// names of functions inside the single generated module
pub fn function_names(file: &syn::File) -> Vec<String> {
    file.items
        .iter()
        .flat_map(|item| match item {
            syn::Item::Mod(module) => module
                .content
                .as_ref()
                .map(|(_, items)| items.as_slice())
                .unwrap_or_default(),
            _ => &[][..],
        })
        .filter_map(|item| match item {
            syn::Item::Fn(function) => Some(function.sig.ident.to_string()),
            _ => None,
        })
        .collect()
}

pub fn rustfmt_available() -> bool {
    Command::new("rustfmt")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}
