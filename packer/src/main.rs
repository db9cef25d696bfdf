//! Main packer executable, to be used as cli tool. For help run this command
//! with `-h`.

#![warn(missing_docs)]

use anyhow::{Context, Error};
use clap::{ArgAction, Parser};
use embedgen_packer::{
    common::encoding::Encoding,
    document, format, generator,
    identifier::DeriveOptions,
    output,
    package::{self, PackageResolver},
    payload::{CompressionLevel, EncodeOptions},
};
use simple_logger::SimpleLogger;
use std::path::PathBuf;

/// Generates Rust source with one function per input file, returning its
/// content.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Arguments {
    /// Output file path.
    #[arg(short, long, default_value = output::OUTPUT_FILE_NAME_DEFAULT)]
    pub output: PathBuf,

    /// Prefix to strip from input paths when creating function names.
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Suffix to strip from input paths when creating function names.
    #[arg(long, default_value = "")]
    pub suffix: String,

    /// Deflate file contents.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub compress: bool,

    /// Compression level: default (or -1), none, fastest, best or 0-9.
    #[arg(long, default_value_t = CompressionLevel::Default, allow_negative_numbers = true)]
    pub level: CompressionLevel,

    /// Literal encoding of file contents: escaped or base64.
    #[arg(long, default_value_t = Encoding::Base64)]
    pub encoding: Encoding,

    /// Override package (module) name. If not set, resolved from output
    /// directory.
    #[arg(long)]
    pub pkg: Option<String>,

    /// Run output through rustfmt.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub fmt: bool,

    /// Include unformatted source in error message when rustfmt fails.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub fmt_source_on_error: bool,

    /// Path of the embedgen crate, as seen from generated code.
    #[arg(long, default_value = document::RUNTIME_PATH_DEFAULT)]
    pub runtime_path: String,

    /// Force overwrite of existing output file.
    #[arg(short, long)]
    pub force: bool,

    /// Files to embed.
    #[arg(required = true)]
    pub input_file_paths: Vec<PathBuf>,
}
impl Arguments {
    pub fn into_generation_request(
        self,
        package_name: String,
    ) -> generator::GenerationRequest {
        generator::GenerationRequest {
            package_name,
            inputs: self.input_file_paths,
            derive_options: DeriveOptions {
                prefix: self.prefix,
                suffix: self.suffix,
            },
            encode_options: EncodeOptions {
                compression: self.compress.then_some(self.level),
                encoding: self.encoding,
            },
            runtime_path: self.runtime_path,
            format_options: format::FormatOptions {
                enabled: self.fmt,
                source_on_error: self.fmt_source_on_error,
            },
        }
    }
}

fn main() -> Result<(), Error> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()?;

    let arguments = Arguments::parse();

    // fail early, before any work is done
    output::ensure_writable(&arguments.output, arguments.force)?;

    let package_name = match &arguments.pkg {
        Some(package_name) => package_name.clone(),
        None => package::DirectoryPackageResolver
            .resolve_package_name(&package::output_directory_path(&arguments.output))
            .context("resolve package name, use --pkg to set it explicitly")?,
    };

    let output_path = arguments.output.clone();
    let force = arguments.force;
    let request = arguments.into_generation_request(package_name);

    let source = generator::generate(&request, &format::Rustfmt::default())?;

    output::store_file(&output_path, source.as_bytes(), force)?;

    Ok(())
}
