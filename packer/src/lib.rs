//! embedgen-packer is the "builder" (1st stage) part of the
//! [embedgen](https://crates.io/crates/embedgen) project.
//!
//! The goal of the packer is to take a list of files and generate a single
//! Rust source file, containing one function per input file. Each function
//! returns the original file content, which is stored (optionally deflated)
//! inside a literal. Your target application includes the generated file (ex.
//! as a module or with `include!`) and depends on
//! [embedgen](https://crates.io/crates/embedgen) (the runtime part), which
//! generated functions call to decode the content.
//!
//! This crate is usually used in build script / CI / build.rs stage, not in
//! your target application.
//!
//! This crate can be used in two ways:
//! - As a standalone application, installed with `cargo install`, this is the
//!   preferred way if you are using build scripts, CI pipeline etc.
//! - As a library, imported to your project, this is a way to go if you want to
//!   use it in build.rs of your target application.
//!
//! # Using as a standalone application
//!
//! ## Install (or update to matching version)
//! - Either install it with `$ cargo install embedgen-packer` and use shell
//!   command `$ embedgen-packer [OPTIONS] <INPUT_FILE_PATHS>...`
//! - Or clone repo, go into `packer` directory, `$ cargo run --release --
//!   [OPTIONS] <INPUT_FILE_PATHS>...`.
//!
//! ## Generate source
//! `embedgen-packer` provides up to date documentation with `$ embedgen-packer
//! --help`.
//!
//! ### Examples
//! Let's say you have an `assets` directory with `logo.png` and
//! `css/style.css`. By running:
//! ```text
//! $ embedgen-packer \
//!     -o src/assets.rs \
//!     --pkg assets \
//!     --prefix assets/ \
//!     assets/logo.png assets/css/style.css
//! ```
//! a new file `src/assets.rs` will be created, containing module `assets` with
//! functions `logo_png()` and `css_style_css()`, both returning
//! `std::io::Result<Vec<u8>>`.
//!
//! Function names are created from paths: prefix and suffix are stripped,
//! every ascii character except letters and digits becomes `_`, the name is
//! lowercased and trimmed of `_`. Two paths resolving to the same name (eg.
//! `a.txt` and `A.TXT`) are an error.
//!
//! Existing output file is never overwritten, unless `-f` is given. If `--pkg`
//! is not set, module name is resolved from the output directory (see
//! [package::DirectoryPackageResolver]).
//!
//! # Using as a library
//! Build a [generator::GenerationRequest] and pass it to
//! [generator::generate], then store the result with [output::store_file].
//!
//! ### Examples
//! ```no_run
//! # use anyhow::Error;
//! # use std::path::PathBuf;
//! # use embedgen_packer::{
//! #     format::Rustfmt,
//! #     generator::{generate, GenerationRequest},
//! #     output::store_file,
//! # };
//! #
//! # fn main() -> Result<(), Error> {
//! let mut request = GenerationRequest::new(
//!     "assets".to_owned(),
//!     vec![PathBuf::from("assets/logo.png")],
//! );
//! request.derive_options.prefix = "assets/".to_owned();
//! request.derive_options.suffix = ".png".to_owned();
//!
//! let source = generate(&request, &Rustfmt::default())?;
//!
//! store_file(&PathBuf::from("src/assets.rs"), source.as_bytes(), true)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub use embedgen_common as common;

pub mod document;
pub mod format;
pub mod generator;
pub mod identifier;
pub mod output;
pub mod package;
pub mod payload;
