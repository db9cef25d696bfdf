//! Common crate, containing types shared between
//! [embedgen](https://crates.io/crates/embedgen) (the runtime part, linked by
//! generated code) and
//! [embedgen-packer](https://crates.io/crates/embedgen-packer) (the generator).
//!
//! For a project documentation, examples, etc. see
//! [embedgen](https://github.com/peku33/embedgen).
//!
//! The root type of this crate is [encoding::Encoding], describing how file
//! content is stored inside a literal of the generated source.

#![warn(missing_docs)]

pub mod encoding;
