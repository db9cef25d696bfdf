//! embedgen is the "runtime" (2nd stage) part of the embedgen project. It is
//! linked by the source files generated by
//! [embedgen-packer](https://crates.io/crates/embedgen-packer) (the
//! "builder" part) and should be added as a regular dependency of the crate
//! that includes them.
//!
//! The packer turns each input file into a function like this one:
//! ```
//! pub fn hello_txt() -> ::std::io::Result<::std::vec::Vec<u8>> {
//!     const DATA: &str = "80jNycnXUSjPL8pJUeQCAA==";
//!     ::embedgen::decode(DATA.as_bytes(), ::embedgen::Encoding::Base64, true)
//! }
//!
//! assert_eq!(hello_txt().unwrap(), b"Hello, world!\n");
//! ```
//!
//! The function body is the only place this crate is used. Calling it
//! decodes the literal and inflates the content every time, nothing is
//! cached. If the content is needed often, store the result, ex. in a
//! [std::sync::LazyLock].

#![warn(missing_docs)]

pub use embedgen_common as common;
pub use embedgen_common::encoding::Encoding;

pub mod decode;

pub use decode::decode;
