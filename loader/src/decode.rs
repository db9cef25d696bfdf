//! Runtime decoder. Contains [decode], called by every generated function.

use crate::Encoding;
use base64::{Engine, engine::general_purpose::STANDARD};
use flate2::read::DeflateDecoder;
use std::{
    borrow::Cow,
    io::{self, Read},
};

/// Reconstructs original file content from data embedded in generated source.
///
/// `data` is the value of the embedded literal: raw (possibly compressed)
/// bytes for [Encoding::Escaped], base64 text for [Encoding::Base64].
/// `compressed` tells whether the packer deflated the content before encoding.
///
/// All failures (invalid base64, corrupted deflate stream) are returned as
/// [io::Error], this function never panics on bad input.
///
/// # Examples
///
/// ```
/// # use embedgen::{decode, Encoding};
/// #
/// # fn main() -> Result<(), std::io::Error> {
/// #
/// // not compressed, escaped bytes are used directly
/// assert_eq!(decode(b"\x00\x01\x02", Encoding::Escaped, false)?, b"\x00\x01\x02");
///
/// // not compressed, base64
/// assert_eq!(decode(b"aGVsbG8=", Encoding::Base64, false)?, b"hello");
/// #
/// # Ok(())
/// # }
/// ```
pub fn decode(
    data: &[u8],
    encoding: Encoding,
    compressed: bool,
) -> io::Result<Vec<u8>> {
    let raw = match encoding {
        Encoding::Escaped => Cow::Borrowed(data),
        Encoding::Base64 => Cow::Owned(
            STANDARD
                .decode(data)
                .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?,
        ),
    };

    if !compressed {
        return Ok(raw.into_owned());
    }

    let mut content = Vec::new();
    DeflateDecoder::new(&*raw).read_to_end(&mut content)?;
    log::trace!("inflated {} bytes into {} bytes", raw.len(), content.len());

    Ok(content)
}
